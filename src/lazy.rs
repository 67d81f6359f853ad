use log::trace;
use log::warn;

use std::fmt;
use std::mem;
use std::sync::Arc;
use std::sync::Mutex;

/// A memoizing thunk.
///
/// The wrapped computation runs at most once, on the first call to [`Lazy::run`].
/// Clones share the same cell, so a value forced through one clone is cached
/// for all of them. The cell's mutex is held while the computation runs, which
/// serializes racing forces from different threads.
///
/// If the computation panics the cell is left poisoned: the panic reaches the
/// first caller and every later `run` panics without re-running it.
///
/// The cell's state can only move from unevaluated to evaluated; it is not
/// reachable from outside:
///
/// ```compile_fail
/// use lazy_stream::LazyData;
/// ```
pub struct Lazy<A> {
    data: Arc<Mutex<LazyData<A>>>
}

impl<A> Clone for Lazy<A> {
    fn clone(&self) -> Self {
        Lazy {
            data: self.data.clone()
        }
    }
}

enum LazyData<A> {
    Thunk(Box<dyn FnOnce()->A+Send>),
    Value(A),
    // Set while the thunk runs. Only observable afterwards if the thunk panicked.
    Poisoned
}

impl<A> Lazy<A> {
    pub fn new<THUNK:FnOnce()->A+Send+'static>(thunk: THUNK) -> Lazy<A> {
        Lazy {
            data: Arc::new(Mutex::new(LazyData::Thunk(Box::new(thunk))))
        }
    }

    pub fn of_value(value: A) -> Lazy<A> {
        Lazy {
            data: Arc::new(Mutex::new(LazyData::Value(value)))
        }
    }

    /// Forces the cell and returns a clone of the cached value.
    pub fn run(&self) -> A where A: Clone {
        self.with_data(|data: &mut LazyData<A>| {
            if let LazyData::Thunk(_) = data {
                if let LazyData::Thunk(thunk) = mem::replace(data, LazyData::Poisoned) {
                    trace!("Lazy: evaluating thunk");
                    *data = LazyData::Value(thunk());
                }
            }
            match data {
                LazyData::Value(value) => value.clone(),
                LazyData::Thunk(_) | LazyData::Poisoned => {
                    panic!("Lazy value poisoned: its computation panicked on an earlier force.")
                }
            }
        })
    }

    pub fn is_evaluated(&self) -> bool {
        self.with_data(|data: &mut LazyData<A>| {
            match data {
                LazyData::Value(_) => true,
                _ => false
            }
        })
    }

    /// Gives `k` the cached value if there is one. Never forces.
    pub fn with_value_op<R,K:FnOnce(Option<&A>)->R>(&self, k: K) -> R {
        self.with_data(|data: &mut LazyData<A>| {
            match data {
                LazyData::Value(value) => k(Some(&*value)),
                _ => k(None)
            }
        })
    }

    /// A new cell that applies `f` to this cell's value when forced.
    pub fn map<B,FN:FnOnce(A)->B+Send+'static>(&self, f: FN) -> Lazy<B> where A: Clone+Send+'static {
        let self_ = self.clone();
        Lazy::new(move || f(self_.run()))
    }

    // Mutable access to the cached value, only when this is the last handle on the cell.
    pub(crate) fn value_mut(&mut self) -> Option<&mut A> {
        let mutex = Arc::get_mut(&mut self.data)?;
        match mutex.get_mut() {
            Ok(LazyData::Value(value)) => Some(value),
            _ => None
        }
    }

    fn with_data<R,K:FnOnce(&mut LazyData<A>)->R>(&self, k: K) -> R {
        let mut l = match self.data.lock() {
            Ok(l) => l,
            Err(poisoned) => {
                warn!("Lazy: forcing a cell whose computation panicked");
                poisoned.into_inner()
            }
        };
        let data: &mut LazyData<A> = &mut l;
        k(data)
    }
}

impl<A:fmt::Debug> fmt::Debug for Lazy<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.with_value_op(|value_op: Option<&A>| {
            match value_op {
                Some(value) => write!(f, "Lazy({:?})", value),
                None => write!(f, "Lazy(<unevaluated>)")
            }
        })
    }
}
