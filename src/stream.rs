use crate::lazy::Lazy;

use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::sync::Arc;

/// A lazy, memoized, possibly infinite sequence.
///
/// A `Node` holds its head and its tail in separate [`Lazy`] cells, so each is
/// computed on first use and cached afterwards. Cloning a stream shares those
/// cells.
pub enum Stream<A> {
    Empty,
    Node(Lazy<A>, Lazy<Stream<A>>)
}

impl<A> Clone for Stream<A> {
    fn clone(&self) -> Self {
        match self {
            Stream::Empty => Stream::Empty,
            Stream::Node(head, tail) => Stream::Node(head.clone(), tail.clone())
        }
    }
}

impl<A> Default for Stream<A> {
    fn default() -> Self {
        Stream::Empty
    }
}

impl<A:Send+'static> Stream<A> {
    pub fn empty() -> Stream<A> {
        Stream::Empty
    }

    /// Builds a node from two thunks without running either.
    pub fn cons<H,T>(head: H, tail: T) -> Stream<A>
    where
        H: FnOnce()->A+Send+'static,
        T: FnOnce()->Stream<A>+Send+'static
    {
        Stream::Node(Lazy::new(head), Lazy::new(tail))
    }

    pub fn of(values: Vec<A>) -> Stream<A> {
        let mut result = Stream::Empty;
        for value in values.into_iter().rev() {
            result = Stream::Node(Lazy::of_value(value), Lazy::of_value(result));
        }
        result
    }

    /// The general corecursive generator.
    ///
    /// `step` is applied to `seed` to produce the first node; every following
    /// step runs only when the tail before it is forced.
    pub fn unfold<S,STEP>(seed: S, step: STEP) -> Stream<A>
    where
        S: Send+'static,
        STEP: Fn(S)->Option<(A,S)>+Send+Sync+'static
    {
        Stream::unfold_shared(seed, Arc::new(step))
    }

    fn unfold_shared<S,STEP>(seed: S, step: Arc<STEP>) -> Stream<A>
    where
        S: Send+'static,
        STEP: Fn(S)->Option<(A,S)>+Send+Sync+'static
    {
        match step(seed) {
            None => Stream::Empty,
            Some((value, next_seed)) => {
                Stream::Node(
                    Lazy::of_value(value),
                    Lazy::new(move || Stream::unfold_shared(next_seed, step))
                )
            }
        }
    }
}

impl<A> Stream<A> {
    pub fn is_empty(&self) -> bool {
        match self {
            Stream::Empty => true,
            Stream::Node(_, _) => false
        }
    }

    /// The head cell, unforced.
    pub fn head(&self) -> Option<Lazy<A>> {
        match self {
            Stream::Empty => None,
            Stream::Node(head, _) => Some(head.clone())
        }
    }

    /// The tail cell, unforced.
    pub fn tail(&self) -> Option<Lazy<Stream<A>>> {
        match self {
            Stream::Empty => None,
            Stream::Node(_, tail) => Some(tail.clone())
        }
    }

    pub fn iter(&self) -> Iter<A> {
        Iter::new(self.clone())
    }

    // Detaches an already forced tail that nothing else shares.
    fn unlink(&mut self) -> Option<Stream<A>> {
        match self {
            Stream::Empty => None,
            Stream::Node(_, tail) => tail.value_mut().map(|next: &mut Stream<A>| mem::replace(next, Stream::Empty))
        }
    }
}

// A long forced stream would otherwise drop one nested node per stack frame.
impl<A> Drop for Stream<A> {
    fn drop(&mut self) {
        let mut next_op = self.unlink();
        while let Some(mut next) = next_op {
            next_op = next.unlink();
        }
    }
}

/// Yields one head per call to `next`. The tail behind a yielded head is
/// only forced by the following call.
pub struct Iter<A> {
    pending_op: Option<Lazy<Stream<A>>>
}

impl<A> Iter<A> {
    fn new(stream: Stream<A>) -> Iter<A> {
        Iter { pending_op: Some(Lazy::of_value(stream)) }
    }
}

impl<A:Clone> Iterator for Iter<A> {
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let stream = self.pending_op.take()?.run();
        let value_op =
            match &stream {
                Stream::Empty => None,
                Stream::Node(head, tail) => {
                    self.pending_op = Some(tail.clone());
                    Some(head.run())
                }
            };
        value_op
    }
}

impl<'a, A:Clone> IntoIterator for &'a Stream<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Iter<A> {
        self.iter()
    }
}

impl<A:Clone> IntoIterator for Stream<A> {
    type Item = A;
    type IntoIter = Iter<A>;

    fn into_iter(self) -> Iter<A> {
        Iter::new(self)
    }
}

impl<A:Send+'static> FromIterator<A> for Stream<A> {
    fn from_iter<I:IntoIterator<Item=A>>(iter: I) -> Self {
        Stream::of(iter.into_iter().collect())
    }
}

/// Equality forces both streams until they differ, so it only terminates
/// when at least one side is finite or they differ somewhere.
impl<A:Clone+PartialEq> PartialEq for Stream<A> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

/// Shows the evaluated prefix only. An unforced head prints as `?` and an
/// unforced tail as `..`.
impl<A:fmt::Debug> fmt::Debug for Stream<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Stream[")?;
        let mut stream = self.clone();
        let mut first = true;
        loop {
            let next_op: Option<Stream<A>> =
                match &stream {
                    Stream::Empty => None,
                    Stream::Node(head, tail) => {
                        if !first {
                            write!(f, ", ")?;
                        }
                        first = false;
                        head.with_value_op(|value_op: Option<&A>| {
                            match value_op {
                                Some(value) => write!(f, "{:?}", value),
                                None => write!(f, "?")
                            }
                        })?;
                        let next_op = tail.with_value_op(|next_op: Option<&Stream<A>>| next_op.cloned());
                        if next_op.is_none() {
                            write!(f, ", ..")?;
                        }
                        next_op
                    }
                };
            match next_op {
                Some(next) => stream = next,
                None => break
            }
        }
        write!(f, "]")
    }
}
