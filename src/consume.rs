use crate::stream::Stream;

use log::trace;

impl<A:Clone> Stream<A> {
    /// Forces every node. Does not terminate on an infinite stream.
    pub fn to_vec(&self) -> Vec<A> {
        let result: Vec<A> = self.iter().collect();
        trace!("Stream: materialized {} elements", result.len());
        result
    }

    pub fn head_option(&self) -> Option<A> {
        match self {
            Stream::Empty => None,
            Stream::Node(head, _) => Some(head.run())
        }
    }

    /// Forces heads front to back and stops at the first match.
    pub fn find<PRED:Fn(&A)->bool>(&self, pred: PRED) -> Option<A> {
        let mut stream = self.clone();
        loop {
            let next =
                match &stream {
                    Stream::Empty => return None,
                    Stream::Node(head, tail) => {
                        let value = head.run();
                        if pred(&value) {
                            return Some(value);
                        }
                        tail.run()
                    }
                };
            stream = next;
        }
    }

    /// Lazy right fold.
    ///
    /// `f` gets the forced head and a callable computing the fold of the rest.
    /// The rest is only forced if `f` calls it, so a fold that stops early
    /// also works on an infinite stream. Each call to the callable
    /// recurses one level deeper, so very long folds use proportional stack.
    pub fn fold_right<B,FN>(&self, zero: B, f: FN) -> B
    where
        B: Clone,
        FN: Fn(&A, &dyn Fn()->B)->B
    {
        self.fold_right_ref(&zero, &f)
    }

    fn fold_right_ref<B,FN>(&self, zero: &B, f: &FN) -> B
    where
        B: Clone,
        FN: Fn(&A, &dyn Fn()->B)->B
    {
        match self {
            Stream::Empty => zero.clone(),
            Stream::Node(head, tail) => {
                let rest: &dyn Fn()->B = &|| tail.run().fold_right_ref(zero, f);
                f(&head.run(), rest)
            }
        }
    }

    /// Same result as `fold_right(false, |a, rest| pred(a) || rest())`, but
    /// walks the spine in a loop, so a match far down an infinite stream is
    /// still found.
    pub fn exists<PRED:Fn(&A)->bool>(&self, pred: PRED) -> bool {
        self.find(pred).is_some()
    }

    /// Stops at the first element failing `pred`. Does not terminate on an
    /// infinite stream where every element passes.
    pub fn for_all<PRED:Fn(&A)->bool>(&self, pred: PRED) -> bool {
        self.find(|a: &A| !pred(a)).is_none()
    }
}
