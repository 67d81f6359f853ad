use crate::lazy::Lazy;
use crate::stream::Stream;

use std::sync::Arc;

impl<A:Clone+Send+'static> Stream<A> {
    /// At most the first `n` elements. Forces nothing of the source.
    pub fn take(&self, n: usize) -> Stream<A> {
        match self {
            Stream::Node(head, _) if n == 1 => Stream::Node(head.clone(), Lazy::of_value(Stream::Empty)),
            Stream::Node(head, tail) if n > 1 => {
                let tail = tail.clone();
                Stream::Node(head.clone(), Lazy::new(move || tail.run().take(n - 1)))
            }
            _ => Stream::Empty
        }
    }

    /// Skips `n` elements, forcing exactly the tails it skips.
    pub fn drop(&self, n: usize) -> Stream<A> {
        let mut stream = self.clone();
        for _ in 0..n {
            let next =
                match &stream {
                    Stream::Empty => break,
                    Stream::Node(_, tail) => tail.run()
                };
            stream = next;
        }
        stream
    }

    pub fn take_while<PRED:Fn(&A)->bool+Send+Sync+'static>(&self, pred: PRED) -> Stream<A> {
        Stream::take_while_shared(self, Arc::new(pred))
    }

    fn take_while_shared<PRED:Fn(&A)->bool+Send+Sync+'static>(stream: &Stream<A>, pred: Arc<PRED>) -> Stream<A> {
        match stream {
            Stream::Empty => Stream::Empty,
            Stream::Node(head, tail) => {
                if !pred(&head.run()) {
                    return Stream::Empty;
                }
                let tail = tail.clone();
                Stream::Node(head.clone(), Lazy::new(move || Stream::take_while_shared(&tail.run(), pred)))
            }
        }
    }

    pub fn map<B,FN>(&self, f: FN) -> Stream<B>
    where
        B: Send+'static,
        FN: Fn(&A)->B+Send+Sync+'static
    {
        Stream::map_shared(self, Arc::new(f))
    }

    fn map_shared<B,FN>(stream: &Stream<A>, f: Arc<FN>) -> Stream<B>
    where
        B: Send+'static,
        FN: Fn(&A)->B+Send+Sync+'static
    {
        match stream {
            Stream::Empty => Stream::Empty,
            Stream::Node(head, tail) => {
                let f2 = f.clone();
                let head = head.clone();
                let tail = tail.clone();
                Stream::cons(
                    move || f2(&head.run()),
                    move || Stream::map_shared(&tail.run(), f)
                )
            }
        }
    }

    /// Scans up to the first element passing `pred` when called, then one
    /// match further each time a tail is forced. Never returns if no element
    /// of an infinite stream passes.
    pub fn filter<PRED:Fn(&A)->bool+Send+Sync+'static>(&self, pred: PRED) -> Stream<A> {
        Stream::filter_shared(self.clone(), Arc::new(pred))
    }

    fn filter_shared<PRED:Fn(&A)->bool+Send+Sync+'static>(stream: Stream<A>, pred: Arc<PRED>) -> Stream<A> {
        let mut stream = stream;
        loop {
            let next =
                match &stream {
                    Stream::Empty => return Stream::Empty,
                    Stream::Node(head, tail) => {
                        if pred(&head.run()) {
                            let tail = tail.clone();
                            return Stream::Node(
                                head.clone(),
                                Lazy::new(move || Stream::filter_shared(tail.run(), pred))
                            );
                        }
                        tail.run()
                    }
                };
            stream = next;
        }
    }

    /// `self` followed by the stream `other` produces. `other` runs only
    /// once `self` is exhausted.
    pub fn append<OTHER:FnOnce()->Stream<A>+Send+'static>(&self, other: OTHER) -> Stream<A> {
        Stream::append_lazy(self, Lazy::new(other))
    }

    fn append_lazy(stream: &Stream<A>, other: Lazy<Stream<A>>) -> Stream<A> {
        match stream {
            Stream::Empty => other.run(),
            Stream::Node(head, tail) => {
                let tail = tail.clone();
                Stream::Node(head.clone(), Lazy::new(move || Stream::append_lazy(&tail.run(), other)))
            }
        }
    }

    pub fn flat_map<B,FN>(&self, f: FN) -> Stream<B>
    where
        B: Clone+Send+'static,
        FN: Fn(&A)->Stream<B>+Send+Sync+'static
    {
        Stream::flat_map_shared(self.clone(), Arc::new(f))
    }

    fn flat_map_shared<B,FN>(stream: Stream<A>, f: Arc<FN>) -> Stream<B>
    where
        B: Clone+Send+'static,
        FN: Fn(&A)->Stream<B>+Send+Sync+'static
    {
        let mut stream = stream;
        loop {
            let next =
                match &stream {
                    Stream::Empty => return Stream::Empty,
                    Stream::Node(head, tail) => {
                        let inner = f(&head.run());
                        if !inner.is_empty() {
                            let tail = tail.clone();
                            return Stream::append_lazy(
                                &inner,
                                Lazy::new(move || Stream::flat_map_shared(tail.run(), f))
                            );
                        }
                        tail.run()
                    }
                };
            stream = next;
        }
    }

    /// Pairwise combination, as long as the shorter stream.
    pub fn zip_with<B,C,FN>(&self, other: &Stream<B>, f: FN) -> Stream<C>
    where
        B: Clone+Send+'static,
        C: Send+'static,
        FN: Fn(&A,&B)->C+Send+Sync+'static
    {
        Stream::unfold(
            (Lazy::of_value(self.clone()), Lazy::of_value(other.clone())),
            move |(lhs, rhs): (Lazy<Stream<A>>, Lazy<Stream<B>>)| {
                match (&lhs.run(), &rhs.run()) {
                    (Stream::Node(lhs_head, lhs_tail), Stream::Node(rhs_head, rhs_tail)) => {
                        Some((f(&lhs_head.run(), &rhs_head.run()), (lhs_tail.clone(), rhs_tail.clone())))
                    }
                    _ => None
                }
            }
        )
    }

    pub fn zip<B:Clone+Send+'static>(&self, other: &Stream<B>) -> Stream<(A,B)> {
        self.zip_with(other, |a: &A, b: &B| (a.clone(), b.clone()))
    }

    /// Pairwise combination, as long as the longer stream. The exhausted side
    /// is passed as `None`.
    pub fn zip_with_all<B,C,FN>(&self, other: &Stream<B>, f: FN) -> Stream<C>
    where
        B: Clone+Send+'static,
        C: Send+'static,
        FN: Fn(Option<A>,Option<B>)->C+Send+Sync+'static
    {
        Stream::unfold(
            (Lazy::of_value(self.clone()), Lazy::of_value(other.clone())),
            move |(lhs, rhs): (Lazy<Stream<A>>, Lazy<Stream<B>>)| {
                let (lhs_op, lhs_next) = split(&lhs.run());
                let (rhs_op, rhs_next) = split(&rhs.run());
                if lhs_op.is_none() && rhs_op.is_none() {
                    return None;
                }
                Some((f(lhs_op, rhs_op), (lhs_next, rhs_next)))
            }
        )
    }

    pub fn zip_all<B:Clone+Send+'static>(&self, other: &Stream<B>) -> Stream<(Option<A>,Option<B>)> {
        self.zip_with_all(other, |a_op: Option<A>, b_op: Option<B>| (a_op, b_op))
    }

    /// True if `prefix` is a prefix of `self`. Stops at the first mismatch or
    /// when `prefix` runs out, so `self` may be infinite.
    pub fn starts_with(&self, prefix: &Stream<A>) -> bool where A: PartialEq {
        self.zip_all(prefix)
            .take_while(|pair: &(Option<A>,Option<A>)| pair.1.is_some())
            .for_all(|pair: &(Option<A>,Option<A>)| pair.0 == pair.1)
    }

    /// Every suffix, from `self` itself down to the empty stream.
    pub fn tails(&self) -> Stream<Stream<A>> {
        Stream::unfold(
            Some(Lazy::of_value(self.clone())),
            |cell_op: Option<Lazy<Stream<A>>>| {
                let stream = cell_op?.run();
                let next_op = stream.tail();
                Some((stream, next_op))
            }
        )
    }

    pub fn has_subsequence(&self, sub: &Stream<A>) -> bool where A: PartialEq {
        self.tails().exists(|suffix: &Stream<A>| suffix.starts_with(sub))
    }

    /// The intermediate results of a right fold, in the order of `tails`.
    /// The last element is `zero`. Forces the whole of `self`.
    pub fn scan_right<B,FN>(&self, zero: B, f: FN) -> Stream<B>
    where
        B: Clone+Send+'static,
        FN: Fn(&A,&B)->B
    {
        let values = self.to_vec();
        let mut results: Vec<B> = Vec::with_capacity(values.len() + 1);
        let mut acc = zero;
        results.push(acc.clone());
        for value in values.iter().rev() {
            acc = f(value, &acc);
            results.push(acc.clone());
        }
        results.reverse();
        Stream::of(results)
    }
}

// The forced head and the unforced tail cell. An empty stream stays empty.
fn split<A:Clone>(stream: &Stream<A>) -> (Option<A>, Lazy<Stream<A>>) {
    match stream {
        Stream::Empty => (None, Lazy::of_value(Stream::Empty)),
        Stream::Node(head, tail) => (Some(head.run()), tail.clone())
    }
}
