use crate::stream::Stream;

impl<A:Clone+Send+'static> Stream<A> {
    /// `a` repeated forever.
    pub fn constant(a: A) -> Stream<A> {
        Stream::unfold(a, |a: A| Some((a.clone(), a)))
    }
}

impl Stream<i64> {
    /// Successive integers starting at `n`.
    pub fn from(n: i64) -> Stream<i64> {
        Stream::unfold(n, |n: i64| Some((n, n + 1)))
    }

    pub fn ones() -> Stream<i64> {
        Stream::constant(1)
    }
}

impl Stream<u64> {
    /// 0, 1, 1, 2, 3, 5, ... ending with the last Fibonacci number that
    /// fits in a `u64`.
    pub fn fibs() -> Stream<u64> {
        Stream::unfold(
            Some((0, Some(1))),
            |state_op: Option<(u64, Option<u64>)>| {
                let (current, next_op) = state_op?;
                let state_op = next_op.map(|next: u64| (next, current.checked_add(next)));
                Some((current, state_op))
            }
        )
    }
}
