mod transform_test;

use crate::Stream;

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Successive integers from `n`, counting every step the generator runs.
pub fn counting_from(counter: &Arc<AtomicUsize>, n: i64) -> Stream<i64> {
    let counter = counter.clone();
    Stream::unfold(n, move |n: i64| {
        counter.fetch_add(1, Ordering::SeqCst);
        Some((n, n + 1))
    })
}

pub fn count(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
