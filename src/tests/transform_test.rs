use crate::Stream;
use crate::tests::count;
use crate::tests::counting_from;
use crate::tests::init;

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[test]
fn take() {
    init();
    assert_eq!(stream![1, 2, 3].take(2).to_vec(), vec![1, 2]);
    assert_eq!(stream![1, 2, 3].take(10).to_vec(), vec![1, 2, 3]);
    assert!(stream![1, 2, 3].take(0).is_empty());
    assert_eq!(Stream::from(0).take(3).to_vec(), vec![0, 1, 2]);
}

#[test]
fn take_forces_only_what_it_returns() {
    init();
    let counter = Arc::new(AtomicUsize::new(0));
    let s = counting_from(&counter, 0);
    let taken = s.take(0);
    assert!(taken.is_empty());
    assert_eq!(count(&counter), 1);
    assert_eq!(s.take(3).to_vec(), vec![0, 1, 2]);
    assert_eq!(count(&counter), 3);
}

#[test]
fn drop() {
    init();
    assert_eq!(stream![1, 2, 3].drop(1).to_vec(), vec![2, 3]);
    assert_eq!(stream![1, 2, 3].drop(0).to_vec(), vec![1, 2, 3]);
    assert!(stream![1, 2, 3].drop(5).is_empty());
    assert_eq!(Stream::from(0).drop(10).head_option(), Some(10));
}

#[test]
fn drop_forces_exactly_the_skipped_links() {
    init();
    let counter = Arc::new(AtomicUsize::new(0));
    let rest = counting_from(&counter, 0).drop(5);
    assert_eq!(count(&counter), 6);
    assert_eq!(rest.head_option(), Some(5));
    assert_eq!(count(&counter), 6);
}

#[test]
fn take_and_drop_reassemble() {
    init();
    let s = stream![1, 2, 3, 4, 5];
    for n in 0..=5 {
        let rest = s.drop(n);
        assert_eq!(s.take(n).append(move || rest).to_vec(), vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn take_while() {
    init();
    assert_eq!(Stream::from(0).take_while(|a: &i64| *a < 4).to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(stream![1, 2, 3].take_while(|a: &i32| *a < 10).to_vec(), vec![1, 2, 3]);
    assert!(stream![5, 1].take_while(|a: &i32| *a < 3).is_empty());
    assert_eq!(stream![1, 5, 1].take_while(|a: &i32| *a < 3).to_vec(), vec![1]);
}

#[test]
fn take_while_agrees_with_fold_right() {
    init();
    let s = stream![2, 4, 5, 6, 8];
    let pred = |a: &i32| a % 2 == 0;
    let folded = s.fold_right(Vec::new(), |a: &i32, rest: &dyn Fn()->Vec<i32>| {
        if pred(a) {
            let mut result = vec![*a];
            result.extend(rest());
            result
        } else {
            Vec::new()
        }
    });
    assert_eq!(s.take_while(pred).to_vec(), folded);
}

#[test]
fn map_is_lazy_and_memoized() {
    init();
    let counter = Arc::new(AtomicUsize::new(0));
    let mapped: Stream<i32>;
    {
        let counter = counter.clone();
        mapped = stream![1, 2, 3].map(move |a: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            a * 10
        });
    }
    assert_eq!(count(&counter), 0);
    assert_eq!(mapped.head_option(), Some(10));
    assert_eq!(mapped.head_option(), Some(10));
    assert_eq!(count(&counter), 1);
    assert_eq!(mapped.to_vec(), vec![10, 20, 30]);
    assert_eq!(count(&counter), 3);
    assert_eq!(Stream::from(1).map(|a: &i64| a * a).take(4).to_vec(), vec![1, 4, 9, 16]);
}

#[test]
fn filter() {
    init();
    assert_eq!(stream![1, 2, 3, 4].filter(|a: &i32| a % 2 == 0).to_vec(), vec![2, 4]);
    assert!(stream![1, 3].filter(|a: &i32| a % 2 == 0).is_empty());
    let evens = Stream::from(0).filter(|a: &i64| a % 2 == 0);
    assert_eq!(evens.take(3).to_vec(), vec![0, 2, 4]);
}

#[test]
fn filter_scans_only_to_the_next_match() {
    init();
    let counter = Arc::new(AtomicUsize::new(0));
    let multiples = counting_from(&counter, 1).filter(|a: &i64| a % 5 == 0);
    assert_eq!(count(&counter), 5);
    assert_eq!(multiples.take(2).to_vec(), vec![5, 10]);
    assert_eq!(count(&counter), 10);
}

#[test]
fn append_defers_other() {
    init();
    let counter = Arc::new(AtomicUsize::new(0));
    let appended: Stream<i32>;
    {
        let counter = counter.clone();
        appended = stream![1, 2].append(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            stream![3]
        });
    }
    assert_eq!(appended.take(2).to_vec(), vec![1, 2]);
    assert_eq!(count(&counter), 0);
    assert_eq!(appended.to_vec(), vec![1, 2, 3]);
    assert_eq!(count(&counter), 1);
    assert_eq!(Stream::empty().append(|| stream![7]).to_vec(), vec![7]);
    assert_eq!(Stream::from(0).append(|| stream![-1]).take(2).to_vec(), vec![0, 1]);
}

#[test]
fn flat_map() {
    init();
    let s = stream![1, 2, 3].flat_map(|a: &i32| stream![*a, *a * 10]);
    assert_eq!(s.to_vec(), vec![1, 10, 2, 20, 3, 30]);
    let evens = stream![1, 2, 3, 4].flat_map(|a: &i32| if a % 2 == 0 { stream![*a] } else { Stream::empty() });
    assert_eq!(evens.to_vec(), vec![2, 4]);
    let repeated = Stream::from(1).flat_map(|n: &i64| Stream::constant(*n).take(*n as usize));
    assert_eq!(repeated.take(6).to_vec(), vec![1, 2, 2, 3, 3, 3]);
}

#[test]
fn zip_with() {
    init();
    let sums = stream![1, 2, 3].zip_with(&stream![10, 20], |a: &i32, b: &i32| a + b);
    assert_eq!(sums.to_vec(), vec![11, 22]);
    let counted = Stream::from(0).zip_with(&Stream::ones(), |a: &i64, b: &i64| a + b);
    assert_eq!(counted.take(3).to_vec(), vec![1, 2, 3]);
    assert_eq!(stream![1, 2].zip(&stream!['a', 'b', 'c']).to_vec(), vec![(1, 'a'), (2, 'b')]);
}

#[test]
fn zip_all() {
    init();
    let zipped = stream![1, 2].zip_all(&stream!["a", "b", "c"]);
    assert_eq!(
        zipped.to_vec(),
        vec![(Some(1), Some("a")), (Some(2), Some("b")), (None, Some("c"))]
    );
    let zipped = stream![1, 2, 3].zip_all(&stream![4]);
    assert_eq!(zipped.to_vec(), vec![(Some(1), Some(4)), (Some(2), None), (Some(3), None)]);
    assert!(Stream::<i32>::empty().zip_all(&Stream::<i32>::empty()).is_empty());
}

#[test]
fn zip_with_all() {
    init();
    let sums = stream![1, 2, 3].zip_with_all(&stream![10], |a_op: Option<i32>, b_op: Option<i32>| {
        a_op.unwrap_or(0) + b_op.unwrap_or(0)
    });
    assert_eq!(sums.to_vec(), vec![11, 2, 3]);
}

#[test]
fn starts_with() {
    init();
    assert!(stream![1, 2, 3].starts_with(&stream![1, 2]));
    assert!(stream![1, 2, 3].starts_with(&stream![1, 2, 3]));
    assert!(!stream![1, 2, 3].starts_with(&stream![1, 2, 3, 4]));
    assert!(!stream![1, 2, 3].starts_with(&stream![2]));
    assert!(stream![1, 2, 3].starts_with(&Stream::empty()));
    assert!(!Stream::empty().starts_with(&stream![1]));
    assert!(Stream::from(0).starts_with(&stream![0, 1, 2]));
    assert!(!Stream::from(0).starts_with(&Stream::from(1)));
}

#[test]
fn tails() {
    init();
    let suffixes: Vec<Vec<i32>> =
        stream![1, 2, 3]
            .tails()
            .to_vec()
            .iter()
            .map(|suffix: &Stream<i32>| suffix.to_vec())
            .collect();
    assert_eq!(suffixes, vec![vec![1, 2, 3], vec![2, 3], vec![3], vec![]]);
    assert_eq!(Stream::<i32>::empty().tails().to_vec().len(), 1);
    let heads = Stream::from(0).tails().map(|suffix: &Stream<i64>| suffix.head_option());
    assert_eq!(heads.take(3).to_vec(), vec![Some(0), Some(1), Some(2)]);
}

#[test]
fn scan_right() {
    init();
    let sums = stream![1, 2, 3].scan_right(0, |a: &i32, b: &i32| a + b);
    assert_eq!(sums.to_vec(), vec![6, 5, 3, 0]);
    assert_eq!(Stream::<i32>::empty().scan_right(0, |a: &i32, b: &i32| a + b).to_vec(), vec![0]);
}

#[test]
fn has_subsequence() {
    init();
    assert!(stream![1, 2, 3, 4].has_subsequence(&stream![2, 3]));
    assert!(!stream![1, 2, 3, 4].has_subsequence(&stream![3, 2]));
    assert!(stream![1, 2].has_subsequence(&Stream::empty()));
    assert!(Stream::from(0).has_subsequence(&stream![5, 6]));
}
