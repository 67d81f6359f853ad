mod consume;
mod generators;
mod lazy;
mod stream;
mod transform;

pub use crate::lazy::Lazy;
pub use crate::stream::Iter;
pub use crate::stream::Stream;

/// A finite stream from a list of elements.
///
/// ```
/// use lazy_stream::stream;
///
/// let s = stream![1, 2, 3];
/// assert_eq!(s.to_vec(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! stream {
    () => {
        $crate::Stream::empty()
    };
    ( $( $x:expr ),+ $(,)? ) => {
        $crate::Stream::of(vec![ $( $x ),+ ])
    };
}

#[cfg(test)]
mod tests;
