//! `gyre` - immutable, fixed-length circular sequences.
//!
//! The central type is [`ring::Ring<T>`]: a non-empty backing sequence plus a
//! rotation offset. Rotating a ring is O(1) and never copies element data;
//! indexing is total for every `isize`; and the canonical-form machinery
//! (Booth's least-rotation algorithm) makes rotation-invariant comparison a
//! linear-time operation.

pub mod ring;

/// ### -> `ring!` - build a `Ring<T>` from a literal list at compile time.
///
/// This is a convenience layer over [`ring::Ring::from_vec_unchecked`]: the
/// emptiness check moves from run time to build time. `ring![]` with no
/// elements fails compilation, so a ring constructed through this macro can
/// never violate the non-empty invariant.
///
/// ### -> `Usage`
///
/// ```
/// use gyre::ring::prelude::*;
///
/// let r = gyre::ring![1, 2, 3];
/// assert_eq!(r.length(), 3);
/// assert_eq!(*r.head(), 1);
/// ```
#[macro_export]
macro_rules! ring {
    () => {
        compile_error!("a ring must contain at least one element")
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ring::Ring::from_vec_unchecked(vec![$($value),+])
    };
}
