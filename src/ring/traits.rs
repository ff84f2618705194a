
use std::cmp::Ordering;

/// ### -> `Length Trait`.
///
/// Length access and length-based comparison for rings. The length of a ring
/// is fixed at construction and is always at least 1, so `length()` can never
/// return 0.
///
/// ### -> `Methods`
/// - `length() -> usize`: The number of elements in the ring.
/// - `length_eq(other) -> bool`: Whether two rings have the same length.
/// - `length_cmp(other) -> Option<Ordering>`: Ordering of the two lengths.
pub trait Length {
    fn length(&self) -> usize;

    fn length_eq(&self, other: &Self) -> bool {
        self.length() == other.length()
    }

    fn length_cmp(&self, other: &Self) -> Option<Ordering> {
        self.length().partial_cmp(&other.length())
    }
}

/// ### -> `Rotate<T> Trait`.
///
/// O(1) rotation of a ring. Rotation never copies element data: the result is
/// a new ring sharing the same backing storage with a recomputed offset. Both
/// directions are total for every `isize` amount, including negative amounts
/// and amounts exceeding the length; the offset arithmetic is negative-safe
/// (`rem_euclid`), so the stored offset always lands in `[0, length)`.
///
/// Direction follows `slice::rotate_right`/`rotate_left`: rotating
/// `[1, 2, 3]` right by 1 reads `3, 1, 2`, rotating it left by 1 reads
/// `2, 3, 1`. Rotating right by `n` then left by `n` restores the original
/// view, and consecutive rotations compose additively modulo the length.
///
/// ### -> `Methods`
/// - `rotate_right(n) -> Self`: New ring with the window shifted right.
/// - `rotate_left(n) -> Self`: New ring with the window shifted left.
/// - `rotate_to_minimum_by(compare) -> Self`: New ring whose offset is the
///   physical index of the minimal element under `compare`, ties broken by
///   the leftmost position in storage order.
/// - `rotate_to_maximum_by(compare) -> Self`: Same, for the maximal element.
///
/// ### -> `Usage`
///
/// ```
/// use gyre::ring::prelude::*;
///
/// let r = gyre::ring![1, 2, 3];
/// assert_eq!(r.rotate_right(1).to_vec(), vec![3, 1, 2]);
/// assert_eq!(r.rotate_left(1).to_vec(), vec![2, 3, 1]);
/// ```
pub trait Rotate<T>: Length + Sized {
    fn rotate_right(&self, n: isize) -> Self;

    fn rotate_left(&self, n: isize) -> Self;

    #[must_use = "Rotation produces a new ring and leaves the original untouched!"]
    fn rotate_to_minimum_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering;

    #[must_use = "Rotation produces a new ring and leaves the original untouched!"]
    fn rotate_to_maximum_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// ### -> `Fold<T> Trait`.
///
/// Folds and specialized folds over the logical order of a ring. Every fold
/// traverses logical indices `0..length` (or the reverse, for the right
/// fold); because a ring is never empty, the seedless variants (`fold1`,
/// `minimum`, `maximum`) are total and need no `Option` in their result.
///
/// `fold` is the right fold (combines from logical index `length - 1` down
/// to 0), `fold_strict` the left fold (index 0 upward). For associative and
/// commutative combining functions the two agree with each other and with
/// the `sum`/`product` built-ins; otherwise the declared traversal order is
/// observable.
///
/// ### -> `Methods`
/// - `fold(init, combine) -> B`: Right fold, `combine(element, accumulator)`.
/// - `fold_strict(init, combine) -> B`: Strict left fold,
///   `combine(accumulator, element)`.
/// - `fold1(combine) -> T`: Left fold seeded with the head element.
/// - `all(predicate)` / `any(predicate)`: Short-circuiting predicates over
///   logical order.
/// - `sum()` / `product()`: Numeric reductions over cloned elements.
/// - `minimum()` / `maximum()`: Extremes under `T: Ord`.
/// - `minimum_by(compare)` / `maximum_by(compare)`: Extremes under a caller
///   comparison, ties broken by the leftmost logical occurrence.
pub trait Fold<T>: Length {
    fn fold<B, F>(&self, init: B, combine: F) -> B
    where
        F: FnMut(&T, B) -> B;

    fn fold_strict<B, F>(&self, init: B, combine: F) -> B
    where
        F: FnMut(B, &T) -> B;

    fn fold1<F>(&self, combine: F) -> T
    where
        T: Clone,
        F: FnMut(T, &T) -> T;

    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    fn sum(&self) -> T
    where
        T: Clone + std::iter::Sum<T>;

    fn product(&self) -> T
    where
        T: Clone + std::iter::Product<T>;

    fn minimum(&self) -> &T
    where
        T: Ord;

    fn maximum(&self) -> &T
    where
        T: Ord;

    fn minimum_by<F>(&self, compare: F) -> &T
    where
        F: FnMut(&T, &T) -> Ordering;

    fn maximum_by<F>(&self, compare: F) -> &T
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// ### -> `Canonical<T> Trait`.
///
/// Canonical-form operations: normalizing a ring so that its logical order
/// starts at the lexicographically minimal rotation, and the rotation-
/// invariant equivalence built on top of that normal form. Both require a
/// total order on the element type - the least-rotation computation compares
/// elements, so `T: Ord` is demanded at this API boundary rather than
/// checked at run time.
///
/// `==` on rings deliberately does NOT treat rotations as equal; that is the
/// job of `equivalent`.
///
/// ### -> `Methods`
/// - `canonise() -> Self`: New ring over the same backing storage whose
///   offset is the least-rotation start, so reading from logical index 0
///   yields the minimal rotation. Idempotent: canonising a canonical ring
///   changes nothing observable.
/// - `equivalent(other) -> bool`: True iff the two rings have equal length
///   and their canonical forms are elementwise equal - i.e. one ring is a
///   rotation of the other.
///
/// ### -> `Usage`
///
/// ```
/// use gyre::ring::prelude::*;
///
/// let r = gyre::ring![2, 1, 3, 1, 2];
/// assert_eq!(r.canonise().to_vec(), vec![1, 2, 2, 1, 3]);
/// assert!(r.equivalent(&r.rotate_right(2)));
/// ```
pub trait Canonical<T: Ord>: Rotate<T> {
    #[must_use = "Canonicalization produces a new ring and leaves the original untouched!"]
    fn canonise(&self) -> Self;

    fn equivalent(&self, other: &Self) -> bool;
}
