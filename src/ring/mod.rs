use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use thiserror::Error;

pub mod canonical;
pub mod prelude;
pub mod traits;

use traits::{Canonical, Fold, Length, Rotate};

/// ### -> `RingError`.
///
/// The only recoverable failure in this crate: checked constructors reject an
/// empty backing sequence. Everything else is either total by construction
/// (indexing, rotation, folds over a never-empty structure) or a programmer
/// fault that panics (unchecked constructors given empty input, broken
/// internal invariants).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingError {
    #[error("cannot build a ring from an empty sequence")]
    EmptyInput,
}

/// ### -> `Ring<T>` - An immutable, fixed-length circular sequence with O(1) rotation.
///
/// `Ring<T>` wraps a non-empty backing sequence and a rotation offset. The
/// backing storage is shared immutably (`Arc<[T]>`), so cloning a ring or
/// producing a rotated view is O(1) and never duplicates element data. Once
/// constructed, a ring is read-only: every operation is a pure function
/// producing a new value.
///
/// ### -> `Rotation Explained`
///
/// A **logical index** is a position as observed through the current
/// rotation offset; a **physical index** is a position in the raw backing
/// storage. Logical index `i` maps to physical index
/// `((i mod length) + offset) mod length`, computed with negative-safe
/// modulo, so `index(i)` is total for every `isize` - negative indices and
/// indices beyond the length simply wrap.
///
/// Rotation only moves the offset. `rotate_right(1)` on `[1, 2, 3]` reads
/// `3, 1, 2` and `rotate_left(1)` reads `2, 3, 1`, matching
/// `slice::rotate_right`/`rotate_left` on the materialized sequence.
///
/// ### -> `Equality and Equivalence`
///
/// - `==` compares logical content: equal length and elementwise equality at
///   corresponding logical indices. Two rotations of the same cycle are NOT
///   `==` unless the rotation amounts coincide.
/// - [`traits::Canonical::equivalent`] is the rotation-invariant relation: it
///   compares canonical forms, so every rotation of a cycle is equivalent to
///   every other. Canonicalization uses Booth's least-rotation algorithm
///   ([`canonical::least_rotation`]) and therefore needs `T: Ord`.
///
/// `Hash` and `Debug` follow logical content, consistent with `==`.
///
/// ### -> `Invariants`
///
/// 1. **Non-empty storage**: length is fixed at construction and is ≥ 1.
/// 2. **Normalized offset**: the stored offset is always in `[0, length)`.
///
/// Checked constructors surface empty input as [`RingError::EmptyInput`];
/// unchecked constructors treat it as a precondition violation and panic.
/// Violations observed past construction indicate data corruption and panic
/// rather than returning errors.
///
/// ### -> `Performance Characteristics`
///
/// - **Cloning / rotation**: O(1) - only the Arc pointer and offset move.
/// - **Indexing / head / last**: O(1).
/// - **Canonise**: O(n) time, O(n) transient scratch, shares storage.
/// - **Folds / zips / reverse / append / to_vec**: O(n).
///
/// ### -> `Thread Safety`
///
/// The structure is immutable after construction and holds no locks or
/// interior mutability, so `Ring<T>` is freely shareable across concurrent
/// readers whenever `T: Send + Sync`.
///
/// ### -> `Usage Example`
///
/// ```
/// use gyre::ring::prelude::*;
///
/// let ring = Ring::from_vec(vec![2, 1, 3, 1, 2])?;
/// assert_eq!(ring.length(), 5);
/// assert_eq!(*ring.index(-1), 2);
///
/// // O(1) rotation: same storage, new offset.
/// let turned = ring.rotate_right(2);
/// assert_eq!(turned.to_vec(), vec![1, 2, 2, 1, 3]);
///
/// // Rotation-invariant comparison via the canonical form.
/// assert!(ring.equivalent(&turned));
/// assert_ne!(ring, turned);
/// assert_eq!(ring.canonise().to_vec(), vec![1, 2, 2, 1, 3]);
/// # Ok::<(), gyre::ring::RingError>(())
/// ```
pub struct Ring<T> {
    storage: Arc<[T]>,
    offset: usize,
}

impl<T> Ring<T> {
    /// Builds a ring from a vector, offset 0. Empty input is rejected with
    /// [`RingError::EmptyInput`].
    pub fn from_vec(values: Vec<T>) -> Result<Self, RingError> {
        if values.is_empty() {
            return Err(RingError::EmptyInput);
        }
        Ok(Self { storage: values.into(), offset: 0 })
    }

    /// Builds a ring from a vector the caller guarantees to be non-empty.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty. Use [`Ring::from_vec`] when emptiness is
    /// possible external input rather than a programming error.
    pub fn from_vec_unchecked(values: Vec<T>) -> Self {
        assert!(!values.is_empty(), "Ring storage must be non-empty!");
        Self { storage: values.into(), offset: 0 }
    }

    /// Builds a length-1 ring.
    pub fn singleton(value: T) -> Self {
        Self { storage: vec![value].into(), offset: 0 }
    }

    /// Builds a ring from any iterator. The iterator's size hint is advisory
    /// only: elements are materialized first and the final length is what
    /// gets validated, so lying hints are tolerated.
    pub fn try_from_iter<I>(values: I) -> Result<Self, RingError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec(values.into_iter().collect())
    }

    /// Logical-to-physical index translation. Total for every `isize`.
    fn physical(&self, logical: isize) -> usize {
        let length = self.storage.len();
        let wrapped = logical.rem_euclid(length as isize) as usize;
        (wrapped + self.offset) % length
    }

    /// Returns the element at logical index `i`. Never fails: negative
    /// indices and indices beyond the length wrap modulo the length, so
    /// `index(i) == index(i + length)` for every `i`.
    pub fn index(&self, i: isize) -> &T {
        &self.storage[self.physical(i)]
    }

    /// The element at logical index 0.
    pub fn head(&self) -> &T {
        self.index(0)
    }

    /// The element at logical index `length - 1`.
    pub fn last(&self) -> &T {
        self.index(self.storage.len() as isize - 1)
    }

    /// Iterates the elements in logical order.
    pub fn iter(&self) -> std::iter::Chain<std::slice::Iter<'_, T>, std::slice::Iter<'_, T>> {
        let (front, back) = self.storage.split_at(self.offset);
        back.iter().chain(front.iter())
    }

    /// Materializes the logical order into a vector.
    #[must_use = "Materializing a ring is not 0 cost and must serve a purpose!"]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// New ring, offset 0, whose logical index `i` holds the element at
    /// logical index `length - 1 - i` of `self`.
    #[must_use = "Reversing is not 0 cost and must serve a purpose!"]
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        Self::from_vec_unchecked(self.iter().rev().cloned().collect())
    }

    /// Flat concatenation: a new ring of length `m + n`, offset 0, holding
    /// `self` then `other`, each read in its current logical order. This is
    /// one new cycle built from the two inputs, not a circular interleaving,
    /// and any pre-existing rotation on either input is baked into the
    /// result.
    #[must_use = "Appending is not 0 cost and must serve a purpose!"]
    pub fn append(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::from_vec_unchecked(self.iter().chain(other.iter()).cloned().collect())
    }

    /// Elementwise combination of two rings at corresponding logical
    /// indices. The result has offset 0 and the length of the shorter input.
    pub fn zip_with<U, V, F>(&self, other: &Ring<U>, mut combine: F) -> Ring<V>
    where
        F: FnMut(&T, &U) -> V,
    {
        Ring::from_vec_unchecked(
            self.iter().zip(other.iter()).map(|(a, b)| combine(a, b)).collect(),
        )
    }

    /// Elementwise pairing of two rings; see [`Ring::zip_with`].
    pub fn zip<U>(&self, other: &Ring<U>) -> Ring<(T, U)>
    where
        T: Clone,
        U: Clone,
    {
        self.zip_with(other, |a, b| (a.clone(), b.clone()))
    }

    /// Three-way [`Ring::zip_with`]: output length is the minimum of the
    /// three input lengths.
    pub fn zip_with3<U, V, W, F>(&self, second: &Ring<U>, third: &Ring<V>, mut combine: F) -> Ring<W>
    where
        F: FnMut(&T, &U, &V) -> W,
    {
        Ring::from_vec_unchecked(
            self.iter()
                .zip(second.iter())
                .zip(third.iter())
                .map(|((a, b), c)| combine(a, b, c))
                .collect(),
        )
    }

    /// Three-way [`Ring::zip`].
    pub fn zip3<U, V>(&self, second: &Ring<U>, third: &Ring<V>) -> Ring<(T, U, V)>
    where
        T: Clone,
        U: Clone,
        V: Clone,
    {
        self.zip_with3(second, third, |a, b, c| (a.clone(), b.clone(), c.clone()))
    }
}

impl<T> Clone for Ring<T> {
    fn clone(&self) -> Self {
        Self { storage: Arc::clone(&self.storage), offset: self.offset }
    }
}

impl<T> Length for Ring<T> {
    fn length(&self) -> usize {
        self.storage.len()
    }
}

impl<T> Rotate<T> for Ring<T> {
    fn rotate_right(&self, n: isize) -> Self {
        let length = self.storage.len() as isize;
        let offset = (self.offset as isize - n.rem_euclid(length)).rem_euclid(length) as usize;
        Self { storage: Arc::clone(&self.storage), offset }
    }

    fn rotate_left(&self, n: isize) -> Self {
        let length = self.storage.len() as isize;
        let offset = (self.offset as isize + n.rem_euclid(length)).rem_euclid(length) as usize;
        Self { storage: Arc::clone(&self.storage), offset }
    }

    fn rotate_to_minimum_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        // Strict Less keeps the leftmost of equal elements in storage order.
        let mut best = 0;
        for i in 1..self.storage.len() {
            if compare(&self.storage[i], &self.storage[best]) == Ordering::Less {
                best = i;
            }
        }
        Self { storage: Arc::clone(&self.storage), offset: best }
    }

    fn rotate_to_maximum_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut best = 0;
        for i in 1..self.storage.len() {
            if compare(&self.storage[i], &self.storage[best]) == Ordering::Greater {
                best = i;
            }
        }
        Self { storage: Arc::clone(&self.storage), offset: best }
    }
}

impl<T: Ord> Canonical<T> for Ring<T> {
    fn canonise(&self) -> Self {
        // The minimal rotation of a cycle does not depend on the current
        // offset, so Booth runs directly over physical storage and its
        // result is the canonical offset.
        let offset = canonical::least_rotation(&self.storage);
        Self { storage: Arc::clone(&self.storage), offset }
    }

    fn equivalent(&self, other: &Self) -> bool {
        self.length_eq(other) && self.canonise().iter().eq(other.canonise().iter())
    }
}

impl<T> Fold<T> for Ring<T> {
    fn fold<B, F>(&self, init: B, mut combine: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let mut accumulator = init;
        for value in self.iter().rev() {
            accumulator = combine(value, accumulator);
        }
        accumulator
    }

    fn fold_strict<B, F>(&self, init: B, mut combine: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        let mut accumulator = init;
        for value in self.iter() {
            accumulator = combine(accumulator, value);
        }
        accumulator
    }

    fn fold1<F>(&self, mut combine: F) -> T
    where
        T: Clone,
        F: FnMut(T, &T) -> T,
    {
        let mut accumulator = self.head().clone();
        for value in self.iter().skip(1) {
            accumulator = combine(accumulator, value);
        }
        accumulator
    }

    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    fn sum(&self) -> T
    where
        T: Clone + std::iter::Sum<T>,
    {
        self.iter().cloned().sum()
    }

    fn product(&self) -> T
    where
        T: Clone + std::iter::Product<T>,
    {
        self.iter().cloned().product()
    }

    fn minimum(&self) -> &T
    where
        T: Ord,
    {
        self.minimum_by(Ord::cmp)
    }

    fn maximum(&self) -> &T
    where
        T: Ord,
    {
        self.maximum_by(Ord::cmp)
    }

    fn minimum_by<F>(&self, mut compare: F) -> &T
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut best = self.head();
        for value in self.iter().skip(1) {
            if compare(value, best) == Ordering::Less {
                best = value;
            }
        }
        best
    }

    fn maximum_by<F>(&self, mut compare: F) -> &T
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut best = self.head();
        for value in self.iter().skip(1) {
            if compare(value, best) == Ordering::Greater {
                best = value;
            }
        }
        best
    }
}

impl<T: PartialEq> PartialEq for Ring<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.storage.len() != other.storage.len() {
            return false;
        }
        if self.offset == other.offset {
            // Identical offsets: backing order equals logical order, so the
            // storages can be compared directly.
            if Arc::ptr_eq(&self.storage, &other.storage) {
                return true;
            }
            return self.storage == other.storage;
        }
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Ring<T> {}

impl<T: Hash> Hash for Ring<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hashes logical order so that == rings hash alike regardless of
        // how the content is split across the physical storage.
        state.write_usize(self.storage.len());
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> std::ops::Index<isize> for Ring<T> {
    type Output = T;

    fn index(&self, i: isize) -> &T {
        Ring::index(self, i)
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::slice::Iter<'a, T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> TryFrom<Vec<T>> for Ring<T> {
    type Error = RingError;

    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(values)
    }
}

#[cfg(test)]
mod tests;
