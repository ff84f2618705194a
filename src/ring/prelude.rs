
pub use {
    crate::ring::canonical::least_rotation,
    crate::ring::traits::{Canonical, Fold, Length, Rotate},
    crate::ring::{Ring, RingError},
};
