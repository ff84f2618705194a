use crate::ring::prelude::*;

#[test]
fn rotate_right_shifts_elements_right() {
    let ring = crate::ring![1, 2, 3];
    let turned = ring.rotate_right(1);
    assert_eq!(*turned.index(0), 3);
    assert_eq!(*turned.index(1), 1);
    assert_eq!(*turned.index(2), 2);
}

#[test]
fn rotate_left_shifts_elements_left() {
    let ring = crate::ring![1, 2, 3];
    let turned = ring.rotate_left(1);
    assert_eq!(turned.to_vec(), vec![2, 3, 1]);
}

#[test]
fn identity() {
    let ring = crate::ring![1, 2, 3, 4, 5];
    for n in [-7isize, -1, 0, 1, 2, 5, 6, 12] {
        assert_eq!(ring.rotate_right(n).rotate_left(n), ring, "n: {}", n);
        assert_eq!(ring.rotate_left(n).rotate_right(n), ring, "n: {}", n);
    }
}

#[test]
fn composition() {
    let ring = crate::ring![1, 2, 3, 4, 5];
    for a in -6isize..7 {
        for b in -6isize..7 {
            assert_eq!(
                ring.rotate_right(a).rotate_right(b),
                ring.rotate_right(a + b),
                "a: {}, b: {}",
                a,
                b
            );
        }
    }
}

#[test]
fn full_turns_are_identity() {
    let ring = crate::ring![1, 2, 3];
    assert_eq!(ring.rotate_right(3), ring);
    assert_eq!(ring.rotate_left(300), ring);
    assert_eq!(ring.rotate_right(-3), ring);
}

#[test]
fn offset_stays_normalized() {
    let ring: Ring<i32> = crate::ring![1, 2, 3, 4];
    for n in [-1000isize, -5, -1, 0, 1, 5, 1000, isize::MAX / 2] {
        assert!(ring.rotate_right(n).offset < 4, "n: {}", n);
        assert!(ring.rotate_left(n).offset < 4, "n: {}", n);
    }
}

#[test]
fn rotation_shares_storage() {
    let ring = crate::ring![1, 2, 3];
    let turned = ring.rotate_right(2);
    assert!(std::sync::Arc::ptr_eq(&ring.storage, &turned.storage));
}

#[test]
fn rotate_to_minimum_by_picks_leftmost_in_storage() {
    // Two equal minima: storage index 1 wins over storage index 3.
    let ring = crate::ring![5, 1, 7, 1, 9];
    let turned = ring.rotate_to_minimum_by(Ord::cmp);
    assert_eq!(turned.offset, 1);
    assert_eq!(turned.to_vec(), vec![1, 7, 1, 9, 5]);

    // The offset is a physical index: a pre-existing rotation on the input
    // does not move the pick.
    let turned = ring.rotate_left(3).rotate_to_minimum_by(Ord::cmp);
    assert_eq!(turned.offset, 1);
}

#[test]
fn rotate_to_maximum_by_picks_leftmost_in_storage() {
    let ring = crate::ring![5, 9, 7, 9, 1];
    let turned = ring.rotate_to_maximum_by(Ord::cmp);
    assert_eq!(turned.offset, 1);
    assert_eq!(*turned.head(), 9);
}

#[test]
fn rotate_stress() {
    let ring = Ring::from_vec_unchecked((0..64).collect::<Vec<i32>>());
    let mut turned = ring.clone();
    let mut net: isize = 0;
    for _ in 0..1000 {
        let n = (rand::random::<i16>() / 8) as isize;
        turned = turned.rotate_right(n);
        net += n;
    }
    assert_eq!(turned, ring.rotate_right(net));
}
