use crate::ring::prelude::*;

#[test]
fn append_is_flat_concatenation() {
    let a = crate::ring![1, 2];
    let b = crate::ring![3, 4, 5];
    let joined = a.append(&b);
    assert_eq!(joined.length(), 5);
    assert_eq!(joined.to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(joined.offset, 0);
}

#[test]
fn append_reads_logical_order() {
    // Pre-existing rotations are baked into the result, not carried along.
    let a = crate::ring![2, 1].rotate_left(1);
    let b = crate::ring![4, 5, 3].rotate_left(2);
    let joined = a.append(&b);
    assert_eq!(joined.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn append_result_is_one_cycle() {
    let a = crate::ring![1, 2];
    let b = crate::ring![3];
    let joined = a.append(&b);
    assert_eq!(*joined.index(3), 1);
    assert_eq!(*joined.index(-1), 3);
}

#[test]
fn reverse_flips_logical_order() {
    let ring = crate::ring![1, 2, 3, 4];
    let reversed = ring.reverse();
    assert_eq!(reversed.to_vec(), vec![4, 3, 2, 1]);
    assert_eq!(reversed.offset, 0);
    for i in 0..4 {
        assert_eq!(ring.index(i), reversed.index(3 - i), "index: {}", i);
    }
}

#[test]
fn reverse_of_rotated_view() {
    let ring = crate::ring![1, 2, 3].rotate_left(1);
    assert_eq!(ring.reverse().to_vec(), vec![1, 3, 2]);
}

#[test]
fn reverse_twice_restores_content() {
    let ring = crate::ring![5, 3, 8, 1];
    assert_eq!(ring.reverse().reverse(), ring);
}
