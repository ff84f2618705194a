use crate::ring::prelude::*;

#[test]
fn wraps_in_both_directions() {
    let ring = crate::ring![1, 2, 3];

    assert_eq!(*ring.index(0), 1);
    assert_eq!(*ring.index(1), 2);
    assert_eq!(*ring.index(2), 3);

    // Beyond the length and negative indices wrap.
    assert_eq!(*ring.index(3), 1);
    assert_eq!(*ring.index(7), 2);
    assert_eq!(*ring.index(-1), 3);
    assert_eq!(*ring.index(-4), 3);
}

#[test]
fn periodicity() {
    let ring = crate::ring![10, 20, 30, 40];
    for i in -12..12 {
        assert_eq!(ring.index(i), ring.index(i + 4), "index: {}", i);
        assert_eq!(ring.index(i), ring.index(i - 8), "index: {}", i);
    }
}

#[test]
fn index_operator() {
    let ring = crate::ring!['a', 'b', 'c'];
    assert_eq!(ring[-1], 'c');
    assert_eq!(ring[0], 'a');
    assert_eq!(ring[4], 'b');
}

#[test]
fn head_and_last_track_rotation() {
    let ring = crate::ring![1, 2, 3, 4];
    let turned = ring.rotate_left(1);
    assert_eq!(*turned.head(), 2);
    assert_eq!(*turned.last(), 1);

    let turned = ring.rotate_right(1);
    assert_eq!(*turned.head(), 4);
    assert_eq!(*turned.last(), 3);
}

#[test]
fn index_stress() {
    let values: Vec<i64> = (0..1000).collect();
    let ring = Ring::from_vec_unchecked(values.clone());

    for _ in 0..10_000 {
        let i = rand::random::<i32>() as isize;
        let expected = values[i.rem_euclid(1000) as usize];
        assert_eq!(*ring.index(i), expected, "index: {}", i);
    }
}
