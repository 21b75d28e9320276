use foldhash::fast::FixedState;
use rand::Rng;
use tophash_map::{StringMap, bucket_count_log2_for};

fn bit_length(n: u16) -> u8 {
    (16 - n.leading_zeros()) as u8
}

fn assert_sizing(expected: u16) {
    let map = StringMap::with_capacity_and_hasher(expected, FixedState::default());
    let log2 = bit_length(expected / 8 + 1);

    assert_eq!(map.bucket_count_log2(), log2, "log2 for hint {}", expected);
    assert_eq!(map.bucket_count(), 1usize << log2, "buckets for hint {}", expected);
    assert_eq!(bucket_count_log2_for(expected), log2);
}

#[test]
fn test_sizing_small_hints() {
    for expected in 0..=255u16 {
        assert_sizing(expected);
    }
}

#[test]
fn test_sizing_random_hint() {
    let mut rng = rand::rng();
    for _ in 0..64 {
        assert_sizing(rng.random());
    }
}

#[test]
fn test_sizing_boundaries() {
    assert_sizing(0);
    assert_sizing(u16::MAX);
    assert_eq!(StringMap::with_capacity(0).bucket_count(), 2);
    assert_eq!(StringMap::with_capacity(u16::MAX).bucket_count(), 1 << 14);
}

#[test]
fn test_sizing_is_monotonic() {
    let mut previous = bucket_count_log2_for(0);
    for expected in 1..=u16::MAX {
        let current = bucket_count_log2_for(expected);
        assert!(current >= previous, "hint {} shrank the table", expected);
        assert!(current - previous <= 1);
        previous = current;
    }
}

#[test]
fn test_try_with_capacity_matches_infallible() {
    for expected in [0u16, 1, 8, 64, 1000, u16::MAX] {
        let fallible =
            StringMap::try_with_capacity_and_hasher(expected, FixedState::default()).unwrap();
        let infallible = StringMap::with_capacity_and_hasher(expected, FixedState::default());
        assert_eq!(fallible.bucket_count(), infallible.bucket_count());
        assert_eq!(fallible.bucket_count_log2(), infallible.bucket_count_log2());
    }
}
