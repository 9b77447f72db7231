use std::cmp::Ordering;

use kylin_bytes::{compare_to, iterate_on_splits, split};
use kylin_test_utils::generate::random_bytes;
use kylin_test_utils::{init_tracing_for_tests, seeded_rng};
use rand::Rng;

#[test]
fn midpoint_of_a_single_byte() {
    init_tracing_for_tests();
    let parts = split(&[0x00], &[0xFF], false, 1).unwrap().unwrap();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], [0x00]);
    assert_eq!(parts[2], [0xFF]);
    // Integer division lands one below the exact midpoint.
    assert_eq!(parts[1], [0x7F]);
}

#[test]
fn not_splittable_when_too_few_values() {
    assert!(split(&[0x00], &[0x01], false, 5).unwrap().is_none());
}

#[test]
fn boundaries_are_sorted_and_evenly_spaced() {
    init_tracing_for_tests();
    let mut rng = seeded_rng(0x5117);
    let mut checked = 0;
    while checked < 500 {
        let a = random_bytes(&mut rng, 10);
        let b = random_bytes(&mut rng, 10);
        let (lower, upper) = match compare_to(&a, &b) {
            Ordering::Less => (a, b),
            Ordering::Greater => (b, a),
            Ordering::Equal => continue,
        };
        let n = rng.random_range(1..16usize);
        let inclusive = rng.random_bool(0.5);
        let Ok(Some(splits)) = iterate_on_splits(&lower, &upper, inclusive, n) else {
            continue;
        };
        checked += 1;

        let parts: Vec<Vec<u8>> = splits.iter().collect();
        assert_eq!(parts.len(), n + 2);
        assert_eq!(parts[0], lower);
        assert_eq!(parts[n + 1], upper);

        let width = lower.len().max(upper.len());
        for p in &parts[1..=n] {
            assert_eq!(p.len(), width);
        }
        // Interior boundaries are non-decreasing and never pass the upper bound.
        for w in parts[1..=n].windows(2) {
            assert_ne!(compare_to(&w[0], &w[1]), Ordering::Greater);
        }
        let mut upper_padded = upper.clone();
        upper_padded.resize(width, 0);
        assert_ne!(compare_to(&parts[n], &upper_padded), Ordering::Greater);

        // Restartable: a second pass yields the same boundaries.
        assert_eq!(splits.to_vec(), parts);
    }
}

#[test]
fn long_keys_do_not_overflow() {
    let lower = vec![0x00u8; 32];
    let upper = vec![0xFFu8; 32];
    let parts = split(&lower, &upper, true, 3).unwrap().unwrap();
    // 2^256 / 4 steps: 0x40.., 0x80.., 0xC0..
    for (i, lead) in [(1usize, 0x40u8), (2, 0x80), (3, 0xC0)] {
        assert_eq!(parts[i][0], lead);
        assert!(parts[i][1..].iter().all(|&b| b == 0));
    }
}
