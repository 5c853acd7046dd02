//! End-to-end properties of the sample stream algebra.

use approx::assert_relative_eq;
use sample_stream::{Ownership, SampleStream};

fn tenths() -> SampleStream<f64> {
    // 0.1, 0.2, ..., 1.0
    SampleStream::from_vec((1..=10).map(|i| i as f64 / 10.0).collect())
}

#[test]
fn clone_yields_equal_contents_in_a_distinct_buffer() {
    let a = tenths();
    let mut dup = a.clone();
    assert_eq!(dup.len(), a.len());
    assert_eq!(dup, a);
    assert_ne!(dup.as_ptr(), a.as_ptr());

    dup *= 0.0;
    assert_eq!(a, tenths(), "mutating a clone must not affect the original");
}

#[test]
fn zip_with_applies_the_function_pointwise() {
    let a = tenths();
    let b = SampleStream::from_vec((1..=10).map(f64::from).collect());
    let combined = SampleStream::zip_with(&a, &b, |x, y| x * y - 1.0);
    for i in 0..10isize {
        assert_eq!(combined[i], a[i] * b[i] - 1.0);
    }
}

#[test]
fn length_one_stream_broadcasts_against_every_element() {
    let a = tenths();
    let b = SampleStream::from_vec(vec![3.0f64]);
    let combined = SampleStream::zip_with(&a, &b, |x, y| x + y);
    for i in 0..10isize {
        assert_eq!(combined[i], a[i] + b[0]);
    }
}

#[test]
fn shift_left_zero_fills_and_relocates() {
    let original = tenths();
    let len = original.len() as isize;
    for n in 1..len {
        let mut shifted = original.clone();
        shifted.shift_left(n);
        for i in 0..(len - n) {
            assert_eq!(shifted[i], original[i + n]);
        }
        for i in (len - n)..len {
            assert_eq!(shifted[i], 0.0);
        }
    }
}

#[test]
fn shift_identities() {
    let mut a = tenths();
    a.shift_left(0);
    assert_eq!(a, tenths());

    // Counts that reduce to zero via the remainder rule are no-ops too.
    a.shift_left(10);
    a.shift_right(20);
    assert_eq!(a, tenths());
}

#[test]
fn negative_shift_counts_flip_direction() {
    let len = tenths().len() as isize;
    for n in 1..len {
        let mut left = tenths();
        left.shift_left(-n);
        let mut right = tenths();
        right.shift_right(n);
        assert_eq!(left, right);
    }
}

#[test]
fn negative_indices_address_from_the_back() {
    let a = tenths();
    assert_eq!(a[-1], a[9]);
    for k in 0..10isize {
        assert_eq!(a[-1 - k], a[9 - k]);
    }
}

#[test]
fn concatenation_preserves_order_and_length() {
    let a = tenths();
    let b = SampleStream::from_vec(vec![7.0f64, 8.0, 9.0]);
    let joined = &a >> &b;

    assert_eq!(joined.size(), a.size() + b.size());
    for i in 0..a.len() as isize {
        assert_eq!(joined[i], a[i]);
    }
    for i in 0..b.len() as isize {
        assert_eq!(joined[a.len() as isize + i], b[i]);
    }
    assert_eq!(joined.ownership(), Ownership::Take);
    assert_eq!(&a << &b, joined, "both spellings concatenate left-then-right");
}

#[test]
fn scale_clone_and_rotate_scenario() {
    // Ten doubles 0.1..=1.0, scaled in place by 2.
    let mut doubled = tenths();
    doubled *= 2.0;
    for i in 0..10isize {
        assert_eq!(doubled[i], tenths()[i] * 2.0);
    }

    // The identity copy is independent and elementwise equal.
    let identity = doubled.clone();
    assert_eq!(identity, doubled);
    assert_ne!(identity.as_ptr(), doubled.as_ptr());

    // Additive rotation: the last 3 elements wrap to the front, landing on
    // zero-filled slots, so the result matches a true rotation here.
    let before: Vec<f64> = doubled.iter().copied().collect();
    doubled.rotate_right(3);
    for i in 0..3usize {
        assert_eq!(doubled[i as isize], before[7 + i]);
    }
    for i in 3..10usize {
        assert_eq!(doubled[i as isize], before[i - 3]);
    }
}

#[test]
fn rotation_is_additive_not_a_swap() {
    // On a buffer without zero-filled landing slots the additive
    // composition shows through: rotate(0) doubles every element.
    let mut a = SampleStream::from_vec(vec![1.0f64, 2.0, 3.0]);
    a.rotate_right(0);
    assert_eq!(a.as_slice(), &[2.0, 4.0, 6.0]);
}

#[test]
fn scalar_division_roundtrips_within_tolerance() {
    let a = tenths();
    let there_and_back = &(&a / 3.0) * 3.0;
    for i in 0..10isize {
        assert_relative_eq!(there_and_back[i], a[i], epsilon = 1e-12);
    }
}

#[test]
fn streams_survive_mixed_operator_pipelines() {
    let a = SampleStream::from_vec(vec![1i32, 2, 3, 4]);
    let b = SampleStream::from_vec(vec![4i32, 3, 2, 1]);

    let mut mixed = &(&a + &b) * 2;
    assert_eq!(mixed.as_slice(), &[10, 10, 10, 10]);

    mixed -= &a;
    mixed ^= &b;
    assert_eq!(mixed.as_slice(), &[9 ^ 4, 8 ^ 3, 7 ^ 2, 6 ^ 1]);

    let tail = &mixed >> 2;
    assert_eq!(tail.as_slice(), &[0, 0, 9 ^ 4, 8 ^ 3]);
    assert_eq!(mixed.len(), 4, "non-assigning shift leaves receiver intact");
}
