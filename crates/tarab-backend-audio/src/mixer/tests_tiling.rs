//! Tests for loop repetition.

use super::*;

#[test]
fn test_repeat_count_rounds_up() {
    assert_eq!(repeat_count(3, 9), 3);
    assert_eq!(repeat_count(3, 10), 4);
    assert_eq!(repeat_count(10, 3), 1);
    assert_eq!(repeat_count(0, 3), 0);
}

#[test]
fn test_tiled_truncates_to_target() {
    let out: Vec<f64> = tiled(&[1.0, 2.0, 3.0], 7).unwrap().collect();
    assert_eq!(out, vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0]);
}

#[test]
fn test_tiled_longer_loop_is_cut() {
    let out: Vec<f64> = tiled(&[1.0, 2.0, 3.0, 4.0], 2).unwrap().collect();
    assert_eq!(out, vec![1.0, 2.0]);
}

#[test]
fn test_tiled_empty_loop_is_error() {
    assert!(tiled(&[], 10).is_err());
}

#[test]
fn test_tiled_empty_target() {
    assert_eq!(tiled(&[], 0).unwrap().count(), 0);
    assert_eq!(tiled(&[1.0], 0).unwrap().count(), 0);
}
