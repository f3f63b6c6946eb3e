//! Tests for peak normalization.

use super::*;
use crate::error::AudioError;

#[test]
fn test_normalize_basic() {
    let mut samples = vec![0.5, -0.3, 0.25, -0.2];
    let gain = normalize_peak(&mut samples, 0.8).unwrap();

    assert!((gain - 1.6).abs() < 1e-12);
    assert!((peak(&samples) - 0.8).abs() < 1e-12);
}

#[test]
fn test_normalize_negative_peak() {
    let mut samples = vec![0.1, -2.0, 0.5];
    normalize_peak(&mut samples, 0.8).unwrap();
    assert!((samples[1] + 0.8).abs() < 1e-12);
}

#[test]
fn test_normalize_quiet_audio() {
    let mut samples = vec![0.01, -0.005, 0.008, -0.003];
    normalize_peak(&mut samples, 0.8).unwrap();
    assert!((peak(&samples) - 0.8).abs() < 1e-12);
}

#[test]
fn test_normalize_silent_audio_is_error() {
    let mut samples = vec![0.0; 4];
    let err = normalize_peak(&mut samples, 0.8).unwrap_err();
    assert!(matches!(err, AudioError::Synthesis { .. }));
    assert!(samples.iter().all(|&s| s == 0.0));
}

#[test]
fn test_normalize_empty_is_error() {
    let mut samples: Vec<f64> = Vec::new();
    assert!(normalize_peak(&mut samples, 0.8).is_err());
}

#[test]
fn test_normalize_non_finite_is_error() {
    let mut samples = vec![0.1, f64::NAN, 0.3];
    assert!(normalize_peak(&mut samples, 0.8).is_err());

    let mut samples = vec![0.1, f64::INFINITY];
    assert!(normalize_peak(&mut samples, 0.8).is_err());
}

#[test]
fn test_peak() {
    assert_eq!(peak(&[]), 0.0);
    assert_eq!(peak(&[0.2, -0.7, 0.5]), 0.7);
    assert!(peak(&[0.2, f64::NAN]).is_nan());
    assert!(peak(&[f64::NAN, 0.2]).is_nan());
}
