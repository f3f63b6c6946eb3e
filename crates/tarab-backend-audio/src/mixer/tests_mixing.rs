//! Tests for weighted loop mixing.

use super::*;
use crate::config::MixWeights;

#[test]
fn test_mix_single_loop() {
    let mut mixer = Mixer::new(100);
    mixer.add_loop(vec![0.5; 100], 1.0).unwrap();

    let output = mixer.mix().unwrap();
    assert_eq!(output.len(), 100);
    assert!(output.iter().all(|&s| (s - 0.5).abs() < 1e-12));
}

#[test]
fn test_mix_weights() {
    let weights = MixWeights::DEFAULT;
    let mut mixer = Mixer::new(8);
    mixer.add_loop(vec![1.0], weights.melody).unwrap();
    mixer.add_loop(vec![1.0, 0.0], weights.fifth).unwrap();
    mixer.add_loop(vec![1.0, 1.0, 0.0], weights.octave_below).unwrap();
    mixer.add_loop(vec![-1.0; 5], weights.rhythm).unwrap();

    let output = mixer.mix().unwrap();
    assert_eq!(output.len(), 8);
    // Sample 0: 0.4 + 0.2 + 0.2 - 0.2
    assert!((output[0] - 0.6).abs() < 1e-12);
    // Sample 1: 0.4 + 0.0 + 0.2 - 0.2
    assert!((output[1] - 0.4).abs() < 1e-12);
    // Sample 5: 0.4 + 0.0 + 0.0 - 0.2 (rhythm loop restarts)
    assert!((output[5] - 0.2).abs() < 1e-12);
}

#[test]
fn test_mix_loops_of_different_lengths_fill_output() {
    let mut mixer = Mixer::new(1000);
    mixer.add_loop(vec![0.1; 7], 0.5).unwrap();
    mixer.add_loop(vec![0.1; 333], 0.5).unwrap();

    let output = mixer.mix().unwrap();
    assert_eq!(output.len(), 1000);
    assert!(output.iter().all(|&s| (s - 0.1).abs() < 1e-12));
}

#[test]
fn test_mix_rejects_empty_loop() {
    let mut mixer = Mixer::new(10);
    assert!(mixer.add_loop(Vec::new(), 0.5).is_err());
    let output = mixer.mix().unwrap();
    assert!(output.iter().all(|&s| s == 0.0));
}

#[test]
fn test_mix_no_layers_is_silent() {
    let output = Mixer::new(10).mix().unwrap();
    assert!(output.iter().all(|&s| s == 0.0));
}
