//! Measurements on generated WAV files.

use std::path::Path;

/// Summary of a mono 16-bit WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct WavStats {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// Samples per channel.
    pub num_samples: usize,
    /// Peak magnitude as a fraction of full scale.
    pub peak: f64,
    /// RMS level as a fraction of full scale.
    pub rms: f64,
}

impl WavStats {
    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// True if every sample is zero.
    pub fn is_silent(&self) -> bool {
        self.peak == 0.0
    }
}

/// Reads a 16-bit integer WAV file and measures it.
pub fn analyze_wav(path: &Path) -> Result<WavStats, hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    let mut peak: i32 = 0;
    let mut sum_squares = 0.0f64;
    let mut count = 0usize;
    for sample in reader.samples::<i16>() {
        let s = i32::from(sample?);
        peak = peak.max(s.abs());
        sum_squares += (s as f64 / 32767.0).powi(2);
        count += 1;
    }

    Ok(WavStats {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        num_samples: count / spec.channels.max(1) as usize,
        peak: peak as f64 / 32767.0,
        rms: if count > 0 {
            (sum_squares / count as f64).sqrt()
        } else {
            0.0
        },
    })
}
