//! 16-bit PCM WAV output.
//!
//! Every artifact, MP3 included, starts life as a mono 16-bit WAV. The
//! BLAKE3 hash of the PCM data identifies the waveform independently of
//! the container, so seeded runs can be compared.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};

/// Bits per PCM sample.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Facts about a written WAV stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    /// BLAKE3 hash of the little-endian PCM data, hex encoded.
    pub pcm_hash: String,
    /// Number of samples written.
    pub num_samples: usize,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

/// Returns the hound spec for mono 16-bit PCM.
pub fn mono_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Samples outside [-1.0, 1.0] are clipped.
///
/// # Returns
/// PCM data as little-endian 16-bit samples
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let pcm_value = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }
    pcm
}

/// Hex BLAKE3 hash of PCM bytes.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Writes mono samples as a 16-bit WAV stream.
///
/// Errors are returned as-is; callers attach the path being written.
pub fn write_wav<W: Write + Seek>(
    writer: W,
    samples: &[f64],
    sample_rate: u32,
) -> Result<WavInfo, hound::Error> {
    let pcm = samples_to_pcm16(samples);

    let mut wav = hound::WavWriter::new(writer, mono_spec(sample_rate))?;
    {
        let mut frames = wav.get_i16_writer(samples.len() as u32);
        for bytes in pcm.chunks_exact(2) {
            frames.write_sample(i16::from_le_bytes([bytes[0], bytes[1]]));
        }
        frames.flush()?;
    }
    wav.finalize()?;

    Ok(WavInfo {
        pcm_hash: pcm_hash(&pcm),
        num_samples: samples.len(),
        sample_rate,
    })
}

/// Writes mono samples to an already open file.
pub fn write_wav_file(
    file: &File,
    samples: &[f64],
    sample_rate: u32,
) -> Result<WavInfo, hound::Error> {
    let info = write_wav(BufWriter::new(file), samples, sample_rate)?;
    file.sync_all()?;
    Ok(info)
}
