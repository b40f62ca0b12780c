//! WAV fixture generator for reader tests

use std::path::Path;

/// Configuration for generated audio
#[derive(Debug, Clone)]
pub struct AudioConfig {
    pub duration_seconds: f64,
    pub sample_rate: u32,
    pub channels: u16,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 2.0,
            sample_rate: 8000,
            channels: 1,
        }
    }
}

/// Write a 16-bit PCM WAV file containing a 440 Hz tone
pub fn generate_test_wav(path: &Path, config: &AudioConfig) -> anyhow::Result<()> {
    let spec = hound::WavSpec {
        channels: config.channels,
        sample_rate: config.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    let total_frames = (config.duration_seconds * config.sample_rate as f64) as usize;

    for i in 0..total_frames {
        let t = i as f64 / config.sample_rate as f64;
        let sample = ((t * 440.0 * std::f64::consts::TAU).sin() * i16::MAX as f64 * 0.5) as i16;
        for _ in 0..config.channels {
            writer.write_sample(sample)?;
        }
    }

    writer.finalize()?;
    Ok(())
}
