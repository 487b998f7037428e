use anyhow::{Context, Result};
use std::io::Cursor;

/// Convert a normalized sample in [-1.0, 1.0] to 16-bit PCM, clamping
/// out-of-range input.
pub fn sample_to_i16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}

/// Encode normalized mono samples as an in-memory WAV payload
/// (16-bit little-endian PCM).
///
/// Empty input produces a header-only container with zero-length data.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .context("Failed to create WAV writer")?;

        for &sample in samples {
            writer
                .write_sample(sample_to_i16(sample))
                .context("Failed to write sample to WAV")?;
        }

        writer.finalize().context("Failed to finalize WAV payload")?;
    }

    Ok(cursor.into_inner())
}
