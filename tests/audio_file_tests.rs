// Integration tests for audio file loading
//
// These verify that WAV files round-trip into the normalized sample format
// the capture pipeline operates on. Fixtures are generated on the fly with
// the crate's own encoder.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use voicecap::audio::wav::encode_wav;
use voicecap::AudioFile;

/// Write a short 16kHz mono tone to `dir` and return its path
fn write_fixture(dir: &Path, name: &str, seconds: f64) -> Result<PathBuf> {
    let sample_count = (16000.0 * seconds) as usize;
    let samples: Vec<f32> = (0..sample_count)
        .map(|i| (i as f32 * 0.05).sin() * 0.4)
        .collect();

    let path = dir.join(name);
    std::fs::write(&path, encode_wav(&samples, 16000)?)?;
    Ok(path)
}

#[test]
fn test_audio_file_open() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_fixture(temp_dir.path(), "tone.wav", 1.0)?;

    let audio = AudioFile::open(&path)?;

    assert!((audio.duration_seconds - 1.0).abs() < 0.01);
    assert_eq!(audio.sample_rate, 16000);
    assert_eq!(audio.channels, 1);
    assert_eq!(audio.samples.len(), 16000);
    assert!(audio.path.contains("tone.wav"));

    Ok(())
}

#[test]
fn test_audio_file_nonexistent() {
    let result = AudioFile::open("/nonexistent/path/to/audio.wav");
    assert!(result.is_err(), "Opening nonexistent file should fail");
}

#[test]
fn test_sample_count_matches_duration() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_fixture(temp_dir.path(), "half-second.wav", 0.5)?;

    let audio = AudioFile::open(&path)?;

    let expected =
        (audio.duration_seconds * audio.sample_rate as f64 * audio.channels as f64) as usize;
    assert_eq!(audio.samples.len(), expected);

    Ok(())
}

#[test]
fn test_normalized_samples_stay_in_range() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_fixture(temp_dir.path(), "tone.wav", 0.2)?;

    let audio = AudioFile::open(&path)?;
    let normalized = audio.samples_f32();

    assert_eq!(normalized.len(), audio.samples.len());
    assert!(normalized.iter().all(|s| (-1.0..=1.0).contains(s)));
    // The 0.4-amplitude tone must not come back silent
    assert!(normalized.iter().any(|s| s.abs() > 0.2));

    Ok(())
}
