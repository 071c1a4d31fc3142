//! WAV file I/O for wavetrack
//!
//! Bridges WAV files and [`Track`]s. The on-disk format is 16-bit signed
//! integer PCM, mono — the format the track's sample type represents
//! directly — so import and export are lossless. The container layer knows
//! nothing about segmentation: import is a single `write(samples, 0)` and
//! export is a full-timeline dump.

use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::info;

use crate::error::{Result, TrackError};
use crate::segment::Sample;
use crate::track::Track;

/// Default sample rate for exported files (8 kHz telephony-band audio)
pub const DEFAULT_SAMPLE_RATE: u32 = 8000;

/// Import a WAV file into a new track
///
/// # Arguments
/// * `path` - Path to the WAV file to import
///
/// # Errors
/// * [`TrackError::FileNotFound`] - If the file does not exist
/// * [`TrackError::InvalidAudio`] - If the file is not a readable WAV file
/// * [`TrackError::UnsupportedFormat`] - If the audio is not 16-bit integer
///   mono PCM
pub fn import_track(path: &Path) -> Result<Track> {
    if !path.exists() {
        return Err(TrackError::FileNotFound {
            path: path.display().to_string(),
            source: None,
        });
    }

    let mut reader = WavReader::open(path).map_err(|e| TrackError::InvalidAudio {
        reason: format!("Failed to open WAV file: {}", e),
        source: Some(Box::new(e)),
    })?;

    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(TrackError::UnsupportedFormat {
            format: format!("{}-channel audio (only mono supported)", spec.channels),
        });
    }
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(TrackError::UnsupportedFormat {
            format: format!(
                "{}-bit {:?} audio (only 16-bit integer supported)",
                spec.bits_per_sample, spec.sample_format
            ),
        });
    }

    let samples = reader
        .samples::<Sample>()
        .collect::<std::result::Result<Vec<Sample>, _>>()
        .map_err(|e| TrackError::InvalidAudio {
            reason: format!("Failed to read samples: {}", e),
            source: Some(Box::new(e)),
        })?;

    info!(
        "imported {} samples at {} Hz from {}",
        samples.len(),
        spec.sample_rate,
        path.display()
    );

    Ok(Track::from_samples(&samples))
}

/// Export a track to a 16-bit mono PCM WAV file
///
/// # Arguments
/// * `track` - The track to export (full timeline)
/// * `path` - Path where the file will be written
/// * `sample_rate` - Sample rate to stamp in the header (commonly
///   [`DEFAULT_SAMPLE_RATE`])
///
/// # Errors
/// * [`TrackError::Io`] - If the file cannot be written
pub fn export_track(track: &Track, path: &Path, sample_rate: u32) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| {
        TrackError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })?;

    for sample in track.to_vec() {
        writer.write_sample(sample).map_err(|e| {
            TrackError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                e.to_string(),
            ))
        })?;
    }

    writer.finalize().map_err(|e| {
        TrackError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })?;

    info!(
        "exported {} samples at {} Hz to {}",
        track.len(),
        sample_rate,
        path.display()
    );

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
