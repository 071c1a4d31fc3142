//! wavetrack CLI - Audio Track Editor
//!
//! Command-line demo for the wavetrack library: inspect, cut, paste and
//! scan WAV files.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use wavetrack::io::{export_track, import_track, DEFAULT_SAMPLE_RATE};
use wavetrack::PatternDetector;

/// wavetrack - editable audio sample tracks with pattern detection
#[derive(Parser, Debug)]
#[command(name = "wavetrack")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show track length and internal layout of a WAV file
    Info {
        /// WAV file to inspect
        file: PathBuf,
    },

    /// Delete a sample range and write the result
    Cut {
        /// Input WAV file
        file: PathBuf,

        /// First sample to remove
        #[arg(long)]
        pos: usize,

        /// Number of samples to remove
        #[arg(long)]
        count: usize,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Insert samples from one WAV file into another and write the result
    Paste {
        /// Destination WAV file
        dest: PathBuf,

        /// Source WAV file
        source: PathBuf,

        /// Insertion position in the destination
        #[arg(long)]
        dest_pos: usize,

        /// First sample to take from the source
        #[arg(long, default_value_t = 0)]
        src_start: usize,

        /// Number of samples to take from the source
        #[arg(long)]
        count: usize,

        /// Output WAV file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Find occurrences of a pattern file inside a target file
    Identify {
        /// Recording to scan
        target: PathBuf,

        /// Pattern to look for (e.g. an ad jingle)
        pattern: PathBuf,

        /// Match-acceptance threshold as a fraction of pattern self-energy
        #[arg(long, default_value_t = wavetrack::DETECTION_THRESHOLD)]
        threshold: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { file } => {
            let track = import_track(&file)
                .with_context(|| format!("importing {}", file.display()))?;
            println!("file:     {}", file.display());
            println!("samples:  {}", track.len());
            println!("segments: {}", track.segment_count());
        }

        Commands::Cut {
            file,
            pos,
            count,
            output,
        } => {
            let mut track = import_track(&file)
                .with_context(|| format!("importing {}", file.display()))?;
            if !track.delete_range(pos, count) {
                anyhow::bail!(
                    "range [{}, {}) is out of bounds for a {}-sample track",
                    pos,
                    pos + count,
                    track.len()
                );
            }
            export_track(&track, &output, DEFAULT_SAMPLE_RATE)
                .with_context(|| format!("exporting {}", output.display()))?;
            info!("cut {} samples, wrote {}", count, output.display());
        }

        Commands::Paste {
            dest,
            source,
            dest_pos,
            src_start,
            count,
            output,
        } => {
            let mut dest_track = import_track(&dest)
                .with_context(|| format!("importing {}", dest.display()))?;
            let src_track = import_track(&source)
                .with_context(|| format!("importing {}", source.display()))?;
            dest_track.insert(&src_track, dest_pos, src_start, count)?;
            export_track(&dest_track, &output, DEFAULT_SAMPLE_RATE)
                .with_context(|| format!("exporting {}", output.display()))?;
            info!(
                "pasted {} samples at {}, wrote {}",
                count,
                dest_pos,
                output.display()
            );
        }

        Commands::Identify {
            target,
            pattern,
            threshold,
        } => {
            let target_track = import_track(&target)
                .with_context(|| format!("importing {}", target.display()))?;
            let pattern_track = import_track(&pattern)
                .with_context(|| format!("importing {}", pattern.display()))?;

            let occurrences = PatternDetector::with_threshold(threshold)
                .identify(&target_track.to_vec(), &pattern_track.to_vec())?;

            // One "start,end" line per occurrence (inclusive indices)
            for occurrence in &occurrences {
                println!("{},{}", occurrence.start, occurrence.end);
            }
            info!("{} occurrence(s) found", occurrences.len());
        }
    }

    Ok(())
}
