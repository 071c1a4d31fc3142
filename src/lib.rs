//! wavetrack - In-Memory Editable Audio Sample Track
//!
//! An editable timeline of 16-bit PCM samples with splice-based edits and
//! advertisement-pattern detection:
//! - [`Track`]: segmented sample storage with overwrite-with-extension
//!   writes, bounded reads, range deletion and cross-buffer insertion.
//!   Edits splice segments instead of rebuilding the buffer, so they scale
//!   with the edit size, not the track size.
//! - [`PatternDetector`]: threshold cross-correlation scan producing an
//!   ordered list of non-overlapping match intervals.
//! - [`io`]: 16-bit mono WAV import/export at the track boundary.
//!
//! Tracks are single-threaded by contract: mutations take `&mut self` and
//! reads take `&self`, so the borrow checker enforces the single-writer /
//! multiple-reader discipline. For concurrent readers over a mutating
//! track, `clone()` is a cheap snapshot (segments share their buffers).

pub mod detect;
pub mod error;
pub mod io;
pub mod segment;
pub mod track;

pub use detect::{Occurrence, PatternDetector, DETECTION_THRESHOLD};
pub use error::{Result, TrackError};
pub use segment::Sample;
pub use track::Track;
