//! Segmented audio track
//!
//! [`Track`] is the editable sample timeline. Storage is a vector of
//! [`Segment`]s whose concatenation is the logical sample sequence, plus a
//! prefix-start index so a timeline position maps to a segment in
//! `O(log s)` for `s` segments. Every mutation splits at most two boundary
//! segments and splices whole segments in or out, so edit cost scales with
//! the data being edited and the segment count, never with the total sample
//! count. Adjacent segments that are contiguous windows of the same buffer
//! are re-merged after each mutation to keep `s` bounded.
//!
//! Invariants maintained by every operation (including failure paths):
//! - the cached total length equals the sum of segment lengths
//! - segments cover `[0, len)` with no gaps and no overlaps
//! - no segment is empty

use log::debug;

use crate::detect::{Occurrence, PatternDetector};
use crate::error::{Result, TrackError};
use crate::segment::{Sample, Segment};

/// An editable, in-memory audio sample track
///
/// A track is created empty and mutated exclusively through
/// [`write`](Track::write), [`delete_range`](Track::delete_range) and
/// [`insert`](Track::insert). Cloning a track is cheap: segments share
/// their sample buffers, and buffers are never mutated in place.
///
/// # Example
/// ```
/// use wavetrack::Track;
///
/// let mut track = Track::new();
/// track.write(&[1, 2, 3, 4, 5], 0);
/// track.write(&[6, 7, 8, 9, 10], 5);
/// assert_eq!(track.len(), 10);
/// assert_eq!(track.read(0, 10), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Track {
    /// Segments in timeline order
    segments: Vec<Segment>,
    /// `starts[i]` is the timeline position of `segments[i]`
    starts: Vec<usize>,
    /// Cached total sample count
    total_len: usize,
}

impl Track {
    /// Create an empty track
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a track containing a copy of the given samples
    pub fn from_samples(samples: &[Sample]) -> Self {
        let mut track = Self::new();
        track.write(samples, 0);
        track
    }

    /// Total number of samples on the timeline
    #[inline]
    pub fn len(&self) -> usize {
        self.total_len
    }

    /// Check if the track contains no samples
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    /// Number of internal segments (diagnostic; not part of the timeline
    /// contract — a single segment is always a valid representation)
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Write `data` starting at `pos`, overwriting existing samples
    ///
    /// If the write reaches past the current end, the track is extended
    /// first: any gap between the old length and `pos` is zero-filled, and
    /// the length becomes `max(len, pos + data.len())`. The length never
    /// decreases. Writing an empty slice is a no-op.
    pub fn write(&mut self, data: &[Sample], pos: usize) {
        if data.is_empty() {
            return;
        }

        // Zero-fill any gap between the current end and the write position
        if pos > self.total_len {
            let gap = pos - self.total_len;
            debug!("write: zero-filling gap of {} samples at {}", gap, self.total_len);
            self.segments.push(Segment::zeros(gap));
            self.starts.push(self.total_len);
            self.total_len += gap;
        }

        let end = pos + data.len();
        let overlap_end = end.min(self.total_len);
        self.replace_range(pos, overlap_end, vec![Segment::from_samples(data)]);
    }

    /// Read up to `count` samples starting at `start`
    ///
    /// Returns the samples in `[start, min(start + count, len))`. Reading
    /// at or past the end yields an empty vector; the track is never
    /// extended. Pure and side-effect-free.
    pub fn read(&self, start: usize, count: usize) -> Vec<Sample> {
        if start >= self.total_len {
            return Vec::new();
        }
        let end = start.saturating_add(count).min(self.total_len);

        let mut out = Vec::with_capacity(end - start);
        let mut idx = self.segment_index(start);
        let mut pos = start;
        while pos < end {
            let seg = &self.segments[idx];
            let local = pos - self.starts[idx];
            let take = (seg.len() - local).min(end - pos);
            out.extend_from_slice(&seg.as_slice()[local..local + take]);
            pos += take;
            idx += 1;
        }
        out
    }

    /// Copy of the full timeline as a flat vector
    pub fn to_vec(&self) -> Vec<Sample> {
        self.read(0, self.total_len)
    }

    /// Remove samples `[pos, pos + count)`, shifting the rest left
    ///
    /// Returns `false` and leaves the track unchanged when the range runs
    /// past the end of the track. This is a routine, recoverable condition
    /// for callers, which is why it is a `bool` and not an `Err`.
    /// `count == 0` is a successful no-op.
    pub fn delete_range(&mut self, pos: usize, count: usize) -> bool {
        let end = match pos.checked_add(count) {
            Some(end) if end <= self.total_len => end,
            _ => return false,
        };
        if count == 0 {
            return true;
        }
        debug!("delete_range: removing [{}, {})", pos, end);
        self.replace_range(pos, end, Vec::new());
        true
    }

    /// Splice samples from another track into this one at `dest_pos`
    ///
    /// Copies `count` samples from `source` starting at `src_start` and
    /// inserts them at `dest_pos`; everything at or after `dest_pos` shifts
    /// right. The inserted segments share `source`'s sample buffers, so no
    /// sample data is copied. If `src_start + count` runs past the end of
    /// `source`, the copy is clamped to the samples that exist.
    ///
    /// # Errors
    /// [`TrackError::PositionOutOfBounds`] if `dest_pos` exceeds the track
    /// length (`dest_pos == len` appends).
    pub fn insert(
        &mut self,
        source: &Track,
        dest_pos: usize,
        src_start: usize,
        count: usize,
    ) -> Result<()> {
        if dest_pos > self.total_len {
            return Err(TrackError::PositionOutOfBounds {
                position: dest_pos,
                length: self.total_len,
            });
        }
        let pieces = source.shared_slice(src_start, count);
        if pieces.is_empty() {
            return Ok(());
        }
        debug!(
            "insert: splicing {} piece(s) from source[{}..] at {}",
            pieces.len(),
            src_start,
            dest_pos
        );
        self.replace_range(dest_pos, dest_pos, pieces);
        Ok(())
    }

    /// Splice a slice of samples into this track at `dest_pos`
    ///
    /// Same contract as [`insert`](Track::insert) with a plain slice as the
    /// source: the copied range is `data[src_start .. src_start + count]`,
    /// clamped to what exists in `data`.
    ///
    /// # Errors
    /// [`TrackError::PositionOutOfBounds`] if `dest_pos` exceeds the track
    /// length.
    pub fn insert_samples(
        &mut self,
        data: &[Sample],
        dest_pos: usize,
        src_start: usize,
        count: usize,
    ) -> Result<()> {
        if dest_pos > self.total_len {
            return Err(TrackError::PositionOutOfBounds {
                position: dest_pos,
                length: self.total_len,
            });
        }
        let end = src_start.saturating_add(count).min(data.len());
        if src_start >= end {
            return Ok(());
        }
        self.replace_range(
            dest_pos,
            dest_pos,
            vec![Segment::from_samples(&data[src_start..end])],
        );
        Ok(())
    }

    /// Find non-overlapping occurrences of `pattern` in this track
    ///
    /// Convenience wrapper over [`PatternDetector`] with the default 95%
    /// energy threshold.
    ///
    /// # Errors
    /// [`TrackError::EmptyPattern`] if `pattern` has no samples.
    pub fn identify(&self, pattern: &Track) -> Result<Vec<Occurrence>> {
        PatternDetector::new().identify(&self.to_vec(), &pattern.to_vec())
    }

    // ------------------------------------------------------------------
    // Internal structure maintenance
    // ------------------------------------------------------------------

    /// Index of the segment containing timeline position `pos`
    ///
    /// Caller must ensure `pos < total_len`.
    #[inline]
    fn segment_index(&self, pos: usize) -> usize {
        debug_assert!(pos < self.total_len);
        self.starts.partition_point(|&s| s <= pos) - 1
    }

    /// Index of the first segment starting at or after `pos`
    ///
    /// Caller must ensure `pos` falls on a segment boundary (or the track
    /// end), which [`split_at`](Track::split_at) guarantees.
    #[inline]
    fn boundary_index(&self, pos: usize) -> usize {
        self.starts.partition_point(|&s| s < pos)
    }

    /// Split the segment containing `pos` so `pos` becomes a boundary
    ///
    /// No-op if `pos` already falls on a boundary or at/past the end.
    /// Both halves keep sharing the original buffer.
    fn split_at(&mut self, pos: usize) {
        if pos == 0 || pos >= self.total_len {
            return;
        }
        let idx = self.segment_index(pos);
        let local = pos - self.starts[idx];
        if local == 0 {
            return;
        }
        let (left, right) = self.segments[idx].split_at(local);
        self.segments[idx] = left;
        self.segments.insert(idx + 1, right);
        self.starts.insert(idx + 1, pos);
    }

    /// Replace the timeline range `[start, end)` with the given segments
    ///
    /// The single structural primitive behind write, delete and insert:
    /// split at the two boundaries, splice whole segments, reindex. The
    /// splice either fully succeeds or (on caller precondition violation)
    /// panics before any state change, so invariants hold on every exit.
    fn replace_range(&mut self, start: usize, end: usize, replacement: Vec<Segment>) {
        debug_assert!(start <= end && end <= self.total_len);
        self.split_at(start);
        self.split_at(end);
        let i0 = self.boundary_index(start);
        let i1 = self.boundary_index(end);
        self.segments.splice(i0..i1, replacement);
        self.reindex();
    }

    /// Rebuild the prefix-start index and cached length; coalesce neighbors
    /// that are contiguous windows of the same buffer; drop empty segments
    fn reindex(&mut self) {
        let old = std::mem::take(&mut self.segments);
        let mut merged: Vec<Segment> = Vec::with_capacity(old.len());
        for seg in old {
            if seg.len() == 0 {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.is_adjacent(&seg) => last.merge_adjacent(&seg),
                _ => merged.push(seg),
            }
        }

        self.starts.clear();
        let mut pos = 0;
        for seg in &merged {
            self.starts.push(pos);
            pos += seg.len();
        }
        self.segments = merged;
        self.total_len = pos;
    }

    /// Segments covering `[start, start + count)` of this track, clamped to
    /// the track end, sharing the underlying buffers
    fn shared_slice(&self, start: usize, count: usize) -> Vec<Segment> {
        if start >= self.total_len || count == 0 {
            return Vec::new();
        }
        let end = start.saturating_add(count).min(self.total_len);

        let mut out = Vec::new();
        let mut idx = self.segment_index(start);
        let mut pos = start;
        while pos < end {
            let seg = &self.segments[idx];
            let local = pos - self.starts[idx];
            let take = (seg.len() - local).min(end - pos);
            out.push(seg.slice(local, take));
            pos += take;
            idx += 1;
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
