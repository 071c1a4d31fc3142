//! Segment storage for tracks
//!
//! A [`Segment`] is one contiguous run of samples on a track's timeline: a
//! window (`offset`, `len`) into a reference-counted sample buffer. Edits
//! never mutate a buffer in place — they replace segments — so buffers can
//! be shared between tracks (and between segments of one track) without
//! copy-on-write.

use std::sync::Arc;

/// A single audio sample (16-bit signed PCM)
pub type Sample = i16;

/// A contiguous window into a shared sample buffer
#[derive(Debug, Clone)]
pub(crate) struct Segment {
    data: Arc<[Sample]>,
    offset: usize,
    len: usize,
}

impl Segment {
    /// Create a segment owning a copy of the given samples
    pub fn from_samples(samples: &[Sample]) -> Self {
        Self {
            data: samples.into(),
            offset: 0,
            len: samples.len(),
        }
    }

    /// Create a segment of `len` zero samples (silence)
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0 as Sample; len].into(),
            offset: 0,
            len,
        }
    }

    /// Number of samples covered by this segment
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The samples covered by this segment
    #[inline]
    pub fn as_slice(&self) -> &[Sample] {
        &self.data[self.offset..self.offset + self.len]
    }

    /// A sub-window of this segment sharing the same buffer
    ///
    /// # Panics
    /// Panics if `start + len` exceeds the segment length.
    pub fn slice(&self, start: usize, len: usize) -> Self {
        assert!(start + len <= self.len, "segment slice out of range");
        Self {
            data: Arc::clone(&self.data),
            offset: self.offset + start,
            len,
        }
    }

    /// Split into two segments at `at` (both share the buffer)
    ///
    /// # Panics
    /// Panics if `at` exceeds the segment length.
    pub fn split_at(&self, at: usize) -> (Self, Self) {
        (self.slice(0, at), self.slice(at, self.len - at))
    }

    /// True if `other` continues this segment within the same buffer
    ///
    /// Used to coalesce neighbors that a split or a partial overwrite left
    /// behind, keeping the segment count bounded over long edit sequences.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data) && self.offset + self.len == other.offset
    }

    /// Extend this segment over an adjacent successor
    ///
    /// Caller must have checked [`is_adjacent`](Self::is_adjacent).
    pub fn merge_adjacent(&mut self, other: &Self) {
        debug_assert!(self.is_adjacent(other));
        self.len += other.len;
    }
}
