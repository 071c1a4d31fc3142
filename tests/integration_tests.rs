//! Integration Tests
//!
//! End-to-end tests for track editing and pattern detection, including the
//! large-track behavior the library is built for: long edit sequences are
//! checked against a flat-vector reference model.

use pretty_assertions::assert_eq;
use test_case::test_case;

use wavetrack::io::{export_track, import_track, DEFAULT_SAMPLE_RATE};
use wavetrack::{PatternDetector, Sample, Track};

/// Deterministic pseudo-random sequence for stress tests
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() as usize) % bound.max(1)
    }
}

// === Edit scenarios ===

#[test]
fn test_write_then_read_full_track() {
    let mut track = Track::new();
    let data: Vec<Sample> = (1..=10).collect();
    track.write(&data, 0);

    assert_eq!(track.len(), 10);
    assert_eq!(track.read(0, 10), data);
}

#[test]
fn test_sequential_writes_extend() {
    let mut track = Track::new();
    track.write(&[1, 2, 3, 4, 5], 0);
    track.write(&[6, 7, 8, 9, 10], 5);

    assert_eq!(track.len(), 10);
    assert_eq!(track.read(0, 10), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_overwrite_in_place() {
    let mut track = Track::from_samples(&(1..=10).collect::<Vec<Sample>>());
    track.write(&[-1, -2, -3], 3);

    assert_eq!(track.read(0, 10), vec![1, 2, 3, -1, -2, -3, 7, 8, 9, 10]);
}

#[test]
fn test_delete_then_read() {
    let data: Vec<Sample> = (1..=10).map(|v| v * 10).collect();
    let mut track = Track::from_samples(&data);

    assert!(track.delete_range(3, 4));
    assert_eq!(track.read(0, 6), vec![10, 20, 30, 80, 90, 100]);
}

#[test]
fn test_cross_track_insert() {
    let source = Track::from_samples(&[100, 101, 102, 103, 104]);
    let mut dest = Track::from_samples(&(1..=10).collect::<Vec<Sample>>());

    dest.insert(&source, 5, 1, 3).unwrap();
    assert_eq!(
        dest.to_vec(),
        vec![1, 2, 3, 4, 5, 101, 102, 103, 6, 7, 8, 9, 10]
    );
}

#[test]
fn test_detection_on_edited_track() {
    // Build a recording with a jingle spliced in twice, then find it
    let jingle = Track::from_samples(&[10, 20, 30]);
    let mut recording = Track::from_samples(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);

    recording.insert(&jingle, 3, 0, 3).unwrap();
    recording.insert(&jingle, 9, 0, 3).unwrap();
    assert_eq!(
        recording.to_vec(),
        vec![1, 2, 3, 10, 20, 30, 4, 5, 6, 10, 20, 30, 7, 8, 9]
    );

    let found = recording.identify(&jingle).unwrap();
    let intervals: Vec<(usize, usize)> = found.iter().map(|o| (o.start, o.end)).collect();
    assert_eq!(intervals, vec![(3, 5), (9, 11)]);
}

// === Boundary and length properties ===

#[test_case(0, 10, true ; "delete full track")]
#[test_case(5, 5, true ; "delete tail to exact end")]
#[test_case(5, 6, false ; "delete one past end")]
#[test_case(10, 0, true ; "empty delete at end")]
#[test_case(11, 0, false ; "empty delete past end")]
fn test_delete_bounds(pos: usize, count: usize, expect: bool) {
    let mut track = Track::from_samples(&(0..10).collect::<Vec<Sample>>());
    let before = track.to_vec();

    let ok = track.delete_range(pos, count);
    assert_eq!(ok, expect);
    if ok {
        assert_eq!(track.len(), 10 - count);
    } else {
        assert_eq!(track.to_vec(), before);
    }
}

#[test]
fn test_length_accounting_across_ops() {
    let mut track = Track::new();

    track.write(&[1; 100], 0);
    assert_eq!(track.len(), 100);

    track.write(&[2; 50], 80); // 30 beyond the end
    assert_eq!(track.len(), 130);

    assert!(track.delete_range(0, 30));
    assert_eq!(track.len(), 100);

    let other = Track::from_samples(&[3; 25]);
    track.insert(&other, 50, 0, 25).unwrap();
    assert_eq!(track.len(), 125);
}

// === Large-track stress ===

#[test]
fn test_large_write_and_partial_reads() {
    let data: Vec<Sample> = (0..50_000).map(|i| (i % 30_000) as Sample).collect();
    let track = Track::from_samples(&data);

    assert_eq!(track.len(), 50_000);
    assert_eq!(track.read(25_000, 100), data[25_000..25_100].to_vec());
    assert_eq!(track.read(49_990, 100), data[49_990..].to_vec());
}

#[test]
fn test_many_edits_match_flat_model() {
    // Every operation mirrored onto a plain Vec<i16>; the segmented track
    // must agree with the flat model after each step
    let mut track = Track::new();
    let mut model: Vec<Sample> = Vec::new();
    let mut rng = Lcg(0x5eed);

    for step in 0..400usize {
        match step % 4 {
            // write (possibly past the end)
            0 => {
                let pos = rng.below(model.len() + 50);
                let len = 1 + rng.below(40);
                let data: Vec<Sample> =
                    (0..len).map(|i| (step * 31 + i) as Sample).collect();

                if pos + len > model.len() {
                    model.resize(pos + len, 0);
                }
                model[pos..pos + len].copy_from_slice(&data);
                track.write(&data, pos);
            }
            // delete
            1 => {
                let pos = rng.below(model.len() + 1);
                let count = rng.below(30);
                let expect = pos + count <= model.len();

                assert_eq!(track.delete_range(pos, count), expect);
                if expect {
                    model.drain(pos..pos + count);
                }
            }
            // insert from a slice
            2 => {
                let data: Vec<Sample> = (0..20).map(|i| (step * 7 + i) as Sample).collect();
                let pos = rng.below(model.len() + 1);
                let src_start = rng.below(25);
                let count = rng.below(25);

                track.insert_samples(&data, pos, src_start, count).unwrap();
                let end = (src_start + count).min(data.len());
                if src_start < end {
                    model.splice(pos..pos, data[src_start..end].iter().copied());
                }
            }
            // cross-track insert
            _ => {
                let src_data: Vec<Sample> =
                    (0..30).map(|i| (step * 13 + i) as Sample).collect();
                let source = Track::from_samples(&src_data);
                let pos = rng.below(model.len() + 1);

                track.insert(&source, pos, 5, 10).unwrap();
                model.splice(pos..pos, src_data[5..15].iter().copied());
            }
        }

        assert_eq!(track.len(), model.len(), "length diverged at step {}", step);
    }

    assert_eq!(track.to_vec(), model);
}

#[test]
fn test_detection_scales_to_large_targets() {
    let pattern: Vec<Sample> = (0..200).map(|i| ((i * 997) % 2048) as Sample - 1024).collect();

    let mut target = vec![0 as Sample; 60_000];
    for &at in &[1_000, 30_000, 59_800] {
        target[at..at + 200].copy_from_slice(&pattern);
    }

    let found = PatternDetector::new().identify(&target, &pattern).unwrap();
    let starts: Vec<usize> = found.iter().map(|o| o.start).collect();
    assert_eq!(starts, vec![1_000, 30_000, 59_800]);

    for pair in found.windows(2) {
        assert!(pair[1].start > pair[0].end);
    }
}

// === WAV pipeline ===

#[test]
fn test_file_cut_paste_identify_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let recording_path = dir.path().join("recording.wav");
    let jingle_path = dir.path().join("jingle.wav");

    let jingle: Vec<Sample> = vec![500, -500, 1000, -1000];
    let mut recording = Track::from_samples(&[1; 2_000]);
    recording.write(&jingle, 400);
    recording.write(&jingle, 1_200);

    export_track(&recording, &recording_path, DEFAULT_SAMPLE_RATE).unwrap();
    export_track(
        &Track::from_samples(&jingle),
        &jingle_path,
        DEFAULT_SAMPLE_RATE,
    )
    .unwrap();

    // Re-import and scan
    let target = import_track(&recording_path).unwrap();
    let pattern = import_track(&jingle_path).unwrap();
    let found = target.identify(&pattern).unwrap();
    let intervals: Vec<(usize, usize)> = found.iter().map(|o| (o.start, o.end)).collect();
    assert_eq!(intervals, vec![(400, 403), (1_200, 1_203)]);

    // Cut the first occurrence out and verify only the second remains
    let mut cut = target.clone();
    assert!(cut.delete_range(400, 4));
    let found = cut.identify(&pattern).unwrap();
    let intervals: Vec<(usize, usize)> = found.iter().map(|o| (o.start, o.end)).collect();
    assert_eq!(intervals, vec![(1_196, 1_199)]);
}
