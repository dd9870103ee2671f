//! Positional structure of a cookie: fixed characters and embedded timestamps.

use super::samples::TokenSampleSet;
use serde::Serialize;

/// Character used in a [`shared_mask`] where samples disagree.
pub const MASK_PLACEHOLDER: char = ' ';

/// Default for how many timestamp digits must match before a hit is reported.
///
/// A hit counts only when it is strictly longer than this.
pub const DEFAULT_TIMESTAMP_THRESHOLD: usize = 7;

/// Characters shared by every sample at the same position.
///
/// The mask is as long as the shortest sample (in characters). Position `k`
/// holds the first sample's character if all samples agree there, otherwise
/// [`MASK_PLACEHOLDER`].
pub fn shared_mask(samples: &TokenSampleSet) -> String {
    let rows: Vec<Vec<char>> = samples
        .values()
        .iter()
        .map(|value| value.chars().collect())
        .collect();
    let min_len = rows.iter().map(Vec::len).min().unwrap_or(0);
    let reference = &rows[0];

    (0..min_len)
        .map(|k| {
            if rows.iter().all(|row| row[k] == reference[k]) {
                reference[k]
            } else {
                MASK_PLACEHOLDER
            }
        })
        .collect()
}

/// A prefix of the reference timestamp found at the same offset in every sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimestampMatch {
    /// Character offset of the match inside each sample.
    pub offset: usize,
    /// Number of leading timestamp digits matched.
    pub length: usize,
}

impl TimestampMatch {
    /// Whether the match is long enough to be more than coincidence.
    pub fn exceeds(&self, threshold: usize) -> bool {
        self.length > threshold
    }
}

/// Look for the reference timestamp embedded at a fixed offset.
///
/// Tries successively longer prefixes of `reference`. A prefix agrees when
/// its first occurrence sits at the same offset in every sample. Returns the
/// longest agreeing prefix, or `None` when even the one-character prefix does
/// not agree.
pub fn find_timestamp(samples: &TokenSampleSet, reference: &str) -> Option<TimestampMatch> {
    let mut found = None;

    for (start, ch) in reference.char_indices() {
        let prefix = &reference[..start + ch.len_utf8()];
        let Some(offset) = common_offset(samples, prefix) else {
            break;
        };
        found = Some(TimestampMatch {
            offset,
            length: prefix.chars().count(),
        });
    }

    found
}

/// Offset of the first occurrence of `needle`, if identical in all samples.
fn common_offset(samples: &TokenSampleSet, needle: &str) -> Option<usize> {
    let mut offsets = samples.values().iter().map(|value| char_find(value, needle));
    let first = offsets.next()??;
    offsets
        .all(|offset| offset == Some(first))
        .then_some(first)
}

fn char_find(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte_idx| haystack[..byte_idx].chars().count())
}
