//! Heuristic "looks random" score.

use super::samples::TokenSampleSet;

/// Running pairwise average of sample lengths, in fetch order.
///
/// Starts at the first sample's length and folds each following length in
/// with `(acc + len) / 2`. Later samples weigh more than earlier ones, so
/// this differs from the arithmetic mean once there are more than two
/// samples. Existing scores depend on this exact reduction.
pub fn average_length(samples: &TokenSampleSet) -> f64 {
    let mut lengths = samples.values().iter().map(|value| value.chars().count() as f64);
    let first = lengths.next().unwrap_or(0.0);
    lengths.fold(first, |acc, len| (acc + len) / 2.0)
}

/// Mean edit distance as a percentage of the average sample length.
///
/// Not clamped: near-identical samples score close to zero, fully distinct
/// ones can exceed 100. Returns `0.0` when every sample is empty.
pub fn randomness_score(mean_distance: f64, samples: &TokenSampleSet) -> f64 {
    let avg_len = average_length(samples);
    if avg_len == 0.0 {
        return 0.0;
    }
    mean_distance / avg_len * 100.0
}
