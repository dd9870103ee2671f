//! Statistical analysis of sampled cookie values.
//!
//! Pure and synchronous: every function here works on values that were
//! already fetched, and the reference timestamp is passed in explicitly.

mod distance;
mod report;
mod samples;
mod score;
mod structure;

pub use distance::{levenshtein, mean_pairwise_distance, DistanceMatrix};
pub use report::{AnalysisRecord, AnalysisReport};
pub use samples::{FetchedCookies, SampleError, SampleStore, TokenSampleSet};
pub use score::{average_length, randomness_score};
pub use structure::{
    find_timestamp, shared_mask, TimestampMatch, DEFAULT_TIMESTAMP_THRESHOLD, MASK_PLACEHOLDER,
};
