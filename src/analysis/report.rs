//! Per-cookie analysis records.

use super::distance::mean_pairwise_distance;
use super::samples::{FetchedCookies, SampleError, SampleStore, TokenSampleSet};
use super::score::randomness_score;
use super::structure::{find_timestamp, shared_mask, TimestampMatch};
use serde::Serialize;

/// Analysis result for one cookie name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    pub name: String,
    pub samples: TokenSampleSet,
    pub mask: String,
    pub timestamp: Option<TimestampMatch>,
    pub mean_distance: f64,
    pub score: f64,
}

impl AnalysisRecord {
    /// Run every analyzer over one sample set.
    ///
    /// `reference_timestamp` is the decimal UNIX time taken before fetching.
    pub fn analyze(name: &str, samples: &TokenSampleSet, reference_timestamp: &str) -> Self {
        let mask = shared_mask(samples);
        let timestamp = find_timestamp(samples, reference_timestamp);
        let mean_distance = mean_pairwise_distance(samples);
        let score = randomness_score(mean_distance, samples);

        tracing::debug!(
            cookie = name,
            samples = samples.len(),
            mean_distance,
            score,
            ?timestamp,
            "analyzed cookie"
        );

        Self {
            name: name.to_string(),
            samples: samples.clone(),
            mask,
            timestamp,
            mean_distance,
            score,
        }
    }

    /// The timestamp match, if it is longer than `threshold` digits.
    pub fn timestamp_hint(&self, threshold: usize) -> Option<TimestampMatch> {
        self.timestamp.filter(|found| found.exceeds(threshold))
    }
}

/// Records for every cookie seen during a run, in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub reference_timestamp: String,
    pub records: Vec<AnalysisRecord>,
}

impl AnalysisReport {
    pub fn build(store: &SampleStore, reference_timestamp: &str) -> Self {
        let records = store
            .iter()
            .map(|(name, samples)| AnalysisRecord::analyze(name, samples, reference_timestamp))
            .collect();

        Self {
            reference_timestamp: reference_timestamp.to_string(),
            records,
        }
    }

    /// Group raw fetch results and analyze them.
    ///
    /// Fails only when no fetch returned any cookie.
    pub fn from_fetches<I>(fetches: I, reference_timestamp: &str) -> Result<Self, SampleError>
    where
        I: IntoIterator<Item = FetchedCookies>,
    {
        let store = SampleStore::from_fetches(fetches)?;
        Ok(Self::build(&store, reference_timestamp))
    }

    pub fn get(&self, name: &str) -> Option<&AnalysisRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch(cookies: &[(&str, &str)]) -> FetchedCookies {
        cookies
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn builds_one_record_per_cookie_in_first_seen_order() {
        let fetches = vec![
            fetch(&[("sid", "sess_1609459200_a"), ("lang", "en")]),
            fetch(&[]),
            fetch(&[("sid", "sess_1609459200_b"), ("lang", "en"), ("late", "x")]),
        ];
        let report = AnalysisReport::from_fetches(fetches, "1609459200").unwrap();

        let names: Vec<_> = report.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["sid", "lang", "late"]);
        assert_eq!(report.reference_timestamp, "1609459200");

        let sid = report.get("sid").unwrap();
        assert_eq!(sid.samples.values(), ["sess_1609459200_a", "sess_1609459200_b"]);
        assert_eq!(sid.mask, "sess_1609459200_ ");
        assert_eq!(sid.timestamp, Some(TimestampMatch { offset: 5, length: 10 }));
        assert_eq!(sid.mean_distance, 0.5);
        assert!(sid.timestamp_hint(7).is_some());

        let lang = report.get("lang").unwrap();
        assert_eq!(lang.mask, "en");
        assert_eq!(lang.mean_distance, 0.0);
        assert_eq!(lang.score, 0.0);
        assert_eq!(lang.timestamp, None);
    }

    #[test]
    fn single_sample_cookie_is_analyzable() {
        let report = AnalysisReport::from_fetches(vec![fetch(&[("once", "abc")])], "1").unwrap();
        let once = report.get("once").unwrap();
        assert_eq!(once.mean_distance, 0.0);
        assert_eq!(once.score, 0.0);
        assert_eq!(once.mask, "abc");
    }

    #[test]
    fn short_timestamp_match_is_hidden_by_threshold() {
        let record = AnalysisRecord::analyze(
            "t",
            &TokenSampleSet::new(vec!["x160y".into(), "x160z".into()]).unwrap(),
            "1609459200",
        );
        assert_eq!(record.timestamp, Some(TimestampMatch { offset: 1, length: 3 }));
        assert_eq!(record.timestamp_hint(7), None);
        assert!(record.timestamp_hint(2).is_some());
    }

    #[test]
    fn no_cookies_at_all_fails() {
        let result = AnalysisReport::from_fetches(vec![fetch(&[]), fetch(&[])], "1");
        assert_eq!(result.unwrap_err(), SampleError::NoSamples);
    }

    #[test]
    fn score_matches_distance_and_length() {
        let samples = TokenSampleSet::new(vec!["abcdef".into(), "abXXXX".into()]).unwrap();
        let record = AnalysisRecord::analyze("c", &samples, "0");
        // Distance 4 off the diagonal, mean over four cells is 2.
        assert_eq!(record.mean_distance, 2.0);
        assert!((record.score - 2.0 / 6.0 * 100.0).abs() < 1e-9);
    }
}
