//! Grouping of fetched cookies into per-name sample sets.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Cookies observed on a single fetch, in the order the server sent them.
pub type FetchedCookies = Vec<(String, String)>;

/// Error returned when there is nothing to analyze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// Every fetch came back without a single cookie.
    NoSamples,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSamples => write!(f, "no cookies obtained"),
        }
    }
}

impl std::error::Error for SampleError {}

/// All observed values of one cookie, in fetch order.
///
/// Never empty: the only way to build one is through [`TokenSampleSet::new`],
/// which rejects an empty vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSampleSet(Vec<String>);

impl TokenSampleSet {
    /// Wrap `values`, returning `None` if there are none.
    pub fn new(values: Vec<String>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Self(values))
        }
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first sample. Reference point for the shared mask.
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    fn push(&mut self, value: String) {
        self.0.push(value);
    }
}

/// Per-name sample sets, keyed in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SampleStore {
    sets: IndexMap<String, TokenSampleSet>,
}

impl SampleStore {
    /// Group a flat sequence of `(name, value)` pairs by name.
    ///
    /// Values keep their relative order. Fails with [`SampleError::NoSamples`]
    /// if the sequence is empty.
    pub fn group<I>(pairs: I) -> Result<Self, SampleError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut sets: IndexMap<String, TokenSampleSet> = IndexMap::new();
        for (name, value) in pairs {
            match sets.get_mut(&name) {
                Some(set) => set.push(value),
                None => {
                    sets.insert(name, TokenSampleSet(vec![value]));
                }
            }
        }

        if sets.is_empty() {
            return Err(SampleError::NoSamples);
        }
        Ok(Self { sets })
    }

    /// Group the cookies of several fetches, preserving fetch order.
    pub fn from_fetches<I>(fetches: I) -> Result<Self, SampleError>
    where
        I: IntoIterator<Item = FetchedCookies>,
    {
        Self::group(fetches.into_iter().flatten())
    }

    /// Number of distinct cookie names.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&TokenSampleSet> {
        self.sets.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenSampleSet)> {
        self.sets.iter().map(|(name, set)| (name.as_str(), set))
    }
}
