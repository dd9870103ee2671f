//! Pairwise Levenshtein distances between samples.

use super::samples::TokenSampleSet;

/// Levenshtein distance between two strings, counted in characters.
///
/// Insertions, deletions and substitutions each cost one.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Symmetric `n x n` matrix of edit distances with a zero diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    pub fn build(samples: &TokenSampleSet) -> Self {
        let values = samples.values();
        let size = values.len();
        let mut cells = vec![0; size * size];

        for i in 0..size {
            for j in (i + 1)..size {
                let distance = levenshtein(&values[i], &values[j]);
                cells[i * size + j] = distance;
                cells[j * size + i] = distance;
            }
        }

        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.size + col]
    }

    /// Arithmetic mean over all `n * n` cells.
    ///
    /// The zero diagonal is included, which pulls the mean down by a factor
    /// of `(n - 1) / n` compared to averaging distinct pairs only. Scores in
    /// [`super::score`] are calibrated against this.
    pub fn mean(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        let total: usize = self.cells.iter().sum();
        total as f64 / self.cells.len() as f64
    }
}

/// Mean of the full pairwise distance matrix of `samples`.
pub fn mean_pairwise_distance(samples: &TokenSampleSet) -> f64 {
    DistanceMatrix::build(samples).mean()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> TokenSampleSet {
        TokenSampleSet::new(values.iter().map(|v| v.to_string()).collect()).unwrap()
    }

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abcd"), 4);
        assert_eq!(levenshtein("same", "same"), 0);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("abc123", "abd128"), 2);
    }

    #[test]
    fn levenshtein_is_symmetric() {
        assert_eq!(levenshtein("sunday", "saturday"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn levenshtein_counts_characters() {
        assert_eq!(levenshtein("naïve", "naive"), 1);
    }

    #[test]
    fn single_sample_has_zero_mean() {
        let samples = set(&["anything"]);
        let matrix = DistanceMatrix::build(&samples);
        assert_eq!(matrix.size(), 1);
        assert_eq!(matrix.get(0, 0), 0);
        assert_eq!(mean_pairwise_distance(&samples), 0.0);
    }

    #[test]
    fn identical_samples_have_zero_mean() {
        let samples = set(&["tok", "tok", "tok", "tok"]);
        assert_eq!(mean_pairwise_distance(&samples), 0.0);
    }

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let samples = set(&["a1b2", "zzzz", "a1b3", "", "a1b2c3"]);
        let matrix = DistanceMatrix::build(&samples);

        for i in 0..matrix.size() {
            assert_eq!(matrix.get(i, i), 0);
            for j in 0..matrix.size() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
        assert_eq!(matrix.get(0, 2), 1);
        assert_eq!(matrix.get(1, 3), 4);
    }

    #[test]
    fn mean_includes_diagonal() {
        // Two samples at distance 4: cells are [0, 4, 4, 0].
        let samples = set(&["aaaa", "bbbb"]);
        assert_eq!(mean_pairwise_distance(&samples), 2.0);
    }

    #[test]
    fn mean_is_order_independent() {
        let forward = set(&["abc", "abd", "xyz", "abcdef"]);
        let reversed = set(&["abcdef", "xyz", "abd", "abc"]);
        let shuffled = set(&["xyz", "abc", "abcdef", "abd"]);

        let expected = mean_pairwise_distance(&forward);
        assert_eq!(mean_pairwise_distance(&reversed), expected);
        assert_eq!(mean_pairwise_distance(&shuffled), expected);
    }
}
