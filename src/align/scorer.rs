//! Fuzzy similarity scoring.

use super::normalize::{Normalization, Normalizer};

/// Similarity between two lines on a 0-100 scale.
///
/// The locator only relies on this capability, so any deterministic
/// function can stand in for the default edit-distance ratio.
pub trait Scorer {
    fn score(&self, a: &str, b: &str) -> f64;
}

impl<F> Scorer for F
where
    F: Fn(&str, &str) -> f64,
{
    fn score(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// Indel similarity scaled to 0-100, the default scorer.
///
/// Only insertions and deletions count, normalized by the summed length:
/// `100 * (1 - indel / (len(a) + len(b)))`. One dropped character in a short
/// line (a page number losing its trailing dot) still clears a cutoff of 90.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndelRatio;

impl Scorer for IndelRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let total = a.len() + b.len();
        if total == 0 {
            return 100.0;
        }

        let indel = total - 2 * lcs_length(&a, &b);
        (1.0 - indel as f64 / total as f64) * 100.0
    }
}

/// Length of the longest common subsequence, two DP rows.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Normalized Levenshtein similarity scaled to 0-100.
///
/// Stricter than [`IndelRatio`]: a substitution costs one edit and the
/// distance is divided by the longer length only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl Scorer for LevenshteinRatio {
    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::normalized_levenshtein(a, b) * 100.0
    }
}

/// Exact equality: 100 or 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl Scorer for ExactMatch {
    fn score(&self, a: &str, b: &str) -> f64 {
        if a == b {
            100.0
        } else {
            0.0
        }
    }
}

/// Scores after normalizing both sides.
///
/// `S` may be unsized, so `Box<Normalized<dyn Scorer>>` holds any scorer.
#[derive(Debug, Clone)]
pub struct Normalized<S: ?Sized> {
    normalizer: Normalizer,
    inner: S,
}

impl<S: Scorer> Normalized<S> {
    pub fn new(inner: S, normalization: Normalization) -> Self {
        Self {
            normalizer: Normalizer::new(normalization),
            inner,
        }
    }
}

impl<S: Scorer + ?Sized> Normalized<S> {
    pub fn normalization(&self) -> Normalization {
        self.normalizer.settings()
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Scorer + ?Sized> Scorer for Normalized<S> {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a = self.normalizer.apply(a);
        let b = self.normalizer.apply(b);
        self.inner.score(&a, &b)
    }
}
