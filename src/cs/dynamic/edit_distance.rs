//! Levenshtein (edit) distance.
//!
//! The free functions are total over any pair of finite sequences and run in
//! O(n·m) time with O(min(n, m)) working memory. [`EditDistanceEngine`] wraps
//! the same computation with a cell limit and a tokenization policy for text.

use std::borrow::Borrow;

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::cs::dynamic::edit_alignment::{self, Alignment};
use crate::cs::string::{Score, Tokenization};
use crate::error::{EditDistanceError, Result};

/// Default cap on `(len(a) + 1) * (len(b) + 1)`, roughly two 10k-token inputs.
pub const DEFAULT_MAX_CELLS: u64 = 100_000_000;

/// Computes the Levenshtein distance between two token sequences.
///
/// The distance is the minimum number of single-token insertions, deletions
/// and substitutions, each of unit cost, required to change `a` into `b`.
/// Tokens are compared with `==` only.
///
/// # Examples
///
/// ```
/// use editscore::dynamic::levenshtein;
///
/// assert_eq!(levenshtein(&[1, 2, 3], &[1, 3]), 1);
///
/// let reference = ["turn", "on", "the", "light"];
/// let recognized = ["turn", "the", "lights"];
/// assert_eq!(levenshtein(&reference, &recognized), 2);
/// ```
pub fn levenshtein<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Rows are sized by the shorter sequence.
    let (longer, shorter) = if a.len() < b.len() { (b, a) } else { (a, b) };
    levenshtein_streamed(longer.iter(), shorter)
}

/// Core row loop: `outer` is consumed once, only `row` is held in memory.
///
/// Working storage is two rows of `row.len() + 1` counters, so callers pass
/// the shorter sequence as `row`. The distance is symmetric, so which side
/// is streamed does not change the result.
fn levenshtein_streamed<T, I>(outer: I, row: &[T]) -> usize
where
    T: PartialEq,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    if row.is_empty() {
        return outer.into_iter().count();
    }

    let width = row.len();
    let mut prev_row = (0..=width).collect::<Vec<usize>>();
    let mut curr_row = vec![0; width + 1];

    for (i, x) in outer.into_iter().enumerate() {
        let x = x.borrow();
        curr_row[0] = i + 1;

        for (j, y) in row.iter().enumerate() {
            let cost = usize::from(x != y);

            // The recurrence relation:
            //   curr_row[j+1] = minimum of:
            //     1) curr_row[j] + 1     (insertion)
            //     2) prev_row[j+1] + 1   (deletion)
            //     3) prev_row[j] + cost  (substitution)
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[width]
}

/// Computes the Levenshtein distance between two strings, one token per
/// Unicode code point.
///
/// Only the shorter string is collected; the longer one is streamed.
///
/// # Examples
///
/// ```
/// use editscore::dynamic::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("", ""), 0);
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("你好", "你好吗"), 1);
/// ```
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let (longer, shorter) = if a.chars().count() < b.chars().count() {
        (b, a)
    } else {
        (a, b)
    };
    let row: Vec<char> = shorter.chars().collect();
    levenshtein_streamed(longer.chars(), &row)
}

/// Configuration for [`EditDistanceEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on the conceptual table size `(len(a) + 1) * (len(b) + 1)`.
    /// `None` disables the check.
    pub max_cells: Option<u64>,
    /// How `&str` inputs are split into tokens.
    pub tokenization: Tokenization,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_cells: Some(DEFAULT_MAX_CELLS),
            tokenization: Tokenization::CodePoints,
        }
    }
}

impl EngineConfig {
    pub fn max_cells(mut self, max_cells: Option<u64>) -> Self {
        self.max_cells = max_cells;
        self
    }

    pub fn tokenization(mut self, tokenization: Tokenization) -> Self {
        self.tokenization = tokenization;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.max_cells == Some(0) {
            return Err(EditDistanceError::invalid_config(
                "max_cells must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Edit distance with an explicit resource policy.
///
/// Inputs whose table would exceed `max_cells` are rejected with
/// [`EditDistanceError::InputTooLarge`] before any allocation. The engine holds
/// no state between calls and can be shared across threads.
///
/// # Examples
///
/// ```
/// use editscore::{EditDistanceEngine, EngineConfig};
/// use editscore::string::Tokenization;
///
/// let engine = EditDistanceEngine::with_config(
///     EngineConfig::default().tokenization(Tokenization::Words),
/// )
/// .unwrap();
///
/// let score = engine.score("turn on the light", "turn the lights").unwrap();
/// assert_eq!(score.distance, 2);
/// assert_eq!(score.error_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EditDistanceEngine {
    config: EngineConfig,
}

impl EditDistanceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes the edit distance between two token sequences.
    pub fn compute<T: PartialEq>(&self, a: &[T], b: &[T]) -> Result<usize> {
        self.check_limit(a.len(), b.len())?;
        if a.len() < b.len() {
            debug!("swapping operands: {} < {} tokens", a.len(), b.len());
        }
        debug!("computing edit distance over {}x{} tokens", a.len(), b.len());
        Ok(levenshtein(a, b))
    }

    /// Tokenizes both strings with the configured [`Tokenization`], then
    /// computes their edit distance.
    ///
    /// Tokens are counted first and the cell limit checked before anything is
    /// collected; afterwards only the shorter side is held in memory.
    pub fn compute_str(&self, a: &str, b: &str) -> Result<usize> {
        let tokenization = self.config.tokenization;
        let a_len = tokenization.count(a);
        let b_len = tokenization.count(b);
        self.check_limit(a_len, b_len)?;
        Ok(self.streamed_distance((a, a_len), (b, b_len)))
    }

    /// Scores a recognized `hypothesis` against its `reference` text.
    pub fn score(&self, reference: &str, hypothesis: &str) -> Result<Score> {
        let tokenization = self.config.tokenization;
        let reference_len = tokenization.count(reference);
        let hypothesis_len = tokenization.count(hypothesis);
        self.check_limit(reference_len, hypothesis_len)?;
        let distance =
            self.streamed_distance((reference, reference_len), (hypothesis, hypothesis_len));
        Ok(Score::new(distance, reference_len, hypothesis_len))
    }

    /// Computes the edit script turning `a` into `b`.
    ///
    /// The full table is kept for the backtrace, so memory is O(n·m); the
    /// cell limit applies to it directly.
    pub fn align<T: PartialEq>(&self, a: &[T], b: &[T]) -> Result<Alignment> {
        self.check_limit(a.len(), b.len())?;
        Ok(edit_alignment::align(a, b))
    }

    /// Like [`EditDistanceEngine::align`], over tokenized strings.
    pub fn align_str(&self, a: &str, b: &str) -> Result<Alignment> {
        let tokenization = self.config.tokenization;
        self.check_limit(tokenization.count(a), tokenization.count(b))?;
        Ok(edit_alignment::align(
            &tokenization.tokenize(a),
            &tokenization.tokenize(b),
        ))
    }

    /// Computes the distance of every `(a, b)` pair in parallel.
    ///
    /// Results are in input order. A pair rejected by the cell limit does not
    /// affect the others.
    pub fn compute_batch<S>(&self, pairs: &[(S, S)]) -> Vec<Result<usize>>
    where
        S: AsRef<str> + Sync,
    {
        trace!("computing batch of {} pairs", pairs.len());
        pairs
            .par_iter()
            .map(|(a, b)| self.compute_str(a.as_ref(), b.as_ref()))
            .collect()
    }

    /// Distance between two texts whose token counts are already known.
    fn streamed_distance<'t>(&self, a: (&'t str, usize), b: (&'t str, usize)) -> usize {
        let ((longer, longer_len), (shorter, shorter_len)) = if a.1 < b.1 {
            debug!("swapping operands: {} < {} tokens", a.1, b.1);
            (b, a)
        } else {
            (a, b)
        };
        debug!(
            "computing edit distance over {}x{} tokens",
            longer_len, shorter_len
        );

        let tokenization = self.config.tokenization;
        let row = tokenization.tokenize(shorter);
        levenshtein_streamed(tokenization.tokens(longer), &row)
    }

    fn check_limit(&self, a_len: usize, b_len: usize) -> Result<()> {
        let Some(limit) = self.config.max_cells else {
            return Ok(());
        };
        let cells = (a_len as u64 + 1).saturating_mul(b_len as u64 + 1);
        if cells > limit {
            warn!(
                "rejecting {}x{} token input: {} cells exceeds limit {}",
                a_len, b_len, cells, limit
            );
            return Err(EditDistanceError::InputTooLarge { cells, limit });
        }
        Ok(())
    }
}
