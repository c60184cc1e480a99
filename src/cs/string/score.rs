/// Edit distance between a reference and a recognized hypothesis, with the
/// token counts needed to put it in proportion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub distance: usize,
    /// Number of tokens in the reference.
    pub reference_len: usize,
    /// Number of tokens in the hypothesis.
    pub hypothesis_len: usize,
}

impl Score {
    pub fn new(distance: usize, reference_len: usize, hypothesis_len: usize) -> Self {
        Self {
            distance,
            reference_len,
            hypothesis_len,
        }
    }

    /// Edits per reference token: the character error rate over code points or
    /// graphemes, the word error rate over words.
    ///
    /// An empty reference yields `0.0` against an empty hypothesis and `1.0`
    /// otherwise. The rate exceeds `1.0` when the hypothesis has extra tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use editscore::string::Score;
    ///
    /// let score = Score::new(1, 4, 4);
    /// assert_eq!(score.error_rate(), 0.25);
    /// ```
    pub fn error_rate(&self) -> f64 {
        if self.reference_len == 0 {
            return if self.hypothesis_len == 0 { 0.0 } else { 1.0 };
        }
        self.distance as f64 / self.reference_len as f64
    }

    /// `1 - distance / max(len)`, in `[0, 1]`. Two empty inputs are identical.
    pub fn similarity(&self) -> f64 {
        let longest = self.reference_len.max(self.hypothesis_len);
        if longest == 0 {
            return 1.0;
        }
        1.0 - self.distance as f64 / longest as f64
    }

    pub fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_error_rate() {
        assert_relative_eq!(Score::new(3, 6, 7).error_rate(), 0.5);
        assert_relative_eq!(Score::new(0, 5, 5).error_rate(), 0.0);
        // Insertions can push the rate past one
        assert_relative_eq!(Score::new(4, 2, 6).error_rate(), 2.0);
    }

    #[test]
    fn test_empty_reference() {
        assert_relative_eq!(Score::new(0, 0, 0).error_rate(), 0.0);
        assert_relative_eq!(Score::new(3, 0, 3).error_rate(), 1.0);
        assert_relative_eq!(Score::new(0, 0, 0).similarity(), 1.0);
        assert_relative_eq!(Score::new(3, 0, 3).similarity(), 0.0);
    }

    #[test]
    fn test_similarity() {
        // kitten -> sitting
        assert_relative_eq!(Score::new(3, 6, 7).similarity(), 4.0 / 7.0);
        assert!(Score::new(0, 4, 4).is_exact());
        assert!(!Score::new(1, 4, 4).is_exact());
    }
}
