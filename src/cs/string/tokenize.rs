use std::str::CharIndices;

use unicode_segmentation::{Graphemes, UnicodeSegmentation, UnicodeWords};

/// How a `&str` is split into the tokens the edit distance is computed over.
///
/// No case folding or Unicode normalization is applied; `"É"` written as one
/// code point and as `E` + combining accent are different inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tokenization {
    /// One token per Unicode scalar value (`char`).
    #[default]
    CodePoints,
    /// One token per extended grapheme cluster.
    Graphemes,
    /// One token per Unicode word; whitespace and punctuation are dropped.
    Words,
}

impl Tokenization {
    /// Splits `text` into borrowed token slices.
    ///
    /// # Examples
    ///
    /// ```
    /// use editscore::string::Tokenization;
    ///
    /// assert_eq!(Tokenization::CodePoints.tokenize("你好"), vec!["你", "好"]);
    /// assert_eq!(Tokenization::Words.tokenize("Hello, world!"), vec!["Hello", "world"]);
    /// ```
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.tokens(text).collect()
    }

    /// Lazily yields the tokens of `text` without collecting them.
    pub fn tokens<'a>(&self, text: &'a str) -> Tokens<'a> {
        let inner = match self {
            Tokenization::CodePoints => TokensInner::CodePoints {
                text,
                chars: text.char_indices(),
            },
            Tokenization::Graphemes => TokensInner::Graphemes(text.graphemes(true)),
            Tokenization::Words => TokensInner::Words(text.unicode_words()),
        };
        Tokens { inner }
    }

    /// Number of tokens in `text`, without allocating.
    pub fn count(&self, text: &str) -> usize {
        match self {
            Tokenization::CodePoints => text.chars().count(),
            _ => self.tokens(text).count(),
        }
    }
}

/// Iterator over the tokens of a string, see [`Tokenization::tokens`].
pub struct Tokens<'a> {
    inner: TokensInner<'a>,
}

enum TokensInner<'a> {
    CodePoints {
        text: &'a str,
        chars: CharIndices<'a>,
    },
    Graphemes(Graphemes<'a>),
    Words(UnicodeWords<'a>),
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        match &mut self.inner {
            TokensInner::CodePoints { text, chars } => {
                let text: &'a str = *text;
                chars.next().map(|(i, c)| &text[i..i + c.len_utf8()])
            }
            TokensInner::Graphemes(graphemes) => graphemes.next(),
            TokensInner::Words(words) => words.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(Tokenization::CodePoints.tokenize("").is_empty());
        assert!(Tokenization::Graphemes.tokenize("").is_empty());
        assert!(Tokenization::Words.tokenize("").is_empty());
        assert!(Tokenization::Words.tokenize("  ,. ").is_empty());
    }

    #[test]
    fn test_code_points() {
        assert_eq!(Tokenization::CodePoints.tokenize("abc"), vec!["a", "b", "c"]);
        // "e" followed by U+0301 COMBINING ACUTE ACCENT is two code points
        assert_eq!(Tokenization::CodePoints.tokenize("e\u{301}").len(), 2);
    }

    #[test]
    fn test_graphemes() {
        assert_eq!(Tokenization::Graphemes.tokenize("e\u{301}x"), vec!["e\u{301}", "x"]);
        assert_eq!(Tokenization::Graphemes.tokenize("你好吗").len(), 3);
    }

    #[test]
    fn test_words() {
        assert_eq!(
            Tokenization::Words.tokenize("the quick  brown\tfox."),
            vec!["the", "quick", "brown", "fox"]
        );
        // Case is preserved
        assert_eq!(Tokenization::Words.tokenize("Hola Mundo"), vec!["Hola", "Mundo"]);
    }

    #[test]
    fn test_count_matches_tokenize() {
        let text = "Turn on the light, cafe\u{301} 你好!";
        for tokenization in [
            Tokenization::CodePoints,
            Tokenization::Graphemes,
            Tokenization::Words,
        ] {
            assert_eq!(
                tokenization.count(text),
                tokenization.tokenize(text).len(),
                "{tokenization:?}"
            );
            assert_eq!(
                tokenization.tokens(text).collect::<Vec<_>>(),
                tokenization.tokenize(text)
            );
        }
    }

    #[test]
    fn test_default_is_code_points() {
        assert_eq!(Tokenization::default(), Tokenization::CodePoints);
    }
}
