//! Text handling around the edit distance core.
//!
//! - Tokenization of `&str` inputs into code points, grapheme clusters or words
//! - Scores relating a recognized hypothesis to its reference text

pub mod score;
pub mod tokenize;

pub use score::Score;
pub use tokenize::{Tokenization, Tokens};
