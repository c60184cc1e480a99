pub mod edit_alignment;
pub mod edit_distance;

// Re-export dynamic programming algorithms with descriptive names
pub use edit_alignment::{align, Alignment, EditOp, EditStep};
pub use edit_distance::{levenshtein, levenshtein_distance};
