//! Error types for table layout.
//!
//! Layout computation is the only fallible stage: every other malformed
//! input (unknown border names, out-of-range alignment tokens, ratio sums
//! over 100) degrades to a documented fallback instead of failing.

use thiserror::Error;

/// Errors raised while computing column widths.
///
/// Both variants are fatal configuration errors: a column that would render
/// narrower than 3 characters has no room for its margin and at least one
/// character of content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A ratio entry resolves to a column narrower than 3 characters.
    #[error("ratio {ratio} for column {index} is too low: it resolves to {width} characters, minimum is 3")]
    RatioTooLow {
        /// Index of the offending column.
        index: usize,
        /// The ratio value as parsed from the option string.
        ratio: i64,
        /// The width the ratio resolved to.
        width: i64,
    },

    /// An under-100 ratio sum leaves less than 3 characters for each of
    /// the columns not covered by the ratio list.
    #[error("ratio sum {sum} leaves only {width} characters for each remaining column, minimum is 3")]
    RatioRemainderTooLow {
        /// Sum of all provided ratio entries.
        sum: i64,
        /// The per-column share of the leftover width.
        width: i64,
    },
}
