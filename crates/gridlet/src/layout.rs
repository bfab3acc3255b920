//! Column width and alignment resolution.
//!
//! Widths are allocated from the table's total size, the column count, and
//! an optional ratio spec. The default is an even split of the borderless
//! width; ratios assign per-column percentages of it instead. Any column
//! that a ratio would drive below 3 characters is a fatal configuration
//! error, while a ratio sum over 100 silently falls back to the even split
//! (long-standing observable behavior, kept on purpose).

use crate::error::LayoutError;
use crate::options::Settings;
use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align content (pad on the right).
    #[default]
    Left,
    /// Center content; on odd gaps the extra space goes before the content.
    Center,
    /// Right-align content (pad on the left).
    Right,
}

impl Align {
    /// Parses an alignment token by its first letter: `c` is center, `r`
    /// is right, anything else (including an empty token) is left.
    fn parse(token: &str) -> Self {
        let token = token.trim().to_lowercase();
        if token.starts_with('c') {
            Align::Center
        } else if token.starts_with('r') {
            Align::Right
        } else {
            Align::Left
        }
    }
}

/// Resolved width and alignment of one rendered column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Column width in characters, including the 2-character margin.
    pub width: usize,
    /// Content alignment inside the column.
    pub align: Align,
}

/// The resolved layout of a whole table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    /// Total table width: the requested size, raised to the minimum of
    /// `column_count * 4 + 1` when too small.
    pub total_width: usize,
    /// Per-column width and alignment.
    pub columns: Vec<ColumnLayout>,
}

impl Layout {
    /// Computes the layout for `column_count` columns under `settings`.
    ///
    /// Pure and deterministic; must be re-run whenever size, ratios, or
    /// the column count change.
    pub fn resolve(settings: &Settings, column_count: usize) -> Result<Self, LayoutError> {
        let minimum = column_count * 4 + 1;
        let total_width = settings.size.max(minimum);

        if column_count == 0 {
            return Ok(Layout {
                total_width,
                columns: Vec::new(),
            });
        }

        let borderless = total_width - (column_count + 1);
        let mut widths = vec![borderless / column_count; column_count];

        if let Some(spec) = &settings.ratios {
            if let Some(ratios) = parse_ratios(spec, column_count) {
                apply_ratios(&mut widths, &ratios, borderless, column_count)?;
            }
        }

        let aligns = resolve_aligns(&settings.align, column_count);
        let columns = widths
            .into_iter()
            .zip(aligns)
            .map(|(width, align)| ColumnLayout { width, align })
            .collect();

        Ok(Layout {
            total_width,
            columns,
        })
    }

    /// Per-column widths, in order.
    pub fn widths(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.width).collect()
    }
}

/// Parses a comma-separated ratio list, truncated to the column count.
/// Any entry that fails to parse invalidates the whole spec.
fn parse_ratios(spec: &str, column_count: usize) -> Option<Vec<i64>> {
    let mut ratios: Vec<i64> = Vec::new();
    for entry in spec.split(',') {
        ratios.push(entry.trim().parse().ok()?);
    }
    ratios.truncate(column_count);
    Some(ratios)
}

fn apply_ratios(
    widths: &mut [usize],
    ratios: &[i64],
    borderless: usize,
    column_count: usize,
) -> Result<(), LayoutError> {
    // Entries are arbitrary integers; the arithmetic widens to i128 so
    // an absurd sum lands in the over-100 fallback instead of overflowing.
    let sum: i128 = ratios.iter().map(|&r| i128::from(r)).sum();
    let borderless = borderless as i128;

    if sum <= 100 {
        for (index, &ratio) in ratios.iter().enumerate() {
            let width = i128::from(ratio) * borderless / 100;
            if width < 3 {
                return Err(LayoutError::RatioTooLow {
                    index,
                    ratio,
                    width: clamp_i64(width),
                });
            }
            widths[index] = width as usize;
        }
    }

    if sum < 100 {
        // Columns beyond the ratio list evenly split what the ratios left.
        let remaining = borderless.saturating_sub(sum.saturating_mul(borderless) / 100);
        let count = column_count - ratios.len();
        if count > 0 {
            let width = remaining / count as i128;
            if width < 3 {
                return Err(LayoutError::RatioRemainderTooLow {
                    sum: clamp_i64(sum),
                    width: clamp_i64(width),
                });
            }
            for slot in widths.iter_mut().skip(ratios.len()) {
                *slot = width as usize;
            }
        }
    }

    // sum > 100: the ratio spec is ignored and the even split stands.
    Ok(())
}

fn clamp_i64(value: i128) -> i64 {
    value.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Resolves the alignment spec into one token per column. A single token
/// applies to every column; a list assigns per column, left by default.
fn resolve_aligns(spec: &str, column_count: usize) -> Vec<Align> {
    let tokens: Vec<&str> = spec.split(',').collect();
    if tokens.len() == 1 {
        return vec![Align::parse(tokens[0]); column_count];
    }

    let mut aligns = vec![Align::Left; column_count];
    for (i, token) in tokens.iter().take(column_count).enumerate() {
        aligns[i] = Align::parse(token);
    }
    aligns
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::options::Options;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn even_split_columns_are_at_least_three_wide(
            size in 0usize..200,
            column_count in 1usize..12,
        ) {
            let settings = Settings::resolve(&Options::new().size(size));
            let layout = Layout::resolve(&settings, column_count).unwrap();

            prop_assert_eq!(layout.columns.len(), column_count);
            for column in &layout.columns {
                prop_assert!(column.width >= 3);
            }
        }

        #[test]
        fn even_split_fits_borderless_width(
            size in 0usize..200,
            column_count in 1usize..12,
        ) {
            let settings = Settings::resolve(&Options::new().size(size));
            let layout = Layout::resolve(&settings, column_count).unwrap();
            let borderless = layout.total_width - (column_count + 1);

            prop_assert!(layout.widths().iter().sum::<usize>() <= borderless);
        }
    }
}
