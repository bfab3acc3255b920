//! Row composition: aligned, padded, framed content lines.
//!
//! A logical row arrives as per-column chunk lists of equal length; each
//! physical line interleaves one chunk per column between vertical border
//! glyphs, with one space of padding on each inner side and the leftover
//! gap distributed by the column's alignment.

use crate::ansi::visible_width;
use crate::layout::{Align, ColumnLayout};

/// Composes physical line `line_index` of one logical row.
///
/// `chunks` holds one equal-length chunk list per column (see
/// `wrap::equalize`); `vertical` is the border's vertical glyph.
pub(crate) fn compose(
    chunks: &[Vec<String>],
    columns: &[ColumnLayout],
    vertical: char,
    ansi_aware: bool,
    line_index: usize,
) -> String {
    let mut line = String::new();

    for (k, column) in columns.iter().enumerate() {
        if k == 0 {
            line.push(vertical);
        }
        line.push(' ');

        let chunk = chunks[k][line_index].as_str();
        let gap = (column.width.saturating_sub(2))
            .saturating_sub(visible_width(chunk, ansi_aware));

        match column.align {
            Align::Left => {
                line.push_str(chunk);
                pad(&mut line, gap);
            }
            Align::Right => {
                pad(&mut line, gap);
                line.push_str(chunk);
            }
            Align::Center => {
                // Odd gaps put the extra space before the content.
                pad(&mut line, gap.div_ceil(2));
                line.push_str(chunk);
                pad(&mut line, gap / 2);
            }
        }

        line.push(' ');
        line.push(vertical);
    }

    line
}

fn pad(line: &mut String, count: usize) {
    for _ in 0..count {
        line.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(width: usize, align: Align) -> ColumnLayout {
        ColumnLayout { width, align }
    }

    fn one(text: &str) -> Vec<Vec<String>> {
        vec![vec![text.to_string()]]
    }

    #[test]
    fn left_alignment_pads_after() {
        let line = compose(&one("ab"), &[column(8, Align::Left)], '│', true, 0);
        assert_eq!(line, "│ ab     │");
    }

    #[test]
    fn right_alignment_pads_before() {
        let line = compose(&one("ab"), &[column(8, Align::Right)], '│', true, 0);
        assert_eq!(line, "│     ab │");
    }

    #[test]
    fn center_puts_extra_space_before_on_odd_gap() {
        // usable 5, content 2, gap 3: two spaces before, one after.
        let line = compose(&one("ab"), &[column(7, Align::Center)], '│', true, 0);
        assert_eq!(line, "│   ab  │");
    }

    #[test]
    fn center_splits_even_gap_evenly() {
        let line = compose(&one("ab"), &[column(8, Align::Center)], '│', true, 0);
        assert_eq!(line, "│   ab   │");
    }

    #[test]
    fn columns_share_the_inner_border() {
        let chunks = vec![vec!["a".to_string()], vec!["b".to_string()]];
        let columns = [column(5, Align::Left), column(5, Align::Left)];
        let line = compose(&chunks, &columns, '│', true, 0);
        assert_eq!(line, "│ a   │ b   │");
    }

    #[test]
    fn ansi_content_aligns_by_visible_width() {
        let styled = "\u{1b}[32mok\u{1b}[0m";
        let line = compose(&one(styled), &[column(8, Align::Left)], '│', true, 0);
        assert_eq!(line, format!("│ {}     │", styled));
        assert_eq!(visible_width(&line, true), 10);
    }

    #[test]
    fn picks_the_requested_physical_line() {
        let chunks = vec![vec!["first".to_string(), "second".to_string()]];
        let line = compose(&chunks, &[column(10, Align::Left)], '│', true, 1);
        assert_eq!(line, "│ second   │");
    }
}
