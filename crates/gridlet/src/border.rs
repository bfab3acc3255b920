//! Border glyph sets and horizontal line construction.
//!
//! A glyph set is the nine characters that define one border style: the
//! horizontal and vertical line glyphs, the four corners, and the five
//! connectors (tees and cross). The named catalogue is a process-wide,
//! immutable registry; rendering always receives a resolved [`GlyphSet`]
//! rather than going through ambient lookup.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// The nine characters defining one border visual style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSet {
    /// Horizontal and vertical line glyphs.
    pub lines: [char; 2],
    /// Corner glyphs: top-left, top-right, bottom-right, bottom-left.
    pub edges: [char; 4],
    /// Connector glyphs: right tee, bottom tee, left tee, top tee, cross.
    pub connectors: [char; 5],
}

const fn set(lines: [char; 2], edges: [char; 4], connectors: [char; 5]) -> GlyphSet {
    GlyphSet {
        lines,
        edges,
        connectors,
    }
}

/// The default glyph set, used before any border option is applied.
pub(crate) const SINGLE_LINE: GlyphSet = set(
    ['─', '│'],
    ['┌', '┐', '┘', '└'],
    ['┤', '┴', '├', '┬', '┼'],
);

static REGISTRY: Lazy<BTreeMap<&'static str, GlyphSet>> = Lazy::new(|| {
    BTreeMap::from([
        (
            "double-line",
            set(
                ['═', '║'],
                ['╔', '╗', '╝', '╚'],
                ['╣', '╩', '╠', '╦', '╬'],
            ),
        ),
        ("single-line", SINGLE_LINE),
        (
            "dot",
            set(
                ['.', '.'],
                ['.', '.', '.', '.'],
                ['.', '.', '.', '.', '.'],
            ),
        ),
        (
            "rounded",
            set(
                ['-', '|'],
                ['.', '.', '\'', '\''],
                [':', '\'', ':', '.', '+'],
            ),
        ),
        (
            "classical",
            set(
                ['-', '|'],
                ['+', '+', '+', '+'],
                ['+', '+', '+', '+', '+'],
            ),
        ),
        (
            "simple",
            set(
                ['=', ' '],
                [' ', ' ', ' ', ' '],
                [' ', ' ', ' ', ' ', ' '],
            ),
        ),
        (
            "modern",
            set(
                ['═', '│'],
                ['╒', '╕', '╛', '╘'],
                ['╡', '╧', '╞', '╤', '╪'],
            ),
        ),
        (
            "inversed",
            set(
                ['─', '║'],
                ['╓', '╖', '╜', '╙'],
                ['╢', '╨', '╟', '╥', '╫'],
            ),
        ),
        (
            "none",
            set(
                [' ', ' '],
                [' ', ' ', ' ', ' '],
                [' ', ' ', ' ', ' ', ' '],
            ),
        ),
    ])
});

/// Looks up a glyph set by name.
pub fn glyph_set(name: &str) -> Option<GlyphSet> {
    REGISTRY.get(name).copied()
}

/// Iterates the registered glyph set names, in sorted order.
pub fn glyph_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

impl GlyphSet {
    /// Builds one horizontal line: `left`, then each column's width worth
    /// of `fill`, joined by `connector`, then `right`.
    fn horizontal(
        &self,
        left: char,
        right: char,
        connector: char,
        widths: &[usize],
        fill: char,
    ) -> String {
        let mut line = String::new();
        line.push(left);
        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                line.push(connector);
            }
            for _ in 0..width {
                line.push(fill);
            }
        }
        line.push(right);
        line
    }

    /// Top border: corner glyphs joined by top tees.
    pub(crate) fn top(&self, widths: &[usize]) -> String {
        self.horizontal(
            self.edges[0],
            self.edges[1],
            self.connectors[3],
            widths,
            self.lines[0],
        )
    }

    /// Full separator: left/right tees joined by crosses. Used after a
    /// header row and for the `fill` gap mode.
    pub(crate) fn separator(&self, widths: &[usize]) -> String {
        self.horizontal(
            self.connectors[2],
            self.connectors[0],
            self.connectors[4],
            widths,
            self.lines[0],
        )
    }

    /// Blank row framed and divided by the vertical glyph (`space` gap).
    pub(crate) fn blank_row(&self, widths: &[usize]) -> String {
        self.horizontal(self.lines[1], self.lines[1], self.lines[1], widths, ' ')
    }

    /// Half-height separator: tees at the frame, vertical connectors,
    /// blank fill (`small` gap).
    pub(crate) fn half_separator(&self, widths: &[usize]) -> String {
        self.horizontal(
            self.connectors[2],
            self.connectors[0],
            self.lines[1],
            widths,
            ' ',
        )
    }

    /// Bottom border: corner glyphs joined by bottom tees.
    pub(crate) fn bottom(&self, widths: &[usize]) -> String {
        self.horizontal(
            self.edges[3],
            self.edges[2],
            self.connectors[1],
            widths,
            self.lines[0],
        )
    }
}
