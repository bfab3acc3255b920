//! The table itself: orchestration of layout, wrapping, and borders.
//!
//! A [`Table`] is a pure function of its latest data and settings. Both
//! `set` and `input` recompute everything they affect; `generate` rebuilds
//! the rendered lines wholesale, so repeated calls with unchanged inputs
//! are idempotent.

use crate::border::{self, GlyphSet};
use crate::error::LayoutError;
use crate::layout::{ColumnLayout, Layout};
use crate::options::{GapMode, Options, Settings};
use crate::row;
use crate::wrap;
use serde_json::Value;
use std::fmt;

/// A fixed-width, border-decorated, word-wrapped text table.
///
/// # Example
///
/// ```rust
/// use gridlet::{Options, Table};
///
/// let data = vec![
///     vec!["name", "role"],
///     vec!["Ada", "engineer"],
/// ];
/// let table = Table::new(data, &Options::new().size(24).header(true)).unwrap();
///
/// let rendered = table.to_string();
/// assert!(rendered.starts_with('┌'));
/// assert!(rendered.contains("Ada"));
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    settings: Settings,
    glyphs: GlyphSet,
    data: Vec<Vec<String>>,
    layout: Layout,
    lines: Vec<String>,
}

impl Table {
    /// Builds a table from a grid of cells and an option bag.
    ///
    /// The column count is the length of the first row; shorter rows
    /// render missing cells as empty, longer rows are cut off. Fails only
    /// when the ratio spec resolves a column below the 3-character
    /// minimum.
    pub fn new<R, C, S>(data: R, options: &Options) -> Result<Self, LayoutError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Table {
            settings: Settings::default(),
            glyphs: border::SINGLE_LINE,
            data: Vec::new(),
            layout: Layout::default(),
            lines: Vec::new(),
        };
        table.set(options, false)?;
        table.input(data, true)?;
        Ok(table)
    }

    /// Replaces the options and, when `regenerate` is set, recomputes the
    /// layout and re-renders.
    ///
    /// Resolution starts from the defaults every time; the one piece of
    /// state that survives is the active glyph set, which an unknown
    /// border name leaves unchanged.
    pub fn set(&mut self, options: &Options, regenerate: bool) -> Result<(), LayoutError> {
        self.settings = Settings::resolve(options);
        if let Some(glyphs) = border::glyph_set(&self.settings.border) {
            self.glyphs = glyphs;
        }

        if regenerate {
            self.layout = Layout::resolve(&self.settings, self.column_count())?;
            self.rebuild();
        }
        Ok(())
    }

    /// Replaces the data, recomputes the layout, and re-renders when
    /// `regenerate` is set.
    pub fn input<R, C, S>(&mut self, data: R, regenerate: bool) -> Result<(), LayoutError>
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        self.layout = Layout::resolve(&self.settings, self.column_count())?;
        if regenerate {
            self.rebuild();
        }
        Ok(())
    }

    /// Re-renders and returns the table lines.
    pub fn generate(&mut self) -> &[String] {
        self.rebuild();
        &self.lines
    }

    /// The most recently rendered lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The resolved settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The resolved per-column layout.
    pub fn columns(&self) -> &[ColumnLayout] {
        &self.layout.columns
    }

    /// The active border glyph set.
    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    /// Partitions the rendered lines into chunks whose estimated character
    /// count stays below `max_size`.
    ///
    /// The estimate multiplies the chunk's line count by the *first*
    /// line's length instead of keeping a running total. For a single
    /// table this is exact, since every line has the same width; it drifts
    /// for heterogeneous input.
    pub fn split(&self, max_size: usize) -> Vec<Vec<String>> {
        let first_len = self
            .lines
            .first()
            .map(|line| line.chars().count())
            .unwrap_or(0);

        let mut parts: Vec<Vec<String>> = Vec::new();
        let mut chunk: Vec<String> = Vec::new();
        for line in &self.lines {
            if chunk.len() * first_len + line.chars().count() < max_size {
                chunk.push(line.clone());
            } else {
                parts.push(std::mem::replace(&mut chunk, vec![line.clone()]));
            }
        }
        if !chunk.is_empty() {
            parts.push(chunk);
        }
        parts
    }

    /// Coerces a grid of JSON values to its textual form: strings render
    /// verbatim, everything else uses its JSON text.
    pub fn rows_from_values(values: &[Vec<Value>]) -> Vec<Vec<String>> {
        values
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect()
    }

    fn column_count(&self) -> usize {
        self.data.first().map(Vec::len).unwrap_or(0)
    }

    /// Rebuilds the rendered lines from the current data and layout.
    fn rebuild(&mut self) {
        let widths = self.layout.widths();
        let column_count = widths.len();
        let ansi = self.settings.ansi;
        let row_count = self.data.len();

        let mut lines = Vec::new();
        lines.push(self.glyphs.top(&widths));

        for (i, data_row) in self.data.iter().enumerate() {
            let mut chunks: Vec<Vec<String>> = Vec::with_capacity(column_count);
            for (k, column) in self.layout.columns.iter().enumerate() {
                let cell = data_row.get(k).map(String::as_str).unwrap_or("");
                chunks.push(wrap::wrap_cell(cell, column.width, ansi));
            }
            let max_lines = wrap::equalize(&mut chunks);

            for j in 0..max_lines {
                lines.push(row::compose(
                    &chunks,
                    &self.layout.columns,
                    self.glyphs.lines[1],
                    ansi,
                    j,
                ));
            }

            if i + 1 < row_count {
                let header_rule = self.settings.header && i == 0;
                if header_rule || self.settings.gap == GapMode::Fill {
                    lines.push(self.glyphs.separator(&widths));
                } else if self.settings.gap == GapMode::Space {
                    lines.push(self.glyphs.blank_row(&widths));
                } else if self.settings.gap == GapMode::Small {
                    lines.push(self.glyphs.half_separator(&widths));
                }
            }
        }

        lines.push(self.glyphs.bottom(&widths));
        self.lines = lines;
    }
}

impl fmt::Display for Table {
    /// Rendered lines joined by newlines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
