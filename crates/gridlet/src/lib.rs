//! # Gridlet - Bordered Text Tables
//!
//! `gridlet` renders a grid of values into a fixed-width, border-decorated
//! block of text lines for terminal or plain-text output. Cells word-wrap
//! to fit their columns, content aligns per column, and the whole result
//! can be split into size-bounded chunks for transports with message
//! limits.
//!
//! ## Core Concepts
//!
//! - [`Table`]: the rendered table; a pure function of its data and options
//! - [`Options`]: ordered, loosely-typed configuration pairs
//! - [`Settings`]: the typed record an option bag resolves to
//! - [`GlyphSet`]: the nine characters of one border style, from a fixed
//!   registry of nine named styles
//! - [`GapMode`]: the separator emitted between content rows
//!
//! ## Quick Start
//!
//! ```rust
//! use gridlet::{GapMode, Options, Table};
//!
//! let data = vec![
//!     vec!["Name", "Status"],
//!     vec!["build", "passing"],
//!     vec!["docs", "stale"],
//! ];
//!
//! let table = Table::new(
//!     data,
//!     &Options::new()
//!         .size(30)
//!         .border("single-line")
//!         .header(true)
//!         .gap(GapMode::None),
//! )
//! .unwrap();
//!
//! println!("{}", table);
//! # assert_eq!(table.lines().len(), 6);
//! ```
//!
//! ## Widths and Wrapping
//!
//! The table width defaults to an even split of the border-free width
//! across columns and never drops below `columns * 4 + 1` characters. The
//! `ratios` option assigns per-column percentages instead; a ratio that
//! leaves a column under 3 characters is a configuration error, while a
//! ratio sum over 100 silently falls back to the even split.
//!
//! Cell text wraps greedily at spaces, hard-splitting words wider than
//! their column and honoring embedded newlines, which makes pre-rendered
//! multi-line strings (including other tables) usable as cell values.
//!
//! ## ANSI Awareness
//!
//! With the `ansi` option on (the default), escape sequences are stripped
//! before any width measurement, so colored content wraps and aligns like
//! plain text:
//!
//! ```rust
//! use gridlet::{Options, Table};
//!
//! let data = vec![vec!["\u{1b}[32mok\u{1b}[0m"]];
//! let table = Table::new(data, &Options::new().size(10)).unwrap();
//!
//! assert_eq!(gridlet::visible_width(&table.lines()[1], true), 10);
//! ```
//!
//! Width is measured in `char`s; display-column measurement of wide glyphs
//! is out of scope.

mod ansi;
mod border;
mod error;
mod layout;
mod options;
mod row;
mod table;
mod wrap;

pub use ansi::{strip_and_measure, strip_ansi, visible_width};
pub use border::{glyph_names, glyph_set, GlyphSet};
pub use error::LayoutError;
pub use layout::{Align, ColumnLayout, Layout};
pub use options::{GapMode, Options, Settings};
pub use table::Table;
