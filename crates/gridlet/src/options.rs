//! Option resolution.
//!
//! Callers hand over an ordered bag of loosely-typed key/value pairs (an
//! [`Options`]); resolution coerces every value to its textual form once,
//! re-parses the typed fields, and produces a [`Settings`] record with
//! defaults filled in. Unknown keys are accepted and ignored, and no input
//! can make this stage fail.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Separator style emitted between content rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapMode {
    /// No separator at all; rows sit directly on top of each other.
    None,
    /// A full horizontal rule with cross connectors, like the header rule.
    Fill,
    /// A blank row framed by the vertical border glyph.
    #[default]
    Space,
    /// Connector glyphs at the frame with blank fill, a half-height rule.
    Small,
}

impl GapMode {
    /// Parses a gap token. Anything unrecognized behaves like [`GapMode::None`].
    fn parse(token: &str) -> Self {
        match token {
            "fill" => GapMode::Fill,
            "space" => GapMode::Space,
            "small" => GapMode::Small,
            _ => GapMode::None,
        }
    }
}

impl fmt::Display for GapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            GapMode::None => "none",
            GapMode::Fill => "fill",
            GapMode::Space => "space",
            GapMode::Small => "small",
        };
        f.write_str(token)
    }
}

/// An ordered bag of configuration pairs.
///
/// Every value is stored in its textual form; typed interpretation happens
/// once, in [`Settings::resolve`]. The fluent setters cover the recognized
/// keys, while [`Options::set`] accepts anything (unknown keys are carried
/// along and ignored at resolution).
///
/// # Example
///
/// ```rust
/// use gridlet::{GapMode, Options};
///
/// let options = Options::new()
///     .size(40)
///     .border("double-line")
///     .header(true)
///     .gap(GapMode::Small)
///     .align("c,l");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pairs: Vec<(String, String)>,
}

impl Options {
    /// Creates an empty option bag; resolution yields pure defaults.
    pub fn new() -> Self {
        Options::default()
    }

    /// Builds an option bag from arbitrary key/value pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: ToString,
        I: IntoIterator<Item = (K, V)>,
    {
        Options {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        }
    }

    /// Builds an option bag from a JSON object, coercing each value to its
    /// textual form. String values are taken verbatim (no quotes); every
    /// other value uses its JSON text. Non-object values yield an empty bag.
    pub fn from_value(value: &Value) -> Self {
        let mut options = Options::new();
        if let Value::Object(map) = value {
            for (key, value) in map {
                options = options.set(key.clone(), coerce(value));
            }
        }
        options
    }

    /// Appends a raw key/value pair, coercing the value to text.
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Target total character width of the table.
    pub fn size(self, size: usize) -> Self {
        self.set("size", size)
    }

    /// Border glyph set name; unknown names keep the previous set.
    pub fn border(self, name: impl Into<String>) -> Self {
        self.set("border", name.into())
    }

    /// Treat the first row as a header with a full rule after it.
    pub fn header(self, on: bool) -> Self {
        self.set("header", on)
    }

    /// Separator style between content rows.
    pub fn gap(self, gap: GapMode) -> Self {
        self.set("gap", gap)
    }

    /// Comma-separated column width percentages, e.g. `"50,25"`.
    pub fn ratios(self, ratios: impl Into<String>) -> Self {
        self.set("ratios", ratios.into())
    }

    /// Comma-separated alignment tokens, or one token for all columns.
    /// Tokens match on their first letter: `c`enter, `r`ight, else left.
    pub fn align(self, align: impl Into<String>) -> Self {
        self.set("align", align.into())
    }

    /// Whether escape sequences are stripped before width measurement.
    pub fn ansi(self, on: bool) -> Self {
        self.set("ansi", on)
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The resolved, typed configuration of a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Target total width in characters; raised to the minimum if too small.
    pub size: usize,
    /// Name of the requested border glyph set.
    pub border: String,
    /// Whether the first row is a header.
    pub header: bool,
    /// Separator style between content rows.
    pub gap: GapMode,
    /// Raw comma-separated ratio spec, when one was provided.
    pub ratios: Option<String>,
    /// Raw alignment spec, interpreted per column at layout time.
    pub align: String,
    /// Whether width measurement strips escape sequences.
    pub ansi: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            size: 30,
            border: "single-line".to_string(),
            header: false,
            gap: GapMode::Space,
            ratios: None,
            align: "left".to_string(),
            ansi: true,
        }
    }
}

impl Settings {
    /// Resolves an option bag against the defaults.
    ///
    /// Later pairs overwrite earlier ones. Typed fields are re-parsed from
    /// text: `size` through a leading-integer parse falling back to 0
    /// (which the allocator then raises to the minimum), `header`/`ansi`
    /// through an exact compare against `"true"`. A `ratios` value of
    /// `"false"` means no ratio spec.
    pub fn resolve(options: &Options) -> Self {
        let mut settings = Settings::default();
        let mut ratios = String::from("false");

        for (key, value) in options.pairs() {
            match key.as_str() {
                "size" => settings.size = parse_size(value),
                "border" => settings.border = value.clone(),
                "header" => settings.header = value == "true",
                "gap" => settings.gap = GapMode::parse(value),
                "ratios" => ratios = value.clone(),
                "align" => settings.align = value.clone(),
                "ansi" => settings.ansi = value == "true",
                _ => {}
            }
        }

        settings.ratios = (ratios != "false").then_some(ratios);
        settings
    }
}

/// Parses the leading integer of a size token, ignoring any trailing
/// text, so `"20.5"` and `"20px"` both resolve to 20. A token with no
/// integer prefix, or a negative one, resolves to 0.
fn parse_size(token: &str) -> usize {
    let token = token.trim();
    let unsigned = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token);
    let digits: String = unsigned
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() || token.starts_with('-') {
        return 0;
    }
    digits.parse::<i64>().unwrap_or(i64::MAX).max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_bag_yields_defaults() {
        let settings = Settings::resolve(&Options::new());
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.size, 30);
        assert_eq!(settings.border, "single-line");
        assert_eq!(settings.gap, GapMode::Space);
        assert!(settings.ansi);
        assert!(!settings.header);
        assert!(settings.ratios.is_none());
    }

    #[test]
    fn fluent_setters_resolve() {
        let options = Options::new()
            .size(42)
            .border("modern")
            .header(true)
            .gap(GapMode::Fill)
            .ratios("50,25")
            .align("c,r")
            .ansi(false);
        let settings = Settings::resolve(&options);

        assert_eq!(settings.size, 42);
        assert_eq!(settings.border, "modern");
        assert!(settings.header);
        assert_eq!(settings.gap, GapMode::Fill);
        assert_eq!(settings.ratios.as_deref(), Some("50,25"));
        assert_eq!(settings.align, "c,r");
        assert!(!settings.ansi);
    }

    #[test]
    fn later_pairs_win() {
        let options = Options::new().size(10).size(50);
        assert_eq!(Settings::resolve(&options).size, 50);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let options = Options::new().set("colour", "mauve").size(12);
        let settings = Settings::resolve(&options);
        assert_eq!(settings.size, 12);
    }

    #[test]
    fn booleans_need_exact_true() {
        let options = Options::new().set("header", "TRUE").set("ansi", "yes");
        let settings = Settings::resolve(&options);
        assert!(!settings.header);
        assert!(!settings.ansi);
    }

    #[test]
    fn unparsable_size_falls_to_zero() {
        let settings = Settings::resolve(&Options::new().set("size", "wide"));
        assert_eq!(settings.size, 0);
    }

    #[test]
    fn size_takes_the_leading_integer() {
        assert_eq!(Settings::resolve(&Options::new().set("size", "20.5")).size, 20);
        assert_eq!(Settings::resolve(&Options::new().set("size", "20px")).size, 20);
        assert_eq!(Settings::resolve(&Options::new().set("size", " 20 ")).size, 20);
        assert_eq!(Settings::resolve(&Options::new().set("size", "+20")).size, 20);
    }

    #[test]
    fn negative_size_falls_to_zero() {
        assert_eq!(Settings::resolve(&Options::new().set("size", "-4")).size, 0);
    }

    #[test]
    fn ratios_false_means_unset() {
        let settings = Settings::resolve(&Options::new().set("ratios", "false"));
        assert!(settings.ratios.is_none());
    }

    #[test]
    fn unknown_gap_token_acts_as_none() {
        let settings = Settings::resolve(&Options::new().set("gap", "wide"));
        assert_eq!(settings.gap, GapMode::None);
    }

    #[test]
    fn from_value_coerces_json_scalars() {
        let options = Options::from_value(&json!({
            "size": 20,
            "border": "double-line",
            "header": true,
        }));
        let settings = Settings::resolve(&options);
        assert_eq!(settings.size, 20);
        assert_eq!(settings.border, "double-line");
        assert!(settings.header);
    }

    #[test]
    fn from_value_non_object_is_empty() {
        let options = Options::from_value(&json!(["size", 20]));
        assert_eq!(Settings::resolve(&options), Settings::default());
    }

    #[test]
    fn from_pairs_accepts_any_to_string() {
        let options = Options::from_pairs(vec![("size", 18), ("header", 1)]);
        let settings = Settings::resolve(&options);
        assert_eq!(settings.size, 18);
        // "1" is not the exact text "true"
        assert!(!settings.header);
    }

    #[test]
    fn gap_mode_display_round_trips() {
        for gap in [GapMode::None, GapMode::Fill, GapMode::Space, GapMode::Small] {
            assert_eq!(GapMode::parse(&gap.to_string()), gap);
        }
    }
}
