//! ANSI escape sequence scanner.
//!
//! Width arithmetic throughout the crate works on *visible* characters:
//! when ANSI-awareness is enabled, escape sequences contribute nothing to
//! a cell's measured width, so colored content aligns the same as plain
//! content.
//!
//! The accepted sequence grammar is:
//!
//! ```text
//! sequence   = introducer symbols params? final
//! introducer = U+001B | U+009B
//! symbols    = ( "[" | "(" | ")" | "#" | ";" | "?" )*
//! params     = digits{1,4} ( ";" digits{0,4} )*
//! final      = "0".."9" | "A".."O" | "R" | "Z" | "c" | "f".."n"
//!            | "q" | "r" | "y" | "=" | ">" | "<"
//! ```
//!
//! An introducer that does not open a full sequence stays in the output
//! and counts as a visible character. Width is counted in `char`s, not
//! display columns; wide glyphs are out of scope.

/// Strips escape sequences and measures the remainder in a single pass.
///
/// Returns the stripped text together with its length in `char`s.
pub fn strip_and_measure(s: &str) -> (String, usize) {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut width = 0;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\u{1b}' || c == '\u{9b}' {
            if let Some(len) = sequence_len(&chars[i..]) {
                i += len;
                continue;
            }
        }
        out.push(c);
        width += 1;
        i += 1;
    }
    (out, width)
}

/// Returns `s` with all escape sequences removed.
pub fn strip_ansi(s: &str) -> String {
    strip_and_measure(s).0
}

/// Visible length of `s` in `char`s.
///
/// With `ansi_aware` off, escape bytes count like any other character.
pub fn visible_width(s: &str, ansi_aware: bool) -> usize {
    if ansi_aware {
        strip_and_measure(s).1
    } else {
        s.chars().count()
    }
}

/// Length of the escape sequence starting at `chars[0]` (the introducer),
/// or `None` when no complete sequence follows.
fn sequence_len(chars: &[char]) -> Option<usize> {
    let mut i = 1;
    while i < chars.len() && matches!(chars[i], '[' | '(' | ')' | '#' | ';' | '?') {
        i += 1;
    }
    // A parameter block is preferred over a bare final byte; digits double
    // as final bytes, so shorter runs are retried before giving up.
    try_params(chars, i).or_else(|| try_final(chars, i))
}

fn try_params(chars: &[char], start: usize) -> Option<usize> {
    let max = digit_run(chars, start).min(4);
    for take in (1..=max).rev() {
        if let Some(end) = try_groups(chars, start + take) {
            return Some(end);
        }
    }
    None
}

/// Matches zero or more `";" digits{0,4}` groups followed by a final byte.
fn try_groups(chars: &[char], start: usize) -> Option<usize> {
    if chars.get(start) == Some(&';') {
        let max = digit_run(chars, start + 1).min(4);
        for take in (0..=max).rev() {
            if let Some(end) = try_groups(chars, start + 1 + take) {
                return Some(end);
            }
        }
    }
    try_final(chars, start)
}

fn try_final(chars: &[char], i: usize) -> Option<usize> {
    let c = *chars.get(i)?;
    is_final_byte(c).then_some(i + 1)
}

fn digit_run(chars: &[char], start: usize) -> usize {
    chars[start.min(chars.len())..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count()
}

fn is_final_byte(c: char) -> bool {
    matches!(c,
        '0'..='9' | 'A'..='O' | 'R' | 'Z' | 'c' | 'f'..='n' | 'q' | 'r' | 'y' | '=' | '>' | '<')
}
