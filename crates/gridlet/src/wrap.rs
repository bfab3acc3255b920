//! Greedy, ANSI-aware word wrapping of cell text.
//!
//! One cell becomes an ordered, non-empty list of chunks (physical lines),
//! each fitting the column's usable width of `width - 2` (the margin). The
//! placement loop walks whitespace-delimited words left to right and keeps
//! exact remaining-length accounting after every placed word, because each
//! later decision depends on it:
//!
//! - a word strictly shorter than the remaining space joins the current
//!   chunk with a single separating space;
//! - a word wider than the whole usable width is hard-split into
//!   fixed-size pieces, first topping up the current chunk with a partial
//!   piece when room remains;
//! - anything else opens a new chunk.
//!
//! An embedded `\n` cuts the word at the break; the remainder re-enters
//! the stream as the next word and is forced onto a new chunk.

use crate::ansi::visible_width;

/// Wraps one cell's text into chunks for a column of the given width.
///
/// Lengths are measured in visible characters per `ansi_aware`. Always
/// returns at least one (possibly empty) chunk.
pub(crate) fn wrap_cell(text: &str, width: usize, ansi_aware: bool) -> Vec<String> {
    let usable = width.saturating_sub(2);
    // Split on single spaces, keeping empty tokens: consecutive spaces
    // survive reassembly unchanged.
    let mut words: Vec<String> = text.split(' ').map(str::to_string).collect();

    let mut chunk: Vec<String> = Vec::new();
    let mut remaining = usable;
    let mut force_new = false;

    let mut k = 0;
    while k < words.len() {
        let mut break_found = false;
        if let Some(pos) = words[k].find('\n') {
            break_found = true;
            let rest = words[k][pos + 1..].to_string();
            words[k].truncate(pos);
            words.insert(k + 1, rest);
        }

        let word = words[k].clone();
        let word_width = visible_width(&word, ansi_aware);

        if word_width < remaining && !force_new {
            append(&mut chunk, &word);
        } else if word_width > usable {
            if !force_new && remaining > 1 {
                // Top up the current chunk with a partial piece, then emit
                // full-width pieces.
                let head: String = word.chars().take(remaining - 1).collect();
                let tail: String = word.chars().skip(remaining - 1).collect();
                append(&mut chunk, &head);
                chunk.extend(split_fixed(&tail, usable));
            } else {
                chunk.extend(split_fixed(&word, usable));
            }
        } else {
            chunk.push(word);
            force_new = false;
        }

        if break_found {
            force_new = true;
        }

        let last = chunk.last().map(String::as_str).unwrap_or("");
        remaining = usable.saturating_sub(visible_width(last, ansi_aware));
        k += 1;
    }

    if chunk.is_empty() {
        chunk.push(String::new());
    }
    chunk
}

/// Appends a word to the last chunk with a separating space, or opens the
/// first chunk with it.
fn append(chunk: &mut Vec<String>, word: &str) {
    match chunk.last_mut() {
        Some(last) => {
            last.push(' ');
            last.push_str(word);
        }
        None => chunk.push(word.to_string()),
    }
}

/// Cuts text into pieces of at most `size` `char`s. Escape sequences are
/// split like any other characters; hard splits work on the raw text.
fn split_fixed(text: &str, size: usize) -> Vec<String> {
    let size = size.max(1);
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|piece| piece.iter().collect())
        .collect()
}

/// Pads every column's chunk list with empty chunks up to the longest,
/// so a logical row renders the same number of physical lines in each
/// column. Returns that maximum.
pub(crate) fn equalize(chunks: &mut [Vec<String>]) -> usize {
    let max_lines = chunks.iter().map(Vec::len).max().unwrap_or(0);
    for column in chunks.iter_mut() {
        column.resize(max_lines, String::new());
    }
    max_lines
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn chunks_fit_the_usable_width(
            text in "[ a-z\\n]{0,60}",
            width in 5usize..40,
        ) {
            let chunks = wrap_cell(&text, width, true);
            prop_assert!(!chunks.is_empty());
            for chunk in &chunks {
                prop_assert!(
                    chunk.chars().count() <= width - 2,
                    "chunk {:?} exceeds usable width {}",
                    chunk,
                    width - 2
                );
            }
        }

        #[test]
        fn single_long_words_split_into_usable_pieces(
            word in "[a-z]{1,80}",
            width in 5usize..20,
        ) {
            let usable = width - 2;
            let chunks = wrap_cell(&word, width, true);
            if word.len() > usable {
                prop_assert_eq!(chunks[0].len(), usable - 1);
                for piece in &chunks[1..chunks.len() - 1] {
                    prop_assert_eq!(piece.len(), usable);
                }
            } else {
                prop_assert_eq!(chunks, vec![word]);
            }
        }
    }
}
