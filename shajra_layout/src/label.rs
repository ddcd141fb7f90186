// Copyright 2025 the Shajra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy word wrapping for node labels.

use smallvec::SmallVec;

/// Maximum characters per label line before a word is pushed to the next line.
pub const LABEL_LINE_CHARS: usize = 18;

/// Wrapped label lines. Most names fit in three lines without allocating.
pub type LabelLines = SmallVec<[String; 3]>;

/// Wraps a display name into lines of at most [`LABEL_LINE_CHARS`]
/// characters, breaking only at whitespace.
///
/// A single word longer than the limit gets a line of its own and is not
/// split. Runs of whitespace collapse to one space.
///
/// ```
/// use shajra_layout::wrap_label;
///
/// let lines = wrap_label("Ahmad ibn Muhammad ibn Ali");
/// assert_eq!(lines.as_slice(), ["Ahmad ibn Muhammad", "ibn Ali"]);
/// ```
#[must_use]
pub fn wrap_label(name: &str) -> LabelLines {
    let mut lines = LabelLines::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for word in name.split_whitespace() {
        let word_chars = word.chars().count();
        if current_chars + 1 + word_chars > LABEL_LINE_CHARS {
            if !current.is_empty() {
                lines.push(core::mem::take(&mut current));
            }
            current.push_str(word);
            current_chars = word_chars;
        } else {
            if !current.is_empty() {
                current.push(' ');
                current_chars += 1;
            }
            current.push_str(word);
            current_chars += word_chars;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
