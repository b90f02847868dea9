//! Character-level highlight rendering for key text.
//!
//! The highlight string is treated as a case-insensitive *set* of
//! characters, not a substring: with highlight `"ab"`, every `a` and every
//! `b` in a key is emphasized, regardless of order or adjacency. Matching
//! characters are rendered through the match overlay composed onto the
//! row's text style; everything else gets the text style alone.
//!
//! Output is plain text plus terminal styling. Key strings are never
//! interpreted as markup, so hostile input degrades to visible characters
//! instead of injected content.

use lipgloss_extras::prelude::*;
use std::collections::HashSet;

/// Builds the lowercase character set for a highlight string.
pub(super) fn char_set(highlight: &str) -> HashSet<char> {
    highlight.chars().flat_map(char::to_lowercase).collect()
}

/// Renders `text` with members of `set` emphasized.
///
/// Runs of consecutive matched or unmatched characters are styled
/// together, so the output stays compact for long keys.
pub(super) fn render_highlighted(
    text: &str,
    set: &HashSet<char>,
    text_style: &Style,
    match_overlay: &Style,
) -> String {
    if set.is_empty() {
        return text_style.clone().render(text);
    }

    let match_style = text_style.clone().inherit(match_overlay.clone());
    let mut out = String::new();
    let mut run = String::new();
    let mut run_matched = false;

    for ch in text.chars() {
        let is_match = ch.to_lowercase().any(|lc| set.contains(&lc));
        if is_match != run_matched && !run.is_empty() {
            let style = if run_matched { &match_style } else { text_style };
            out.push_str(&style.clone().render(&run));
            run.clear();
        }
        run_matched = is_match;
        run.push(ch);
    }
    if !run.is_empty() {
        let style = if run_matched { &match_style } else { text_style };
        out.push_str(&style.clone().render(&run));
    }
    out
}
