//! Lightweight Markdown-to-markup renderer for bot replies.
//!
//! The dialect is deliberately small: fenced code blocks, bold, italic,
//! inline code, flat ordered/unordered lists and paragraphs. Rendering is an
//! ordered sequence of pure stages; each one rewrites the previous stage's
//! output and never looks back at earlier stages' input:
//!
//! 1. [`code::extract_fences`] lifts fenced code out of the text
//! 2. [`inline::bold`]
//! 3. [`inline::italic`]
//! 4. [`inline::inline_code`]
//! 5. [`lists::tag_items`]
//! 6. [`lists::wrap_runs`] lifts each run of items out as one list
//! 7. [`blocks::segment`]
//! 8. [`blocks::cleanup`]
//!
//! Stage order is part of the output contract: inputs that mix bold and
//! italic markers in one span render differently under any other order.

mod blocks;
mod code;
mod inline;
mod lists;

#[cfg(test)]
pub mod test_fixtures;
#[cfg(test)]
mod tests;

pub use blocks::Block;
pub use code::CodeBlock;
pub use lists::ListBlock;

use blocks::{BlockStash, TOKEN_OPEN};
use serde_json::Value;
use std::borrow::Cow;

/// Render a Markdown reply into markup.
///
/// Never fails. Unmatched delimiters are left as typed and an empty input
/// renders to an empty string.
pub fn render(text: &str) -> String {
    parse_blocks(text).iter().map(Block::to_markup).collect()
}

/// Run every stage and return the top-level blocks in order.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    let text = escape_token_openers(normalize_line_endings(text));
    let mut stash = BlockStash::default();

    let html = code::extract_fences(&text, &mut stash);
    let html = inline::bold(&html);
    let html = inline::italic(&html);
    let html = inline::inline_code(&html);
    let html = lists::tag_items(&html);
    let html = lists::wrap_runs(&html, &mut stash);
    blocks::cleanup(blocks::segment(&html), &mut stash)
}

/// Render a reply field that may not be a string at all.
///
/// Anything other than a JSON string renders to an empty string.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => render(text),
        _ => String::new(),
    }
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Typed token openers become a character reference, so only the stages
/// can produce tokens.
fn escape_token_openers(text: Cow<'_, str>) -> Cow<'_, str> {
    if text.contains(TOKEN_OPEN) {
        Cow::Owned(text.replace(TOKEN_OPEN, "&#xE000;"))
    } else {
        text
    }
}
