use memchr::memmem;

use super::blocks::{Block, BlockStash};

const FENCE: &str = "```";

/// A fenced code block lifted out of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub body: String,
}

impl CodeBlock {
    fn new(language: &str, raw_body: &str) -> Self {
        let language = (!language.is_empty()).then(|| language.to_string());
        Self {
            language,
            body: trim_blank_lines(raw_body).to_string(),
        }
    }

    /// Markup for this block. Only angle brackets in the body are escaped.
    pub fn to_markup(&self) -> String {
        let class = self
            .language
            .as_deref()
            .map(|lang| format!("language-{lang}"))
            .unwrap_or_default();
        format!(
            "<pre><code class=\"{class}\">{}</code></pre>",
            escape_angle_brackets(&self.body)
        )
    }
}

/// Stage 1: replace each fenced span with a stash token.
///
/// An opening fence may carry a language tag made of ASCII word characters,
/// but only when a newline follows it. The body runs to the nearest closing
/// fence; an opening fence without one is left as typed.
pub(super) fn extract_fences(text: &str, stash: &mut BlockStash) -> String {
    let finder = memmem::Finder::new(FENCE);
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;

    while let Some(found) = finder.find(&text.as_bytes()[pos..]) {
        let open = pos + found;
        let after_open = open + FENCE.len();
        let (language, body_start) = split_language_tag(text, after_open);

        let Some(close) = finder
            .find(&text.as_bytes()[body_start..])
            .map(|offset| body_start + offset)
        else {
            break;
        };

        out.push_str(&text[last..open]);
        let block = CodeBlock::new(language, &text[body_start..close]);
        out.push_str(&stash.push(Block::Code(block)));
        last = close + FENCE.len();
        pos = last;
    }

    out.push_str(&text[last..]);
    out
}

fn split_language_tag(text: &str, after_open: usize) -> (&str, usize) {
    let rest = &text[after_open..];
    let tag_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    if rest.as_bytes().get(tag_len) == Some(&b'\n') {
        (&rest[..tag_len], after_open + tag_len + 1)
    } else {
        ("", after_open)
    }
}

fn trim_blank_lines(body: &str) -> &str {
    let body = body.trim_end();
    let mut start = 0;
    for line in body.split_inclusive('\n') {
        if !line.ends_with('\n') || !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    &body[start..]
}

fn escape_angle_brackets(body: &str) -> String {
    body.replace('<', "&lt;").replace('>', "&gt;")
}
