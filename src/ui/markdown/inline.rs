//! Inline rules: bold, italic and inline code.
//!
//! Each rule scans left to right and takes the nearest closing delimiter, so
//! spans never overlap within one rule. Spans never cross a blank line.

use memchr::{memchr, memmem};

/// Stage 2: `**x**`, then `__x__`, become `<strong>x</strong>`.
pub(super) fn bold(text: &str) -> String {
    let text = strong_pass(text, "**");
    strong_pass(&text, "__")
}

/// Stage 3: `*x*`, then `_x_`, become `<em>x</em>`.
///
/// The asterisk rule refuses openers touching another `*` or followed by
/// whitespace, and closers preceded by whitespace or followed by `*`. The
/// underscore rule has none of these exclusions.
pub(super) fn italic(text: &str) -> String {
    let text = asterisk_emphasis(text);
    underscore_emphasis(&text)
}

/// Stage 4: `` `x` `` becomes `<code>x</code>`. Content is not escaped.
pub(super) fn inline_code(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'`', &bytes[pos..]) {
        let open = pos + offset;
        let Some(close) = memchr(b'`', &bytes[open + 1..]).map(|off| open + 1 + off) else {
            break;
        };
        let content = &text[open + 1..close];
        if content.is_empty() || crosses_blank_line(content) {
            pos = open + 1;
            continue;
        }

        out.push_str(&text[last..open]);
        wrap_into(&mut out, "code", content);
        last = close + 1;
        pos = last;
    }

    out.push_str(&text[last..]);
    out
}

fn strong_pass(text: &str, delim: &str) -> String {
    let finder = memmem::Finder::new(delim);
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;

    while let Some(offset) = finder.find(&bytes[pos..]) {
        let open = pos + offset;
        let content_start = open + delim.len();
        let Some(close) = finder
            .find(&bytes[content_start..])
            .map(|off| content_start + off)
        else {
            break;
        };
        let content = &text[content_start..close];
        if crosses_blank_line(content) {
            pos = open + 1;
            continue;
        }

        out.push_str(&text[last..open]);
        wrap_into(&mut out, "strong", content);
        last = close + delim.len();
        pos = last;
    }

    out.push_str(&text[last..]);
    out
}

fn asterisk_emphasis(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;
    let mut closers = CloserIndex::new(text);

    while let Some(offset) = memchr(b'*', &bytes[pos..]) {
        let open = pos + offset;
        let close = if opens_asterisk_emphasis(text, open) {
            closers.after(open)
        } else {
            None
        };

        match close {
            Some(close) => {
                out.push_str(&text[last..open]);
                wrap_into(&mut out, "em", &text[open + 1..close]);
                last = close + 1;
                pos = last;
            }
            None => pos = open + 1,
        }
    }

    out.push_str(&text[last..]);
    out
}

fn opens_asterisk_emphasis(text: &str, at: usize) -> bool {
    if text[..at].ends_with('*') {
        return false;
    }
    match text[at + 1..].chars().next() {
        Some(next) => next != '*' && !next.is_whitespace(),
        None => false,
    }
}

/// Valid asterisk closers and line breaks of one text, found in a single
/// pass. Openers are visited left to right, so both cursors only move forward.
struct CloserIndex {
    closers: Vec<usize>,
    breaks: Vec<usize>,
    next_closer: usize,
    next_break: usize,
}

impl CloserIndex {
    fn new(text: &str) -> Self {
        let mut closers = Vec::new();
        let mut breaks = Vec::new();
        let mut prev_is_space = false;
        let mut chars = text.char_indices().peekable();

        while let Some((at, ch)) = chars.next() {
            if is_line_terminator(ch) {
                breaks.push(at);
            } else if ch == '*' && !prev_is_space {
                let before_star = chars.peek().is_some_and(|&(_, next)| next == '*');
                if !before_star {
                    closers.push(at);
                }
            }
            prev_is_space = ch.is_whitespace();
        }

        Self {
            closers,
            breaks,
            next_closer: 0,
            next_break: 0,
        }
    }

    /// First closer after `open` that sits on the same line.
    fn after(&mut self, open: usize) -> Option<usize> {
        while self.closers.get(self.next_closer).is_some_and(|&at| at <= open) {
            self.next_closer += 1;
        }
        while self.breaks.get(self.next_break).is_some_and(|&at| at <= open) {
            self.next_break += 1;
        }

        let close = *self.closers.get(self.next_closer)?;
        match self.breaks.get(self.next_break) {
            Some(&end) if end < close => None,
            _ => Some(close),
        }
    }
}

fn underscore_emphasis(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'_', &bytes[pos..]) {
        let open = pos + offset;
        let close = text[open + 1..]
            .char_indices()
            .take_while(|(_, ch)| !is_line_terminator(*ch))
            .find(|(_, ch)| *ch == '_')
            .map(|(off, _)| open + 1 + off);

        match close {
            Some(close) => {
                out.push_str(&text[last..open]);
                wrap_into(&mut out, "em", &text[open + 1..close]);
                last = close + 1;
                pos = last;
            }
            None => pos = open + 1,
        }
    }

    out.push_str(&text[last..]);
    out
}

fn wrap_into(out: &mut String, tag: &str, content: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// True when `content` contains a whitespace-only line between two breaks.
pub(super) fn crosses_blank_line(content: &str) -> bool {
    let mut lines = content.split('\n');
    lines.next();
    let mut middle = lines.collect::<Vec<_>>();
    middle.pop();
    middle.iter().any(|line| line.trim().is_empty())
}
