use super::code::CodeBlock;
use super::lists::ListBlock;

/// Opens a stashed-block token. Private-use code points keep tokens out of
/// reach of every inline and list rule.
pub(super) const TOKEN_OPEN: char = '\u{E000}';
const TOKEN_CLOSE: char = '\u{E001}';

/// Top-level unit of rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Code(CodeBlock),
    List(ListBlock),
    /// Text lines joined by line breaks inside one paragraph element.
    Paragraph { lines: Vec<String> },
    /// Markup the reply typed itself that already opens with a structural
    /// tag; emitted unchanged.
    Raw(String),
}

impl Block {
    pub fn to_markup(&self) -> String {
        match self {
            Block::Code(code) => code.to_markup(),
            Block::List(list) => list.to_markup(),
            Block::Paragraph { lines } => format!("<p>{}</p>", lines.join("<br>")),
            Block::Raw(markup) => markup.clone(),
        }
    }

    fn is_empty_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph { lines } if lines.iter().all(|line| line.trim().is_empty()))
    }
}

/// Code and list blocks lifted out of the text, addressed by the tokens left
/// in their place.
#[derive(Debug, Default)]
pub(super) struct BlockStash {
    blocks: Vec<Option<Block>>,
}

impl BlockStash {
    pub(super) fn push(&mut self, block: Block) -> String {
        let index = self.blocks.len();
        self.blocks.push(Some(block));
        format!("{TOKEN_OPEN}{index}{TOKEN_CLOSE}")
    }

    #[cfg(test)]
    pub(super) fn stashed(&self) -> Vec<&Block> {
        self.blocks.iter().flatten().collect()
    }

    /// Take the block named by a token at the very start of `line`, along
    /// with the rest of the line.
    fn take_leading<'a>(&mut self, line: &'a str) -> Option<(Block, &'a str)> {
        let (index, len) = parse_token(line)?;
        let block = self.blocks.get_mut(index)?.take()?;
        Some((block, &line[len..]))
    }

    /// Replace tokens left inside a line with their block's markup. Tokens
    /// that do not name a stashed block are left untouched.
    pub(super) fn restore(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(TOKEN_OPEN) {
            out.push_str(&rest[..start]);
            rest = &rest[start..];

            let stashed = parse_token(rest).and_then(|(index, len)| {
                let block = self.blocks.get(index)?.as_ref()?;
                Some((block, len))
            });
            match stashed {
                Some((block, len)) => {
                    out.push_str(&block.to_markup());
                    rest = &rest[len..];
                }
                None => {
                    out.push(TOKEN_OPEN);
                    rest = &rest[TOKEN_OPEN.len_utf8()..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Index and byte length of the token `text` starts with.
fn parse_token(text: &str) -> Option<(usize, usize)> {
    let digits = text.strip_prefix(TOKEN_OPEN)?;
    let end = digits.find(TOKEN_CLOSE)?;
    let index = digits[..end].parse().ok()?;
    Some((index, TOKEN_OPEN.len_utf8() + end + TOKEN_CLOSE.len_utf8()))
}

/// Stage 7: split on blank lines and classify each part.
pub(super) fn segment(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut part: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            push_part(&mut blocks, &part);
            part.clear();
        } else {
            part.push(line);
        }
    }
    push_part(&mut blocks, &part);

    blocks
}

fn push_part(blocks: &mut Vec<Block>, part: &[&str]) {
    let joined = part.join("\n");
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        return;
    }

    if starts_with_structural_tag(trimmed) {
        blocks.push(Block::Raw(trimmed.to_string()));
    } else {
        blocks.push(Block::Paragraph {
            lines: trimmed.split('\n').map(str::to_string).collect(),
        });
    }
}

/// Stage 8: lift stashed code and list blocks out of paragraphs, restore the
/// ones left inside a line, and drop paragraphs left with nothing in them.
///
/// A line that starts with a token becomes that block; whatever follows it,
/// on the same line or below, starts a new paragraph.
pub(super) fn cleanup(blocks: Vec<Block>, stash: &mut BlockStash) -> Vec<Block> {
    let mut out = Vec::with_capacity(blocks.len());

    for block in blocks {
        let lines = match block {
            Block::Paragraph { lines } => lines,
            Block::Raw(markup) => {
                out.push(Block::Raw(stash.restore(&markup)));
                continue;
            }
            other => {
                out.push(other);
                continue;
            }
        };

        let mut pending = Vec::new();
        for line in lines {
            let mut rest = line.trim_start();
            while let Some((lifted, after)) = stash.take_leading(rest) {
                flush_paragraph(&mut out, std::mem::take(&mut pending));
                out.push(lifted);
                rest = after.trim_start();
            }

            if opens_container(rest) {
                flush_paragraph(&mut out, std::mem::take(&mut pending));
                out.push(Block::Raw(stash.restore(rest.trim_end())));
            } else if rest.len() == line.trim_start().len() {
                pending.push(stash.restore(&line));
            } else if !rest.is_empty() {
                pending.push(stash.restore(rest));
            }
        }
        flush_paragraph(&mut out, pending);
    }

    out
}

fn flush_paragraph(out: &mut Vec<Block>, lines: Vec<String>) {
    let paragraph = Block::Paragraph { lines };
    if !paragraph.is_empty_paragraph() {
        out.push(paragraph);
    }
}

fn starts_with_structural_tag(part: &str) -> bool {
    if ["<ul", "<ol", "<pre", "<li"]
        .iter()
        .any(|prefix| part.starts_with(prefix))
    {
        return true;
    }
    part.strip_prefix("<h")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|level| ('1'..='6').contains(&level))
}

fn opens_container(line: &str) -> bool {
    ["<ul", "<ol", "<pre"].iter().any(|p| line.starts_with(p))
}
