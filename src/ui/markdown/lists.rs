use super::blocks::{Block, BlockStash};

const ITEM_OPEN: &str = "<li>";
const ORDERED_ITEM_OPEN: &str = "<li data-ordered=\"true\">";
const ITEM_CLOSE: &str = "</li>";

/// A flat list built from one run of item lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBlock {
    pub ordered: bool,
    pub items: Vec<String>,
}

impl ListBlock {
    /// Build a list from consecutive item lines. The first line alone decides
    /// whether the list is ordered.
    fn from_item_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut lines = lines.into_iter().peekable();
        let ordered = lines
            .peek()
            .is_some_and(|line| line.starts_with(ORDERED_ITEM_OPEN));
        let items = lines.map(|line| item_text(line).to_string()).collect();
        Self { ordered, items }
    }

    pub fn to_markup(&self) -> String {
        let tag = if self.ordered { "ol" } else { "ul" };
        let mut out = format!("<{tag}>");
        for item in &self.items {
            out.push_str(ITEM_OPEN);
            out.push_str(item);
            out.push_str(ITEM_CLOSE);
        }
        out.push_str(&format!("</{tag}>"));
        out
    }
}

/// Stage 5: turn each bullet or numbered line into an item element.
///
/// Detection is line-local; whether neighbouring lines are items too does
/// not matter here.
pub(super) fn tag_items(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            let trimmed = line.trim_start_matches(is_horizontal_space);
            if let Some(rest) = strip_bullet(trimmed) {
                format!("{ITEM_OPEN}{rest}{ITEM_CLOSE}")
            } else if let Some(rest) = strip_number(trimmed) {
                format!("{ORDERED_ITEM_OPEN}{rest}{ITEM_CLOSE}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stage 6: gather each maximal run of item lines into a single list and
/// stash it, leaving a token on the run's line.
///
/// Whitespace-only lines between two items belong to the run and are
/// dropped; those after the last item are kept as block separators.
pub(super) fn wrap_runs(text: &str, stash: &mut BlockStash) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut index = 0;

    while index < lines.len() {
        if !is_item_line(lines[index]) {
            out.push(lines[index].to_string());
            index += 1;
            continue;
        }

        let mut run = vec![lines[index]];
        let mut last = index;
        loop {
            let next = (last + 1..lines.len()).find(|&i| !lines[i].trim().is_empty());
            match next {
                Some(next) if is_item_line(lines[next]) => {
                    run.push(lines[next]);
                    last = next;
                }
                _ => break,
            }
        }

        out.push(stash.push(Block::List(ListBlock::from_item_lines(run))));
        index = last + 1;
    }

    out.join("\n")
}

fn strip_bullet(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(['*', '-', '+'])?;
    strip_required_space(rest)
}

fn strip_number(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    strip_required_space(rest)
}

fn strip_required_space(rest: &str) -> Option<&str> {
    let stripped = rest.trim_start_matches(is_horizontal_space);
    (stripped.len() < rest.len()).then_some(stripped)
}

fn is_horizontal_space(ch: char) -> bool {
    ch.is_whitespace() && ch != '\n'
}

fn is_item_line(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("<li") else {
        return false;
    };
    matches!(rest.chars().next(), Some('>' | ' ')) && line.ends_with(ITEM_CLOSE)
}

fn item_text(line: &str) -> &str {
    let start = line.find('>').map(|i| i + 1).unwrap_or(0);
    let end = line.len() - ITEM_CLOSE.len();
    line.get(start..end).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(text: &str) -> String {
        let mut stash = BlockStash::default();
        let tokens = wrap_runs(&tag_items(text), &mut stash);
        stash.restore(&tokens)
    }

    #[test]
    fn tags_every_bullet_style() {
        assert_eq!(
            tag_items("* a\n- b\n+ c"),
            "<li>a</li>\n<li>b</li>\n<li>c</li>"
        );
    }

    #[test]
    fn tags_numbered_lines_as_ordered() {
        assert_eq!(
            tag_items("1. one\n10.\tten"),
            "<li data-ordered=\"true\">one</li>\n<li data-ordered=\"true\">ten</li>"
        );
    }

    #[test]
    fn marker_needs_following_space() {
        assert_eq!(tag_items("-dash\n1.5 pts\n---"), "-dash\n1.5 pts\n---");
    }

    #[test]
    fn indentation_is_stripped() {
        assert_eq!(tag_items("   - nested"), "<li>nested</li>");
    }

    #[test]
    fn detection_never_reaches_across_lines() {
        assert_eq!(tag_items("text\n\n- a"), "text\n\n<li>a</li>");
    }

    #[test]
    fn first_item_decides_ordering() {
        let html = wrap("1. a\n* b\n* c");
        assert_eq!(html, "<ol><li>a</li><li>b</li><li>c</li></ol>");

        let html = wrap("* a\n2. b");
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn blank_lines_inside_run_are_absorbed() {
        let html = wrap("- a\n\n- b\n\nafter");
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>\n\nafter");
    }

    #[test]
    fn separate_runs_stay_separate() {
        let html = wrap("- a\ntext\n1. b");
        assert_eq!(
            html,
            "<ul><li>a</li></ul>\ntext\n<ol><li>b</li></ol>"
        );
    }

    #[test]
    fn runs_are_stashed_as_typed_lists() {
        let mut stash = BlockStash::default();
        let tokens = wrap_runs(&tag_items("1. a\n2. b"), &mut stash);
        assert_eq!(tokens, "\u{E000}0\u{E001}");
        assert_eq!(
            stash.stashed(),
            vec![&Block::List(ListBlock {
                ordered: true,
                items: vec!["a".to_string(), "b".to_string()],
            })]
        );
    }

    #[test]
    fn link_tags_are_not_items() {
        assert!(!is_item_line("<link rel=\"x\"></li>"));
        assert!(is_item_line("<li class=\"x\">y</li>"));
    }

    #[test]
    fn empty_item_survives() {
        assert_eq!(wrap("- "), "<ul><li></li></ul>");
    }
}
