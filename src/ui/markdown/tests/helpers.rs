use crate::ui::markdown::render;

/// Render and compare, showing the input on failure.
pub fn assert_renders(input: &str, expected: &str) {
    let actual = render(input);
    assert_eq!(actual, expected, "unexpected markup for input {input:?}");
}

/// Count top-level elements by their opening tag, in order.
pub fn top_level_tags(html: &str) -> Vec<&'static str> {
    let mut tags = Vec::new();
    let mut rest = html;
    while !rest.is_empty() {
        let Some((tag, close)) = ["p", "ul", "ol", "pre"]
            .into_iter()
            .map(|tag| (tag, format!("</{tag}>")))
            .find(|(tag, _)| {
                rest.starts_with(&format!("<{tag}>")) || rest.starts_with(&format!("<{tag} "))
            })
        else {
            panic!("unexpected top-level content: {rest:?}");
        };
        let end = rest
            .find(&close)
            .unwrap_or_else(|| panic!("missing {close} in {rest:?}"));
        tags.push(tag);
        rest = &rest[end + close.len()..];
    }
    tags
}
