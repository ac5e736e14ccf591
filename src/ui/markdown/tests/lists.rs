use super::helpers::{assert_renders, top_level_tags};
use crate::ui::markdown::render;

#[test]
fn first_item_fixes_ordering_for_the_run() {
    assert_renders("1. a\n* b\n* c", "<ol><li>a</li><li>b</li><li>c</li></ol>");
}

#[test]
fn later_numbered_items_do_not_flip_a_bullet_run() {
    assert_renders("- a\n2. b\n3. c", "<ul><li>a</li><li>b</li><li>c</li></ul>");
}

#[test]
fn every_bullet_marker_is_recognised() {
    assert_renders(
        "* star\n- dash\n+ plus",
        "<ul><li>star</li><li>dash</li><li>plus</li></ul>",
    );
}

#[test]
fn indented_items_flatten_into_one_list() {
    assert_renders(
        "- parent\n  - child\n    - grandchild",
        "<ul><li>parent</li><li>child</li><li>grandchild</li></ul>",
    );
}

#[test]
fn blank_lines_between_items_keep_one_list() {
    assert_renders(
        "1. first\n\n2. second\n\n\n3. third",
        "<ol><li>first</li><li>second</li><li>third</li></ol>",
    );
}

#[test]
fn paragraph_between_items_starts_a_new_list() {
    let html = render("- a\n\nBreak\n\n1. b");
    assert_eq!(html, "<ul><li>a</li></ul><p>Break</p><ol><li>b</li></ol>");
    assert_eq!(top_level_tags(&html), vec!["ul", "p", "ol"]);
}

#[test]
fn items_keep_inline_markup() {
    assert_renders(
        "- **Pace**: aim for `140` wpm\n- *Pauses* help",
        "<ul><li><strong>Pace</strong>: aim for <code>140</code> wpm</li><li><em>Pauses</em> help</li></ul>",
    );
}

#[test]
fn list_directly_after_text_is_lifted_out_of_the_paragraph() {
    assert_renders(
        "Three tips:\n- breathe\n- smile",
        "<p>Three tips:</p><ul><li>breathe</li><li>smile</li></ul>",
    );
}

#[test]
fn text_directly_after_list_becomes_a_paragraph() {
    assert_renders(
        "- one\nGood luck!",
        "<ul><li>one</li></ul><p>Good luck!</p>",
    );
    assert_renders(
        "- one\n- two\nGood luck!\nSee you.",
        "<ul><li>one</li><li>two</li></ul><p>Good luck!<br>See you.</p>",
    );
}

#[test]
fn numbers_without_a_period_and_space_are_plain_text() {
    assert_renders("2024 was great\n3.14 is pi", "<p>2024 was great<br>3.14 is pi</p>");
}
