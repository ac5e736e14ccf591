//! Bot replies shaped like real coaching answers, with their expected markup.

use crate::core::message::Message;

/// Test fixture: outline reply mixing a paragraph, a numbered list and a
/// closing question.
pub fn speech_outline() -> Message {
    Message::bot(concat!(
        "Here's a **three-part** outline for your talk on *friendship*:\n\n",
        "1. Opening story\n",
        "2. Why friends matter\n",
        "3. A call to action\n\n",
        "Want me to draft the _opening_?"
    ))
}

pub const SPEECH_OUTLINE_MARKUP: &str = concat!(
    "<p>Here's a <strong>three-part</strong> outline for your talk on <em>friendship</em>:</p>",
    "<ol><li>Opening story</li><li>Why friends matter</li><li>A call to action</li></ol>",
    "<p>Want me to draft the <em>opening</em>?</p>"
);

/// Test fixture: code sample containing live-looking markup.
pub fn code_sample() -> Message {
    Message::bot(concat!(
        "Embed the timer like this:\n\n",
        "```html\n<script src=\"timer.js\"></script>\n<b>**not bold**</b>\n```\n\n",
        "Then press `Start`."
    ))
}

pub const CODE_SAMPLE_MARKUP: &str = concat!(
    "<p>Embed the timer like this:</p>",
    "<pre><code class=\"language-html\">",
    "&lt;script src=\"timer.js\"&gt;&lt;/script&gt;\n&lt;b&gt;**not bold**&lt;/b&gt;",
    "</code></pre>",
    "<p>Then press <code>Start</code>.</p>"
);

/// Test fixture: delivery tips with bullets, emphasis and a line break.
pub fn delivery_tips() -> Message {
    Message::bot(concat!(
        "**Delivery tips**\nPractice out loud.\n\n",
        "- Slow down on *key* points\n",
        "- Pause after questions\n",
        "+ Record yourself"
    ))
}

pub const DELIVERY_TIPS_MARKUP: &str = concat!(
    "<p><strong>Delivery tips</strong><br>Practice out loud.</p>",
    "<ul><li>Slow down on <em>key</em> points</li><li>Pause after questions</li>",
    "<li>Record yourself</li></ul>"
);

/// Every fixture with its expected markup.
pub fn all() -> Vec<(&'static str, Message, &'static str)> {
    vec![
        ("speech_outline", speech_outline(), SPEECH_OUTLINE_MARKUP),
        ("code_sample", code_sample(), CODE_SAMPLE_MARKUP),
        ("delivery_tips", delivery_tips(), DELIVERY_TIPS_MARKUP),
    ]
}
