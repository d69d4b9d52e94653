use crate::HtmlEvent;

/// Tags whose text content is never visible on the rendered page.
pub const IGNORE_TEXT_TAGS: &[&str] = &["title", "style"];

/// Innermost open tag as seen by the text filter.
///
/// This is deliberately not a stack. Any end tag resets the cursor to "none",
/// and a self-closing tag sets it and leaves it set until the next end tag,
/// whatever that tag's name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCursor {
    current: Option<String>,
}

impl TagCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn suppresses_text(&self) -> bool {
        self.current
            .as_deref()
            .is_some_and(|tag| IGNORE_TEXT_TAGS.contains(&tag))
    }
}

/// Pure fold step: applies one event to the cursor and returns the visible
/// text it carries, if any.
pub fn advance(mut cursor: TagCursor, event: HtmlEvent) -> (TagCursor, Option<String>) {
    let visible = match event {
        HtmlEvent::StartTag(name) | HtmlEvent::SelfClosingTag(name) => {
            cursor.current = Some(name);
            None
        }
        HtmlEvent::EndTag(_) => {
            cursor.current = None;
            None
        }
        HtmlEvent::Text(text) => {
            if cursor.suppresses_text() {
                None
            } else {
                Some(text)
            }
        }
    };

    (cursor, visible)
}
