/// One item of the tokenizer's event stream.
///
/// Tag names are lowercase ASCII, as produced by an HTML tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlEvent {
    StartTag(String),
    EndTag(String),
    /// `<br/>`-style tags and void elements such as `<img>` or `<meta>`.
    SelfClosingTag(String),
    Text(String),
}

impl HtmlEvent {
    /// Classifies a start tag: explicitly self-closed tags and void elements
    /// never get an end tag, so they become [`HtmlEvent::SelfClosingTag`].
    pub fn start(name: impl Into<String>, self_closing: bool) -> Self {
        let name = name.into();
        if self_closing || is_void_element(&name) {
            HtmlEvent::SelfClosingTag(name)
        } else {
            HtmlEvent::StartTag(name)
        }
    }
}

pub fn is_void_element(name: &str) -> bool {
    const VOID: &[&str] = &[
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
        "source", "track", "wbr",
    ];
    VOID.iter().any(|v| v.eq_ignore_ascii_case(name))
}
