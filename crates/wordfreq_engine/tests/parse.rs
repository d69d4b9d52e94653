use std::sync::{Arc, Mutex};

use encoding_rs::UTF_8;
use pretty_assertions::assert_eq;
use wordfreq_core::HtmlEvent;
use wordfreq_engine::{charset_for, html_events, EngineEvent, HtmlParser, ProgressSink};

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn visible_text(html: &str) -> Vec<String> {
    let sink = TestSink::default();
    let mut runs = Vec::new();
    HtmlParser::new(&sink)
        .parse(html.as_bytes(), UTF_8, |text| runs.push(text.to_string()))
        .expect("parse ok");
    runs
}

#[test]
fn events_classify_tags_and_text() {
    let html = "<p>Hello &amp; bye</p><br/><img src=x>";
    let events = html_events(html.as_bytes(), UTF_8)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(
        events,
        vec![
            HtmlEvent::StartTag("p".into()),
            HtmlEvent::Text("Hello & bye".into()),
            HtmlEvent::EndTag("p".into()),
            HtmlEvent::SelfClosingTag("br".into()),
            HtmlEvent::SelfClosingTag("img".into()),
        ]
    );
}

#[test]
fn comments_and_doctype_produce_no_events() {
    let html = "<!DOCTYPE html><!-- note --><b>x</b>";
    let events = html_events(html.as_bytes(), UTF_8)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(
        events,
        vec![
            HtmlEvent::StartTag("b".into()),
            HtmlEvent::Text("x".into()),
            HtmlEvent::EndTag("b".into()),
        ]
    );
}

#[test]
fn title_and_style_text_is_not_forwarded() {
    let html = "<html><head><title>Hidden Title</title><style>p { color: red }</style></head>\
                <body><p>one two</p></body></html>";

    assert_eq!(visible_text(html), vec!["one two"]);
}

#[test]
fn script_source_is_not_page_text() {
    let html = "<script>var hidden = '<p>nope</p>';</script><p>shown</p>";

    assert_eq!(visible_text(html), vec!["shown"]);
}

#[test]
fn self_closing_tag_does_not_hide_following_text() {
    let html = "<p>line one<br/>line two</p>";

    assert_eq!(visible_text(html), vec!["line one", "line two"]);
}

#[test]
fn declared_charset_is_used_for_decoding() {
    let sink = TestSink::default();
    let mut runs = Vec::new();
    let bytes: &[u8] = b"<p>caf\xe9</p>";
    HtmlParser::new(&sink)
        .parse(
            bytes,
            charset_for(Some("text/html; charset=ISO-8859-1")),
            |text| runs.push(text.to_string()),
        )
        .unwrap();

    assert_eq!(runs, vec!["caf\u{e9}"]);
}

#[test]
fn parse_reports_start_and_finish() {
    let sink = TestSink::default();
    HtmlParser::new(&sink)
        .parse("<p>x</p>".as_bytes(), UTF_8, |_| {})
        .unwrap();

    let events = sink.take();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], EngineEvent::ParseStarted);
    assert!(matches!(events[1], EngineEvent::ParseFinished { .. }));
}

#[test]
fn read_errors_are_propagated() {
    struct Broken;
    impl std::io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("connection reset"))
        }
    }

    let sink = TestSink::default();
    let err = HtmlParser::new(&sink)
        .parse(Broken, UTF_8, |_| {})
        .unwrap_err();
    assert_eq!(err.to_string(), "connection reset");
    assert_eq!(sink.take(), vec![EngineEvent::ParseStarted]);
}
