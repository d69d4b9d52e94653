use std::io::{self, Read};
use std::time::Instant;

use encoding_rs::Encoding;
use html5gum::{DefaultEmitter, IoReader, Token, Tokenizer};
use wordfreq_core::{advance, HtmlEvent, TagCursor};

use crate::decode::DecodingReader;
use crate::{EngineEvent, ProgressSink};

/// Streams `stream` through the tokenizer as a lazy sequence of tag and text
/// events.
///
/// The only errors are read errors from `stream`; markup problems are left
/// to the tokenizer's own recovery.
pub fn html_events<R: Read>(
    stream: R,
    charset: &'static Encoding,
) -> impl Iterator<Item = io::Result<HtmlEvent>> {
    let mut emitter = DefaultEmitter::default();
    // Raw-text handling for <style>, <script>, <title>, <textarea>.
    emitter.switch_states(true);

    let reader = IoReader::new(DecodingReader::new(stream, charset));
    let mut in_script = false;
    Tokenizer::new_with_emitter(reader, emitter).filter_map(move |token| match token {
        Ok(token) => to_event(token, &mut in_script).map(Ok),
        Err(err) => Some(Err(err)),
    })
}

fn to_event(token: Token, in_script: &mut bool) -> Option<HtmlEvent> {
    match token {
        Token::StartTag(tag) => {
            let name = String::from_utf8_lossy(&tag.name).into_owned();
            let event = HtmlEvent::start(name, tag.self_closing);
            if matches!(&event, HtmlEvent::StartTag(name) if name == "script") {
                *in_script = true;
            }
            Some(event)
        }
        Token::EndTag(tag) => {
            let name = String::from_utf8_lossy(&tag.name).into_owned();
            if name == "script" {
                *in_script = false;
            }
            Some(HtmlEvent::EndTag(name))
        }
        // Script source is not page text.
        Token::String(_) if *in_script => None,
        Token::String(text) => Some(HtmlEvent::Text(String::from_utf8_lossy(&text).into_owned())),
        _ => None,
    }
}

/// Extracts visible text runs from an HTML byte stream.
pub struct HtmlParser<'a> {
    sink: &'a dyn ProgressSink,
}

impl<'a> HtmlParser<'a> {
    pub fn new(sink: &'a dyn ProgressSink) -> Self {
        Self { sink }
    }

    /// Calls `on_text` for every text run not inside `<title>` or `<style>`.
    pub fn parse<R, F>(&self, stream: R, charset: &'static Encoding, mut on_text: F) -> io::Result<()>
    where
        R: Read,
        F: FnMut(&str),
    {
        let started = Instant::now();
        self.sink.emit(EngineEvent::ParseStarted);

        let mut cursor = TagCursor::new();
        for event in html_events(stream, charset) {
            let (next, visible) = advance(cursor, event?);
            cursor = next;
            if let Some(text) = visible {
                on_text(&text);
            }
        }

        self.sink.emit(EngineEvent::ParseFinished {
            elapsed: started.elapsed(),
        });
        Ok(())
    }
}
