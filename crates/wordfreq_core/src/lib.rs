//! Wordfreq core: pure text extraction and counting logic.
mod cursor;
mod delimiter;
mod event;
mod frequency;

pub use cursor::{advance, TagCursor, IGNORE_TEXT_TAGS};
pub use delimiter::{DelimiterPattern, DEFAULT_DELIMITER_PATTERN};
pub use event::{is_void_element, HtmlEvent};
pub use frequency::FrequencyTable;
