//! Wordfreq engine: HTTP fetch, HTML text extraction and word counting.
mod config;
mod counter;
mod decode;
mod http;
mod parse;
mod persist;
mod progress;
mod types;

pub use config::{CounterConfig, CounterConfigBuilder};
pub use counter::{HtmlWordCounter, WordReport};
pub use decode::{charset_for, DecodingReader};
pub use http::{ClientSettings, HttpClient, ResponseHandle};
pub use parse::{html_events, HtmlParser};
pub use persist::{copy_to_file, create_save_file, SAVE_FILE_PREFIX, SAVE_FILE_SUFFIX};
pub use progress::{EngineEvent, LogProgressSink, ProgressSink};
pub use types::{CountError, FailureKind, HttpError};
