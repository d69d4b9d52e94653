use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use engine_logging::{engine_error, engine_info, error_chain};
use wordfreq_core::{DelimiterPattern, FrequencyTable};

use crate::parse::HtmlParser;
use crate::persist::copy_to_file;
use crate::{CountError, CounterConfig, EngineEvent, ProgressSink, ResponseHandle};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordReport {
    pub url: String,
    pub delimiter_pattern: String,
    pub table: FrequencyTable,
}

impl fmt::Display for WordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Statistics for {}. Word delimiter pattern: '{}'",
            self.url, self.delimiter_pattern
        )?;
        if !self.table.is_empty() {
            write!(f, "\n{}", self.table)?;
        }
        Ok(())
    }
}

/// Fetch-body -> visible text -> word frequency pipeline.
#[derive(Debug, Clone)]
pub struct HtmlWordCounter {
    config: CounterConfig,
    delimiters: DelimiterPattern,
}

impl HtmlWordCounter {
    pub fn new(config: CounterConfig) -> Result<Self, CountError> {
        let delimiters = DelimiterPattern::new(config.word_delimiters())?;
        Ok(Self { config, delimiters })
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Consumes the response. Its body, or the saved copy of it, is closed
    /// before this returns, whatever the outcome.
    pub fn run(
        &self,
        mut response: ResponseHandle,
        sink: &dyn ProgressSink,
    ) -> Result<WordReport, CountError> {
        let body = response.take_body().ok_or(CountError::MissingBody)?;

        let input: Box<dyn Read + Send> = match self.config.save_file() {
            Some(path) => Box::new(save_and_reopen(body, path, sink)?),
            None => body,
        };

        check_content_type(response.content_type())?;

        let mut table = FrequencyTable::new();
        HtmlParser::new(sink)
            .parse(input, response.charset(), |text| {
                self.delimiters.count_into(text, &mut table);
            })
            .map_err(CountError::Parse)?;

        Ok(WordReport {
            url: self.config.url().to_string(),
            delimiter_pattern: self.delimiters.to_string(),
            table,
        })
    }

    /// Runs and logs the outcome: the report at info level, a failure with
    /// its full cause chain at error level.
    pub fn run_and_log(
        &self,
        response: ResponseHandle,
        sink: &dyn ProgressSink,
    ) -> Option<WordReport> {
        match self.run(response, sink) {
            Ok(report) => {
                engine_info!("{report}");
                Some(report)
            }
            Err(err) => {
                engine_error!(
                    "Word count for {} failed: {}",
                    self.config.url(),
                    error_chain(&err)
                );
                None
            }
        }
    }
}

fn save_and_reopen(
    mut body: Box<dyn Read + Send>,
    path: &Path,
    sink: &dyn ProgressSink,
) -> Result<File, CountError> {
    let save_error = |source| CountError::Save {
        path: path.to_path_buf(),
        source,
    };

    sink.emit(EngineEvent::Saving {
        path: path.to_path_buf(),
    });
    let bytes = copy_to_file(&mut body, path).map_err(save_error)?;
    drop(body);
    sink.emit(EngineEvent::Saved {
        path: path.to_path_buf(),
        bytes,
    });

    File::open(path).map_err(save_error)
}

fn check_content_type(content_type: Option<&str>) -> Result<(), CountError> {
    match content_type {
        Some(ct) if ct.starts_with("text/") => Ok(()),
        other => Err(CountError::UnsupportedContentType {
            content_type: other.map(str::to_string),
        }),
    }
}
