use std::io;
use std::path::{Path, PathBuf};

use crate::persist::create_save_file;

/// Immutable settings for one word counting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterConfig {
    url: String,
    save_file: Option<PathBuf>,
    word_delimiters: Vec<String>,
}

impl CounterConfig {
    pub fn builder(url: impl Into<String>) -> CounterConfigBuilder {
        CounterConfigBuilder {
            config: CounterConfig {
                url: url.into(),
                save_file: None,
                word_delimiters: Vec::new(),
            },
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn save_file(&self) -> Option<&Path> {
        self.save_file.as_deref()
    }

    /// Empty means "split on whitespace".
    pub fn word_delimiters(&self) -> &[String] {
        &self.word_delimiters
    }
}

#[derive(Debug, Clone)]
pub struct CounterConfigBuilder {
    config: CounterConfig,
}

impl CounterConfigBuilder {
    /// Save the raw page into a new `web_page_*.html` file under `dir`
    /// (or the system temp directory when `dir` is not a directory).
    pub fn save_file_in(mut self, dir: impl AsRef<Path>) -> io::Result<Self> {
        self.config.save_file = Some(create_save_file(dir.as_ref())?);
        Ok(self)
    }

    pub fn save_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.save_file = Some(path.into());
        self
    }

    pub fn word_delimiters<I, S>(mut self, delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.word_delimiters = delimiters.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> CounterConfig {
        self.config
    }
}
