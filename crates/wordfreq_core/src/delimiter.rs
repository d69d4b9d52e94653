use std::fmt;

use regex::Regex;

use crate::FrequencyTable;

/// Pattern used when no delimiters are configured: one ASCII whitespace char
/// (space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`). Non-breaking and other
/// Unicode spaces stay part of the word.
pub const DEFAULT_DELIMITER_PATTERN: &str = r"(?-u:\s)";

/// Compiled word delimiter rule.
///
/// Each configured delimiter is a literal separator; the compiled pattern is
/// their alternation in the order given.
#[derive(Debug, Clone)]
pub struct DelimiterPattern {
    regex: Regex,
}

impl DelimiterPattern {
    pub fn new<I, S>(delimiters: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let escaped: Vec<String> = delimiters
            .into_iter()
            .map(|d| regex::escape(d.as_ref()))
            .collect();
        let pattern = if escaped.is_empty() {
            DEFAULT_DELIMITER_PATTERN.to_string()
        } else {
            escaped.join("|")
        };
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    #[allow(clippy::expect_used)]
    pub fn whitespace() -> Self {
        Self {
            // Static pattern, cannot fail to compile.
            regex: Regex::new(DEFAULT_DELIMITER_PATTERN).expect("default delimiter regex is valid"),
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Splits a text run into trimmed, non-empty words.
    ///
    /// Trimming strips ASCII control characters and space only.
    pub fn words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .split(text)
            .map(trim_ascii_controls)
            .filter(|word| !word.is_empty())
    }

    /// Splits `text` and adds every word to `table`. Returns the number of
    /// words counted.
    pub fn count_into(&self, text: &str, table: &mut FrequencyTable) -> usize {
        let mut counted = 0;
        for word in self.words(text) {
            table.increment(word);
            counted += 1;
        }
        counted
    }
}

fn trim_ascii_controls(word: &str) -> &str {
    word.trim_matches(|c: char| c <= ' ')
}

impl Default for DelimiterPattern {
    fn default() -> Self {
        Self::whitespace()
    }
}

impl fmt::Display for DelimiterPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
