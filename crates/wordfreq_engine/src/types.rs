use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct HttpError {
    pub kind: FailureKind,
    pub message: String,
}

impl HttpError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    UnsupportedScheme { scheme: String },
    HttpStatus(u16),
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::UnsupportedScheme { scheme } => {
                write!(f, "supported protocols: http, https. Got: {scheme}")
            }
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Everything that can stop a word counting run.
#[derive(Debug, thiserror::Error)]
pub enum CountError {
    #[error("response has no input")]
    MissingBody,
    #[error("unsupported content type. Expected: text. Got: {}", .content_type.as_deref().unwrap_or("none"))]
    UnsupportedContentType { content_type: Option<String> },
    #[error("failed to save html into {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("html parse failed")]
    Parse(#[source] io::Error),
    /// Delimiters are escaped literals, so this only fires when the
    /// alternation exceeds the regex engine's compiled size limit.
    #[error("invalid word delimiter")]
    InvalidDelimiter(#[from] regex::Error),
}

impl CountError {
    /// True for failures caused by the response itself rather than IO.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            CountError::MissingBody | CountError::UnsupportedContentType { .. }
        )
    }
}
