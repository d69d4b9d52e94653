use std::fmt;
use std::io::Read;
use std::time::Duration;

use encoding_rs::Encoding;
use engine_logging::engine_info;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::decode::charset_for;
use crate::{FailureKind, HttpError};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// `None` leaves the transport default in place.
    pub connect_timeout: Option<Duration>,
    /// `None` waits for the response indefinitely.
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            request_timeout: None,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Single-attempt HTTP(S) client for one URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    url: Url,
    settings: ClientSettings,
}

impl HttpClient {
    pub fn new(url: &str) -> Result<Self, HttpError> {
        Self::with_settings(url, ClientSettings::default())
    }

    pub fn with_settings(url: &str, settings: ClientSettings) -> Result<Self, HttpError> {
        let url = Url::parse(url.trim())
            .map_err(|err| HttpError::new(FailureKind::InvalidUrl, err.to_string()))?;
        check_scheme(&url)?;
        Ok(Self { url, settings })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Sends one GET request. The status is not checked here; see
    /// [`ResponseHandle::check_ok`].
    pub fn connect(&self) -> Result<ResponseHandle, HttpError> {
        engine_info!("Connecting to {}", self.url);
        let client = self.build_client()?;
        let response = client
            .get(self.url.clone())
            .send()
            .map_err(map_reqwest_error)?;

        let final_url = response.url().to_string();
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        Ok(ResponseHandle::new(final_url, status, content_type, response))
    }

    fn build_client(&self) -> Result<reqwest::blocking::Client, HttpError> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(self.settings.user_agent.as_str())
            .timeout(self.settings.request_timeout);
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| HttpError::new(FailureKind::Network, err.to_string()))
    }
}

fn check_scheme(url: &Url) -> Result<(), HttpError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(HttpError::new(
            FailureKind::UnsupportedScheme {
                scheme: other.to_string(),
            },
            url.to_string(),
        )),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        return HttpError::new(FailureKind::Timeout, err.to_string());
    }
    HttpError::new(FailureKind::Network, err.to_string())
}

/// An open response: status, headers of interest and the unread body.
pub struct ResponseHandle {
    url: String,
    status: u16,
    content_type: Option<String>,
    charset: &'static Encoding,
    body: Option<Box<dyn Read + Send>>,
}

impl ResponseHandle {
    pub fn new(
        url: impl Into<String>,
        status: u16,
        content_type: Option<String>,
        body: impl Read + Send + 'static,
    ) -> Self {
        let charset = charset_for(content_type.as_deref());
        Self {
            url: url.into(),
            status,
            content_type,
            charset,
            body: Some(Box::new(body)),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn charset(&self) -> &'static Encoding {
        self.charset
    }

    /// Hands out the body stream. Returns `None` once it has been taken.
    pub fn take_body(&mut self) -> Option<Box<dyn Read + Send>> {
        self.body.take()
    }

    pub fn check_ok(&self) -> Result<(), HttpError> {
        if (200..300).contains(&self.status) {
            Ok(())
        } else {
            Err(HttpError::new(
                FailureKind::HttpStatus(self.status),
                format!("{} answered {}", self.url, self.status),
            ))
        }
    }
}

impl fmt::Debug for ResponseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseHandle")
            .field("url", &self.url)
            .field("status", &self.status)
            .field("content_type", &self.content_type)
            .field("charset", &self.charset.name())
            .field("body_taken", &self.body.is_none())
            .finish()
    }
}
