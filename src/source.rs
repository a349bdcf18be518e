//! Document sources: where the checkpoint JSON comes from.
//!
//! The normal source is a single blocking HTTP GET. A local file (plain path
//! or `file://` URL) is accepted too, which makes it possible to run against
//! a saved copy of the document.

use std::path::PathBuf;
use std::time::Duration;

use log::info;
use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

use crate::{Config, Error, Result};

/// Something that can produce the parsed checkpoint document
pub trait DocumentSource {
    /// Retrieve and parse the document. Called once per run.
    fn fetch(&self) -> Result<Value>;
}

/// Fetches the document over HTTP(S)
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Fetch(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self) -> Result<Value> {
        info!("fetching checkpoint document from {}", self.url);
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| Error::Fetch(format!("GET {} failed: {}", self.url, e)))?
            .error_for_status()
            .map_err(|e| Error::Fetch(format!("GET {} returned an error status: {}", self.url, e)))?;

        let body = resp
            .text()
            .map_err(|e| Error::Fetch(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| Error::Fetch(format!("Response from {} is not valid JSON: {}", self.url, e)))
    }
}

/// Reads the document from a local file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self) -> Result<Value> {
        info!("reading checkpoint document from {}", self.path.display());
        let body = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Fetch(format!("Failed to read {}: {}", self.path.display(), e)))?;

        serde_json::from_str(&body).map_err(|e| {
            Error::Fetch(format!("{} is not valid JSON: {}", self.path.display(), e))
        })
    }
}

/// Pick the source for `config.source_url`.
///
/// `http`/`https` URLs are fetched over the network, `file://` URLs and
/// strings that do not parse as a URL are treated as local paths.
pub fn source_for(config: &Config) -> Result<Box<dyn DocumentSource>> {
    match Url::parse(&config.source_url) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(Box::new(HttpSource::new(url.as_str(), config)?)),
            "file" => {
                let path = url.to_file_path().map_err(|_| {
                    Error::Config(format!("'{}' is not a usable file URL", config.source_url))
                })?;
                Ok(Box::new(FileSource::new(path)))
            }
            other => Err(Error::Config(format!(
                "unsupported source scheme '{}' in '{}'",
                other, config.source_url
            ))),
        },
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Ok(Box::new(FileSource::new(&config.source_url)))
        }
        Err(e) => Err(Error::Config(format!(
            "'{}' is not a valid source: {}",
            config.source_url, e
        ))),
    }
}
