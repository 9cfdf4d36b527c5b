//! Repository access
//!
//! [`RepositoryClient`] reads resources by URL from a Maven-layout repository.
//! `http://` and `https://` go through a blocking `reqwest` client; `file://`
//! URLs are read straight from disk so local mirrors work without a server.
//! Requests are made once; failures are reported, never retried.

pub mod checksum;

use std::fs::File;
use std::io::Read;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::catalog::metadata::parse_metadata;
use crate::catalog::{MavenMetadata, MetadataSource};
use crate::error::{Result, io_error, metadata_unavailable};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Why a resource could not be read
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("not found (HTTP {status})")]
    NotFound { status: u16 },

    #[error("HTTP {status} returned")]
    Status { status: u16 },

    #[error("{0}")]
    Transport(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

/// An open resource body
pub struct Download {
    pub reader: Box<dyn Read>,
    /// Size in bytes when the transport reports it
    pub length: Option<u64>,
}

/// Reads repository resources over http(s) or from the local file system
pub struct RepositoryClient {
    client: Client,
}

impl RepositoryClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(format!("mvnfetch/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| io_error(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Open the resource at `url` for streaming
    pub fn open(&self, url: &str) -> std::result::Result<Download, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        debug!(%url, "requesting");

        match parsed.scheme() {
            "http" | "https" => self.open_http(parsed),
            "file" => open_file(&parsed),
            scheme => Err(FetchError::UnsupportedScheme(scheme.to_string())),
        }
    }

    /// Read the whole resource at `url`
    pub fn fetch_bytes(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError> {
        let mut download = self.open(url)?;
        let mut bytes = Vec::new();
        download
            .reader
            .read_to_end(&mut bytes)
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(bytes)
    }

    /// Read the resource at `url` as UTF-8 text
    pub fn fetch_text(&self, url: &str) -> std::result::Result<String, FetchError> {
        let bytes = self.fetch_bytes(url)?;
        String::from_utf8(bytes).map_err(|e| FetchError::Transport(e.to_string()))
    }

    fn open_http(&self, url: Url) -> std::result::Result<Download, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            debug!(%status, %url, "resource not found");
            return Err(FetchError::NotFound {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            warn!(%status, %url, "unexpected HTTP status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let length = response.content_length();
        Ok(Download {
            reader: Box::new(response),
            length,
        })
    }
}

fn open_file(url: &Url) -> std::result::Result<Download, FetchError> {
    let path = url
        .to_file_path()
        .map_err(|()| FetchError::InvalidUrl(url.to_string()))?;

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "file not found");
            return Err(FetchError::NotFound {
                status: StatusCode::NOT_FOUND.as_u16(),
            });
        }
        Err(e) => return Err(FetchError::Transport(e.to_string())),
    };

    let length = file.metadata().ok().map(|m| m.len());
    Ok(Download {
        reader: Box::new(file),
        length,
    })
}

impl MetadataSource for RepositoryClient {
    fn fetch_metadata_document(&self, url: &str) -> Result<MavenMetadata> {
        let text = self
            .fetch_text(url)
            .map_err(|e| metadata_unavailable(url, e))?;
        parse_metadata(&text).map_err(|e| metadata_unavailable(url, e))
    }
}
