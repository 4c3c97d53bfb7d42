use crate::settings::Settings;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(StatusCode),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Anything that can hand out photo bytes by filename
pub trait PhotoSource {
    fn try_fetch(&self, filename: &str) -> Result<Vec<u8>, FetchError>;

    /// Fetches a photo, logging and swallowing any failure
    fn fetch(&self, filename: &str) -> Option<Vec<u8>> {
        match self.try_fetch(filename) {
            Ok(bytes) if bytes.is_empty() => {
                warn!("Failed to fetch {}: empty response body", filename);
                None
            }
            Ok(bytes) => Some(bytes),
            Err(FetchError::Status(status)) => {
                warn!("Failed to fetch {}: HTTP {}", filename, status.as_u16());
                None
            }
            Err(e) => {
                warn!("Error fetching {}: {}", filename, e);
                None
            }
        }
    }
}

/// Reads photos from the public object storage endpoint
pub struct HttpFetcher {
    client: Client,
    settings: Settings,
}

impl HttpFetcher {
    /// Client without a request timeout; a slow download is waited out.
    pub fn new(settings: Settings) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(None::<Duration>).build()?;
        Ok(Self { client, settings })
    }
}

impl PhotoSource for HttpFetcher {
    fn try_fetch(&self, filename: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.settings.object_url(filename);
        debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        if response.status() != StatusCode::OK {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.bytes()?.to_vec())
    }
}
