use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;

use crate::{
    AppConfig, FetchError, Photo, PhotoSource, authorization_header, parse_photos, photos_path,
};

/// Fetches the photo listing from a JSON API over HTTP.
///
/// Requests go to `{base_url}/photos?_limit={limit}` with the session token as a bearer
/// credential. Non-2xx responses become [`FetchError::Status`].
#[derive(Clone, Debug)]
pub struct HttpPhotoSource {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl HttpPhotoSource {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| FetchError::Transport {
                message: e.to_string(),
            })?;
        Ok(Self::with_client(client, base_url, timeout_ms))
    }

    /// Uses a preconfigured client. `timeout_ms` is only reported back in timeout errors.
    pub fn with_client(client: Client, base_url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(config.api_base_url.clone(), config.request_timeout_ms)
    }

    pub fn photos_url(&self, limit: usize) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), photos_path(limit))
    }

    fn request_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            FetchError::Transport {
                message: e.to_string(),
            }
        }
    }
}

/// Accepts 2xx statuses.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status { status })
    }
}

impl PhotoSource for HttpPhotoSource {
    fn fetch_photos(&self, limit: usize, auth: Option<&str>) -> Result<Vec<Photo>, FetchError> {
        let url = self.photos_url(limit);
        tracing::debug!(%url, authorized = auth.is_some(), "GET photos");

        let mut request = self.client.get(&url);
        if let Some(value) = authorization_header(auth) {
            request = request.header(AUTHORIZATION, value);
        }
        let response = request.send().map_err(|e| self.request_error(e))?;
        let status = response.status().as_u16();
        if let Err(e) = check_status(status) {
            tracing::warn!(status, %url, "photo request rejected");
            return Err(e);
        }
        let body = response.text().map_err(|e| self.request_error(e))?;
        parse_photos(&body, limit)
    }
}
