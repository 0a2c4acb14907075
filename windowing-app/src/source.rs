use std::cell::{Cell, RefCell};

use serde::{Deserialize, Serialize};

use crate::FetchError;

/// Request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(default)]
    pub album_id: u64,
    pub id: u64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// Where the listing screen gets its rows from.
pub trait PhotoSource {
    /// `auth` is the session token, sent as a bearer credential when present.
    fn fetch_photos(&self, limit: usize, auth: Option<&str>) -> Result<Vec<Photo>, FetchError>;
}

/// Request path for the photo listing.
pub fn photos_path(limit: usize) -> String {
    format!("/photos?_limit={limit}")
}

pub fn authorization_header(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

/// Parses a photo listing response body, keeping at most `limit` rows.
pub fn parse_photos(body: &str, limit: usize) -> Result<Vec<Photo>, FetchError> {
    let mut photos: Vec<Photo> = serde_json::from_str(body).map_err(|e| FetchError::Decode {
        message: e.to_string(),
    })?;
    photos.truncate(limit);
    Ok(photos)
}

/// Deterministic in-process photo source.
#[derive(Debug)]
pub struct FixturePhotoSource {
    count: usize,
    timeout_ms: u64,
    failures: Cell<usize>,
    calls: Cell<usize>,
    last_authorization: RefCell<Option<String>>,
}

impl FixturePhotoSource {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            failures: Cell::new(0),
            calls: Cell::new(0),
            last_authorization: RefCell::new(None),
        }
    }

    /// Timeout reported by simulated failures.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Fails the next `n` fetches with a timeout.
    pub fn failing(self, n: usize) -> Self {
        self.failures.set(n);
        self
    }

    pub fn fail_next(&self, n: usize) {
        self.failures.set(n);
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// The `Authorization` header value seen on the last fetch.
    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization.borrow().clone()
    }

    pub fn photo(id: u64) -> Photo {
        Photo {
            album_id: id.saturating_sub(1) / 50 + 1,
            id,
            title: format!("photo number {id}"),
            url: format!("https://via.placeholder.com/600/{id:06x}"),
            thumbnail_url: format!("https://via.placeholder.com/150/{id:06x}"),
        }
    }
}

impl PhotoSource for FixturePhotoSource {
    fn fetch_photos(&self, limit: usize, auth: Option<&str>) -> Result<Vec<Photo>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_authorization.borrow_mut() = authorization_header(auth);
        tracing::debug!(path = %photos_path(limit), "fixture fetch");

        let failures = self.failures.get();
        if failures > 0 {
            self.failures.set(failures - 1);
            return Err(FetchError::Timeout {
                timeout_ms: self.timeout_ms,
            });
        }

        let n = self.count.min(limit);
        Ok((1..=n as u64).map(Self::photo).collect())
    }
}

/// Serves a fixed response body.
#[derive(Clone, Debug)]
pub struct JsonPhotoSource {
    body: String,
}

impl JsonPhotoSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl PhotoSource for JsonPhotoSource {
    fn fetch_photos(&self, limit: usize, _auth: Option<&str>) -> Result<Vec<Photo>, FetchError> {
        parse_photos(&self.body, limit)
    }
}

impl<S: PhotoSource + ?Sized> PhotoSource for std::rc::Rc<S> {
    fn fetch_photos(&self, limit: usize, auth: Option<&str>) -> Result<Vec<Photo>, FetchError> {
        (**self).fetch_photos(limit, auth)
    }
}
