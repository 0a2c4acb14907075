//! A login-gated listing screen built on the `windowing` crate.
//!
//! The `windowing` crate owns the row windowing. This crate provides the plumbing around it,
//! kept framework-neutral (no terminal or GUI bindings):
//!
//! - form validation, a fake authenticator and a persisted session
//! - a photo source boundary with HTTP, fixture and JSON-body implementations
//! - a private-route guard
//! - login and listing screens rendered to text [`Frame`]s, driven by [`App`]
#![forbid(unsafe_code)]

mod app;
mod auth;
mod config;
mod container;
mod error;
mod frame;
mod home;
mod http;
pub mod logging;
mod login;
mod router;
mod session;
mod source;


pub use app::{App, AppEvent};
pub use auth::{Authenticator, Credentials, FAKE_TOKEN, FakeAuthenticator};
pub use config::AppConfig;
pub use container::SimulatedContainer;
pub use error::{AppError, AuthError, FetchError, Result, ValidationErrors};
pub use frame::Frame;
pub use home::{HomeScreen, HomeState, LOAD_ERROR, PhotoList, PhotoRow};
pub use http::{HttpPhotoSource, check_status};
pub use login::{Field, LoginScreen};
pub use router::Route;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use source::{
    DEFAULT_REQUEST_TIMEOUT_MS, FixturePhotoSource, JsonPhotoSource, Photo, PhotoSource,
    authorization_header, parse_photos, photos_path,
};
