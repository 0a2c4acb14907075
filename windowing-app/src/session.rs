use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Persistence for the session token.
pub trait SessionStore {
    fn load(&self) -> Result<Option<String>>;

    /// `None` removes the stored token.
    fn save(&self, token: Option<&str>) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.borrow().clone())
    }

    fn save(&self, token: Option<&str>) -> Result<()> {
        *self.token.borrow_mut() = token.map(str::to_owned);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct StoredSession {
    auth_token: String,
}

/// Stores the token as a small JSON document.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: StoredSession = serde_json::from_str(&raw)?;
        Ok(Some(stored.auth_token))
    }

    fn save(&self, token: Option<&str>) -> Result<()> {
        match token {
            Some(token) => {
                let raw = serde_json::to_string(&StoredSession {
                    auth_token: token.to_owned(),
                })?;
                fs::write(&self.path, raw)?;
            }
            None => match fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            },
        }
        Ok(())
    }
}

/// The authenticated session. Every change is written through to the store.
pub struct Session {
    token: Option<String>,
    store: Box<dyn SessionStore>,
}

impl Session {
    /// Starts from whatever token the store already holds.
    pub fn restore(store: Box<dyn SessionStore>) -> Result<Self> {
        let token = store.load()?;
        tracing::debug!(restored = token.is_some(), "session restored");
        Ok(Self { token, store })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn login(&mut self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        self.store.save(Some(&token))?;
        self.token = Some(token);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        self.store.save(None)?;
        self.token = None;
        tracing::info!("logged out");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::rc::Rc<S> {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, token: Option<&str>) -> Result<()> {
        (**self).save(token)
    }
}
