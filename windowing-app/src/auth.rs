use crate::{AuthError, ValidationErrors};

/// Token issued by [`FakeAuthenticator`].
pub const FAKE_TOKEN: &str = "fake-jwt-token-123456789";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Form-level checks run before any login attempt.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let email = self.email.trim();
        let errors = ValidationErrors {
            email: if email.is_empty() {
                Some("email is required".to_owned())
            } else if !is_valid_email(email) {
                Some("invalid email".to_owned())
            } else {
                None
            },
            password: self
                .password
                .is_empty()
                .then(|| "password is required".to_owned()),
        };
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

/// Exchanges credentials for a bearer token.
pub trait Authenticator {
    fn login(&self, credentials: &Credentials) -> Result<String, AuthError>;
}

/// Accepts any non-empty credentials.
#[derive(Clone, Debug)]
pub struct FakeAuthenticator {
    token: String,
}

impl Default for FakeAuthenticator {
    fn default() -> Self {
        Self {
            token: FAKE_TOKEN.to_owned(),
        }
    }
}

impl FakeAuthenticator {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Authenticator for FakeAuthenticator {
    fn login(&self, credentials: &Credentials) -> Result<String, AuthError> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        tracing::info!(email = %credentials.email, "login accepted");
        Ok(self.token.clone())
    }
}
