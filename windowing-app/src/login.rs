use crate::{Authenticator, Credentials, Frame, ValidationErrors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// The login form.
#[derive(Clone, Debug, Default)]
pub struct LoginScreen {
    credentials: Credentials,
    field_errors: ValidationErrors,
    error: Option<String>,
    loading: bool,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Email => self.credentials.email = value.into(),
            Field::Password => self.credentials.password = value.into(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn field_errors(&self) -> &ValidationErrors {
        &self.field_errors
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Validates the form and, if it passes, logs in. Returns the issued token on success.
    ///
    /// Field problems land in `field_errors`; a rejected login lands in `error`.
    pub fn submit(&mut self, auth: &dyn Authenticator) -> Option<String> {
        self.error = None;
        if let Err(errors) = self.credentials.validate() {
            tracing::debug!(%errors, "login form rejected");
            self.field_errors = errors;
            return None;
        }
        self.field_errors = ValidationErrors::default();

        self.loading = true;
        let result = auth.login(&self.credentials);
        self.loading = false;

        match result {
            Ok(token) => {
                self.credentials.password.clear();
                Some(token)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        frame.push("Sign in");
        frame.push("Log in to your account");
        if let Some(error) = &self.error {
            frame.push(format!("! {error}"));
        }
        frame.push(format!("Email:    {}", self.credentials.email));
        if let Some(msg) = &self.field_errors.email {
            frame.push(format!("  {msg}"));
        }
        frame.push(format!(
            "Password: {}",
            "*".repeat(self.credentials.password.chars().count())
        ));
        if let Some(msg) = &self.field_errors.password {
            frame.push(format!("  {msg}"));
        }
        frame.push(if self.loading { "[ Loading... ]" } else { "[ Sign in ]" });
    }
}
