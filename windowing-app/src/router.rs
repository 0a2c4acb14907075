/// Screens reachable in the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Home,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Home => "/home",
        }
    }

    /// Maps a path to a route. `/home` is private: without a session it resolves to `Login`.
    /// Unknown paths resolve to `Login`.
    pub fn resolve(path: &str, authenticated: bool) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        match path {
            "/home" if authenticated => Self::Home,
            "/home" => {
                tracing::debug!("private route without session, redirecting to login");
                Self::Login
            }
            _ => Self::Login,
        }
    }
}
