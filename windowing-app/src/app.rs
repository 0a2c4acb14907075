use windowing::{ScrollSnapshot, WindowOptions};

use crate::{
    AppConfig, Authenticator, Field, Frame, HomeScreen, LoginScreen, PhotoSource, Result, Route,
    Session,
};

/// Input delivered to the application by its host (terminal, test, script).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Input(Field, String),
    Submit,
    Navigate(String),
    Scroll(u64),
    ScrollBy(i64),
    Resize(u32),
    PageDown,
    PageUp,
    Top,
    Bottom,
    Retry,
    Logout,
}

/// A framework-neutral application controller.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `handle(event)` for every input event
/// - `render()` whenever they want a fresh frame
///
/// The listing screen is mounted on entering `/home` and dropped on leaving it, which releases
/// its scroll subscription. The last scroll position is kept so that coming back restores it.
pub struct App {
    config: AppConfig,
    options: WindowOptions,
    session: Session,
    auth: Box<dyn Authenticator>,
    source: Box<dyn PhotoSource>,
    route: Route,
    login: LoginScreen,
    home: Option<HomeScreen>,
    last_scroll: Option<ScrollSnapshot>,
}

impl App {
    pub fn new(
        config: AppConfig,
        session: Session,
        auth: Box<dyn Authenticator>,
        source: Box<dyn PhotoSource>,
    ) -> Result<Self> {
        let options = config.window_options()?;
        Ok(Self {
            config,
            options,
            session,
            auth,
            source,
            route: Route::Login,
            login: LoginScreen::new(),
            home: None,
            last_scroll: None,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn login_screen(&self) -> &LoginScreen {
        &self.login
    }

    pub fn home(&self) -> Option<&HomeScreen> {
        self.home.as_ref()
    }

    pub fn handle(&mut self, event: AppEvent) -> Result<()> {
        tracing::trace!(?event, route = ?self.route, "handle");
        match event {
            AppEvent::Input(field, value) => self.login.set_field(field, value),
            AppEvent::Submit => {
                if self.route != Route::Login {
                    return Ok(());
                }
                if let Some(token) = self.login.submit(self.auth.as_ref()) {
                    self.session.login(token)?;
                    self.navigate(Route::Home.path())?;
                }
            }
            AppEvent::Navigate(path) => self.navigate(&path)?,
            AppEvent::Logout => {
                self.session.logout()?;
                // Unmount first so `navigate` has no listing to snapshot.
                self.home = None;
                self.last_scroll = None;
                self.navigate(Route::Login.path())?;
            }
            AppEvent::Retry => {
                if let Some(home) = &mut self.home {
                    tracing::info!("retrying photo fetch");
                    home.load(self.source.as_ref(), self.session.token())?;
                }
            }
            AppEvent::Scroll(offset) => self.with_home(|h| h.scroll_to(offset)),
            AppEvent::ScrollBy(delta) => self.with_home(|h| h.scroll_by(delta)),
            AppEvent::Resize(height) => {
                self.options.height = height;
                self.with_home(|h| h.resize(height));
            }
            AppEvent::PageDown => self.with_home(HomeScreen::page_down),
            AppEvent::PageUp => self.with_home(HomeScreen::page_up),
            AppEvent::Top => self.with_home(HomeScreen::scroll_to_top),
            AppEvent::Bottom => self.with_home(HomeScreen::scroll_to_bottom),
        }
        Ok(())
    }

    fn with_home(&mut self, f: impl FnOnce(&mut HomeScreen)) {
        match &mut self.home {
            Some(home) => f(home),
            None => tracing::trace!("listing event outside the listing screen ignored"),
        }
    }

    /// Resolves `path` against the session and mounts/unmounts the listing screen.
    pub fn navigate(&mut self, path: &str) -> Result<()> {
        let next = Route::resolve(path, self.session.is_authenticated());
        tracing::info!(path, route = ?next, "navigate");

        if next != Route::Home {
            if let Some(home) = self.home.take() {
                self.last_scroll = home.snapshot().or(self.last_scroll);
            }
            self.route = next;
            return Ok(());
        }

        if self.route == Route::Home && self.home.is_some() {
            return Ok(());
        }

        let mut home = HomeScreen::new(self.options.clone(), self.config.photo_limit);
        home.load(self.source.as_ref(), self.session.token())?;
        if let Some(snapshot) = self.last_scroll {
            home.restore(snapshot);
        }
        self.home = Some(home);
        self.route = Route::Home;
        Ok(())
    }

    pub fn render(&mut self) -> Frame {
        let mut frame = Frame::new();
        match self.route {
            Route::Login => self.login.render(&mut frame),
            Route::Home => match &mut self.home {
                Some(home) => home.render(&mut frame),
                None => frame.push("Loading..."),
            },
        }
        frame
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("session", &self.session)
            .field("home", &self.home)
            .finish_non_exhaustive()
    }
}
