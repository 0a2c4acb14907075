use std::rc::Rc;

use windowing::{Align, ScrollSnapshot, WindowOptions, WindowedList};

use crate::{Frame, Photo, PhotoSource, Result, SimulatedContainer};

/// Message shown when the photo listing cannot be loaded.
pub const LOAD_ERROR: &str = "Failed to load data";

pub type PhotoRow = fn(&Photo, usize) -> String;
pub type PhotoList = WindowedList<Photo, String, PhotoRow>;

fn render_photo(photo: &Photo, _index: usize) -> String {
    format!("{} (ID: {})", photo.title, photo.id)
}

pub enum HomeState {
    Loading,
    Failed(String),
    Loaded(PhotoList),
}

impl std::fmt::Debug for HomeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => f.write_str("Loading"),
            Self::Failed(msg) => f.debug_tuple("Failed").field(msg).finish(),
            Self::Loaded(list) => f.debug_tuple("Loaded").field(list).finish(),
        }
    }
}

/// The listing screen: a windowed photo list mounted in a scroll container.
///
/// The list's tracker is subscribed to `container` while the list is loaded. Reloading or
/// dropping the screen drops the list, which releases that subscription.
#[derive(Debug)]
pub struct HomeScreen {
    options: WindowOptions,
    limit: usize,
    container: Rc<SimulatedContainer>,
    state: HomeState,
}

impl HomeScreen {
    pub fn new(options: WindowOptions, limit: usize) -> Self {
        let container = SimulatedContainer::new(options.height);
        Self {
            options,
            limit,
            container,
            state: HomeState::Loading,
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    pub fn container(&self) -> &Rc<SimulatedContainer> {
        &self.container
    }

    pub fn list(&self) -> Option<&PhotoList> {
        match &self.state {
            HomeState::Loaded(list) => Some(list),
            _ => None,
        }
    }

    fn list_mut(&mut self) -> Option<&mut PhotoList> {
        match &mut self.state {
            HomeState::Loaded(list) => Some(list),
            _ => None,
        }
    }

    /// Fetches the listing. Fetch failures become [`HomeState::Failed`]; only a bad list
    /// configuration is returned as an error.
    pub fn load(&mut self, source: &dyn PhotoSource, token: Option<&str>) -> Result<()> {
        self.state = HomeState::Loading;
        let photos = match source.fetch_photos(self.limit, token) {
            Ok(photos) => photos,
            Err(e) => {
                tracing::warn!(error = %e, limit = self.limit, "failed to load photos");
                self.state = HomeState::Failed(LOAD_ERROR.to_owned());
                return Ok(());
            }
        };
        tracing::info!(count = photos.len(), "photos loaded");

        let mut list = PhotoList::new(photos, self.options.clone(), render_photo as PhotoRow)?;
        self.container.set_content_height(list.total_height());
        list.attach(&self.container);
        self.state = HomeState::Loaded(list);
        Ok(())
    }

    pub fn snapshot(&self) -> Option<ScrollSnapshot> {
        self.list().map(PhotoList::snapshot)
    }

    /// Scrolls the container back to a previously captured position.
    pub fn restore(&mut self, snapshot: ScrollSnapshot) {
        if self.list().is_some() {
            self.resize(snapshot.viewport_height);
            self.container.scroll_to(snapshot.offset);
        }
    }

    pub fn scroll_to(&mut self, offset: u64) {
        self.container.scroll_to(offset);
    }

    pub fn scroll_by(&mut self, delta: i64) {
        self.container.scroll_by(delta);
    }

    pub fn resize(&mut self, height: u32) {
        self.options.height = height;
        if let Some(list) = self.list_mut() {
            list.set_height(height);
        }
        self.container.resize(height);
    }

    pub fn page_down(&mut self) {
        self.page(true);
    }

    pub fn page_up(&mut self) {
        self.page(false);
    }

    fn page(&mut self, down: bool) {
        let Some(list) = self.list() else {
            return;
        };
        let params = list.params();
        let Some(first) = params.index_at_offset(params.scroll_offset) else {
            return;
        };
        let rows = (params.viewport_height / params.item_height.get()).max(1) as usize;
        let target = if down {
            first.saturating_add(rows)
        } else {
            first.saturating_sub(rows)
        };
        let offset = params.scroll_to_index_offset(target, Align::Start);
        self.container.scroll_to(offset);
    }

    pub fn scroll_to_top(&mut self) {
        self.container.scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        let Some(list) = self.list() else {
            return;
        };
        let offset = list.scroll_to_index_offset(list.len().saturating_sub(1), Align::End);
        self.container.scroll_to(offset);
    }

    pub fn render(&mut self, frame: &mut Frame) {
        match &mut self.state {
            HomeState::Loading => frame.push("Loading..."),
            HomeState::Failed(msg) => {
                frame.push(format!("! {msg}"));
                frame.push("[ Retry ]  [ Back to start ]");
            }
            HomeState::Loaded(list) => {
                frame.push("Item list                                   [ Log out ]");
                frame.push(format!("Found {} items", list.len()));
                let view = list.view();
                let (first, last) = match (view.range.start_index(), view.range.end_index()) {
                    (Some(s), Some(e)) => (s.to_string(), e.to_string()),
                    _ => ("-".to_owned(), "-".to_owned()),
                };
                frame.push(format!(
                    "-- rows {first}..={last} | offset {} | viewport {} | spacer {} --",
                    list.scroll_offset(),
                    view.viewport_height,
                    view.spacer_height
                ));
                for node in &view.nodes {
                    frame.push(format!("{:>9} | #{:<5} {}", node.top, node.key, node.content));
                }
            }
        }
    }
}
