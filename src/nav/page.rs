use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::event::events::Event;

pub const COLLECTION: &str = "collection";
pub const PLAYING: &str = "playing";
pub const VISUALIZATION: &str = "visualization";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageState {
    #[default]
    Uncreated,
    Active,
    Retained,
    Destroyed,
}

/// Ordered, immutable list of symbolic page names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSet {
    names: Vec<String>,
}

impl PageSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for PageSet {
    fn default() -> Self {
        Self::new([COLLECTION, PLAYING, VISUALIZATION])
    }
}

/// One unit of navigable content.
///
/// The navigation core only drives `activate`, `retain` and `destroy`; the
/// remaining hooks belong to the terminal shell.
pub trait Page: Send {
    fn id(&self) -> Uuid;
    fn name(&self) -> &str;
    fn state(&self) -> PageState;

    fn activate(&mut self);
    fn retain(&mut self);
    fn destroy(&mut self);

    fn render(&mut self, _f: &mut Frame, _area: Rect) {}

    /// Returns `true` when the page consumed the key.
    fn handle_input(&mut self, _key: KeyEvent) -> bool {
        false
    }

    fn on_event(&mut self, _event: &Event) {}
}

/// Identity and lifecycle bookkeeping shared by page implementations.
#[derive(Debug, Clone)]
pub struct PageLifecycle {
    id: Uuid,
    name: &'static str,
    state: PageState,
}

impl PageLifecycle {
    pub fn new(name: &'static str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            state: PageState::Uncreated,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn activate(&mut self) {
        self.transition(PageState::Active);
    }

    pub fn retain(&mut self) {
        self.transition(PageState::Retained);
    }

    pub fn destroy(&mut self) {
        self.transition(PageState::Destroyed);
    }

    fn transition(&mut self, next: PageState) {
        if self.state == PageState::Destroyed {
            warn!(page = self.name, ?next, "ignoring transition of destroyed page");
            return;
        }
        if self.state != next {
            debug!(page = self.name, from = ?self.state, to = ?next, "page lifecycle");
            self.state = next;
        }
    }
}
