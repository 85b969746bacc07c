use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState, Paragraph},
};
use uuid::Uuid;

use crate::{
    event::events::Event,
    nav::{Page, PageLifecycle, PageState, page::COLLECTION},
    ui::components::spinner::Spinner,
    util::colors,
};

#[derive(Debug, Clone, PartialEq)]
enum ScanStatus {
    Pending,
    Done,
    Failed(String),
}

pub struct CollectionPage {
    lifecycle: PageLifecycle,
    root: Option<PathBuf>,
    entries: Vec<PathBuf>,
    list_state: ListState,
    status: ScanStatus,
}

impl CollectionPage {
    pub fn new() -> Self {
        Self {
            lifecycle: PageLifecycle::new(COLLECTION),
            root: None,
            entries: Vec::new(),
            list_state: ListState::default(),
            status: ScanStatus::Pending,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    fn display_name(&self, path: &Path) -> String {
        self.root
            .as_ref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

impl Default for CollectionPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for CollectionPage {
    fn id(&self) -> Uuid {
        self.lifecycle.id()
    }

    fn name(&self) -> &str {
        self.lifecycle.name()
    }

    fn state(&self) -> PageState {
        self.lifecycle.state()
    }

    fn activate(&mut self) {
        self.lifecycle.activate();
    }

    fn retain(&mut self) {
        self.lifecycle.retain();
    }

    fn destroy(&mut self) {
        self.lifecycle.destroy();
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        match &self.status {
            ScanStatus::Pending => {
                let spinner = Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Scanning library...".to_string());
                f.render_widget(spinner, area);
            }
            ScanStatus::Failed(e) => {
                let text = Paragraph::new(format!("Library scan failed: {}", e))
                    .style(Style::default().fg(colors::ACCENT));
                f.render_widget(text, area);
            }
            ScanStatus::Done if self.entries.is_empty() => {
                let text = Paragraph::new("No music found")
                    .style(Style::default().fg(colors::MUTED));
                f.render_widget(text, area);
            }
            ScanStatus::Done => {
                let items: Vec<ListItem> = self
                    .entries
                    .iter()
                    .map(|path| ListItem::new(format!("  {}", self.display_name(path))))
                    .collect();
                let list = List::new(items).highlight_style(
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                );
                f.render_stateful_widget(list, area, &mut self.list_state);
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.list_state.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.list_state.select_previous(),
            KeyCode::Home | KeyCode::Char('g') => self.list_state.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.list_state.select_last(),
            _ => return false,
        }
        true
    }

    fn on_event(&mut self, event: &Event) {
        match event {
            Event::LibraryScanned { root, entries } => {
                self.root = Some(root.clone());
                self.entries = entries.clone();
                self.status = ScanStatus::Done;
                let selected = if self.entries.is_empty() {
                    None
                } else {
                    Some(
                        self.list_state
                            .selected()
                            .unwrap_or(0)
                            .min(self.entries.len() - 1),
                    )
                };
                self.list_state.select(selected);
            }
            Event::ScanFailed(e) => {
                self.status = ScanStatus::Failed(e.clone());
            }
            _ => {}
        }
    }
}
