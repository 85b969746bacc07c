use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use uuid::Uuid;

use crate::{
    event::events::Event,
    nav::{Page, PageLifecycle, PageState, page::PLAYING},
    util::colors,
};

/// Playback status placeholder. Playback itself lives outside the shell.
pub struct PlayingPage {
    lifecycle: PageLifecycle,
    visits: u32,
    ticks_on_screen: u64,
}

impl PlayingPage {
    pub fn new() -> Self {
        Self {
            lifecycle: PageLifecycle::new(PLAYING),
            visits: 0,
            ticks_on_screen: 0,
        }
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn ticks_on_screen(&self) -> u64 {
        self.ticks_on_screen
    }
}

impl Default for PlayingPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for PlayingPage {
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
        if self.lifecycle.state() != PageState::Active {
            self.visits += 1;
        }
        self.lifecycle.activate();
    }

    fn retain(&mut self) {
        self.lifecycle.retain();
    }

    fn destroy(&mut self) {
        self.lifecycle.destroy();
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled("No track", Style::default().fg(colors::PRIMARY))),
            Line::from(Span::styled(
                format!("viewed {} time(s)", self.visits),
                Style::default().fg(colors::MUTED),
            )),
        ];
        let y_offset = area.height.saturating_sub(lines.len() as u16) / 2;
        let area = Rect {
            y: area.y + y_offset,
            height: area.height.saturating_sub(y_offset),
            ..area
        };
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn on_event(&mut self, event: &Event) {
        if matches!(event, Event::Tick) && self.lifecycle.state() == PageState::Active {
            self.ticks_on_screen += 1;
        }
    }
}
