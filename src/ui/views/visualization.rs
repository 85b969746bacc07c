use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use ratatui::{Frame, layout::Rect, style::Style};
use uuid::Uuid;

use crate::{
    event::events::Event,
    nav::{Page, PageLifecycle, PageState, page::VISUALIZATION},
    util::colors,
};

const BARS: usize = 48;
const MAX_LEVEL: u8 = 100;
const DECAY: u8 = 12;
const LEVELS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Decaying bar display. The level buffer is kept while the page is swiped
/// away and resumes where it left off.
pub struct VisualizationPage {
    lifecycle: PageLifecycle,
    levels: Vec<u8>,
    frozen: bool,
    frames: u64,
}

impl VisualizationPage {
    pub fn new() -> Self {
        Self {
            lifecycle: PageLifecycle::new(VISUALIZATION),
            levels: vec![0; BARS],
            frozen: false,
            frames: 0,
        }
    }

    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    fn advance(&mut self) {
        let mut rng = rand::rng();
        for level in self.levels.iter_mut() {
            let decayed = level.saturating_sub(DECAY);
            let kick = rng.random_range(0..=MAX_LEVEL);
            *level = decayed.max(kick / 2 + decayed / 2).min(MAX_LEVEL);
        }
        self.frames += 1;
    }
}

impl Default for VisualizationPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for VisualizationPage {
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
        if area.width == 0 || area.height == 0 {
            return;
        }

        let buf = f.buffer_mut();
        let bar_width = (area.width / BARS as u16).max(1);
        let rows = area.height as u32;
        // Eighths of a cell, bottom-up.
        let resolution = rows * LEVELS.len() as u32;

        for (i, &level) in self.levels.iter().enumerate() {
            let x0 = area.x + i as u16 * bar_width;
            if x0 >= area.right() {
                break;
            }
            let filled = level as u32 * resolution / MAX_LEVEL as u32;
            let style = if level > 80 {
                Style::default().fg(colors::ACCENT)
            } else {
                Style::default().fg(colors::PRIMARY)
            };

            for row in 0..rows {
                let eighths = filled.saturating_sub(row * LEVELS.len() as u32);
                if eighths == 0 {
                    break;
                }
                let symbol = LEVELS[(eighths.min(LEVELS.len() as u32) - 1) as usize];
                let y = area.bottom() - 1 - row as u16;
                for x in x0..(x0 + bar_width).min(area.right()) {
                    buf[(x, y)].set_symbol(symbol).set_style(style);
                }
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('f') => {
                self.frozen = !self.frozen;
                true
            }
            _ => false,
        }
    }

    fn on_event(&mut self, event: &Event) {
        if matches!(event, Event::Tick)
            && !self.frozen
            && self.lifecycle.state() == PageState::Active
        {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_advances_only_when_active() {
        let mut page = VisualizationPage::new();
        page.on_event(&Event::Tick);
        assert_eq!(page.frames(), 0);

        page.activate();
        page.on_event(&Event::Tick);
        page.on_event(&Event::Tick);
        assert_eq!(page.frames(), 2);
        assert!(page.levels().iter().all(|&l| l <= MAX_LEVEL));
    }

    #[test]
    fn test_buffer_survives_retention() {
        let mut page = VisualizationPage::new();
        page.activate();
        for _ in 0..5 {
            page.on_event(&Event::Tick);
        }
        let snapshot = page.levels().to_vec();

        page.retain();
        page.on_event(&Event::Tick);
        page.activate();

        assert_eq!(page.levels(), snapshot.as_slice());
        assert_eq!(page.frames(), 5);
    }

    #[test]
    fn test_freeze_toggle() {
        let mut page = VisualizationPage::new();
        page.activate();
        assert!(page.handle_input(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE)));
        assert!(page.is_frozen());

        page.on_event(&Event::Tick);
        assert_eq!(page.frames(), 0);
    }
}
