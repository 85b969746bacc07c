use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Paragraph},
};
use tracing::warn;

use crate::{
    ui::{
        app::{App, Overlay},
        components::{settings::SettingsScreen, tab_bar::TabBar},
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("tabpager")
            .title_alignment(Alignment::Center);
        let inner = frame_block.inner(area);
        f.render_widget(frame_block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let tab_area = chunks[0];
        let content_area = chunks[2];
        let hint_area = chunks[3];

        let tabs = self.app.nav.tabs();
        let labels: Vec<&str> = tabs.tabs().iter().map(|t| t.label.as_str()).collect();
        f.render_widget(TabBar::new(labels, tabs.current_index()), tab_area);
        self.app.tab_bar_area = tab_area;

        match self.app.nav.current_page_mut() {
            Ok(page) => page.render(f, content_area),
            Err(e) => warn!("cannot render current page: {}", e),
        }

        f.render_widget(
            Paragraph::new("←/→ swipe · 1-9 tab · m menu · q quit")
                .style(Style::default().fg(colors::NEUTRAL))
                .alignment(Alignment::Center),
            hint_area,
        );

        match &self.app.overlay {
            Overlay::None => {}
            Overlay::Menu(menu) => f.render_widget(menu, content_area),
            Overlay::Settings => {
                let popup = centered(content_area, 60, 10);
                f.render_widget(SettingsScreen::new(&self.app.config), popup);
            }
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
