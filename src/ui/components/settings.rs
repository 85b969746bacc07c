use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::{config::ShellConfig, util::colors};

/// Read-only settings screen, opened from the options menu.
pub struct SettingsScreen<'a> {
    config: &'a ShellConfig,
}

impl<'a> SettingsScreen<'a> {
    pub fn new(config: &'a ShellConfig) -> Self {
        Self { config }
    }
}

impl Widget for SettingsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let on_off = |flag: bool| if flag { "on" } else { "off" };
        let lines = vec![
            Line::from(format!(
                "Library       {}",
                self.config.library_dir.display()
            )),
            Line::from(format!("Full rescan   {}", on_off(self.config.full_rescan))),
            Line::from(format!("Tick rate     {} ms", self.config.tick_ms)),
            Line::from(format!("Mouse         {}", on_off(self.config.mouse))),
            Line::from(""),
            Line::from("Esc to close").style(Style::default().fg(colors::MUTED)),
        ];

        Clear.render(area, buf);
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .title("Settings")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().bg(colors::BACKGROUND)),
            )
            .render(area, buf);
    }
}
