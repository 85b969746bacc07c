use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};

use crate::util::colors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Settings,
    Rescan,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 2] = [MenuEntry::Settings, MenuEntry::Rescan];

    pub fn title(self) -> &'static str {
        match self {
            MenuEntry::Settings => "Settings",
            MenuEntry::Rescan => "Rescan library",
        }
    }
}

/// Options menu state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsMenu {
    cursor: usize,
}

impl OptionsMenu {
    pub fn selected(&self) -> MenuEntry {
        MenuEntry::ALL[self.cursor]
    }

    pub fn next(&mut self) {
        self.cursor = (self.cursor + 1) % MenuEntry::ALL.len();
    }

    pub fn previous(&mut self) {
        self.cursor = (self.cursor + MenuEntry::ALL.len() - 1) % MenuEntry::ALL.len();
    }
}

impl Widget for &OptionsMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 24.min(area.width);
        let height = (MenuEntry::ALL.len() as u16 + 2).min(area.height);
        let popup = Rect {
            x: area.right().saturating_sub(width),
            y: area.y,
            width,
            height,
        };

        let items: Vec<ListItem> = MenuEntry::ALL
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if i == self.cursor {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::MUTED)
                };
                ListItem::new(format!(" {}", entry.title())).style(style)
            })
            .collect();

        Clear.render(popup, buf);
        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .style(Style::default().bg(colors::BACKGROUND)),
            )
            .render(popup, buf);
    }
}
