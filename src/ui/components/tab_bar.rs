use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

const DIVIDER: &str = "│";

/// One-line tab strip. Column spans are shared between rendering and mouse
/// hit testing so a click always lands on the tab that was drawn there.
pub struct TabBar<'a> {
    labels: Vec<&'a str>,
    selected: Option<usize>,
}

impl<'a> TabBar<'a> {
    pub fn new(labels: Vec<&'a str>, selected: Option<usize>) -> Self {
        Self { labels, selected }
    }

    /// `(x, width)` of every tab, starting at `x`.
    pub fn spans(labels: &[&str], x: u16) -> Vec<(u16, u16)> {
        let mut cursor = x;
        labels
            .iter()
            .map(|label| {
                let width = UnicodeWidthStr::width(*label) as u16 + 2;
                let span = (cursor, width);
                cursor = cursor.saturating_add(width + DIVIDER.width() as u16);
                span
            })
            .collect()
    }

    pub fn hit_test(labels: &[&str], area: Rect, position: Position) -> Option<usize> {
        if !area.contains(position) {
            return None;
        }
        Self::spans(labels, area.x)
            .iter()
            .position(|&(x, width)| position.x >= x && position.x < x.saturating_add(width))
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let spans = Self::spans(&self.labels, area.x);
        for (i, (label, (x, width))) in self.labels.iter().zip(spans).enumerate() {
            if x >= area.right() {
                break;
            }
            let style = if Some(i) == self.selected {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(colors::MUTED)
            };
            let max_width = (area.right() - x) as usize;
            buf.set_stringn(x, area.y, format!(" {} ", label), max_width, style);

            let divider_x = x.saturating_add(width);
            if i + 1 < self.labels.len() && divider_x < area.right() {
                buf.set_string(divider_x, area.y, DIVIDER, Style::default().fg(colors::NEUTRAL));
            }
        }
    }
}
