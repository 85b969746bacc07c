use crate::{
    nav::SwipeDirection,
    ui::{app::Overlay, message::AppMessage},
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, overlay: &Overlay, tab_count: usize) -> Option<AppMessage> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppMessage::Quit);
        }

        match overlay {
            Overlay::Menu(_) => match key.code {
                KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::MenuNext),
                KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::MenuPrevious),
                KeyCode::Enter => Some(AppMessage::MenuSelect),
                KeyCode::Esc | KeyCode::Char('m') => Some(AppMessage::CloseOverlay),
                _ => None,
            },
            Overlay::Settings => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(AppMessage::CloseOverlay),
                _ => None,
            },
            Overlay::None => match key.code {
                KeyCode::Char('q') => Some(AppMessage::Quit),
                KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                    Some(AppMessage::Swipe(SwipeDirection::Right))
                }
                KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                    Some(AppMessage::Swipe(SwipeDirection::Left))
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let index = c as usize - '1' as usize;
                    (index < tab_count).then_some(AppMessage::PressTab(index))
                }
                KeyCode::Char('m') => Some(AppMessage::OpenMenu),
                KeyCode::Char('R') => Some(AppMessage::Rescan),
                _ => None,
            },
        }
    }
}
