use ratatui::{
    crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind},
    layout::Position,
};
use tracing::debug;

use crate::{
    event::events::Event,
    nav::{NavError, SwipeDirection},
    ui::{
        app::{App, Overlay},
        components::tab_bar::TabBar,
        input::InputHandler,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then drains pending app events.
    /// Returns whether a redraw is needed.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            should_render = Self::handle_event(app, evt, tui)?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent, tui: &mut Tui) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key)?,
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse)?,
            TerminalEvent::Tick => {
                if let Ok(page) = app.nav.current_page_mut() {
                    page.on_event(&Event::Tick);
                }
                return Ok(app.has_focus);
            }
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    /// App events: settings requests and library scan results.
    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::OpenSettings => app.overlay = Overlay::Settings,
            Event::LibraryScanned { .. } | Event::ScanFailed(_) => {
                app.nav.for_each_page(|_, page| page.on_event(&evt));
            }
            Event::Tick => {}
        }
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<(), NavError> {
        if app.overlay == Overlay::None {
            let consumed = app
                .nav
                .current_page_mut()
                .map(|page| page.handle_input(key))?;
            if consumed {
                return Ok(());
            }
        }

        if let Some(msg) = InputHandler::handle_key(key, &app.overlay, app.nav.tabs().len()) {
            debug!(?msg, "key message");
            app.update(msg)?;
        }
        Ok(())
    }

    fn handle_mouse_event(app: &mut App, evt: MouseEvent) -> Result<(), NavError> {
        if app.overlay != Overlay::None {
            return Ok(());
        }

        let msg = match evt.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let labels: Vec<&str> = app
                    .nav
                    .tabs()
                    .tabs()
                    .iter()
                    .map(|t| t.label.as_str())
                    .collect();
                TabBar::hit_test(
                    &labels,
                    app.tab_bar_area,
                    Position::new(evt.column, evt.row),
                )
                .map(AppMessage::PressTab)
            }
            MouseEventKind::ScrollUp => Some(AppMessage::Swipe(SwipeDirection::Left)),
            MouseEventKind::ScrollDown => Some(AppMessage::Swipe(SwipeDirection::Right)),
            _ => None,
        };

        match msg {
            Some(msg) => app.update(msg),
            None => Ok(()),
        }
    }
}
