use std::time::Duration;

use flume::{Receiver, Sender};
use ratatui::layout::Rect;
use tracing::{error, info};

use crate::{
    config::ShellConfig,
    event::events::Event,
    library::{FsScanner, LibraryScanner},
    nav::{LabelResolver, NavError, NavigationController, PageSet},
    ui::{
        components::menu::{MenuEntry, OptionsMenu},
        layout::AppLayout,
        message::AppMessage,
        views::StockPageFactory,
    },
};

use super::{tui, util::handler::EventHandler};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    None,
    Menu(OptionsMenu),
    Settings,
}

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub config: ShellConfig,
    pub nav: NavigationController,
    pub scanner: Box<dyn LibraryScanner>,
    pub overlay: Overlay,
    pub tab_bar_area: Rect,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: ShellConfig) -> color_eyre::Result<Self> {
        let library_dir = config.library_dir.clone();
        let app = Self::with_scanner(config, |tx| Box::new(FsScanner::new(library_dir, tx)))?;
        Ok(app)
    }

    /// Builds the navigation shell and kicks off the library scan. The scan
    /// is not awaited.
    pub fn with_scanner(
        config: ShellConfig,
        scanner: impl FnOnce(Sender<Event>) -> Box<dyn LibraryScanner>,
    ) -> Result<Self, NavError> {
        let (event_tx, event_rx) = flume::unbounded();

        let nav = NavigationController::new(
            PageSet::default(),
            &LabelResolver::default(),
            Box::new(StockPageFactory),
            Box::new(event_tx.clone()),
        )?;

        let mut scanner = scanner(event_tx.clone());
        scanner.begin_scan(config.full_rescan);

        Ok(Self {
            event_rx,
            event_tx,
            config,
            nav,
            scanner,
            overlay: Overlay::None,
            tab_bar_area: Rect::default(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = match tui::Tui::new() {
            Ok(tui) => tui
                .tick_rate(Duration::from_millis(self.config.tick_ms))
                .mouse(self.config.mouse),
            Err(e) => return self.close(Err(e)),
        };

        let mut result = tui.enter();
        if result.is_ok() {
            result = self.event_loop(&mut tui).await;
        }
        let exited = tui.exit();

        self.close(result.and(exited))
    }

    async fn event_loop(&mut self, tui: &mut tui::Tui) -> color_eyre::Result<()> {
        while !self.should_quit {
            if EventHandler::handle_events(self, tui).await? {
                tui.draw(|f| {
                    if self.has_focus {
                        let area = f.area();
                        AppLayout::new(self).render(f, area);
                    }
                })?;
            }
        }
        Ok(())
    }

    /// Tears navigation down whatever `result` the shell ended with. The
    /// shell's own error wins over a teardown error.
    fn close(&mut self, result: color_eyre::Result<()>) -> color_eyre::Result<()> {
        let torn_down = self.nav.teardown();
        match &result {
            Ok(()) => info!("shell closed"),
            Err(e) => error!("shell closed with error: {}", e),
        }
        result?;
        torn_down?;
        Ok(())
    }

    pub fn update(&mut self, msg: AppMessage) -> Result<(), NavError> {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::Swipe(direction) => self.nav.swipe(direction)?,
            AppMessage::PressTab(index) => self.nav.press_tab(index)?,
            AppMessage::OpenMenu => self.overlay = Overlay::Menu(OptionsMenu::default()),
            AppMessage::MenuNext => {
                if let Overlay::Menu(menu) = &mut self.overlay {
                    menu.next();
                }
            }
            AppMessage::MenuPrevious => {
                if let Overlay::Menu(menu) = &mut self.overlay {
                    menu.previous();
                }
            }
            AppMessage::MenuSelect => {
                if let Overlay::Menu(menu) = &self.overlay {
                    let entry = menu.selected();
                    self.overlay = Overlay::None;
                    match entry {
                        MenuEntry::Settings => self.nav.open_settings()?,
                        MenuEntry::Rescan => self.scanner.begin_scan(true),
                    }
                }
            }
            AppMessage::CloseOverlay => self.overlay = Overlay::None,
            AppMessage::Rescan => self.scanner.begin_scan(true),
        }
        Ok(())
    }
}
