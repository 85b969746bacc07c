use tracing::{debug, info, warn};

use super::{
    error::NavError,
    factory::PageFactory,
    host::{PageHost, SwipeDirection},
    label::LabelResolver,
    page::{Page, PageSet},
    settings::SettingsLauncher,
    tabs::TabStrip,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    Ready,
    TornDown,
}

/// How many times each side of the synchronization protocol ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub tab_selected: usize,
    pub page_selected: usize,
}

/// Keeps the tab strip and the page container on the same page.
///
/// A tab press drives the page position, and the page position drives what
/// the tab strip displays. The display path never fires a tab selection, so
/// events cannot bounce between the two models.
pub struct NavigationController {
    state: ControllerState,
    page_set: PageSet,
    tabs: TabStrip,
    host: PageHost,
    selection: usize,
    settings: Box<dyn SettingsLauncher>,
    stats: SyncStats,
}

impl NavigationController {
    pub fn new(
        page_set: PageSet,
        resolver: &LabelResolver,
        factory: Box<dyn PageFactory>,
        settings: Box<dyn SettingsLauncher>,
    ) -> Result<Self, NavError> {
        let mut controller = Self {
            state: ControllerState::Uninitialized,
            page_set,
            tabs: TabStrip::new(),
            host: PageHost::new(factory),
            selection: 0,
            settings,
            stats: SyncStats::default(),
        };
        controller.initialize(resolver)?;
        Ok(controller)
    }

    fn initialize(&mut self, resolver: &LabelResolver) -> Result<(), NavError> {
        if self.page_set.is_empty() {
            return Err(NavError::EmptyPageSet);
        }
        if self.host.len() != self.page_set.len() {
            return Err(NavError::CountMismatch {
                what: "page factory",
                expected: self.page_set.len(),
                actual: self.host.len(),
            });
        }

        // Every label is resolved before the first tab is added.
        let labels = resolver.validate(&self.page_set)?;
        for label in labels {
            let position = self.tabs.add_tab(label);
            debug!(position, label = ?self.tabs.label(position), "registered tab");
        }
        if self.tabs.len() != self.host.len() {
            return Err(NavError::CountMismatch {
                what: "tab strip",
                expected: self.host.len(),
                actual: self.tabs.len(),
            });
        }

        self.host.ensure_window(self.selection)?;
        self.tabs.select_by_index(self.selection)?;
        self.state = ControllerState::Ready;
        info!(pages = self.page_set.len(), "navigation ready");

        Ok(())
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn page_set(&self) -> &PageSet {
        &self.page_set
    }

    pub fn tabs(&self) -> &TabStrip {
        &self.tabs
    }

    pub fn host(&self) -> &PageHost {
        &self.host
    }

    /// The page at `position`, without moving the page container.
    pub fn page_mut(&mut self, position: usize) -> Result<&mut Box<dyn Page>, NavError> {
        self.host.get(position)
    }

    pub fn current_page_mut(&mut self) -> Result<&mut Box<dyn Page>, NavError> {
        self.host.current_page()
    }

    pub fn for_each_page(&mut self, f: impl FnMut(usize, &mut dyn Page)) {
        self.host.for_each_materialized(f);
    }

    pub fn stats(&self) -> SyncStats {
        self.stats
    }

    /// The user activated tab `index`: move the page container there.
    pub fn on_tab_selected(&mut self, index: usize) -> Result<(), NavError> {
        self.check_ready()?;
        self.check_index(index)?;
        self.stats.tab_selected += 1;
        debug!(index, "tab selected");

        if let Some(position) = self.host.set_current_item(index)? {
            self.on_page_selected(position)?;
        }
        Ok(())
    }

    /// The page container settled on `index`: mirror it on the tab strip.
    ///
    /// The container is brought to `index` first. When the notification came
    /// from the container itself it is already there and nothing moves.
    pub fn on_page_selected(&mut self, index: usize) -> Result<(), NavError> {
        self.check_ready()?;
        self.check_index(index)?;
        self.host.set_current_item(index)?;
        self.stats.page_selected += 1;
        debug!(index, "page selected");

        self.tabs.select_by_index(index)?;
        self.selection = index;
        Ok(())
    }

    /// Entry point for a press on the tab strip.
    pub fn press_tab(&mut self, index: usize) -> Result<(), NavError> {
        self.check_ready()?;
        let position = self.tabs.press(index)?;
        self.on_tab_selected(position)
    }

    /// Entry point for a swipe on the page container.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<(), NavError> {
        self.check_ready()?;
        if let Some(position) = self.host.swipe(direction)? {
            self.on_page_selected(position)?;
        }
        Ok(())
    }

    pub fn open_settings(&self) -> Result<(), NavError> {
        self.check_ready()?;
        info!("opening settings");
        self.settings.launch();
        Ok(())
    }

    pub fn teardown(&mut self) -> Result<(), NavError> {
        self.check_ready()?;
        self.host.destroy_all()?;
        self.state = ControllerState::TornDown;
        info!("navigation torn down");
        Ok(())
    }

    /// `Uninitialized` never escapes `new`, which fails before returning a
    /// controller in that state; it is matched for completeness.
    fn check_ready(&self) -> Result<(), NavError> {
        match self.state {
            ControllerState::Ready => Ok(()),
            ControllerState::TornDown => Err(NavError::TornDown),
            state => Err(NavError::NotReady(state)),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), NavError> {
        let count = self.page_set.len();
        if index < count {
            Ok(())
        } else {
            warn!(index, count, "rejected out-of-range page index");
            Err(NavError::IndexOutOfRange { index, count })
        }
    }
}
