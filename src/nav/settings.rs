use flume::Sender;
use tracing::warn;

use crate::event::events::Event;

/// Presents the settings surface. Nothing is returned to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsLauncher: Send {
    fn launch(&self);
}

impl SettingsLauncher for Sender<Event> {
    fn launch(&self) {
        if self.send(Event::OpenSettings).is_err() {
            warn!("settings requested after the event loop closed");
        }
    }
}
