pub mod controller;
pub mod error;
pub mod factory;
pub mod host;
pub mod label;
pub mod page;
pub mod settings;
pub mod tabs;

pub use controller::{ControllerState, NavigationController, SyncStats};
pub use error::NavError;
pub use factory::PageFactory;
pub use host::{PageHost, SwipeDirection};
pub use label::LabelResolver;
pub use page::{Page, PageLifecycle, PageSet, PageState};
pub use settings::SettingsLauncher;
pub use tabs::{Tab, TabStrip};
