pub mod config;
pub mod event;
pub mod library;
pub mod nav;
pub mod ui;
pub mod util;
