pub mod menu;
pub mod settings;
pub mod spinner;
pub mod tab_bar;
