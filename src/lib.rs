pub mod common;
pub mod config_store;
pub mod gui;
pub mod launcher;
pub mod logging;
pub mod panel;
pub mod settings;
pub mod slots;
pub mod toast_log;
pub mod validator;
