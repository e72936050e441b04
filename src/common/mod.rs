pub mod config_files;
pub mod file_dialog;
