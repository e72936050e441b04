use std::path::PathBuf;

pub use rfd::FileDialog;

/// Source of user-chosen paths. Returns `None` when the dialog is dismissed.
pub trait FilePicker {
    fn pick_file(&mut self, title: &str) -> Option<PathBuf>;
}

/// Blocking native dialog. No filter is set, so every file is listed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFilePicker;

impl FilePicker for NativeFilePicker {
    fn pick_file(&mut self, title: &str) -> Option<PathBuf> {
        FileDialog::new().set_title(title).pick_file()
    }
}
