use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const TOAST_LOG_FILE: &str = "toast.log";

/// Append-only record of every notification shown to the user.
#[derive(Debug, Clone)]
pub struct ToastLog {
    path: PathBuf,
}

impl ToastLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log stored in `dir` under [`TOAST_LOG_FILE`].
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(TOAST_LOG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `msg` prefixed with the local time. Write failures are dropped.
    pub fn append(&self, msg: &str) {
        match OpenOptions::new().create(true).append(true).open(&self.path) {
            Ok(mut file) => {
                let _ = writeln!(file, "{} - {}", Local::now().to_rfc3339(), msg);
            }
            Err(e) => tracing::debug!(path = %self.path.display(), "toast log unavailable: {e}"),
        }
    }
}
