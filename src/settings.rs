use crate::common::config_files::beside_executable;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving a copy of the log output.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    /// Initial window size before the removable-media widening is applied.
    #[serde(default = "default_window_size")]
    pub window_size: Option<(i32, i32)>,
    #[serde(default)]
    pub always_on_top: bool,
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

fn default_window_size() -> Option<(i32, i32)> {
    Some((300, 600))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            window_size: default_window_size(),
            always_on_top: false,
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Default settings location next to the executable.
    pub fn default_path() -> PathBuf {
        beside_executable(SETTINGS_FILE)
    }

    /// Window size as egui expects it.
    pub fn window_size(&self) -> [f32; 2] {
        let (w, h) = self
            .window_size
            .filter(|(w, h)| *w > 0 && *h > 0)
            .or_else(default_window_size)
            .unwrap_or((300, 600));
        [w as f32, h as f32]
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
    }
}
