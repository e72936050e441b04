use crate::common::config_files::beside_executable;
use crate::slots::{Slot, SlotState, SLOT_COUNT};
use crate::validator::is_openable;
use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

pub const CONFIG_FILE: &str = "work_panel.json";

/// Document written by [`ConfigStore::save`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConfigDocument {
    pub selected_files: Vec<String>,
    #[serde(default, deserialize_with = "lenient_times")]
    pub last_modified_times: Vec<f64>,
}

/// Non-numeric entries read as 0 and a non-array as empty, so damaged
/// timestamps never reject the paths stored beside them.
fn lenient_times<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => {
            items.iter().map(|v| v.as_f64().unwrap_or(0.0)).collect()
        }
        _ => Vec::new(),
    })
}

/// Every layout accepted when reading. Variant order decides precedence.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredDocument {
    Current(ConfigDocument),
    Panel {
        #[serde(rename = "lastOpenedFiles")]
        last_opened_files: Vec<String>,
        #[serde(default, deserialize_with = "lenient_times")]
        last_modified_times: Vec<f64>,
    },
    Legacy {
        #[serde(default)]
        selected_file: String,
    },
    Bare(Vec<String>),
}

impl StoredDocument {
    fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        match self {
            StoredDocument::Current(doc) => (doc.selected_files, doc.last_modified_times),
            StoredDocument::Panel {
                last_opened_files,
                last_modified_times,
            } => (last_opened_files, last_modified_times),
            StoredDocument::Legacy { selected_file } => (vec![selected_file], Vec::new()),
            StoredDocument::Bare(files) => (files, Vec::new()),
        }
    }
}

/// Result of [`ConfigStore::load`].
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    /// Validated slot states; anything that failed validation is `Unbound`.
    pub states: [SlotState; SLOT_COUNT],
    /// Timestamps as stored, 0 where absent.
    pub modified: [f64; SLOT_COUNT],
    /// Path strings exactly as stored, before validation.
    pub stored_paths: Vec<String>,
}

impl LoadedConfig {
    fn from_parts(mut files: Vec<String>, times: Vec<f64>) -> Self {
        files.resize(files.len().max(SLOT_COUNT), String::new());
        let states = std::array::from_fn(|i| {
            let path = &files[i];
            if path.is_empty() {
                SlotState::Unbound
            } else if is_openable(path) {
                tracing::info!(slot = i + 1, path = %path, "loaded binding");
                SlotState::Bound(path.clone())
            } else {
                tracing::warn!(slot = i + 1, path = %path, "stored target is no longer openable");
                SlotState::Unbound
            }
        });
        let modified = std::array::from_fn(|i| match states[i] {
            SlotState::Bound(_) => times.get(i).copied().unwrap_or(0.0),
            SlotState::Unbound => 0.0,
        });
        Self {
            states,
            modified,
            stored_paths: files,
        }
    }
}

/// Reads and writes the slot bindings document.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store located next to the running executable.
    pub fn beside_executable() -> Self {
        Self::new(beside_executable(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write all slots, refreshing each target's modification time.
    pub fn save(&self, slots: &[Slot]) -> anyhow::Result<()> {
        let selected_files: Vec<String> = slots
            .iter()
            .map(|s| s.stored_path().to_string())
            .collect();
        let last_modified_times = selected_files.iter().map(|p| modified_time(p)).collect();
        let doc = ConfigDocument {
            selected_files,
            last_modified_times,
        };
        let json = serde_json::to_string_pretty(&doc)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    /// Read the document, falling back to all-unbound on any failure.
    pub fn load(&self) -> LoadedConfig {
        match self.read() {
            Ok(Some(loaded)) => loaded,
            Ok(None) => {
                tracing::debug!(path = %self.path.display(), "no configuration file");
                LoadedConfig::default()
            }
            Err(e) => {
                tracing::warn!("failed to load configuration: {e:#}");
                LoadedConfig::default()
            }
        }
    }

    fn read(&self) -> anyhow::Result<Option<LoadedConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let doc: StoredDocument = serde_json::from_str(&content)
            .with_context(|| format!("invalid configuration in {}", self.path.display()))?;
        let (files, times) = doc.into_parts();
        Ok(Some(LoadedConfig::from_parts(files, times)))
    }
}

/// Modification time of `path` in seconds since the epoch, 0 on any failure.
pub fn modified_time(path: &str) -> f64 {
    if path.is_empty() {
        return 0.0;
    }
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
