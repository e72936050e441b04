//! The six-slot panel: binding targets, opening them and persisting the set.

use crate::common::file_dialog::FilePicker;
use crate::config_store::{modified_time, ConfigStore};
use crate::launcher::Launcher;
use crate::slots::{empty_slots, Slot, SlotState, SLOT_COUNT};
use crate::validator::is_openable;
use std::path::Path;

/// Paths containing this marker belong to the removable-media helper, whose
/// long name needs a wider window.
pub const REMOVABLE_MEDIA_MARKER: &str = "eject_devices";

pub const INVALID_TARGET_MESSAGE: &str = "Error: not a valid file or application";
pub const MISSING_TARGET_MESSAGE: &str = "No valid file or application selected";

/// Outcome of a user action on a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Activation {
    /// The file dialog was closed without a choice.
    Dismissed,
    /// The slot now points at `path`. `save_error` is set when persisting failed.
    Bound {
        path: String,
        save_error: Option<String>,
    },
    /// The chosen path failed validation; nothing changed or was saved.
    Rejected { path: String },
    Opened { path: String },
    /// The bound target disappeared since it was bound.
    Missing { path: String },
    LaunchFailed { path: String, message: String },
}

pub struct SlotPanel {
    slots: [Slot; SLOT_COUNT],
    store: ConfigStore,
    marker_at_load: bool,
}

impl SlotPanel {
    /// Panel with every slot unbound. Nothing is read from disk.
    pub fn new(store: ConfigStore) -> Self {
        Self {
            slots: empty_slots(),
            store,
            marker_at_load: false,
        }
    }

    /// Panel populated from the store's document.
    pub fn load(store: ConfigStore) -> Self {
        let mut panel = Self::new(store);
        panel.reload();
        panel
    }

    /// Replace every slot with the stored bindings.
    pub fn reload(&mut self) {
        let loaded = self.store.load();
        self.marker_at_load = loaded
            .stored_paths
            .iter()
            .any(|p| p.contains(REMOVABLE_MEDIA_MARKER));
        let mut slots = empty_slots();
        for ((slot, state), modified) in slots.iter_mut().zip(loaded.states).zip(loaded.modified) {
            slot.state = state;
            slot.modified = modified;
        }
        self.slots = slots;
    }

    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Handle a click on the slot's button.
    ///
    /// An unbound slot asks `picker` for a path and binds it; a bound slot is
    /// handed to `launcher`. Opening never changes the stored path.
    pub fn activate(
        &mut self,
        index: usize,
        picker: &mut dyn FilePicker,
        launcher: &dyn Launcher,
    ) -> anyhow::Result<Activation> {
        let slot = self.slot_checked(index)?;
        match slot.state.clone() {
            SlotState::Unbound => {
                let title = format!("Select file {}", index + 1);
                match picker.pick_file(&title) {
                    Some(path) => self.bind(index, &path.to_string_lossy()),
                    None => Ok(Activation::Dismissed),
                }
            }
            SlotState::Bound(path) => Ok(self.open(index, &path, launcher)),
        }
    }

    /// Bind `path` to the slot if it validates, then persist all slots.
    pub fn bind(&mut self, index: usize, path: &str) -> anyhow::Result<Activation> {
        self.slot_checked(index)?;
        if !is_openable(path) {
            tracing::warn!(slot = index + 1, path = %path, "rejected target");
            self.slots[index].error = Some(INVALID_TARGET_MESSAGE.to_string());
            return Ok(Activation::Rejected {
                path: path.to_string(),
            });
        }

        let slot = &mut self.slots[index];
        slot.state = SlotState::Bound(path.to_string());
        slot.modified = modified_time(path);
        slot.error = None;
        tracing::info!(slot = index + 1, path = %path, "slot bound");

        let save_error = match self.store.save(&self.slots) {
            Ok(()) => None,
            Err(e) => {
                tracing::error!("failed to save configuration: {e:#}");
                Some(format!("{e:#}"))
            }
        };
        Ok(Activation::Bound {
            path: path.to_string(),
            save_error,
        })
    }

    fn open(&mut self, index: usize, path: &str, launcher: &dyn Launcher) -> Activation {
        if !is_openable(path) {
            tracing::warn!(slot = index + 1, path = %path, "bound target is missing");
            return Activation::Missing {
                path: path.to_string(),
            };
        }
        match launcher.open(Path::new(path)) {
            Ok(()) => {
                tracing::info!(slot = index + 1, path = %path, "opened");
                self.slots[index].error = None;
                Activation::Opened {
                    path: path.to_string(),
                }
            }
            Err(e) => {
                tracing::error!(slot = index + 1, "launch failed: {e:#}");
                Activation::LaunchFailed {
                    path: path.to_string(),
                    message: format!("{e:#}"),
                }
            }
        }
    }

    /// True when a stored or bound path carries [`REMOVABLE_MEDIA_MARKER`].
    pub fn is_widened(&self) -> bool {
        self.marker_at_load
            || self.slots.iter().any(|s| {
                s.state
                    .path()
                    .is_some_and(|p| p.contains(REMOVABLE_MEDIA_MARKER))
            })
    }

    /// Window size for the panel given the default `base` size.
    pub fn window_size(&self, base: [f32; 2]) -> [f32; 2] {
        if self.is_widened() {
            [base[0] * 2.0, base[1]]
        } else {
            base
        }
    }

    fn slot_checked(&self, index: usize) -> anyhow::Result<&Slot> {
        self.slots
            .get(index)
            .ok_or_else(|| anyhow::anyhow!("slot index {index} out of range"))
    }
}
