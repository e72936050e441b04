use crate::validator::base_name;

/// Number of slots shown in the panel.
pub const SLOT_COUNT: usize = 6;

pub const PLACEHOLDER_LABEL: &str = "No file selected";
pub const SELECT_LABEL: &str = "Select file";
pub const OPEN_LABEL: &str = "Open";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotState {
    #[default]
    Unbound,
    Bound(String),
}

impl SlotState {
    pub fn path(&self) -> Option<&str> {
        match self {
            SlotState::Unbound => None,
            SlotState::Bound(p) => Some(p),
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, SlotState::Bound(_))
    }

    /// Text shown on the slot's button.
    pub fn affordance(&self) -> &'static str {
        match self {
            SlotState::Unbound => SELECT_LABEL,
            SlotState::Bound(_) => OPEN_LABEL,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Slot {
    pub index: usize,
    pub state: SlotState,
    /// Modification time of the target in seconds since the epoch, 0 if unknown.
    pub modified: f64,
    /// Inline error replacing the label until the next successful bind.
    pub error: Option<String>,
}

impl Slot {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    pub fn label(&self) -> String {
        if let Some(err) = &self.error {
            return err.clone();
        }
        match &self.state {
            SlotState::Unbound => PLACEHOLDER_LABEL.to_string(),
            SlotState::Bound(path) => base_name(path),
        }
    }

    /// Stored path string, empty when unbound.
    pub fn stored_path(&self) -> &str {
        self.state.path().unwrap_or("")
    }
}

pub fn empty_slots() -> [Slot; SLOT_COUNT] {
    std::array::from_fn(Slot::new)
}
