use crate::api::ApiError;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentToggle {
    pub reseller_id: String,
    pub kit_id: String,
    pub assign: bool,
}

impl AssignmentToggle {
    /// Flips the current assignment state of `kit_id`.
    pub fn for_kit(reseller_id: &str, kit_id: &str, assigned: &HashSet<String>) -> Self {
        Self {
            reseller_id: reseller_id.to_string(),
            kit_id: kit_id.to_string(),
            assign: !assigned.contains(kit_id),
        }
    }
}

/// Applies a confirmed toggle to the local set.
pub fn apply_toggle(assigned: &mut HashSet<String>, toggle: &AssignmentToggle) {
    if toggle.assign {
        assigned.insert(toggle.kit_id.clone());
    } else {
        assigned.remove(&toggle.kit_id);
    }
}

/// Toggles are only safe once the reseller's current assignments are known.
pub fn assignments_loaded(state: Option<&Result<Vec<String>, ApiError>>) -> bool {
    matches!(state, Some(Ok(_)))
}

pub fn tile_class(assigned: bool) -> &'static str {
    if assigned {
        "bg-blue-900/10 border-blue-500/50 hover:bg-blue-900/20"
    } else {
        "bg-zinc-950 border-zinc-800 hover:border-zinc-600"
    }
}
