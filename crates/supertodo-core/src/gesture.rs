//! Drop-zone decisions for the draggable note card.
//!
//! Drop targets report which zone received the card; nothing here looks at
//! pixel geometry.

use std::fmt;

use crate::models::{Note, NoteId, StoredNote};
use crate::state::InteractionState;

/// Target the card can be dropped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropZone {
    Save,
    Delete,
}

impl DropZone {
    /// DOM id of the zone element
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Save => "save-icon",
            Self::Delete => "delete-icon",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Save => "Save",
            Self::Delete => "Delete",
        }
    }
}

impl fmt::Display for DropZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Save => "save",
            Self::Delete => "delete",
        })
    }
}

/// What a drop should do, decided from the state at release time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPlan {
    /// POST the new note
    Create(Note),
    /// PUT the edited stored note
    Update(StoredNote),
    /// DELETE the stored note being edited
    Remove(NoteId),
    /// Clear the unsaved note without talking to the backend
    Discard,
    /// Nothing to do (dropped outside the zones, or no note was ever typed)
    Ignore,
    /// A mutation is already in flight
    Busy,
}

/// Decide what releasing the card over `zone` should do.
pub fn plan_drop(state: &InteractionState, zone: Option<DropZone>) -> DropPlan {
    let Some(zone) = zone else {
        return DropPlan::Ignore;
    };

    match zone {
        DropZone::Save => {
            if state.is_busy() {
                return DropPlan::Busy;
            }
            if let Some(stored) = &state.edit_note {
                return DropPlan::Update(stored.clone());
            }
            state
                .note
                .as_ref()
                .map_or(DropPlan::Ignore, |note| DropPlan::Create(note.clone()))
        }
        DropZone::Delete => match &state.edit_note {
            Some(_) if state.is_busy() => DropPlan::Busy,
            Some(stored) => DropPlan::Remove(stored.id.clone()),
            None => DropPlan::Discard,
        },
    }
}
