//! Interaction state for the note card and list.
//!
//! The UI holds one [`InteractionState`] and mutates it only through
//! [`InteractionState::apply`]. `edit_note` always wins over `note` when both
//! are set.

use crate::models::{Note, NoteId, StoredNote};

/// Where the draggable card should animate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationTarget {
    /// At its origin (`x: 0, y: 0`), fully visible
    #[default]
    Resting,
    /// Shrunk to `scale: 0.1`, `opacity: 0` while a mutation is in flight
    Collapsed,
}

impl AnimationTarget {
    pub const fn scale(self) -> f32 {
        match self {
            Self::Resting => 1.0,
            Self::Collapsed => 0.1,
        }
    }

    pub const fn opacity(self) -> f32 {
        match self {
            Self::Resting => 1.0,
            Self::Collapsed => 0.0,
        }
    }
}

/// Mutation currently awaiting a backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Create,
    Update(NoteId),
    Remove(NoteId),
}

/// Editor text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Desc,
}

/// State transitions for [`InteractionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesAction {
    SetNote(Option<Note>),
    SetEditNote(Option<StoredNote>),
    SetNotes(Option<Vec<StoredNote>>),
    SetAnimate(AnimationTarget),
    /// Keystroke in one of the editor fields
    EditField { field: EditorField, value: String },
    /// The card was released; it returns to rest unless a request is pending
    DragEnded,
    RequestStarted(PendingRequest),
    RequestFinished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    /// New note being typed
    pub note: Option<Note>,
    /// Stored note selected from the list for editing
    pub edit_note: Option<StoredNote>,
    /// Last list loaded from the backend; `None` until the first load succeeds
    pub notes: Option<Vec<StoredNote>>,
    pub animate: AnimationTarget,
    /// In-flight mutation, if any
    pub pending: Option<PendingRequest>,
}

impl InteractionState {
    pub fn apply(&mut self, action: NotesAction) {
        match action {
            NotesAction::SetNote(note) => self.note = note,
            NotesAction::SetEditNote(note) => self.edit_note = note,
            NotesAction::SetNotes(notes) => self.notes = notes,
            NotesAction::SetAnimate(target) => self.animate = target,
            NotesAction::EditField { field, value } => self.edit_field(field, value),
            NotesAction::DragEnded => {
                if self.pending.is_none() {
                    self.animate = AnimationTarget::Resting;
                }
            }
            NotesAction::RequestStarted(request) => {
                self.pending = Some(request);
                self.animate = AnimationTarget::Collapsed;
            }
            NotesAction::RequestFinished => self.pending = None,
        }
    }

    /// Consuming form of [`InteractionState::apply`].
    #[must_use]
    pub fn reduce(mut self, action: NotesAction) -> Self {
        self.apply(action);
        self
    }

    fn edit_field(&mut self, field: EditorField, value: String) {
        if let Some(stored) = &self.edit_note {
            self.edit_note = Some(match field {
                EditorField::Title => stored.edited_title(value),
                EditorField::Desc => stored.edited_desc(value),
            });
        } else {
            let previous = self.note.as_ref();
            self.note = Some(match field {
                EditorField::Title => Note::edited_title(previous, value),
                EditorField::Desc => Note::edited_desc(previous, value),
            });
        }
    }

    /// Note currently shown in the editor card
    pub fn active_note(&self) -> Option<&Note> {
        self.edit_note
            .as_ref()
            .map(|stored| &stored.note)
            .or(self.note.as_ref())
    }

    pub fn active_title(&self) -> &str {
        self.active_note().map_or("", |note| note.title.as_str())
    }

    pub fn active_desc(&self) -> &str {
        self.active_note().map_or("", |note| note.desc.as_str())
    }

    pub const fn is_editing_existing(&self) -> bool {
        self.edit_note.is_some()
    }

    pub const fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
}
