//! UI Components
//!
//! Reusable UI components for the desktop application.

mod drop_targets;
mod note_card;
mod note_editor;
mod note_list;

pub use drop_targets::DropTargets;
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
