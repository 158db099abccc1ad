//! Data models for SuperTodo

mod note;

pub use note::{Note, NoteId, StoredNote};
