//! supertodo-core - Core library for SuperTodo
//!
//! This crate contains the note models, the HTTP client for the notes
//! backend, and the interaction state that the desktop UI drives when a
//! note card is dragged onto the save or delete targets.

pub mod api;
pub mod config;
pub mod error;
pub mod gesture;
pub mod models;
pub mod pagination;
pub mod session;
pub mod state;

pub use api::{NotesApiClient, NotesBackend};
pub use error::{Error, Result};
pub use models::{Note, NoteId, StoredNote};
