//! Note model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Backend-assigned identifier for a stored note.
///
/// The backend hands these out as opaque strings (`_id` on the wire), so no
/// format is assumed beyond being non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wrap a backend identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An unsaved note as typed into the editor card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Title line
    #[serde(default)]
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub desc: String,
    /// Private flag (`priv` on the wire); not used by the UI
    #[serde(rename = "priv", default)]
    pub private: bool,
    /// Soft delete flag; not used by the UI
    #[serde(default)]
    pub deleted: bool,
}

impl Note {
    /// Create a note with the given title and description and both flags cleared
    #[must_use]
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
            private: false,
            deleted: false,
        }
    }

    /// Replace the title, keeping the description of `previous`.
    ///
    /// Every edit rebuilds the whole note: `private` and `deleted` always
    /// come back `false`, whatever `previous` carried.
    #[must_use]
    pub fn edited_title(previous: Option<&Self>, title: impl Into<String>) -> Self {
        let desc = previous.map(|note| note.desc.clone()).unwrap_or_default();
        Self::new(title, desc)
    }

    /// Replace the description, keeping the title of `previous`.
    ///
    /// Same lossy flag handling as [`Note::edited_title`].
    #[must_use]
    pub fn edited_desc(previous: Option<&Self>, desc: impl Into<String>) -> Self {
        let title = previous.map(|note| note.title.clone()).unwrap_or_default();
        Self::new(title, desc)
    }

    /// Get the title truncated to `max_len` characters, falling back to the
    /// first description line when the title is blank
    #[must_use]
    pub fn title_preview(&self, max_len: usize) -> String {
        let source = if self.title.trim().is_empty() {
            self.desc.lines().next().unwrap_or("")
        } else {
            self.title.as_str()
        };
        source.trim().chars().take(max_len).collect()
    }
}

/// A note persisted by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredNote {
    /// Backend identifier; read from `_id`, written back as `id`.
    /// The backend sends only `_id`; a payload carrying both keys is rejected
    /// as a duplicate field.
    #[serde(alias = "_id")]
    pub id: NoteId,
    /// Note body
    #[serde(flatten)]
    pub note: Note,
    /// Creation timestamp assigned by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp assigned by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl StoredNote {
    /// Replace the title; identity and timestamps are kept, flags are reset
    #[must_use]
    pub fn edited_title(&self, title: impl Into<String>) -> Self {
        Self {
            note: Note::edited_title(Some(&self.note), title),
            ..self.clone()
        }
    }

    /// Replace the description; identity and timestamps are kept, flags are reset
    #[must_use]
    pub fn edited_desc(&self, desc: impl Into<String>) -> Self {
        Self {
            note: Note::edited_desc(Some(&self.note), desc),
            ..self.clone()
        }
    }
}
