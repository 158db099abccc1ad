//! Drop flow: turns a card release into backend calls and state updates.
//!
//! State changes are emitted through a `dispatch` callback so the same flow
//! drives a Dioxus signal in the app and a plain [`InteractionState`] in
//! tests. Failures are logged and swallowed; the caller's state is left as it
//! was apart from the card returning to rest.

use crate::api::NotesBackend;
use crate::gesture::{plan_drop, DropPlan, DropZone};
use crate::state::{AnimationTarget, InteractionState, NotesAction, PendingRequest};

/// Result of handling one drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// No backend call was made
    Idle,
    /// The backend accepted the mutation and the list was reloaded
    Succeeded,
    /// The mutation failed or was rejected
    Failed,
}

/// Reload the note list and dispatch it.
///
/// Returns `false` (after logging) when the list could not be loaded; the
/// previously loaded list stays in place.
pub async fn refresh_notes<B: NotesBackend>(
    backend: &B,
    dispatch: &mut impl FnMut(NotesAction),
) -> bool {
    match backend.list().await {
        Ok(notes) => {
            tracing::debug!("Loaded {} notes", notes.len());
            dispatch(NotesAction::SetNotes(Some(notes)));
            true
        }
        Err(e) => {
            tracing::error!("Failed to load notes: {}", e);
            false
        }
    }
}

/// Handle the card being released, over `zone` or outside every zone.
pub async fn handle_drop<B: NotesBackend>(
    backend: &B,
    state: &InteractionState,
    zone: Option<DropZone>,
    mut dispatch: impl FnMut(NotesAction),
) -> DropOutcome {
    dispatch(NotesAction::DragEnded);

    let plan = plan_drop(state, zone);
    let request = match &plan {
        DropPlan::Ignore => {
            tracing::debug!("Card released with nothing to do (zone: {:?})", zone);
            return DropOutcome::Idle;
        }
        DropPlan::Busy => {
            tracing::warn!(
                "Ignoring drop on {:?}: request {:?} still in flight",
                zone,
                state.pending
            );
            return DropOutcome::Idle;
        }
        DropPlan::Discard => {
            tracing::debug!("Discarding unsaved note");
            dispatch(NotesAction::SetNote(None));
            return DropOutcome::Idle;
        }
        DropPlan::Create(_) => PendingRequest::Create,
        DropPlan::Update(stored) => PendingRequest::Update(stored.id.clone()),
        DropPlan::Remove(id) => PendingRequest::Remove(id.clone()),
    };

    dispatch(NotesAction::RequestStarted(request.clone()));

    let result = match &plan {
        DropPlan::Create(note) => backend.create(note).await,
        DropPlan::Update(stored) => backend.update(stored).await,
        DropPlan::Remove(id) => backend.remove(id).await,
        DropPlan::Ignore | DropPlan::Busy | DropPlan::Discard => Ok(false),
    };

    let outcome = match result {
        Ok(true) => {
            tracing::info!("Backend accepted {:?}", request);
            refresh_notes(backend, &mut dispatch).await;
            match request {
                PendingRequest::Create => dispatch(NotesAction::SetNote(None)),
                PendingRequest::Update(_) => dispatch(NotesAction::SetEditNote(None)),
                PendingRequest::Remove(_) => {
                    dispatch(NotesAction::SetEditNote(None));
                    dispatch(NotesAction::SetNote(None));
                }
            }
            DropOutcome::Succeeded
        }
        Ok(false) => {
            tracing::warn!("Backend rejected {:?}", request);
            DropOutcome::Failed
        }
        Err(e) => {
            tracing::error!("Failed to complete {:?}: {}", request, e);
            DropOutcome::Failed
        }
    };

    dispatch(NotesAction::RequestFinished);
    dispatch(NotesAction::SetAnimate(AnimationTarget::Resting));
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{Error, Result};
    use crate::models::{Note, NoteId, StoredNote};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List,
        Create(Note),
        Update(StoredNote),
        Remove(NoteId),
    }

    /// In-memory backend that records every call.
    struct FakeBackend {
        calls: RefCell<Vec<Call>>,
        notes: RefCell<Vec<StoredNote>>,
        accept: bool,
        fail_list: bool,
    }

    impl FakeBackend {
        fn new(notes: Vec<StoredNote>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                notes: RefCell::new(notes),
                accept: true,
                fail_list: false,
            }
        }

        fn rejecting() -> Self {
            Self {
                accept: false,
                ..Self::new(Vec::new())
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn mutation_calls(&self) -> Vec<Call> {
            self.calls()
                .into_iter()
                .filter(|call| *call != Call::List)
                .collect()
        }
    }

    impl NotesBackend for FakeBackend {
        async fn list(&self) -> Result<Vec<StoredNote>> {
            self.calls.borrow_mut().push(Call::List);
            if self.fail_list {
                return Err(Error::MissingData);
            }
            Ok(self.notes.borrow().clone())
        }

        async fn create(&self, note: &Note) -> Result<bool> {
            self.calls.borrow_mut().push(Call::Create(note.clone()));
            if self.accept {
                let id = format!("n{}", self.notes.borrow().len() + 1);
                self.notes.borrow_mut().push(stored(&id, note.clone()));
            }
            Ok(self.accept)
        }

        async fn update(&self, note: &StoredNote) -> Result<bool> {
            self.calls.borrow_mut().push(Call::Update(note.clone()));
            Ok(self.accept)
        }

        async fn remove(&self, id: &NoteId) -> Result<bool> {
            self.calls.borrow_mut().push(Call::Remove(id.clone()));
            if self.accept {
                self.notes.borrow_mut().retain(|note| note.id != *id);
            }
            Ok(self.accept)
        }
    }

    /// Backend whose mutations fail at the transport level.
    struct BrokenBackend;

    impl NotesBackend for BrokenBackend {
        async fn list(&self) -> Result<Vec<StoredNote>> {
            Err(Error::MissingData)
        }

        async fn create(&self, _note: &Note) -> Result<bool> {
            Err(Error::Status {
                status: 500,
                body: "boom".to_string(),
            })
        }

        async fn update(&self, _note: &StoredNote) -> Result<bool> {
            Err(Error::InvalidInput("unreachable".to_string()))
        }

        async fn remove(&self, _id: &NoteId) -> Result<bool> {
            Err(Error::InvalidInput("unreachable".to_string()))
        }
    }

    fn stored(id: &str, note: Note) -> StoredNote {
        StoredNote {
            id: NoteId::new(id),
            note,
            created_at: None,
            updated_at: None,
        }
    }

    /// Run a drop against `state`, applying every dispatched action to it.
    async fn drop_on<B: NotesBackend>(
        backend: &B,
        state: &mut InteractionState,
        zone: Option<DropZone>,
    ) -> DropOutcome {
        let snapshot = state.clone();
        handle_drop(backend, &snapshot, zone, |action| state.apply(action)).await
    }

    #[tokio::test(flavor = "current_thread")]
    async fn save_creates_once_then_refreshes_and_clears() {
        let backend = FakeBackend::new(Vec::new());
        let note = Note::new("Buy milk", "2 litres");
        let mut state = InteractionState::default().reduce(NotesAction::SetNote(Some(note.clone())));

        let outcome = drop_on(&backend, &mut state, Some(DropZone::Save)).await;

        assert_eq!(outcome, DropOutcome::Succeeded);
        assert_eq!(backend.calls(), vec![Call::Create(note.clone()), Call::List]);
        assert_eq!(state.note, None);
        assert_eq!(state.notes, Some(vec![stored("n1", note)]));
        assert_eq!(state.animate, AnimationTarget::Resting);
        assert!(!state.is_busy());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn save_while_editing_updates_with_id() {
        let existing = stored("abc", Note::new("old", "body"));
        let backend = FakeBackend::new(vec![existing.clone()]);
        let mut state = InteractionState::default()
            .reduce(NotesAction::SetEditNote(Some(existing)))
            .reduce(NotesAction::EditField {
                field: crate::state::EditorField::Title,
                value: "new".to_string(),
            });

        let outcome = drop_on(&backend, &mut state, Some(DropZone::Save)).await;

        assert_eq!(outcome, DropOutcome::Succeeded);
        assert_eq!(
            backend.mutation_calls(),
            vec![Call::Update(stored("abc", Note::new("new", "body")))]
        );
        assert_eq!(state.edit_note, None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn delete_while_editing_removes_and_clears() {
        let existing = stored("abc", Note::new("t", "d"));
        let backend = FakeBackend::new(vec![existing.clone()]);
        let mut state = InteractionState::default()
            .reduce(NotesAction::SetNote(Some(Note::new("draft", ""))))
            .reduce(NotesAction::SetEditNote(Some(existing)));

        let outcome = drop_on(&backend, &mut state, Some(DropZone::Delete)).await;

        assert_eq!(outcome, DropOutcome::Succeeded);
        assert_eq!(backend.mutation_calls(), vec![Call::Remove(NoteId::new("abc"))]);
        assert_eq!(state.edit_note, None);
        assert_eq!(state.note, None);
        assert_eq!(state.notes, Some(Vec::new()));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn delete_without_edit_only_clears_draft() {
        let backend = FakeBackend::new(Vec::new());
        let mut state =
            InteractionState::default().reduce(NotesAction::SetNote(Some(Note::new("draft", ""))));

        let outcome = drop_on(&backend, &mut state, Some(DropZone::Delete)).await;

        assert_eq!(outcome, DropOutcome::Idle);
        assert!(backend.calls().is_empty());
        assert_eq!(state.note, None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn drop_outside_zones_makes_no_call_and_rests() {
        let backend = FakeBackend::new(Vec::new());
        let note = Note::new("keep", "me");
        let mut state = InteractionState::default()
            .reduce(NotesAction::SetNote(Some(note.clone())))
            .reduce(NotesAction::SetAnimate(AnimationTarget::Collapsed));

        let outcome = drop_on(&backend, &mut state, None).await;

        assert_eq!(outcome, DropOutcome::Idle);
        assert!(backend.calls().is_empty());
        assert_eq!(state.animate, AnimationTarget::Resting);
        assert_eq!(state.note, Some(note));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn drop_while_pending_makes_no_call() {
        let backend = FakeBackend::new(Vec::new());
        let mut state = InteractionState::default()
            .reduce(NotesAction::SetNote(Some(Note::new("second", ""))))
            .reduce(NotesAction::RequestStarted(PendingRequest::Create));

        let outcome = drop_on(&backend, &mut state, Some(DropZone::Save)).await;

        assert_eq!(outcome, DropOutcome::Idle);
        assert!(backend.calls().is_empty());
        assert_eq!(state.animate, AnimationTarget::Collapsed);
        assert_eq!(state.pending, Some(PendingRequest::Create));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejected_save_keeps_note_and_list() {
        let backend = FakeBackend::rejecting();
        let note = Note::new("Buy milk", "");
        let previous = vec![stored("old", Note::new("kept", ""))];
        let mut state = InteractionState::default()
            .reduce(NotesAction::SetNotes(Some(previous.clone())))
            .reduce(NotesAction::SetNote(Some(note.clone())));

        let outcome = drop_on(&backend, &mut state, Some(DropZone::Save)).await;

        assert_eq!(outcome, DropOutcome::Failed);
        assert_eq!(backend.calls(), vec![Call::Create(note.clone())]);
        assert_eq!(state.note, Some(note));
        assert_eq!(state.notes, Some(previous));
        assert_eq!(state.animate, AnimationTarget::Resting);
        assert!(!state.is_busy());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejected_update_keeps_edit_note() {
        let backend = FakeBackend::rejecting();
        let existing = stored("abc", Note::new("old", "body"));
        let previous = vec![existing.clone()];
        let mut state = InteractionState::default()
            .reduce(NotesAction::SetNotes(Some(previous.clone())))
            .reduce(NotesAction::SetEditNote(Some(existing.clone())));

        let outcome = drop_on(&backend, &mut state, Some(DropZone::Save)).await;

        assert_eq!(outcome, DropOutcome::Failed);
        assert_eq!(backend.calls(), vec![Call::Update(existing.clone())]);
        assert_eq!(state.edit_note, Some(existing));
        assert_eq!(state.notes, Some(previous));
        assert_eq!(state.animate, AnimationTarget::Resting);
        assert!(!state.is_busy());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejected_remove_keeps_edit_note_and_list() {
        let backend = FakeBackend::rejecting();
        let existing = stored("abc", Note::new("t", "d"));
        let draft = Note::new("draft", "");
        let previous = vec![existing.clone()];
        let mut state = InteractionState::default()
            .reduce(NotesAction::SetNotes(Some(previous.clone())))
            .reduce(NotesAction::SetNote(Some(draft.clone())))
            .reduce(NotesAction::SetEditNote(Some(existing.clone())));

        let outcome = drop_on(&backend, &mut state, Some(DropZone::Delete)).await;

        assert_eq!(outcome, DropOutcome::Failed);
        assert_eq!(backend.calls(), vec![Call::Remove(NoteId::new("abc"))]);
        assert_eq!(state.edit_note, Some(existing));
        assert_eq!(state.note, Some(draft));
        assert_eq!(state.notes, Some(previous));
        assert!(!state.is_busy());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn save_of_blank_note_still_creates() {
        let backend = FakeBackend::new(Vec::new());
        let blank = Note::new("  ", "");
        let mut state =
            InteractionState::default().reduce(NotesAction::SetNote(Some(blank.clone())));

        let outcome = drop_on(&backend, &mut state, Some(DropZone::Save)).await;

        assert_eq!(outcome, DropOutcome::Succeeded);
        assert_eq!(backend.mutation_calls(), vec![Call::Create(blank)]);
        assert_eq!(state.note, None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn transport_error_is_swallowed() {
        let note = Note::new("Buy milk", "");
        let mut state =
            InteractionState::default().reduce(NotesAction::SetNote(Some(note.clone())));

        let outcome = drop_on(&BrokenBackend, &mut state, Some(DropZone::Save)).await;

        assert_eq!(outcome, DropOutcome::Failed);
        assert_eq!(state.note, Some(note));
        assert_eq!(state.notes, None);
        assert!(!state.is_busy());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn refresh_failure_keeps_previous_list() {
        let previous = vec![stored("a", Note::new("x", ""))];
        let mut state =
            InteractionState::default().reduce(NotesAction::SetNotes(Some(previous.clone())));
        let backend = FakeBackend {
            fail_list: true,
            ..FakeBackend::new(Vec::new())
        };

        let loaded = refresh_notes(&backend, &mut |action| state.apply(action)).await;

        assert!(!loaded);
        assert_eq!(state.notes, Some(previous));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn collapsed_while_request_in_flight() {
        let backend = FakeBackend::new(Vec::new());
        let state =
            InteractionState::default().reduce(NotesAction::SetNote(Some(Note::new("t", ""))));
        let mut seen = Vec::new();

        handle_drop(&backend, &state.clone(), Some(DropZone::Save), |action| {
            seen.push(action);
        })
        .await;

        let started = seen
            .iter()
            .position(|action| *action == NotesAction::RequestStarted(PendingRequest::Create))
            .unwrap();
        let finished = seen
            .iter()
            .position(|action| *action == NotesAction::RequestFinished)
            .unwrap();
        assert!(started < finished);
        assert_eq!(
            seen.last(),
            Some(&NotesAction::SetAnimate(AnimationTarget::Resting))
        );
    }
}
