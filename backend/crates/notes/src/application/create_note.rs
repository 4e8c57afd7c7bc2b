//! Create Note Use Case
//!
//! Validates the draft, normalizes completed flags for the note type and
//! persists it. Nothing is written if validation fails.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::validation::{NoteDraft, validate_new_note};
use crate::error::NoteResult;

pub struct CreateNoteUseCase<N>
where
    N: NoteRepository,
{
    note_repo: Arc<N>,
}

impl<N> CreateNoteUseCase<N>
where
    N: NoteRepository,
{
    pub fn new(note_repo: Arc<N>) -> Self {
        Self { note_repo }
    }

    pub async fn execute(&self, owner_id: &UserId, draft: NoteDraft) -> NoteResult<Note> {
        let valid = validate_new_note(draft)?;
        let note = Note::new(*owner_id, valid);

        self.note_repo.create(&note).await?;

        tracing::info!(
            user_id = %owner_id,
            note_id = %note.note_id,
            note_type = %note.note_type(),
            items = note.items.len(),
            "Note created"
        );

        Ok(note)
    }
}
