//! Update Note Use Case
//!
//! Title and items can change; type and owner cannot. Items are validated
//! and normalized against the stored type and replace the old list.
//! Concurrent updates are last-write-wins; the archived flag is never
//! written here.

use std::sync::Arc;

use kernel::id::{NoteId, UserId};

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::domain::validation::{NotePatch, validate_patch};
use crate::error::{NoteError, NoteResult};

pub struct UpdateNoteUseCase<N>
where
    N: NoteRepository,
{
    note_repo: Arc<N>,
}

impl<N> UpdateNoteUseCase<N>
where
    N: NoteRepository,
{
    pub fn new(note_repo: Arc<N>) -> Self {
        Self { note_repo }
    }

    pub async fn execute(
        &self,
        owner_id: &UserId,
        note_id: &NoteId,
        patch: NotePatch,
    ) -> NoteResult<Note> {
        let mut note = self
            .note_repo
            .find_by_id(owner_id, note_id)
            .await?
            .ok_or(NoteError::NotFound)?;

        let valid = validate_patch(patch, note.note_type())?;

        if !note.apply(valid) {
            return Ok(note);
        }

        // None: deleted between read and write
        let stored = self
            .note_repo
            .update(&note)
            .await?
            .ok_or(NoteError::NotFound)?;

        tracing::info!(user_id = %owner_id, note_id = %note_id, "Note updated");

        Ok(stored)
    }
}
