//! Toggle Archive Use Case

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{NoteId, UserId};

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::error::{NoteError, NoteResult};

pub struct ToggleArchiveUseCase<N>
where
    N: NoteRepository,
{
    note_repo: Arc<N>,
}

impl<N> ToggleArchiveUseCase<N>
where
    N: NoteRepository,
{
    pub fn new(note_repo: Arc<N>) -> Self {
        Self { note_repo }
    }

    pub async fn execute(&self, owner_id: &UserId, note_id: &NoteId) -> NoteResult<Note> {
        let note = self
            .note_repo
            .toggle_archive(owner_id, note_id, Utc::now())
            .await?
            .ok_or(NoteError::NotFound)?;

        tracing::info!(
            user_id = %owner_id,
            note_id = %note_id,
            archived = note.is_archived,
            "Note archive toggled"
        );

        Ok(note)
    }
}
