//! Delete Note Use Case

use std::sync::Arc;

use kernel::id::{NoteId, UserId};

use crate::domain::repository::NoteRepository;
use crate::error::{NoteError, NoteResult};

pub struct DeleteNoteUseCase<N>
where
    N: NoteRepository,
{
    note_repo: Arc<N>,
}

impl<N> DeleteNoteUseCase<N>
where
    N: NoteRepository,
{
    pub fn new(note_repo: Arc<N>) -> Self {
        Self { note_repo }
    }

    pub async fn execute(&self, owner_id: &UserId, note_id: &NoteId) -> NoteResult<()> {
        if !self.note_repo.delete(owner_id, note_id).await? {
            return Err(NoteError::NotFound);
        }

        tracing::info!(user_id = %owner_id, note_id = %note_id, "Note deleted");

        Ok(())
    }
}
