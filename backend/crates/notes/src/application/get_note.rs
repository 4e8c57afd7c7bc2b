//! Get Note Use Case

use std::sync::Arc;

use kernel::id::{NoteId, UserId};

use crate::domain::entities::Note;
use crate::domain::repository::NoteRepository;
use crate::error::{NoteError, NoteResult};

pub struct GetNoteUseCase<N>
where
    N: NoteRepository,
{
    note_repo: Arc<N>,
}

impl<N> GetNoteUseCase<N>
where
    N: NoteRepository,
{
    pub fn new(note_repo: Arc<N>) -> Self {
        Self { note_repo }
    }

    pub async fn execute(&self, owner_id: &UserId, note_id: &NoteId) -> NoteResult<Note> {
        self.note_repo
            .find_by_id(owner_id, note_id)
            .await?
            .ok_or(NoteError::NotFound)
    }
}
