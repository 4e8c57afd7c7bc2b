//! List Notes Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::Note;
use crate::domain::repository::{NoteFilter, NoteRepository};
use crate::error::NoteResult;

pub struct ListNotesUseCase<N>
where
    N: NoteRepository,
{
    note_repo: Arc<N>,
}

impl<N> ListNotesUseCase<N>
where
    N: NoteRepository,
{
    pub fn new(note_repo: Arc<N>) -> Self {
        Self { note_repo }
    }

    pub async fn execute(&self, owner_id: &UserId, filter: NoteFilter) -> NoteResult<Vec<Note>> {
        self.note_repo.list(owner_id, &filter).await
    }
}
