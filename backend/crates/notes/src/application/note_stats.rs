//! Note Stats Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::NoteStats;
use crate::domain::repository::NoteRepository;
use crate::error::NoteResult;

pub struct NoteStatsUseCase<N>
where
    N: NoteRepository,
{
    note_repo: Arc<N>,
}

impl<N> NoteStatsUseCase<N>
where
    N: NoteRepository,
{
    pub fn new(note_repo: Arc<N>) -> Self {
        Self { note_repo }
    }

    pub async fn execute(&self, owner_id: &UserId) -> NoteResult<NoteStats> {
        self.note_repo.stats(owner_id).await
    }
}
