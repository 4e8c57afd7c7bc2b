//! In-Memory Repository Implementation
//!
//! Each note is replaced as a whole under the write lock, so readers never
//! observe a mix of two writes.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::{NoteId, UserId};
use tokio::sync::RwLock;

use crate::domain::entities::{Note, NoteStats};
use crate::domain::repository::{NoteFilter, NoteRepository};
use crate::error::NoteResult;

/// Note store held in process memory
#[derive(Clone, Default)]
pub struct InMemoryNoteRepository {
    notes: Arc<RwLock<HashMap<NoteId, Note>>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes across all owners
    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

impl NoteRepository for InMemoryNoteRepository {
    async fn create(&self, note: &Note) -> NoteResult<()> {
        self.notes.write().await.insert(note.note_id, note.clone());
        Ok(())
    }

    async fn find_by_id(&self, owner_id: &UserId, note_id: &NoteId) -> NoteResult<Option<Note>> {
        Ok(self
            .notes
            .read()
            .await
            .get(note_id)
            .filter(|n| &n.owner_id == owner_id)
            .cloned())
    }

    async fn list(&self, owner_id: &UserId, filter: &NoteFilter) -> NoteResult<Vec<Note>> {
        let mut notes: Vec<Note> = self
            .notes
            .read()
            .await
            .values()
            .filter(|n| &n.owner_id == owner_id && filter.matches(n))
            .cloned()
            .collect();

        notes.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        Ok(notes)
    }

    async fn update(&self, note: &Note) -> NoteResult<Option<Note>> {
        let mut notes = self.notes.write().await;

        Ok(notes
            .get_mut(&note.note_id)
            .filter(|n| n.owner_id == note.owner_id)
            .map(|stored| {
                stored.title = note.title.clone();
                stored.items = note.items.clone();
                stored.updated_at = note.updated_at;
                stored.clone()
            }))
    }

    async fn toggle_archive(
        &self,
        owner_id: &UserId,
        note_id: &NoteId,
        at: DateTime<Utc>,
    ) -> NoteResult<Option<Note>> {
        let mut notes = self.notes.write().await;

        Ok(notes
            .get_mut(note_id)
            .filter(|n| &n.owner_id == owner_id)
            .map(|note| {
                note.toggle_archive(at);
                note.clone()
            }))
    }

    async fn delete(&self, owner_id: &UserId, note_id: &NoteId) -> NoteResult<bool> {
        let mut notes = self.notes.write().await;

        if notes.get(note_id).is_some_and(|n| &n.owner_id == owner_id) {
            notes.remove(note_id);
            return Ok(true);
        }

        Ok(false)
    }

    async fn stats(&self, owner_id: &UserId) -> NoteResult<NoteStats> {
        let notes = self.notes.read().await;
        Ok(NoteStats::tally(
            notes.values().filter(|n| &n.owner_id == owner_id),
        ))
    }
}
