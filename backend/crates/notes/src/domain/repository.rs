//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Every method is scoped to an owner: a note owned by someone else is
//! reported exactly as a missing one.

use chrono::{DateTime, Utc};
use kernel::id::{NoteId, UserId};

use crate::domain::entities::{Note, NoteStats};
use crate::domain::value_objects::NoteType;
use crate::error::NoteResult;

/// Listing filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Restrict to one note type
    pub note_type: Option<NoteType>,
    /// Exact match on the archived flag
    pub archived: bool,
}

impl NoteFilter {
    /// Interpret raw query parameters
    ///
    /// Only `"true"` selects archived notes. An unknown type is ignored.
    pub fn from_query(note_type: Option<&str>, archived: Option<&str>) -> Self {
        Self {
            note_type: note_type.and_then(|t| t.parse().ok()),
            archived: archived == Some("true"),
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        note.is_archived == self.archived
            && self.note_type.is_none_or(|t| t == note.note_type())
    }
}

/// Note store
#[trait_variant::make(NoteRepository: Send)]
pub trait LocalNoteRepository {
    /// Insert a new note
    async fn create(&self, note: &Note) -> NoteResult<()>;

    /// Find a note owned by `owner_id`
    async fn find_by_id(&self, owner_id: &UserId, note_id: &NoteId) -> NoteResult<Option<Note>>;

    /// List an owner's notes, most recently updated first
    async fn list(&self, owner_id: &UserId, filter: &NoteFilter) -> NoteResult<Vec<Note>>;

    /// Write title, items and updated_at of a stored note, leaving the
    /// archived flag alone. Returns the stored note, or `None` if it no
    /// longer exists.
    async fn update(&self, note: &Note) -> NoteResult<Option<Note>>;

    /// Flip the archived flag in place and return the new state
    async fn toggle_archive(
        &self,
        owner_id: &UserId,
        note_id: &NoteId,
        at: DateTime<Utc>,
    ) -> NoteResult<Option<Note>>;

    /// Hard delete. Returns false if nothing was deleted.
    async fn delete(&self, owner_id: &UserId, note_id: &NoteId) -> NoteResult<bool>;

    /// Aggregate counts for an owner
    async fn stats(&self, owner_id: &UserId) -> NoteResult<NoteStats>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_query() {
        assert_eq!(NoteFilter::from_query(None, None), NoteFilter::default());
        assert_eq!(
            NoteFilter::from_query(Some("checklist"), Some("true")),
            NoteFilter {
                note_type: Some(NoteType::Checklist),
                archived: true,
            }
        );
        assert_eq!(
            NoteFilter::from_query(Some("todo"), Some("TRUE")),
            NoteFilter::default()
        );
        assert!(!NoteFilter::from_query(None, Some("1")).archived);
    }
}
