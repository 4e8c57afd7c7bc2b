//! Entities

use chrono::{DateTime, Utc};
use kernel::id::{NoteId, UserId};

use crate::domain::validation::{ValidNote, ValidPatch};
use crate::domain::value_objects::{NoteItems, NoteTitle, NoteType};

/// Note entity
#[derive(Debug, Clone)]
pub struct Note {
    pub note_id: NoteId,
    /// Owner; immutable
    pub owner_id: UserId,
    pub title: NoteTitle,
    note_type: NoteType,
    pub items: NoteItems,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new, unarchived note
    pub fn new(owner_id: UserId, valid: ValidNote) -> Self {
        let now = Utc::now();

        Self {
            note_id: NoteId::new(),
            owner_id,
            title: valid.title,
            note_type: valid.note_type,
            items: valid.items,
            is_archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild from storage
    #[allow(clippy::too_many_arguments)]
    pub fn from_db(
        note_id: NoteId,
        owner_id: UserId,
        title: NoteTitle,
        note_type: NoteType,
        items: NoteItems,
        is_archived: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            note_id,
            owner_id,
            title,
            note_type,
            items,
            is_archived,
            created_at,
            updated_at,
        }
    }

    pub fn note_type(&self) -> NoteType {
        self.note_type
    }

    /// Apply a validated patch. Returns whether anything was written.
    ///
    /// Items are replaced wholesale.
    pub fn apply(&mut self, patch: ValidPatch) -> bool {
        if patch.is_empty() {
            return false;
        }

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        self.updated_at = Utc::now();
        true
    }

    /// Flip the archived flag
    pub fn toggle_archive(&mut self, at: DateTime<Utc>) {
        self.is_archived = !self.is_archived;
        self.updated_at = at;
    }
}

/// Per-user aggregate counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteStats {
    pub total_notes: u64,
    pub bullet_notes: u64,
    pub checklist_notes: u64,
    pub archived_notes: u64,
}

impl NoteStats {
    /// Single pass over a set of notes
    pub fn tally<'a>(notes: impl IntoIterator<Item = &'a Note>) -> Self {
        notes.into_iter().fold(Self::default(), |mut stats, note| {
            stats.total_notes += 1;
            match note.note_type() {
                NoteType::Bullet => stats.bullet_notes += 1,
                NoteType::Checklist => stats.checklist_notes += 1,
            }
            if note.is_archived {
                stats.archived_notes += 1;
            }
            stats
        })
    }
}
