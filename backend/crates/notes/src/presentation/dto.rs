//! Data Transfer Objects
//!
//! Field names follow the document layout the web client expects
//! (`_id`, `userId`, `isArchived`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Note, NoteStats};
use crate::domain::validation::{NoteDraft, NotePatch};
use crate::domain::value_objects::{ItemDraft, NoteItem, NoteType};

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ItemRequest {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl From<ItemRequest> for ItemDraft {
    fn from(req: ItemRequest) -> Self {
        ItemDraft {
            text: req.text,
            completed: req.completed,
        }
    }
}

/// POST /api/notes body
#[derive(Debug, Default, Deserialize)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub note_type: Option<String>,
    pub items: Option<Vec<ItemRequest>>,
}

impl From<CreateNoteRequest> for NoteDraft {
    fn from(req: CreateNoteRequest) -> Self {
        NoteDraft {
            title: req.title,
            note_type: req.note_type,
            items: req
                .items
                .map(|items| items.into_iter().map(ItemDraft::from).collect()),
        }
    }
}

/// PUT /api/notes/{id} body
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub note_type: Option<String>,
    pub items: Option<Vec<ItemRequest>>,
}

impl From<UpdateNoteRequest> for NotePatch {
    fn from(req: UpdateNoteRequest) -> Self {
        NotePatch {
            title: req.title,
            note_type: req.note_type,
            items: req
                .items
                .map(|items| items.into_iter().map(ItemDraft::from).collect()),
        }
    }
}

/// GET /api/notes query
#[derive(Debug, Default, Deserialize)]
pub struct ListNotesQuery {
    #[serde(rename = "type")]
    pub note_type: Option<String>,
    pub archived: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub text: String,
    pub completed: bool,
}

impl From<&NoteItem> for ItemResponse {
    fn from(item: &NoteItem) -> Self {
        Self {
            text: item.text().to_string(),
            completed: item.completed(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub note_type: NoteType,
    pub items: Vec<ItemResponse>,
    pub user_id: String,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Note> for NoteResponse {
    fn from(note: &Note) -> Self {
        Self {
            id: note.note_id.to_string(),
            title: note.title.as_str().to_string(),
            note_type: note.note_type(),
            items: note.items.iter().map(ItemResponse::from).collect(),
            user_id: note.owner_id.to_string(),
            is_archived: note.is_archived,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_notes: u64,
    pub bullet_notes: u64,
    pub checklist_notes: u64,
    pub archived_notes: u64,
}

impl From<NoteStats> for StatsResponse {
    fn from(stats: NoteStats) -> Self {
        Self {
            total_notes: stats.total_notes,
            bullet_notes: stats.bullet_notes,
            checklist_notes: stats.checklist_notes,
            archived_notes: stats.archived_notes,
        }
    }
}

/// `{ data }` payload
#[derive(Debug, Serialize)]
pub struct DataPayload<T: Serialize> {
    pub data: T,
}

/// `{ count, data }` payload of the listing
#[derive(Debug, Serialize)]
pub struct ListPayload {
    pub count: usize,
    pub data: Vec<NoteResponse>,
}
