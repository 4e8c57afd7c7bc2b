//! PostgreSQL Repository Implementation
//!
//! Items live in a JSONB column so a note is written as one row.

use chrono::{DateTime, Utc};
use kernel::id::{NoteId, UserId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entities::{Note, NoteStats};
use crate::domain::repository::{NoteFilter, NoteRepository};
use crate::domain::value_objects::{NoteItem, NoteItems, NoteTitle, NoteType};
use crate::error::{NoteError, NoteResult};

/// PostgreSQL-backed note store
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl NoteRepository for PgNoteRepository {
    async fn create(&self, note: &Note) -> NoteResult<()> {
        sqlx::query(
            r#"
            INSERT INTO notes (
                note_id,
                owner_id,
                title,
                note_type,
                items,
                is_archived,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(note.note_id.as_uuid())
        .bind(note.owner_id.as_uuid())
        .bind(note.title.as_str())
        .bind(note.note_type().as_str())
        .bind(Json(&note.items))
        .bind(note.is_archived)
        .bind(note.created_at)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, owner_id: &UserId, note_id: &NoteId) -> NoteResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT
                note_id,
                owner_id,
                title,
                note_type,
                items,
                is_archived,
                created_at,
                updated_at
            FROM notes
            WHERE note_id = $1 AND owner_id = $2
            "#,
        )
        .bind(note_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_note()).transpose()
    }

    async fn list(&self, owner_id: &UserId, filter: &NoteFilter) -> NoteResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(
            r#"
            SELECT
                note_id,
                owner_id,
                title,
                note_type,
                items,
                is_archived,
                created_at,
                updated_at
            FROM notes
            WHERE owner_id = $1
              AND is_archived = $2
              AND ($3::TEXT IS NULL OR note_type = $3)
            ORDER BY updated_at DESC, created_at DESC
            "#,
        )
        .bind(owner_id.as_uuid())
        .bind(filter.archived)
        .bind(filter.note_type.map(|t| t.as_str()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_note()).collect()
    }

    async fn update(&self, note: &Note) -> NoteResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            UPDATE notes SET
                title = $3,
                items = $4,
                updated_at = $5
            WHERE note_id = $1 AND owner_id = $2
            RETURNING
                note_id,
                owner_id,
                title,
                note_type,
                items,
                is_archived,
                created_at,
                updated_at
            "#,
        )
        .bind(note.note_id.as_uuid())
        .bind(note.owner_id.as_uuid())
        .bind(note.title.as_str())
        .bind(Json(&note.items))
        .bind(note.updated_at)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_note()).transpose()
    }

    async fn toggle_archive(
        &self,
        owner_id: &UserId,
        note_id: &NoteId,
        at: DateTime<Utc>,
    ) -> NoteResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            UPDATE notes SET
                is_archived = NOT is_archived,
                updated_at = $3
            WHERE note_id = $1 AND owner_id = $2
            RETURNING
                note_id,
                owner_id,
                title,
                note_type,
                items,
                is_archived,
                created_at,
                updated_at
            "#,
        )
        .bind(note_id.as_uuid())
        .bind(owner_id.as_uuid())
        .bind(at)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_note()).transpose()
    }

    async fn delete(&self, owner_id: &UserId, note_id: &NoteId) -> NoteResult<bool> {
        let affected = sqlx::query("DELETE FROM notes WHERE note_id = $1 AND owner_id = $2")
            .bind(note_id.as_uuid())
            .bind(owner_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }

    async fn stats(&self, owner_id: &UserId) -> NoteResult<NoteStats> {
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                COUNT(*) AS total_notes,
                COUNT(*) FILTER (WHERE note_type = 'bullet') AS bullet_notes,
                COUNT(*) FILTER (WHERE note_type = 'checklist') AS checklist_notes,
                COUNT(*) FILTER (WHERE is_archived) AS archived_notes
            FROM notes
            WHERE owner_id = $1
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_stats())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct NoteRow {
    note_id: Uuid,
    owner_id: Uuid,
    title: String,
    note_type: String,
    items: Json<Vec<NoteItem>>,
    is_archived: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl NoteRow {
    fn into_note(self) -> NoteResult<Note> {
        let note_type: NoteType = self
            .note_type
            .parse()
            .map_err(|_| NoteError::Internal(format!("Invalid note_type: {}", self.note_type)))?;

        Ok(Note::from_db(
            NoteId::from_uuid(self.note_id),
            UserId::from_uuid(self.owner_id),
            NoteTitle::from_db(self.title),
            note_type,
            NoteItems::from_db(self.items.0),
            self.is_archived,
            self.created_at,
            self.updated_at,
        ))
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    total_notes: i64,
    bullet_notes: i64,
    checklist_notes: i64,
    archived_notes: i64,
}

impl StatsRow {
    fn into_stats(self) -> NoteStats {
        NoteStats {
            total_notes: self.total_notes.max(0) as u64,
            bullet_notes: self.bullet_notes.max(0) as u64,
            checklist_notes: self.checklist_notes.max(0) as u64,
            archived_notes: self.archived_notes.max(0) as u64,
        }
    }
}
