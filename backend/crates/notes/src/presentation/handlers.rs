//! HTTP Handlers
//!
//! Each handler runs the access gate first and passes the resolved caller
//! into the use case.

use auth::{AccessGate, UserRepository};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use kernel::extract::ApiJson;
use kernel::id::{NoteId, UserId};
use kernel::response::{ApiResponse, NoPayload};
use std::sync::Arc;

use crate::application::{
    CreateNoteUseCase, DeleteNoteUseCase, GetNoteUseCase, ListNotesUseCase, NoteStatsUseCase,
    ToggleArchiveUseCase, UpdateNoteUseCase,
};
use crate::domain::repository::{NoteFilter, NoteRepository};
use crate::error::{NoteError, NoteResult};
use crate::presentation::dto::{
    CreateNoteRequest, DataPayload, ListNotesQuery, ListPayload, NoteResponse, StatsResponse,
    UpdateNoteRequest,
};

/// Shared state for note handlers
#[derive(Clone)]
pub struct NotesAppState<N, U>
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    pub notes: Arc<N>,
    pub gate: AccessGate<U>,
}

impl<N, U> NotesAppState<N, U>
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    async fn caller(&self, headers: &HeaderMap) -> NoteResult<UserId> {
        let caller = self.gate.authenticate_headers(headers).await?;
        Ok(caller.user_id)
    }
}

fn parse_note_id(raw: &str) -> NoteResult<NoteId> {
    raw.parse().map_err(|_| NoteError::InvalidNoteId)
}

type NoteData = ApiResponse<DataPayload<NoteResponse>>;

fn note_data(note: &crate::domain::entities::Note) -> NoteData {
    ApiResponse::ok(DataPayload {
        data: NoteResponse::from(note),
    })
}

// ============================================================================
// Queries
// ============================================================================

/// GET /api/notes?type=&archived=
pub async fn list_notes<N, U>(
    State(state): State<NotesAppState<N, U>>,
    headers: HeaderMap,
    Query(query): Query<ListNotesQuery>,
) -> NoteResult<ApiResponse<ListPayload>>
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let owner_id = state.caller(&headers).await?;

    let filter = NoteFilter::from_query(query.note_type.as_deref(), query.archived.as_deref());
    let notes = ListNotesUseCase::new(state.notes.clone())
        .execute(&owner_id, filter)
        .await?;

    let data: Vec<NoteResponse> = notes.iter().map(NoteResponse::from).collect();

    Ok(ApiResponse::ok(ListPayload {
        count: data.len(),
        data,
    }))
}

/// GET /api/notes/stats
pub async fn note_stats<N, U>(
    State(state): State<NotesAppState<N, U>>,
    headers: HeaderMap,
) -> NoteResult<ApiResponse<DataPayload<StatsResponse>>>
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let owner_id = state.caller(&headers).await?;

    let stats = NoteStatsUseCase::new(state.notes.clone())
        .execute(&owner_id)
        .await?;

    Ok(ApiResponse::ok(DataPayload {
        data: StatsResponse::from(stats),
    }))
}

/// GET /api/notes/{id}
pub async fn get_note<N, U>(
    State(state): State<NotesAppState<N, U>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> NoteResult<NoteData>
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let owner_id = state.caller(&headers).await?;
    let note_id = parse_note_id(&id)?;

    let note = GetNoteUseCase::new(state.notes.clone())
        .execute(&owner_id, &note_id)
        .await?;

    Ok(note_data(&note))
}

// ============================================================================
// Commands
// ============================================================================

/// POST /api/notes
pub async fn create_note<N, U>(
    State(state): State<NotesAppState<N, U>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<CreateNoteRequest>,
) -> NoteResult<(StatusCode, NoteData)>
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let owner_id = state.caller(&headers).await?;

    let note = CreateNoteUseCase::new(state.notes.clone())
        .execute(&owner_id, req.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        note_data(&note).with_message("Note created successfully"),
    ))
}

/// PUT /api/notes/{id}
pub async fn update_note<N, U>(
    State(state): State<NotesAppState<N, U>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateNoteRequest>,
) -> NoteResult<NoteData>
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let owner_id = state.caller(&headers).await?;
    let note_id = parse_note_id(&id)?;

    let note = UpdateNoteUseCase::new(state.notes.clone())
        .execute(&owner_id, &note_id, req.into())
        .await?;

    Ok(note_data(&note).with_message("Note updated successfully"))
}

/// DELETE /api/notes/{id}
pub async fn delete_note<N, U>(
    State(state): State<NotesAppState<N, U>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> NoteResult<ApiResponse<NoPayload>>
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let owner_id = state.caller(&headers).await?;
    let note_id = parse_note_id(&id)?;

    DeleteNoteUseCase::new(state.notes.clone())
        .execute(&owner_id, &note_id)
        .await?;

    Ok(ApiResponse::message_only("Note deleted successfully"))
}

/// PATCH /api/notes/{id}/archive
pub async fn toggle_archive<N, U>(
    State(state): State<NotesAppState<N, U>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> NoteResult<NoteData>
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let owner_id = state.caller(&headers).await?;
    let note_id = parse_note_id(&id)?;

    let note = ToggleArchiveUseCase::new(state.notes.clone())
        .execute(&owner_id, &note_id)
        .await?;

    let message = if note.is_archived {
        "Note archived successfully"
    } else {
        "Note unarchived successfully"
    };

    Ok(note_data(&note).with_message(message))
}
