//! Notes Router

use auth::{AccessGate, AuthConfig, PgAuthRepository, UserRepository};
use axum::{
    Router,
    routing::{get, patch},
};
use std::sync::Arc;

use crate::domain::repository::NoteRepository;
use crate::infra::postgres::PgNoteRepository;
use crate::presentation::handlers::{self, NotesAppState};

/// Create the Notes router with PostgreSQL repositories
pub fn notes_router(
    notes: PgNoteRepository,
    users: PgAuthRepository,
    config: Arc<AuthConfig>,
) -> Router {
    notes_router_generic(notes, users, config)
}

/// Create a generic Notes router for any repository implementations
pub fn notes_router_generic<N, U>(notes: N, users: U, config: Arc<AuthConfig>) -> Router
where
    N: NoteRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = NotesAppState {
        notes: Arc::new(notes),
        gate: AccessGate::new(Arc::new(users), config),
    };

    // `/stats` is a static segment and takes precedence over `/{id}`
    Router::new()
        .route(
            "/",
            get(handlers::list_notes::<N, U>).post(handlers::create_note::<N, U>),
        )
        .route("/stats", get(handlers::note_stats::<N, U>))
        .route(
            "/{id}",
            get(handlers::get_note::<N, U>)
                .put(handlers::update_note::<N, U>)
                .delete(handlers::delete_note::<N, U>),
        )
        .route("/{id}/archive", patch(handlers::toggle_archive::<N, U>))
        .with_state(state)
}
