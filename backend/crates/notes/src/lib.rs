//! Notes Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Note entity, value objects, validation, repository traits
//! - `application/` - One use case per note operation
//! - `infra/` - PostgreSQL (items as JSONB) and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership Model
//! - Every operation is scoped to the authenticated caller
//! - Notes owned by someone else are indistinguishable from missing ones (404)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::repository::NoteRepository;
pub use error::{NoteError, NoteResult};
pub use infra::memory::InMemoryNoteRepository;
pub use infra::postgres::PgNoteRepository;
pub use presentation::router::{notes_router, notes_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
