//! Infrastructure Layer
//!
//! Note store implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryNoteRepository;
pub use postgres::PgNoteRepository;
