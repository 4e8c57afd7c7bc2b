//! Domain Layer
//!
//! Contains entities, value objects, validation, and repository traits.

pub mod entities;
pub mod repository;
pub mod validation;
pub mod value_objects;

// Re-exports
pub use entities::{Note, NoteStats};
pub use repository::{NoteFilter, NoteRepository};
pub use validation::{NoteDraft, NotePatch, ValidNote, ValidPatch};
pub use value_objects::{ItemDraft, NoteItem, NoteItems, NoteTitle, NoteType};
