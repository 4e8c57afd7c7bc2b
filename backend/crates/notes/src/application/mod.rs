//! Application Layer
//!
//! One use case per note operation. Every use case takes the caller's
//! `UserId` as resolved by the access gate.

pub mod create_note;
pub mod delete_note;
pub mod get_note;
pub mod list_notes;
pub mod note_stats;
pub mod toggle_archive;
pub mod update_note;

// Re-exports
pub use create_note::CreateNoteUseCase;
pub use delete_note::DeleteNoteUseCase;
pub use get_note::GetNoteUseCase;
pub use list_notes::ListNotesUseCase;
pub use note_stats::NoteStatsUseCase;
pub use toggle_archive::ToggleArchiveUseCase;
pub use update_note::UpdateNoteUseCase;
