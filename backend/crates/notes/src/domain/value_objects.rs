//! Value Objects
//!
//! Note title, note type and the item list. Each type enforces its own
//! length and shape rules at construction; a value that exists is valid.

use std::str::FromStr;

use derive_more::Display;
use kernel::error::field::FieldError;
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

pub const TITLE_MAX_LENGTH: usize = 200;
pub const ITEM_TEXT_MAX_LENGTH: usize = 1000;

pub(crate) const TITLE_MESSAGE: &str = "Title must be between 1 and 200 characters";
pub(crate) const TYPE_MESSAGE: &str = "Type must be either 'bullet' or 'checklist'";
pub(crate) const ITEMS_MESSAGE: &str = "Items must be an array with at least one item";
pub(crate) const ITEM_TEXT_MESSAGE: &str = "Item text must be between 1 and 1000 characters";

// ============================================================================
// Note Type
// ============================================================================

/// Kind of note, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteType {
    /// Free-form list; items carry no completion state
    #[display("bullet")]
    Bullet,
    /// To-do list; items can be ticked off
    #[display("checklist")]
    Checklist,
}

impl NoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteType::Bullet => "bullet",
            NoteType::Checklist => "checklist",
        }
    }

    /// Whether items of this type keep their completed flag
    pub fn tracks_completion(&self) -> bool {
        matches!(self, NoteType::Checklist)
    }
}

impl FromStr for NoteType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bullet" => Ok(NoteType::Bullet),
            "checklist" => Ok(NoteType::Checklist),
            _ => Err(FieldError::new("type", TYPE_MESSAGE)),
        }
    }
}

// ============================================================================
// Note Title
// ============================================================================

/// Trimmed title, 1-200 characters
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize, Deserialize)]
pub struct NoteTitle(String);

impl NoteTitle {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, FieldError> {
        let title = raw.as_ref().trim();
        let len = title.chars().count();

        if len == 0 || len > TITLE_MAX_LENGTH {
            return Err(FieldError::new("title", TITLE_MESSAGE));
        }

        Ok(Self(title.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Items
// ============================================================================

/// Item as submitted by a client, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl ItemDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: None,
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Item whose text passed validation but whose completed flag has not yet
/// been resolved against a note type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedItem {
    text: String,
    completed: Option<bool>,
}

impl CheckedItem {
    /// Validate the text of the item at `index`
    pub fn new(index: usize, draft: ItemDraft) -> Result<Self, FieldError> {
        let text = draft.text.as_deref().map(str::trim).unwrap_or_default();
        let len = text.chars().count();

        if len == 0 || len > ITEM_TEXT_MAX_LENGTH {
            return Err(FieldError::new(
                format!("items[{}].text", index),
                ITEM_TEXT_MESSAGE,
            ));
        }

        Ok(Self {
            text: text.to_string(),
            completed: draft.completed,
        })
    }
}

/// One line of a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteItem {
    text: String,
    completed: bool,
}

impl NoteItem {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}

/// Ordered, non-empty item list of a note
///
/// Bullet notes never carry a completed item; checklist items default to
/// not completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteItems(Vec<NoteItem>);

impl NoteItems {
    /// Resolve completed flags for `note_type`. `None` if `checked` is empty.
    pub fn normalize(note_type: NoteType, checked: Vec<CheckedItem>) -> Option<Self> {
        if checked.is_empty() {
            return None;
        }

        let items = checked
            .into_iter()
            .map(|item| NoteItem {
                text: item.text,
                completed: note_type.tracks_completion() && item.completed.unwrap_or(false),
            })
            .collect();

        Some(Self(items))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(items: Vec<NoteItem>) -> Self {
        Self(items)
    }

    pub fn as_slice(&self) -> &[NoteItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NoteItem> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a NoteItems {
    type Item = &'a NoteItem;
    type IntoIter = std::slice::Iter<'a, NoteItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
