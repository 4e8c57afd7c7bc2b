//! Note Validation
//!
//! Pure functions turning client drafts into valid domain values. Every
//! offending field is reported; nothing short-circuits on the first error.

use kernel::error::field::FieldError;

use crate::domain::value_objects::{
    CheckedItem, ITEMS_MESSAGE, ItemDraft, NoteItems, NoteTitle, NoteType,
};

/// Note as submitted for creation
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub note_type: Option<String>,
    pub items: Option<Vec<ItemDraft>>,
}

/// Partial update as submitted
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub note_type: Option<String>,
    pub items: Option<Vec<ItemDraft>>,
}

/// Validated creation input
#[derive(Debug, Clone)]
pub struct ValidNote {
    pub title: NoteTitle,
    pub note_type: NoteType,
    pub items: NoteItems,
}

/// Validated update; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ValidPatch {
    pub title: Option<NoteTitle>,
    pub items: Option<NoteItems>,
}

impl ValidPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.items.is_none()
    }
}

/// Validate a new note
pub fn validate_new_note(draft: NoteDraft) -> Result<ValidNote, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = NoteTitle::new(draft.title.unwrap_or_default())
        .map_err(|e| errors.push(e))
        .ok();

    let note_type = draft
        .note_type
        .unwrap_or_default()
        .parse::<NoteType>()
        .map_err(|e| errors.push(e))
        .ok();

    let checked = check_items(draft.items, &mut errors);

    match (title, note_type, checked) {
        (Some(title), Some(note_type), Some(checked)) if errors.is_empty() => {
            match NoteItems::normalize(note_type, checked) {
                Some(items) => Ok(ValidNote {
                    title,
                    note_type,
                    items,
                }),
                None => Err(vec![FieldError::new("items", ITEMS_MESSAGE)]),
            }
        }
        _ => Err(errors),
    }
}

/// Validate an update against the stored note type
pub fn validate_patch(patch: NotePatch, stored_type: NoteType) -> Result<ValidPatch, Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Some(raw) = patch.note_type {
        match raw.parse::<NoteType>() {
            Ok(t) if t == stored_type => {}
            Ok(_) => errors.push(FieldError::new("type", "type is immutable")),
            Err(e) => errors.push(e),
        }
    }

    let title = patch
        .title
        .map(NoteTitle::new)
        .transpose()
        .map_err(|e| errors.push(e))
        .ok()
        .flatten();

    let items = match patch.items {
        Some(drafts) => check_items(Some(drafts), &mut errors)
            .and_then(|checked| NoteItems::normalize(stored_type, checked)),
        None => None,
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidPatch { title, items })
}

/// Check that items are present and each text is valid
fn check_items(
    items: Option<Vec<ItemDraft>>,
    errors: &mut Vec<FieldError>,
) -> Option<Vec<CheckedItem>> {
    let drafts = match items {
        Some(drafts) if !drafts.is_empty() => drafts,
        _ => {
            errors.push(FieldError::new("items", ITEMS_MESSAGE));
            return None;
        }
    };

    let before = errors.len();
    let checked: Vec<CheckedItem> = drafts
        .into_iter()
        .enumerate()
        .filter_map(|(index, draft)| CheckedItem::new(index, draft).map_err(|e| errors.push(e)).ok())
        .collect();

    (errors.len() == before).then_some(checked)
}
