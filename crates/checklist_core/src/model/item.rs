//! Item domain model.
//!
//! # Responsibility
//! - Define the to-do record shared by the store and the list controller.
//! - Validate user-entered titles before they become items.
//!
//! # Invariants
//! - `id` is generated once and never reused for another item.
//! - New items always start unchecked.
//! - Titles are checked for blankness at input time only; persisted titles
//!   are taken as-is on load.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a to-do item.
pub type ItemId = Uuid;

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable ID used by every store call.
    pub id: ItemId,
    /// Text label shown in the list.
    pub title: String,
    /// Completion flag rendered as a check mark.
    pub is_checked: bool,
}

impl Item {
    /// Creates an unchecked item with a freshly generated ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, false)
    }

    /// Rebuilds an item whose identity already exists, e.g. on load.
    pub fn with_id(id: ItemId, title: impl Into<String>, is_checked: bool) -> Self {
        Self {
            id,
            title: title.into(),
            is_checked,
        }
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_checked = !self.is_checked;
        self.is_checked
    }
}

/// Rejection reasons for user-entered titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Title is empty or contains only whitespace.
    BlankTitle,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "item title cannot be blank"),
        }
    }
}

impl Error for ItemValidationError {}

/// Accepts a confirmed dialog value as an item title.
///
/// Valid titles are returned exactly as typed; surrounding whitespace is kept.
///
/// # Errors
/// - `ItemValidationError::BlankTitle` for empty or whitespace-only input.
pub fn accept_title(raw: &str) -> Result<String, ItemValidationError> {
    if raw.trim().is_empty() {
        return Err(ItemValidationError::BlankTitle);
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::{accept_title, Item, ItemValidationError};

    #[test]
    fn new_item_is_unchecked_with_unique_id() {
        let first = Item::new("Buy milk");
        let second = Item::new("Buy milk");
        assert!(!first.is_checked);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn toggle_twice_restores_flag() {
        let mut item = Item::new("Call mom");
        assert!(item.toggle());
        assert!(!item.toggle());
    }

    #[test]
    fn accept_title_rejects_blank_input() {
        assert_eq!(accept_title(""), Err(ItemValidationError::BlankTitle));
        assert_eq!(accept_title(" \t\n"), Err(ItemValidationError::BlankTitle));
    }

    #[test]
    fn accept_title_keeps_surrounding_whitespace() {
        assert_eq!(accept_title("  water plants ").unwrap(), "  water plants ");
    }
}
