//! Modal title dialog as a synchronous request/response.
//!
//! # Responsibility
//! - Describe what the add/edit dialog shows.
//! - Let front ends resolve a dialog to confirmed text or cancellation.
//!
//! # Invariants
//! - A request is resolved exactly once, before the caller continues.

/// Placeholder shown in the dialog's single text field.
pub const TITLE_PLACEHOLDER: &str = "What are you planning to do?";

/// Content of one title dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Dialog heading.
    pub heading: &'static str,
    /// Label of the single confirm action.
    pub confirm_label: &'static str,
    /// Hint shown while the field is empty.
    pub placeholder: &'static str,
    /// Text the field starts with.
    pub prefill: Option<String>,
}

impl PromptRequest {
    /// Dialog for a new item; the field starts empty.
    pub fn add_item() -> Self {
        Self {
            heading: "Add New Item",
            confirm_label: "Add Item",
            placeholder: TITLE_PLACEHOLDER,
            prefill: None,
        }
    }

    /// Dialog for renaming an item; the field starts with `current_title`.
    pub fn edit_item(current_title: &str) -> Self {
        Self {
            heading: "Edit Item",
            confirm_label: "Edit Item",
            placeholder: TITLE_PLACEHOLDER,
            prefill: Some(current_title.to_string()),
        }
    }
}

/// How a dialog was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// Confirm pressed; carries the raw field text.
    Confirmed(String),
    /// Dialog dismissed without confirming.
    Cancelled,
}

/// Front-end hook that presents a title dialog and blocks for the answer.
pub trait TitlePrompt {
    fn request(&mut self, request: &PromptRequest) -> PromptResponse;
}

impl<F> TitlePrompt for F
where
    F: FnMut(&PromptRequest) -> PromptResponse,
{
    fn request(&mut self, request: &PromptRequest) -> PromptResponse {
        self(request)
    }
}
