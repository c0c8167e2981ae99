//! List controller: in-memory item list plus the row-tap mode machine.
//!
//! # Responsibility
//! - Load the store once and mirror every later mutation to it.
//! - Decide what a row tap does from the current `Mode`.
//! - Derive which toolbar controls are enabled.
//!
//! # Invariants
//! - Exactly one mode is active; `Normal` at start.
//! - Store failures are logged and swallowed; only updates revert the
//!   in-memory value.
//! - Blank or cancelled dialogs issue no store call and mutate nothing.
//! - Confirming an edit with the current title issues no store call.
//! - A tap in `Delete` mode never opens a dialog.

use crate::model::item::{accept_title, Item, ItemId};
use crate::prompt::{PromptRequest, PromptResponse, TitlePrompt};
use crate::repo::item_repo::ItemStore;
use log::{debug, error, info};

/// What a row tap does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Tap toggles completion.
    #[default]
    Normal,
    /// Tap opens the rename dialog.
    Edit,
    /// Tap deletes the row.
    Delete,
}

impl Mode {
    /// Stable lowercase name used in log lines and the toolbar.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

/// Enablement of the three toolbar controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub add_enabled: bool,
    pub edit_enabled: bool,
    pub delete_enabled: bool,
}

impl ControlState {
    fn for_mode(mode: Mode) -> Self {
        Self {
            add_enabled: mode == Mode::Normal,
            edit_enabled: mode != Mode::Delete,
            delete_enabled: mode != Mode::Edit,
        }
    }
}

/// Result of the add action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Item appended; the store insert may still have failed (logged).
    Added(ItemId),
    /// Dialog cancelled or title blank.
    Discarded,
    /// Add control is disabled in the current mode; no dialog shown.
    Disabled,
}

/// Result of a row tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// Completion flag flipped and persisted.
    Toggled { is_checked: bool },
    /// Title replaced and persisted.
    Edited,
    /// Row removed from the list; the store delete may have failed (logged).
    Deleted(Item),
    /// Dialog cancelled or title blank.
    Discarded,
    /// Edit confirmed with the current title; nothing to persist.
    Unchanged,
    /// Store update failed; in-memory value restored.
    Reverted,
    /// Index is outside the list.
    NoSuchRow,
}

/// In-memory mirror of the store driving the list screen.
pub struct ListController<S: ItemStore> {
    store: S,
    items: Vec<Item>,
    mode: Mode,
}

impl<S: ItemStore> ListController<S> {
    /// Loads every persisted item and starts in `Normal` mode.
    ///
    /// A failed fetch is logged and yields an empty list; stored rows stay
    /// on disk untouched.
    pub fn load(store: S) -> Self {
        let items = match store.fetch_all() {
            Ok(items) => {
                info!(
                    "event=items_load module=list status=ok count={}",
                    items.len()
                );
                items
            }
            Err(err) => {
                error!(
                    "event=items_load module=list status=error error={}",
                    err
                );
                Vec::new()
            }
        };

        Self {
            store,
            items,
            mode: Mode::Normal,
        }
    }

    /// Items in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn controls(&self) -> ControlState {
        ControlState::for_mode(self.mode)
    }

    /// Toggles edit mode; entering it clears delete mode.
    pub fn toggle_edit_mode(&mut self) -> Mode {
        let next = if self.mode == Mode::Edit {
            Mode::Normal
        } else {
            Mode::Edit
        };
        self.set_mode(next)
    }

    /// Toggles delete mode; entering it clears edit mode.
    pub fn toggle_delete_mode(&mut self) -> Mode {
        let next = if self.mode == Mode::Delete {
            Mode::Normal
        } else {
            Mode::Delete
        };
        self.set_mode(next)
    }

    fn set_mode(&mut self, next: Mode) -> Mode {
        debug!(
            "event=mode_change module=list status=ok from={} to={}",
            self.mode.as_str(),
            next.as_str()
        );
        self.mode = next;
        next
    }

    /// Runs the add dialog and appends a new unchecked item on confirmation.
    pub fn add(&mut self, prompt: &mut impl TitlePrompt) -> AddOutcome {
        if !self.controls().add_enabled {
            return AddOutcome::Disabled;
        }

        let Some(title) = confirmed_title(prompt, &PromptRequest::add_item()) else {
            return AddOutcome::Discarded;
        };

        let item = Item::new(title);
        let id = item.id;
        self.items.push(item);
        let item = &self.items[self.items.len() - 1];

        match self.store.insert(item) {
            Ok(()) => info!("event=item_insert module=list status=ok item_id={}", id),
            Err(err) => error!(
                "event=item_insert module=list status=error item_id={} error={}",
                id, err
            ),
        }

        AddOutcome::Added(id)
    }

    /// Applies the current mode's action to the row at `index`.
    pub fn tap_row(&mut self, index: usize, prompt: &mut impl TitlePrompt) -> TapOutcome {
        if index >= self.items.len() {
            return TapOutcome::NoSuchRow;
        }

        match self.mode {
            Mode::Normal => self.toggle_row(index),
            Mode::Edit => self.edit_row(index, prompt),
            Mode::Delete => self.delete_row(index),
        }
    }

    fn toggle_row(&mut self, index: usize) -> TapOutcome {
        let is_checked = self.items[index].toggle();
        if self.persist_update(index) {
            TapOutcome::Toggled { is_checked }
        } else {
            self.items[index].is_checked = !is_checked;
            TapOutcome::Reverted
        }
    }

    fn edit_row(&mut self, index: usize, prompt: &mut impl TitlePrompt) -> TapOutcome {
        let request = PromptRequest::edit_item(&self.items[index].title);
        let Some(title) = confirmed_title(prompt, &request) else {
            return TapOutcome::Discarded;
        };
        if title == self.items[index].title {
            return TapOutcome::Unchanged;
        }

        let previous = std::mem::replace(&mut self.items[index].title, title);
        if self.persist_update(index) {
            TapOutcome::Edited
        } else {
            self.items[index].title = previous;
            TapOutcome::Reverted
        }
    }

    fn delete_row(&mut self, index: usize) -> TapOutcome {
        let item = &self.items[index];
        match self.store.delete(item) {
            Ok(()) => info!(
                "event=item_delete module=list status=ok item_id={}",
                item.id
            ),
            Err(err) => error!(
                "event=item_delete module=list status=error item_id={} error={}",
                item.id, err
            ),
        }

        TapOutcome::Deleted(self.items.remove(index))
    }

    fn persist_update(&self, index: usize) -> bool {
        let item = &self.items[index];
        match self.store.update(item) {
            Ok(()) => {
                info!(
                    "event=item_update module=list status=ok item_id={}",
                    item.id
                );
                true
            }
            Err(err) => {
                error!(
                    "event=item_update module=list status=error item_id={} error={}",
                    item.id, err
                );
                false
            }
        }
    }
}

fn confirmed_title(prompt: &mut impl TitlePrompt, request: &PromptRequest) -> Option<String> {
    match prompt.request(request) {
        PromptResponse::Confirmed(raw) => match accept_title(&raw) {
            Ok(title) => Some(title),
            Err(err) => {
                debug!(
                    "event=title_rejected module=list status=ok dialog={} reason={}",
                    request.heading, err
                );
                None
            }
        },
        PromptResponse::Cancelled => None,
    }
}
