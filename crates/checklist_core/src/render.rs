//! Text rendering of the list screen.
//!
//! The whole screen is rebuilt from the in-memory list on every call.

use crate::model::item::Item;
use crate::service::list_controller::{ControlState, Mode};
use std::fmt::Write;

const EMPTY_LIST_HINT: &str = "  (no items yet, use `add` to create one)";

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub title: String,
    pub checked: bool,
}

impl RowView {
    fn marker(&self) -> &'static str {
        if self.checked {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

pub fn render_rows(items: &[Item]) -> Vec<RowView> {
    items
        .iter()
        .map(|item| RowView {
            title: item.title.clone(),
            checked: item.is_checked,
        })
        .collect()
}

/// Renders toolbar and rows; rows are numbered from 1.
pub fn render_screen(items: &[Item], controls: ControlState, mode: Mode) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}  {}  {}   mode: {}",
        control_label("add", controls.add_enabled, false),
        control_label("edit", controls.edit_enabled, mode == Mode::Edit),
        control_label("delete", controls.delete_enabled, mode == Mode::Delete),
        mode.as_str()
    );

    let rows = render_rows(items);
    if rows.is_empty() {
        let _ = writeln!(out, "{EMPTY_LIST_HINT}");
        return out;
    }

    for (position, row) in rows.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {} {}", position + 1, row.marker(), row.title);
    }
    out
}

fn control_label(name: &str, enabled: bool, active: bool) -> String {
    match (enabled, active) {
        (_, true) => format!("[{name}*]"),
        (true, false) => format!("[{name}]"),
        (false, false) => format!("({name})"),
    }
}
