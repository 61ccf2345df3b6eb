//! Outbound notifications and event results.

use serde::Serialize;
use tuidom::Event;

use crate::option::SelectOption;

/// Kind of selection change proposed to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Select,
    Unselect,
}

/// A proposed selection change.
///
/// `selected_options` is the complete next selection; the owner applies it
/// back with [`Select::set_selected_options`](crate::Select::set_selected_options)
/// for it to take effect.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// The event that triggered the change, if it came from user input.
    pub event: Option<Event>,
    pub kind: ChangeType,
    /// The option that was toggled. `None` for clear-all.
    pub option: Option<SelectOption>,
    pub selected_options: Vec<SelectOption>,
}

/// The search field text changed.
#[derive(Debug, Clone)]
pub struct TextInputEvent {
    pub event: Option<Event>,
    pub value: String,
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed: default behaviour suppressed, propagation stopped.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
