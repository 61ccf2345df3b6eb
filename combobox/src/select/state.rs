//! Select widget state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::task::JoinHandle;
use tuidom::{ListenerGuard, TextInputData};

use crate::loader::LoadState;
use crate::option::SelectOption;
use crate::props::SelectProps;

/// Unique identifier for a Select widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    pub(super) fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// What a clickable element of the last render does.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum HitTarget {
    /// Focus container of the select layout
    Trigger,
    /// Editable field of the search layout
    SearchInput,
    ClearAll,
    RemoveTag(SelectOption),
    /// Dropdown row with its index in the visible list
    Option(SelectOption, usize),
}

/// Internal state for a Select widget.
pub(super) struct SelectInner {
    pub props: SelectProps,
    /// Search query (search layout only)
    pub text: TextInputData,
    /// Last loaded candidate list
    pub options: Vec<SelectOption>,
    /// `None` means no filter is active
    pub filtered: Option<Vec<SelectOption>>,
    pub is_open: bool,
    pub focused: bool,
    pub load: LoadState,
    /// Incremented for every load; results from older loads are dropped
    pub generation: u64,
    pub pending: Option<JoinHandle<()>>,
    /// Highlighted row, index into the visible options
    pub highlight: Option<usize>,
    /// Clickable element id -> action, rebuilt on every render
    pub hits: HashMap<String, HitTarget>,
    /// Document listeners, present while mounted
    pub listeners: Vec<ListenerGuard>,
    pub viewport_height: Option<u16>,
    /// Id of the outermost element of the last render, after overrides
    pub rendered_root: Option<String>,
}

impl SelectInner {
    pub fn new(props: SelectProps) -> Self {
        Self {
            props,
            text: TextInputData::default(),
            options: Vec::new(),
            filtered: None,
            is_open: false,
            focused: false,
            load: LoadState::Idle,
            generation: 0,
            pending: None,
            highlight: None,
            hits: HashMap::new(),
            listeners: Vec::new(),
            viewport_height: None,
            rendered_root: None,
        }
    }

    /// Options the dropdown shows: the filtered subset if a filter is active.
    pub fn visible_options(&self) -> &[SelectOption] {
        self.filtered.as_deref().unwrap_or(&self.options)
    }

    pub fn clamp_highlight(&mut self) {
        let len = self.visible_options().len();
        self.highlight = match self.highlight {
            Some(_) if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
    }

    pub fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SelectInner {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

impl std::fmt::Debug for SelectInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectInner")
            .field("text", &self.text.text)
            .field("options", &self.options.len())
            .field("filtered", &self.filtered.as_ref().map(Vec::len))
            .field("is_open", &self.is_open)
            .field("load", &self.load)
            .field("generation", &self.generation)
            .field("highlight", &self.highlight)
            .field("mounted", &!self.listeners.is_empty())
            .finish()
    }
}
