//! The Select widget: a text field or display surface paired with a
//! dropdown of options.
//!
//! `Select` is a controlled component. The owner keeps the selection and
//! applies every [`ChangeEvent`](crate::ChangeEvent) it accepts back with
//! [`Select::set_selected_options`]. The widget itself only keeps transient
//! UI state: the query, the loaded candidates, the filtered subset and
//! whether the dropdown is open.
//!
//! # Example
//!
//! ```ignore
//! let doc = Document::with_viewport(80, 24);
//! let select = Select::new(
//!     SelectProps::new()
//!         .options(vec![SelectOption::new("1", "Apple"), SelectOption::new("2", "Banana")])
//!         .on_change(|change| log::info!("proposed {:?}", change.selected_options)),
//! );
//! select.mount(&doc);
//! doc.set_root(select.render());
//! doc.dispatch(&Event::click(select.trigger_id()));
//! ```

mod actions;
mod events;
mod render;
mod state;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, Weak};

use tuidom::{Document, Phase, Propagation};

pub use state::SelectId;
use state::SelectInner;

use crate::change::EventResult;
use crate::loader::LoadState;
use crate::option::SelectOption;
use crate::props::{SelectConfig, SelectProps};

/// A combobox/select widget with shared, reactive state.
///
/// Cloning yields another handle to the same widget.
#[derive(Debug, Clone)]
pub struct Select {
    /// Unique identifier for this select instance
    id: SelectId,
    /// Internal state
    inner: Arc<RwLock<SelectInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

/// Non-owning handle held by document listeners and load tasks.
#[derive(Debug, Clone)]
struct WeakSelect {
    id: SelectId,
    inner: Weak<RwLock<SelectInner>>,
    dirty: Arc<AtomicBool>,
}

impl WeakSelect {
    fn upgrade(&self) -> Option<Select> {
        self.inner.upgrade().map(|inner| Select {
            id: self.id,
            inner,
            dirty: Arc::clone(&self.dirty),
        })
    }
}

impl Select {
    pub fn new(props: SelectProps) -> Self {
        Self {
            id: SelectId::new(),
            inner: Arc::new(RwLock::new(SelectInner::new(props))),
            dirty: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn id(&self) -> SelectId {
        self.id
    }

    /// Id of the rendered root element.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Id of the inner field carrying the combobox role.
    pub fn input_id(&self) -> String {
        format!("{}-input", self.id)
    }

    /// Id of the focus container of the select layout.
    pub fn trigger_id(&self) -> String {
        format!("{}-trigger", self.id)
    }

    pub fn dropdown_id(&self) -> String {
        format!("{}-dropdown", self.id)
    }

    pub fn clear_all_id(&self) -> String {
        format!("{}-clear-all", self.id)
    }

    /// Id of the chip for `selected_options[index]`.
    pub fn tag_id(&self, index: usize) -> String {
        format!("{}-tag-{index}", self.id)
    }

    /// Id of the dropdown row for the visible option at `index`.
    pub fn option_id(&self, index: usize) -> String {
        crate::dropdown::item_id(&self.dropdown_id(), index)
    }

    /// Whether `id` belongs to an element this widget rendered.
    pub fn owns(&self, id: &str) -> bool {
        let root = self.id_string();
        id == root
            || id.strip_prefix(root.as_str()).is_some_and(|rest| rest.starts_with('-'))
            || self.read(|inner| inner.rendered_root.as_deref() == Some(id))
    }

    fn downgrade(&self) -> WeakSelect {
        WeakSelect {
            id: self.id,
            inner: Arc::downgrade(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }

    fn read<R: Default>(&self, f: impl FnOnce(&SelectInner) -> R) -> R {
        self.inner.read().map(|guard| f(&guard)).unwrap_or_default()
    }

    fn write<R: Default>(&self, f: impl FnOnce(&mut SelectInner) -> R) -> R {
        self.inner
            .write()
            .map(|mut guard| f(&mut guard))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Props
    // -------------------------------------------------------------------------

    pub fn config(&self) -> SelectConfig {
        self.read(|inner| inner.props.config.clone())
    }

    /// Replace all props. The variant (`kind`) is fixed at construction and
    /// is kept if `props` names a different one.
    pub fn set_props(&self, mut props: SelectProps) {
        self.write(|inner| {
            if props.config.kind != inner.props.config.kind {
                log::warn!(
                    "{}: select type cannot change at runtime, keeping {:?}",
                    self.id,
                    inner.props.config.kind
                );
                props.config.kind = inner.props.config.kind;
            }
            inner.props = props;
        });
        self.mark_dirty();
    }

    /// Apply the owner's selection.
    pub fn set_selected_options(&self, selected: Vec<SelectOption>) {
        self.write(|inner| inner.props.selected_options = selected);
        self.mark_dirty();
    }

    pub fn selected_options(&self) -> Vec<SelectOption> {
        self.read(|inner| inner.props.selected_options.clone())
    }

    pub fn is_multiple(&self) -> bool {
        self.read(|inner| inner.props.is_multiple())
    }

    pub fn is_disabled(&self) -> bool {
        self.read(|inner| inner.props.config.disabled)
    }

    // -------------------------------------------------------------------------
    // Transient state
    // -------------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.read(|inner| inner.is_open)
    }

    pub fn is_focused(&self) -> bool {
        self.read(|inner| inner.focused)
    }

    pub fn text_value(&self) -> String {
        self.read(|inner| inner.text.text.clone())
    }

    /// Last loaded candidates.
    pub fn options(&self) -> Vec<SelectOption> {
        self.read(|inner| inner.options.clone())
    }

    /// Filtered candidates, `None` while no filter is active.
    pub fn filtered_options(&self) -> Option<Vec<SelectOption>> {
        self.read(|inner| inner.filtered.clone())
    }

    /// What the dropdown lists right now.
    pub fn visible_options(&self) -> Vec<SelectOption> {
        self.read(|inner| inner.visible_options().to_vec())
    }

    pub fn load_state(&self) -> LoadState {
        self.read(|inner| inner.load.clone())
    }

    /// True once the current load request has resolved.
    pub fn options_loaded(&self) -> bool {
        self.read(|inner| inner.load.is_ready())
    }

    pub fn highlight(&self) -> Option<usize> {
        self.read(|inner| inner.highlight)
    }

    // -------------------------------------------------------------------------
    // Document lifecycle
    // -------------------------------------------------------------------------

    pub fn is_mounted(&self) -> bool {
        self.read(|inner| !inner.listeners.is_empty())
    }

    /// Attach to a document.
    ///
    /// Registers a capture listener that closes the dropdown on clicks
    /// outside the rendered root and tracks the viewport, and a bubble
    /// listener that routes events aimed inside the widget to it. Both hold
    /// a weak reference only.
    pub fn mount(&self, document: &Document) {
        if self.is_mounted() {
            log::warn!("{}: already mounted, ignoring mount", self.id);
            return;
        }

        let weak = self.downgrade();
        let capture = document.add_listener(Phase::Capture, move |doc, event| {
            match weak.upgrade() {
                Some(select) => select.on_document_capture(doc, event),
                None => Propagation::Continue,
            }
        });

        let weak = self.downgrade();
        let bubble = document.add_listener(Phase::Bubble, move |doc, event| {
            let Some(select) = weak.upgrade() else {
                return Propagation::Continue;
            };
            let Some(target) = event.target() else {
                return Propagation::Continue;
            };
            let mut path = doc.ancestors(target);
            if path.is_empty() {
                path.push(target.to_string());
            }
            if !path.iter().any(|id| select.owns(id)) {
                return Propagation::Continue;
            }
            match select.handle_event_at(event, &path) {
                EventResult::Consumed => Propagation::Stop,
                EventResult::Ignored => Propagation::Continue,
            }
        });

        let viewport_height = document.viewport().map(|(_, height)| height);
        self.write(|inner| {
            inner.listeners = vec![capture, bubble];
            inner.viewport_height = viewport_height;
        });
        log::debug!("{}: mounted", self.id);
        self.mark_dirty();
    }

    /// Detach from the document: removes both listeners and aborts any
    /// in-flight load.
    pub fn unmount(&self) {
        let listeners = self.write(|inner| {
            inner.abort_pending();
            std::mem::take(&mut inner.listeners)
        });
        if listeners.is_empty() {
            return;
        }
        // Guards unregister on drop; drop them outside our own lock
        drop(listeners);
        log::debug!("{}: unmounted", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_prefixed() {
        let a = Select::new(SelectProps::new());
        let b = Select::new(SelectProps::new());
        assert_ne!(a.id(), b.id());
        assert!(a.id_string().starts_with("__select_"));
        assert!(a.owns(&a.input_id()));
        assert!(!a.owns(&b.input_id()));
    }

    #[test]
    fn owns_does_not_match_longer_ids() {
        let select = Select::new(SelectProps::new());
        let longer = format!("{}0-input", select.id_string());
        assert!(!select.owns(&longer));
    }

    #[test]
    fn kind_is_fixed() {
        let select = Select::new(SelectProps::new());
        select.set_props(SelectProps::new().kind(crate::SelectType::Search));
        assert_eq!(select.config().kind, crate::SelectType::Select);
    }
}
