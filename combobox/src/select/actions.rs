//! Select operations: opening, loading, filtering and selection changes.

use tokio::runtime::Handle;
use tuidom::Event;

use crate::change::{ChangeEvent, ChangeType, TextInputEvent};
use crate::filter::filter_options;
use crate::loader::{LoadError, LoadState, OptionSource};
use crate::option::SelectOption;
use crate::props::SelectType;

use super::Select;

impl Select {
    // -------------------------------------------------------------------------
    // Dropdown
    // -------------------------------------------------------------------------

    /// Open the dropdown and (re)load options for `query`.
    pub fn open_dropdown(&self, query: Option<String>) {
        self.write(|inner| inner.is_open = true);
        log::debug!("{}: open dropdown query={query:?}", self.id);
        self.mark_dirty();
        self.load_options(query);
    }

    pub fn close_dropdown(&self) {
        let was_open = self.write(|inner| {
            let was_open = inner.is_open;
            inner.is_open = false;
            inner.highlight = None;
            was_open
        });
        if was_open {
            log::debug!("{}: close dropdown", self.id);
            self.mark_dirty();
        }
    }

    /// Move the highlight by `delta` rows, clamped to the visible options.
    pub fn move_highlight(&self, delta: isize) {
        self.write(|inner| {
            let len = inner.visible_options().len();
            if len == 0 {
                inner.highlight = None;
                return;
            }
            let next = match inner.highlight {
                Some(current) => current.saturating_add_signed(delta).min(len - 1),
                None if delta < 0 => len - 1,
                None => 0,
            };
            inner.highlight = Some(next);
        });
        self.mark_dirty();
    }

    pub fn set_highlight(&self, index: Option<usize>) {
        self.write(|inner| {
            inner.highlight = index;
            inner.clamp_highlight();
        });
        self.mark_dirty();
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    /// Start a new load. Any in-flight load is aborted and its result will
    /// be ignored.
    fn load_options(&self, query: Option<String>) {
        let (source, generation) = self.write(|inner| {
            inner.abort_pending();
            inner.generation += 1;
            inner.load = LoadState::Loading;
            (inner.props.options.clone(), inner.generation)
        });

        match source {
            OptionSource::Static(options) => {
                self.finish_load(generation, query.as_deref(), Ok(options));
            }
            OptionSource::Async(loader) => {
                let Ok(runtime) = Handle::try_current() else {
                    self.finish_load(generation, query.as_deref(), Err(LoadError::NoRuntime));
                    return;
                };
                let weak = self.downgrade();
                let future = loader(query.clone());
                let handle = runtime.spawn(async move {
                    let result = future.await;
                    if let Some(select) = weak.upgrade() {
                        select.finish_load(generation, query.as_deref(), result);
                    }
                });
                self.write(|inner| {
                    if inner.generation == generation {
                        inner.pending = Some(handle);
                    } else {
                        handle.abort();
                    }
                });
            }
        }
    }

    /// Apply the result of load `generation` if it is still the latest.
    ///
    /// Loads started by a text change (`query` is `Some`) refilter the new
    /// options; other loads keep the current filter.
    fn finish_load(
        &self,
        generation: u64,
        query: Option<&str>,
        result: Result<Vec<SelectOption>, LoadError>,
    ) {
        let props = self.read(|inner| Some(inner.props.clone()));
        let Some(props) = props else {
            return;
        };

        let filtered = match (&result, query) {
            (Ok(options), Some(query)) if props.config.filterable => {
                Some(filter_options(options, query, |option, q| props.matches(option, q)))
            }
            _ => None,
        };

        let applied = self.write(|inner| {
            if inner.generation != generation {
                return false;
            }
            inner.pending = None;
            match &result {
                Ok(options) => {
                    inner.options = options.clone();
                    if let Some(filtered) = filtered {
                        inner.filtered = filtered;
                    }
                    inner.load = LoadState::Ready;
                    inner.clamp_highlight();
                }
                Err(err) => inner.load = LoadState::Error(err.clone()),
            }
            true
        });

        if !applied {
            log::debug!("{}: discarding stale load {generation}", self.id);
            return;
        }
        self.mark_dirty();

        match result {
            Ok(options) => log::debug!("{}: loaded {} options", self.id, options.len()),
            Err(err) => {
                log::warn!("{}: {err}", self.id);
                (props.callbacks.on_load_error)(&err);
            }
        }
    }

    /// Wait for the in-flight load, if any, to finish.
    pub async fn settle(&self) {
        while let Some(handle) = self.write(|inner| inner.pending.take()) {
            if let Err(err) = handle.await {
                if !err.is_cancelled() {
                    log::warn!("{}: option load task failed: {err}", self.id);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Text
    // -------------------------------------------------------------------------

    /// Replace the search text, as if typed into the field.
    pub fn on_text_input_change(&self, event: Option<Event>, value: impl Into<String>) {
        let value = value.into();
        self.write(|inner| inner.text.set(value.clone()));
        self.text_changed(event, value);
    }

    /// Notify the owner and reload for the text already in the field.
    pub(super) fn text_changed(&self, event: Option<Event>, value: String) {
        let callback = self.read(|inner| Some(inner.props.callbacks.on_text_input_change.clone()));
        self.mark_dirty();
        if let Some(callback) = callback {
            callback(&TextInputEvent {
                event,
                value: value.clone(),
            });
        }
        self.open_dropdown(Some(value));
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle `option`.
    ///
    /// An unselected option is proposed as selected (appended when
    /// multi-select, replacing the selection otherwise). A selected option
    /// is proposed as unselected only when multi-select. The single-select
    /// variant closes the dropdown afterwards either way.
    pub fn on_select(&self, event: Option<Event>, option: SelectOption) {
        let props = self.read(|inner| Some(inner.props.clone()));
        let Some(props) = props else {
            return;
        };
        let multiple = props.is_multiple();
        let selected = &props.selected_options;

        let change = if !props.is_selected(&option) {
            let selected_options = if multiple {
                selected.iter().cloned().chain([option.clone()]).collect()
            } else {
                vec![option.clone()]
            };
            Some(ChangeEvent {
                event,
                kind: ChangeType::Select,
                option: Some(option),
                selected_options,
            })
        } else if multiple {
            let selected_options = selected
                .iter()
                .filter(|s| s.id != option.id)
                .cloned()
                .collect();
            Some(ChangeEvent {
                event,
                kind: ChangeType::Unselect,
                option: Some(option),
                selected_options,
            })
        } else {
            None
        };

        if let Some(change) = change {
            log::debug!("{}: {:?} {:?}", self.id, change.kind, change.option.as_ref().map(|o| &o.id));
            (props.callbacks.on_change)(&change);
        }

        if props.config.kind == SelectType::Select && !multiple {
            self.close_dropdown();
        }
    }

    /// Propose removing `option` from the selection.
    pub fn on_remove_tag(&self, event: Option<Event>, option: SelectOption) {
        let props = self.read(|inner| Some(inner.props.clone()));
        let Some(props) = props else {
            return;
        };
        let selected_options = props
            .selected_options
            .iter()
            .filter(|s| s.id != option.id)
            .cloned()
            .collect();
        (props.callbacks.on_change)(&ChangeEvent {
            event,
            kind: ChangeType::Unselect,
            option: Some(option),
            selected_options,
        });
    }

    /// Propose an empty selection.
    pub fn on_clear_all(&self, event: Option<Event>) {
        let callback = self.read(|inner| Some(inner.props.callbacks.on_change.clone()));
        if let Some(callback) = callback {
            callback(&ChangeEvent {
                event,
                kind: ChangeType::Unselect,
                option: None,
                selected_options: Vec::new(),
            });
        }
    }
}
