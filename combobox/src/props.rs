//! Select configuration and owner-supplied callbacks.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use tuidom::Event;

use crate::change::{ChangeEvent, TextInputEvent};
use crate::filter::default_filter_option;
use crate::loader::{LoadError, OptionSource};
use crate::option::{Label, SelectOption};
use crate::overrides::Overrides;

/// Widget variant. Fixed for the lifetime of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectType {
    /// Read-only display surface showing the current selection.
    #[default]
    Select,
    /// Editable text field driving filtering. Always multi-select.
    Search,
}

/// Plain configuration values.
///
/// Deserializable so hosts can keep widget configuration in JSON or TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    #[serde(rename = "type")]
    pub kind: SelectType,
    pub multiple: bool,
    pub filterable: bool,
    pub disabled: bool,
    pub error: bool,
    pub placeholder: Option<String>,
    pub auto_focus: bool,
    /// CSS-style length, e.g. `"900px"` or `"50vh"`.
    pub max_dropdown_height: String,
    pub tab_index: i32,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            kind: SelectType::Select,
            multiple: false,
            filterable: false,
            disabled: false,
            error: false,
            placeholder: None,
            auto_focus: false,
            max_dropdown_height: "900px".to_string(),
            tab_index: 0,
        }
    }
}

pub type ChangeHandler = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;
pub type TextInputHandler = Arc<dyn Fn(&TextInputEvent) + Send + Sync>;
pub type EventHandler = Arc<dyn Fn(&Event) + Send + Sync>;
pub type LoadErrorHandler = Arc<dyn Fn(&LoadError) + Send + Sync>;
pub type LabelFn = Arc<dyn Fn(&SelectOption) -> Label + Send + Sync>;
pub type FilterFn = Arc<dyn Fn(&SelectOption, &str) -> bool + Send + Sync>;

/// Owner callbacks. Every callback defaults to a no-op.
#[derive(Clone)]
pub struct Callbacks {
    pub on_change: ChangeHandler,
    pub on_text_input_change: TextInputHandler,
    pub on_focus: EventHandler,
    pub on_blur: EventHandler,
    pub on_mouse_enter: EventHandler,
    pub on_mouse_leave: EventHandler,
    pub on_mouse_down: EventHandler,
    pub on_mouse_up: EventHandler,
    pub on_load_error: LoadErrorHandler,
}

impl Default for Callbacks {
    fn default() -> Self {
        Self {
            on_change: Arc::new(|_| {}),
            on_text_input_change: Arc::new(|_| {}),
            on_focus: Arc::new(|_| {}),
            on_blur: Arc::new(|_| {}),
            on_mouse_enter: Arc::new(|_| {}),
            on_mouse_leave: Arc::new(|_| {}),
            on_mouse_down: Arc::new(|_| {}),
            on_mouse_up: Arc::new(|_| {}),
            on_load_error: Arc::new(|_| {}),
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

/// Everything the owner passes to a [`Select`](crate::Select).
///
/// # Example
///
/// ```ignore
/// let props = SelectProps::new()
///     .kind(SelectType::Search)
///     .filterable(true)
///     .placeholder("Search fruit")
///     .options(vec![SelectOption::new("1", "Apple"), SelectOption::new("2", "Banana")])
///     .on_change(move |change| tx.send(change.selected_options.clone()).ok());
/// ```
#[derive(Clone, Default)]
pub struct SelectProps {
    pub config: SelectConfig,
    pub options: OptionSource,
    /// Controlled selection. Owned by the caller; the widget never edits it.
    pub selected_options: Vec<SelectOption>,
    pub get_option_label: Option<LabelFn>,
    pub get_selected_option_label: Option<LabelFn>,
    pub filter_option: Option<FilterFn>,
    pub overrides: Overrides,
    pub callbacks: Callbacks,
}

impl fmt::Debug for SelectProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectProps")
            .field("config", &self.config)
            .field("options", &self.options)
            .field("selected_options", &self.selected_options)
            .finish_non_exhaustive()
    }
}

impl SelectProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: SelectConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: SelectType) -> Self {
        self.config.kind = kind;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.config.multiple = multiple;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.config.filterable = filterable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.config.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = Some(placeholder.into());
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.config.auto_focus = auto_focus;
        self
    }

    pub fn max_dropdown_height(mut self, height: impl Into<String>) -> Self {
        self.config.max_dropdown_height = height.into();
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.config.tab_index = tab_index;
        self
    }

    /// Static options or an async loader.
    pub fn options(mut self, options: impl Into<OptionSource>) -> Self {
        self.options = options.into();
        self
    }

    pub fn selected_options(mut self, selected: Vec<SelectOption>) -> Self {
        self.selected_options = selected;
        self
    }

    pub fn get_option_label(
        mut self,
        f: impl Fn(&SelectOption) -> Label + Send + Sync + 'static,
    ) -> Self {
        self.get_option_label = Some(Arc::new(f));
        self
    }

    pub fn get_selected_option_label(
        mut self,
        f: impl Fn(&SelectOption) -> Label + Send + Sync + 'static,
    ) -> Self {
        self.get_selected_option_label = Some(Arc::new(f));
        self
    }

    pub fn filter_option(
        mut self,
        f: impl Fn(&SelectOption, &str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter_option = Some(Arc::new(f));
        self
    }

    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn on_change(mut self, f: impl Fn(&ChangeEvent) + Send + Sync + 'static) -> Self {
        self.callbacks.on_change = Arc::new(f);
        self
    }

    pub fn on_text_input_change(
        mut self,
        f: impl Fn(&TextInputEvent) + Send + Sync + 'static,
    ) -> Self {
        self.callbacks.on_text_input_change = Arc::new(f);
        self
    }

    pub fn on_focus(mut self, f: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.callbacks.on_focus = Arc::new(f);
        self
    }

    pub fn on_blur(mut self, f: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.callbacks.on_blur = Arc::new(f);
        self
    }

    pub fn on_mouse_enter(mut self, f: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.callbacks.on_mouse_enter = Arc::new(f);
        self
    }

    pub fn on_mouse_leave(mut self, f: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.callbacks.on_mouse_leave = Arc::new(f);
        self
    }

    pub fn on_mouse_down(mut self, f: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.callbacks.on_mouse_down = Arc::new(f);
        self
    }

    pub fn on_mouse_up(mut self, f: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.callbacks.on_mouse_up = Arc::new(f);
        self
    }

    pub fn on_load_error(mut self, f: impl Fn(&LoadError) + Send + Sync + 'static) -> Self {
        self.callbacks.on_load_error = Arc::new(f);
        self
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// The search variant is always multi-select.
    pub fn is_multiple(&self) -> bool {
        self.config.kind == SelectType::Search || self.config.multiple
    }

    /// Label shown in the dropdown.
    pub fn option_label(&self, option: &SelectOption) -> Label {
        match &self.get_option_label {
            Some(f) => f(option),
            None => option.label.clone(),
        }
    }

    /// Label shown for a selected option (tag or single selection).
    pub fn selected_option_label(&self, option: &SelectOption) -> Label {
        match &self.get_selected_option_label {
            Some(f) => f(option),
            None => self.option_label(option),
        }
    }

    /// Whether `option` matches `query` under the configured filter.
    pub fn matches(&self, option: &SelectOption, query: &str) -> bool {
        match &self.filter_option {
            Some(f) => f(option, query),
            None => default_filter_option(&self.option_label(option), query),
        }
    }

    pub fn is_selected(&self, option: &SelectOption) -> bool {
        self.selected_options.iter().any(|s| s.id == option.id)
    }
}
