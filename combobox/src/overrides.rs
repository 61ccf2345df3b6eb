//! Caller-supplied replacements for rendered sub-elements.
//!
//! Every element the widget renders belongs to a named [`Slot`]. An
//! [`Override`] for that slot layers extra style and attributes over the
//! default element and can hand the merged result to a replacement
//! component, so callers can restyle or swap any part without forking the
//! widget.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use tuidom::{Element, Style};

/// Named rendering slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Root,
    Input,
    InputContainer,
    SelectComponentIcon,
    SelectionContainer,
    SingleSelection,
    Tag,
    DropDown,
    DropDownItem,
}

/// Replacement component: receives the merged default element.
pub type Component = Arc<dyn Fn(Element) -> Element + Send + Sync>;

/// Override for one slot.
#[derive(Clone, Default)]
pub struct Override {
    pub component: Option<Component>,
    pub style: Option<Style>,
    pub attrs: BTreeMap<String, String>,
}

impl Override {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rendered element.
    pub fn component(mut self, f: impl Fn(Element) -> Element + Send + Sync + 'static) -> Self {
        self.component = Some(Arc::new(f));
        self
    }

    /// Style merged over the default style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Attribute set over the defaults.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Merge this override into `element`.
    pub fn apply(&self, mut element: Element) -> Element {
        if let Some(style) = &self.style {
            element.style = element.style.merge(style);
        }
        element
            .attrs
            .extend(self.attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
        match &self.component {
            Some(component) => component(element),
            None => element,
        }
    }
}

impl fmt::Debug for Override {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Override")
            .field("component", &self.component.as_ref().map(|_| ".."))
            .field("style", &self.style)
            .field("attrs", &self.attrs)
            .finish()
    }
}

/// Overrides keyed by slot.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    slots: HashMap<Slot, Override>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: Slot, value: Override) -> Self {
        self.slots.insert(slot, value);
        self
    }

    pub fn get(&self, slot: Slot) -> Option<&Override> {
        self.slots.get(&slot)
    }

    /// Resolve a slot: apply its override (if any) to the default element.
    pub fn resolve(&self, slot: Slot, default: Element) -> Element {
        match self.slots.get(&slot) {
            Some(value) => value.apply(default),
            None => default,
        }
    }
}
