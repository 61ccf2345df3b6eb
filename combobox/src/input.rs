//! Text field sub-component.
//!
//! Renders `InputContainer > [Before, Input, After]` inside an input root.
//! The select uses it twice: as the editable search field and as the
//! read-only display surface of the select layout.

use std::collections::BTreeMap;

use tuidom::{Direction, Element, Wrap};

use crate::overrides::{Overrides, Slot};
use crate::style::{input_container_style, input_style};

/// What the inner field shows.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    /// Editable text with a char-index cursor.
    Editable { text: String, cursor: usize },
    /// Read-only surface; only the placeholder is drawn.
    ReadOnly,
}

/// Props of [`render_input`].
pub struct InputProps<'a> {
    /// Base id; rendered parts are `{id}-root`, `{id}-container` and `{id}`.
    pub id: String,
    pub disabled: bool,
    pub error: bool,
    pub focused: bool,
    pub placeholder: Option<String>,
    pub value: InputValue,
    pub tab_index: Option<i32>,
    /// Extra attributes for the inner field (ARIA props).
    pub input_attrs: BTreeMap<String, String>,
    pub before: Option<Element>,
    pub after: Option<Element>,
    pub overrides: &'a Overrides,
}

pub fn root_id(id: &str) -> String {
    format!("{id}-root")
}

pub fn container_id(id: &str) -> String {
    format!("{id}-container")
}

pub fn render_input(props: InputProps<'_>) -> Element {
    let placeholder = props.placeholder.unwrap_or_default();

    let field = match props.value {
        InputValue::Editable { text, cursor } => {
            let mut field = Element::text_input(text).cursor(cursor);
            if !placeholder.is_empty() {
                field = field.placeholder(placeholder);
            }
            field.disabled(props.disabled)
        }
        // Read-only surfaces always draw their placeholder dimmed
        InputValue::ReadOnly => Element::text(placeholder).style(input_style(true)),
    };

    let mut field = field
        .id(props.id.clone())
        .flex_grow(1)
        .attrs(props.input_attrs);
    if props.disabled {
        field.style = field.style.merge(&input_style(true));
    }
    if let Some(tab_index) = props.tab_index {
        field = field.tab_index(tab_index);
    }
    let field = props.overrides.resolve(Slot::Input, field);

    let mut parts = Vec::with_capacity(3);
    parts.extend(props.before);
    parts.push(field);
    parts.extend(props.after);

    let container = Element::row()
        .id(container_id(&props.id))
        .wrap(Wrap::Wrap)
        .style(input_container_style(props.focused, props.error))
        .children(parts);
    let container = props.overrides.resolve(Slot::InputContainer, container);

    Element::box_()
        .id(root_id(&props.id))
        .direction(Direction::Column)
        .child(container)
}
