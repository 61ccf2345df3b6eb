//! Dropdown list sub-component.
//!
//! Renders the candidate options under the input. The list stays in the
//! tree while closed (hidden) so element ids remain stable between renders.

use tuidom::{Element, Position};

use crate::loader::LoadState;
use crate::option::{Label, SelectOption};
use crate::overrides::{Overrides, Slot};
use crate::props::SelectType;
use crate::style::{dropdown_style, dropdown_top, icon_style, option_style, IconKind};

/// Height of one dropdown row, in CSS pixels.
pub const ROW_HEIGHT_PX: u32 = 16;

pub struct DropdownProps<'a> {
    pub id: String,
    pub kind: SelectType,
    /// Already passed through [`effective_max_dropdown_height`].
    pub max_dropdown_height: String,
    pub viewport_height: Option<u16>,
    pub options: &'a [SelectOption],
    pub overrides: &'a Overrides,
    pub multiple: bool,
    pub load: &'a LoadState,
    pub is_open: bool,
    pub selected_options: &'a [SelectOption],
    pub highlight: Option<usize>,
    pub disabled: bool,
    pub get_option_label: &'a dyn Fn(&SelectOption) -> Label,
}

/// Id of the row showing `options[index]`.
pub fn item_id(dropdown_id: &str, index: usize) -> String {
    format!("{dropdown_id}-item-{index}")
}

/// Leading integer of a CSS length, like `parseInt`.
fn leading_number(value: &str) -> Option<u32> {
    let digits: String = value
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Clamp a pixel max height that would not fit the viewport to `90vh`.
///
/// Only literal `px` values are clamped. Without a viewport (no real host
/// attached) the value passes through unchanged.
pub fn effective_max_dropdown_height(value: &str, viewport_height: Option<u16>) -> String {
    let Some(rows) = viewport_height else {
        return value.to_string();
    };
    let viewport_px = u32::from(rows) * ROW_HEIGHT_PX;
    if value.ends_with("px") && leading_number(value).is_some_and(|px| px > viewport_px) {
        return "90vh".to_string();
    }
    value.to_string()
}

/// Number of rows a max height allows, if it can be expressed in rows.
pub fn max_rows(value: &str, viewport_height: Option<u16>) -> Option<usize> {
    let n = leading_number(value)?;
    let rows = if value.ends_with("px") {
        n / ROW_HEIGHT_PX
    } else if value.ends_with("vh") {
        u32::from(viewport_height?) * n / 100
    } else {
        return None;
    };
    Some((rows as usize).max(1))
}

fn status_row(id: String, text: &str, overrides: &Overrides) -> Element {
    let row = Element::text(text).id(id).role("listitem").style(option_style(false, true, false));
    overrides.resolve(Slot::DropDownItem, row)
}

pub fn render_dropdown(props: DropdownProps<'_>) -> Element {
    let mut rows = Vec::new();

    match props.load {
        LoadState::Idle | LoadState::Loading => {
            rows.push(status_row(format!("{}-loading", props.id), "Loading…", props.overrides));
        }
        LoadState::Error(err) => {
            rows.push(status_row(format!("{}-error", props.id), &err.to_string(), props.overrides));
        }
        LoadState::Ready if props.options.is_empty() => {
            rows.push(status_row(format!("{}-empty", props.id), "No results", props.overrides));
        }
        LoadState::Ready => {
            let limit = max_rows(&props.max_dropdown_height, props.viewport_height)
                .unwrap_or(props.options.len());
            // Scroll so the highlighted row stays visible
            let start = match props.highlight {
                Some(h) if h >= limit => h + 1 - limit,
                _ => 0,
            };

            for (index, option) in props.options.iter().enumerate().skip(start).take(limit) {
                let selected = props.selected_options.iter().any(|s| s.id == option.id);
                let highlighted = props.highlight == Some(index);

                let mut row = Element::row()
                    .id(item_id(&props.id, index))
                    .role("listitem")
                    .attr("aria-selected", selected.to_string())
                    .clickable(!props.disabled)
                    .disabled(props.disabled)
                    .style(option_style(selected, props.disabled, highlighted));
                if highlighted {
                    row = row.attr("data-highlighted", "true");
                }
                if selected {
                    row = row.child(
                        Element::text(IconKind::Selected.glyph())
                            .attr("data-icon", IconKind::Selected.name())
                            .style(icon_style(IconKind::Selected, props.disabled)),
                    );
                }
                row = row.child((props.get_option_label)(option).to_element());

                rows.push(props.overrides.resolve(Slot::DropDownItem, row));
            }
        }
    }

    let list = Element::col()
        .id(props.id)
        .role("list")
        .attr("aria-multiselectable", props.multiple.to_string())
        .attr("max-height", props.max_dropdown_height)
        .position(Position::Absolute)
        .top(dropdown_top(props.kind))
        .left(1)
        .z_index(10)
        .hidden(!props.is_open)
        .style(dropdown_style())
        .children(rows);

    props.overrides.resolve(Slot::DropDown, list)
}
