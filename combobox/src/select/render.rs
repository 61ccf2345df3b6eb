//! Rendering for the Select widget.

use std::collections::{BTreeMap, HashMap};

use tuidom::{Element, Position, TextInputData};

use crate::dropdown::{effective_max_dropdown_height, item_id, render_dropdown, DropdownProps};
use crate::input::{render_input, InputProps, InputValue};
use crate::loader::LoadState;
use crate::option::SelectOption;
use crate::overrides::{Overrides, Slot};
use crate::props::{SelectProps, SelectType};
use crate::style::{icon_style, single_selection_style, IconKind};
use crate::tag::{action_id, render_tag, TagProps};

use super::state::HitTarget;
use super::Select;

/// Everything a render needs, copied out of the widget state so that label
/// accessors and override components run without the state locked.
#[derive(Default)]
struct Snapshot {
    props: SelectProps,
    text: TextInputData,
    visible: Vec<SelectOption>,
    is_open: bool,
    focused: bool,
    load: LoadState,
    highlight: Option<usize>,
    viewport_height: Option<u16>,
}

/// Element ids and the hit map under construction.
struct Frame<'a> {
    select: &'a Select,
    props: &'a SelectProps,
    hits: HashMap<String, HitTarget>,
}

impl Frame<'_> {
    fn icon(&self, kind: IconKind, id: Option<String>) -> Element {
        let props = self.props;
        let disabled = props.config.disabled;
        let mut icon = Element::text(kind.glyph())
            .attr("data-icon", kind.name())
            .style(icon_style(kind, disabled));
        if let Some(id) = id {
            icon = icon.id(id);
        }
        if kind == IconKind::ClearAll {
            icon = icon.clickable(!disabled).attr("aria-label", "clear all");
        }
        props.overrides.resolve(Slot::SelectComponentIcon, icon)
    }

    /// The embedded selection: chips when multi-select, plain text otherwise.
    fn selections(&mut self) -> Element {
        let props = self.props;
        let disabled = props.config.disabled;
        let multiple = props.is_multiple();
        let overrides: &Overrides = &props.overrides;

        let mut children = Vec::new();
        if props.config.kind == SelectType::Search {
            children.push(self.icon(IconKind::Loop, None));
        }

        for (index, option) in props.selected_options.iter().enumerate() {
            let label = props.selected_option_label(option).to_element();
            if multiple {
                let tag_id = self.select.tag_id(index);
                if !disabled {
                    self.hits
                        .insert(action_id(&tag_id), HitTarget::RemoveTag(option.clone()));
                }
                children.push(render_tag(TagProps {
                    id: tag_id,
                    disabled,
                    label,
                    overrides,
                }));
            } else {
                let single = Element::row()
                    .id(format!("{}-selection-{index}", self.select.id))
                    .role("listitem")
                    .flex_grow(1)
                    .style(single_selection_style(disabled))
                    .child(label);
                children.push(overrides.resolve(Slot::SingleSelection, single));
            }
        }

        let container = Element::row()
            .id(format!("{}-selections", self.select.id))
            .role("list")
            .gap(1)
            .children(children);
        overrides.resolve(Slot::SelectionContainer, container)
    }

    fn accessibility_attrs(&self, is_open: bool) -> BTreeMap<String, String> {
        let props = self.props;
        let config = &props.config;
        let autocomplete = match config.kind {
            SelectType::Search => "list",
            SelectType::Select => "none",
        };
        let mut attrs = BTreeMap::from([
            ("role".to_string(), "combobox".to_string()),
            ("aria-expanded".to_string(), is_open.to_string()),
            ("aria-autocomplete".to_string(), autocomplete.to_string()),
            ("aria-controls".to_string(), self.select.dropdown_id()),
        ]);
        if config.disabled {
            attrs.insert("aria-disabled".to_string(), "true".to_string());
        }
        if config.error {
            attrs.insert("aria-invalid".to_string(), "true".to_string());
        }
        if config.auto_focus {
            attrs.insert("autofocus".to_string(), "true".to_string());
        }
        attrs
    }

    /// Read-only display surface inside a focusable, clickable container.
    fn select_layout(&mut self, snapshot: &Snapshot) -> Element {
        let props = self.props;
        let config = &props.config;
        let placeholder = if props.selected_options.is_empty() {
            config.placeholder.clone()
        } else {
            None
        };
        let before = self.selections();
        let after = self.icon(IconKind::Select, None);

        let input = render_input(InputProps {
            id: self.select.input_id(),
            disabled: config.disabled,
            error: config.error,
            focused: snapshot.focused,
            placeholder,
            value: InputValue::ReadOnly,
            tab_index: None,
            input_attrs: self.accessibility_attrs(snapshot.is_open),
            before: Some(before),
            after: Some(after),
            overrides: &props.overrides,
        });

        let trigger_id = self.select.trigger_id();
        if !config.disabled {
            self.hits.insert(trigger_id.clone(), HitTarget::Trigger);
        }
        Element::box_()
            .id(trigger_id)
            .focusable(!config.disabled)
            .clickable(!config.disabled)
            .tab_index(config.tab_index)
            .child(input)
    }

    /// Editable search field with chips, search icon and clear-all action.
    fn search_layout(&mut self, snapshot: &Snapshot) -> Element {
        let props = self.props;
        let config = &props.config;
        let before = self.selections();
        let clear_all_id = self.select.clear_all_id();
        let after = self.icon(IconKind::ClearAll, Some(clear_all_id.clone()));

        let input_id = self.select.input_id();
        if !config.disabled {
            self.hits.insert(input_id.clone(), HitTarget::SearchInput);
            self.hits.insert(clear_all_id, HitTarget::ClearAll);
        }

        render_input(InputProps {
            id: input_id,
            disabled: config.disabled,
            error: config.error,
            focused: snapshot.focused,
            placeholder: config.placeholder.clone(),
            value: InputValue::Editable {
                text: snapshot.text.text.clone(),
                cursor: snapshot.text.cursor,
            },
            tab_index: Some(config.tab_index),
            input_attrs: self.accessibility_attrs(snapshot.is_open),
            before: Some(before),
            after: Some(after),
            overrides: &props.overrides,
        })
    }

    fn dropdown(&mut self, snapshot: &Snapshot) -> Element {
        let props = self.props;
        let dropdown_id = self.select.dropdown_id();
        if !props.config.disabled {
            for (index, option) in snapshot.visible.iter().enumerate() {
                self.hits.insert(
                    item_id(&dropdown_id, index),
                    HitTarget::Option(option.clone(), index),
                );
            }
        }

        let label = |option: &SelectOption| props.option_label(option);
        render_dropdown(DropdownProps {
            id: dropdown_id,
            kind: props.config.kind,
            max_dropdown_height: effective_max_dropdown_height(
                &props.config.max_dropdown_height,
                snapshot.viewport_height,
            ),
            viewport_height: snapshot.viewport_height,
            options: &snapshot.visible,
            overrides: &props.overrides,
            multiple: props.is_multiple(),
            load: &snapshot.load,
            is_open: snapshot.is_open,
            selected_options: &props.selected_options,
            highlight: snapshot.highlight,
            disabled: props.config.disabled,
            get_option_label: &label,
        })
    }
}

impl Select {
    /// Build the element tree for the current state.
    ///
    /// Also records which rendered elements are clickable and what they do;
    /// clicks are resolved against the most recent render.
    pub fn render(&self) -> Element {
        let snapshot = self.read(|inner| Snapshot {
            props: inner.props.clone(),
            text: inner.text.clone(),
            visible: inner.visible_options().to_vec(),
            is_open: inner.is_open,
            focused: inner.focused,
            load: inner.load.clone(),
            highlight: inner.highlight,
            viewport_height: inner.viewport_height,
        });

        let mut frame = Frame {
            select: self,
            props: &snapshot.props,
            hits: HashMap::new(),
        };
        let kind = snapshot.props.config.kind;
        let layout = match kind {
            SelectType::Search => frame.search_layout(&snapshot),
            SelectType::Select => frame.select_layout(&snapshot),
        };
        let dropdown = frame.dropdown(&snapshot);
        let hits = frame.hits;

        let root = Element::box_()
            .id(self.id_string())
            .position(Position::Relative)
            .attr("data-type", match kind {
                SelectType::Search => "search",
                SelectType::Select => "select",
            })
            .disabled(snapshot.props.config.disabled)
            .child(layout)
            .child(dropdown);
        let root = snapshot.props.overrides.resolve(Slot::Root, root);

        log::debug!("{}: render open={} hits={}", self.id, snapshot.is_open, hits.len());
        let rendered_root = (!root.id.is_empty()).then(|| root.id.clone());
        self.write(|inner| {
            inner.hits = hits;
            inner.rendered_root = rendered_root;
        });
        self.clear_dirty();
        root
    }
}
