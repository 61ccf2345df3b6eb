//! Event handling for the Select widget.

use tuidom::{Document, Event, Key, Modifiers, Propagation, TextEditResult};

use crate::change::EventResult;
use crate::props::SelectType;

use super::state::HitTarget;
use super::Select;

impl Select {
    /// Handle an event aimed at this widget.
    ///
    /// The event target is matched exactly against the elements of the last
    /// render. Hosts that know the target's ancestry should dispatch through
    /// a mounted [`Document`] instead, which resolves clicks on nested
    /// elements to the nearest actionable one.
    pub fn handle_event(&self, event: &Event) -> EventResult {
        let path: Vec<String> = event.target().map(str::to_string).into_iter().collect();
        self.handle_event_at(event, &path)
    }

    /// Handle an event whose target has the ancestry `path`, deepest first.
    pub(super) fn handle_event_at(&self, event: &Event, path: &[String]) -> EventResult {
        if let Event::Resize { height, .. } = event {
            self.write(|inner| inner.viewport_height = Some(*height));
            self.mark_dirty();
            return EventResult::Ignored;
        }

        if self.is_disabled() {
            // Clicks inside a disabled widget are swallowed, nothing else
            // reaches it.
            return if matches!(event, Event::Click { .. }) {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            };
        }

        match event {
            Event::Key { key, modifiers, .. } => self.handle_key(event, *key, *modifiers),
            Event::Click { .. } => self.handle_click(event, path),
            Event::Change { target, text } if *target == self.input_id() => {
                if self.config().kind == SelectType::Search {
                    self.on_text_input_change(Some(event.clone()), text.clone());
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::Focus { .. } => {
                let callback = self.write(|inner| {
                    inner.focused = true;
                    Some(inner.props.callbacks.on_focus.clone())
                });
                self.mark_dirty();
                if let Some(callback) = callback {
                    callback(event);
                }
                EventResult::Ignored
            }
            Event::Blur { .. } => {
                let callback = self.write(|inner| {
                    inner.focused = false;
                    Some(inner.props.callbacks.on_blur.clone())
                });
                self.mark_dirty();
                if let Some(callback) = callback {
                    callback(event);
                }
                EventResult::Ignored
            }
            Event::MouseEnter { target } => {
                if let Some(HitTarget::Option(_, index)) = self.hit_for(path) {
                    self.set_highlight(Some(index));
                }
                if *target == self.root_id() {
                    let callback = self.read(|inner| Some(inner.props.callbacks.on_mouse_enter.clone()));
                    if let Some(callback) = callback {
                        callback(event);
                    }
                }
                EventResult::Ignored
            }
            Event::MouseLeave { target } if *target == self.root_id() => {
                let callback = self.read(|inner| Some(inner.props.callbacks.on_mouse_leave.clone()));
                if let Some(callback) = callback {
                    callback(event);
                }
                EventResult::Ignored
            }
            Event::Press { .. } => {
                let callback = self.read(|inner| Some(inner.props.callbacks.on_mouse_down.clone()));
                if let Some(callback) = callback {
                    callback(event);
                }
                EventResult::Ignored
            }
            Event::Release { .. } => {
                let callback = self.read(|inner| Some(inner.props.callbacks.on_mouse_up.clone()));
                if let Some(callback) = callback {
                    callback(event);
                }
                EventResult::Ignored
            }
            _ => EventResult::Ignored,
        }
    }

    /// Id of the outermost rendered element. A `Slot::Root` override may
    /// wrap or re-id the default root.
    fn root_id(&self) -> String {
        self.read(|inner| inner.rendered_root.clone())
            .unwrap_or_else(|| self.id_string())
    }

    /// Nearest actionable element on `path`.
    fn hit_for(&self, path: &[String]) -> Option<HitTarget> {
        self.read(|inner| path.iter().find_map(|id| inner.hits.get(id).cloned()))
    }

    fn handle_click(&self, event: &Event, path: &[String]) -> EventResult {
        let Some(hit) = self.hit_for(path) else {
            return EventResult::Ignored;
        };
        log::debug!("{}: click {hit:?}", self.id);

        match hit {
            HitTarget::Trigger => {
                if self.is_open() {
                    self.close_dropdown();
                } else {
                    self.open_dropdown(None);
                }
            }
            HitTarget::SearchInput => {
                if !self.is_open() {
                    let text = self.text_value();
                    self.open_dropdown((!text.is_empty()).then_some(text));
                }
            }
            HitTarget::ClearAll => self.on_clear_all(Some(event.clone())),
            HitTarget::RemoveTag(option) => self.on_remove_tag(Some(event.clone()), option),
            HitTarget::Option(option, _) => self.on_select(Some(event.clone()), option),
        }
        EventResult::Consumed
    }

    /// Hot keys first, then text editing in the search layout.
    fn handle_key(&self, event: &Event, key: Key, modifiers: Modifiers) -> EventResult {
        let kind = self.config().kind;
        let is_open = self.is_open();

        match key {
            Key::Down => {
                if is_open {
                    self.move_highlight(1);
                } else {
                    self.open_dropdown(None);
                }
                return EventResult::Consumed;
            }
            Key::Char(' ') if kind == SelectType::Select && modifiers.none() => {
                if is_open {
                    return EventResult::Ignored;
                }
                self.open_dropdown(None);
                return EventResult::Consumed;
            }
            Key::Up if is_open => {
                self.move_highlight(-1);
                return EventResult::Consumed;
            }
            Key::Escape => {
                return if is_open {
                    self.close_dropdown();
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                };
            }
            Key::Enter if is_open => {
                let highlighted = self.read(|inner| {
                    inner
                        .highlight
                        .and_then(|index| inner.visible_options().get(index).cloned())
                });
                if let Some(option) = highlighted {
                    self.on_select(Some(event.clone()), option);
                    return EventResult::Consumed;
                }
            }
            Key::Backspace if self.is_multiple() && self.text_value().is_empty() => {
                let Some(last) = self.selected_options().pop() else {
                    return EventResult::Ignored;
                };
                self.on_remove_tag(Some(event.clone()), last);
                return EventResult::Consumed;
            }
            _ => {}
        }

        if kind != SelectType::Search {
            return EventResult::Ignored;
        }

        let (result, text) = self.write(|inner| {
            let result = inner.text.handle_key(key, modifiers);
            (Some(result), inner.text.text.clone())
        });
        match result {
            Some(TextEditResult::Changed) => {
                self.text_changed(Some(event.clone()), text);
                EventResult::Consumed
            }
            Some(TextEditResult::Handled) => {
                self.mark_dirty();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Capture-phase document listener.
    pub(super) fn on_document_capture(&self, doc: &Document, event: &Event) -> Propagation {
        match event {
            Event::Resize { height, .. } => {
                self.write(|inner| inner.viewport_height = Some(*height));
                self.mark_dirty();
            }
            Event::Click { target, .. } if self.is_open() => {
                let root = self.root_id();
                // Only a rendered widget can tell inside from outside
                if doc.is_rendered(&root) {
                    let inside = target.as_deref().is_some_and(|t| doc.contains(&root, t));
                    if !inside {
                        log::debug!("{}: click outside", self.id);
                        self.close_dropdown();
                    }
                }
            }
            _ => {}
        }
        Propagation::Continue
    }
}
