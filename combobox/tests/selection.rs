use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use combobox::prelude::*;

fn fruit() -> Vec<SelectOption> {
    vec![
        SelectOption::new("1", "Apple"),
        SelectOption::new("2", "Banana"),
        SelectOption::new("3", "Cherry"),
    ]
}

/// A select whose owner records every change and applies it back.
fn controlled(props: SelectProps) -> (Select, Arc<Mutex<Vec<ChangeEvent>>>) {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let select = Select::new(props.on_change(move |change| {
        sink.lock().unwrap().push(change.clone());
    }));
    (select, changes)
}

fn apply_last(select: &Select, changes: &Arc<Mutex<Vec<ChangeEvent>>>) {
    if let Some(change) = changes.lock().unwrap().last() {
        select.set_selected_options(change.selected_options.clone());
    }
}

#[test]
fn test_multi_select_never_duplicates() {
    let (select, changes) = controlled(SelectProps::new().multiple(true).options(fruit()));
    let options = fruit();

    // Toggle in an order that revisits options
    for index in [0, 1, 0, 2, 2, 1, 0, 0, 1] {
        select.on_select(None, options[index].clone());
        apply_last(&select, &changes);

        let emitted = changes.lock().unwrap().last().cloned().unwrap();
        let ids: HashSet<&str> = emitted.selected_options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), emitted.selected_options.len());
    }
}

#[test]
fn test_multi_select_appends_then_unselects() {
    let (select, changes) = controlled(SelectProps::new().multiple(true));
    let options = fruit();

    select.on_select(None, options[0].clone());
    apply_last(&select, &changes);
    select.on_select(None, options[1].clone());
    apply_last(&select, &changes);
    select.on_select(None, options[0].clone());

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 3);
    assert_eq!(changes[1].kind, ChangeType::Select);
    assert_eq!(changes[1].selected_options, vec![options[0].clone(), options[1].clone()]);
    assert_eq!(changes[2].kind, ChangeType::Unselect);
    assert_eq!(changes[2].option.as_ref().map(|o| o.id.as_str()), Some("1"));
    assert_eq!(changes[2].selected_options, vec![options[1].clone()]);
}

#[test]
fn test_single_select_reselect_has_no_effect() {
    let options = fruit();
    let (select, changes) = controlled(
        SelectProps::new()
            .options(fruit())
            .selected_options(vec![options[0].clone()]),
    );

    select.on_select(None, options[0].clone());
    assert!(changes.lock().unwrap().is_empty());
    assert_eq!(select.selected_options(), vec![options[0].clone()]);
}

#[test]
fn test_single_select_replaces_selection() {
    let options = fruit();
    let (select, changes) = controlled(
        SelectProps::new()
            .options(fruit())
            .selected_options(vec![options[0].clone()]),
    );

    select.on_select(None, options[2].clone());
    let changes = changes.lock().unwrap();
    assert_eq!(changes[0].kind, ChangeType::Select);
    assert_eq!(changes[0].selected_options, vec![options[2].clone()]);
}

#[test]
fn test_single_select_closes_after_select() {
    let (select, _changes) = controlled(SelectProps::new().options(fruit()));
    select.open_dropdown(None);
    assert!(select.is_open());

    select.on_select(None, fruit()[1].clone());
    assert!(!select.is_open());
}

#[test]
fn test_multi_select_stays_open_after_select() {
    let (select, _changes) = controlled(SelectProps::new().multiple(true).options(fruit()));
    select.open_dropdown(None);
    select.on_select(None, fruit()[1].clone());
    assert!(select.is_open());
}

#[test]
fn test_search_variant_is_multi_select() {
    let options = fruit();
    let (select, changes) = controlled(
        SelectProps::new()
            .kind(SelectType::Search)
            .selected_options(vec![options[0].clone()]),
    );

    select.on_select(None, options[1].clone());
    let changes = changes.lock().unwrap();
    assert_eq!(changes[0].selected_options.len(), 2);
}

#[test]
fn test_backspace_with_empty_query_removes_last() {
    let options = fruit();
    let (select, changes) = controlled(
        SelectProps::new()
            .kind(SelectType::Search)
            .selected_options(vec![options[0].clone(), options[1].clone()]),
    );

    let result = select.handle_event(&Event::key(select.input_id(), Key::Backspace));
    assert_eq!(result, EventResult::Consumed);

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].kind, ChangeType::Unselect);
    assert_eq!(changes[0].option.as_ref().map(|o| o.id.as_str()), Some("2"));
    assert_eq!(changes[0].selected_options, vec![options[0].clone()]);
}

#[test]
fn test_backspace_with_query_edits_text() {
    let options = fruit();
    let (select, changes) = controlled(
        SelectProps::new()
            .kind(SelectType::Search)
            .selected_options(vec![options[0].clone()]),
    );
    select.on_text_input_change(None, "ab");

    select.handle_event(&Event::key(select.input_id(), Key::Backspace));
    assert_eq!(select.text_value(), "a");
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn test_backspace_in_single_select_is_ignored() {
    let (select, changes) = controlled(
        SelectProps::new().selected_options(vec![fruit()[0].clone()]),
    );
    let result = select.handle_event(&Event::key(select.trigger_id(), Key::Backspace));
    assert_eq!(result, EventResult::Ignored);
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn test_clear_all_always_empties() {
    for selected in [vec![], fruit()[..1].to_vec(), fruit()] {
        let (select, changes) = controlled(
            SelectProps::new().multiple(true).selected_options(selected),
        );
        select.on_clear_all(None);

        let changes = changes.lock().unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeType::Unselect);
        assert!(changes[0].option.is_none());
        assert!(changes[0].selected_options.is_empty());
    }
}

#[test]
fn test_remove_tag_unselects_in_single_select_too() {
    let options = fruit();
    let (select, changes) = controlled(
        SelectProps::new().selected_options(vec![options[1].clone()]),
    );
    select.on_remove_tag(None, options[1].clone());

    let changes = changes.lock().unwrap();
    assert_eq!(changes[0].kind, ChangeType::Unselect);
    assert!(changes[0].selected_options.is_empty());
}

#[test]
fn test_unknown_id_takes_select_path() {
    let options = fruit();
    let (select, changes) = controlled(
        SelectProps::new()
            .multiple(true)
            .selected_options(vec![options[0].clone()]),
    );
    select.on_select(None, SelectOption::new("missing", "Ghost"));

    let changes = changes.lock().unwrap();
    assert_eq!(changes[0].kind, ChangeType::Select);
    assert_eq!(changes[0].selected_options.len(), 2);
}

#[test]
fn test_change_carries_triggering_event() {
    let (select, changes) = controlled(SelectProps::new().kind(SelectType::Search));
    select.render();
    let click = Event::click(select.clear_all_id());
    assert_eq!(select.handle_event(&click), EventResult::Consumed);

    let changes = changes.lock().unwrap();
    assert_eq!(changes[0].event.as_ref(), Some(&click));
}

#[test]
fn test_enter_selects_highlighted_option() {
    let (select, changes) = controlled(SelectProps::new().options(fruit()));
    select.open_dropdown(None);

    select.handle_event(&Event::key(select.trigger_id(), Key::Down));
    select.handle_event(&Event::key(select.trigger_id(), Key::Down));
    assert_eq!(select.highlight(), Some(1));

    let result = select.handle_event(&Event::key(select.trigger_id(), Key::Enter));
    assert_eq!(result, EventResult::Consumed);
    let changes = changes.lock().unwrap();
    assert_eq!(changes[0].option.as_ref().map(|o| o.id.as_str()), Some("2"));
    assert!(!select.is_open());
}

#[test]
fn test_enter_without_highlight_does_nothing() {
    let (select, changes) = controlled(SelectProps::new().options(fruit()));
    select.open_dropdown(None);
    let result = select.handle_event(&Event::key(select.trigger_id(), Key::Enter));
    assert_eq!(result, EventResult::Ignored);
    assert!(changes.lock().unwrap().is_empty());
}
