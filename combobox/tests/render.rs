use combobox::prelude::*;
use tuidom::{find_by_attr, find_element, Color, Style};

fn fruit() -> Vec<SelectOption> {
    vec![SelectOption::new("1", "Apple"), SelectOption::new("2", "Banana")]
}

#[test]
fn test_combobox_aria_attributes() {
    let select = Select::new(SelectProps::new().options(fruit()));
    let root = select.render();
    let input = find_element(&root, &select.input_id()).unwrap();
    assert_eq!(input.get_attr("role"), Some("combobox"));
    assert_eq!(input.get_attr("aria-expanded"), Some("false"));
    assert_eq!(input.get_attr("aria-autocomplete"), Some("none"));

    select.open_dropdown(None);
    let root = select.render();
    let input = find_element(&root, &select.input_id()).unwrap();
    assert_eq!(input.get_attr("aria-expanded"), Some("true"));
}

#[test]
fn test_search_autocompletes_list() {
    let select = Select::new(SelectProps::new().kind(SelectType::Search));
    let root = select.render();
    let input = find_by_attr(&root, "role", "combobox").unwrap();
    assert_eq!(input.id, select.input_id());
    assert_eq!(input.get_attr("aria-autocomplete"), Some("list"));
    assert!(input.captures_input);
}

#[test]
fn test_dropdown_hidden_until_open() {
    let select = Select::new(SelectProps::new().options(fruit()));
    let root = select.render();
    assert!(find_element(&root, &select.dropdown_id()).unwrap().hidden);

    select.open_dropdown(None);
    let root = select.render();
    let dropdown = find_element(&root, &select.dropdown_id()).unwrap();
    assert!(!dropdown.hidden);
    assert_eq!(dropdown.get_attr("role"), Some("list"));
    let row = find_element(&root, &select.option_id(0)).unwrap();
    assert_eq!(row.get_attr("role"), Some("listitem"));
}

#[test]
fn test_tags_are_list_items() {
    let select = Select::new(
        SelectProps::new()
            .multiple(true)
            .selected_options(fruit()),
    );
    let root = select.render();
    assert_eq!(
        find_element(&root, &select.tag_id(1)).unwrap().get_attr("role"),
        Some("listitem")
    );
    let container = find_element(&root, &format!("{}-selections", select.id_string())).unwrap();
    assert_eq!(container.get_attr("role"), Some("list"));
}

#[test]
fn test_single_selection_shown_without_placeholder() {
    let select = Select::new(
        SelectProps::new()
            .placeholder("Pick a fruit")
            .selected_options(vec![SelectOption::new("2", "Banana")]),
    );
    let root = select.render();
    let input = find_element(&root, &select.input_id()).unwrap();
    assert_eq!(input.text_value(), Some(""));
    let selection = find_element(&root, &format!("{}-selection-0", select.id_string())).unwrap();
    assert_eq!(selection.get_attr("role"), Some("listitem"));
    assert_eq!(selection.content.children()[0].text_value(), Some("Banana"));
}

#[test]
fn test_placeholder_when_nothing_selected() {
    let select = Select::new(SelectProps::new().placeholder("Pick a fruit"));
    let root = select.render();
    let input = find_element(&root, &select.input_id()).unwrap();
    assert_eq!(input.text_value(), Some("Pick a fruit"));
}

#[test]
fn test_selected_option_label_accessor() {
    let select = Select::new(
        SelectProps::new()
            .multiple(true)
            .selected_options(fruit())
            .get_selected_option_label(|option| Label::Text(option.id.clone())),
    );
    let root = select.render();
    let tag = find_element(&root, &select.tag_id(0)).unwrap();
    assert_eq!(tag.content.children()[0].text_value(), Some("1"));
}

#[test]
fn test_overrides_merge_over_defaults() {
    let overrides = Overrides::new()
        .with(Slot::Root, Override::new().attr("data-testid", "fruit-picker"))
        .with(
            Slot::InputContainer,
            Override::new().style(Style::new().border_color(Color::var("accent"))),
        )
        .with(
            Slot::Input,
            Override::new().attr("aria-label", "Fruit"),
        );
    let select = Select::new(SelectProps::new().overrides(overrides));
    let root = select.render();

    assert_eq!(root.get_attr("data-testid"), Some("fruit-picker"));
    assert_eq!(root.id, select.id_string());

    let input = find_element(&root, &select.input_id()).unwrap();
    assert_eq!(input.get_attr("aria-label"), Some("Fruit"));
    // Defaults survive the merge
    assert_eq!(input.get_attr("role"), Some("combobox"));

    let container = find_element(&root, &format!("{}-container", select.input_id())).unwrap();
    assert_eq!(container.style.border_color, Some(Color::var("accent")));
    assert!(container.style.border.is_some());
}

#[test]
fn test_component_override_replaces_element() {
    let overrides = Overrides::new().with(
        Slot::DropDownItem,
        Override::new().component(|row| row.attr("data-custom", "yes")),
    );
    let select = Select::new(SelectProps::new().options(fruit()).overrides(overrides));
    select.open_dropdown(None);
    let root = select.render();
    let row = find_element(&root, &select.option_id(1)).unwrap();
    assert_eq!(row.get_attr("data-custom"), Some("yes"));
}

#[test]
fn test_autofocus_and_tab_index() {
    let select = Select::new(SelectProps::new().auto_focus(true).tab_index(3));
    let root = select.render();
    let trigger = find_element(&root, &select.trigger_id()).unwrap();
    assert_eq!(trigger.tab_index, Some(3));
    assert!(trigger.focusable);
    let input = find_element(&root, &select.input_id()).unwrap();
    assert_eq!(input.get_attr("autofocus"), Some("true"));
}

#[test]
fn test_render_clears_dirty() {
    let select = Select::new(SelectProps::new().options(fruit()));
    assert!(select.is_dirty());
    select.render();
    assert!(!select.is_dirty());
    select.open_dropdown(None);
    assert!(select.is_dirty());
}

#[test]
fn test_arrow_keys_move_highlight() {
    let select = Select::new(SelectProps::new().options(fruit()));
    let trigger = select.trigger_id();

    select.handle_event(&Event::key(&trigger, Key::Down));
    assert!(select.is_open());
    assert_eq!(select.highlight(), None);

    select.handle_event(&Event::key(&trigger, Key::Down));
    select.handle_event(&Event::key(&trigger, Key::Down));
    select.handle_event(&Event::key(&trigger, Key::Down));
    assert_eq!(select.highlight(), Some(1));

    select.handle_event(&Event::key(&trigger, Key::Up));
    assert_eq!(select.highlight(), Some(0));

    let root = select.render();
    let row = find_element(&root, &select.option_id(0)).unwrap();
    assert_eq!(row.get_attr("data-highlighted"), Some("true"));
}

#[test]
fn test_error_outline() {
    let select = Select::new(SelectProps::new().error(true));
    let root = select.render();
    let container = find_element(&root, &format!("{}-container", select.input_id())).unwrap();
    assert_eq!(
        container.style.border_color,
        Some(Color::var(combobox::style::NEGATIVE_50))
    );
}
