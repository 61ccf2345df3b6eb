use combobox::prelude::*;

#[test]
fn test_config_from_json() {
    let config: SelectConfig = serde_json::from_str(
        r#"{
            "type": "search",
            "filterable": true,
            "placeholder": "Find a country",
            "max_dropdown_height": "300px",
            "tab_index": 2
        }"#,
    )
    .unwrap();

    assert_eq!(config.kind, SelectType::Search);
    assert!(config.filterable);
    assert_eq!(config.placeholder.as_deref(), Some("Find a country"));
    assert_eq!(config.max_dropdown_height, "300px");
    assert_eq!(config.tab_index, 2);
    // Unset fields keep their defaults
    assert!(!config.multiple);
    assert!(!config.disabled);
}

#[test]
fn test_empty_config_is_default() {
    let config: SelectConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, SelectConfig::default());
}

#[test]
fn test_unknown_type_is_rejected() {
    let result: Result<SelectConfig, _> = serde_json::from_str(r#"{"type": "dropdown"}"#);
    assert!(result.is_err());
}

#[test]
fn test_props_from_config() {
    let config: SelectConfig = serde_json::from_str(r#"{"type": "search"}"#).unwrap();
    let select = Select::new(SelectProps::from_config(config));
    assert!(select.is_multiple());
    assert_eq!(select.config().kind, SelectType::Search);
}

#[test]
fn test_options_from_json() {
    let options: Vec<SelectOption> =
        serde_json::from_str(r#"[{"id":"1","label":"Apple"},{"id":"2","label":"Banana","ripe":true}]"#)
            .unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[1].extra("ripe"), Some(&serde_json::json!(true)));
}
