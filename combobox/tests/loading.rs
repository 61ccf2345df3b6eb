use std::sync::{Arc, Mutex};
use std::time::Duration;

use combobox::prelude::*;

fn fruit() -> Vec<SelectOption> {
    vec![SelectOption::new("1", "Apple"), SelectOption::new("2", "Banana")]
}

#[test]
fn test_static_options_load_on_open() {
    let select = Select::new(SelectProps::new().options(fruit()));
    assert_eq!(select.load_state(), LoadState::Idle);
    assert!(!select.options_loaded());

    select.open_dropdown(None);
    assert!(select.options_loaded());
    assert_eq!(select.options(), fruit());
}

#[tokio::test]
async fn test_async_loader_receives_query() {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&queries);
    let select = Select::new(
        SelectProps::new()
            .kind(SelectType::Search)
            .options(OptionSource::loader(move |query| {
                seen.lock().unwrap().push(query);
                async move { Ok(fruit()) }
            })),
    );

    select.on_text_input_change(None, "ap");
    assert!(select.load_state().is_loading());
    select.settle().await;

    assert!(select.options_loaded());
    assert_eq!(select.options().len(), 2);
    assert_eq!(*queries.lock().unwrap(), vec![Some("ap".to_string())]);
}

#[tokio::test]
async fn test_async_load_filters_after_resolving() {
    let select = Select::new(
        SelectProps::new()
            .kind(SelectType::Search)
            .filterable(true)
            .options(OptionSource::loader(|_| async {
                tokio::time::sleep(Duration::from_millis(5)).await;
                Ok(fruit())
            })),
    );

    select.on_text_input_change(None, "an");
    assert_eq!(select.filtered_options(), None);
    select.settle().await;
    assert_eq!(
        select.filtered_options(),
        Some(vec![SelectOption::new("2", "Banana")])
    );
}

#[tokio::test]
async fn test_stale_load_is_discarded() {
    let select = Select::new(
        SelectProps::new()
            .kind(SelectType::Search)
            .options(OptionSource::loader(|query: Option<String>| async move {
                let query = query.unwrap_or_default();
                // The first query resolves last
                let delay = if query == "a" { 50 } else { 1 };
                tokio::time::sleep(Duration::from_millis(delay)).await;
                Ok(vec![SelectOption::new(query.clone(), query)])
            })),
    );

    select.on_text_input_change(None, "a");
    select.on_text_input_change(None, "ab");
    select.settle().await;
    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(select.options(), vec![SelectOption::new("ab", "ab")]);
    assert!(select.options_loaded());
}

#[tokio::test]
async fn test_loader_error_is_reported() {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    let select = Select::new(
        SelectProps::new()
            .options(OptionSource::loader(|_| async {
                Err(LoadError::failed("backend unavailable"))
            }))
            .on_load_error(move |err| sink.lock().unwrap().push(err.clone())),
    );

    select.open_dropdown(None);
    select.settle().await;

    assert_eq!(
        select.load_state(),
        LoadState::Error(LoadError::failed("backend unavailable"))
    );
    assert_eq!(errors.lock().unwrap().len(), 1);
    // The widget stays usable
    assert!(select.is_open());
    select.close_dropdown();
    assert!(!select.is_open());
}

#[tokio::test]
async fn test_loader_can_deserialize_json() {
    let select = Select::new(SelectProps::new().options(OptionSource::loader(|_| async {
        let options: Vec<SelectOption> =
            serde_json::from_str(r#"[{"id":"nl","label":"Netherlands","region":"EU"}]"#)?;
        Ok::<_, LoadError>(options)
    })));

    select.open_dropdown(None);
    select.settle().await;
    let options = select.options();
    assert_eq!(options[0].label.as_text(), Some("Netherlands"));
    assert_eq!(options[0].extra("region"), Some(&serde_json::json!("EU")));
}

#[test]
fn test_async_loader_without_runtime_errors() {
    let errors = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&errors);
    let select = Select::new(
        SelectProps::new()
            .options(OptionSource::loader(|_| async { Ok(Vec::new()) }))
            .on_load_error(move |err| sink.lock().unwrap().push(err.clone())),
    );

    select.open_dropdown(None);
    assert_eq!(select.load_state(), LoadState::Error(LoadError::NoRuntime));
    assert_eq!(*errors.lock().unwrap(), vec![LoadError::NoRuntime]);
}

#[tokio::test]
async fn test_unmount_aborts_pending_load() {
    let doc = Document::new();
    let select = Select::new(SelectProps::new().options(OptionSource::loader(|_| async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(fruit())
    })));
    select.mount(&doc);
    select.open_dropdown(None);
    select.unmount();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(select.load_state().is_loading());
    assert!(select.options().is_empty());
}

#[tokio::test]
async fn test_loading_row_until_resolved() {
    let select = Select::new(SelectProps::new().options(OptionSource::loader(|_| async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Ok(fruit())
    })));
    select.open_dropdown(None);

    let loading = format!("{}-loading", select.dropdown_id());
    let root = select.render();
    assert!(tuidom::find_element(&root, &loading).is_some());

    select.settle().await;
    let root = select.render();
    assert!(tuidom::find_element(&root, &loading).is_none());
    assert!(tuidom::find_element(&root, &select.option_id(1)).is_some());
}
