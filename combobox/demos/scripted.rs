//! Drives a search select through a scripted session and prints the tree
//! after every step.
//!
//! Run with `cargo run -p combobox --example scripted`; debug logs go to
//! `scripted.log`.

use std::fs::File;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use combobox::prelude::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use simplelog::{Config, LevelFilter, WriteLogger};
use tuidom::Content;

const COUNTRIES: &[(&str, &str)] = &[
    ("be", "Belgium"),
    ("de", "Germany"),
    ("dk", "Denmark"),
    ("fr", "France"),
    ("nl", "Netherlands"),
    ("no", "Norway"),
    ("se", "Sweden"),
];

/// Pretend backend: filters server side and answers after a short delay.
async fn fetch_countries(query: Option<String>) -> Result<Vec<SelectOption>, LoadError> {
    tokio::time::sleep(Duration::from_millis(20)).await;
    let query = query.unwrap_or_default().to_lowercase();
    Ok(COUNTRIES
        .iter()
        .filter(|(_, name)| name.to_lowercase().contains(&query))
        .map(|(id, name)| SelectOption::new(*id, *name))
        .collect())
}

/// Indented outline of the visible tree.
fn outline(element: &Element, depth: usize, out: &mut String) {
    if element.hidden {
        return;
    }
    let indent = "  ".repeat(depth);
    let role = element
        .get_attr("role")
        .map(|role| format!(" [{role}]"))
        .unwrap_or_default();
    match &element.content {
        Content::Text(text) if !text.is_empty() => {
            out.push_str(&format!("{indent}{text}{role}\n"));
        }
        Content::TextInput { value, placeholder, .. } => {
            let shown = if value.is_empty() {
                placeholder.clone().unwrap_or_default()
            } else {
                value.clone()
            };
            out.push_str(&format!("{indent}> {shown}_{role}\n"));
        }
        Content::Children(children) => {
            if !role.is_empty() {
                out.push_str(&format!("{indent}{}\n", role.trim()));
            }
            for child in children {
                outline(child, depth + 1, out);
            }
        }
        _ => {}
    }
}

#[tokio::main]
async fn main() {
    // Set up file logging
    let log_file = File::create("scripted.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // The owner holds the selection
    let proposed: Arc<Mutex<Option<Vec<SelectOption>>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&proposed);

    let select = Select::new(
        SelectProps::new()
            .kind(SelectType::Search)
            .filterable(true)
            .placeholder("Search countries")
            .max_dropdown_height("96px")
            .options(OptionSource::loader(fetch_countries))
            .on_change(move |change| {
                log::info!("owner received {:?} {:?}", change.kind, change.option);
                if let Ok(mut slot) = sink.lock() {
                    *slot = Some(change.selected_options.clone());
                }
            })
            .on_load_error(|err| eprintln!("load failed: {err}")),
    );

    let doc = Document::with_viewport(60, 20);
    select.mount(&doc);

    let input = select.input_id();
    let press = |code: KeyCode| {
        Event::from_crossterm_key(Some(input.clone()), KeyEvent::new(code, KeyModifiers::NONE))
            .expect("demo only sends supported keys")
    };
    let script: Vec<(&str, Vec<Event>)> = vec![
        ("click the field", vec![Event::click(&input)]),
        ("type \"n\"", vec![press(KeyCode::Char('n'))]),
        (
            "type \"e\" and pick the first match",
            vec![
                press(KeyCode::Char('e')),
                press(KeyCode::Down),
                press(KeyCode::Enter),
            ],
        ),
        (
            "clear the query and pick another row",
            vec![
                press(KeyCode::Backspace),
                press(KeyCode::Backspace),
                press(KeyCode::Down),
                press(KeyCode::Down),
                press(KeyCode::Enter),
            ],
        ),
        ("backspace removes the last tag", vec![press(KeyCode::Backspace)]),
        ("click elsewhere", vec![Event::click("elsewhere")]),
    ];

    for (step, events) in script {
        for event in events {
            doc.set_root(page(&select));
            doc.dispatch(&event);
            // Let async loads land before the next keystroke
            select.settle().await;

            let next = proposed.lock().ok().and_then(|mut slot| slot.take());
            if let Some(selected) = next {
                select.set_selected_options(selected);
            }
        }

        let root = page(&select);
        let mut out = String::new();
        outline(&root, 0, &mut out);
        println!("== {step}\n{out}");
        doc.set_root(root);
    }

    select.unmount();
}

fn page(select: &Select) -> Element {
    Element::col()
        .id("page")
        .child(select.render())
        .child(Element::text("(elsewhere)").id("elsewhere").clickable(true))
}
