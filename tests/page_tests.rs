//! Tests for page lifecycle glue

use chrono::Datelike;
use judge0_ide::config::{ConfigStore, Theme};
use judge0_ide::dropdown::{ClickOutcome, Document, DropdownState};
use judge0_ide::page::{Page, PageEvent, YEAR_ELEMENT_ID};
use judge0_ide::storage::{MemoryStorage, QueryParams};

fn ide_page() -> Page<MemoryStorage, QueryParams> {
    let mut doc = Document::new();
    let body = doc.body();
    doc.set_attribute(body, "style", "visibility: hidden");

    let dropdown = doc.append(body, "div", &["judge0-dropdown"]);
    let button = doc.append(dropdown, "button", &["judge0-dropdown-btn"]);
    doc.set_id(button, "theme-button");
    let menu = doc.append(dropdown, "div", &["judge0-dropdown-menu", "hidden"]);
    let option = doc.append(menu, "div", &["judge0-dropdown-option"]);
    doc.set_text(option, "Light");
    doc.set_id(option, "theme-light");

    let footer = doc.append(body, "footer", &[]);
    let year = doc.append(footer, "span", &[]);
    doc.set_id(year, YEAR_ELEMENT_ID);

    let store = ConfigStore::new(
        MemoryStorage::with_entries([("theme", "dark")]),
        QueryParams::empty(),
    );
    Page::new(doc, store)
}

#[test]
fn test_dom_content_loaded_stamps_year_and_loads_configuration() {
    let mut page = ide_page();
    assert_eq!(page.dispatch(PageEvent::DomContentLoaded), None);

    let year = page.document().get_element_by_id(YEAR_ELEMENT_ID).unwrap();
    let text = page.document().text(year);
    let now = chrono::Local::now().year();
    assert!(
        text == now.to_string() || text == (now - 1).to_string(),
        "unexpected year {}",
        text
    );
    assert_eq!(page.store().configuration().theme, Theme::Dark);
}

#[test]
fn test_load_reveals_body() {
    let mut page = ide_page();
    let body = page.document().body();
    assert!(page.document().attribute(body, "style").is_some());

    page.dispatch(PageEvent::Load);
    assert_eq!(page.document().attribute(body, "style"), None);
}

#[test]
fn test_clicks_route_to_dropdowns() {
    let mut page = ide_page();
    let button = page.document().get_element_by_id("theme-button").unwrap();
    let option = page.document().get_element_by_id("theme-light").unwrap();

    let Some(ClickOutcome::Toggled { dropdown, state }) = page.dispatch(PageEvent::Click(button))
    else {
        panic!("expected the dropdown to toggle");
    };
    assert_eq!(state, DropdownState::Open);

    assert_eq!(
        page.dispatch(PageEvent::Click(option)),
        Some(ClickOutcome::Selected {
            dropdown,
            text: "Light".to_string()
        })
    );
    assert_eq!(
        page.dropdowns().state(page.document(), dropdown),
        DropdownState::Closed
    );
}

#[test]
fn test_selection_can_drive_configuration() {
    let mut page = ide_page();
    let button = page.document().get_element_by_id("theme-button").unwrap();
    let option = page.document().get_element_by_id("theme-light").unwrap();

    page.dispatch(PageEvent::Click(button));
    if let Some(ClickOutcome::Selected { text, .. }) = page.dispatch(PageEvent::Click(option)) {
        page.store_mut().set("theme", text.to_lowercase(), false);
    }
    assert_eq!(page.store().configuration().theme, Theme::Light);
}
