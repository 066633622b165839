//! Page lifecycle glue
//!
//! Owns the document, the configuration store and the dropdown controller,
//! and routes page events to them. The store and the controller never see
//! each other.

use crate::config::ConfigStore;
use crate::dropdown::{ClickOutcome, Document, DropdownController, NodeId};
use crate::storage::{QuerySource, Storage};
use chrono::Datelike;

/// Id of the element showing the copyright year
pub const YEAR_ELEMENT_ID: &str = "judge0-year";

/// Events delivered by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The markup has been parsed
    DomContentLoaded,
    /// All resources have finished loading
    Load,
    /// A click landed on an element
    Click(NodeId),
}

/// A loaded IDE page
pub struct Page<S, Q> {
    document: Document,
    store: ConfigStore<S, Q>,
    dropdowns: DropdownController,
}

impl<S: Storage, Q: QuerySource> Page<S, Q> {
    pub fn new(document: Document, store: ConfigStore<S, Q>) -> Self {
        Self {
            document,
            store,
            dropdowns: DropdownController::new(),
        }
    }

    pub fn with_dropdowns(mut self, dropdowns: DropdownController) -> Self {
        self.dropdowns = dropdowns;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn store(&self) -> &ConfigStore<S, Q> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConfigStore<S, Q> {
        &mut self.store
    }

    pub fn dropdowns(&self) -> &DropdownController {
        &self.dropdowns
    }

    /// Route an event; clicks report what they did to a dropdown
    pub fn dispatch(&mut self, event: PageEvent) -> Option<ClickOutcome> {
        match event {
            PageEvent::DomContentLoaded => {
                self.store.load();
                stamp_year(&mut self.document, chrono::Local::now().year());
                None
            }
            PageEvent::Load => {
                reveal(&mut self.document);
                None
            }
            PageEvent::Click(target) => {
                Some(self.dropdowns.handle_click(&mut self.document, target))
            }
        }
    }
}

/// Write `year` into the copyright year element, if the page has one
pub fn stamp_year(doc: &mut Document, year: i32) {
    match doc.get_element_by_id(YEAR_ELEMENT_ID) {
        Some(node) => doc.set_text(node, &year.to_string()),
        None => tracing::debug!("No #{} element on page", YEAR_ELEMENT_ID),
    }
}

/// Drop the inline style that keeps the body hidden during load
pub fn reveal(doc: &mut Document) {
    let body = doc.body();
    doc.remove_attribute(body, "style");
}
