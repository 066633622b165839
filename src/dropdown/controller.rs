//! Click handling for class-marked dropdowns
//!
//! A dropdown is made of:
//! 1. A wrapper element with class `judge0-dropdown`.
//! 2. A trigger with class `judge0-dropdown-btn`.
//! 3. A `span` with class `judge0-dropdown-value` showing the selection.
//! 4. A menu with class `judge0-dropdown-menu` holding the options.
//! 5. Options with class `judge0-dropdown-option`.
//!
//! Dropdowns that are not selects can leave out (3) and (5). A menu
//! carrying the `hidden` class is closed.

use super::dom::{Document, NodeId};

/// Class names forming the markup contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownClasses {
    pub dropdown: String,
    pub button: String,
    pub value: String,
    pub menu: String,
    pub option: String,
    pub hidden: String,
}

impl Default for DropdownClasses {
    fn default() -> Self {
        Self {
            dropdown: "judge0-dropdown".to_string(),
            button: "judge0-dropdown-btn".to_string(),
            value: "judge0-dropdown-value".to_string(),
            menu: "judge0-dropdown-menu".to_string(),
            option: "judge0-dropdown-option".to_string(),
            hidden: "hidden".to_string(),
        }
    }
}

/// Whether a dropdown's menu is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Open,
    Closed,
}

/// What a click did to the dropdown it landed in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The trigger was clicked and the menu flipped to `state`
    Toggled {
        dropdown: NodeId,
        state: DropdownState,
    },
    /// An option was picked and its text copied to the value display
    Selected { dropdown: NodeId, text: String },
    /// The click did not land on a trigger or option
    Ignored,
}

/// Document-level click listener for dropdowns
#[derive(Debug, Clone, Default)]
pub struct DropdownController {
    classes: DropdownClasses,
}

impl DropdownController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(classes: DropdownClasses) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &DropdownClasses {
        &self.classes
    }

    /// Menu element of a dropdown
    pub fn menu(&self, doc: &Document, dropdown: NodeId) -> Option<NodeId> {
        doc.query_selector(dropdown, &self.classes.menu, None)
    }

    /// Current state of a dropdown; one without a menu counts as closed
    pub fn state(&self, doc: &Document, dropdown: NodeId) -> DropdownState {
        match self.menu(doc, dropdown) {
            Some(menu) if !doc.has_class(menu, &self.classes.hidden) => DropdownState::Open,
            _ => DropdownState::Closed,
        }
    }

    /// Text shown in a dropdown's value display, if it has one
    pub fn displayed_value(&self, doc: &Document, dropdown: NodeId) -> Option<String> {
        doc.query_selector(dropdown, &self.classes.value, Some("span"))
            .map(|span| doc.text(span))
    }

    /// React to a click on `target`
    ///
    /// A trigger click toggles its own dropdown. An option click copies the
    /// option text into the value display and closes the dropdown. Then
    /// every menu that neither contains the target nor belongs to the
    /// dropdown that was clicked is closed.
    pub fn handle_click(&self, doc: &mut Document, target: NodeId) -> ClickOutcome {
        let dropdown = doc.closest(target, &self.classes.dropdown);
        let button = doc.closest(target, &self.classes.button);

        let outcome = match (dropdown, button) {
            (Some(dropdown), Some(_)) => self.toggle(doc, dropdown),
            (Some(dropdown), None) if doc.has_class(target, &self.classes.option) => {
                self.select(doc, dropdown, target)
            }
            _ => ClickOutcome::Ignored,
        };

        for menu in doc.query_selector_all(&self.classes.menu) {
            if doc.contains(menu, target) {
                continue;
            }
            let owner = doc.closest(menu, &self.classes.dropdown);
            if owner != dropdown && !doc.has_class(menu, &self.classes.hidden) {
                doc.add_class(menu, &self.classes.hidden);
                tracing::debug!("Closed dropdown menu {:?}", menu);
            }
        }

        outcome
    }

    fn toggle(&self, doc: &mut Document, dropdown: NodeId) -> ClickOutcome {
        let Some(menu) = self.menu(doc, dropdown) else {
            return ClickOutcome::Ignored;
        };
        let hidden = doc.toggle_class(menu, &self.classes.hidden);
        let state = if hidden {
            DropdownState::Closed
        } else {
            DropdownState::Open
        };
        tracing::debug!("Dropdown {:?} now {:?}", dropdown, state);
        ClickOutcome::Toggled { dropdown, state }
    }

    fn select(&self, doc: &mut Document, dropdown: NodeId, option: NodeId) -> ClickOutcome {
        let text = doc.text(option);
        if let Some(span) = doc.query_selector(dropdown, &self.classes.value, Some("span")) {
            doc.set_text(span, &text);
        }
        if let Some(menu) = self.menu(doc, dropdown) {
            doc.add_class(menu, &self.classes.hidden);
        }
        tracing::debug!("Dropdown {:?} selected {:?}", dropdown, text);
        ClickOutcome::Selected { dropdown, text }
    }
}
