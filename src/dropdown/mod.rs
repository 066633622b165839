// Dropdown menus
//
// A single document-level click handler opens, closes and commits
// selections for every element following the dropdown class convention.

pub mod controller;
pub mod dom;

pub use controller::{ClickOutcome, DropdownClasses, DropdownController, DropdownState};
pub use dom::{Document, Element, NodeId};
