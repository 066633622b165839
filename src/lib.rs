//! Judge0 IDE settings and UI wiring
//!
//! This library provides the client-side pieces of the Judge0 online IDE
//! that are independent of the editor itself:
//! - [`config`]: a typed settings store layered from style presets,
//!   persistent storage and URL query parameters
//! - [`dropdown`]: class-driven dropdown menus over a small element tree
//! - [`page`]: page-load glue routing events to both

pub mod config;
pub mod dropdown;
pub mod page;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::{ConfigKey, ConfigStore, ConfigValue, Configuration};
pub use dropdown::{ClickOutcome, Document, DropdownController, DropdownState, NodeId};
pub use page::{Page, PageEvent};
pub use storage::{FileStorage, MemoryStorage, QueryParams, QuerySource, Storage};
