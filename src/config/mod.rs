//! Configuration system for the Judge0 IDE
//!
//! A typed settings tree layered from compiled-in style presets, values in
//! persistent storage, and URL query parameters. Leaves are addressed by
//! dot-paths such as `appOptions.ioLayout`.

pub mod legal;
pub mod overrides;
pub mod path;
pub mod paths;
pub mod presets;
pub mod schema;
pub mod store;
pub mod value;

pub use overrides::{LoadedOverrides, QUERY_PREFIX};
pub use path::{ConfigKey, Group, LeafKind};
pub use presets::preset;
pub use schema::{AppOptions, Configuration, Layout, Style, StyleOptions, Theme};
pub use store::ConfigStore;
pub use value::{coerce_override, ConfigValue};
