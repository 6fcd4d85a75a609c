//! # Weave Core
//!
//! Core types, traits, and error handling for the Weave workflow builder.
//!
//! This crate provides the foundational building blocks used by the
//! workflow model and the desktop UI:
//!
//! - **Types**: geometric primitives (Position, Size, Rect) and id aliases
//! - **Values**: the `ConfigValue` tree stored in node data, with dotted-path
//!   access through [`ConfigPath`]
//! - **Traits**: common behaviors like `Validatable` and `Persistable`
//! - **Errors**: unified error handling with `WeaveError` and `WeaveResult`
//!

pub mod error;
pub mod path;
pub mod traits;
pub mod types;
pub mod value;

// Re-export commonly used items at crate root
pub use error::{ResultExt, WeaveError, WeaveResult};
pub use path::ConfigPath;
pub use traits::{Persistable, Positioned, Validatable};
pub use types::{EdgeId, NodeId, Position, Rect, Size};
pub use value::{ConfigMap, ConfigValue, ValueKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
