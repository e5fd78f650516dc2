//! Fluent CSS selector building, plus small JSON object helpers.
//!
//! ```
//! use cssbuild::SelectorBuilder;
//!
//! let builder = SelectorBuilder::new();
//! let selector = builder.id("main").class("container")?.class("editable")?;
//! assert_eq!(selector.stringify(), "#main.container.editable");
//! # Ok::<(), cssbuild::CssBuildError>(())
//! ```

pub mod error;
pub mod log_init;

pub use cssel::{
    BuilderConfig, Combinator, CombinatorPolicy, CombinedSelector, PartKind, Selector,
    SelectorBuilder, SelectorError, SelectorFragment,
};
pub use error::{CssBuildError, Result};
pub use log_init::init_logger;
pub use objects::{ObjectError, Rectangle, from_json, to_json};
