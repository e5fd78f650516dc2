//! # cssel - CSS selector builder
//!
//! A fluent API for assembling CSS selectors from typed parts while
//! enforcing the CSS ordering and cardinality rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssel::SelectorBuilder;
//!
//! let builder = SelectorBuilder::new();
//!
//! let link = builder.element("a").attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(link.stringify(), r#"a[href$=".png"]:focus"#);
//!
//! let selector = builder.combine(
//!     builder.element("div").id("main")?.class("container")?.class("draggable")?,
//!     "+",
//!     builder.combine(
//!         builder.element("table").id("data")?,
//!         "~",
//!         builder.combine(
//!             builder.element("tr").pseudo_class("nth-of-type(even)")?,
//!             " ",
//!             builder.element("td").pseudo_class("nth-of-type(even)")?,
//!         )?,
//!     )?,
//! )?;
//! assert_eq!(
//!     selector.stringify(),
//!     "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
//! );
//! # Ok::<(), cssel::SelectorError>(())
//! ```
//!
//! ## Rules
//!
//! Parts render and must be added in this order:
//!
//! ```text
//! element  #id  .class  [attr]  :pseudo-class  ::pseudo-element
//! ```
//!
//! - Element, id and pseudo-element occur at most once
//!   ([`SelectorError::DuplicatePart`]).
//! - Classes, attributes and pseudo-classes repeat freely.
//! - Adding a part after a higher-ranked one fails with
//!   [`SelectorError::OutOfOrder`].
//!
//! ## Combinators
//!
//! `' '` (descendant), `'>'` (child), `'+'` (adjacent sibling) and `'~'`
//! (general sibling). Other tokens pass through unless the builder uses
//! [`CombinatorPolicy::Strict`].
//!
//! ## Not Supported
//!
//! - Parsing selector text
//! - Matching selectors against a document
//! - Specificity

pub mod error;
pub mod selector;

pub use error::SelectorError;
pub use selector::{
    BuilderConfig, Combinator, CombinatorPolicy, CombinedSelector, PartKind, PartSet, Selector,
    SelectorBuilder, SelectorFragment,
};
