//! Selector building blocks.
//!
//! - [`part`]: part kinds, their ranks and the committed-part set
//! - [`fragment`]: [`SelectorFragment`], a single compound selector
//! - [`combinator`]: [`Combinator`] and its token parser
//! - [`combined`]: [`Selector`] and [`CombinedSelector`]
//! - [`builder`]: the [`SelectorBuilder`] factory

pub mod builder;
pub mod combinator;
pub mod combined;
pub mod fragment;
pub mod part;

pub use builder::{BuilderConfig, CombinatorPolicy, SelectorBuilder};
pub use combinator::{Combinator, parse_combinator};
pub use combined::{CombinedSelector, Selector};
pub use fragment::SelectorFragment;
pub use part::{PartKind, PartSet};
