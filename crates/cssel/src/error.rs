//! Error types for selector building.
//!
//! Every failure is raised by the call that caused it. The fragment the
//! call was made on is consumed, so a rejected part never leaks into a
//! rendered selector.

use thiserror::Error;

use crate::selector::PartKind;

/// Errors that can occur while building a selector.
///
/// # Examples
///
/// ```rust
/// use cssel::{SelectorBuilder, SelectorError, PartKind};
///
/// let builder = SelectorBuilder::new();
/// let err = builder.id("a").id("b").unwrap_err();
/// assert_eq!(err, SelectorError::DuplicatePart(PartKind::Id));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// A single-occurrence part (element, id or pseudo-element) was set twice.
    #[error(
        "Element, id and pseudo-element should not occur more than one time inside the selector (duplicate {0})"
    )]
    DuplicatePart(PartKind),

    /// A part was added after a part that must follow it.
    ///
    /// `after` is the highest-ranked part already committed.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({part} after {after})"
    )]
    OutOfOrder { part: PartKind, after: PartKind },

    /// A combinator token outside `' '`, `'>'`, `'+'`, `'~'` under the strict policy.
    #[error("Unsupported combinator: {0:?}")]
    UnsupportedCombinator(String),
}

/// Result alias for selector operations.
pub type Result<T> = std::result::Result<T, SelectorError>;
