//! The selector factory.
//!
//! [`SelectorBuilder`] holds no per-selector state: every constructor starts
//! a fresh [`SelectorFragment`], so two calls never interfere.

use crate::error::{Result, SelectorError};
use crate::selector::{Combinator, CombinedSelector, PartKind, Selector, SelectorFragment};

/// How [`SelectorBuilder::combine`] treats tokens outside `' '`, `'>'`, `'+'`, `'~'`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CombinatorPolicy {
    /// Unknown tokens are rendered verbatim.
    #[default]
    Permissive,
    /// Unknown tokens fail with [`SelectorError::UnsupportedCombinator`].
    Strict,
}

/// Settings for a [`SelectorBuilder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    pub combinator_policy: CombinatorPolicy,
}

impl BuilderConfig {
    pub fn strict() -> Self {
        Self {
            combinator_policy: CombinatorPolicy::Strict,
        }
    }
}

/// Entry point for building selectors.
///
/// # Example
///
/// ```
/// use cssel::SelectorBuilder;
///
/// let builder = SelectorBuilder::new();
/// let selector = builder.combine(
///     builder.element("ul").class("menu")?,
///     ">",
///     builder.element("li").pseudo_class("first-child")?,
/// )?;
/// assert_eq!(selector.stringify(), "ul.menu > li:first-child");
/// # Ok::<(), cssel::SelectorError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SelectorBuilder {
    config: BuilderConfig,
}

impl SelectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> BuilderConfig {
        self.config
    }

    pub fn element(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::with_part(PartKind::Element, value)
    }

    pub fn id(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::with_part(PartKind::Id, value)
    }

    pub fn class(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::with_part(PartKind::Class, value)
    }

    pub fn attr(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::with_part(PartKind::Attribute, value)
    }

    pub fn pseudo_class(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::with_part(PartKind::PseudoClass, value)
    }

    pub fn pseudo_element(&self, value: impl Into<String>) -> SelectorFragment {
        SelectorFragment::with_part(PartKind::PseudoElement, value)
    }

    /// Joins two selectors with a combinator token.
    ///
    /// Only fails under [`CombinatorPolicy::Strict`].
    pub fn combine(
        &self,
        left: impl Into<Selector>,
        token: &str,
        right: impl Into<Selector>,
    ) -> Result<Selector> {
        let combinator = Combinator::parse(token);
        if !combinator.is_known() && self.config.combinator_policy == CombinatorPolicy::Strict {
            return Err(SelectorError::UnsupportedCombinator(token.to_string()));
        }
        log::trace!("selector: combine with {:?}", combinator);
        Ok(CombinedSelector::new(left, combinator, right).into())
    }
}
