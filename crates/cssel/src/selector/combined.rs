use std::fmt;

use crate::selector::{Combinator, SelectorFragment};

/// Any selector that can be rendered: a single fragment or a combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Fragment(SelectorFragment),
    Combined(CombinedSelector),
}

impl Selector {
    /// Renders the selector as CSS text.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Number of fragments in the tree.
    pub fn fragment_count(&self) -> usize {
        match self {
            Selector::Fragment(_) => 1,
            Selector::Combined(combined) => {
                combined.left.fragment_count() + combined.right.fragment_count()
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Fragment(fragment) => fmt::Display::fmt(fragment, f),
            Selector::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}

impl From<SelectorFragment> for Selector {
    fn from(fragment: SelectorFragment) -> Self {
        Selector::Fragment(fragment)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Selector::Combined(combined)
    }
}

/// `left <combinator> right`, where either side may itself be combined.
///
/// The operands are owned, so the rendered text reflects their state at the
/// time they were combined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinedSelector {
    pub left: Box<Selector>,
    pub combinator: Combinator,
    pub right: Box<Selector>,
}

impl CombinedSelector {
    pub fn new(
        left: impl Into<Selector>,
        combinator: Combinator,
        right: impl Into<Selector>,
    ) -> Self {
        Self {
            left: Box::new(left.into()),
            combinator,
            right: Box::new(right.into()),
        }
    }

    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    // The token is always space-padded: a descendant renders as three spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.combinator.token(), self.right)
    }
}
