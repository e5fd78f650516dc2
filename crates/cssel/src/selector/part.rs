//! Selector part kinds and their precedence.
//!
//! A compound selector renders its parts in a fixed order:
//!
//! ```text
//! element#id.class[attr]:pseudo-class::pseudo-element
//! ```
//!
//! Each [`PartKind`] carries a rank in that order. A fragment remembers which
//! kinds it has committed in a [`PartSet`]; adding a part is legal only when
//! nothing of a higher rank has been committed yet.

use std::fmt;

use bitflags::bitflags;

/// One kind of simple selector, ordered by rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PartKind {
    Element = 0,
    Id = 1,
    Class = 2,
    Attribute = 3,
    PseudoClass = 4,
    PseudoElement = 5,
}

impl PartKind {
    /// All kinds, lowest rank first.
    pub const ALL: [PartKind; 6] = [
        PartKind::Element,
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
        PartKind::PseudoElement,
    ];

    /// Position in the rendering order (0 = element).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Whether the kind may occur at most once in a fragment.
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            PartKind::Element | PartKind::Id | PartKind::PseudoElement
        )
    }

    /// Text rendered before the part's value.
    pub fn prefix(self) -> &'static str {
        match self {
            PartKind::Element => "",
            PartKind::Id => "#",
            PartKind::Class => ".",
            PartKind::Attribute => "[",
            PartKind::PseudoClass => ":",
            PartKind::PseudoElement => "::",
        }
    }

    /// Text rendered after the part's value.
    pub fn suffix(self) -> &'static str {
        match self {
            PartKind::Attribute => "]",
            _ => "",
        }
    }

    /// The flag for this kind inside a [`PartSet`].
    pub fn flag(self) -> PartSet {
        PartSet::from_bits_truncate(1 << self.rank())
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartKind::Element => "element",
            PartKind::Id => "id",
            PartKind::Class => "class",
            PartKind::Attribute => "attribute",
            PartKind::PseudoClass => "pseudo-class",
            PartKind::PseudoElement => "pseudo-element",
        };
        f.write_str(name)
    }
}

bitflags! {
    /// The set of part kinds a fragment has committed.
    ///
    /// Bit `n` corresponds to the kind with rank `n`.
    ///
    /// # Example
    ///
    /// ```
    /// use cssel::{PartKind, PartSet};
    ///
    /// let mut set = PartSet::empty();
    /// set |= PartKind::Class.flag();
    ///
    /// assert!(set.has_above(PartKind::Id));
    /// assert!(!set.has_above(PartKind::Class));
    /// assert_eq!(set.highest(), Some(PartKind::Class));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PartSet: u8 {
        const ELEMENT        = 0b0000_0001;
        const ID             = 0b0000_0010;
        const CLASS          = 0b0000_0100;
        const ATTRIBUTE      = 0b0000_1000;
        const PSEUDO_CLASS   = 0b0001_0000;
        const PSEUDO_ELEMENT = 0b0010_0000;
    }
}

impl PartSet {
    /// True when a kind ranked strictly above `kind` is in the set.
    pub fn has_above(self, kind: PartKind) -> bool {
        let at_or_below = (kind.flag().bits() << 1) - 1;
        self.bits() & !at_or_below != 0
    }

    /// The highest-ranked committed kind.
    pub fn highest(self) -> Option<PartKind> {
        PartKind::ALL
            .iter()
            .rev()
            .copied()
            .find(|kind| self.contains(kind.flag()))
    }
}
