use std::fmt;

use crate::error::{Result, SelectorError};
use crate::selector::{PartKind, PartSet};

/// A compound selector under construction, e.g. `a#nav.link[href]:hover`.
///
/// Mutators take the fragment by value and hand it back, so calls chain
/// with `?`. Parts must be added in rank order (see [`PartKind`]).
///
/// # Example
///
/// ```
/// use cssel::SelectorFragment;
///
/// let fragment = SelectorFragment::new()
///     .id("main")?
///     .class("container")?
///     .class("editable")?;
/// assert_eq!(fragment.stringify(), "#main.container.editable");
/// # Ok::<(), cssel::SelectorError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectorFragment {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
    committed: PartSet,
}

impl SelectorFragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fragment holding a single part.
    ///
    /// An empty fragment accepts any first part, so this cannot fail.
    pub(crate) fn with_part(kind: PartKind, value: impl Into<String>) -> Self {
        let mut fragment = Self::default();
        fragment.store(kind, value.into());
        fragment
    }

    pub fn element(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::Element, value.into())
    }

    pub fn id(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::Id, value.into())
    }

    pub fn class(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::Class, value.into())
    }

    /// Adds an attribute selector. `value` is the body between the brackets,
    /// e.g. `href$=".png"`.
    pub fn attr(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::Attribute, value.into())
    }

    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::PseudoClass, value.into())
    }

    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self> {
        self.push(PartKind::PseudoElement, value.into())
    }

    /// Validates and commits one part.
    fn push(mut self, kind: PartKind, value: String) -> Result<Self> {
        self.check(kind)?;
        self.store(kind, value);
        Ok(self)
    }

    /// Checks uniqueness first, then ordering.
    fn check(&self, kind: PartKind) -> Result<()> {
        if kind.is_unique() && self.committed.contains(kind.flag()) {
            return Err(SelectorError::DuplicatePart(kind));
        }
        if self.committed.has_above(kind) {
            // has_above implies a non-empty set
            let after = self.committed.highest().unwrap_or(kind);
            return Err(SelectorError::OutOfOrder { part: kind, after });
        }
        Ok(())
    }

    fn store(&mut self, kind: PartKind, value: String) {
        log::trace!("selector: commit {} {:?}", kind, value);
        match kind {
            PartKind::Element => self.element = Some(value),
            PartKind::Id => self.id = Some(value),
            PartKind::Class => self.classes.push(value),
            PartKind::Attribute => self.attributes.push(value),
            PartKind::PseudoClass => self.pseudo_classes.push(value),
            PartKind::PseudoElement => self.pseudo_element = Some(value),
        }
        self.committed |= kind.flag();
    }

    /// Renders the fragment as CSS text. Does not change the fragment.
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn id_name(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// The kinds committed so far.
    pub fn committed(&self) -> PartSet {
        self.committed
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

impl fmt::Display for SelectorFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: [(PartKind, &[String]); 6] = [
            (PartKind::Element, self.element.as_slice()),
            (PartKind::Id, self.id.as_slice()),
            (PartKind::Class, &self.classes),
            (PartKind::Attribute, &self.attributes),
            (PartKind::PseudoClass, &self.pseudo_classes),
            (PartKind::PseudoElement, self.pseudo_element.as_slice()),
        ];
        for (kind, values) in groups {
            for value in values {
                write!(f, "{}{}{}", kind.prefix(), value, kind.suffix())?;
            }
        }
        Ok(())
    }
}
