use std::{fmt, hash};
use std::rc::{Rc};

use super::{Name};

/// A unique identity, usable as a [`Tag`](super::Tag) or as a literal.
///
/// A `Symbol` is equal only to its own clones. The description is for
/// diagnostics and plays no part in equality.
#[derive(Clone)]
pub struct Symbol(Rc<Option<Name>>);

impl Symbol {
    /// Creates a fresh `Symbol` with no description.
    pub fn new() -> Self { Self(Rc::new(None)) }

    /// Creates a fresh `Symbol`.
    pub fn with_description(description: impl Into<Name>) -> Self {
        Self(Rc::new(Some(description.into())))
    }

    pub fn description(&self) -> Option<&str> { self.0.as_deref() }
}

impl std::default::Default for Symbol {
    fn default() -> Self { Self::new() }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }
}

impl Eq for Symbol {}

impl hash::Hash for Symbol {
    fn hash<H: hash::Hasher>(&self, state: &mut H) { Rc::as_ptr(&self.0).hash(state) }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(self, f) }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}
