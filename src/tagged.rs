use std::collections::{HashMap};
use std::{fmt};

use tracing::{debug};

use super::{Case, Error, Result, Tag, Value};

type Handler<'a, R> = Box<dyn Fn(&Value) -> R + 'a>;

/// A jump table from [`Tag`] to handler, with an optional wildcard.
///
/// Nothing checks ahead of time that every tag of a
/// [`Registry`](super::Registry) is covered. A tag with no handler falls back
/// to the wildcard, or fails when dispatched.
pub struct Cases<'a, R> {
    table: HashMap<Tag, Handler<'a, R>>,
    wildcard: Option<Handler<'a, R>>,
}

impl<'a, R> Cases<'a, R> {
    pub fn new() -> Self { Self {table: HashMap::new(), wildcard: None} }

    /// Handles values tagged `tag`, replacing any previous handler for it.
    pub fn on(mut self, tag: impl Into<Tag>, handler: impl Fn(&Value) -> R + 'a) -> Self {
        self.insert(Case::Key(tag.into()), handler);
        self
    }

    /// Handles every tag that has no handler of its own.
    pub fn otherwise(mut self, handler: impl Fn(&Value) -> R + 'a) -> Self {
        self.insert(Case::Wildcard, handler);
        self
    }

    pub fn insert(&mut self, case: Case<Tag>, handler: impl Fn(&Value) -> R + 'a) {
        match case {
            Case::Key(tag) => { self.table.insert(tag, Box::new(handler)); },
            Case::Wildcard => { self.wildcard = Some(Box::new(handler)); },
        }
    }

    /// Returns `true` if a value tagged `tag` would be handled.
    pub fn handles(&self, tag: &Tag) -> bool {
        self.wildcard.is_some() || self.table.contains_key(tag)
    }
}

impl<R> std::default::Default for Cases<'_, R> {
    fn default() -> Self { Self::new() }
}

impl<R> fmt::Debug for Cases<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cases")
            .field("tags", &self.table.keys().collect::<Vec<_>>())
            .field("wildcard", &self.wildcard.is_some())
            .finish()
    }
}

// ----------------------------------------------------------------------------

/// A value of a sum type: a [`Tag`] and the payload computed when the value
/// was made.
///
/// The tag and payload are only observable through [`Tagged::dispatch()`].
#[derive(Clone)]
pub struct Tagged {
    tag: Tag,
    payload: Value,
}

impl Tagged {
    pub fn new(tag: impl Into<Tag>, payload: Value) -> Self {
        Self {tag: tag.into(), payload}
    }

    /// Applies the handler in `cases` for `self`'s tag to `self`'s payload.
    pub fn dispatch<R>(&self, cases: &Cases<'_, R>) -> Result<R> { dispatch(self, cases) }
}

impl fmt::Debug for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Tagged").field(&self.tag).field(&self.payload).finish()
    }
}

/// Switches on the tag of `tagged`.
///
/// Uses `cases`' handler for the tag if there is one, otherwise its wildcard.
/// Fails with [`Error::UnhandledVariant`] if there is neither.
pub fn dispatch<R>(tagged: &Tagged, cases: &Cases<'_, R>) -> Result<R> {
    if let Some(handler) = cases.table.get(&tagged.tag) {
        return Ok(handler(&tagged.payload));
    }
    if let Some(wildcard) = &cases.wildcard {
        debug!(tag = %tagged.tag, "variant handled by wildcard");
        return Ok(wildcard(&tagged.payload));
    }
    debug!(tag = %tagged.tag, "unhandled variant");
    Err(Error::UnhandledVariant(tagged.tag.clone()))
}

// ----------------------------------------------------------------------------
