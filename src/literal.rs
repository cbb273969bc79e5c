//! Dispatch over primitive values.
//!
//! [`match_literal()`] classifies a [`Literal`] by trying the [`Pattern`]s of
//! a [`LiteralCases`] in the order they were added. The first pattern that
//! contains the value wins. If none does, the wildcard handles the value, and
//! if there is no wildcard the dispatch fails with
//! [`Error::UnhandledLiteral`].

use std::{fmt};
use std::rc::{Rc};

use tracing::{debug};

use super::{Case, Error, Result, Symbol, Value};

mod pattern;
pub use pattern::{DELIMITER, Candidate, Pattern};

/// A primitive value that can be dispatched by [`match_literal()`].
#[derive(Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Rc<str>),
    Symbol(Symbol),
}

impl Literal {
    /// Typed equality, under which numbers compare numerically.
    ///
    /// Unlike `==`, `Int(3)` is the same as `Float(3.0)`. The comparison is
    /// exact: an `Int` is the same as a `Float` only if the float holds
    /// exactly that integer.
    pub fn same(&self, other: &Literal) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => int_equals_float(*a, *b),
            _ => self == other,
        }
    }
}

/// Returns `true` if `x` is exactly the integer `i`.
fn int_equals_float(i: i64, x: f64) -> bool {
    // `LOW` is exactly -2^63, and `-LOW` is one past `i64::MAX`.
    const LOW: f64 = i64::MIN as f64;
    x.fract() == 0.0 && x >= LOW && x < -LOW && x as i64 == i
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bool(b) => b.fmt(f),
            Self::Int(i) => i.fmt(f),
            Self::Float(x) => x.fmt(f),
            Self::Str(s) => s.fmt(f),
            Self::Symbol(symbol) => symbol.fmt(f),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bool(b) => b.fmt(f),
            Self::Int(i) => i.fmt(f),
            Self::Float(x) => x.fmt(f),
            Self::Str(s) => f.write_str(s),
            Self::Symbol(symbol) => symbol.fmt(f),
        }
    }
}

impl From<bool> for Literal { fn from(v: bool) -> Self { Self::Bool(v) } }
impl From<i64> for Literal { fn from(v: i64) -> Self { Self::Int(v) } }
impl From<i32> for Literal { fn from(v: i32) -> Self { Self::Int(v.into()) } }
impl From<f64> for Literal { fn from(v: f64) -> Self { Self::Float(v) } }
impl From<&str> for Literal { fn from(v: &str) -> Self { Self::Str(v.into()) } }
impl From<String> for Literal { fn from(v: String) -> Self { Self::Str(v.into()) } }
impl From<Symbol> for Literal { fn from(v: Symbol) -> Self { Self::Symbol(v) } }

impl From<Literal> for Value {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Bool(b) => Value::Bool(b),
            Literal::Int(i) => Value::Int(i),
            Literal::Float(x) => Value::Float(x),
            Literal::Str(s) => Value::Str(s),
            Literal::Symbol(symbol) => Value::Symbol(symbol),
        }
    }
}

// ----------------------------------------------------------------------------

type Handler<'a, R> = Box<dyn Fn(&Literal) -> R + 'a>;

/// An ordered list of [`Pattern`]s and their handlers, with an optional
/// wildcard.
pub struct LiteralCases<'a, R> {
    arms: Vec<(Pattern, Handler<'a, R>)>,
    wildcard: Option<Handler<'a, R>>,
}

impl<'a, R> LiteralCases<'a, R> {
    pub fn new() -> Self { Self {arms: Vec::new(), wildcard: None} }

    /// Appends an arm handling the literals in `pattern`.
    pub fn on(mut self, pattern: impl Into<Pattern>, handler: impl Fn(&Literal) -> R + 'a) -> Self {
        self.insert(Case::Key(pattern.into()), handler);
        self
    }

    /// Sets the wildcard handler, replacing any previous one.
    pub fn otherwise(mut self, handler: impl Fn(&Literal) -> R + 'a) -> Self {
        self.insert(Case::Wildcard, handler);
        self
    }

    pub fn insert(&mut self, case: Case<Pattern>, handler: impl Fn(&Literal) -> R + 'a) {
        match case {
            Case::Key(pattern) => self.arms.push((pattern, Box::new(handler))),
            Case::Wildcard => self.wildcard = Some(Box::new(handler)),
        }
    }

    pub fn has_wildcard(&self) -> bool { self.wildcard.is_some() }

    /// Finds the first arm matching `value` and applies it.
    pub fn dispatch(&self, value: &Literal) -> Result<R> {
        if let Some((_, handler)) = self.arms.iter().find(|(pattern, _)| pattern.matches(value)) {
            return Ok(handler(value));
        }
        if let Some(wildcard) = &self.wildcard {
            debug!(value = %value, "literal handled by wildcard");
            return Ok(wildcard(value));
        }
        debug!(value = %value, "unhandled literal");
        Err(Error::UnhandledLiteral(value.clone()))
    }
}

impl<R> std::default::Default for LiteralCases<'_, R> {
    fn default() -> Self { Self::new() }
}

impl<R> fmt::Debug for LiteralCases<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LiteralCases")
            .field("patterns", &self.arms.iter().map(|(pattern, _)| pattern).collect::<Vec<_>>())
            .field("wildcard", &self.wildcard.is_some())
            .finish()
    }
}

/// Dispatches `value` to the first arm of `cases` whose pattern contains it.
pub fn match_literal<R>(value: impl Into<Literal>, cases: &LiteralCases<'_, R>) -> Result<R> {
    cases.dispatch(&value.into())
}

// ----------------------------------------------------------------------------
