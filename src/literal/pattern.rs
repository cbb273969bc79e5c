use std::rc::{Rc};

use super::{Literal, Symbol};

/// Separates the candidates of a [`Pattern`] written as text.
pub const DELIMITER: char = '|';

/// One literal that a [`Pattern`] accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// A literal written as text, as it appears in a pattern key.
    ///
    /// The text is interpreted according to the type of the value it is
    /// compared with: `"3"` matches the number `3` and the string `"3"`, and
    /// `"true"` matches the boolean `true` and the string `"true"`. An `Int`
    /// matches only integer text, so `"3.0"` and `"3e0"` do not match
    /// `Int(3)`. Text never matches a [`Symbol`].
    Text(Rc<str>),

    /// A typed literal, compared with [`Literal::same`].
    Literal(Literal),
}

impl Candidate {
    /// Returns `true` if `value` equals `self`.
    pub fn matches(&self, value: &Literal) -> bool {
        match self {
            Self::Text(text) => matches_text(value, text),
            Self::Literal(literal) => literal.same(value),
        }
    }
}

/// Compares `value` with the literal spelled `text`.
fn matches_text(value: &Literal, text: &str) -> bool {
    match value {
        Literal::Str(s) => &**s == text,
        Literal::Bool(b) => text == if *b { "true" } else { "false" },
        Literal::Int(i) => text.parse::<i64>().map_or(false, |n| n == *i),
        Literal::Float(x) => text.parse::<f64>().map_or(false, |n| n == *x),
        Literal::Symbol(_) => false,
    }
}

// ----------------------------------------------------------------------------

/// The set of literals handled by one arm of a
/// [`LiteralCases`](super::LiteralCases).
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern(Box<[Candidate]>);

impl Pattern {
    /// Parses `key` as candidates separated by [`DELIMITER`].
    ///
    /// Each candidate is trimmed, so `"1 | 2 | 3"` has the three candidates
    /// `"1"`, `"2"` and `"3"`. A string containing the delimiter cannot be
    /// expressed this way; use [`Pattern::any_of()`] for that.
    pub fn parse(key: &str) -> Self { Self::parse_with(key, DELIMITER) }

    /// Parses `key` as candidates separated by `delimiter`.
    pub fn parse_with(key: &str, delimiter: char) -> Self {
        Self(key.split(delimiter).map(|text| Candidate::Text(text.trim().into())).collect())
    }

    /// A pattern accepting exactly `literals`, with no parsing.
    pub fn any_of<L: Into<Literal>>(literals: impl IntoIterator<Item=L>) -> Self {
        Self(literals.into_iter().map(|l| Candidate::Literal(l.into())).collect())
    }

    pub fn candidates(&self) -> &[Candidate] { &self.0 }

    /// Returns `true` if any candidate matches `value`.
    pub fn matches(&self, value: &Literal) -> bool {
        self.0.iter().any(|candidate| candidate.matches(value))
    }
}

impl From<&str> for Pattern { fn from(key: &str) -> Self { Self::parse(key) } }
impl From<String> for Pattern { fn from(key: String) -> Self { Self::parse(&key) } }
impl From<Literal> for Pattern { fn from(v: Literal) -> Self { Self::any_of([v]) } }
impl From<bool> for Pattern { fn from(v: bool) -> Self { Self::any_of([v]) } }
impl From<i64> for Pattern { fn from(v: i64) -> Self { Self::any_of([v]) } }
impl From<i32> for Pattern { fn from(v: i32) -> Self { Self::any_of([v]) } }
impl From<f64> for Pattern { fn from(v: f64) -> Self { Self::any_of([v]) } }
impl From<Symbol> for Pattern { fn from(v: Symbol) -> Self { Self::any_of([v]) } }
impl From<&Symbol> for Pattern { fn from(v: &Symbol) -> Self { Self::any_of([v.clone()]) } }

// ----------------------------------------------------------------------------
