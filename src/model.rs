use std::{fmt};
use std::rc::{Rc};

mod symbol;
pub use symbol::{Symbol};

/// Represents a field or variant name.
pub type Name = Rc<str>;

/// Represents a map from `Name` to `T`.
pub type Map<T> = std::collections::HashMap<Name, T>;

// ----------------------------------------------------------------------------

/// Identifies a variant.
///
/// The key space is open: a variant is named either by a string or by a
/// [`Symbol`]. Two `Tag::Name`s are equal if their text is equal; a
/// `Tag::Symbol` is equal only to itself.
#[derive(Clone, Hash, PartialEq, Eq)]
pub enum Tag {
    Name(Name),
    Symbol(Symbol),
}

impl Tag {
    /// Returns the text of a `Tag::Name`.
    pub fn name(&self) -> Option<&str> {
        if let Self::Name(name) = self { Some(name) } else { None }
    }

    /// Returns the identity of a `Tag::Symbol`.
    pub fn symbol(&self) -> Option<&Symbol> {
        if let Self::Symbol(symbol) = self { Some(symbol) } else { None }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Name(name) => name.fmt(f),
            Self::Symbol(symbol) => symbol.fmt(f),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Symbol(symbol) => symbol.fmt(f),
        }
    }
}

impl From<&str> for Tag { fn from(name: &str) -> Self { Self::Name(name.into()) } }
impl From<String> for Tag { fn from(name: String) -> Self { Self::Name(name.into()) } }
impl From<Name> for Tag { fn from(name: Name) -> Self { Self::Name(name) } }
impl From<Symbol> for Tag { fn from(symbol: Symbol) -> Self { Self::Symbol(symbol) } }
impl From<&Symbol> for Tag { fn from(symbol: &Symbol) -> Self { Self::Symbol(symbol.clone()) } }
impl From<&Tag> for Tag { fn from(tag: &Tag) -> Self { tag.clone() } }

// ----------------------------------------------------------------------------

/// A dynamically typed payload.
///
/// Cloning is cheap: compound values are reference counted and never mutated
/// after construction.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// The payload of a variant that carries no data.
    None,

    Bool(bool),

    Int(i64),

    Float(f64),

    Str(Rc<str>),

    Symbol(Symbol),

    /// Something represented as multiple [`Value`]s, e.g. a tuple.
    Slice(Rc<[Value]>),

    /// Something represented as named fields, e.g. a record.
    Map(Rc<Map<Value>>),
}

impl Value {
    /// Constructs a `Value::Map` from `(name, value)` pairs.
    pub fn record<K: Into<Name>>(fields: impl IntoIterator<Item=(K, Value)>) -> Self {
        Self::Map(Rc::new(fields.into_iter().map(|(k, v)| (k.into(), v)).collect()))
    }

    /// Packs the fields of a variant into one payload.
    ///
    /// No fields make `Value::None`, one field stands for itself, and more
    /// make a `Value::Slice`.
    pub fn tuple(mut fields: Vec<Value>) -> Self {
        match fields.len() {
            0 => Self::None,
            1 => fields.pop().unwrap_or_default(),
            _ => Self::Slice(fields.into()),
        }
    }

    pub fn is_none(&self) -> bool { matches!(self, Self::None) }

    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self { Some(*b) } else { None }
    }

    pub fn as_int(&self) -> Option<i64> {
        if let Self::Int(i) = self { Some(*i) } else { None }
    }

    pub fn as_float(&self) -> Option<f64> {
        if let Self::Float(x) = self { Some(*x) } else { None }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::Str(s) = self { Some(s) } else { None }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        if let Self::Symbol(s) = self { Some(s) } else { None }
    }

    /// Returns the items of a `Value::Slice`.
    pub fn slice(&self) -> Option<&[Value]> {
        if let Self::Slice(values) = self { Some(values) } else { None }
    }

    /// Returns the fields of a `Value::Map`.
    pub fn map(&self) -> Option<&Map<Value>> {
        if let Self::Map(map) = self { Some(map) } else { None }
    }

    /// Returns field `name` of a `Value::Map`.
    pub fn field(&self, name: &str) -> Option<&Value> { self.map()?.get(name) }

    /// Returns the items of a `Value::Slice` of length `N`.
    pub fn unpack<const N: usize>(&self) -> Option<&[Value; N]> {
        self.slice()?.try_into().ok()
    }
}

impl std::default::Default for Value {
    fn default() -> Self { Value::None }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::None => f.debug_tuple("None").finish(),
            Self::Bool(b) => b.fmt(f),
            Self::Int(i) => i.fmt(f),
            Self::Float(x) => x.fmt(f),
            Self::Str(string) => string.fmt(f),
            Self::Symbol(symbol) => symbol.fmt(f),
            Self::Slice(values) => values.fmt(f),
            Self::Map(map) => map.fmt(f),
        }
    }
}

impl From<()> for Value { fn from(_: ()) -> Self { Self::None } }
impl From<bool> for Value { fn from(v: bool) -> Self { Self::Bool(v) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Self::Int(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Self::Int(v.into()) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Self::Float(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Self::Str(v.into()) } }
impl From<String> for Value { fn from(v: String) -> Self { Self::Str(v.into()) } }
impl From<Symbol> for Value { fn from(v: Symbol) -> Self { Self::Symbol(v) } }
impl From<Vec<Value>> for Value { fn from(v: Vec<Value>) -> Self { Self::Slice(v.into()) } }
impl From<Map<Value>> for Value { fn from(v: Map<Value>) -> Self { Self::Map(Rc::new(v)) } }

impl<const N: usize> From<[Value; N]> for Value {
    fn from(fields: [Value; N]) -> Self { Self::Slice(Rc::new(fields)) }
}

// ----------------------------------------------------------------------------
