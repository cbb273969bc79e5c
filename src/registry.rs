use std::collections::{HashMap};
use std::rc::{Rc};
use std::{fmt};

use tracing::{trace};

use super::{Error, Result, Tag, Tagged, Value};

/// Computes the payload of a variant from the arguments of its maker.
pub type Construct = Rc<dyn Fn(&[Value]) -> Value>;

/// The definition of one variant in a [`VariantSet`].
#[derive(Clone)]
pub enum Variant {
    /// The variant carries no payload.
    Marker,

    /// The variant carries the result of `construct`.
    ///
    /// If `arity` is `Some(n)`, the maker rejects calls that do not pass
    /// exactly `n` arguments.
    Constructor { arity: Option<usize>, construct: Construct },
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Marker => f.write_str("Marker"),
            Self::Constructor {arity, ..} => f.debug_struct("Constructor").field("arity", arity).finish(),
        }
    }
}

/// Declares the variants of a sum type, in order.
///
/// Each `Tag` appears at most once. Redefining a tag replaces its definition
/// but keeps its original position.
#[derive(Debug, Default, Clone)]
pub struct VariantSet(Vec<(Tag, Variant)>);

impl VariantSet {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, tag: impl Into<Tag>, variant: Variant) {
        let tag = tag.into();
        if let Some(entry) = self.0.iter_mut().find(|(t, _)| *t == tag) {
            entry.1 = variant;
        } else {
            self.0.push((tag, variant));
        }
    }

    /// Adds a variant that carries no payload.
    pub fn marker(mut self, tag: impl Into<Tag>) -> Self {
        self.insert(tag, Variant::Marker);
        self
    }

    /// Adds a variant whose maker takes exactly `arity` arguments.
    pub fn constructor(
        mut self,
        tag: impl Into<Tag>,
        arity: usize,
        construct: impl Fn(&[Value]) -> Value + 'static,
    ) -> Self {
        self.insert(tag, Variant::Constructor {arity: Some(arity), construct: Rc::new(construct)});
        self
    }

    /// Adds a variant whose maker takes any number of arguments.
    pub fn variadic(mut self, tag: impl Into<Tag>, construct: impl Fn(&[Value]) -> Value + 'static) -> Self {
        self.insert(tag, Variant::Constructor {arity: None, construct: Rc::new(construct)});
        self
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

// ----------------------------------------------------------------------------

/// Makes [`Tagged`] values of a variant that carries a payload.
#[derive(Clone)]
pub struct Constructor {
    tag: Tag,
    arity: Option<usize>,
    construct: Construct,
}

impl Constructor {
    pub fn tag(&self) -> &Tag { &self.tag }

    pub fn arity(&self) -> Option<usize> { self.arity }

    /// Computes the payload from `args` now, and captures it.
    pub fn call(&self, args: &[Value]) -> Result<Tagged> {
        if let Some(expected) = self.arity {
            if args.len() != expected {
                return Err(Error::Arity {tag: self.tag.clone(), expected, found: args.len()});
            }
        }
        trace!(tag = %self.tag, args = args.len(), "constructing variant");
        Ok(Tagged::new(self.tag.clone(), (self.construct)(args)))
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Constructor").field("tag", &self.tag).field("arity", &self.arity).finish()
    }
}

/// What a [`Registry`] holds for one variant.
#[derive(Debug, Clone)]
pub enum Maker {
    /// The only value of a variant that carries no payload.
    Value(Tagged),

    Constructor(Constructor),
}

// ----------------------------------------------------------------------------

/// The makers of a sum type, built from a [`VariantSet`].
#[derive(Debug, Clone)]
pub struct Registry {
    makers: HashMap<Tag, Maker>,

    /// The tags in declaration order.
    order: Box<[Tag]>,
}

impl Registry {
    pub fn new(set: VariantSet) -> Self {
        let mut makers = HashMap::with_capacity(set.len());
        let mut order = Vec::with_capacity(set.len());
        for (tag, variant) in set.0 {
            let maker = match variant {
                Variant::Marker => Maker::Value(Tagged::new(tag.clone(), Value::None)),
                Variant::Constructor {arity, construct} => {
                    Maker::Constructor(Constructor {tag: tag.clone(), arity, construct})
                },
            };
            makers.insert(tag.clone(), maker);
            order.push(tag);
        }
        trace!(variants = order.len(), "registry built");
        Self {makers, order: order.into()}
    }

    pub fn get(&self, tag: impl Into<Tag>) -> Option<&Maker> { self.makers.get(&tag.into()) }

    pub fn contains(&self, tag: impl Into<Tag>) -> bool { self.makers.contains_key(&tag.into()) }

    /// Returns the value of a variant that carries no payload.
    pub fn value(&self, tag: impl Into<Tag>) -> Result<Tagged> {
        let tag = tag.into();
        match self.makers.get(&tag) {
            Some(Maker::Value(tagged)) => Ok(tagged.clone()),
            Some(Maker::Constructor(_)) => Err(Error::NotAMarker(tag)),
            None => Err(Error::UnknownVariant(tag)),
        }
    }

    /// Makes a value of a variant that carries a payload.
    pub fn make(&self, tag: impl Into<Tag>, args: &[Value]) -> Result<Tagged> {
        let tag = tag.into();
        match self.makers.get(&tag) {
            Some(Maker::Constructor(constructor)) => constructor.call(args),
            Some(Maker::Value(_)) => Err(Error::NotAConstructor(tag)),
            None => Err(Error::UnknownVariant(tag)),
        }
    }

    /// The tags in declaration order.
    pub fn tags(&self) -> impl Iterator<Item=&Tag> { self.order.iter() }

    /// The makers in declaration order.
    pub fn iter(&self) -> impl Iterator<Item=(&Tag, &Maker)> {
        self.order.iter().filter_map(|tag| Some((tag, self.makers.get(tag)?)))
    }

    pub fn len(&self) -> usize { self.order.len() }

    pub fn is_empty(&self) -> bool { self.order.is_empty() }
}

/// Builds the makers for the variants declared in `set`.
pub fn define_variants(set: VariantSet) -> Registry { Registry::new(set) }

// ----------------------------------------------------------------------------
