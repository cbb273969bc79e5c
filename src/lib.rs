//! Tagged values with an open tag space, and dispatch with a wildcard
//! fallback over tags and over primitive literals.

pub mod model;
pub use model::{Name, Map, Tag, Symbol, Value};

mod error;
pub use error::{Error, Result};

mod case;
pub use case::{Case};

pub mod literal;
pub use literal::{Literal, Pattern, LiteralCases, match_literal};

mod tagged;
pub use tagged::{Cases, Tagged, dispatch};

mod registry;
pub use registry::{Construct, Variant, VariantSet, Constructor, Maker, Registry, define_variants};

mod variants;
pub use variants::{Variants};

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_without_handler_or_wildcard() {
        let status = define_variants(VariantSet::new()
            .marker("Pre")
            .constructor("Failed", 1, |args| args[0].clone()));
        let cases = Cases::new().on("Failed", |p| p.as_str().map(str::to_owned));
        let failed = status.make("Failed", &["err".into()]);
        assert_eq!(failed.and_then(|t| t.dispatch(&cases)), Ok(Some("err".to_owned())));
        let pre = status.value("Pre").and_then(|t| t.dispatch(&cases));
        assert_eq!(pre, Err(Error::UnhandledVariant(Tag::from("Pre"))));
    }
}
