use super::{Tag, Tagged};

/// A native enum whose variants are also [`Tag`]s.
///
/// Implemented by [`variants!`](crate::variants). A `match` on the enum itself
/// is checked for exhaustiveness by the compiler; [`Variants::into_tagged()`]
/// lowers a value into a [`Tagged`] for dispatch through
/// [`Cases`](crate::Cases), where a wildcard may stand in for missing arms.
pub trait Variants: Sized {
    /// The name of every variant, in declaration order.
    const TAGS: &'static [&'static str];

    fn tag(&self) -> Tag;

    /// Converts `self` into a [`Tagged`] with the same tag, converting the
    /// payload to a [`Value`](crate::Value).
    fn into_tagged(self) -> Tagged;
}

/// Declares an enum and implements [`Variants`] for it.
///
/// Each variant either carries no payload, or carries named fields, written
/// `Name(binding: Type, ...)`, where every `Type: Into<Value>`. When lowered
/// by [`Variants::into_tagged()`] the fields are packed with
/// [`Value::tuple()`](crate::Value::tuple): a single field is the payload
/// itself, and several fields make a `Value::Slice` in declaration order.
///
/// ```
/// use tagmatch::{variants, Cases, Variants};
///
/// variants! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub enum Status {
///         Pre,
///         Progress(value: String, shown: bool),
///         Failed(message: String),
///     }
/// }
///
/// let status = Status::Failed("oops".into());
/// assert_eq!(status.tag().to_string(), "Failed");
/// let message = status.into_tagged().dispatch(&Cases::new()
///     .on("Pre", |_| String::new())
///     .otherwise(|p| p.as_str().unwrap_or_default().to_owned()));
/// assert_eq!(message.unwrap(), "oops");
/// ```
#[macro_export]
macro_rules! variants {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(($($binding:ident : $payload:ty),+ $(,)?))?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(($($payload),+))?,
            )+
        }

        impl $crate::Variants for $name {
            const TAGS: &'static [&'static str] = &[$(::core::stringify!($variant)),+];

            fn tag(&self) -> $crate::Tag {
                match self {
                    $(Self::$variant { .. } => $crate::Tag::from(::core::stringify!($variant)),)+
                }
            }

            fn into_tagged(self) -> $crate::Tagged {
                match self {
                    $(
                        Self::$variant $(($($binding),+))? => {
                            let fields: ::std::vec::Vec<$crate::Value> = ::std::vec![
                                $($(::core::convert::Into::into($binding)),+)?
                            ];
                            $crate::Tagged::new(
                                ::core::stringify!($variant),
                                $crate::Value::tuple(fields),
                            )
                        },
                    )+
                }
            }
        }
    };
}

// ----------------------------------------------------------------------------
