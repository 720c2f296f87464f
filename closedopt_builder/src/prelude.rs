//! Traits which, typically, may be imported without concern: `use closedopt::prelude::*`.

use crate::model::{ErrorKind, OptionType};

/// Behaviour to convert an option's raw value into a typed value T.
///
/// Implemented for the integer primitives ([`OptionType::Integral`]), `f32`/`f64` ([`OptionType::FloatingPoint`]), and `String` ([`OptionType::String`]).
// Needs to be imported in order to implement a custom conversion.
pub trait OptionValue: Sized {
    /// The option type this conversion applies to.
    /// `None` declares a type outside the option types, which is rejected at retrieval with [`ErrorKind::UnknownType`].
    const OPTION_TYPE: Option<OptionType>;

    /// Convert the raw value, already known to be one of the option's declared values.
    fn from_raw(raw: &str) -> Result<Self, ErrorKind>;
}
