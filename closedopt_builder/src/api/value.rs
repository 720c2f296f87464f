use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::matcher::OptionDescriptor;
use crate::model::{ErrorKind, OptionType};
use crate::prelude::OptionValue;

// Both grammars are constants; an expect() failure here is a programming error.
static INTEGRAL_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(?:0|[1-9][0-9]*)$").expect("static regex must compile"));
static FLOATING_POINT_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>-)?(?P<integral>0|[1-9][0-9]*)(?:\.(?P<fraction>[0-9]*))?$")
        .expect("static regex must compile")
});

/// Convert the `raw` value of `descriptor` into `T`.
///
/// The type check precedes any conversion, so a mismatched request never inspects the raw value.
pub(crate) fn convert<T: OptionValue>(
    descriptor: &OptionDescriptor,
    raw: &str,
) -> Result<T, ErrorKind> {
    match T::OPTION_TYPE {
        None => Err(ErrorKind::UnknownType),
        Some(option_type) if option_type != descriptor.option_type() => {
            Err(ErrorKind::IncorrectType)
        }
        Some(_) => T::from_raw(raw),
    }
}

// The grammar rules out leading zeros and `+`; FromStr then rejects anything out of range for T.
fn integral<T: FromStr>(raw: &str) -> Result<T, ErrorKind> {
    if !INTEGRAL_GRAMMAR.is_match(raw) {
        return Err(ErrorKind::ConversionError);
    }

    raw.parse::<T>().map_err(|_| ErrorKind::ConversionError)
}

#[derive(Debug, PartialEq, Eq)]
struct Decimal<'r> {
    negative: bool,
    integral: &'r str,
    fraction: &'r str,
}

impl<'r> Decimal<'r> {
    fn split(raw: &'r str) -> Result<Self, ErrorKind> {
        let captures = FLOATING_POINT_GRAMMAR
            .captures(raw)
            .ok_or(ErrorKind::ConversionError)?;
        let integral = captures
            .name("integral")
            .map(|m| m.as_str())
            .unwrap_or_else(|| unreachable!("internal error - the integral group is not optional"));

        Ok(Self {
            negative: captures.name("sign").is_some(),
            integral,
            fraction: captures.name("fraction").map_or("", |m| m.as_str()),
        })
    }
}

macro_rules! integral_value {
    ($($t:ty),*) => {
        $(
            impl OptionValue for $t {
                const OPTION_TYPE: Option<OptionType> = Some(OptionType::Integral);

                fn from_raw(raw: &str) -> Result<Self, ErrorKind> {
                    integral(raw)
                }
            }
        )*
    };
}

// The magnitude is `integral + 0.<fraction>`, with the sign applied last.
// Parsing the fraction as `0.<fraction>` keeps it correctly rounded at any length.
// Applying the sign to the whole magnitude keeps `-0.<digits>` negative.
macro_rules! floating_point_value {
    ($($t:ty),*) => {
        $(
            impl OptionValue for $t {
                const OPTION_TYPE: Option<OptionType> = Some(OptionType::FloatingPoint);

                fn from_raw(raw: &str) -> Result<Self, ErrorKind> {
                    let decimal = Decimal::split(raw)?;
                    let integral: $t = decimal
                        .integral
                        .parse()
                        .map_err(|_| ErrorKind::ConversionError)?;
                    let magnitude = if decimal.fraction.is_empty() {
                        integral
                    } else {
                        let fraction: $t = format!("0.{}", decimal.fraction)
                            .parse()
                            .map_err(|_| ErrorKind::ConversionError)?;
                        integral + fraction
                    };
                    let value = if decimal.negative { -magnitude } else { magnitude };

                    if value.is_finite() {
                        Ok(value)
                    } else {
                        Err(ErrorKind::ConversionError)
                    }
                }
            }
        )*
    };
}

integral_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
floating_point_value!(f32, f64);

impl OptionValue for String {
    const OPTION_TYPE: Option<OptionType> = Some(OptionType::String);

    fn from_raw(raw: &str) -> Result<Self, ErrorKind> {
        Ok(raw.to_string())
    }
}
