use thiserror::Error;

/// The declared category of an option's values.
///
/// The category decides which conversion rule applies, and is cross-checked against the type requested at retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Whole numbers: `-?(0|[1-9][0-9]*)`.
    Integral,
    /// Decimal numbers: an integral part with an optional `.` fraction.
    FloatingPoint,
    /// Any value, passed through verbatim.
    String,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Integral => write!(f, "integral"),
            OptionType::FloatingPoint => write!(f, "floating-point"),
            OptionType::String => write!(f, "string"),
        }
    }
}

/// The reason an argument could not be parsed, or an option value could not be retrieved.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The argument does not match any declared option (unknown name, malformed syntax, or undeclared value).
    #[error("does not match any declared option")]
    ParseError,

    /// The option is not declared, or was neither supplied nor given a default.
    #[error("option not found")]
    OptionNotFound,

    /// The requested type does not belong to the option's declared type.
    #[error("incorrect type requested")]
    IncorrectType,

    /// The raw value does not satisfy the grammar or range of the requested type.
    #[error("cannot convert value")]
    ConversionError,

    /// The requested type does not belong to any option type.
    #[error("unknown type requested")]
    UnknownType,
}

/// An argument which failed to parse, alongside its original text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{argument}' {kind}.")]
pub struct ArgumentError {
    argument: String,
    kind: ErrorKind,
}

impl ArgumentError {
    pub(crate) fn new(argument: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            argument: argument.into(),
            kind,
        }
    }

    /// The argument, verbatim as it was provided.
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// Why the argument failed.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}
