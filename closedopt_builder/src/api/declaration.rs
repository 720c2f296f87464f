use std::collections::HashSet;

use crate::api::ConfigError;
use crate::constant::*;
use crate::model::OptionType;

/// The declaration of a single `--name=value` option.
///
/// Declarations are added to a [`SchemaBuilder`](crate::SchemaBuilder), which validates them when building the [`OptionSchema`](crate::OptionSchema).
///
/// ### Example
/// ```
/// # use closedopt_builder as closedopt;
/// use closedopt::{OptionDeclaration, OptionSchema, OptionType};
///
/// let schema = OptionSchema::builder()
///     .add(OptionDeclaration::new("age", OptionType::Integral, ["18", "22", "38"]).default_value("22"))
///     .add(OptionDeclaration::string("mode", ["debug", "release"]))
///     .build();
///
/// let result = schema.parse_tokens(&["--mode=release"]);
/// assert_eq!(result.get::<u8>("age"), Ok(22));
/// assert_eq!(result.get::<String>("mode"), Ok("release".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDeclaration {
    name: String,
    option_type: OptionType,
    values: Vec<String>,
    default: Option<String>,
}

impl OptionDeclaration {
    /// Declare an option `--name=value`, where `value` must be one of `values`.
    pub fn new(
        name: impl Into<String>,
        option_type: OptionType,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            option_type,
            values: values.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    /// Declare an [`OptionType::Integral`] option.
    pub fn integral(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(name, OptionType::Integral, values)
    }

    /// Declare an [`OptionType::FloatingPoint`] option.
    pub fn floating_point(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(name, OptionType::FloatingPoint, values)
    }

    /// Declare an [`OptionType::String`] option.
    pub fn string(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(name, OptionType::String, values)
    }

    /// Document the default raw value, used when the option isn't supplied.
    /// If repeated, only the final default will apply.
    ///
    /// The default must be one of the declared values, otherwise building the schema fails.
    pub fn default_value(mut self, raw: impl Into<String>) -> Self {
        self.default.replace(raw.into());
        self
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError("option name cannot be empty.".to_string()));
        }

        if self
            .name
            .chars()
            .any(|c| c == VALUE_SEPARATOR || c.is_whitespace())
        {
            return Err(ConfigError(format!(
                "option '{}' cannot contain '{VALUE_SEPARATOR}' or whitespace.",
                self.name
            )));
        }

        if self.values.is_empty() {
            return Err(ConfigError(format!(
                "option '{}' must declare at least one value.",
                self.name
            )));
        }

        let mut seen = HashSet::new();

        for value in &self.values {
            if !seen.insert(value.as_str()) {
                return Err(ConfigError(format!(
                    "option '{}' cannot duplicate the value '{value}'.",
                    self.name
                )));
            }
        }

        if let Some(default) = &self.default {
            if !seen.contains(default.as_str()) {
                return Err(ConfigError(format!(
                    "option '{}' has default '{default}', which is not amongst its values.",
                    self.name
                )));
            }
        }

        Ok(())
    }

    pub(crate) fn consume(self) -> (String, OptionType, Vec<String>, Option<String>) {
        let OptionDeclaration {
            name,
            option_type,
            values,
            default,
        } = self;
        (name, option_type, values, default)
    }
}
