use regex::Regex;

use crate::api::{ConfigError, OptionDeclaration};
use crate::constant::*;
use crate::model::OptionType;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A declared option, validated and compiled for matching.
#[derive(Debug, Clone)]
pub struct OptionDescriptor {
    name: String,
    option_type: OptionType,
    default: Option<String>,
    values: Vec<String>,
    // The literal `--name`, used to skip descriptors before attempting the pattern.
    needle: String,
    pattern: Regex,
}

impl OptionDescriptor {
    /// Assumes the declaration has already been validated.
    pub(crate) fn compile(declaration: OptionDeclaration) -> Result<Self, ConfigError> {
        let (name, option_type, values, default) = declaration.consume();
        let expression = pattern(&name, &values);
        let pattern = Regex::new(&expression).map_err(|error| {
            ConfigError(format!("option '{name}' cannot compile its values: {error}"))
        })?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Compiled option '{name}' as: {expression}");
        }

        Ok(Self {
            needle: format!("{OPTION_PREFIX}{name}"),
            name,
            option_type,
            default,
            values,
            pattern,
        })
    }

    /// The option name, as in `--name=value`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared type of the option's values.
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// The default raw value, if declared.
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// The closed set of raw values, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The pattern an argument must match in full.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Extract the value from `argument`, if the whole argument names this option with one of its values.
    pub(crate) fn capture<'t>(&self, argument: &'t str) -> Option<&'t str> {
        if !argument.contains(&self.needle) {
            return None;
        }

        self.pattern
            .captures(argument)
            .and_then(|captures| captures.name(VALUE_CAPTURE))
            .map(|value| value.as_str())
    }
}

fn pattern(name: &str, values: &[String]) -> String {
    let alternation = values
        .iter()
        .map(|value| regex::escape(value))
        .collect::<Vec<String>>()
        .join("|");
    format!(
        r"^\s*{OPTION_PREFIX}{name}{VALUE_SEPARATOR}(?P<{VALUE_CAPTURE}>{alternation})\s*$",
        name = regex::escape(name),
    )
}
