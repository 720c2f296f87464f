use thiserror::Error;

use crate::api::OptionDeclaration;
use crate::matcher::OptionDescriptor;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A schema construction error: the declarations are invalid.
/// This indicates a bug in the calling program, rather than in its input.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// Incrementally declares the options of an [`OptionSchema`].
///
/// ### Example
/// ```
/// # use closedopt_builder as closedopt;
/// use closedopt::{OptionDeclaration, OptionSchema};
///
/// let schema = OptionSchema::builder()
///     .add(OptionDeclaration::integral("para1", ["11", "22", "33"]).default_value("22"))
///     .add(OptionDeclaration::string("para2", ["hello", "world", "!!!"]))
///     .build();
///
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    declarations: Vec<OptionDeclaration>,
    deferred_error: Option<ConfigError>,
}

impl SchemaBuilder {
    /// Create an empty schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option to the schema.
    ///
    /// The declaration is validated immediately, although any error is only reported when building.
    /// When multiple declarations are invalid, the first error is reported.
    pub fn add(mut self, declaration: OptionDeclaration) -> Self {
        if self.deferred_error.is_none() {
            if let Err(error) = declaration.validate() {
                self.deferred_error.replace(error);
            } else if self
                .declarations
                .iter()
                .any(|existing| existing.name() == declaration.name())
            {
                self.deferred_error.replace(ConfigError(format!(
                    "Cannot duplicate the option '{}'.",
                    declaration.name()
                )));
            }
        }

        self.declarations.push(declaration);
        self
    }

    /// Build the schema as a Result.
    /// This finalizes the configuration and checks for errors (ex: a default that isn't amongst the values).
    pub fn build_schema(self) -> Result<OptionSchema, ConfigError> {
        if let Some(error) = self.deferred_error {
            return Err(error);
        }

        let descriptors = self
            .declarations
            .into_iter()
            .map(OptionDescriptor::compile)
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Built schema with {} options.", descriptors.len());
        }

        Ok(OptionSchema { descriptors })
    }

    /// Build the schema.
    /// This finalizes the configuration and checks for errors (ex: a default that isn't amongst the values).
    ///
    /// # Panics
    /// Panics with the [`ConfigError`] message if the declarations are invalid.
    pub fn build(self) -> OptionSchema {
        match self.build_schema() {
            Ok(schema) => schema,
            Err(e) => panic!("{e}"),
        }
    }
}

/// The immutable registry of declared options.
///
/// Built once via [`OptionSchema::builder`], then shared (read-only) by any number of parses.
/// Each parse produces an independent [`ParseResult`](crate::ParseResult) which borrows the schema.
#[derive(Debug)]
pub struct OptionSchema {
    pub(crate) descriptors: Vec<OptionDescriptor>,
}

impl OptionSchema {
    /// Start declaring a schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// The number of declared options.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no options are declared.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Find the option declared as `name`.
    pub fn descriptor(&self, name: &str) -> Option<&OptionDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.name() == name)
    }

    /// Iterate the declared options, in declaration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &OptionDescriptor> {
        self.descriptors.iter()
    }
}
