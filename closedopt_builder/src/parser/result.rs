use crate::api::{convert, OptionSchema};
use crate::matcher::{MatchedValue, OptionDescriptor};
use crate::model::{ArgumentError, ErrorKind};
use crate::parser::ErrorReport;
use crate::prelude::OptionValue;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The outcome of parsing one batch of arguments against an [`OptionSchema`].
///
/// A batch may fail to parse some arguments (see [`ParseResult::errors`]) while still answering retrievals.
/// Equally, a successfully parsed batch may not have a value for every option: "did the parse succeed" and "does this option have a value" are independent questions.
#[derive(Debug)]
pub struct ParseResult<'s> {
    schema: &'s OptionSchema,
    arguments: Vec<MatchedValue>,
    errors: Vec<ArgumentError>,
}

impl<'s> ParseResult<'s> {
    pub(crate) fn new(schema: &'s OptionSchema) -> Self {
        Self {
            schema,
            arguments: Vec::default(),
            errors: Vec::default(),
        }
    }

    pub(crate) fn push_match(&mut self, matched: MatchedValue) {
        self.arguments.push(matched);
    }

    pub(crate) fn push_error(&mut self, error: ArgumentError) {
        self.errors.push(error);
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`ParseResult`] with the `supplied` (name, raw value) pairs, without matching any arguments.
    /// Names which aren't in the schema are recorded as parse errors.
    ///
    /// ### Example
    /// ```
    /// # use closedopt_builder as closedopt;
    /// use closedopt::{OptionDeclaration, OptionSchema, ParseResult};
    ///
    /// let schema = OptionSchema::builder()
    ///     .add(OptionDeclaration::integral("jobs", ["1", "2", "4"]))
    ///     .build();
    /// let result = ParseResult::test_dummy(&schema, &[("jobs", "4")]);
    /// assert_eq!(result.get::<u32>("jobs"), Ok(4));
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy(schema: &'s OptionSchema, supplied: &[(&str, &str)]) -> Self {
        let mut result = Self::new(schema);

        for (name, value) in supplied {
            match schema
                .descriptors
                .iter()
                .position(|descriptor| descriptor.name() == *name)
            {
                Some(index) => result.push_match(MatchedValue {
                    index,
                    value: value.to_string(),
                }),
                None => result.push_error(ArgumentError::new(
                    format!("--{name}={value}"),
                    ErrorKind::ParseError,
                )),
            }
        }

        result
    }

    /// Whether every argument in the batch matched an option.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The arguments which failed to match, in the order they were provided.
    pub fn errors(&self) -> &[ArgumentError] {
        &self.errors
    }

    /// Render the errors for display.
    pub fn report(&self) -> ErrorReport {
        ErrorReport::terminal(self.errors.clone())
    }

    /// Convert into a `Result`, which is `Ok` only if every argument matched.
    pub fn into_result(self) -> Result<Self, Vec<ArgumentError>> {
        if self.errors.is_empty() {
            Ok(self)
        } else {
            Err(self.errors)
        }
    }

    /// Whether `name` was supplied in this batch (as opposed to resolving to its default).
    pub fn is_supplied(&self, name: &str) -> bool {
        self.supplied(name).is_some()
    }

    /// Get the raw value for the option `name`.
    ///
    /// Resolves in the same order as [`ParseResult::get`], without any conversion.
    pub fn raw(&self, name: &str) -> Result<&str, ErrorKind> {
        self.resolve(name).map(|(_, raw)| raw)
    }

    /// Get the value for the option `name`, converted to `T`.
    ///
    /// The value resolves as follows:
    /// 1. The value supplied in this batch, if any.
    /// If the same option was supplied more than once, the first occurrence applies.
    /// 2. Otherwise the option's default value.
    /// 3. Otherwise (or if `name` isn't declared at all) [`ErrorKind::OptionNotFound`].
    ///
    /// The resolved value is then converted to `T`, which must belong to the option's declared type.
    ///
    /// ### Example
    /// ```
    /// # use closedopt_builder as closedopt;
    /// use closedopt::{ErrorKind, OptionDeclaration, OptionSchema};
    ///
    /// let schema = OptionSchema::builder()
    ///     .add(OptionDeclaration::integral("age", ["18", "22", "38"]).default_value("22"))
    ///     .add(OptionDeclaration::string("name", ["alice", "bob"]))
    ///     .build();
    /// let result = schema.parse_tokens(&[]);
    ///
    /// assert!(result.is_ok());
    /// assert_eq!(result.get::<i32>("age"), Ok(22));
    /// assert_eq!(result.get::<f64>("age"), Err(ErrorKind::IncorrectType));
    /// assert_eq!(result.get::<String>("name"), Err(ErrorKind::OptionNotFound));
    /// ```
    pub fn get<T: OptionValue>(&self, name: &str) -> Result<T, ErrorKind> {
        let (descriptor, raw) = self.resolve(name)?;
        convert(descriptor, raw)
    }

    fn supplied(&self, name: &str) -> Option<&MatchedValue> {
        self.arguments
            .iter()
            .find(|matched| self.schema.descriptors[matched.index].name() == name)
    }

    fn resolve(&self, name: &str) -> Result<(&OptionDescriptor, &str), ErrorKind> {
        if let Some(matched) = self.supplied(name) {
            return Ok((
                &self.schema.descriptors[matched.index],
                matched.value.as_str(),
            ));
        }

        let descriptor = self
            .schema
            .descriptor(name)
            .ok_or(ErrorKind::OptionNotFound)?;

        match descriptor.default() {
            Some(default) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option '{name}' resolved to its default '{default}'.");
                }

                Ok((descriptor, default))
            }
            None => Err(ErrorKind::OptionNotFound),
        }
    }
}
