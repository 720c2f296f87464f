use std::env;
use std::ffi::OsStr;

use crate::api::OptionSchema;
use crate::matcher::ArgumentMatcher;
use crate::model::{ArgumentError, ErrorKind};
use crate::parser::{ConsoleInterface, ParseFailure, ParseResult, UserInterface};

impl OptionSchema {
    /// Run the parser against the input tokens.
    ///
    /// Every token is an argument; there is no program name slot (see [`OptionSchema::parse_argv`]).
    /// Each argument is matched independently: an argument which doesn't match is recorded in [`ParseResult::errors`], and parsing continues with the next.
    ///
    /// ### Example
    /// ```
    /// # use closedopt_builder as closedopt;
    /// use closedopt::{ErrorKind, OptionDeclaration, OptionSchema};
    ///
    /// let schema = OptionSchema::builder()
    ///     .add(OptionDeclaration::string("mode", ["debug", "release"]).default_value("debug"))
    ///     .build();
    ///
    /// let result = schema.parse_tokens(&["--mode=release", "--mode=fast"]);
    /// assert!(!result.is_ok());
    /// assert_eq!(result.errors()[0].argument(), "--mode=fast");
    /// assert_eq!(result.errors()[0].kind(), ErrorKind::ParseError);
    /// assert_eq!(result.get::<String>("mode"), Ok("release".to_string()));
    /// ```
    pub fn parse_tokens(&self, tokens: &[&str]) -> ParseResult<'_> {
        self.consume(tokens)
    }

    /// Run the parser against an argument vector, where the first item is the program name.
    pub fn parse_argv<I, S>(&self, argv: I) -> ParseResult<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.consume(argv.into_iter().skip(1))
    }

    /// Run the parser against an OS argument vector, where the first item is the program name.
    ///
    /// An argument which isn't valid unicode can never match, and is recorded (lossily converted) in [`ParseResult::errors`].
    pub fn parse_argv_os<I, S>(&self, argv: I) -> ParseResult<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let matcher = ArgumentMatcher::new(&self.descriptors);
        let mut result = ParseResult::new(self);

        for argument in argv.into_iter().skip(1) {
            let argument = argument.as_ref();

            match argument.to_str() {
                Some(argument) => feed(&matcher, &mut result, argument),
                None => result.push_error(ArgumentError::new(
                    argument.to_string_lossy(),
                    ErrorKind::ParseError,
                )),
            }
        }

        result
    }

    /// Run the parser against the Cli [`env::args_os`].
    ///
    /// If any argument fails to match, the errors are printed to stderr and the process exits with error code `1` (via [`std::process::exit`]).
    pub fn parse(&self) -> ParseResult<'_> {
        match self.invoke(env::args_os(), &ConsoleInterface::default()) {
            Ok(result) => result,
            Err(code) => std::process::exit(code),
        }
    }

    pub(crate) fn invoke<I, S>(
        &self,
        argv: I,
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<ParseResult<'_>, i32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let result = self.parse_argv_os(argv);

        if result.is_ok() {
            Ok(result)
        } else {
            let report = result.report();
            user_interface.print_error(ParseFailure::from(&report));
            user_interface.print_error_report(report);
            Err(1)
        }
    }

    fn consume<I, S>(&self, arguments: I) -> ParseResult<'_>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matcher = ArgumentMatcher::new(&self.descriptors);
        let mut result = ParseResult::new(self);

        for argument in arguments {
            feed(&matcher, &mut result, argument.as_ref());
        }

        result
    }
}

fn feed(matcher: &ArgumentMatcher<'_>, result: &mut ParseResult<'_>, argument: &str) {
    match matcher.feed(argument) {
        Ok(matched) => result.push_match(matched),
        Err(kind) => result.push_error(ArgumentError::new(argument, kind)),
    }
}
