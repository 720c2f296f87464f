//! `closedopt` is a closed-vocabulary command line option parser for Rust.
//!
//! Each option is declared up front with a name, a type, the complete set of values it accepts, and optionally a default.
//! The Cli accepts precisely one syntax: `--NAME=VALUE`.
//! `closedopt` prioritizes the following design concerns:
//! * *Closed vocabulary*:
//! An option only ever takes one of its declared values; anything else is a parse error.
//! The program never sees a value it didn't anticipate.
//! * *Report everything*:
//! A parse never stops at the first bad argument.
//! Every argument is matched independently, so the user learns about all their mistakes at once.
//! * *Typed retrieval*:
//! Values are retrieved as integers, floating points, or strings, checked against the option's declared type.
//! * *Validate up front*:
//! A schema that could never work (ex: a default that isn't amongst its values) is rejected when it is built, before any input is parsed.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/build_profile.rs")]
//! ```
//!
//! ```console
//! $ build_profile
//! para1: 22
//! para2: option not found
//! para3: -0.0012345
//! mode: debug
//!
//! $ build_profile --para1=33 --mode=release
//! para1: 33
//! para2: option not found
//! para3: -0.0012345
//! mode: release
//!
//! $ build_profile --para1=34 --para4=hello
//! Parse error: 2 arguments do not match any declared option.
//!  '--para1=34'     does not match any declared option.
//!  '--para4=hello'  does not match any declared option.
//! ```
//!
//! # Schema
//! Start with [`OptionSchema::builder`] and `add` an [`OptionDeclaration`] per option.
//! * [`OptionDeclaration::integral`]: whole numbers, `-?(0|[1-9][0-9]*)`.
//! Retrieve as any integer primitive; a value out of range for the requested primitive is a [`ErrorKind::ConversionError`].
//! * [`OptionDeclaration::floating_point`]: decimals, `-?(0|[1-9][0-9]*)(\.[0-9]*)?`.
//! Retrieve as `f32` or `f64`.
//! * [`OptionDeclaration::string`]: any value, retrieved verbatim as `String`.
//!
//! Finish with [`SchemaBuilder::build`] (which panics on an invalid schema) or [`SchemaBuilder::build_schema`] (which returns a [`ConfigError`]).
//! A schema is invalid when:
//! * An option name is empty, or contains `=` or whitespace.
//! * An option declares no values, or repeats a value.
//! * A default isn't amongst the option's values.
//! * Two options share a name.
//!
//! # Cli Semantics
//! * Each argument must take the form `--NAME=VALUE`, optionally surrounded by whitespace.
//! The whole argument must match; there are no partial matches.
//! * `VALUE` must be precisely one of the option's declared values.
//! An empty value (`--NAME=`) is only accepted if the empty string is declared.
//! * Arguments that fail to match are collected in [`ParseResult::errors`], verbatim.
//! * [`ParseResult::get`] resolves the supplied value first, then the default.
//! An option that was neither supplied nor given a default is [`ErrorKind::OptionNotFound`], even for an otherwise successful parse.
//! * If an option is supplied more than once, the first occurrence applies.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while building, matching, and resolving.
pub use closedopt_builder::*;
