//! Builder module for `closedopt`.
//! See the documentation root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use matcher::OptionDescriptor;
pub use model::*;
pub use parser::{ErrorReport, ParseResult};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
