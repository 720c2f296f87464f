mod core;
mod descriptor;

pub(crate) use self::core::*;
pub use descriptor::OptionDescriptor;
