mod declaration;
mod schema;
mod value;

pub use declaration::*;
pub use schema::*;
pub(crate) use value::convert;
