mod interface;
mod middleware;
mod printer;
mod result;

pub(crate) use interface::*;
pub use printer::ErrorReport;
pub use result::ParseResult;
