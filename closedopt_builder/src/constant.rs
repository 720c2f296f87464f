pub(crate) const OPTION_PREFIX: &str = "--";
pub(crate) const VALUE_SEPARATOR: char = '=';
pub(crate) const VALUE_CAPTURE: &str = "value";
