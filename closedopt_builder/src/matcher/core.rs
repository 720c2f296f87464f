use crate::matcher::OptionDescriptor;
use crate::model::ErrorKind;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The value an argument supplied to the descriptor at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatchedValue {
    pub index: usize,
    pub value: String,
}

#[derive(Debug)]
pub(crate) struct ArgumentMatcher<'s> {
    descriptors: &'s [OptionDescriptor],
}

impl<'s> ArgumentMatcher<'s> {
    pub(crate) fn new(descriptors: &'s [OptionDescriptor]) -> Self {
        Self { descriptors }
    }

    /// Match a single argument against the descriptors, in declaration order.
    /// The first descriptor whose pattern matches the whole argument wins.
    pub(crate) fn feed(&self, argument: &str) -> Result<MatchedValue, ErrorKind> {
        for (index, descriptor) in self.descriptors.iter().enumerate() {
            if let Some(value) = descriptor.capture(argument) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Argument '{argument}' matched option '{}'.", descriptor.name());
                }

                return Ok(MatchedValue {
                    index,
                    value: value.to_string(),
                });
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Argument '{argument}' did not match any option.");
        }

        Err(ErrorKind::ParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OptionDeclaration;
    use rstest::rstest;

    fn descriptors() -> Vec<OptionDescriptor> {
        vec![
            OptionDeclaration::integral("para1", ["11", "22", "33"]).default_value("22"),
            OptionDeclaration::string("para2", ["hello", "world", "!!!"]),
            OptionDeclaration::floating_point("para3", ["1000.99", "0.0001", "-0.0012345"]),
            OptionDeclaration::string("para", ["x"]),
        ]
        .into_iter()
        .map(|declaration| OptionDescriptor::compile(declaration).unwrap())
        .collect()
    }

    #[test]
    fn matcher_empty() {
        let matcher = ArgumentMatcher::new(&[]);
        assert_eq!(matcher.feed("--para1=11"), Err(ErrorKind::ParseError));
        assert_eq!(matcher.feed(""), Err(ErrorKind::ParseError));
    }

    #[rstest]
    #[case("--para1=33", 0, "33")]
    #[case("--para2=!!!", 1, "!!!")]
    #[case(" --para2=world ", 1, "world")]
    #[case("--para3=-0.0012345", 2, "-0.0012345")]
    #[case("--para=x", 3, "x")]
    fn matcher(#[case] argument: &str, #[case] index: usize, #[case] value: &str) {
        let descriptors = descriptors();
        let matcher = ArgumentMatcher::new(&descriptors);
        assert_eq!(
            matcher.feed(argument),
            Ok(MatchedValue {
                index,
                value: value.to_string(),
            })
        );
    }

    #[rstest]
    #[case("")]
    #[case("para1=11")]
    #[case("--para1")]
    #[case("--para1=")]
    #[case("--para1=ABC")]
    #[case("--para1=12")]
    #[case("--para2=99")]
    #[case("--para4=x")]
    #[case("--para1=11 --para2=hello")]
    #[case("-p=11")]
    fn matcher_no_match(#[case] argument: &str) {
        let descriptors = descriptors();
        let matcher = ArgumentMatcher::new(&descriptors);
        assert_eq!(matcher.feed(argument), Err(ErrorKind::ParseError));
    }
}
