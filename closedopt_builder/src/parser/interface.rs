use thiserror::Error;

use crate::parser::ErrorReport;

/// The batch level error printed ahead of the per-argument report.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Parse error: {0}")]
pub(crate) struct ParseFailure(pub(crate) String);

impl From<&ErrorReport> for ParseFailure {
    fn from(report: &ErrorReport) -> Self {
        ParseFailure(report.summary())
    }
}

pub(crate) trait UserInterface {
    fn print_error(&self, error: ParseFailure);
    fn print_error_report(&self, report: ErrorReport);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print_error(&self, error: ParseFailure) {
        eprintln!("{error}");
    }

    fn print_error_report(&self, report: ErrorReport) {
        for line in report.lines() {
            eprintln!("{line}");
        }
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ErrorReport, ParseFailure, UserInterface};
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        error: RefCell<Option<String>>,
        error_report: RefCell<Option<ErrorReport>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print_error(&self, error: ParseFailure) {
            // Assumes print_error() is only ever called once.
            self.error.borrow_mut().replace(error.to_string());
        }

        fn print_error_report(&self, report: ErrorReport) {
            // Assumes print_error_report() is only ever called once.
            self.error_report.borrow_mut().replace(report);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<ErrorReport>) {
            let InMemoryInterface {
                error,
                error_report,
            } = self;
            (error.take(), error_report.take())
        }
    }
}
