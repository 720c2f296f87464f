use terminal_size::{terminal_size, Width};

use crate::model::ArgumentError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We'll target 95% of the total width, to ensure the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;
// Used when the output isn't a terminal.
const DEFAULT_TOTAL_WIDTH: usize = 80;
// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_RIGHT_WIDTH: usize = 17;
const MAXIMUM_LEFT_WIDTH: usize = 40;
const PADDING_WIDTH: usize = 2;
const INDENT: usize = 1;

/// The errors of a failed batch, rendered one per line: the argument on the left, the reason on the right.
///
/// ### Example
/// ```
/// # use closedopt_builder as closedopt;
/// use closedopt::{OptionDeclaration, OptionSchema};
///
/// let schema = OptionSchema::builder()
///     .add(OptionDeclaration::integral("para1", ["11", "22"]))
///     .build();
/// let result = schema.parse_tokens(&["--para2=99"]);
///
/// assert_eq!(
///     result.report().to_string(),
///     "Parse error: 1 argument does not match any declared option.\n '--para2=99'  does not match any declared option.",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    errors: Vec<ArgumentError>,
    total_width: usize,
}

impl ErrorReport {
    pub(crate) fn terminal(errors: Vec<ArgumentError>) -> Self {
        let total_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            terminal_width as usize
        } else {
            DEFAULT_TOTAL_WIDTH
        };

        Self::new(errors, total_width)
    }

    pub(crate) fn new(errors: Vec<ArgumentError>, total_width: usize) -> Self {
        Self {
            errors,
            total_width,
        }
    }

    /// The number of errors in the report.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the report has no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn summary(&self) -> String {
        match self.errors.len() {
            1 => "1 argument does not match any declared option.".to_string(),
            n => format!("{n} arguments do not match any declared option."),
        }
    }

    fn renderer(&self, lefts: &[String]) -> ColumnRenderer {
        let widest = lefts.iter().map(|left| left.chars().count()).max().unwrap_or(0);
        let left = std::cmp::min(widest, MAXIMUM_LEFT_WIDTH);
        let target_total_width = (self.total_width as f64 * TARGET_TOTAL_FACTOR) as usize;
        let non_right = INDENT + left + PADDING_WIDTH;
        let right = std::cmp::max(
            target_total_width.saturating_sub(non_right),
            MINIMUM_RIGHT_WIDTH,
        );

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Rendering errors with columns left={left}, right={right} (total {}).",
                self.total_width
            );
        }

        ColumnRenderer::new(left, right)
    }

    /// The per-argument lines of the report, without the leading `Parse error: ..` summary.
    ///
    /// An argument or reason which doesn't fit its column wraps onto further lines.
    pub fn lines(&self) -> Vec<String> {
        let lefts: Vec<String> = self
            .errors
            .iter()
            .map(|error| format!("'{}'", error.argument()))
            .collect();
        let renderer = self.renderer(&lefts);

        lefts
            .iter()
            .zip(&self.errors)
            .flat_map(|(left, error)| renderer.render(left, &format!("{}.", error.kind())))
            .collect()
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.summary())?;

        for line in self.lines() {
            write!(f, "\n{line}")?;
        }

        Ok(())
    }
}

#[derive(Debug)]
struct ColumnRenderer {
    left: usize,
    right: usize,
}

impl ColumnRenderer {
    fn new(left: usize, right: usize) -> Self {
        // The right column must fit at least 2 characters (so we can hyphenate).
        assert!(right >= 2);
        Self { left, right }
    }

    fn render(&self, left: &str, right: &str) -> Vec<String> {
        let left_width = self.left;
        let padding = " ".repeat(PADDING_WIDTH);
        let indent = " ".repeat(INDENT);
        let mut out = Vec::default();
        let right_parts = chunk(right, self.right);
        let mut right_parts = right_parts.iter();

        // A left value wider than its column takes its own line.
        if left.chars().count() > left_width {
            out.push(format!("{indent}{left}"));
        } else {
            match right_parts.next() {
                Some(part) => out.push(format!("{indent}{left:left_width$}{padding}{part}")),
                None => out.push(format!("{indent}{left}")),
            }
        }

        for part in right_parts {
            out.push(format!("{indent}{:left_width$}{padding}{part}", ""));
        }

        out
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}
