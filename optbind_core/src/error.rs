use thiserror::Error;

/// A schema definition error.
/// These are programmer errors, raised by [`crate::Schema::build`] before any token is seen.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// A recoverable problem found while binding tokens.
///
/// The `Display` form is the user facing message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Problem {
    /// A `--name`, or bundled `-c`, with no matching option.
    #[error("option {0} does not exist")]
    UnknownOption(String),

    /// A value-taking option that was never given its value.
    #[error("option {0} must be followed immediately by an argument but none was found")]
    MissingArgument(String),

    /// A value that could not be coerced.
    #[error("invalid {kind} value \"{value}\" for {option}")]
    InvalidValue {
        /// The kind of value expected (ex: `int`).
        kind: String,
        /// The raw value.
        value: String,
        /// How the option was displayed (ex: `--count`).
        option: String,
    },

    /// A required option that was neither supplied nor defaulted.
    #[error("missing required value for {0}")]
    MissingRequired(String),

    /// A free-form message, typically from a custom coercion.
    #[error("{0}")]
    Message(String),
}

/// The problems accumulated over a single parse call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Problems(Vec<Problem>);

impl Problems {
    /// Record a problem.
    pub fn report(&mut self, problem: Problem) {
        self.0.push(problem);
    }

    /// Record an [`Problem::InvalidValue`].
    pub fn invalid(&mut self, kind: impl Into<String>, option: &str, value: &str) {
        self.report(Problem::InvalidValue {
            kind: kind.into(),
            value: value.to_string(),
            option: option.to_string(),
        });
    }

    /// Record a free-form [`Problem::Message`].
    pub fn message(&mut self, message: impl Into<String>) {
        self.report(Problem::Message(message.into()));
    }

    /// Whether no problem has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of problems recorded.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The problems, in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, Problem> {
        self.0.iter()
    }

    pub(crate) fn into_vec(self) -> Vec<Problem> {
        self.0
    }
}

/// The failed outcome of a parse: every problem found, in discovery order.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Parse error: {}", join_lines(.problems))]
pub struct ParseFailure {
    problems: Vec<Problem>,
}

impl ParseFailure {
    pub(crate) fn new(problems: Problems) -> Self {
        Self {
            problems: problems.into_vec(),
        }
    }

    /// The problems, in discovery order.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// The problems rendered as messages.
    pub fn messages(&self) -> Vec<String> {
        self.problems.iter().map(Problem::to_string).collect()
    }
}

fn join_lines(problems: &[Problem]) -> String {
    problems
        .iter()
        .map(Problem::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
