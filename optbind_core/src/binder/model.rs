use crate::error::Problems;
use crate::model::TypedValue;

/// The parse-time state of a single option.
/// One per spec, indexed by the spec's position, and discarded when the parse call returns.
#[derive(Debug, Default)]
pub(crate) struct WorkingOption {
    /// How the option was activated (ex: `--verbose` or `-v`); `None` when never requested.
    pub display: Option<String>,
    pub value: Option<TypedValue>,
    pub set: bool,
}

impl WorkingOption {
    pub(crate) fn is_requested(&self) -> bool {
        self.display.is_some()
    }
}

/// The result of scanning all the tokens.
#[derive(Debug)]
pub(crate) struct Binding {
    pub working: Vec<WorkingOption>,
    pub positionals: Vec<String>,
    pub problems: Problems,
}
