#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::Schema;
use crate::binder::model::*;
use crate::error::{Problem, Problems};
use crate::model::{SemanticType, TypedValue};

const TERMINATOR: &str = "--";

/// How a single token was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Consumed {
    /// The `--` which ends option scanning.
    Terminator,
    /// One or more (bundled) options were activated; some may have been unrecognized.
    Activation,
    /// The value of the pending option.
    Value,
    Positional,
}

/// The token scanning state machine.
///
/// Tokens are fed one at a time, left to right.
/// The most recently activated option stays *pending*, and consumes the next plain token as its value.
#[derive(Debug)]
pub(crate) struct Binder<'s> {
    schema: &'s Schema,
    working: Vec<WorkingOption>,
    requested: Vec<usize>,
    unrecognized: Vec<String>,
    positionals: Vec<String>,
    pending: Option<usize>,
    terminated: bool,
    problems: Problems,
}

impl<'s> Binder<'s> {
    pub(crate) fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            working: schema
                .specs()
                .iter()
                .map(|_| WorkingOption::default())
                .collect(),
            requested: Vec::default(),
            unrecognized: Vec::default(),
            positionals: Vec::default(),
            pending: None,
            terminated: false,
            problems: Problems::default(),
        }
    }

    pub(crate) fn feed(&mut self, token: &str) -> Consumed {
        // 1. After the terminator, everything is positional (verbatim).
        // 2. Exactly '--' is the terminator.
        // 3. Find a 'long' option, such as:
        //  --initial
        // 4. Find 'short' option(s), such as (both -i and -v are example short options):
        //  -i
        //  -iv
        // 5. Otherwise, the value of the pending option, or a positional.
        if self.terminated {
            self.positionals.push(token.to_string());
            Consumed::Positional
        } else if token == TERMINATOR {
            #[cfg(feature = "tracing_debug")]
            debug!("Terminator found, remaining tokens are positional.");
            self.terminated = true;
            self.pending = None;
            Consumed::Terminator
        } else if let Some(name) = token.strip_prefix(TERMINATOR) {
            self.match_option(token, name);
            Consumed::Activation
        } else if token.len() > 1 && token.starts_with('-') {
            self.match_option_short(&token[1..]);
            Consumed::Activation
        } else {
            self.match_value(token)
        }
    }

    fn match_option(&mut self, token: &str, name: &str) {
        self.pending = match self.schema.index_long(name) {
            Some(index) => {
                self.activate(index, token.to_string());
                Some(index)
            }
            None => {
                #[cfg(feature = "tracing_debug")]
                debug!("Option '{token}' does not exist.");
                self.unrecognize(token.to_string());
                None
            }
        };
    }

    fn match_option_short(&mut self, bundle: &str) {
        let mut last = None;

        for single in bundle.chars() {
            let display = format!("-{single}");
            last = match self.schema.index_short(single) {
                Some(index) => {
                    self.activate(index, display);
                    Some(index)
                }
                None => {
                    #[cfg(feature = "tracing_debug")]
                    debug!("Short option '{display}' does not exist.");
                    self.unrecognize(display);
                    None
                }
            };
        }

        // Only the final option of the bundle may consume the subsequent value.
        self.pending = last;
    }

    fn match_value(&mut self, token: &str) -> Consumed {
        match self.pending.take() {
            Some(index) if self.schema.specs()[index].takes_value() => {
                let spec = &self.schema.specs()[index];
                let working = &mut self.working[index];
                let display = working
                    .display
                    .as_deref()
                    .expect("internal error - a pending option must have been activated");
                #[cfg(feature = "tracing_debug")]
                debug!("Binding '{token}' to {display}.");
                working.value = spec.coerce(display, token, &mut self.problems);
                Consumed::Value
            }
            _ => {
                self.positionals.push(token.to_string());
                Consumed::Positional
            }
        }
    }

    fn activate(&mut self, index: usize, display: String) {
        #[cfg(feature = "tracing_debug")]
        debug!("Activating {display}.");

        if self.working[index].display.replace(display).is_none() {
            self.requested.push(index);
        }
    }

    fn unrecognize(&mut self, token: String) {
        if !self.unrecognized.contains(&token) {
            self.unrecognized.push(token);
        }
    }

    /// Finish scanning: report the unrecognized options, then finalize each requested option.
    pub(crate) fn close(self) -> Binding {
        let Binder {
            schema,
            mut working,
            requested,
            unrecognized,
            positionals,
            mut problems,
            ..
        } = self;

        for token in unrecognized {
            problems.report(Problem::UnknownOption(token));
        }

        for &index in &requested {
            let spec = &schema.specs()[index];
            let working_option = &mut working[index];
            working_option.set = !spec.takes_value() || working_option.value.is_some();

            if !working_option.set {
                let display = working_option
                    .display
                    .clone()
                    .expect("internal error - a requested option must have been activated");
                problems.report(Problem::MissingArgument(display));
            } else if !spec.takes_value() && spec.semantic_type() == &SemanticType::Bool {
                // Flags are pure presence signals.
                working_option.value.replace(TypedValue::Bool(true));
            }
        }

        Binding {
            working,
            positionals,
            problems,
        }
    }
}
