use crate::api::{BoundValues, DefaultPolicy, Schema};
use crate::binder::Binding;
use crate::error::{ParseFailure, Problem};

/// Assemble the values in schema order, or fail with every problem found.
///
/// A required option without a value is reported as missing, unless it was already reported.
/// Requested options were reported by the binder, and options with a literal default by the fallback.
pub(crate) fn build(schema: &Schema, binding: Binding) -> Result<BoundValues, ParseFailure> {
    let Binding {
        working,
        positionals,
        mut problems,
        ..
    } = binding;
    let mut values = Vec::with_capacity(working.len());

    for (spec, working_option) in schema.specs().iter().zip(working.into_iter()) {
        if working_option.value.is_none()
            && spec.is_required()
            && !working_option.is_requested()
            && spec.default_policy() == &DefaultPolicy::NoDefault
        {
            problems.report(Problem::MissingRequired(spec.name()));
        }

        values.push(working_option.value);
    }

    if problems.is_empty() {
        Ok(BoundValues::new(values, positionals))
    } else {
        Err(ParseFailure::new(problems))
    }
}
