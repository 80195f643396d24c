#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::{DefaultPolicy, Schema};
use crate::binder::Binding;

/// Apply the default policy of every option that was never requested, and of every requested primitive option
/// whose value is still absent.
///
/// Literal defaults are coerced with the option's own name as the display, and report their problems as usual.
pub(crate) fn resolve(schema: &Schema, binding: &mut Binding) {
    let Binding {
        working, problems, ..
    } = binding;

    for (spec, working_option) in schema.specs().iter().zip(working.iter_mut()) {
        if working_option.value.is_some() {
            continue;
        }

        // A requested non-primitive keeps its failed value absent.
        if working_option.is_requested() && spec.semantic_type().zero_value().is_none() {
            continue;
        }

        match spec.default_policy() {
            DefaultPolicy::Literal(literal) => {
                #[cfg(feature = "tracing_debug")]
                debug!("Falling back '{}' to \"{literal}\".", spec.name());
                working_option.value = spec.coerce(&spec.name(), literal, problems);
            }
            DefaultPolicy::ZeroValue => {
                #[cfg(feature = "tracing_debug")]
                debug!("Falling back '{}' to zero.", spec.name());
                working_option.value = spec.semantic_type().zero_value();
            }
            DefaultPolicy::NoDefault => {
                // Do nothing.
            }
        }
    }
}
