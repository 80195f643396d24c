use std::any::Any;

use crate::api::Bindable;
use crate::model::TypedValue;

/// The successful outcome of a parse: one value per option (in schema order), plus the positional arguments.
#[derive(Debug)]
pub struct BoundValues {
    values: Vec<Option<TypedValue>>,
    positionals: Vec<String>,
}

impl BoundValues {
    pub(crate) fn new(values: Vec<Option<TypedValue>>, positionals: Vec<String>) -> Self {
        Self {
            values,
            positionals,
        }
    }

    /// The values in schema order.
    /// A value is only absent for an optional option that was neither supplied nor defaulted.
    pub fn values(&self) -> &[Option<TypedValue>] {
        &self.values
    }

    /// The tokens which were not consumed by an option, in order.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Split into the schema-ordered values and the positional arguments.
    pub fn into_parts(self) -> (Vec<Option<TypedValue>>, Vec<String>) {
        (self.values, self.positionals)
    }

    /// Consume the values in schema order, converting each into its field type.
    pub fn extractor(self) -> Extractor {
        Extractor {
            values: self.values.into_iter(),
            positionals: self.positionals,
        }
    }
}

/// Sequential, typed access to [`BoundValues`].
///
/// Each call consumes the next value in schema order.
/// The calls must align to the schema the values were bound by; misalignment is an internal error and panics.
///
/// ### Example
/// ```
/// # use optbind_core as optbind;
/// use optbind::{OptionSpec, Schema};
///
/// let schema = Schema::builder()
///     .add(OptionSpec::of::<String>().long("name"))
///     .add(OptionSpec::of::<i64>().long("limit").optional())
///     .build()
///     .unwrap();
///
/// let mut extractor = schema.parse(&["--name", "Ada", "rest"]).unwrap().extractor();
/// let name: String = extractor.required();
/// let limit: Option<i64> = extractor.optional();
///
/// assert_eq!(name, "Ada");
/// assert_eq!(limit, None);
/// assert_eq!(extractor.positionals(), vec!["rest".to_string()]);
/// ```
#[derive(Debug)]
pub struct Extractor {
    values: std::vec::IntoIter<Option<TypedValue>>,
    positionals: Vec<String>,
}

impl Extractor {
    fn next_slot(&mut self) -> Option<TypedValue> {
        self.values
            .next()
            .expect("internal error - extractor must align to the schema")
    }

    /// The next value, which must be present.
    pub fn required<T: Bindable>(&mut self) -> T {
        let value = self
            .next_slot()
            .expect("internal error - required value must be present after a successful parse");
        convert(value)
    }

    /// The next value, if present.
    pub fn optional<T: Bindable>(&mut self) -> Option<T> {
        self.next_slot().map(convert)
    }

    /// The next value, which must be present and produced by a custom coercion for `T`.
    pub fn custom<T: Any>(&mut self) -> T {
        let value = self
            .next_slot()
            .expect("internal error - required value must be present after a successful parse");
        downcast(value)
    }

    /// The next value, if present, produced by a custom coercion for `T`.
    pub fn custom_optional<T: Any>(&mut self) -> Option<T> {
        self.next_slot().map(downcast)
    }

    /// Take the positional arguments (subsequent calls produce an empty list).
    pub fn positionals(&mut self) -> Vec<String> {
        std::mem::take(&mut self.positionals)
    }
}

fn convert<T: Bindable>(value: TypedValue) -> T {
    match T::from_value(value) {
        Ok(converted) => converted,
        Err(other) => unreachable!(
            "internal error - cannot convert {other:?} to {}",
            std::any::type_name::<T>()
        ),
    }
}

fn downcast<T: Any>(value: TypedValue) -> T {
    match value {
        TypedValue::Custom(custom) => match custom.downcast::<T>() {
            Ok(converted) => converted,
            Err(custom) => unreachable!(
                "internal error - cannot downcast {custom:?} to {}",
                std::any::type_name::<T>()
            ),
        },
        other => unreachable!(
            "internal error - expected a custom value for {}, found {other:?}",
            std::any::type_name::<T>()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound() -> BoundValues {
        BoundValues::new(
            vec![
                Some(TypedValue::Bool(true)),
                None,
                Some(TypedValue::custom((1, 2))),
                Some(TypedValue::Int(7)),
            ],
            vec!["a".to_string(), "b".to_string()],
        )
    }

    #[test]
    fn accessors() {
        let bound = bound();
        assert_eq!(bound.values().len(), 4);
        assert_eq!(bound.positionals(), &["a".to_string(), "b".to_string()]);

        let (values, positionals) = bound.into_parts();
        assert_matches!(values[3], Some(TypedValue::Int(7)));
        assert_eq!(positionals.len(), 2);
    }

    #[test]
    fn extract() {
        let mut extractor = bound().extractor();
        assert!(extractor.required::<bool>());
        assert_eq!(extractor.optional::<String>(), None);
        assert_eq!(extractor.custom::<(i32, i32)>(), (1, 2));
        assert_eq!(extractor.optional::<i32>(), Some(7));
        assert_eq!(extractor.positionals(), vec!["a".to_string(), "b".to_string()]);
        assert!(extractor.positionals().is_empty());
    }

    #[test]
    fn extract_custom_optional() {
        let mut extractor = BoundValues::new(
            vec![None, Some(TypedValue::custom("x".to_string()))],
            vec![],
        )
        .extractor();
        assert_eq!(extractor.custom_optional::<String>(), None);
        assert_eq!(extractor.custom_optional::<String>(), Some("x".to_string()));
    }

    #[test]
    #[should_panic]
    fn extract_misaligned_type() {
        let mut extractor = bound().extractor();
        extractor.required::<i32>();
    }

    #[test]
    #[should_panic]
    fn extract_required_absent() {
        let mut extractor = bound().extractor();
        extractor.required::<bool>();
        extractor.required::<String>();
    }

    #[test]
    #[should_panic]
    fn extract_exhausted() {
        let mut extractor = BoundValues::new(vec![], vec![]).extractor();
        extractor.optional::<i32>();
    }
}
