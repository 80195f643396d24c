use crate::model::{SemanticType, TypedValue};

/// Behaviour mapping a Rust type onto a [`SemanticType`], and back from the coerced [`TypedValue`].
///
/// Implemented for `String`, `bool`, `i8`, `char`, `i16`, `i32`, `i64`, `f32`, and `f64`.
/// Unit-only enums may implement this via `#[derive(Choices)]`.
pub trait Bindable: Sized {
    /// The semantic type which selects the coercion.
    fn semantic_type() -> SemanticType;

    /// Convert from the coerced value, giving it back when it is of the wrong variant.
    fn from_value(value: TypedValue) -> Result<Self, TypedValue>;
}

macro_rules! bindable {
    ($rust_type:ty, $variant:ident) => {
        impl Bindable for $rust_type {
            fn semantic_type() -> SemanticType {
                SemanticType::$variant
            }

            fn from_value(value: TypedValue) -> Result<Self, TypedValue> {
                match value {
                    TypedValue::$variant(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }
    };
}

bindable!(String, String);
bindable!(bool, Bool);
bindable!(i8, Byte);
bindable!(char, Char);
bindable!(i16, Short);
bindable!(i32, Int);
bindable!(i64, Long);
bindable!(f32, Float);
bindable!(f64, Double);
