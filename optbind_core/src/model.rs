use std::any::Any;

/// The semantic type of an option, which selects its built-in coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    /// Identity coercion.
    String,
    /// `true` or `false`, case-insensitive.
    Bool,
    /// 8 bit signed integer.
    Byte,
    /// A single character.
    Char,
    /// 16 bit signed integer.
    Short,
    /// 32 bit signed integer.
    Int,
    /// 64 bit signed integer.
    Long,
    /// 32 bit float.
    Float,
    /// 64 bit float.
    Double,
    /// One of the member names, matched case-insensitively.
    Enum(&'static [&'static str]),
    /// Coerced exclusively by a custom coercion.
    Custom,
}

impl SemanticType {
    /// The canonical zero value for scalar types.
    /// Types without a zero (`String`, `Enum`, `Custom`) produce `None`.
    pub fn zero_value(&self) -> Option<TypedValue> {
        match self {
            SemanticType::Bool => Some(TypedValue::Bool(false)),
            SemanticType::Byte => Some(TypedValue::Byte(0)),
            SemanticType::Char => Some(TypedValue::Char('\0')),
            SemanticType::Short => Some(TypedValue::Short(0)),
            SemanticType::Int => Some(TypedValue::Int(0)),
            SemanticType::Long => Some(TypedValue::Long(0)),
            SemanticType::Float => Some(TypedValue::Float(0.0)),
            SemanticType::Double => Some(TypedValue::Double(0.0)),
            SemanticType::String | SemanticType::Enum(_) | SemanticType::Custom => None,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            SemanticType::String => "string",
            SemanticType::Bool => "boolean",
            SemanticType::Byte => "byte",
            SemanticType::Char => "char",
            SemanticType::Short => "short",
            SemanticType::Int => "int",
            SemanticType::Long => "long",
            SemanticType::Float => "float",
            SemanticType::Double => "double",
            SemanticType::Enum(_) => "enum",
            SemanticType::Custom => "custom",
        }
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// A coerced option value.
#[derive(Debug)]
pub enum TypedValue {
    /// A `String` value.
    String(String),
    /// A `Bool` value.
    Bool(bool),
    /// A `Byte` value.
    Byte(i8),
    /// A `Char` value.
    Char(char),
    /// A `Short` value.
    Short(i16),
    /// An `Int` value.
    Int(i32),
    /// A `Long` value.
    Long(i64),
    /// A `Float` value.
    Float(f32),
    /// A `Double` value.
    Double(f64),
    /// The matched member of an `Enum`.
    Enum(EnumMember),
    /// The boxed result of a custom coercion.
    Custom(CustomValue),
}

impl TypedValue {
    /// Wrap an arbitrary value produced by a custom coercion.
    pub fn custom<T: Any>(value: T) -> Self {
        TypedValue::Custom(CustomValue::new(value))
    }
}

/// The matched member of an [`SemanticType::Enum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumMember {
    /// Position of the member in the declared member list.
    pub index: usize,
    /// Declared name of the member (not the user's spelling).
    pub name: &'static str,
}

/// A type-erased value produced by a custom coercion.
pub struct CustomValue {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl CustomValue {
    /// Erase `value`.
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Recover the original value, or give back `self` when `T` is not the erased type.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let CustomValue { value, type_name } = self;

        match value.downcast::<T>() {
            Ok(boxed) => Ok(*boxed),
            Err(value) => Err(CustomValue { value, type_name }),
        }
    }

    /// Name of the erased type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl std::fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CustomValue<{}>", self.type_name)
    }
}
