use crate::api::Bindable;
use crate::coerce;
use crate::error::Problems;
use crate::model::{SemanticType, TypedValue};

/// A custom coercion: `(option display, raw value, problems) -> value`.
///
/// Must report a problem whenever it returns `None`.
pub type CoercionFn = dyn Fn(&str, &str, &mut Problems) -> Option<TypedValue> + Send + Sync;

/// How an option is valued when it is not supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultPolicy {
    /// Leave the value absent.
    NoDefault,
    /// Coerce this literal, exactly as if it were supplied.
    Literal(String),
    /// Use the zero value of the semantic type (ex: `0`, `false`).
    ZeroValue,
}

/// The specification of a single option.
///
/// ### Example
/// ```
/// # use optbind_core as optbind;
/// use optbind::{OptionSpec, SemanticType};
///
/// let retries = OptionSpec::new(SemanticType::Int)
///     .long("retries")
///     .short('r')
///     .default_value("3");
/// assert_eq!(retries.name(), "retries");
/// ```
pub struct OptionSpec {
    long: Option<String>,
    short: Option<char>,
    semantic_type: SemanticType,
    coercion: Option<Box<CoercionFn>>,
    takes_value: bool,
    default: DefaultPolicy,
    required: bool,
}

impl OptionSpec {
    /// Create a value-taking option of the semantic type.
    /// Scalar types with a zero value default to it; all other types have no default.
    pub fn new(semantic_type: SemanticType) -> Self {
        let default = match semantic_type.zero_value() {
            Some(_) => DefaultPolicy::ZeroValue,
            None => DefaultPolicy::NoDefault,
        };

        Self {
            long: None,
            short: None,
            semantic_type,
            coercion: None,
            takes_value: true,
            default,
            required: true,
        }
    }

    /// Create a value-taking option for the type `T`.
    pub fn of<T: Bindable>() -> Self {
        Self::new(T::semantic_type())
    }

    /// Set the long name (used as `--NAME`).
    /// If repeated, only the final name applies.
    pub fn long(mut self, name: impl Into<String>) -> Self {
        self.long.replace(name.into());
        self
    }

    /// Set the short name (used as `-N`, or bundled as `-NMO`).
    /// If repeated, only the final name applies.
    pub fn short(mut self, name: char) -> Self {
        self.short.replace(name);
        self
    }

    /// Default to the `literal`, coerced as though it were supplied.
    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default = DefaultPolicy::Literal(literal.into());
        self
    }

    /// Override the built-in coercion.
    pub fn coercion(
        mut self,
        coercion: impl Fn(&str, &str, &mut Problems) -> Option<TypedValue> + Send + Sync + 'static,
    ) -> Self {
        self.coercion.replace(Box::new(coercion));
        self
    }

    /// Make this a value-less flag: its presence alone sets it `true`.
    /// Only applies to [`SemanticType::Bool`].
    pub fn flag(mut self) -> Self {
        self.takes_value = false;
        self
    }

    /// Allow this option to end up without a value, rather than reporting it as missing.
    /// Optional options are not given a zero value; only a literal default applies.
    pub fn optional(mut self) -> Self {
        self.required = false;

        if self.default == DefaultPolicy::ZeroValue {
            self.default = DefaultPolicy::NoDefault;
        }

        self
    }

    /// The name used for defaults and missing values: the long name if present, otherwise the short name.
    pub fn name(&self) -> String {
        match (&self.long, &self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => String::default(),
        }
    }

    /// The long name, without the leading `--`.
    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The short name, without the leading `-`.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// The semantic type the value is coerced to.
    pub fn semantic_type(&self) -> &SemanticType {
        &self.semantic_type
    }

    /// Whether a value token must follow the option.
    pub fn takes_value(&self) -> bool {
        self.takes_value
    }

    /// What to do when the option is not supplied.
    pub fn default_policy(&self) -> &DefaultPolicy {
        &self.default
    }

    /// Whether an absent value is reported as a problem.
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub(crate) fn has_coercion(&self) -> bool {
        self.coercion.is_some()
    }

    /// Coerce `value` for this option.
    /// The custom coercion, when present, takes precedence over the built-in one.
    pub fn coerce(&self, option: &str, value: &str, problems: &mut Problems) -> Option<TypedValue> {
        match &self.coercion {
            Some(custom) => custom(option, value, problems),
            None => coerce::coerce(&self.semantic_type, option, value, problems),
        }
    }
}

impl std::fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let long = match &self.long {
            Some(long) => format!("--{long}"),
            None => "".to_string(),
        };
        let short = match &self.short {
            Some(short) => format!(" -{short}"),
            None => "".to_string(),
        };
        let custom = if self.coercion.is_some() { ", custom" } else { "" };

        write!(
            f,
            "OptionSpec[{long}{short}, {t}{custom}, takes_value={v}, {d:?}, required={r}]",
            t = self.semantic_type,
            v = self.takes_value,
            d = self.default,
            r = self.required,
        )
    }
}
