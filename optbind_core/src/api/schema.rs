use std::collections::HashMap;
use std::env;

use crate::api::{BoundValues, OptionSpec};
use crate::error::{ConfigError, ParseFailure};
use crate::model::SemanticType;
use crate::parser;

/// The schema builder.
///
/// ### Example
/// ```
/// # use optbind_core as optbind;
/// use optbind::{OptionSpec, SchemaBuilder, TypedValue};
///
/// let schema = SchemaBuilder::new()
///     .add(OptionSpec::of::<bool>().long("verbose").flag())
///     .add(OptionSpec::of::<String>().long("name").short('n'))
///     .add(OptionSpec::of::<i32>().long("retries").default_value("3"))
///     .build()
///     .unwrap();
///
/// let bound = schema.parse(&["-n", "Ada", "--verbose", "extra"]).unwrap();
/// assert!(matches!(bound.values()[0], Some(TypedValue::Bool(true))));
/// assert!(matches!(&bound.values()[1], Some(TypedValue::String(name)) if name == "Ada"));
/// assert!(matches!(bound.values()[2], Some(TypedValue::Int(3))));
/// assert_eq!(bound.positionals(), &["extra".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    specs: Vec<OptionSpec>,
}

impl SchemaBuilder {
    /// Create an empty schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option to the schema.
    ///
    /// The order of addition is the order of the bound values.
    pub fn add(mut self, spec: OptionSpec) -> Self {
        self.specs.push(spec);
        self
    }

    /// Build the schema.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build(self) -> Result<Schema, ConfigError> {
        let mut longs: HashMap<String, usize> = HashMap::default();
        let mut shorts: HashMap<char, usize> = HashMap::default();

        for (index, spec) in self.specs.iter().enumerate() {
            match (spec.long_name(), spec.short_name()) {
                (None, None) => {
                    return Err(ConfigError(format!(
                        "Option #{index} must have a long or short name."
                    )));
                }
                (Some(""), _) => {
                    return Err(ConfigError(format!(
                        "Option #{index} cannot have an empty long name."
                    )));
                }
                _ => {}
            }

            if let Some(long) = spec.long_name() {
                if longs.insert(long.to_string(), index).is_some() {
                    return Err(ConfigError(format!("Cannot duplicate the option '{long}'.")));
                }
            }

            if let Some(short) = spec.short_name() {
                if short == '-' {
                    return Err(ConfigError(format!(
                        "Option '{}' cannot use '-' as its short name.",
                        spec.name()
                    )));
                }

                if shorts.insert(short, index).is_some() {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the short option '{short}'."
                    )));
                }
            }

            if !spec.takes_value() && spec.semantic_type() != &SemanticType::Bool {
                return Err(ConfigError(format!(
                    "Option '{}' cannot be a flag unless it is boolean.",
                    spec.name()
                )));
            }

            if spec.semantic_type() == &SemanticType::Custom && !spec.has_coercion() {
                return Err(ConfigError(format!(
                    "Option '{}' is of a custom type, but has no coercion.",
                    spec.name()
                )));
            }
        }

        Ok(Schema {
            specs: self.specs,
            longs,
            shorts,
        })
    }
}

/// An immutable, validated option schema.
///
/// The same schema may be used for any number of parses, including concurrently.
#[derive(Debug)]
pub struct Schema {
    specs: Vec<OptionSpec>,
    longs: HashMap<String, usize>,
    shorts: HashMap<char, usize>,
}

impl Schema {
    /// Start a [`SchemaBuilder`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// The option specifications, in declaration order.
    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    pub(crate) fn index_long(&self, name: &str) -> Option<usize> {
        self.longs.get(name).copied()
    }

    pub(crate) fn index_short(&self, name: char) -> Option<usize> {
        self.shorts.get(&name).copied()
    }

    /// Bind the tokens against this schema.
    ///
    /// All the tokens are scanned and every option is resolved before returning, so that the
    /// failure carries every problem in the input.
    ///
    /// ### Example
    /// ```
    /// # use optbind_core as optbind;
    /// use optbind::{OptionSpec, Schema};
    ///
    /// let schema = Schema::builder()
    ///     .add(OptionSpec::of::<i32>().long("count"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let failure = schema.parse(&["--count", "notanumber", "--frobnicate"]).unwrap_err();
    /// assert_eq!(
    ///     failure.messages(),
    ///     vec![
    ///         "invalid int value \"notanumber\" for --count",
    ///         "option --frobnicate does not exist",
    ///         "option --count must be followed immediately by an argument but none was found",
    ///     ]
    /// );
    ///
    /// assert!(schema.parse(&[]).is_ok());
    /// ```
    pub fn parse(&self, tokens: &[&str]) -> Result<BoundValues, ParseFailure> {
        parser::parse(self, tokens)
    }

    /// Bind the process arguments (excluding the program name) against this schema.
    pub fn parse_env(&self) -> Result<BoundValues, ParseFailure> {
        let command_input: Vec<String> = env::args().skip(1).collect();
        self.parse(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }
}
