use crate::api::{BoundValues, Schema};
use crate::error::{ConfigError, ParseFailure};

/// Behaviour of a strongly-typed options struct.
///
/// Usually implemented via `#[derive(Options)]`, but may be implemented by hand:
///
/// ```
/// # use optbind_core as optbind;
/// use optbind::{BoundValues, ConfigError, OptionSpec, Options, Schema};
///
/// struct Settings {
///     verbose: bool,
///     retries: i32,
/// }
///
/// impl Options for Settings {
///     fn schema() -> Result<Schema, ConfigError> {
///         Schema::builder()
///             .add(OptionSpec::of::<bool>().long("verbose").short('v').flag())
///             .add(OptionSpec::of::<i32>().long("retries").default_value("3"))
///             .build()
///     }
///
///     fn construct(bound: BoundValues) -> Self {
///         let mut extractor = bound.extractor();
///         Settings {
///             verbose: extractor.required(),
///             retries: extractor.required(),
///         }
///     }
/// }
///
/// let settings = Settings::parse_tokens(&["-v"]).unwrap();
/// assert!(settings.verbose);
/// assert_eq!(settings.retries, 3);
/// ```
pub trait Options: Sized {
    /// The schema, with one option per bound field (in field order).
    fn schema() -> Result<Schema, ConfigError>;

    /// Construct from the values of a successful parse.
    fn construct(bound: BoundValues) -> Self;

    /// Parse the tokens into `Self`.
    ///
    /// ### Panics
    /// If the schema is invalid; this is a programming error rather than an input error.
    fn parse_tokens(tokens: &[&str]) -> Result<Self, ParseFailure> {
        let schema = Self::schema().expect("Invalid Options schema");
        schema.parse(tokens).map(Self::construct)
    }

    /// Parse the process arguments (excluding the program name) into `Self`.
    ///
    /// ### Panics
    /// If the schema is invalid; this is a programming error rather than an input error.
    fn parse_env() -> Result<Self, ParseFailure> {
        let schema = Self::schema().expect("Invalid Options schema");
        schema.parse_env().map(Self::construct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OptionSpec;

    #[derive(Debug, PartialEq)]
    struct Settings {
        name: Option<String>,
        level: i8,
        rest: Vec<String>,
    }

    impl Options for Settings {
        fn schema() -> Result<Schema, ConfigError> {
            Schema::builder()
                .add(OptionSpec::of::<String>().long("name").optional())
                .add(OptionSpec::of::<i8>().short('l'))
                .build()
        }

        fn construct(bound: BoundValues) -> Self {
            let mut extractor = bound.extractor();
            Settings {
                name: extractor.optional(),
                level: extractor.required(),
                rest: extractor.positionals(),
            }
        }
    }

    struct Broken;

    impl Options for Broken {
        fn schema() -> Result<Schema, ConfigError> {
            Schema::builder()
                .add(OptionSpec::of::<i8>().short('l'))
                .add(OptionSpec::of::<i8>().short('l'))
                .build()
        }

        fn construct(_bound: BoundValues) -> Self {
            Broken
        }
    }

    #[test]
    fn parse_tokens() {
        assert_eq!(
            Settings::parse_tokens(&["-l", "0x7", "a", "--", "-l"]).unwrap(),
            Settings {
                name: None,
                level: 7,
                rest: vec!["a".to_string(), "-l".to_string()],
            }
        );
    }

    #[test]
    fn parse_tokens_failure() {
        let failure = Settings::parse_tokens(&["--name", "--level"]).unwrap_err();
        assert_eq!(
            failure.messages(),
            vec![
                "option --level does not exist",
                "option --name must be followed immediately by an argument but none was found",
            ]
        );
    }

    #[test]
    #[should_panic(expected = "Invalid Options schema")]
    fn parse_tokens_invalid_schema() {
        let _ = Broken::parse_tokens(&[]);
    }
}
