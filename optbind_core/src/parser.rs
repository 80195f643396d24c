mod fallback;
mod result;

use crate::api::{BoundValues, Schema};
use crate::binder::Binder;
use crate::error::ParseFailure;

/// Bind the tokens against the schema.
///
/// Parsing happens in three phases:
/// 1. Token binding activates options and coerces their values, in a single scan of every token.
/// 2. Fallback applies the default policy to each unrequested option, and to each requested primitive option left
///    without a value.
/// 3. Result building collects the values in schema order, or all of the problems found.
pub(crate) fn parse(schema: &Schema, tokens: &[&str]) -> Result<BoundValues, ParseFailure> {
    let mut binder = Binder::new(schema);

    for token in tokens {
        binder.feed(token);
    }

    let mut binding = binder.close();
    fallback::resolve(schema, &mut binding);
    result::build(schema, binding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OptionSpec;
    use crate::error::Problems;
    use crate::model::{SemanticType, TypedValue};
    use rstest::rstest;

    const COLORS: &[&str] = &["Red", "Green", "Blue"];

    fn schema() -> Schema {
        Schema::builder()
            .add(OptionSpec::of::<bool>().long("verbose").flag())
            .add(OptionSpec::of::<String>().long("name").short('n'))
            .add(OptionSpec::of::<i32>().long("retries").default_value("3"))
            .build()
            .unwrap()
    }

    #[test]
    fn end_to_end() {
        let bound = parse(&schema(), &["-n", "Ada", "--verbose", "extra"]).unwrap();

        assert_matches!(bound.values()[0], Some(TypedValue::Bool(true)));
        assert_matches!(&bound.values()[1], Some(TypedValue::String(name)) if name == "Ada");
        assert_matches!(bound.values()[2], Some(TypedValue::Int(3)));
        assert_eq!(bound.positionals(), &["extra".to_string()]);
    }

    #[test]
    fn flag_absent_is_false() {
        let bound = parse(&schema(), &["--name", "Ada"]).unwrap();
        assert_matches!(bound.values()[0], Some(TypedValue::Bool(false)));
    }

    #[rstest]
    #[case(vec!["--frobnicate", "-n", "Ada"], vec!["option --frobnicate does not exist"])]
    #[case(
        vec!["-n"],
        vec!["option -n must be followed immediately by an argument but none was found"]
    )]
    #[case(vec!["--verbose"], vec!["missing required value for name"])]
    #[case(
        vec!["--retries", "many", "-xn", "Ada", "--bogus"],
        vec![
            "invalid int value \"many\" for --retries",
            "option -x does not exist",
            "option --bogus does not exist",
            "option --retries must be followed immediately by an argument but none was found",
        ]
    )]
    #[case(
        vec!["--", "-n", "Ada"],
        vec!["missing required value for name"]
    )]
    fn failure(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        let failure = parse(&schema(), &tokens).unwrap_err();
        assert_eq!(failure.messages(), expected);
    }

    #[test]
    fn problem_ordering() {
        let schema = Schema::builder()
            .add(OptionSpec::of::<i32>().long("count"))
            .add(OptionSpec::of::<String>().long("name"))
            .add(OptionSpec::of::<i64>().long("limit").default_value("none"))
            .add(OptionSpec::of::<String>().long("mode"))
            .build()
            .unwrap();

        let failure = parse(&schema, &["--count", "x", "--nope", "--name"]).unwrap_err();

        assert_eq!(
            failure.messages(),
            vec![
                "invalid int value \"x\" for --count",
                "option --nope does not exist",
                "option --count must be followed immediately by an argument but none was found",
                "option --name must be followed immediately by an argument but none was found",
                "invalid long value \"none\" for limit",
                "missing required value for mode",
            ]
        );
    }

    #[test]
    fn numeric_literals() {
        let schema = Schema::builder()
            .add(OptionSpec::of::<i32>().long("count"))
            .build()
            .unwrap();

        let bound = parse(&schema, &["--count", "0x10"]).unwrap();
        assert_matches!(bound.values()[0], Some(TypedValue::Int(16)));

        let failure = parse(&schema, &["--count", "notanumber"]).unwrap_err();
        assert_eq!(
            failure.messages(),
            vec![
                "invalid int value \"notanumber\" for --count",
                "option --count must be followed immediately by an argument but none was found",
            ]
        );
    }

    #[rstest]
    #[case("RED", 0)]
    #[case("green", 1)]
    #[case("Blue", 2)]
    fn enum_case_insensitive(#[case] value: &str, #[case] index: usize) {
        let schema = Schema::builder()
            .add(OptionSpec::new(SemanticType::Enum(COLORS)).long("color"))
            .build()
            .unwrap();

        let bound = parse(&schema, &["--color", value]).unwrap();

        assert_matches!(
            bound.values()[0],
            Some(TypedValue::Enum(member)) if member.index == index && member.name == COLORS[index]
        );
    }

    #[test]
    fn custom_coercion() {
        fn parse_point(option: &str, value: &str, problems: &mut Problems) -> Option<TypedValue> {
            match value.split_once(',') {
                Some((x, y)) => match (x.parse::<i32>(), y.parse::<i32>()) {
                    (Ok(x), Ok(y)) => Some(TypedValue::custom((x, y))),
                    _ => {
                        problems.invalid("point", option, value);
                        None
                    }
                },
                None => {
                    problems.message(format!("{option} expects 'x,y' but found \"{value}\""));
                    None
                }
            }
        }

        let schema = Schema::builder()
            .add(
                OptionSpec::new(SemanticType::Custom)
                    .long("origin")
                    .coercion(parse_point),
            )
            .add(
                OptionSpec::new(SemanticType::Custom)
                    .short('t')
                    .coercion(parse_point)
                    .default_value("1,1"),
            )
            .build()
            .unwrap();

        let mut extractor = parse(&schema, &["--origin", "3,4"]).unwrap().extractor();
        assert_eq!(extractor.custom::<(i32, i32)>(), (3, 4));
        assert_eq!(extractor.custom::<(i32, i32)>(), (1, 1));

        let failure = parse(&schema, &["--origin", "3", "-t", "a,b"]).unwrap_err();
        assert_eq!(
            failure.messages(),
            vec![
                "--origin expects 'x,y' but found \"3\"",
                "invalid point value \"a,b\" for -t",
                "option --origin must be followed immediately by an argument but none was found",
                "option -t must be followed immediately by an argument but none was found",
            ]
        );
    }

    #[test]
    fn shared_schema() {
        let schema = schema();

        std::thread::scope(|scope| {
            let first = scope.spawn(|| parse(&schema, &["-n", "a"]).is_ok());
            let second = scope.spawn(|| parse(&schema, &["-n"]).is_err());
            assert!(first.join().unwrap());
            assert!(second.join().unwrap());
        });
    }
}
