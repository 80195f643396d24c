use optbind::{Choices, OptionSpec, Options, Problem, Problems, Schema};
use rstest::rstest;

#[macro_use]
extern crate assert_matches;

#[derive(Debug, PartialEq, Options)]
struct Scenario {
    verbose: bool,
    #[optbind(short = 'n')]
    name: String,
    #[optbind(default = "3")]
    retries: i32,
    #[optbind(positionals)]
    rest: Vec<String>,
}

#[test]
fn derive_scenario() {
    let scenario = Scenario::parse_tokens(&["-n", "Ada", "--verbose", "extra"]).unwrap();

    assert_eq!(
        scenario,
        Scenario {
            verbose: true,
            name: "Ada".to_string(),
            retries: 3,
            rest: vec!["extra".to_string()],
        }
    );
}

#[test]
fn builder_scenario() {
    let schema = Schema::builder()
        .add(OptionSpec::of::<bool>().long("verbose").flag())
        .add(OptionSpec::of::<String>().long("name").short('n'))
        .add(OptionSpec::of::<i32>().long("retries").default_value("3"))
        .build()
        .unwrap();

    let mut extractor = schema
        .parse(&["-n", "Ada", "--verbose", "extra"])
        .unwrap()
        .extractor();

    assert!(extractor.required::<bool>());
    assert_eq!(extractor.required::<String>(), "Ada");
    assert_eq!(extractor.required::<i32>(), 3);
    assert_eq!(extractor.positionals(), vec!["extra".to_string()]);
}

#[derive(Debug, Clone, Copy, PartialEq, Choices)]
enum Speed {
    Slow,
    Fast,
}

#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

fn parse_point(option: &str, value: &str, problems: &mut Problems) -> Option<Point> {
    let parsed = value
        .split_once(',')
        .and_then(|(x, y)| {
            Some((x.trim().parse::<i32>().ok()?, y.trim().parse::<i32>().ok()?))
        });

    match parsed {
        Some((x, y)) => Some(Point { x, y }),
        None => {
            problems.invalid("point", option, value);
            None
        }
    }
}

#[derive(Debug, PartialEq, Options)]
struct Everything {
    #[optbind(name = "speed", name = "s")]
    speed: Speed,
    #[optbind(parse = parse_point)]
    origin: Option<Point>,
    #[optbind(parse = parse_point, default = "0,0")]
    target: Point,
    #[optbind(explicit)]
    colour: bool,
    a: bool,
    b: Option<bool>,
    level: Option<i8>,
    ratio: f64,
    initial: char,
    r#type: Option<String>,
}

#[test]
fn derive_everything_minimal() {
    let everything = Everything::parse_tokens(&["-s", "fast"]).unwrap();

    assert_eq!(
        everything,
        Everything {
            speed: Speed::Fast,
            origin: None,
            target: Point { x: 0, y: 0 },
            colour: false,
            a: false,
            b: None,
            level: None,
            ratio: 0.0,
            initial: '\0',
            r#type: None,
        }
    );
}

#[test]
fn derive_everything() {
    let everything = Everything::parse_tokens(&[
        "--speed", "SLOW", "--origin", "1, 2", "--target", "3,4", "--colour", "true", "-ab",
        "--level", "-0x10", "--ratio", "2.5", "--initial", "z", "--type", "box",
    ]);

    // '-0x10' starts with '-', so it is read as bundled short options.
    let failure = everything.unwrap_err();
    assert_eq!(
        failure.messages(),
        vec![
            "option -0 does not exist",
            "option -x does not exist",
            "option -1 does not exist",
            "option --level must be followed immediately by an argument but none was found",
        ]
    );

    let everything = Everything::parse_tokens(&[
        "--speed", "SLOW", "--origin", "1, 2", "--target", "3,4", "--colour", "true", "-ab",
        "--level", "0x10", "--ratio", "2.5", "--initial", "z", "--type", "box",
    ])
    .unwrap();

    assert_eq!(
        everything,
        Everything {
            speed: Speed::Slow,
            origin: Some(Point { x: 1, y: 2 }),
            target: Point { x: 3, y: 4 },
            colour: true,
            a: true,
            b: Some(true),
            level: Some(16),
            ratio: 2.5,
            initial: 'z',
            r#type: Some("box".to_string()),
        }
    );
}

#[rstest]
#[case(
    &["--frobnicate"],
    vec![
        "option --frobnicate does not exist",
        "missing required value for speed",
    ]
)]
#[case(
    &["--speed", "medium"],
    vec![
        "invalid enum value \"medium\" for --speed",
        "option --speed must be followed immediately by an argument but none was found",
    ]
)]
#[case(
    &["-s", "fast", "--origin", "1;2"],
    vec![
        "invalid point value \"1;2\" for --origin",
        "option --origin must be followed immediately by an argument but none was found",
    ]
)]
#[case(
    &["-s", "fast", "--initial", "zz"],
    vec![
        "invalid char value \"zz\" for --initial",
        "option --initial must be followed immediately by an argument but none was found",
    ]
)]
#[case(
    &["-s", "fast", "--colour"],
    vec!["option --colour must be followed immediately by an argument but none was found"]
)]
#[case(
    &["-s", "fast", "--", "--colour"],
    vec![]
)]
fn derive_everything_problems(#[case] tokens: &[&str], #[case] expected: Vec<&str>) {
    let result = Everything::parse_tokens(tokens);

    if expected.is_empty() {
        assert_matches!(result, Ok(_));
    } else {
        assert_eq!(result.unwrap_err().messages(), expected);
    }
}

#[derive(Debug, Options)]
struct Shadowed {
    #[optbind(default = "nope")]
    count: i32,
}

#[test]
fn derive_invalid_default() {
    let failure = Shadowed::parse_tokens(&[]).unwrap_err();

    assert_matches!(
        failure.problems(),
        [Problem::InvalidValue { kind, value, option }]
            if kind == "int" && value == "nope" && option == "count"
    );
    assert_eq!(
        failure.to_string(),
        "Parse error: invalid int value \"nope\" for count"
    );
}

#[derive(Debug, PartialEq, Options)]
struct Nothing {}

#[test]
fn derive_nothing() {
    assert_eq!(Nothing::parse_tokens(&[]).unwrap(), Nothing {});
    assert_eq!(
        Nothing::parse_tokens(&["-x"]).unwrap_err().messages(),
        vec!["option -x does not exist"]
    );
}
