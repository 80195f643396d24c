use optbind::{Choices, Options, Problems};

#[derive(Debug, Choices)]
enum Mode {
    Copy,
    Move,
}

#[derive(Debug)]
struct Throttle(u32);

fn parse_throttle(option: &str, value: &str, problems: &mut Problems) -> Option<Throttle> {
    match value.strip_suffix("kb").map(str::parse::<u32>) {
        Some(Ok(kb)) => Some(Throttle(kb)),
        _ => {
            problems.message(format!("{option} expects a size such as '512kb', found '{value}'"));
            None
        }
    }
}

#[derive(Debug, Options)]
struct Parameters {
    #[optbind(short = 'v')]
    verbose: bool,
    #[optbind(name = "mode", name = "m")]
    mode: Mode,
    #[optbind(default = "3")]
    retries: i32,
    #[optbind(parse = parse_throttle)]
    throttle: Option<Throttle>,
    #[optbind(positionals)]
    paths: Vec<String>,
}

fn main() {
    match Parameters::parse_env() {
        Ok(parameters) => println!("{parameters:?}"),
        Err(failure) => {
            for message in failure.messages() {
                eprintln!("{message}");
            }

            std::process::exit(1);
        }
    }
}
