use optbind::{OptionSpec, Schema, SemanticType};

fn main() {
    let schema = Schema::builder()
        .add(OptionSpec::of::<bool>().long("verbose").short('v').flag())
        .add(
            OptionSpec::new(SemanticType::Enum(&["copy", "move"]))
                .long("mode")
                .short('m'),
        )
        .add(OptionSpec::of::<i32>().long("retries").default_value("3"))
        .build()
        .expect("Invalid Schema configuration");

    match schema.parse_env() {
        Ok(bound) => {
            for (spec, value) in schema.specs().iter().zip(bound.values()) {
                println!("{}: {value:?}", spec.name());
            }

            println!("positionals: {:?}", bound.positionals());
        }
        Err(failure) => {
            eprintln!("{failure}");
            std::process::exit(1);
        }
    }
}
