use closedopt::{OptionDeclaration, OptionSchema};

fn main() {
    let schema = OptionSchema::builder()
        .add(OptionDeclaration::integral("threads", ["1", "2", "4", "8"]).default_value("4"))
        .add(
            OptionDeclaration::floating_point("scale", ["0.5", "1.0", "2.0"]).default_value("1.0"),
        )
        .add(OptionDeclaration::string("format", ["png", "jpeg"]))
        .build();

    let args: Vec<String> = std::env::args().collect();
    let result = schema.parse_argv(&args);

    if !result.is_ok() {
        eprintln!("{}", result.report());
    }

    for descriptor in schema.descriptors() {
        let source = if result.is_supplied(descriptor.name()) {
            "supplied"
        } else {
            "default"
        };

        match result.raw(descriptor.name()) {
            Ok(raw) => println!(
                "{} ({}): {raw} [{source}]",
                descriptor.name(),
                descriptor.option_type()
            ),
            Err(error) => println!(
                "{} ({}): {error}",
                descriptor.name(),
                descriptor.option_type()
            ),
        }
    }

    let threads: u8 = result.get("threads").unwrap_or(1);
    let scale: f32 = result.get("scale").unwrap_or(1.0);
    println!("Rendering with {threads} threads at {scale}x.");
}
