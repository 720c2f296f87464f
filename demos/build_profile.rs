use closedopt::{OptionDeclaration, OptionSchema};

fn main() {
    let schema = OptionSchema::builder()
        .add(OptionDeclaration::integral("para1", ["11", "22", "33"]).default_value("22"))
        .add(OptionDeclaration::string("para2", ["hello", "world", "!!!"]))
        .add(
            OptionDeclaration::floating_point("para3", ["1000.99", "0.0001", "-0.0012345"])
                .default_value("-0.0012345"),
        )
        .add(OptionDeclaration::string("mode", ["debug", "release"]).default_value("debug"))
        .build();

    // Exits with code 1, listing every unmatched argument, if any argument fails to match.
    let result = schema.parse();

    match result.get::<i32>("para1") {
        Ok(para1) => println!("para1: {para1}"),
        Err(error) => println!("para1: {error}"),
    }

    match result.get::<String>("para2") {
        Ok(para2) => println!("para2: {para2}"),
        Err(error) => println!("para2: {error}"),
    }

    match result.get::<f64>("para3") {
        Ok(para3) => println!("para3: {para3}"),
        Err(error) => println!("para3: {error}"),
    }

    match result.get::<String>("mode") {
        Ok(mode) => println!("mode: {mode}"),
        Err(error) => println!("mode: {error}"),
    }
}
