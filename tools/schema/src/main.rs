use graphql::build_schema;
use graphql::utilities::FormSessions;

fn main() -> std::io::Result<()> {
    let schema = build_schema(FormSessions::new());
    // Print the schema in SDL format
    println!("{}", &schema.sdl());
    Ok(())
}
