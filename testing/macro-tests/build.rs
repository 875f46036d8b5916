use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    colscope::build!("scopes.toml");

    Ok(())
}
