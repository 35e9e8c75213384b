use cupnote_core::error::CupnoteError;
use cupnote_core::validation::validate_cafe_name;

use crate::output;

pub fn run(name: &str, output_format: &str) -> Result<(), CupnoteError> {
    let verdict = validate_cafe_name(name);

    match output_format {
        "json" => output::json::print_verdict(&verdict)?,
        _ if verdict.valid => println!("'{}' looks like a cafe name", name.trim()),
        _ => println!(
            "'{}' rejected as {:?}: {}",
            name.trim(),
            verdict.category,
            verdict.reason
        ),
    }

    Ok(())
}
