//! Validate command implementation

use crate::cli::commands::load_input;
use crate::cli::error::CliError;
use crate::import::OpenApiImporter;
use crate::models::Document;
use crate::validation::validate_document;

/// Parse `content` and list what the store would reject, one message per problem
pub fn check_content(file_name: &str, content: &str) -> Result<(Document, Vec<String>), CliError> {
    let document = OpenApiImporter::new().import(file_name, content)?;
    let problems = validate_document(&document)
        .iter()
        .map(ToString::to_string)
        .collect();
    Ok((document, problems))
}

/// Handle the `validate` command
pub fn handle_validate(input: &str) -> Result<(), CliError> {
    let content = load_input(input)?;
    let (document, problems) = check_content(input, &content)?;
    if !problems.is_empty() {
        return Err(CliError::ValidationError(problems.join("; ")));
    }

    println!(
        "Validation successful: {} model(s), {} route(s)",
        document.models.len(),
        document.routes.len()
    );
    Ok(())
}
