//! Import command implementation

use std::path::PathBuf;

use crate::cli::commands::load_input;
use crate::cli::error::CliError;
use crate::cli::open_store;
use crate::config::SwagglyConfig;
use crate::import::OpenApiImporter;
use crate::notifications::NotificationQueue;

/// Arguments for the `import` command
pub struct ImportArgs {
    /// Directory holding the persisted document
    pub data_dir: PathBuf,
    /// OpenAPI file to import; `-` reads stdin (format detected from content)
    pub input: String,
}

/// Handle the `import` command, replacing the stored document
pub async fn handle_import(
    args: &ImportArgs,
    config: &SwagglyConfig,
    notifications: &mut NotificationQueue,
) -> Result<(), CliError> {
    let content = load_input(&args.input)?;
    let mut store = open_store(&args.data_dir, config, notifications).await?;

    OpenApiImporter::new()
        .import_into(&mut store, &args.input, &content, notifications)
        .await?;

    println!(
        "Imported {} model(s) and {} route(s)",
        store.models().len(),
        store.routes().len()
    );
    Ok(())
}
