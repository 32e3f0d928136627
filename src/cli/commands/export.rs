//! Export command implementation

use std::path::PathBuf;

use crate::cli::commands::write_output;
use crate::cli::error::CliError;
use crate::cli::open_store;
use crate::config::SwagglyConfig;
use crate::export::OpenApiExporter;
use crate::models::OpenApiFormat;
use crate::notifications::NotificationQueue;

/// Arguments for the `export` command
pub struct ExportArgs {
    /// Directory holding the persisted document
    pub data_dir: PathBuf,
    /// Output format (yaml, json)
    pub format: String,
    /// Output file; `-` prints to stdout, none uses the configured file name
    pub output: Option<String>,
}

/// Handle the `export` command
pub async fn handle_export(
    args: &ExportArgs,
    config: &SwagglyConfig,
    notifications: &mut NotificationQueue,
) -> Result<(), CliError> {
    let format: OpenApiFormat = args.format.parse().map_err(CliError::InvalidArgument)?;
    let store = open_store(&args.data_dir, config, notifications).await?;

    let exporter = OpenApiExporter::with_config(config.export.clone());
    let content = exporter.export(store.document(), format)?;

    match args.output.as_deref() {
        Some("-") => print!("{}", content),
        Some(path) => {
            write_output(&PathBuf::from(path), &content)?;
            println!("Exported to {}", path);
        }
        None => {
            let path = PathBuf::from(exporter.file_name()).with_extension(format.extension());
            write_output(&path, &content)?;
            println!("Exported to {}", path.display());
        }
    }
    Ok(())
}
