//! List command implementation

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::cli::open_store;
use crate::cli::output::format_document;
use crate::config::SwagglyConfig;
use crate::notifications::NotificationQueue;

/// Arguments for the `list` command
pub struct ListArgs {
    /// Directory holding the persisted document
    pub data_dir: PathBuf,
    /// Print the raw document as JSON
    pub json: bool,
}

/// Handle the `list` command
pub async fn handle_list(
    args: &ListArgs,
    config: &SwagglyConfig,
    notifications: &mut NotificationQueue,
) -> Result<(), CliError> {
    let store = open_store(&args.data_dir, config, notifications).await?;

    if args.json {
        let json = serde_json::to_string_pretty(store.document())
            .map_err(|e| CliError::Store(e.into()))?;
        println!("{}", json);
    } else {
        print!("{}", format_document(store.document()));
    }
    Ok(())
}
