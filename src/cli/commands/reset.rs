//! Reset command implementation

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::cli::open_store;
use crate::config::SwagglyConfig;
use crate::notifications::NotificationQueue;

/// Arguments for the `reset` command
pub struct ResetArgs {
    /// Directory holding the persisted document
    pub data_dir: PathBuf,
}

/// Handle the `reset` command, clearing every model and route
pub async fn handle_reset(
    args: &ResetArgs,
    config: &SwagglyConfig,
    notifications: &mut NotificationQueue,
) -> Result<(), CliError> {
    let mut store = open_store(&args.data_dir, config, notifications).await?;
    store.reset(notifications).await?;
    Ok(())
}
