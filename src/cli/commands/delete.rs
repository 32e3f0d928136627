//! Delete command implementation

use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::cli::open_store;
use crate::config::SwagglyConfig;
use crate::notifications::NotificationQueue;
use crate::validation::EntityKind;

/// Arguments for the `delete` command
pub struct DeleteArgs {
    /// Directory holding the persisted document
    pub data_dir: PathBuf,
    /// Whether a model or a route is deleted
    pub kind: EntityKind,
    pub name: String,
}

/// Handle the `delete` command
///
/// Deleting a model that a route still references fails with the location
/// of the reference.
pub async fn handle_delete(
    args: &DeleteArgs,
    config: &SwagglyConfig,
    notifications: &mut NotificationQueue,
) -> Result<(), CliError> {
    let mut store = open_store(&args.data_dir, config, notifications).await?;

    let deleted = match args.kind {
        EntityKind::Model => store.delete_model(&args.name).await?,
        EntityKind::Route => store.delete_route(&args.name).await?,
    };
    if !deleted {
        return Err(CliError::NotFound(format!("{} \"{}\"", args.kind, args.name)));
    }

    println!("Deleted {} \"{}\"", args.kind.to_string().to_lowercase(), args.name);
    Ok(())
}
