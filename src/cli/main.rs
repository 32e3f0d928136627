//! swaggly: edit, import and export OpenAPI documents from the command line

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swaggly_sdk::cli::commands::{
    delete::{DeleteArgs, handle_delete},
    export::{ExportArgs, handle_export},
    import::{ImportArgs, handle_import},
    list::{ListArgs, handle_list},
    reset::{ResetArgs, handle_reset},
    validate::handle_validate,
};
use swaggly_sdk::cli::output::format_notifications;
use swaggly_sdk::config::SwagglyConfig;
use swaggly_sdk::validation::EntityKind;

#[derive(Parser)]
#[command(name = "swaggly", version, about = "Build OpenAPI documents from models and routes")]
struct Cli {
    /// Directory the document is persisted in
    #[arg(long, global = true, default_value = ".swaggly")]
    data_dir: PathBuf,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the document as OpenAPI
    Export {
        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
        /// Output file, `-` for stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Replace the document with an OpenAPI file
    Import {
        /// OpenAPI YAML or JSON file, `-` for stdin
        input: String,
    },
    /// List models and routes
    List {
        /// Print the stored document as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a model (refused while a route references it)
    DeleteModel { name: String },
    /// Delete a route
    DeleteRoute { name: String },
    /// Clear all models and routes
    Reset,
    /// Check that an OpenAPI file can be imported
    Validate {
        /// OpenAPI YAML or JSON file, `-` for stdin
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SwagglyConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SwagglyConfig::default(),
    };
    let mut notifications = config.notification_queue();
    let data_dir = cli.data_dir.clone();

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let result = runtime.block_on(async {
        match cli.command {
            Commands::Export { format, output } => {
                let args = ExportArgs {
                    data_dir,
                    format,
                    output,
                };
                handle_export(&args, &config, &mut notifications).await
            }
            Commands::Import { input } => {
                let args = ImportArgs { data_dir, input };
                handle_import(&args, &config, &mut notifications).await
            }
            Commands::List { json } => {
                let args = ListArgs { data_dir, json };
                handle_list(&args, &config, &mut notifications).await
            }
            Commands::DeleteModel { name } => {
                let args = DeleteArgs {
                    data_dir,
                    kind: EntityKind::Model,
                    name,
                };
                handle_delete(&args, &config, &mut notifications).await
            }
            Commands::DeleteRoute { name } => {
                let args = DeleteArgs {
                    data_dir,
                    kind: EntityKind::Route,
                    name,
                };
                handle_delete(&args, &config, &mut notifications).await
            }
            Commands::Reset => {
                let args = ResetArgs { data_dir };
                handle_reset(&args, &config, &mut notifications).await
            }
            Commands::Validate { input } => handle_validate(&input),
        }
    });

    eprint!("{}", format_notifications(notifications.items()));
    result.map_err(anyhow::Error::from)
}
