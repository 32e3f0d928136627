//! CLI command implementations

pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod reset;
pub mod validate;

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::error::CliError;

/// Load input content from file or stdin (`-`)
pub(crate) fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

pub(crate) fn write_output(path: &Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| CliError::FileWriteError(parent.to_path_buf(), e.to_string()))?;
    }
    std::fs::write(path, content)
        .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string()))
}
