//! Where the rendered descriptor goes

use crate::error::IoError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Standard output, or a file when `outputFile` is configured
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputDestination {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    /// Select the destination from an optional output path
    pub fn from_option(output_file: Option<&Path>) -> Self {
        match output_file {
            Some(path) => OutputDestination::File(path.to_path_buf()),
            None => OutputDestination::Stdout,
        }
    }

    /// Write the descriptor to its destination
    pub fn emit(&self, text: &str) -> Result<(), IoError> {
        let mut stdout = io::stdout().lock();
        self.emit_to(text, &mut stdout)
    }

    /// Like `emit`, with the stdout case going to `writer`
    pub fn emit_to(&self, text: &str, writer: &mut dyn Write) -> Result<(), IoError> {
        match self {
            OutputDestination::Stdout => {
                writer.write_all(text.as_bytes()).map_err(IoError::Stdout)?;
                writer.flush().map_err(IoError::Stdout)
            }
            OutputDestination::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|e| IoError::write_error(parent, e))?;
                }
                fs::write(path, text).map_err(|e| IoError::write_error(path, e))?;
                tracing::info!(path = %path.display(), bytes = text.len(), "descriptor written");
                Ok(())
            }
        }
    }
}
