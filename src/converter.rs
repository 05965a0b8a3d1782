//! Invocation of the external MARC format-conversion utility.
//!
//! The binary catalog format is never parsed here; a MarcEdit-style
//! command-line tool breaks a binary `.mrc` file into the mnemonic line
//! format and compiles the rewritten stream back. This module is a thin
//! wrapper around that external collaborator.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{MrkError, Result};

/// Handle to the external break/make command-line utility.
#[derive(Debug, Clone)]
pub struct MarcConverter {
    program: PathBuf,
}

impl MarcConverter {
    /// Create a converter wrapping the utility at `program`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        MarcConverter {
            program: program.into(),
        }
    }

    /// Break a binary `.mrc` file into the mnemonic line format.
    ///
    /// # Errors
    ///
    /// Returns [`MrkError::Io`] if the utility cannot be spawned, or
    /// [`MrkError::ConverterFailed`] on a non-zero exit status.
    pub fn break_to_mnemonic(&self, source: &Path, destination: &Path) -> Result<()> {
        self.invoke(source, destination, "-break")
    }

    /// Compile a mnemonic file back into the binary `.mrc` format.
    ///
    /// # Errors
    ///
    /// Returns [`MrkError::Io`] if the utility cannot be spawned, or
    /// [`MrkError::ConverterFailed`] on a non-zero exit status.
    pub fn compile_to_binary(&self, source: &Path, destination: &Path) -> Result<()> {
        self.invoke(source, destination, "-make")
    }

    fn invoke(&self, source: &Path, destination: &Path, mode: &str) -> Result<()> {
        tracing::debug!(program = %self.program.display(), mode, "invoking converter");
        let status = Command::new(&self.program)
            .arg("-s")
            .arg(source)
            .arg("-d")
            .arg(destination)
            .arg(mode)
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(MrkError::ConverterFailed {
                program: self.program.display().to_string(),
                status,
            })
        }
    }
}
