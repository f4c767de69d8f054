//! Output handling for generated source units.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::catalog::Scope;

/// Writes one generated source unit to standard output.
pub fn emit_stdout(source: &str) -> Result<()> {
    io::stdout()
        .write_all(source.as_bytes())
        .context("Failed to write generated source to stdout")
}

/// Writes one generated source unit into `directory` under the scope's
/// fixed file name, as a single open-write-close sequence.
///
/// Returns the path of the written file. A failure here is local to the
/// scope being emitted; files written for earlier scopes are unaffected.
pub fn emit_file(directory: &Path, scope: Scope, source: &str) -> Result<PathBuf> {
    let path = directory.join(scope.file_name());
    fs::write(&path, source)
        .with_context(|| format!("Failed to write generated source to: {}", path.display()))?;
    Ok(path)
}
