//! Map file writers.
//!
//! Documents are rendered to a `String` first and then written in one go.
//! The write goes to a temporary file next to the destination, which is
//! renamed over the destination only after everything has been flushed.
//! A failed write therefore never leaves a truncated map file behind, and
//! the previous contents of the destination (if any) survive.

mod ide;
mod ipl;

pub use ide::{IdeDocument, IDE_HEADER, OBJS_SECTION};
pub use ipl::{IplDocument, CULL_SECTION, INST_SECTION, SECTION_END};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::MapExportError;
use crate::layout::GameVersion;

/// Writes an IPL file.
///
/// # Errors
/// Returns [`MapExportError::FileWrite`] if the destination cannot be
/// written. The destination is left untouched in that case.
pub fn write_ipl(
    path: &Path,
    version: GameVersion,
    document: &IplDocument,
) -> Result<(), MapExportError> {
    write_atomically(path, &document.render(version))?;
    tracing::info!(
        path = %path.display(),
        instances = document.instances.len(),
        cull_zones = document.cull.len(),
        "wrote IPL"
    );
    Ok(())
}

/// Writes an IDE file.
///
/// # Errors
/// Returns [`MapExportError::FileWrite`] if the destination cannot be
/// written. The destination is left untouched in that case.
pub fn write_ide(path: &Path, document: &IdeDocument) -> Result<(), MapExportError> {
    write_atomically(path, &document.render())?;
    tracing::info!(
        path = %path.display(),
        definitions = document.definitions().len(),
        "wrote IDE"
    );
    Ok(())
}

/// Derives the IDE path that accompanies an IPL path (`foo.ipl` -> `foo.ide`).
pub fn ide_path_for(ipl_path: &Path) -> PathBuf {
    ipl_path.with_extension("ide")
}

fn write_atomically(path: &Path, contents: &str) -> Result<(), MapExportError> {
    let write_error = |source| MapExportError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = temp_file_in(dir).map_err(write_error)?;
    // Overwriting keeps the destination's mode instead of the temp file's.
    if let Ok(existing) = fs::metadata(path) {
        if existing.is_file() {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(write_error)?;
        }
    }
    tmp.write_all(contents.as_bytes()).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;
    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// Creates the temp file with the mode a plain `File::create` would give.
///
/// `NamedTempFile` defaults to owner-only access. Requesting `0o666` lets the
/// process umask decide, as it does for any other newly created file.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
