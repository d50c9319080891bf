//! JSON scene files.
//!
//! This is the scene-source boundary: an editor plugin (or anything else)
//! dumps its classified objects as JSON and the exporter reads them back as
//! [`ObjectRecord`](super::ObjectRecord)s. The exporter never inspects a live
//! scene graph itself.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::model::Scene;
use crate::error::MapExportError;

/// Reads a scene from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be opened or parsed.
pub fn read_scene_json(path: &Path) -> Result<Scene, MapExportError> {
    let file = File::open(path).map_err(MapExportError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| MapExportError::SceneJsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a scene from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_json_str(json: &str) -> Result<Scene, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a scene from JSON bytes.
///
/// Useful for fuzzing and processing raw bytes without requiring UTF-8 upfront.
pub fn from_json_slice(bytes: &[u8]) -> Result<Scene, serde_json::Error> {
    serde_json::from_slice(bytes)
}
