//! YAML scene files.
//!
//! Same schema as the JSON scene format, for hand-edited scenes.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::model::Scene;
use crate::error::MapExportError;

/// Reads a scene from a YAML file.
///
/// # Errors
/// Returns an error if the file cannot be opened or parsed.
pub fn read_scene_yaml(path: &Path) -> Result<Scene, MapExportError> {
    let file = File::open(path).map_err(MapExportError::Io)?;
    let reader = BufReader::new(file);

    serde_yaml::from_reader(reader).map_err(|source| MapExportError::SceneYamlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a scene from a YAML string.
pub fn from_yaml_str(yaml: &str) -> Result<Scene, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}
