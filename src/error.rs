use std::path::PathBuf;
use thiserror::Error;

/// The main error type for iplkit operations.
#[derive(Debug, Error)]
pub enum MapExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse scene JSON from {path}: {source}")]
    SceneJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse scene YAML from {path}: {source}")]
    SceneYamlParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IPL written to {ipl_path}, but IDE export to {ide_path} failed: {source}")]
    IdeExportFailed {
        ipl_path: PathBuf,
        ide_path: PathBuf,
        #[source]
        source: Box<MapExportError>,
    },

    #[error("Failed to serialize export report: {0}")]
    ReportJson(#[source] serde_json::Error),
}
