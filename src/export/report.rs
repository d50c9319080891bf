//! Export report types.
//!
//! Like a conversion report, this records what an export actually did so
//! the CLI can print it as text or JSON.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::layout::GameVersion;

/// Which export pipeline ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportVariant {
    /// IPL only, loose collection.
    Ipl,
    /// IPL plus IDE, strict collection.
    Map,
}

impl ExportVariant {
    pub fn name(&self) -> &'static str {
        match self {
            ExportVariant::Ipl => "ipl",
            ExportVariant::Map => "map",
        }
    }
}

/// What happened to the IDE file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum IdeStatus {
    /// The variant or options did not ask for an IDE.
    NotRequested,
    /// Requested, but there were no definitions to write.
    NoDefinitions,
    /// Written successfully.
    Written { path: PathBuf, definitions: usize },
    /// The write failed after the IPL had been written.
    Failed { path: PathBuf, message: String },
}

/// Summary of a completed (or partially completed) export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub variant: ExportVariant,
    pub game: GameVersion,
    pub ipl_path: PathBuf,
    pub instances: usize,
    pub cull_zones: usize,
    pub ide: IdeStatus,
}

impl ExportReport {
    /// Returns true if the IDE step failed.
    pub fn is_partial(&self) -> bool {
        matches!(self.ide, IdeStatus::Failed { .. })
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Exported {} instance(s) and {} cull zone(s) for {} to {}",
            self.instances,
            self.cull_zones,
            self.game.label(),
            self.ipl_path.display()
        )?;

        match &self.ide {
            IdeStatus::NotRequested => Ok(()),
            IdeStatus::NoDefinitions => writeln!(f, "  IDE skipped: no object definitions"),
            IdeStatus::Written { path, definitions } => writeln!(
                f,
                "  IDE: {} definition(s) to {}",
                definitions,
                path.display()
            ),
            IdeStatus::Failed { path, message } => {
                writeln!(f, "  IDE FAILED for {}: {}", path.display(), message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(ide: IdeStatus) -> ExportReport {
        ExportReport {
            variant: ExportVariant::Map,
            game: GameVersion::VC,
            ipl_path: PathBuf::from("docks.ipl"),
            instances: 3,
            cull_zones: 1,
            ide,
        }
    }

    #[test]
    fn test_display_written() {
        let text = report(IdeStatus::Written {
            path: PathBuf::from("docks.ide"),
            definitions: 2,
        })
        .to_string();
        assert!(text.contains("Exported 3 instance(s) and 1 cull zone(s) for GTA Vice City"));
        assert!(text.contains("IDE: 2 definition(s) to docks.ide"));
    }

    #[test]
    fn test_partial_flag() {
        let failed = report(IdeStatus::Failed {
            path: PathBuf::from("docks.ide"),
            message: "denied".into(),
        });
        assert!(failed.is_partial());
        assert!(!report(IdeStatus::NotRequested).is_partial());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(report(IdeStatus::NoDefinitions)).unwrap();
        assert_eq!(json["variant"], "map");
        assert_eq!(json["game"], "VC");
        assert_eq!(json["ide"]["status"], "no-definitions");
    }
}
