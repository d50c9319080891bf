//! Export coordination.
//!
//! One export call runs a fixed, linear sequence of steps:
//!
//! 1. **Collect**: classify the scene records. If nothing qualifies, stop
//!    and report [`ExportOutcome::NothingToExport`]; no file is touched.
//! 2. **Format**: resolve every instance to its game-specific `inst` line
//!    and have the [`CullFormatter`] produce the `cull` lines.
//! 3. **Write IPL**: a failure here fails the whole export.
//! 4. **Write IDE** (map variant, when requested and there are
//!    definitions): derive the IDE path from the IPL path, sort, write. A
//!    failure here leaves the IPL in place and yields
//!    [`ExportOutcome::Partial`].
//!
//! Both variants share the layout resolver and the writers. They differ
//! only in collection strictness and in whether step 4 exists.

pub mod report;

pub use report::{ExportReport, ExportVariant, IdeStatus};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::collect::{collect, CollectMode, CollectOptions, Collection};
use crate::cull::CullFormatter;
use crate::error::MapExportError;
use crate::ir::ObjectRecord;
use crate::layout::{self, GameVersion};
use crate::writer::{self, IdeDocument, IplDocument};

fn default_true() -> bool {
    true
}

/// Options for one export call.
///
/// The values are fixed for the duration of the call and passed down
/// explicitly; nothing is kept between calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Export only selected records.
    #[serde(default)]
    pub only_selected: bool,

    /// Target game. Unset or unrecognized values mean SA.
    #[serde(rename = "game_id", default)]
    pub game: GameVersion,

    /// Include instances (IPL variant only).
    #[serde(default = "default_true")]
    pub export_inst: bool,

    /// Include cull zones (IPL variant only).
    #[serde(default = "default_true")]
    pub export_cull: bool,

    /// Also write an IDE next to the IPL (map variant only).
    #[serde(default = "default_true")]
    pub export_ide: bool,

    /// Destination IPL path. The IDE path is derived from it.
    pub file_name: PathBuf,
}

impl ExportOptions {
    /// Options with every category enabled, targeting SA.
    pub fn new(file_name: impl Into<PathBuf>) -> Self {
        Self {
            only_selected: false,
            game: GameVersion::default(),
            export_inst: true,
            export_cull: true,
            export_ide: true,
            file_name: file_name.into(),
        }
    }

    /// Sets the target game.
    pub fn with_game(mut self, game: GameVersion) -> Self {
        self.game = game;
        self
    }

    fn collect_options(&self, variant: ExportVariant) -> CollectOptions {
        let mode = match variant {
            ExportVariant::Ipl => CollectMode::IplOnly {
                include_instances: self.export_inst,
                include_cull: self.export_cull,
            },
            ExportVariant::Map => CollectMode::Map,
        };
        CollectOptions {
            only_selected: self.only_selected,
            mode,
        }
    }
}

/// Result of an export call that did not fail outright.
#[derive(Debug)]
pub enum ExportOutcome {
    /// No record qualified; nothing was written.
    NothingToExport,
    /// Every requested file was written.
    Complete(ExportReport),
    /// The IPL was written but the IDE was not.
    Partial {
        report: ExportReport,
        ide_error: MapExportError,
    },
}

impl ExportOutcome {
    /// Returns true if the IPL file was written.
    pub fn is_success(&self) -> bool {
        !matches!(self, ExportOutcome::NothingToExport)
    }

    /// The export report, if anything was written.
    pub fn report(&self) -> Option<&ExportReport> {
        match self {
            ExportOutcome::NothingToExport => None,
            ExportOutcome::Complete(report) | ExportOutcome::Partial { report, .. } => {
                Some(report)
            }
        }
    }
}

/// Exports an IPL file only.
///
/// Instances are not filtered by ID, and `export_inst` / `export_cull`
/// select which categories are included.
pub fn export_ipl(
    records: &[ObjectRecord],
    options: &ExportOptions,
    cull: &dyn CullFormatter,
) -> Result<ExportOutcome, MapExportError> {
    export(records, options, ExportVariant::Ipl, cull)
}

/// Exports an IPL file and, if `export_ide` is set, the matching IDE file.
///
/// Only instances with a positive ID are exported, and each distinct ID
/// produces one IDE definition.
pub fn export_map(
    records: &[ObjectRecord],
    options: &ExportOptions,
    cull: &dyn CullFormatter,
) -> Result<ExportOutcome, MapExportError> {
    export(records, options, ExportVariant::Map, cull)
}

/// Runs one export.
///
/// # Errors
/// Returns an error only if the IPL file cannot be written. IDE failures
/// are reported through [`ExportOutcome::Partial`].
pub fn export(
    records: &[ObjectRecord],
    options: &ExportOptions,
    variant: ExportVariant,
    cull: &dyn CullFormatter,
) -> Result<ExportOutcome, MapExportError> {
    let span = tracing::debug_span!("export", variant = variant.name(), game = %options.game);
    let _guard = span.enter();

    let Some(collection) = collect(records, &options.collect_options(variant)) else {
        tracing::info!("nothing to export");
        return Ok(ExportOutcome::NothingToExport);
    };

    let version = options.game;
    let ipl = format_ipl(&collection, version, cull);
    tracing::debug!(
        instances = ipl.instances.len(),
        cull_lines = ipl.cull.len(),
        "formatted"
    );

    writer::write_ipl(&options.file_name, version, &ipl)?;

    let mut report = ExportReport {
        variant,
        game: version,
        ipl_path: options.file_name.clone(),
        instances: ipl.instances.len(),
        cull_zones: ipl.cull.len(),
        ide: IdeStatus::NotRequested,
    };

    if variant != ExportVariant::Map || !options.export_ide {
        return Ok(ExportOutcome::Complete(report));
    }

    if collection.definitions.is_empty() {
        report.ide = IdeStatus::NoDefinitions;
        return Ok(ExportOutcome::Complete(report));
    }

    let ide_path = writer::ide_path_for(&options.file_name);
    let ide = format_ide(&collection);

    match writer::write_ide(&ide_path, &ide) {
        Ok(()) => {
            report.ide = IdeStatus::Written {
                path: ide_path,
                definitions: ide.definitions().len(),
            };
            Ok(ExportOutcome::Complete(report))
        }
        Err(ide_error) => {
            tracing::warn!(
                path = %ide_path.display(),
                error = %ide_error,
                "IDE write failed; IPL was kept"
            );
            report.ide = IdeStatus::Failed {
                path: ide_path,
                message: ide_error.to_string(),
            };
            Ok(ExportOutcome::Partial { report, ide_error })
        }
    }
}

fn format_ipl(
    collection: &Collection<'_>,
    version: GameVersion,
    cull: &dyn CullFormatter,
) -> IplDocument {
    let instances = collection
        .instances
        .iter()
        .map(|record| layout::resolve(record, version))
        .collect();
    let cull_lines = cull.format(&collection.cull_zones, version);
    IplDocument::new(instances, cull_lines)
}

fn format_ide(collection: &Collection<'_>) -> IdeDocument {
    let lines = collection
        .definitions
        .iter()
        .map(|(_, record)| layout::resolve_definition(record))
        .collect();
    IdeDocument::new(lines)
}
