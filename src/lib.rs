//! iplkit: GTA map placement exporter.
//!
//! iplkit turns a list of placed scene objects into the text map files read
//! by GTA III, Vice City and San Andreas: IPL files (instance placements and
//! cull zones) and IDE files (object definitions). The same placed object
//! has a different `inst` layout in each game, so the target game is chosen
//! per export.
//!
//! # Modules
//!
//! - [`ir`]: Scene records and scene file readers
//! - [`layout`]: Per-game field layouts and the property defaulting table
//! - [`collect`]: Classification of records into instances, definitions and cull zones
//! - [`cull`]: The cull-zone formatter interface and a box-shaped default
//! - [`writer`]: IPL/IDE document structure and atomic file writes
//! - [`export`]: The export pipeline tying the above together
//! - [`error`]: Error types for iplkit operations

pub mod collect;
pub mod cull;
pub mod error;
pub mod export;
pub mod ir;
pub mod layout;
pub mod writer;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

pub use error::MapExportError;

/// The iplkit CLI application.
#[derive(Parser)]
#[command(name = "iplkit")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Export an IPL file (instances and/or cull zones).
    Ipl(IplArgs),
    /// Export an IPL file plus a matching IDE file of object definitions.
    Map(MapArgs),
}

/// Arguments shared by both export subcommands.
#[derive(clap::Args)]
struct CommonArgs {
    /// Scene file to read objects from.
    input: PathBuf,

    /// Destination IPL file.
    #[arg(short, long)]
    output: PathBuf,

    /// Target game ('III', 'VC' or 'SA'). Anything else means SA.
    #[arg(long, env = "IPLKIT_GAME")]
    game: Option<String>,

    /// Export only objects marked as selected.
    #[arg(long)]
    only_selected: bool,

    /// Scene file format. Inferred from the input extension when omitted.
    #[arg(long, value_enum)]
    scene_format: Option<SceneFormat>,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    report: ReportFormat,
}

/// Arguments for the ipl subcommand.
#[derive(clap::Args)]
struct IplArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Leave object instances out.
    #[arg(long)]
    no_inst: bool,

    /// Leave cull zones out.
    #[arg(long)]
    no_cull: bool,
}

/// Arguments for the map subcommand.
#[derive(clap::Args)]
struct MapArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Do not write the IDE file.
    #[arg(long)]
    no_ide: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SceneFormat {
    Json,
    Yaml,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Run the iplkit CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), MapExportError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Ipl(args)) => {
            let options = export::ExportOptions {
                export_inst: !args.no_inst,
                export_cull: !args.no_cull,
                export_ide: false,
                ..base_options(&args.common)
            };
            run_export(&args.common, &options, export::ExportVariant::Ipl)
        }
        Some(Commands::Map(args)) => {
            let options = export::ExportOptions {
                export_ide: !args.no_ide,
                ..base_options(&args.common)
            };
            run_export(&args.common, &options, export::ExportVariant::Map)
        }
        None => {
            println!("iplkit {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("GTA III/VC/SA map placement exporter.");
            println!();
            println!("Run 'iplkit --help' for usage information.");
            Ok(())
        }
    }
}

/// Install the stderr log subscriber.
///
/// The filter comes from `IPLKIT_LOG` when set, otherwise `warn` (or
/// `debug` with `--verbose`). Safe to call more than once.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "iplkit=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("IPLKIT_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn base_options(common: &CommonArgs) -> export::ExportOptions {
    export::ExportOptions {
        only_selected: common.only_selected,
        game: layout::GameVersion::from_tag_or_default(common.game.as_deref()),
        ..export::ExportOptions::new(&common.output)
    }
}

/// Read the scene, run the export and print the report.
fn run_export(
    common: &CommonArgs,
    options: &export::ExportOptions,
    variant: export::ExportVariant,
) -> Result<(), MapExportError> {
    let scene = read_scene(&common.input, common.scene_format)?;
    let outcome = export::export(&scene.objects, options, variant, &cull::BoxCullFormatter)?;

    let Some(report) = outcome.report() else {
        match common.report {
            ReportFormat::Json => {
                println!("{}", serde_json::json!({ "status": "nothing-to-export" }))
            }
            ReportFormat::Text => println!("Nothing to export"),
        }
        return Ok(());
    };

    match common.report {
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(report).map_err(MapExportError::ReportJson)?;
            println!("{}", json);
        }
        ReportFormat::Text => print!("{}", report),
    }

    match outcome {
        export::ExportOutcome::Partial { report, ide_error } => {
            Err(MapExportError::IdeExportFailed {
                ipl_path: report.ipl_path,
                ide_path: writer::ide_path_for(&options.file_name),
                source: Box::new(ide_error),
            })
        }
        _ => Ok(()),
    }
}

fn read_scene(path: &Path, format: Option<SceneFormat>) -> Result<ir::Scene, MapExportError> {
    let format = format.unwrap_or_else(|| infer_scene_format(path));
    match format {
        SceneFormat::Json => ir::io_json::read_scene_json(path),
        SceneFormat::Yaml => ir::io_yaml::read_scene_yaml(path),
    }
}

fn infer_scene_format(path: &Path) -> SceneFormat {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("yaml") | Some("yml") => SceneFormat::Yaml,
        _ => SceneFormat::Json,
    }
}
