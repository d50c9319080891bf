//! Object collection and classification.
//!
//! Splits scene records into instances, definitions and cull zones for one
//! export. Two strictness modes exist:
//!
//! - [`CollectMode::IplOnly`]: every `OBJ` record is an instance; the caller
//!   may switch instances or cull zones off entirely. No definitions are
//!   gathered.
//! - [`CollectMode::Map`]: an `OBJ` record needs a positive ID to count
//!   (ID 0 marks a child mesh with no definition of its own). Each such ID
//!   registers a definition, first record wins.
//!
//! Cull zones are collected in both modes regardless of ID.

mod definitions;

pub use definitions::Definitions;

use crate::ir::{ObjectKind, ObjectRecord};

/// Collection strictness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectMode {
    /// Loose collection for IPL-only exports.
    IplOnly {
        include_instances: bool,
        include_cull: bool,
    },
    /// Strict collection for IPL + IDE exports.
    Map,
}

/// Options for one collection pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    /// Drop every record that is not selected.
    pub only_selected: bool,
    pub mode: CollectMode,
}

/// Classified records, borrowing from the caller's scene.
///
/// Instances and cull zones keep scene order. Definitions keep
/// first-encountered order; sorting happens when the IDE is written.
#[derive(Clone, Debug, Default)]
pub struct Collection<'a> {
    pub instances: Vec<&'a ObjectRecord>,
    pub definitions: Definitions<'a>,
    pub cull_zones: Vec<&'a ObjectRecord>,
}

impl Collection<'_> {
    /// Number of records that will reach the IPL file.
    pub fn total_objects(&self) -> usize {
        self.instances.len() + self.cull_zones.len()
    }

    /// Returns true if nothing would be written to the IPL file.
    pub fn is_empty(&self) -> bool {
        self.total_objects() == 0
    }
}

/// Classifies `records` for export.
///
/// Returns `None` when no instance and no cull zone qualifies. Callers use
/// that to skip writing entirely rather than producing an empty file.
pub fn collect<'a>(records: &'a [ObjectRecord], opts: &CollectOptions) -> Option<Collection<'a>> {
    let mut collection = Collection::default();

    let (include_instances, include_cull) = match opts.mode {
        CollectMode::IplOnly {
            include_instances,
            include_cull,
        } => (include_instances, include_cull),
        CollectMode::Map => (true, true),
    };

    for record in records {
        if opts.only_selected && !record.selected {
            continue;
        }

        match record.kind {
            ObjectKind::Instance if include_instances => {
                if opts.mode == CollectMode::Map {
                    let id = record.object_id();
                    if !id.is_exportable() {
                        tracing::trace!(name = %record.name, "skipping instance without id");
                        continue;
                    }
                    collection.definitions.register(id, record);
                }
                collection.instances.push(record);
            }
            ObjectKind::CullZone if include_cull => collection.cull_zones.push(record),
            _ => {}
        }
    }

    tracing::debug!(
        instances = collection.instances.len(),
        definitions = collection.definitions.len(),
        cull_zones = collection.cull_zones.len(),
        "collected objects"
    );

    if collection.is_empty() {
        None
    } else {
        Some(collection)
    }
}
