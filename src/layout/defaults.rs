//! The defaulting table for optional object properties.
//!
//! Every layout reads object properties through [`ResolvedObject`], so the
//! fallback values below are declared exactly once.
//!
//! | property        | default                                  |
//! |-----------------|------------------------------------------|
//! | `id`            | `0`                                      |
//! | `model_name`    | display name up to the first `.`         |
//! | `txd_name`      | the resolved model name                  |
//! | `interior`      | `0`                                      |
//! | `lod`           | `-1`                                     |
//! | `draw_distance` | `150`                                    |
//! | `flags`         | `0`                                      |

use crate::ir::{ObjectId, ObjectRecord, Quat, Scalar, Vec3};

pub const DEFAULT_INTERIOR: i64 = 0;
pub const DEFAULT_LOD: i64 = -1;
pub const DEFAULT_DRAW_DISTANCE: Scalar = Scalar::Int(150);
pub const DEFAULT_FLAGS: i64 = 0;

/// Derives a model name from a display name.
///
/// Editors disambiguate duplicate names with a numeric suffix
/// (`lamp.001`, `lamp.002`); everything from the first `.` on is dropped.
pub fn derive_model_name(display_name: &str) -> &str {
    display_name
        .split_once('.')
        .map_or(display_name, |(stem, _)| stem)
}

/// An object record with every optional property filled in.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedObject<'a> {
    pub id: ObjectId,
    pub model_name: &'a str,
    pub txd_name: &'a str,
    pub interior: i64,
    pub lod: i64,
    pub draw_distance: Scalar,
    pub flags: i64,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl<'a> ResolvedObject<'a> {
    /// Applies the defaulting table to a record.
    pub fn from_record(record: &'a ObjectRecord) -> Self {
        let model_name = record
            .model_name
            .as_deref()
            .unwrap_or_else(|| derive_model_name(&record.name));

        Self {
            id: record.object_id(),
            model_name,
            txd_name: record.txd_name.as_deref().unwrap_or(model_name),
            interior: record.interior.unwrap_or(DEFAULT_INTERIOR),
            lod: record.lod.unwrap_or(DEFAULT_LOD),
            draw_distance: record.draw_distance.unwrap_or(DEFAULT_DRAW_DISTANCE),
            flags: record.flags.unwrap_or(DEFAULT_FLAGS),
            position: record.position,
            rotation: record.rotation,
            scale: record.scale,
        }
    }
}
