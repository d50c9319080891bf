//! Per-game field layouts.
//!
//! The same placed object serializes to three incompatible `inst` layouts
//! depending on the target game. A wrong field count or order does not fail
//! to parse on the game side; it silently places the wrong thing in the
//! wrong spot. Each layout is therefore its own function, picked by an
//! exhaustive match on [`GameVersion`].
//!
//! | version | `inst` fields                                                      |
//! |---------|--------------------------------------------------------------------|
//! | III     | id, model, pos.x/y/z, scale.x/y/z, rot.x/y/z/w                     |
//! | VC      | id, model, interior, pos.x/y/z, scale.x/y/z, rot.x/y/z/w           |
//! | SA      | id, model, interior, pos.x/y/z, rot.x/y/z/w, lod                   |
//!
//! IDE `objs` lines are version-independent: id, model, txd, draw distance,
//! flags.
//!
//! Everything here is pure: no I/O, no state, and no errors. Missing
//! properties resolve through [`defaults`].

pub mod defaults;
mod version;

pub use defaults::{derive_model_name, ResolvedObject};
pub use version::{GameVersion, UnknownGameVersion};

use std::fmt;

use crate::ir::{ObjectId, ObjectRecord};

/// Separator between fields on a map-file line.
pub const FIELD_SEPARATOR: &str = ", ";

/// One formatted `inst` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstanceLine {
    pub fields: Vec<String>,
}

impl fmt::Display for InstanceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.join(FIELD_SEPARATOR))
    }
}

/// One formatted IDE `objs` line, keyed by its model ID for sorting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionLine {
    pub id: ObjectId,
    pub fields: Vec<String>,
}

impl fmt::Display for DefinitionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.join(FIELD_SEPARATOR))
    }
}

/// Formats a record as an `inst` line for the given game.
pub fn resolve(record: &ObjectRecord, version: GameVersion) -> InstanceLine {
    let obj = ResolvedObject::from_record(record);
    let fields = match version {
        GameVersion::III => iii_fields(&obj),
        GameVersion::VC => vc_fields(&obj),
        GameVersion::SA => sa_fields(&obj),
    };
    debug_assert_eq!(fields.len(), version.instance_field_count());
    InstanceLine { fields }
}

/// Formats a record as an IDE `objs` line.
pub fn resolve_definition(record: &ObjectRecord) -> DefinitionLine {
    let obj = ResolvedObject::from_record(record);
    DefinitionLine {
        id: obj.id,
        fields: vec![
            obj.id.to_string(),
            obj.model_name.to_string(),
            obj.txd_name.to_string(),
            obj.draw_distance.to_string(),
            obj.flags.to_string(),
        ],
    }
}

// id, model, pos, scale, rot
fn iii_fields(obj: &ResolvedObject<'_>) -> Vec<String> {
    let p = obj.position;
    let s = obj.scale;
    let r = obj.rotation;
    [
        obj.id.to_string(),
        obj.model_name.to_string(),
        p.x.to_string(),
        p.y.to_string(),
        p.z.to_string(),
        s.x.to_string(),
        s.y.to_string(),
        s.z.to_string(),
        r.x.to_string(),
        r.y.to_string(),
        r.z.to_string(),
        r.w.to_string(),
    ]
    .into()
}

// id, model, interior, pos, scale, rot
fn vc_fields(obj: &ResolvedObject<'_>) -> Vec<String> {
    let p = obj.position;
    let s = obj.scale;
    let r = obj.rotation;
    [
        obj.id.to_string(),
        obj.model_name.to_string(),
        obj.interior.to_string(),
        p.x.to_string(),
        p.y.to_string(),
        p.z.to_string(),
        s.x.to_string(),
        s.y.to_string(),
        s.z.to_string(),
        r.x.to_string(),
        r.y.to_string(),
        r.z.to_string(),
        r.w.to_string(),
    ]
    .into()
}

// id, model, interior, pos, rot, lod
fn sa_fields(obj: &ResolvedObject<'_>) -> Vec<String> {
    let p = obj.position;
    let r = obj.rotation;
    [
        obj.id.to_string(),
        obj.model_name.to_string(),
        obj.interior.to_string(),
        p.x.to_string(),
        p.y.to_string(),
        p.z.to_string(),
        r.x.to_string(),
        r.y.to_string(),
        r.z.to_string(),
        r.w.to_string(),
        obj.lod.to_string(),
    ]
    .into()
}
