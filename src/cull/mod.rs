//! Cull-zone formatting.
//!
//! The exporter does not know how a cull zone is laid out; it hands the
//! collected cull records and the target game to a [`CullFormatter`] and
//! splices the returned lines into the IPL `cull` section verbatim.
//!
//! Any `Fn(&[&ObjectRecord], GameVersion) -> Vec<String>` is a formatter, so
//! callers with their own cull geometry can plug it in directly.
//! [`BoxCullFormatter`] covers the common case of a box-shaped zone.

use crate::ir::{ObjectRecord, Scalar, Vec3};
use crate::layout::{GameVersion, FIELD_SEPARATOR};

/// Produces formatted `cull` lines for a set of cull records.
pub trait CullFormatter {
    /// Formats `zones` for `version`, one line per returned string.
    fn format(&self, zones: &[&ObjectRecord], version: GameVersion) -> Vec<String>;
}

impl<F> CullFormatter for F
where
    F: Fn(&[&ObjectRecord], GameVersion) -> Vec<String>,
{
    fn format(&self, zones: &[&ObjectRecord], version: GameVersion) -> Vec<String> {
        self(zones, version)
    }
}

/// Formats each cull record as an axis-aligned box.
///
/// The box is centred on the record position with half-extents equal to its
/// scale.
///
/// - III / VC: `cx, cy, cz, min.x, min.y, min.z, max.x, max.y, max.z, flags, 0`
/// - SA: `cx, cy, cz, 0, width_y, min.z, width_x, 0, max.z, flags, 0`
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxCullFormatter;

impl BoxCullFormatter {
    fn fields(zone: &ObjectRecord, version: GameVersion) -> Vec<Scalar> {
        let c = zone.position;
        let h = zone.scale;
        let min = Vec3 {
            x: c.x - h.x,
            y: c.y - h.y,
            z: c.z - h.z,
        };
        let max = Vec3 {
            x: c.x + h.x,
            y: c.y + h.y,
            z: c.z + h.z,
        };
        let flags = Scalar::Int(zone.flags.unwrap_or(0));
        let zero = Scalar::Int(0);
        let two = Scalar::Int(2);

        match version {
            GameVersion::III | GameVersion::VC => vec![
                c.x, c.y, c.z, min.x, min.y, min.z, max.x, max.y, max.z, flags, zero,
            ],
            GameVersion::SA => vec![
                c.x,
                c.y,
                c.z,
                zero,
                two * h.y,
                min.z,
                two * h.x,
                zero,
                max.z,
                flags,
                zero,
            ],
        }
    }
}

impl CullFormatter for BoxCullFormatter {
    fn format(&self, zones: &[&ObjectRecord], version: GameVersion) -> Vec<String> {
        zones
            .iter()
            .map(|zone| {
                Self::fields(zone, version)
                    .iter()
                    .map(Scalar::to_string)
                    .collect::<Vec<_>>()
                    .join(FIELD_SEPARATOR)
            })
            .collect()
    }
}
