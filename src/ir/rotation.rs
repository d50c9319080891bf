//! Rotation input handling.
//!
//! Scene files may describe a rotation either as a quaternion or as XYZ
//! Euler angles. Everything past deserialization works with quaternions
//! only, so Euler input is converted here, at the boundary.

use serde::{Deserialize, Deserializer};

use super::model::Quat;

/// The accepted on-disk shapes of a rotation.
#[derive(Deserialize)]
#[serde(untagged)]
enum RotationInput {
    Quaternion(Quat),
    Euler { euler: [f64; 3] },
}

/// Converts XYZ Euler angles (radians) to a quaternion.
///
/// The X rotation is applied first, then Y, then Z, matching the `XYZ`
/// rotation mode of common DCC tools.
pub fn quat_from_euler_xyz(x: f64, y: f64, z: f64) -> Quat {
    let (sx, cx) = (x * 0.5).sin_cos();
    let (sy, cy) = (y * 0.5).sin_cos();
    let (sz, cz) = (z * 0.5).sin_cos();

    Quat::new(
        sx * cy * cz - cx * sy * sz,
        cx * sy * cz + sx * cy * sz,
        cx * cy * sz - sx * sy * cz,
        cx * cy * cz + sx * sy * sz,
    )
}

/// Deserializes either rotation shape into a quaternion.
pub(crate) fn deserialize_rotation<'de, D>(deserializer: D) -> Result<Quat, D::Error>
where
    D: Deserializer<'de>,
{
    match RotationInput::deserialize(deserializer)? {
        RotationInput::Quaternion(q) => Ok(q),
        RotationInput::Euler { euler: [x, y, z] } => Ok(quat_from_euler_xyz(x, y, z)),
    }
}
