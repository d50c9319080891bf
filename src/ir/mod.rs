//! Intermediate Representation (IR) for iplkit.
//!
//! This module defines the scene-side data the exporter works from: a flat
//! list of already-classified object records with resolved transforms.
//! Readers for scene files live here too, because they are where editor
//! conventions (Euler rotations, numeric suffixes on names) stop and the
//! map-file world begins.
//!
//! # Design Principles
//!
//! 1. **Optional means optional**: Per-object map properties that a scene
//!    may not carry are `Option`s. Their defaults are declared once, in
//!    [`crate::layout::defaults`], not at each use site.
//!
//! 2. **Numbers keep their shape**: [`Scalar`] remembers whether a value
//!    was integral so that output text is reproducible.
//!
//! 3. **Quaternions only**: Rotations are normalized to quaternions during
//!    deserialization.
//!
//! # Example
//!
//! ```
//! use iplkit::ir::{ObjectRecord, Quat, Vec3};
//!
//! let lamp = ObjectRecord::instance("streetlamp.001", 1)
//!     .with_position(Vec3::new(10.0, 20.0, 0.0))
//!     .with_rotation(Quat::identity());
//! assert_eq!(lamp.object_id().as_i64(), 1);
//! ```

mod ids;
pub mod io_json;
pub mod io_yaml;
mod model;
mod rotation;
mod scalar;

// Re-export core types for convenient access
pub use ids::ObjectId;
pub use model::{ObjectKind, ObjectRecord, Quat, Scene, Vec3};
pub use rotation::quat_from_euler_xyz;
pub use scalar::Scalar;
