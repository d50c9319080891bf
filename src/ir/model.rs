//! Core scene model for the iplkit intermediate representation.
//!
//! A scene is a flat list of [`ObjectRecord`]s that have already been
//! classified by whatever produced them (an editor plugin, a converter, a
//! hand-written file). Fields that a map file needs but the scene may not
//! carry are optional here; the layout module decides what they default to.

use serde::{Deserialize, Serialize};

use super::ids::ObjectId;
use super::rotation::deserialize_rotation;
use super::scalar::Scalar;

/// A complete scene as read from disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// All objects in scene order.
    #[serde(default)]
    pub objects: Vec<ObjectRecord>,
}

/// How the scene classified an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// A placed model occurrence (`OBJ`).
    #[serde(rename = "OBJ", alias = "instance")]
    Instance,

    /// A visibility/occlusion zone (`CULL`).
    #[serde(rename = "CULL", alias = "cull")]
    CullZone,

    /// Collision meshes, shadows, effects and anything else that never
    /// reaches a map file.
    #[serde(other)]
    Other,
}

/// A 3-component vector, serialized as `[x, y, z]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[Scalar; 3]", into = "[Scalar; 3]")]
pub struct Vec3 {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
}

impl Vec3 {
    /// Creates a new vector from any mix of integer and float components.
    pub fn new(x: impl Into<Scalar>, y: impl Into<Scalar>, z: impl Into<Scalar>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// The origin, with integral components.
    pub fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    /// Unit scale, with integral components.
    pub fn one() -> Self {
        Self::new(1, 1, 1)
    }
}

impl From<[Scalar; 3]> for Vec3 {
    fn from([x, y, z]: [Scalar; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for [Scalar; 3] {
    fn from(v: Vec3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// A rotation quaternion.
///
/// Component order in map files is `x, y, z, w`, so that is the field
/// order here too.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub x: Scalar,
    pub y: Scalar,
    pub z: Scalar,
    pub w: Scalar,
}

impl Quat {
    /// Creates a new quaternion from any mix of integer and float components.
    pub fn new(
        x: impl Into<Scalar>,
        y: impl Into<Scalar>,
        z: impl Into<Scalar>,
        w: impl Into<Scalar>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
            w: w.into(),
        }
    }

    /// The identity rotation, with integral components.
    pub fn identity() -> Self {
        Self::new(0, 0, 0, 1)
    }
}

/// A single scene object as handed to the exporter.
///
/// Only `name` and `kind` are required. Everything else either has a
/// neutral transform default or is resolved by [`crate::layout::defaults`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// Display name in the source scene (e.g. `"lamp.002"`).
    pub name: String,

    /// Classification tag.
    #[serde(alias = "type")]
    pub kind: ObjectKind,

    /// Whether the object is part of the current selection.
    #[serde(default)]
    pub selected: bool,

    /// Model ID; absent means "no definition of its own".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Model name; derived from `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,

    /// Texture dictionary name; the model name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txd_name: Option<String>,

    /// Interior (area) index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interior: Option<i64>,

    /// Index of the LOD instance, or -1 for none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lod: Option<i64>,

    /// Draw distance in world units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_distance: Option<Scalar>,

    /// Definition flags bitfield.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<i64>,

    /// World position.
    #[serde(default = "Vec3::zero")]
    pub position: Vec3,

    /// World rotation. Accepts `{x, y, z, w}` or `{"euler": [x, y, z]}`.
    #[serde(
        default = "Quat::identity",
        deserialize_with = "deserialize_rotation"
    )]
    pub rotation: Quat,

    /// World scale.
    #[serde(default = "Vec3::one")]
    pub scale: Vec3,
}

impl ObjectRecord {
    /// Creates a record with the given name and kind and neutral everything else.
    pub fn new(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            selected: false,
            id: None,
            model_name: None,
            txd_name: None,
            interior: None,
            lod: None,
            draw_distance: None,
            flags: None,
            position: Vec3::zero(),
            rotation: Quat::identity(),
            scale: Vec3::one(),
        }
    }

    /// Creates an instance record with the given ID.
    pub fn instance(name: impl Into<String>, id: impl Into<ObjectId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::new(name, ObjectKind::Instance)
        }
    }

    /// Creates a cull-zone record.
    pub fn cull_zone(name: impl Into<String>) -> Self {
        Self::new(name, ObjectKind::CullZone)
    }

    /// Sets an explicit model name.
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    /// Sets the world position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Sets the world rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the world scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Marks the record as selected.
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// The model ID, with zero standing in for an absent one.
    pub fn object_id(&self) -> ObjectId {
        self.id.unwrap_or_default()
    }
}
