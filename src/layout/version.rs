//! Target game versions.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The game whose map loader the output is written for.
///
/// Each version expects its own incompatible `inst` field layout. When no
/// version is given, or the given tag is not recognized, SA is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum GameVersion {
    /// GTA III.
    III,
    /// GTA Vice City.
    VC,
    /// GTA San Andreas.
    #[default]
    SA,
}

impl GameVersion {
    /// All versions, oldest first.
    pub const ALL: [GameVersion; 3] = [GameVersion::III, GameVersion::VC, GameVersion::SA];

    /// Short tag used on the command line and in reports.
    pub fn tag(&self) -> &'static str {
        match self {
            GameVersion::III => "III",
            GameVersion::VC => "VC",
            GameVersion::SA => "SA",
        }
    }

    /// Human-readable game name.
    pub fn label(&self) -> &'static str {
        match self {
            GameVersion::III => "GTA III",
            GameVersion::VC => "GTA Vice City",
            GameVersion::SA => "GTA San Andreas",
        }
    }

    /// Number of fields in an `inst` line for this version.
    pub fn instance_field_count(&self) -> usize {
        match self {
            GameVersion::III => 12,
            GameVersion::VC => 13,
            GameVersion::SA => 11,
        }
    }

    /// Resolves an optional, possibly unrecognized tag.
    ///
    /// Missing and unrecognized tags both resolve to [`GameVersion::SA`].
    pub fn from_tag_or_default(tag: Option<&str>) -> GameVersion {
        match tag {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::debug!(tag = raw, "unrecognized game version, using SA layout");
                GameVersion::default()
            }),
            None => GameVersion::default(),
        }
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error for a tag that names no known game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown game version '{0}'")]
pub struct UnknownGameVersion(pub String);

impl FromStr for GameVersion {
    type Err = UnknownGameVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iii" | "3" | "gta3" | "gtaiii" => Ok(GameVersion::III),
            "vc" | "vicecity" | "gtavc" => Ok(GameVersion::VC),
            "sa" | "sanandreas" | "gtasa" => Ok(GameVersion::SA),
            _ => Err(UnknownGameVersion(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for GameVersion {
    /// Lenient: unrecognized tags become SA instead of failing the whole
    /// options document.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(GameVersion::from_tag_or_default(raw.as_deref()))
    }
}
