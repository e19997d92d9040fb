use roomkit_base::{Error, Result};
use roomkit_room::Wall;
use roomkit_scene::Material;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningType {
    Window,
    Door,
}

impl OpeningType {
    pub const fn name(self) -> &'static str {
        match self {
            OpeningType::Window => "window",
            OpeningType::Door => "door",
        }
    }

    pub const fn material(self) -> Material {
        match self {
            OpeningType::Window => Material::window(),
            OpeningType::Door => Material::door(),
        }
    }

    /// Doors always start at the floor; they have no sill height.
    pub const fn is_floor_anchored(self) -> bool {
        matches!(self, OpeningType::Door)
    }
}

impl std::fmt::Display for OpeningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for OpeningType {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "window" => Ok(OpeningType::Window),
            "door" => Ok(OpeningType::Door),
            other => Err(Error::InvalidParameter(format!(
                "unknown opening type {other:?}, expected window or door"
            ))),
        }
    }
}

/// One window slot and one door slot exist per wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SlotKey {
    pub wall: Wall,
    pub kind: OpeningType,
}

impl SlotKey {
    pub const fn new(wall: Wall, kind: OpeningType) -> Self {
        Self { wall, kind }
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.wall.index(), self.kind)
    }
}

/// Absolute measurements for one opening, already converted to scene units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OpeningRequest {
    pub kind: OpeningType,
    pub wall_index: i64,
    pub width: f64,
    pub height: f64,
    pub distance_from_wall: f64,
    pub distance_from_floor: f64,
}

impl OpeningRequest {
    pub fn window(
        wall_index: i64,
        width: f64,
        height: f64,
        distance_from_wall: f64,
        distance_from_floor: f64,
    ) -> Self {
        Self {
            kind: OpeningType::Window,
            wall_index,
            width,
            height,
            distance_from_wall,
            distance_from_floor,
        }
    }

    pub fn door(wall_index: i64, width: f64, height: f64, distance_from_wall: f64) -> Self {
        Self {
            kind: OpeningType::Door,
            wall_index,
            width,
            height,
            distance_from_wall,
            distance_from_floor: 0.0,
        }
    }

    /// Dispatches to the variant constructor; `distance_from_floor` is
    /// dropped for doors.
    pub fn new(
        kind: OpeningType,
        wall_index: i64,
        width: f64,
        height: f64,
        distance_from_wall: f64,
        distance_from_floor: f64,
    ) -> Self {
        match kind {
            OpeningType::Window => Self::window(
                wall_index,
                width,
                height,
                distance_from_wall,
                distance_from_floor,
            ),
            OpeningType::Door => Self::door(wall_index, width, height, distance_from_wall),
        }
    }

    pub fn wall(&self) -> Result<Wall> {
        Wall::try_from(self.wall_index)
    }

    pub fn slot(&self) -> Result<SlotKey> {
        Ok(SlotKey::new(self.wall()?, self.kind))
    }

    /// Floor offset actually used for placement.
    pub fn effective_floor_distance(&self) -> f64 {
        if self.kind.is_floor_anchored() {
            0.0
        } else {
            self.distance_from_floor
        }
    }
}
