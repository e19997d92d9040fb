use roomkit_base::{Error, Result, Units};
use serde::Serialize;

use crate::wall::{Wall, WallExtent, extent_of};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RoomDimensions {
    width: f64,
    height: f64,
    depth: f64,
}

impl RoomDimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        ensure_positive("depth", depth)?;
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    pub fn half_depth(&self) -> f64 {
        self.depth * 0.5
    }

    pub fn wall_extent(&self, wall: Wall) -> WallExtent {
        match wall {
            Wall::Front | Wall::Back => WallExtent {
                width: self.width,
                height: self.height,
            },
            Wall::Left | Wall::Right => WallExtent {
                width: self.depth,
                height: self.height,
            },
        }
    }
}

/// Holds the room currently on screen. The active session owns exactly one.
#[derive(Clone, Debug)]
pub struct DimensionStore {
    current: RoomDimensions,
    units: Units,
}

impl DimensionStore {
    pub fn new(current: RoomDimensions, units: Units) -> Self {
        Self { current, units }
    }

    pub fn current(&self) -> &RoomDimensions {
        &self.current
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn replace(&mut self, dimensions: RoomDimensions) -> RoomDimensions {
        std::mem::replace(&mut self.current, dimensions)
    }

    pub fn extent_of(&self, wall_index: i64) -> Result<WallExtent> {
        extent_of(&self.current, wall_index)
    }
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidDimension(format!(
            "room {name} must be a positive number, got {value}"
        )));
    }
    Ok(())
}
