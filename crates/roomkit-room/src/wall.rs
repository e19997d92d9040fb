use roomkit_base::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::dimensions::RoomDimensions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    Front = 0,
    Back = 1,
    Left = 2,
    Right = 3,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Front, Wall::Back, Wall::Left, Wall::Right];

    pub const fn index(self) -> i64 {
        self as i64
    }

    pub const fn name(self) -> &'static str {
        match self {
            Wall::Front => "front",
            Wall::Back => "back",
            Wall::Left => "left",
            Wall::Right => "right",
        }
    }
}

impl TryFrom<i64> for Wall {
    type Error = Error;

    fn try_from(index: i64) -> Result<Self> {
        match index {
            0 => Ok(Wall::Front),
            1 => Ok(Wall::Back),
            2 => Ok(Wall::Left),
            3 => Ok(Wall::Right),
            other => Err(Error::InvalidWall(other)),
        }
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Planar footprint of one wall: `width` along the wall, `height` floor to ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct WallExtent {
    pub width: f64,
    pub height: f64,
}

pub fn extent_of(dimensions: &RoomDimensions, wall_index: i64) -> Result<WallExtent> {
    let wall = Wall::try_from(wall_index)?;
    Ok(dimensions.wall_extent(wall))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_and_back_follow_room_width() -> Result<()> {
        let room = RoomDimensions::new(12.0, 2.5, 7.0)?;
        for index in [0, 1] {
            let extent = extent_of(&room, index)?;
            assert_eq!(extent, WallExtent { width: 12.0, height: 2.5 });
        }
        Ok(())
    }

    #[test]
    fn side_walls_follow_room_depth() -> Result<()> {
        let room = RoomDimensions::new(12.0, 2.5, 7.0)?;
        for index in [2, 3] {
            let extent = extent_of(&room, index)?;
            assert_eq!(extent, WallExtent { width: 7.0, height: 2.5 });
        }
        Ok(())
    }

    #[test]
    fn out_of_range_index_is_an_error() -> Result<()> {
        let room = RoomDimensions::new(10.0, 2.5, 10.0)?;
        for index in [-1, 4, 5, i64::MAX, i64::MIN] {
            assert!(matches!(
                extent_of(&room, index),
                Err(Error::InvalidWall(value)) if value == index
            ));
        }
        Ok(())
    }

    #[test]
    fn index_round_trips() -> Result<()> {
        for wall in Wall::ALL {
            assert_eq!(Wall::try_from(wall.index())?, wall);
        }
        Ok(())
    }
}
