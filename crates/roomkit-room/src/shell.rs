use roomkit_geometry::{Point3, Vector3};

use crate::WALL_THICKNESS;
use crate::dimensions::RoomDimensions;
use crate::wall::Wall;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShellPart {
    Wall(Wall),
    Floor,
}

impl std::fmt::Display for ShellPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellPart::Wall(wall) => write!(f, "{wall}-wall"),
            ShellPart::Floor => f.write_str("floor"),
        }
    }
}

/// One slab of the room shell: a box of `size` centered at `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellBox {
    pub part: ShellPart,
    pub size: Vector3,
    pub position: Point3,
}

pub fn room_shell(dimensions: &RoomDimensions) -> [ShellBox; 5] {
    let width = dimensions.width();
    let height = dimensions.height();
    let depth = dimensions.depth();
    let t = WALL_THICKNESS;
    [
        ShellBox {
            part: ShellPart::Wall(Wall::Front),
            size: Vector3::new(width, height, t),
            position: Point3::new(0.0, height * 0.5, depth * 0.5),
        },
        ShellBox {
            part: ShellPart::Wall(Wall::Back),
            size: Vector3::new(width, height, t),
            position: Point3::new(0.0, height * 0.5, -depth * 0.5),
        },
        ShellBox {
            part: ShellPart::Wall(Wall::Left),
            size: Vector3::new(t, height, depth),
            position: Point3::new(-width * 0.5, height * 0.5, 0.0),
        },
        ShellBox {
            part: ShellPart::Wall(Wall::Right),
            size: Vector3::new(t, height, depth),
            position: Point3::new(width * 0.5, height * 0.5, 0.0),
        },
        ShellBox {
            part: ShellPart::Floor,
            size: Vector3::new(width, t, depth),
            position: Point3::new(0.0, -t * 0.5, 0.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use roomkit_base::Result;

    #[test]
    fn shell_has_four_walls_and_a_floor() -> Result<()> {
        let room = RoomDimensions::new(10.0, 2.5, 8.0)?;
        let shell = room_shell(&room);
        let walls = shell
            .iter()
            .filter(|piece| matches!(piece.part, ShellPart::Wall(_)))
            .count();
        assert_eq!(walls, 4);
        assert_eq!(shell[4].part, ShellPart::Floor);
        assert_eq!(shell[4].size, Vector3::new(10.0, WALL_THICKNESS, 8.0));
        Ok(())
    }

    #[test]
    fn side_walls_sit_on_the_x_edges() -> Result<()> {
        let room = RoomDimensions::new(10.0, 2.5, 8.0)?;
        let shell = room_shell(&room);
        let left = shell
            .iter()
            .find(|piece| piece.part == ShellPart::Wall(Wall::Left))
            .map(|piece| piece.position);
        assert_eq!(left, Some(Point3::new(-5.0, 1.25, 0.0)));
        Ok(())
    }

    #[test]
    fn shell_boxes_follow_odd_room_sizes() -> Result<()> {
        let room = RoomDimensions::new(7.3, 2.7, 4.1)?;
        let shell = room_shell(&room);

        let front = &shell[0];
        assert_eq!(front.part, ShellPart::Wall(Wall::Front));
        assert_relative_eq!(front.position.y, 1.35, epsilon = 1.0e-12);
        assert_relative_eq!(front.position.z, 2.05, epsilon = 1.0e-12);

        let right = shell
            .iter()
            .find(|piece| piece.part == ShellPart::Wall(Wall::Right))
            .map(|piece| (piece.position, piece.size));
        let (position, size) = right.expect("right wall");
        assert_relative_eq!(position.x, 3.65, epsilon = 1.0e-12);
        assert_relative_eq!(size.z, 4.1, epsilon = 1.0e-12);

        let floor = &shell[4];
        assert_relative_eq!(floor.position.y, -WALL_THICKNESS * 0.5, epsilon = 1.0e-12);
        Ok(())
    }
}
