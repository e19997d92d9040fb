use roomkit_geometry::{Point3, Vector3, clamp};
use roomkit_room::RoomDimensions;

/// Scale that fits a model of `original` size into the room: uniform on the
/// floor plan, with the vertical factor additionally capped by the ceiling.
pub fn fit_scale(original: Vector3, room: &RoomDimensions) -> Vector3 {
    let horizontal = (room.width() / original.x).min(room.depth() / original.z);
    let vertical = horizontal.min(room.height() / original.y);
    Vector3::new(horizontal, vertical, horizontal)
}

/// Keeps a footprint of `size` inside the room walls, resting on the floor.
pub fn clamp_to_room(target: Point3, size: Vector3, room: &RoomDimensions) -> Point3 {
    let max_x = (room.width() - size.x) * 0.5;
    let max_z = (room.depth() - size.z) * 0.5;
    Point3::new(
        clamp(target.x, -max_x, max_x),
        size.y * 0.5,
        clamp(target.z, -max_z, max_z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use roomkit_base::Result;

    #[test]
    fn wide_model_is_limited_by_the_floor_plan() -> Result<()> {
        let room = RoomDimensions::new(10.0, 2.5, 5.0)?;
        let scale = fit_scale(Vector3::new(2.0, 1.0, 2.0), &room);
        assert_relative_eq!(scale.x, 2.5);
        assert_relative_eq!(scale.z, 2.5);
        assert_relative_eq!(scale.y, 2.5);
        Ok(())
    }

    #[test]
    fn tall_model_is_capped_by_the_ceiling() -> Result<()> {
        let room = RoomDimensions::new(10.0, 2.5, 10.0)?;
        let scale = fit_scale(Vector3::new(1.0, 2.0, 1.0), &room);
        assert_relative_eq!(scale.x, 10.0);
        assert_relative_eq!(scale.y, 1.25);
        Ok(())
    }

    #[test]
    fn drag_stops_at_the_walls() -> Result<()> {
        let room = RoomDimensions::new(10.0, 2.5, 8.0)?;
        let size = Vector3::new(2.0, 1.0, 2.0);
        let p = clamp_to_room(Point3::new(20.0, 7.0, -20.0), size, &room);
        assert_eq!(p, Point3::new(4.0, 0.5, -3.0));

        let inside = clamp_to_room(Point3::new(1.0, 0.0, 1.0), size, &room);
        assert_eq!(inside, Point3::new(1.0, 0.5, 1.0));
        Ok(())
    }
}
