use roomkit_geometry::Point3;
use roomkit_room::RoomDimensions;

/// Initial camera framing for a room: standing in the front-right corner at
/// ceiling height, looking at the room center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Point3,
    pub target: Point3,
    pub fov_deg: f64,
    pub near: f64,
    pub far: f64,
    pub damping: f64,
    pub max_polar_angle: f64,
}

impl CameraRig {
    pub fn for_room(room: &RoomDimensions) -> Self {
        Self {
            position: Point3::new(room.half_width(), room.height(), room.half_depth()),
            target: Point3::new(0.0, room.height() * 0.5, 0.0),
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            damping: 0.05,
            max_polar_angle: std::f64::consts::FRAC_PI_2,
        }
    }

    pub fn aspect_for(width: u32, height: u32) -> f64 {
        if height == 0 {
            return 1.0;
        }
        f64::from(width) / f64::from(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomkit_base::Result;

    #[test]
    fn frames_the_room_center() -> Result<()> {
        let room = RoomDimensions::new(10.0, 2.5, 8.0)?;
        let rig = CameraRig::for_room(&room);
        assert_eq!(rig.position, Point3::new(5.0, 2.5, 4.0));
        assert_eq!(rig.target, Point3::new(0.0, 1.25, 0.0));
        Ok(())
    }

    #[test]
    fn zero_height_viewport_has_unit_aspect() {
        assert_eq!(CameraRig::aspect_for(800, 0), 1.0);
        assert_eq!(CameraRig::aspect_for(800, 400), 2.0);
    }
}
