use std::f64::consts::{FRAC_PI_2, PI};

use roomkit_base::{Error, Result};
use roomkit_geometry::{Transform, Vector3, WallRect, clamp};
use roomkit_room::{RoomDimensions, WALL_THICKNESS, Wall, WallExtent};
use roomkit_scene::{BoxGeometry, MeshHandle, SceneBoundary};
use serde::Serialize;
use tracing::debug;

use crate::kind::{OpeningRequest, OpeningType, SlotKey};
use crate::registry::OpeningRegistry;

/// Gap kept between an opening panel and the wall it belongs to.
pub const OPENING_STANDOFF: f64 = 0.15;
/// Extra z offset applied to every opening mesh so it never coincides with a
/// wall face.
pub const Z_FIGHT_NUDGE: f64 = 0.20;
/// Thickness of the panel drawn for an opening.
pub const OPENING_DEPTH: f64 = 0.1;

/// Opening measurements after they have been fitted to their wall.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClampedOpening {
    pub width: f64,
    pub height: f64,
    pub distance_from_wall: f64,
    pub distance_from_floor: f64,
}

impl ClampedOpening {
    pub fn rect(&self) -> WallRect {
        WallRect {
            x: self.distance_from_wall,
            y: self.distance_from_floor,
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Placement {
    pub wall: Wall,
    pub kind: OpeningType,
    pub clamped: ClampedOpening,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub y_rotation: f64,
}

impl Placement {
    /// Mesh translation, including the z-fighting nudge.
    pub fn translation(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z + Z_FIGHT_NUDGE)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation_rotation(self.translation(), self.y_rotation)
    }

    pub fn geometry(&self) -> BoxGeometry {
        BoxGeometry::new(self.clamped.width, self.clamped.height, OPENING_DEPTH)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlacedOpening {
    pub placement: Placement,
    pub mesh: MeshHandle,
}

/// Fits an opening to its wall. Size is clamped first so that the position
/// range can be derived from the already bounded size.
pub fn clamp_to_wall(extent: WallExtent, request: &OpeningRequest) -> Result<ClampedOpening> {
    let width = clamp(request.width, 0.0, extent.width);
    let height = clamp(request.height, 0.0, extent.height);
    if width.is_nan() || height.is_nan() {
        return Err(Error::InvalidDimension(format!(
            "{} size is not a number: width={width}, height={height}",
            request.kind
        )));
    }

    let floor = request.effective_floor_distance();
    if request.distance_from_wall.is_nan() || floor.is_nan() {
        return Err(Error::InvalidDimension(format!(
            "{} position is not a number: distance_from_wall={}, distance_from_floor={floor}",
            request.kind, request.distance_from_wall
        )));
    }

    let distance_from_wall = clamp(request.distance_from_wall, 0.0, extent.width - width);
    let distance_from_floor = if request.kind.is_floor_anchored() {
        0.0
    } else {
        clamp(floor, 0.0, extent.height - height)
    };

    Ok(ClampedOpening {
        width,
        height,
        distance_from_wall,
        distance_from_floor,
    })
}

/// Resolves the clamped size and the world transform of an opening without
/// touching the scene.
pub fn compute_placement(dimensions: &RoomDimensions, request: &OpeningRequest) -> Result<Placement> {
    let wall = request.wall()?;
    let clamped = clamp_to_wall(dimensions.wall_extent(wall), request)?;

    let half_width = dimensions.half_width();
    let half_depth = dimensions.half_depth();
    let standoff = WALL_THICKNESS * 0.5 + OPENING_STANDOFF;
    let along = clamped.distance_from_wall + clamped.width * 0.5;

    let (x, z, y_rotation) = match wall {
        Wall::Front => (-half_width + along, half_depth - standoff, PI),
        Wall::Back => (-half_width + along, -half_depth - standoff, 0.0),
        Wall::Left => (
            -half_width - standoff + 2.0 * WALL_THICKNESS,
            -half_depth + along,
            FRAC_PI_2,
        ),
        Wall::Right => (
            half_width - standoff + 2.0 * WALL_THICKNESS,
            -half_depth + along,
            -FRAC_PI_2,
        ),
    };

    Ok(Placement {
        wall,
        kind: request.kind,
        clamped,
        x,
        y: clamped.distance_from_floor + clamped.height * 0.5,
        z,
        y_rotation,
    })
}

/// Places an opening and syncs its mesh into the scene, reusing the slot's
/// mesh when one already exists. Nothing is mutated when placement fails.
pub fn place_opening<S: SceneBoundary + ?Sized>(
    dimensions: &RoomDimensions,
    registry: &mut OpeningRegistry,
    scene: &mut S,
    request: &OpeningRequest,
) -> Result<PlacedOpening> {
    let placement = compute_placement(dimensions, request)?;
    let key = SlotKey::new(placement.wall, placement.kind);
    let mesh = registry.acquire_mesh(key, placement.geometry(), placement.transform(), scene);
    debug!(
        slot = %key,
        width = placement.clamped.width,
        height = placement.clamped.height,
        x = placement.x,
        y = placement.y,
        z = placement.z,
        "opening placed"
    );
    Ok(PlacedOpening { placement, mesh })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn extent(width: f64, height: f64) -> WallExtent {
        WallExtent { width, height }
    }

    #[test]
    fn position_range_uses_clamped_width() -> Result<()> {
        let request = OpeningRequest::window(0, 4.0, 1.0, 9.0, 0.5);
        let clamped = clamp_to_wall(extent(10.0, 2.5), &request)?;
        assert_eq!(clamped.width, 4.0);
        assert_eq!(clamped.distance_from_wall, 6.0);
        Ok(())
    }

    #[test]
    fn sill_is_pushed_down_for_tall_windows() -> Result<()> {
        let request = OpeningRequest::window(0, 1.0, 2.0, 0.0, 1.0);
        let clamped = clamp_to_wall(extent(10.0, 2.5), &request)?;
        assert_relative_eq!(clamped.distance_from_floor, 0.5, epsilon = 1.0e-9);
        Ok(())
    }

    #[test]
    fn negative_inputs_collapse_to_zero() -> Result<()> {
        let request = OpeningRequest::window(0, -1.0, -2.0, -3.0, -4.0);
        let clamped = clamp_to_wall(extent(10.0, 2.5), &request)?;
        assert_eq!(clamped.rect().corners()[2], (0.0, 0.0));
        Ok(())
    }

    #[test]
    fn door_ignores_floor_offset() -> Result<()> {
        let mut request = OpeningRequest::door(0, 1.0, 2.0, 1.0);
        request.distance_from_floor = 3.0;
        let clamped = clamp_to_wall(extent(10.0, 2.5), &request)?;
        assert_eq!(clamped.distance_from_floor, 0.0);
        Ok(())
    }

    #[test]
    fn nan_size_is_rejected() {
        let request = OpeningRequest::window(0, f64::NAN, 1.0, 0.0, 0.0);
        assert!(matches!(
            clamp_to_wall(extent(10.0, 2.5), &request),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn nan_position_is_rejected() {
        let request = OpeningRequest::window(0, 1.0, 1.0, 0.0, f64::NAN);
        assert!(clamp_to_wall(extent(10.0, 2.5), &request).is_err());
    }

    #[test]
    fn infinite_size_fills_the_wall() -> Result<()> {
        let request = OpeningRequest::door(0, f64::INFINITY, 2.0, 1.0);
        let clamped = clamp_to_wall(extent(10.0, 2.5), &request)?;
        assert_eq!(clamped.width, 10.0);
        assert_eq!(clamped.distance_from_wall, 0.0);
        Ok(())
    }

    #[test]
    fn right_wall_faces_into_the_room() -> Result<()> {
        let room = RoomDimensions::new(10.0, 2.5, 10.0)?;
        let placement = compute_placement(&room, &OpeningRequest::window(3, 2.0, 1.0, 1.0, 1.0))?;
        assert_relative_eq!(placement.x, 5.0 - 0.2 + 0.2, epsilon = 1.0e-9);
        assert_relative_eq!(placement.z, -5.0 + 1.0 + 1.0, epsilon = 1.0e-9);
        assert_relative_eq!(placement.y_rotation, -FRAC_PI_2, epsilon = 1.0e-9);
        Ok(())
    }

    #[test]
    fn back_wall_has_no_rotation() -> Result<()> {
        let room = RoomDimensions::new(10.0, 2.5, 10.0)?;
        let placement = compute_placement(&room, &OpeningRequest::door(1, 1.0, 2.0, 2.0))?;
        assert_relative_eq!(placement.x, -5.0 + 2.0 + 0.5, epsilon = 1.0e-9);
        assert_relative_eq!(placement.y, 1.0, epsilon = 1.0e-9);
        assert_relative_eq!(placement.z, -5.2, epsilon = 1.0e-9);
        assert_eq!(placement.y_rotation, 0.0);
        Ok(())
    }
}
