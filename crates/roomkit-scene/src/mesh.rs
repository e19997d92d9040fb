use roomkit_base::Guid;
use roomkit_geometry::{Point3, Transform, box_corners};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MeshHandle(Guid);

impl MeshHandle {
    pub fn new() -> Self {
        Self(Guid::new())
    }
}

impl Default for MeshHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MeshHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A box-shaped graphics resource. Every allocation carries a fresh id so the
/// renderer can release it exactly once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxGeometry {
    pub id: Guid,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl BoxGeometry {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            id: Guid::new(),
            width,
            height,
            depth,
        }
    }

    pub fn same_size(&self, width: f64, height: f64, depth: f64) -> bool {
        self.width == width && self.height == height && self.depth == depth
    }

    pub fn corners(&self) -> [Point3; 8] {
        box_corners(self.width, self.height, self.depth)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: u32,
    pub opacity: f32,
    pub transparent: bool,
    pub depth_write: bool,
    pub double_sided: bool,
}

impl Material {
    pub const fn window() -> Self {
        Self {
            color: 0x00ffff,
            opacity: 0.5,
            transparent: true,
            depth_write: false,
            double_sided: true,
        }
    }

    pub const fn door() -> Self {
        Self {
            color: 0x654321,
            opacity: 0.5,
            transparent: true,
            depth_write: true,
            double_sided: true,
        }
    }

    pub const fn wall() -> Self {
        Self {
            color: 0xffffff,
            opacity: 1.0,
            transparent: false,
            depth_write: true,
            double_sided: true,
        }
    }

    pub const fn floor() -> Self {
        Self {
            color: 0x006400,
            opacity: 1.0,
            transparent: false,
            depth_write: true,
            double_sided: false,
        }
    }

    pub const fn furniture() -> Self {
        Self {
            color: 0xc0c0c0,
            opacity: 1.0,
            transparent: false,
            depth_write: true,
            double_sided: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub handle: MeshHandle,
    pub label: String,
    pub geometry: BoxGeometry,
    pub material: Material,
    pub transform: Transform,
}

impl Mesh {
    pub fn new(
        label: impl Into<String>,
        geometry: BoxGeometry,
        material: Material,
        transform: Transform,
    ) -> Self {
        Self {
            handle: MeshHandle::new(),
            label: label.into(),
            geometry,
            material,
            transform,
        }
    }

    pub fn world_corners(&self) -> [Point3; 8] {
        self.geometry.corners().map(|corner| self.transform.apply(corner))
    }
}
