mod boundary;
mod camera;
mod measure;
mod mesh;

pub use boundary::{HeadlessScene, SceneBoundary};
pub use camera::CameraRig;
pub use measure::{Measurement, Measurements};
pub use mesh::{BoxGeometry, Material, Mesh, MeshHandle};
