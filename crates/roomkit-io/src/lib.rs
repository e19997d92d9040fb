pub mod mesh;
pub mod model;
pub mod settings;

pub use mesh::{export_obj, scene_mesh};
pub use model::{ObjModelSource, read_obj_bounds};
pub use settings::{load_settings, parse_settings};
