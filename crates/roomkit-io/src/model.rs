use roomkit_base::{Error, Result};
use roomkit_furniture::{ModelAsset, ModelSource};
use roomkit_geometry::{Aabb, Point3};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;
use truck_polymesh::obj;

/// Serves catalog models from OBJ files under a root directory.
#[derive(Clone, Debug)]
pub struct ObjModelSource {
    root: PathBuf,
}

impl ObjModelSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ModelSource for ObjModelSource {
    async fn fetch(&self, location: &str) -> Result<ModelAsset> {
        let path = self.root.join(location);
        let bounds = read_obj_bounds(&path)?;
        debug!(path = %path.display(), "model read");
        Ok(ModelAsset { bounds })
    }
}

/// Bounding box of every vertex position in an OBJ file.
pub fn read_obj_bounds(path: &Path) -> Result<Aabb> {
    let file = File::open(path)
        .map_err(|err| Error::ModelLoad(format!("open {}: {err}", path.display())))?;
    let mesh = obj::read(BufReader::new(file))
        .map_err(|err| Error::ModelLoad(format!("parse {}: {err}", path.display())))?;
    let points: Vec<Point3> = mesh
        .positions()
        .iter()
        .map(|p| Point3::new(p.x, p.y, p.z))
        .collect();
    Aabb::from_points(&points)
        .ok_or_else(|| Error::ModelLoad(format!("{} has no vertices", path.display())))
}
