use roomkit_base::Guid;
use tracing::{debug, warn};

use crate::mesh::{BoxGeometry, Mesh, MeshHandle};

/// What the geometry code may ask of the renderer. The caller keeps
/// ownership of every [`Mesh`]; the scene only receives copies to draw.
pub trait SceneBoundary {
    fn add_mesh(&mut self, mesh: &Mesh);
    fn update_mesh(&mut self, mesh: &Mesh);
    fn remove_mesh(&mut self, handle: MeshHandle);
    fn dispose_geometry(&mut self, geometry: &BoxGeometry);
}

/// In-memory scene with no renderer behind it.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    meshes: Vec<Mesh>,
    disposed: Vec<Guid>,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn mesh(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.iter().find(|mesh| mesh.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn disposed_geometries(&self) -> &[Guid] {
        &self.disposed
    }

    pub fn disposal_count(&self, geometry: Guid) -> usize {
        self.disposed.iter().filter(|id| **id == geometry).count()
    }
}

impl SceneBoundary for HeadlessScene {
    fn add_mesh(&mut self, mesh: &Mesh) {
        match self.meshes.iter_mut().find(|m| m.handle == mesh.handle) {
            Some(existing) => {
                debug!(handle = %mesh.handle, "mesh already in scene, replacing");
                *existing = mesh.clone();
            }
            None => self.meshes.push(mesh.clone()),
        }
    }

    fn update_mesh(&mut self, mesh: &Mesh) {
        match self.meshes.iter_mut().find(|m| m.handle == mesh.handle) {
            Some(existing) => *existing = mesh.clone(),
            None => warn!(handle = %mesh.handle, label = %mesh.label, "update for a mesh not in scene"),
        }
    }

    fn remove_mesh(&mut self, handle: MeshHandle) {
        self.meshes.retain(|mesh| mesh.handle != handle);
    }

    fn dispose_geometry(&mut self, geometry: &BoxGeometry) {
        self.disposed.push(geometry.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Material;
    use roomkit_geometry::Transform;

    fn sample_mesh() -> Mesh {
        Mesh::new(
            "sample",
            BoxGeometry::new(1.0, 1.0, 0.1),
            Material::window(),
            Transform::identity(),
        )
    }

    #[test]
    fn add_update_remove() {
        let mut scene = HeadlessScene::new();
        let mut mesh = sample_mesh();
        scene.add_mesh(&mesh);
        scene.add_mesh(&mesh);
        assert_eq!(scene.len(), 1);

        mesh.geometry = BoxGeometry::new(2.0, 1.0, 0.1);
        scene.update_mesh(&mesh);
        assert_eq!(scene.mesh(mesh.handle).map(|m| m.geometry.width), Some(2.0));

        scene.remove_mesh(mesh.handle);
        assert!(scene.is_empty());
    }

    #[test]
    fn update_of_unknown_mesh_is_ignored() {
        let mut scene = HeadlessScene::new();
        scene.update_mesh(&sample_mesh());
        assert!(scene.is_empty());
    }

    #[test]
    fn disposals_are_logged_per_geometry() {
        let mut scene = HeadlessScene::new();
        let geometry = BoxGeometry::new(1.0, 1.0, 1.0);
        scene.dispose_geometry(&geometry);
        assert_eq!(scene.disposal_count(geometry.id), 1);
        assert_eq!(scene.disposed_geometries(), &[geometry.id]);
    }
}
