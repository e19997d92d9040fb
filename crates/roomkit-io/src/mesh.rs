use anyhow::{Context, Result, bail};
use roomkit_scene::{HeadlessScene, Mesh};
use std::fs::File;
use std::path::Path;
use truck_base::cgmath64::Point3;
use truck_polymesh::{Faces, PolygonMesh, StandardAttributes, StandardVertex, obj};

// Quads over the corner order of `box_corners`, wound outwards.
const BOX_FACES: [[usize; 4]; 6] = [
    [0, 3, 2, 1],
    [4, 5, 6, 7],
    [0, 1, 5, 4],
    [3, 7, 6, 2],
    [0, 4, 7, 3],
    [1, 2, 6, 5],
];

/// Flattens every mesh in the scene into one polygon mesh in world space.
pub fn scene_mesh<'a>(meshes: impl IntoIterator<Item = &'a Mesh>) -> PolygonMesh {
    let mut positions = Vec::new();
    let mut faces = Faces::<StandardVertex>::default();
    for mesh in meshes {
        let base = positions.len();
        positions.extend(
            mesh.world_corners()
                .iter()
                .map(|p| Point3::new(p.x, p.y, p.z)),
        );
        for quad in BOX_FACES {
            let face = quad.map(|i| StandardVertex {
                pos: base + i,
                uv: None,
                nor: None,
            });
            faces.push(&face);
        }
    }

    let attributes = StandardAttributes {
        positions,
        ..Default::default()
    };
    PolygonMesh::new(attributes, faces)
}

pub fn export_obj(scene: &HeadlessScene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let mesh = scene_mesh(scene.meshes());
    if mesh.positions().is_empty() {
        bail!("scene has no meshes to export");
    }

    let file = File::create(path).with_context(|| format!("create OBJ file {}", path.display()))?;
    obj::write(&mesh, file).with_context(|| format!("write OBJ file {}", path.display()))?;
    tracing::info!(path = %path.display(), meshes = scene.len(), "scene exported");
    Ok(())
}
