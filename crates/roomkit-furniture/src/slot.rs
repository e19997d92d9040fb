use roomkit_base::{Error, Result};
use roomkit_geometry::{Point3, Transform, Vector3};
use roomkit_room::RoomDimensions;
use roomkit_scene::{BoxGeometry, Material, Mesh, SceneBoundary};
use tracing::info;

use crate::catalog::{ModelCatalog, ModelSource};
use crate::fit::{clamp_to_room, fit_scale};

#[derive(Clone, Debug, PartialEq)]
pub struct FurnitureModel {
    pub name: String,
    /// Bounding size measured when the model was loaded, before any scaling.
    pub original_size: Vector3,
    pub mesh: Mesh,
}

impl FurnitureModel {
    pub fn scale(&self) -> Vector3 {
        self.mesh.transform.scale
    }

    pub fn position(&self) -> Point3 {
        let t = self.mesh.transform.translation;
        Point3::new(t.x, t.y, t.z)
    }

    pub fn scaled_size(&self) -> Vector3 {
        let scale = self.scale();
        Vector3::new(
            self.original_size.x * scale.x,
            self.original_size.y * scale.y,
            self.original_size.z * scale.z,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    AlreadyLoaded,
}

/// The single furniture model placed in the room.
#[derive(Debug, Default)]
pub struct FurnitureSlot {
    model: Option<FurnitureModel>,
}

impl FurnitureSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> Option<&FurnitureModel> {
        self.model.as_ref()
    }

    /// Fetches `name` from the catalog and puts it in the room, centered on
    /// the floor. A previously loaded model is replaced; the same model is
    /// never fetched twice. On failure the slot and the scene are unchanged.
    pub async fn load<M, S>(
        &mut self,
        catalog: &ModelCatalog,
        source: &M,
        name: &str,
        scene: &mut S,
    ) -> Result<LoadOutcome>
    where
        M: ModelSource + ?Sized,
        S: SceneBoundary + ?Sized,
    {
        if self.model.as_ref().is_some_and(|model| model.name == name) {
            return Ok(LoadOutcome::AlreadyLoaded);
        }

        let location = catalog.location(name)?;
        let asset = source.fetch(location).await?;
        let size = asset.bounds.size();
        if !(size.x > 0.0 && size.y > 0.0 && size.z > 0.0) {
            return Err(Error::ModelLoad(format!(
                "model {name} has degenerate bounds {:?}",
                (size.x, size.y, size.z)
            )));
        }

        let mesh = Mesh::new(
            format!("furniture-{name}"),
            BoxGeometry::new(size.x, size.y, size.z),
            Material::furniture(),
            Transform::from_translation(Vector3::new(0.0, size.y * 0.5, 0.0)),
        );
        self.clear(scene);
        scene.add_mesh(&mesh);
        info!(model = name, location, "model loaded");

        self.model = Some(FurnitureModel {
            name: name.to_string(),
            original_size: size,
            mesh,
        });
        Ok(LoadOutcome::Loaded)
    }

    /// Refits the loaded model to `room`. Returns the applied scale, or
    /// `None` when nothing is loaded.
    pub fn rescale<S: SceneBoundary + ?Sized>(
        &mut self,
        room: &RoomDimensions,
        scene: &mut S,
    ) -> Option<Vector3> {
        let model = self.model.as_mut()?;
        let scale = fit_scale(model.original_size, room);
        model.mesh.transform.scale = scale;
        model.mesh.transform.translation.y = model.original_size.y * scale.y * 0.5;
        scene.update_mesh(&model.mesh);
        Some(scale)
    }

    /// Moves the model towards `target`, stopping at the walls.
    pub fn drag_to<S: SceneBoundary + ?Sized>(
        &mut self,
        target: Point3,
        room: &RoomDimensions,
        scene: &mut S,
    ) -> Option<Point3> {
        let size = self.model.as_ref()?.scaled_size();
        let position = clamp_to_room(target, size, room);
        let model = self.model.as_mut()?;
        model.mesh.transform.translation = Vector3::new(position.x, position.y, position.z);
        scene.update_mesh(&model.mesh);
        Some(position)
    }

    pub fn clear<S: SceneBoundary + ?Sized>(&mut self, scene: &mut S) {
        if let Some(model) = self.model.take() {
            scene.remove_mesh(model.mesh.handle);
            scene.dispose_geometry(&model.mesh.geometry);
        }
    }
}
