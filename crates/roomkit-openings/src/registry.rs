use std::collections::BTreeMap;

use roomkit_base::Result;
use roomkit_geometry::Transform;
use roomkit_room::{RoomDimensions, Wall, WallExtent};
use roomkit_scene::{BoxGeometry, Mesh, MeshHandle, SceneBoundary};
use serde::Serialize;
use tracing::debug;

use crate::kind::{OpeningRequest, OpeningType, SlotKey};

/// Opening measurements as fractions of their wall's extent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RelativeOpening {
    pub width: f64,
    pub height: f64,
    pub distance_from_wall: f64,
    pub distance_from_floor: f64,
}

impl RelativeOpening {
    pub fn from_request(request: &OpeningRequest, extent: WallExtent) -> Self {
        Self {
            width: request.width / extent.width,
            height: request.height / extent.height,
            distance_from_wall: request.distance_from_wall / extent.width,
            distance_from_floor: request.effective_floor_distance() / extent.height,
        }
    }

    pub fn to_request(&self, kind: OpeningType, wall: Wall, extent: WallExtent) -> OpeningRequest {
        OpeningRequest::new(
            kind,
            wall.index(),
            self.width * extent.width,
            self.height * extent.height,
            self.distance_from_wall * extent.width,
            self.distance_from_floor * extent.height,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OpeningRecord {
    pub kind: OpeningType,
    pub wall: Wall,
    pub width: f64,
    pub height: f64,
    pub distance_from_wall: f64,
    pub distance_from_floor: f64,
    pub relative: RelativeOpening,
    pub mesh: MeshHandle,
}

impl OpeningRecord {
    pub fn key(&self) -> SlotKey {
        SlotKey::new(self.wall, self.kind)
    }

    /// Absolute request for this opening in a room of the given size.
    pub fn replay_request(&self, dimensions: &RoomDimensions) -> OpeningRequest {
        self.relative
            .to_request(self.kind, self.wall, dimensions.wall_extent(self.wall))
    }
}

/// Owns every opening of one room together with the meshes drawn for them.
#[derive(Debug, Default)]
pub struct OpeningRegistry {
    records: Vec<OpeningRecord>,
    meshes: BTreeMap<SlotKey, Mesh>,
}

impl OpeningRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_opening(
        &mut self,
        request: &OpeningRequest,
        dimensions: &RoomDimensions,
        mesh: MeshHandle,
    ) -> Result<()> {
        let wall = request.wall()?;
        let record = OpeningRecord {
            kind: request.kind,
            wall,
            width: request.width,
            height: request.height,
            distance_from_wall: request.distance_from_wall,
            distance_from_floor: request.effective_floor_distance(),
            relative: RelativeOpening::from_request(request, dimensions.wall_extent(wall)),
            mesh,
        };

        let key = record.key();
        match self.records.iter_mut().find(|existing| existing.key() == key) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
        Ok(())
    }

    pub fn openings(&self) -> &[OpeningRecord] {
        &self.records
    }

    pub fn get(&self, key: SlotKey) -> Option<&OpeningRecord> {
        self.records.iter().find(|record| record.key() == key)
    }

    pub fn record_mut(&mut self, key: SlotKey) -> Option<&mut OpeningRecord> {
        self.records.iter_mut().find(|record| record.key() == key)
    }

    pub fn mesh(&self, key: SlotKey) -> Option<&Mesh> {
        self.meshes.get(&key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the slot's mesh handle, creating the mesh on first use. An
    /// existing mesh gets its previous geometry disposed before the new one
    /// is attached.
    pub(crate) fn acquire_mesh<S: SceneBoundary + ?Sized>(
        &mut self,
        key: SlotKey,
        geometry: BoxGeometry,
        transform: Transform,
        scene: &mut S,
    ) -> MeshHandle {
        match self.meshes.get_mut(&key) {
            Some(mesh) => {
                scene.dispose_geometry(&mesh.geometry);
                mesh.geometry = geometry;
                mesh.transform = transform;
                scene.update_mesh(mesh);
                debug!(slot = %key, handle = %mesh.handle, "reused opening mesh");
                mesh.handle
            }
            None => {
                let mesh = Mesh::new(key.to_string(), geometry, key.kind.material(), transform);
                scene.add_mesh(&mesh);
                let handle = mesh.handle;
                self.meshes.insert(key, mesh);
                debug!(slot = %key, %handle, "created opening mesh");
                handle
            }
        }
    }

    /// Removes every opening from the scene and releases its geometry.
    pub fn teardown<S: SceneBoundary + ?Sized>(&mut self, scene: &mut S) {
        for (_, mesh) in std::mem::take(&mut self.meshes) {
            scene.remove_mesh(mesh.handle);
            scene.dispose_geometry(&mesh.geometry);
        }
        self.records.clear();
    }
}
