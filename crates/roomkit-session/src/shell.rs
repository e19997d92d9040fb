use std::collections::BTreeMap;

use roomkit_geometry::{Transform, Vector3};
use roomkit_room::{RoomDimensions, ShellPart, room_shell};
use roomkit_scene::{BoxGeometry, Material, Mesh, SceneBoundary};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellUpdate {
    pub kept: usize,
    pub rebuilt: usize,
}

/// Wall and floor meshes of the current room.
#[derive(Debug, Default)]
pub struct RoomShell {
    parts: BTreeMap<ShellPart, Mesh>,
}

impl RoomShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the shell in line with `room`. A part that already sits at the
    /// right position with the right size keeps its mesh; anything else is
    /// released and drawn again.
    pub fn rebuild<S: SceneBoundary + ?Sized>(
        &mut self,
        room: &RoomDimensions,
        scene: &mut S,
    ) -> ShellUpdate {
        let mut update = ShellUpdate::default();
        for piece in room_shell(room) {
            let position = Vector3::new(piece.position.x, piece.position.y, piece.position.z);
            let unchanged = self.parts.get(&piece.part).is_some_and(|mesh| {
                mesh.transform.translation == position
                    && mesh.geometry.same_size(piece.size.x, piece.size.y, piece.size.z)
            });
            if unchanged {
                update.kept += 1;
                continue;
            }

            if let Some(old) = self.parts.remove(&piece.part) {
                scene.remove_mesh(old.handle);
                scene.dispose_geometry(&old.geometry);
            }
            let material = match piece.part {
                ShellPart::Wall(_) => Material::wall(),
                ShellPart::Floor => Material::floor(),
            };
            let mesh = Mesh::new(
                piece.part.to_string(),
                BoxGeometry::new(piece.size.x, piece.size.y, piece.size.z),
                material,
                Transform::from_translation(position),
            );
            scene.add_mesh(&mesh);
            self.parts.insert(piece.part, mesh);
            update.rebuilt += 1;
        }
        debug!(kept = update.kept, rebuilt = update.rebuilt, "room shell synced");
        update
    }

    pub fn mesh(&self, part: ShellPart) -> Option<&Mesh> {
        self.parts.get(&part)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn teardown<S: SceneBoundary + ?Sized>(&mut self, scene: &mut S) {
        for (_, mesh) in std::mem::take(&mut self.parts) {
            scene.remove_mesh(mesh.handle);
            scene.dispose_geometry(&mesh.geometry);
        }
    }
}
