use roomkit_base::{Error, Result, Units};
use roomkit_furniture::{FurnitureSlot, LoadOutcome, ModelCatalog, ModelSource};
use roomkit_geometry::{Point3, Vector3};
use roomkit_openings::{
    OpeningRegistry, OpeningRequest, OpeningType, PlacedOpening, SlotKey, place_opening,
};
use roomkit_room::{DimensionStore, RoomDimensions};
use roomkit_scene::{CameraRig, Measurements, SceneBoundary};
use tracing::{error, info, warn};

use crate::form::{FormAction, FormValues, read_opening, read_room};
use crate::settings::Settings;
use crate::shell::{RoomShell, ShellUpdate};

#[derive(Debug)]
pub struct ReplayFailure {
    pub key: SlotKey,
    pub error: Error,
}

#[derive(Debug)]
pub struct ResizeReport {
    pub dimensions: RoomDimensions,
    pub shell: ShellUpdate,
    pub replayed: Vec<PlacedOpening>,
    pub failures: Vec<ReplayFailure>,
    pub furniture_scale: Option<Vector3>,
}

#[derive(Debug)]
pub enum FormOutcome {
    RoomDrawn(ResizeReport),
    OpeningPlaced(PlacedOpening),
}

/// One room on screen: its dimensions, shell, openings and furniture, and
/// the scene they are drawn into.
///
/// All state is mutated through `&mut self`; sharing a session across
/// threads needs a lock around the whole session.
pub struct RoomSession<S: SceneBoundary> {
    dimensions: DimensionStore,
    registry: OpeningRegistry,
    shell: RoomShell,
    furniture: FurnitureSlot,
    catalog: ModelCatalog,
    settings: Settings,
    measurements: Measurements,
    scene: S,
}

impl<S: SceneBoundary> RoomSession<S> {
    /// Draws the default room from `settings` into `scene`.
    pub fn new(mut scene: S, settings: Settings) -> Result<Self> {
        let room = settings.room()?;
        let units = settings.units()?;
        let mut shell = RoomShell::new();
        shell.rebuild(&room, &mut scene);
        info!(
            width = room.width(),
            height = room.height(),
            depth = room.depth(),
            "room drawn"
        );

        Ok(Self {
            dimensions: DimensionStore::new(room, units),
            registry: OpeningRegistry::new(),
            shell,
            furniture: FurnitureSlot::new(),
            catalog: settings.catalog(),
            settings,
            measurements: Measurements::new(),
            scene,
        })
    }

    pub fn dimensions(&self) -> &RoomDimensions {
        self.dimensions.current()
    }

    pub fn units(&self) -> Units {
        self.dimensions.units()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &OpeningRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut OpeningRegistry {
        &mut self.registry
    }

    pub fn shell(&self) -> &RoomShell {
        &self.shell
    }

    pub fn furniture(&self) -> &FurnitureSlot {
        &self.furniture
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn into_scene(self) -> S {
        self.scene
    }

    pub fn camera(&self) -> CameraRig {
        CameraRig::for_room(self.dimensions())
    }

    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    /// Tape-measures between two scene points and keeps the reading.
    pub fn measure(&mut self, start: Point3, end: Point3) -> f64 {
        self.measurements.add(start, end)
    }

    /// Places an opening and remembers it for later resizes. Adding to an
    /// occupied slot replaces the opening there.
    pub fn add_opening(&mut self, request: &OpeningRequest) -> Result<PlacedOpening> {
        let room = *self.dimensions.current();
        let placed = place_opening(&room, &mut self.registry, &mut self.scene, request)?;
        self.registry.record_opening(request, &room, placed.mesh)?;
        Ok(placed)
    }

    /// Switches to `room`: redraws the shell, replays every opening from its
    /// relative measurements and refits the furniture. A failing opening is
    /// reported and skipped; the others are still replayed.
    pub fn on_room_resize(&mut self, room: RoomDimensions) -> ResizeReport {
        self.dimensions.replace(room);
        let shell = self.shell.rebuild(&room, &mut self.scene);

        let replays: Vec<(SlotKey, OpeningRequest)> = self
            .registry
            .openings()
            .iter()
            .map(|record| (record.key(), record.replay_request(&room)))
            .collect();

        let mut replayed = Vec::with_capacity(replays.len());
        let mut failures = Vec::new();
        for (key, request) in replays {
            match place_opening(&room, &mut self.registry, &mut self.scene, &request) {
                Ok(placed) => {
                    if let Some(record) = self.registry.record_mut(key) {
                        record.mesh = placed.mesh;
                    }
                    replayed.push(placed);
                }
                Err(err) => {
                    warn!(slot = %key, error = %err, "opening could not be replayed");
                    failures.push(ReplayFailure { key, error: err });
                }
            }
        }

        let furniture_scale = self.furniture.rescale(&room, &mut self.scene);
        info!(
            width = room.width(),
            height = room.height(),
            depth = room.depth(),
            openings = replayed.len(),
            failed = failures.len(),
            "room resized"
        );

        ResizeReport {
            dimensions: room,
            shell,
            replayed,
            failures,
            furniture_scale,
        }
    }

    /// Loads a catalog model. The fit to the current room is applied only
    /// after the fetch has resolved successfully.
    pub async fn load_model<M: ModelSource + ?Sized>(
        &mut self,
        source: &M,
        name: &str,
    ) -> Result<LoadOutcome> {
        let outcome = self
            .furniture
            .load(&self.catalog, source, name, &mut self.scene)
            .await?;
        if outcome == LoadOutcome::Loaded {
            let room = *self.dimensions.current();
            self.furniture.rescale(&room, &mut self.scene);
        }
        Ok(outcome)
    }

    pub fn drag_model(&mut self, target: Point3) -> Option<Point3> {
        let room = *self.dimensions.current();
        self.furniture.drag_to(target, &room, &mut self.scene)
    }

    /// Handles a button press on the configuration form. Errors are logged
    /// and returned; the scene is left as it was.
    pub fn submit(&mut self, form: &FormValues, action: FormAction) -> Result<FormOutcome> {
        let result = self.dispatch(form, action);
        if let Err(err) = &result {
            error!(?action, error = %err, "form action rejected");
        }
        result
    }

    fn dispatch(&mut self, form: &FormValues, action: FormAction) -> Result<FormOutcome> {
        let units = self.units();
        match action {
            FormAction::DrawRoom => {
                let room = read_room(form, units)?;
                Ok(FormOutcome::RoomDrawn(self.on_room_resize(room)))
            }
            FormAction::AddWindow => {
                let request = read_opening(form, OpeningType::Window, units)?;
                Ok(FormOutcome::OpeningPlaced(self.add_opening(&request)?))
            }
            FormAction::AddDoor => {
                let request = read_opening(form, OpeningType::Door, units)?;
                Ok(FormOutcome::OpeningPlaced(self.add_opening(&request)?))
            }
        }
    }

    /// Removes everything this session put into the scene.
    pub fn teardown(&mut self) {
        self.registry.teardown(&mut self.scene);
        self.furniture.clear(&mut self.scene);
        self.shell.teardown(&mut self.scene);
        self.measurements.clear();
    }
}
