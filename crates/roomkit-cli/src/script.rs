use anyhow::{Context, Result};
use roomkit_geometry::Point3;
use roomkit_io::ObjModelSource;
use roomkit_openings::{OpeningRecord, OpeningRequest, PlacedOpening};
use roomkit_room::RoomDimensions;
use roomkit_scene::HeadlessScene;
use roomkit_session::RoomSession;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One step of a scripted session. Omitted opening fields fall back to the
/// settings defaults; all lengths are in settings units.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    DrawRoom {
        width: f64,
        height: f64,
        depth: f64,
    },
    AddWindow {
        wall: i64,
        width: Option<f64>,
        height: Option<f64>,
        distance_from_wall: Option<f64>,
        distance_from_floor: Option<f64>,
    },
    AddDoor {
        wall: i64,
        width: Option<f64>,
        height: Option<f64>,
        distance_from_wall: Option<f64>,
    },
    LoadModel {
        name: String,
    },
    DragModel {
        x: f64,
        z: f64,
    },
    Measure {
        from: [f64; 3],
        to: [f64; 3],
    },
}

pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    serde_json::from_str(text).context("parse script JSON")
}

#[derive(Debug, Serialize)]
pub struct FurnitureSummary {
    pub name: String,
    pub position: [f64; 3],
    pub scale: [f64; 3],
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub room: RoomDimensions,
    pub openings: Vec<OpeningRecord>,
    pub placements: Vec<PlacedOpening>,
    pub failures: Vec<String>,
    pub furniture: Option<FurnitureSummary>,
    pub measurements: Vec<f64>,
}

/// Runs `steps` in order against `session`, stopping at the first step that
/// fails. Replay failures during a resize are collected, not fatal.
pub fn run_steps(
    session: &mut RoomSession<HeadlessScene>,
    models: &ObjModelSource,
    steps: &[Step],
) -> Result<Summary> {
    let mut placements = Vec::new();
    let mut failures = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        let units = session.units();
        match step {
            Step::DrawRoom {
                width,
                height,
                depth,
            } => {
                let room = RoomDimensions::new(
                    units.to_scene(*width),
                    units.to_scene(*height),
                    units.to_scene(*depth),
                )
                .with_context(|| format!("step {index}: draw_room"))?;
                let report = session.on_room_resize(room);
                failures.extend(
                    report
                        .failures
                        .iter()
                        .map(|failure| format!("{}: {}", failure.key, failure.error)),
                );
                placements = report.replayed;
            }
            Step::AddWindow {
                wall,
                width,
                height,
                distance_from_wall,
                distance_from_floor,
            } => {
                let base = session.settings().window_request(*wall)?;
                let scene = |value: Option<f64>, fallback: f64| {
                    value.map_or(fallback, |v| units.to_scene(v))
                };
                let request = OpeningRequest::window(
                    *wall,
                    scene(*width, base.width),
                    scene(*height, base.height),
                    scene(*distance_from_wall, base.distance_from_wall),
                    scene(*distance_from_floor, base.distance_from_floor),
                );
                let placed = session
                    .add_opening(&request)
                    .with_context(|| format!("step {index}: add_window"))?;
                upsert(&mut placements, placed);
            }
            Step::AddDoor {
                wall,
                width,
                height,
                distance_from_wall,
            } => {
                let base = session.settings().door_request(*wall)?;
                let scene = |value: Option<f64>, fallback: f64| {
                    value.map_or(fallback, |v| units.to_scene(v))
                };
                let request = OpeningRequest::door(
                    *wall,
                    scene(*width, base.width),
                    scene(*height, base.height),
                    scene(*distance_from_wall, base.distance_from_wall),
                );
                let placed = session
                    .add_opening(&request)
                    .with_context(|| format!("step {index}: add_door"))?;
                upsert(&mut placements, placed);
            }
            Step::LoadModel { name } => {
                let outcome = pollster::block_on(session.load_model(models, name))
                    .with_context(|| format!("step {index}: load_model {name}"))?;
                info!(model = %name, ?outcome, "model step done");
            }
            Step::DragModel { x, z } => {
                let target = Point3::new(units.to_scene(*x), 0.0, units.to_scene(*z));
                if session.drag_model(target).is_none() {
                    tracing::warn!(step = index, "no model to drag");
                }
            }
            Step::Measure { from, to } => {
                let point = |p: &[f64; 3]| {
                    Point3::new(units.to_scene(p[0]), units.to_scene(p[1]), units.to_scene(p[2]))
                };
                session.measure(point(from), point(to));
            }
        }
    }

    let furniture = session.furniture().model().map(|model| {
        let position = model.position();
        let scale = model.scale();
        FurnitureSummary {
            name: model.name.clone(),
            position: [position.x, position.y, position.z],
            scale: [scale.x, scale.y, scale.z],
        }
    });

    Ok(Summary {
        room: *session.dimensions(),
        openings: session.registry().openings().to_vec(),
        placements,
        failures,
        furniture,
        measurements: session
            .measurements()
            .entries()
            .iter()
            .map(|entry| entry.distance)
            .collect(),
    })
}

fn upsert(placements: &mut Vec<PlacedOpening>, placed: PlacedOpening) {
    match placements.iter_mut().find(|p| p.mesh == placed.mesh) {
        Some(existing) => *existing = placed,
        None => placements.push(placed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomkit_session::Settings;

    fn session() -> Result<RoomSession<HeadlessScene>> {
        Ok(RoomSession::new(HeadlessScene::new(), Settings::default())?)
    }

    #[test]
    fn parses_tagged_steps() -> Result<()> {
        let steps = parse_script(
            r#"[
                { "action": "draw_room", "width": 20, "height": 2.5, "depth": 10 },
                { "action": "add_window", "wall": 0, "width": 2 },
                { "action": "add_door", "wall": 2 },
                { "action": "load_model", "name": "Chair" },
                { "action": "drag_model", "x": 1, "z": -1 }
            ]"#,
        )?;
        assert_eq!(steps.len(), 5);
        assert_eq!(
            steps[0],
            Step::DrawRoom {
                width: 20.0,
                height: 2.5,
                depth: 10.0
            }
        );
        assert!(matches!(steps[2], Step::AddDoor { wall: 2, width: None, .. }));
        assert!(parse_script(r#"[{ "action": "paint" }]"#).is_err());
        Ok(())
    }

    #[test]
    fn resize_step_replays_earlier_openings() -> Result<()> {
        let mut session = session()?;
        let models = ObjModelSource::new(std::env::temp_dir());
        let steps = parse_script(
            r#"[
                { "action": "add_window", "wall": 0, "width": 2, "height": 1,
                  "distance_from_wall": 3, "distance_from_floor": 1 },
                { "action": "add_door", "wall": 2 },
                { "action": "draw_room", "width": 20, "height": 2.5, "depth": 10 }
            ]"#,
        )?;

        let summary = run_steps(&mut session, &models, &steps)?;
        assert_eq!(summary.room.width(), 20.0);
        assert_eq!(summary.openings.len(), 2);
        assert_eq!(summary.placements.len(), 2);
        assert!(summary.failures.is_empty());
        assert!((summary.placements[0].placement.x + 2.0).abs() < 1.0e-9);
        assert!(summary.furniture.is_none());
        Ok(())
    }

    #[test]
    fn measure_steps_land_in_the_summary() -> Result<()> {
        let mut session = session()?;
        let models = ObjModelSource::new(std::env::temp_dir());
        let steps = parse_script(
            r#"[{ "action": "measure", "from": [0, 0, 0], "to": [0, 2, 0] }]"#,
        )?;

        let summary = run_steps(&mut session, &models, &steps)?;
        assert_eq!(summary.measurements.len(), 1);
        assert!((summary.measurements[0] - 2.0).abs() < 1.0e-12);
        Ok(())
    }

    #[test]
    fn failing_step_is_reported_with_its_index() -> Result<()> {
        let mut session = session()?;
        let models = ObjModelSource::new(std::env::temp_dir());
        let steps = parse_script(r#"[{ "action": "add_door", "wall": 9 }]"#)?;

        let err = match run_steps(&mut session, &models, &steps) {
            Ok(_) => panic!("invalid wall accepted"),
            Err(err) => err,
        };
        assert!(format!("{err:#}").contains("step 0"));
        assert!(session.registry().is_empty());
        Ok(())
    }
}
