use std::collections::BTreeMap;

use roomkit_base::{Result, Units};
use roomkit_furniture::ModelCatalog;
use roomkit_openings::OpeningRequest;
use roomkit_room::RoomDimensions;
use serde::{Deserialize, Serialize};

use crate::form::FormValues;

/// Site-wide defaults, stored as flat key-value options in user units.
/// Missing keys fall back to the documented defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: f64,
    pub window_height: f64,
    pub window_distance_from_floor: f64,
    pub window_distance_from_wall: f64,
    pub door_width: f64,
    pub door_height: f64,
    pub door_distance_from_wall: f64,
    pub room_width: f64,
    pub room_height: f64,
    pub room_depth: f64,
    pub scale: f64,
    pub models: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1.0,
            window_height: 1.0,
            window_distance_from_floor: 1.0,
            window_distance_from_wall: 1.0,
            door_width: 1.0,
            door_height: 2.0,
            door_distance_from_wall: 2.0,
            room_width: 10.0,
            room_height: 2.5,
            room_depth: 10.0,
            scale: 1.0,
            models: BTreeMap::from([("Chair".to_string(), "chair.obj".to_string())]),
        }
    }
}

impl Settings {
    pub fn units(&self) -> Result<Units> {
        Units::with_scale(self.scale)
    }

    pub fn room(&self) -> Result<RoomDimensions> {
        let units = self.units()?;
        RoomDimensions::new(
            units.to_scene(self.room_width),
            units.to_scene(self.room_height),
            units.to_scene(self.room_depth),
        )
    }

    pub fn window_request(&self, wall_index: i64) -> Result<OpeningRequest> {
        let units = self.units()?;
        Ok(OpeningRequest::window(
            wall_index,
            units.to_scene(self.window_width),
            units.to_scene(self.window_height),
            units.to_scene(self.window_distance_from_wall),
            units.to_scene(self.window_distance_from_floor),
        ))
    }

    pub fn door_request(&self, wall_index: i64) -> Result<OpeningRequest> {
        let units = self.units()?;
        Ok(OpeningRequest::door(
            wall_index,
            units.to_scene(self.door_width),
            units.to_scene(self.door_height),
            units.to_scene(self.door_distance_from_wall),
        ))
    }

    pub fn catalog(&self) -> ModelCatalog {
        if self.models.is_empty() {
            return ModelCatalog::default();
        }
        ModelCatalog::from_entries(self.models.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// The form as the page first renders it, pre-filled with these defaults.
    pub fn default_form(&self) -> FormValues {
        let mut form = FormValues::new()
            .with("room-width", self.room_width.to_string())
            .with("room-height", self.room_height.to_string())
            .with("room-depth", self.room_depth.to_string())
            .with("window-width", self.window_width.to_string())
            .with("window-height", self.window_height.to_string())
            .with("window-distance-from-floor", self.window_distance_from_floor.to_string())
            .with("window-distance-from-wall", self.window_distance_from_wall.to_string())
            .with("door-width", self.door_width.to_string())
            .with("door-height", self.door_height.to_string())
            .with("door-distance-from-wall", self.door_distance_from_wall.to_string())
            .with("wall-selection", "0");
        if let Some(name) = self.catalog().names().next() {
            form.set("model-select", name);
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{read_opening, read_room};
    use roomkit_openings::OpeningType;

    #[test]
    fn documented_defaults() -> Result<()> {
        let settings = Settings::default();
        let room = settings.room()?;
        assert_eq!((room.width(), room.height(), room.depth()), (10.0, 2.5, 10.0));
        assert_eq!(settings.window_request(0)?, OpeningRequest::window(0, 1.0, 1.0, 1.0, 1.0));
        assert_eq!(settings.door_request(1)?, OpeningRequest::door(1, 1.0, 2.0, 2.0));
        Ok(())
    }

    #[test]
    fn default_form_reads_back_to_the_defaults() -> Result<()> {
        let settings = Settings::default();
        let form = settings.default_form();
        let units = settings.units()?;
        assert_eq!(read_room(&form, units)?, settings.room()?);
        assert_eq!(
            read_opening(&form, OpeningType::Door, units)?,
            settings.door_request(0)?
        );
        assert_eq!(form.get("model-select"), Some("Chair"));
        Ok(())
    }

    #[test]
    fn scale_applies_to_requests() -> Result<()> {
        let settings = Settings {
            scale: 0.5,
            ..Settings::default()
        };
        assert_eq!(settings.door_request(0)?.height, 1.0);
        assert_eq!(settings.room()?.width(), 5.0);
        Ok(())
    }

    #[test]
    fn empty_model_table_falls_back_to_the_catalog_default() -> Result<()> {
        let settings = Settings {
            models: BTreeMap::new(),
            ..Settings::default()
        };
        assert_eq!(settings.catalog().location("Chair")?, "chair.obj");
        Ok(())
    }
}
