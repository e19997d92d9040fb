use std::collections::BTreeMap;

use roomkit_base::{Error, Result, Units};
use roomkit_openings::{OpeningRequest, OpeningType};
use roomkit_room::RoomDimensions;

/// Raw values of the configuration form, keyed by input id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(id, value)| (id.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (id, value) in iter {
            form.set(id, value);
        }
        form
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    DrawRoom,
    AddWindow,
    AddDoor,
}

fn read_field<'a>(form: &'a FormValues, id: &str) -> Result<&'a str> {
    form.get(id)
        .map(str::trim)
        .ok_or_else(|| Error::MissingInput(id.to_string()))
}

/// Reads a numeric field and converts it to scene units.
pub fn read_number(form: &FormValues, id: &str, units: Units) -> Result<f64> {
    let text = read_field(form, id)?;
    let value: f64 = text
        .parse()
        .map_err(|_| Error::InvalidDimension(format!("{id} is not a number: {text:?}")))?;
    if !value.is_finite() {
        return Err(Error::InvalidDimension(format!("{id} must be finite, got {text:?}")));
    }
    Ok(units.to_scene(value))
}

pub fn read_room(form: &FormValues, units: Units) -> Result<RoomDimensions> {
    RoomDimensions::new(
        read_number(form, "room-width", units)?,
        read_number(form, "room-height", units)?,
        read_number(form, "room-depth", units)?,
    )
}

pub fn read_wall_selection(form: &FormValues) -> Result<i64> {
    let text = read_field(form, "wall-selection")?;
    text.parse().map_err(|_| {
        Error::InvalidParameter(format!("wall selection is not an integer: {text:?}"))
    })
}

pub fn read_opening(form: &FormValues, kind: OpeningType, units: Units) -> Result<OpeningRequest> {
    let prefix = kind.name();
    let width = read_number(form, &format!("{prefix}-width"), units)?;
    let height = read_number(form, &format!("{prefix}-height"), units)?;
    let distance_from_wall = read_number(form, &format!("{prefix}-distance-from-wall"), units)?;
    let wall_index = read_wall_selection(form)?;

    Ok(match kind {
        OpeningType::Window => {
            let distance_from_floor = read_number(form, "window-distance-from-floor", units)?;
            OpeningRequest::window(wall_index, width, height, distance_from_wall, distance_from_floor)
        }
        OpeningType::Door => OpeningRequest::door(wall_index, width, height, distance_from_wall),
    })
}

pub fn read_model_name(form: &FormValues) -> Result<String> {
    let name = read_field(form, "model-select")?;
    if name.is_empty() {
        return Err(Error::MissingInput("model-select".to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_form() -> FormValues {
        FormValues::new()
            .with("window-width", "2")
            .with("window-height", "1")
            .with("window-distance-from-wall", " 3 ")
            .with("window-distance-from-floor", "1")
            .with("wall-selection", "0")
    }

    #[test]
    fn reads_a_window() -> Result<()> {
        let request = read_opening(&window_form(), OpeningType::Window, Units::metric())?;
        assert_eq!(request, OpeningRequest::window(0, 2.0, 1.0, 3.0, 1.0));
        Ok(())
    }

    #[test]
    fn doors_never_read_a_floor_offset() -> Result<()> {
        let form = FormValues::from_iter([
            ("door-width", "1"),
            ("door-height", "2"),
            ("door-distance-from-wall", "2"),
            ("wall-selection", "2"),
        ]);
        let request = read_opening(&form, OpeningType::Door, Units::metric())?;
        assert_eq!(request, OpeningRequest::door(2, 1.0, 2.0, 2.0));
        Ok(())
    }

    #[test]
    fn values_are_scaled_to_scene_units() -> Result<()> {
        let form = FormValues::from_iter([
            ("room-width", "4000"),
            ("room-height", "2500"),
            ("room-depth", "3000"),
        ]);
        let room = read_room(&form, Units::from_length(roomkit_base::LengthUnit::Millimeter))?;
        assert!((room.width() - 4.0).abs() < 1.0e-12);
        assert!((room.height() - 2.5).abs() < 1.0e-12);
        Ok(())
    }

    #[test]
    fn missing_field_is_named() {
        let form: FormValues = window_form()
            .iter()
            .filter(|(id, _)| *id != "window-height")
            .collect();
        assert!(matches!(
            read_opening(&form, OpeningType::Window, Units::metric()),
            Err(Error::MissingInput(id)) if id == "window-height"
        ));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let form = window_form().with("window-width", "wide");
        assert!(matches!(
            read_opening(&form, OpeningType::Window, Units::metric()),
            Err(Error::InvalidDimension(_))
        ));
        let form = window_form().with("window-height", "NaN");
        assert!(matches!(
            read_opening(&form, OpeningType::Window, Units::metric()),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn wall_selection_must_be_an_integer() {
        let form = window_form().with("wall-selection", "front");
        assert!(matches!(read_wall_selection(&form), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn blank_model_selection_is_missing() {
        let form = FormValues::new().with("model-select", "  ");
        assert!(matches!(read_model_name(&form), Err(Error::MissingInput(_))));
        assert!(read_model_name(&FormValues::new()).is_err());
    }
}
