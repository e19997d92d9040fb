use cgmath::MetricSpace;
use roomkit_geometry::Point3;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub start: Point3,
    pub end: Point3,
    pub distance: f64,
}

/// Point-to-point tape measurements taken in the scene.
#[derive(Clone, Debug, Default)]
pub struct Measurements {
    entries: Vec<Measurement>,
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, start: Point3, end: Point3) -> f64 {
        let distance = start.distance(end);
        info!("measured distance: {distance:.2}");
        self.entries.push(Measurement {
            start,
            end,
            distance,
        });
        distance
    }

    pub fn entries(&self) -> &[Measurement] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
