use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Guid(Uuid);

impl Guid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Meter,
}

impl LengthUnit {
    /// Scene units per one unit of this length. The scene is modelled in meters.
    pub const fn scene_scale(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Meter => 1.0,
        }
    }
}

/// Fixed conversion applied to every raw user measurement before it reaches
/// the geometry code.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Units {
    pub length: LengthUnit,
    pub scale: f64,
}

impl Default for Units {
    fn default() -> Self {
        Self::metric()
    }
}

impl Units {
    pub const fn metric() -> Self {
        Self {
            length: LengthUnit::Meter,
            scale: 1.0,
        }
    }

    pub const fn from_length(length: LengthUnit) -> Self {
        Self {
            length,
            scale: length.scene_scale(),
        }
    }

    pub fn with_scale(scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "unit scale must be a positive number, got {scale}"
            )));
        }
        Ok(Self {
            length: LengthUnit::Meter,
            scale,
        })
    }

    pub fn to_scene(&self, value: f64) -> f64 {
        value * self.scale
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid wall index {0}: expected 0 (front), 1 (back), 2 (left) or 3 (right)")]
    InvalidWall(i64),
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("unknown model: {0}")]
    UnknownModel(String),
    #[error("model load failed: {0}")]
    ModelLoad(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
