mod catalog;
mod fit;
mod slot;

pub use catalog::{ModelAsset, ModelCatalog, ModelSource};
pub use fit::{clamp_to_room, fit_scale};
pub use slot::{FurnitureModel, FurnitureSlot, LoadOutcome};
