mod kind;
mod placement;
mod registry;

pub use kind::{OpeningRequest, OpeningType, SlotKey};
pub use placement::{
    ClampedOpening, OPENING_DEPTH, OPENING_STANDOFF, PlacedOpening, Placement, Z_FIGHT_NUDGE,
    clamp_to_wall, compute_placement, place_opening,
};
pub use registry::{OpeningRecord, OpeningRegistry, RelativeOpening};
