mod dimensions;
mod shell;
mod wall;

pub use dimensions::{DimensionStore, RoomDimensions};
pub use shell::{ShellPart, ShellBox, room_shell};
pub use wall::{Wall, WallExtent, extent_of};

/// Thickness of the wall and floor slabs, in scene units.
pub const WALL_THICKNESS: f64 = 0.1;
