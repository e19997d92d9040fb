mod form;
mod session;
mod settings;
mod shell;

pub use form::{
    FormAction, FormValues, read_model_name, read_number, read_opening, read_room,
    read_wall_selection,
};
pub use session::{FormOutcome, ReplayFailure, ResizeReport, RoomSession};
pub use settings::Settings;
pub use shell::{RoomShell, ShellUpdate};
