//! C ABI for the cooking simulation
//!
//! Game engines hold an opaque `CookSimInstance*`, report contacts from their
//! collision system and call `cook_sim_update` once per frame. Everything
//! returns a `CookSimErrorCode`; `cook_sim_get_last_error` explains failures.

mod error;
mod helpers;
mod instance;
mod objects;
mod queries;
mod simulation;

pub use error::{cook_sim_get_last_error, cook_sim_get_last_error_code, CookSimErrorCode};
pub use instance::{cook_sim_destroy, cook_sim_new, CookSimInstance};
pub use objects::{
    cook_sim_add_burner, cook_sim_add_pan, cook_sim_add_steak, cook_sim_burner_set_intensity,
    cook_sim_burner_turn_off, cook_sim_burner_turn_on, cook_sim_remove,
};
pub use queries::{
    cook_sim_get_burner_stats, cook_sim_get_pan_stats, cook_sim_get_stats,
    cook_sim_get_steak_stats, BurnerStats, PanSmoke, PanState, PanStats, SimStats, SteakDoneness,
    SteakStats,
};
pub use simulation::{cook_sim_contact, cook_sim_update};
