//! Frame-driven simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Stable collectible order (by quadrant)
//! - No rendering or platform dependencies beyond the input snapshot

pub mod collision;
pub mod motion;
pub mod rng;
pub mod rotation;
pub mod state;
pub mod tick;

pub use collision::{check_capture, within_orbit};
pub use motion::{animate_ship, close_enough, step_heading, step_position};
pub use rng::SessionRng;
pub use rotation::{Rotation, solve_rotation};
pub use state::{Collectible, GameEvent, GamePhase, GameState, Quadrant, Ship};
pub use tick::{TickOutcome, tick};
