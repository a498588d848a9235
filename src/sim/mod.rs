//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one logical tick, no wall-clock access)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod hazard;
pub mod player;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::first_hit;
pub use hazard::{CactusSize, Cloud, FlightLevel, Hazard, HazardKind};
pub use player::{Player, Pose};
pub use rect::{Insets, Rect};
pub use state::{GameEvent, GameSession, Phase};
pub use tick::{tick, InputEvent, InputState, Key, TickInput};
