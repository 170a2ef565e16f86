//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes in through `TickInput` and `dt`, never from a clock
//! - Seeded RNG only
//! - Stable iteration order (entity index)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod food;
pub mod invader;
pub mod ledger;
pub mod snapshot;
pub mod state;
pub mod swarm;
pub mod tick;

pub use collision::{circles_overlap, clamp_components, facing_rotation_degrees, rotate_quarter};
pub use food::FoodField;
pub use ledger::Ledger;
pub use snapshot::{FoodView, InvaderView, PredatorView, SessionView, Snapshot};
pub use state::{
    Camera, Food, GameEvent, GamePhase, GameState, Invader, MenuItem, MotionState, MovementStyle,
    Predator, SpeedTier,
};
pub use swarm::Swarm;
pub use tick::{TickInput, tick};
