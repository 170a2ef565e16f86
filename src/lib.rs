//! Clumpnuggets - an invader grows by eating while a swarm tries to clump onto it
//!
//! Core modules:
//! - `sim`: Per-frame simulation (entities, round ledger, game phase machine)
//! - `tuning`: Data-driven game balance
//! - `autopilot`: Input generator for headless/demo runs
//!
//! Window, drawing, audio and raw input polling live outside this crate. They
//! feed a [`sim::TickInput`] per frame and read back a [`sim::Snapshot`].

pub mod autopilot;
pub mod sim;
pub mod tuning;

pub use autopilot::Autopilot;
pub use tuning::Tuning;

/// Default game configuration constants
pub mod consts {
    /// Pointer reference frame (screen) dimensions
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 1000.0;

    /// Entities spawn within ±WORLD_HALF_EXTENT on both axes
    pub const WORLD_HALF_EXTENT: f32 = 5000.0;
    /// Nothing spawns this close to the invader's start position
    pub const SPAWN_CLEAR_RADIUS: f32 = 200.0;

    /// Invader defaults
    pub const START_RADIUS: f32 = 30.0;
    pub const ACCELERATION: f32 = 300.0;
    /// Acceleration lost per round after the first
    pub const ACCELERATION_ROUND_PENALTY: f32 = 10.0;
    pub const MIN_ACCELERATION: f32 = 200.0;
    /// Exponential velocity decay rate (per second)
    pub const FRICTION: f32 = 1.2;
    /// Contact tests shrink the invader by this much
    pub const EMBED_DISTANCE: f32 = 2.0;

    /// Dash (double-tap thrust)
    pub const DASH_WINDOW: f32 = 0.2;
    pub const DASH_BOOST: f32 = 5.0;
    pub const DASH_COOLDOWN: f32 = 1.0;
    pub const DASH_COOLDOWN_PER_ATTACHED: f32 = 0.3;

    /// Predator (clumpnugget) defaults
    pub const PREDATOR_COUNT: usize = 100;
    pub const PREDATOR_RADIUS: f32 = 10.0;
    pub const PREDATOR_SPEED_NORMAL: f32 = 120.0;
    pub const PREDATOR_SPEED_FAST: f32 = 200.0;
    pub const PREDATOR_FAST_CHANCE: f64 = 0.2;
    pub const PREDATOR_SPIRAL_CHANCE: f64 = 0.3;
    pub const PREDATOR_SIGHT_RADIUS: f32 = 600.0;
    /// Spiral lateral wobble (radians/sec of wall clock, units per frame)
    pub const SPIRAL_FREQUENCY: f32 = 5.0;
    pub const SPIRAL_AMPLITUDE: f32 = 2.0;

    /// Food defaults
    pub const FOOD_COUNT: usize = 1000;
    pub const FOOD_RADIUS: f32 = 10.0;

    /// Hunger clock (seconds)
    pub const HUNGER_RESET: f32 = 15.0;
    pub const HUNGER_REFILL: f32 = 5.0;
    pub const LOW_HUNGER_THRESHOLD: f32 = 5.0;
    pub const LOW_HUNGER_BEAT: f32 = 0.25;

    /// How long the win banner stays up before the next round
    pub const WIN_DISPLAY_SECONDS: f32 = 3.0;

    /// Pickup sound hints
    pub const PICKUP_PITCH_MIN: f32 = 0.8;
    pub const PICKUP_PITCH_MAX: f32 = 1.2;
    pub const PICKUP_VOLUME_MIN: f32 = 0.6;
    pub const PICKUP_VOLUME_MAX: f32 = 1.0;
}
