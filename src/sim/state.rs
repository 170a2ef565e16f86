//! Game state and core simulation types
//!
//! Entity collections are allocated once in [`GameState::new`] and refilled in
//! place at every round start, so a running session never reallocates them.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::FoodField;
use super::ledger::Ledger;
use super::swarm::Swarm;
use crate::Tuning;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu
    #[default]
    Menu,
    /// Instructions screen
    HowToPlay,
    /// Round setup; becomes InGame on the next tick
    GameInit,
    /// Active round
    InGame,
    /// Target size reached, banner countdown running
    GameWin,
    /// Starved
    GameLose,
    /// Terminal
    Quit,
}

/// Entries of the title menu, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MenuItem {
    #[default]
    Start,
    HowToPlay,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Start, MenuItem::HowToPlay, MenuItem::Quit];

    pub fn index(self) -> usize {
        match self {
            MenuItem::Start => 0,
            MenuItem::HowToPlay => 1,
            MenuItem::Quit => 2,
        }
    }

    /// Entry below this one (wraps to the top)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Entry above this one (wraps to the bottom)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Start => "Start",
            MenuItem::HowToPlay => "How to play",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Invader motion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionState {
    #[default]
    Idle,
    /// Thrust held
    Moving,
    /// Reserved; no transition assigns it
    Dead,
}

/// World-space camera. The invader sits at `target`; `offset` is the screen
/// point the target is drawn at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub target: Vec2,
    pub offset: Vec2,
}

/// The player-controlled blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invader {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Unit vector from screen center toward the pointer
    pub facing: Vec2,
    pub radius: f32,
    /// Degrees, derived from `facing`
    pub rotation: f32,
    pub state: MotionState,
    /// Seconds until the next dash is allowed (goes negative, never clamped)
    pub dash_cooldown: f32,
    /// Times of the last two Idle -> Moving transitions
    pub thrust_starts: [Option<f32>; 2],
    /// Slot the next thrust start overwrites
    pub thrust_slot: usize,
    /// A dash boost was applied during the most recent update
    pub dashed: bool,
}

impl Invader {
    pub fn new(start_radius: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            facing: Vec2::NEG_Y,
            radius: start_radius,
            rotation: 0.0,
            state: MotionState::Idle,
            dash_cooldown: 0.0,
            thrust_starts: [None; 2],
            thrust_slot: 0,
            dashed: false,
        }
    }

    /// Back to a fresh round start at the origin
    pub fn reset(&mut self, start_radius: f32) {
        *self = Self::new(start_radius);
    }
}

/// Predator pursuit speed class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedTier {
    #[default]
    Normal,
    Fast,
}

impl SpeedTier {
    /// Acceleration and per-axis velocity cap
    pub fn speed(self, tuning: &Tuning) -> f32 {
        match self {
            SpeedTier::Normal => tuning.predator_speed_normal,
            SpeedTier::Fast => tuning.predator_speed_fast,
        }
    }
}

/// How a predator closes in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementStyle {
    /// Straight pursuit
    #[default]
    Chase,
    /// Pursuit with a sinusoidal sideways wobble
    Spiral,
}

/// A clumpnugget
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Predator {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Position relative to the invader center; meaningful once attached
    pub offset: Vec2,
    /// Set once per round, never cleared until the next round start
    pub attached: bool,
    pub tier: SpeedTier,
    pub style: MovementStyle,
}

impl Predator {
    /// Place an attached predator on the invader's (embedded) surface
    pub fn seat(&mut self, invader_pos: Vec2, surface_radius: f32) {
        let dir = self.offset.try_normalize().unwrap_or(Vec2::X);
        self.offset = dir * surface_radius;
        self.pos = invader_pos + self.offset;
    }
}

/// A food pellet
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Food {
    pub pos: Vec2,
    /// Rate of the last shove from attached predators (units/sec)
    pub vel: Vec2,
    /// Set once per round, never cleared until the next round start
    pub consumed: bool,
}

/// Advisory notifications for audio/UI; cleared at the start of every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodConsumed { pitch: f32, volume: f32 },
    LowHungerBeat,
    PredatorAttached { index: usize },
    Dashed,
    RoundStarted { round: u32, target_radius: f32 },
    RoundWon { round: u32 },
    RoundLost { round: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub menu_selection: MenuItem,
    pub camera: Camera,
    pub invader: Invader,
    pub swarm: Swarm,
    pub food: FoodField,
    pub ledger: Ledger,
    /// Events raised during the most recent tick
    pub events: Vec<GameEvent>,
    /// Wall-clock time of the most recent tick (seconds)
    pub time: f32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a session sitting at the title menu
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Menu,
            menu_selection: MenuItem::Start,
            camera: Camera {
                target: Vec2::ZERO,
                offset: tuning.screen_center(),
            },
            invader: Invader::new(tuning.start_radius),
            swarm: Swarm::with_capacity(tuning.predator_count),
            food: FoodField::with_capacity(tuning.food_count),
            ledger: Ledger::new(&tuning),
            events: Vec::with_capacity(16),
            time: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Move to a new phase, logging the change
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// GameInit entry: bump difficulty, reset the ledger, re-randomize entities
    pub fn begin_round(&mut self) {
        self.ledger.start_round(&self.tuning);
        self.camera.target = Vec2::ZERO;
        self.invader.reset(self.tuning.start_radius);
        self.swarm.respawn(&mut self.rng, &self.tuning);
        self.food.respawn(&mut self.rng, &self.tuning);

        log::info!(
            "Round {} (difficulty {}): grow to radius {}",
            self.ledger.round,
            self.ledger.difficulty,
            self.ledger.target_radius
        );
        self.events.push(GameEvent::RoundStarted {
            round: self.ledger.round,
            target_radius: self.ledger.target_radius,
        });
    }

    /// Hunger remaining as a fraction of a full stomach, in [0, 1]
    pub fn hunger_fraction(&self) -> f32 {
        self.ledger.hunger_fraction(&self.tuning)
    }

    /// True once the session reached its terminal phase
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Quit
    }
}

/// Uniform point inside the world square, pushed out of the clear zone
/// around the origin
pub(crate) fn spawn_point(rng: &mut Pcg32, tuning: &Tuning) -> Vec2 {
    let extent = tuning.world_half_extent;
    let point = Vec2::new(
        rng.random_range(-extent..=extent),
        rng.random_range(-extent..=extent),
    );
    if point.length() < tuning.spawn_clear_radius {
        point.try_normalize().unwrap_or(Vec2::X) * tuning.spawn_clear_radius
    } else {
        point
    }
}
