//! Game balance, loadable from JSON
//!
//! Every field defaults to the matching value in [`crate::consts`], so a
//! tuning file only needs to mention what it changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values supplied to the simulation at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub world_half_extent: f32,
    pub spawn_clear_radius: f32,

    // === Invader ===
    pub start_radius: f32,
    pub acceleration: f32,
    pub acceleration_round_penalty: f32,
    pub min_acceleration: f32,
    pub friction: f32,
    pub embed_distance: f32,

    // === Dash ===
    pub dash_window: f32,
    pub dash_boost: f32,
    pub dash_cooldown: f32,
    pub dash_cooldown_per_attached: f32,

    // === Predators ===
    pub predator_count: usize,
    pub predator_radius: f32,
    pub predator_speed_normal: f32,
    pub predator_speed_fast: f32,
    pub predator_fast_chance: f64,
    pub predator_spiral_chance: f64,
    pub predator_sight_radius: f32,
    pub spiral_frequency: f32,
    pub spiral_amplitude: f32,

    // === Food ===
    pub food_count: usize,
    pub food_radius: f32,

    // === Timers ===
    pub hunger_reset: f32,
    pub hunger_refill: f32,
    pub low_hunger_threshold: f32,
    pub low_hunger_beat: f32,
    pub win_display_seconds: f32,

    // === Audio hints ===
    pub pickup_pitch: (f32, f32),
    pub pickup_volume: (f32, f32),
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            world_half_extent: WORLD_HALF_EXTENT,
            spawn_clear_radius: SPAWN_CLEAR_RADIUS,

            start_radius: START_RADIUS,
            acceleration: ACCELERATION,
            acceleration_round_penalty: ACCELERATION_ROUND_PENALTY,
            min_acceleration: MIN_ACCELERATION,
            friction: FRICTION,
            embed_distance: EMBED_DISTANCE,

            dash_window: DASH_WINDOW,
            dash_boost: DASH_BOOST,
            dash_cooldown: DASH_COOLDOWN,
            dash_cooldown_per_attached: DASH_COOLDOWN_PER_ATTACHED,

            predator_count: PREDATOR_COUNT,
            predator_radius: PREDATOR_RADIUS,
            predator_speed_normal: PREDATOR_SPEED_NORMAL,
            predator_speed_fast: PREDATOR_SPEED_FAST,
            predator_fast_chance: PREDATOR_FAST_CHANCE,
            predator_spiral_chance: PREDATOR_SPIRAL_CHANCE,
            predator_sight_radius: PREDATOR_SIGHT_RADIUS,
            spiral_frequency: SPIRAL_FREQUENCY,
            spiral_amplitude: SPIRAL_AMPLITUDE,

            food_count: FOOD_COUNT,
            food_radius: FOOD_RADIUS,

            hunger_reset: HUNGER_RESET,
            hunger_refill: HUNGER_REFILL,
            low_hunger_threshold: LOW_HUNGER_THRESHOLD,
            low_hunger_beat: LOW_HUNGER_BEAT,
            win_display_seconds: WIN_DISPLAY_SECONDS,

            pickup_pitch: (PICKUP_PITCH_MIN, PICKUP_PITCH_MAX),
            pickup_volume: (PICKUP_VOLUME_MIN, PICKUP_VOLUME_MAX),
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Screen center; facing is measured from here to the pointer
    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Thrust acceleration for a round (1-based), floored at `min_acceleration`
    pub fn acceleration_for_round(&self, round: u32) -> f32 {
        let penalty = round.saturating_sub(1) as f32 * self.acceleration_round_penalty;
        (self.acceleration - penalty).max(self.min_acceleration)
    }

    /// Dash cooldown after a dash with `attached` predators riding along
    pub fn dash_cooldown_for(&self, attached: u32) -> f32 {
        self.dash_cooldown + self.dash_cooldown_per_attached * attached as f32
    }
}
