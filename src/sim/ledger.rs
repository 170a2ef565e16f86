//! Round and session bookkeeping
//!
//! Difficulty, target size, food count, the hunger clock and the display
//! timers that drive round transitions.

use serde::{Deserialize, Serialize};

use crate::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Incremented at every round start; reset to 1 on a loss
    pub difficulty: u32,
    /// 1-based once a round has started; reset to 0 on a loss
    pub round: u32,
    /// start_radius × difficulty, fixed for the round
    pub target_radius: f32,
    pub food_eaten: u32,
    /// Seconds until starvation
    pub hunger: f32,
    /// Seconds since the round started (drives the round banner)
    pub round_time: f32,
    /// Seconds left on the win banner
    pub win_countdown: f32,
    /// Predators attached this round
    pub attached: u32,
    /// Seconds until the next low-hunger beat
    low_hunger_timer: f32,
}

impl Ledger {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            difficulty: 1,
            round: 0,
            target_radius: tuning.start_radius,
            food_eaten: 0,
            hunger: tuning.hunger_reset,
            round_time: 0.0,
            win_countdown: 0.0,
            attached: 0,
            low_hunger_timer: 0.0,
        }
    }

    /// Start a new round one step harder than the last
    pub fn start_round(&mut self, tuning: &Tuning) {
        self.difficulty += 1;
        self.round += 1;
        self.target_radius = tuning.start_radius * self.difficulty as f32;
        self.food_eaten = 0;
        self.hunger = tuning.hunger_reset;
        self.round_time = 0.0;
        self.win_countdown = 0.0;
        self.attached = 0;
        self.low_hunger_timer = 0.0;
    }

    /// Losing sends the session back to the first round
    pub fn reset_progress(&mut self) {
        self.difficulty = 1;
        self.round = 0;
    }

    /// Advance the in-round clocks. Returns true when a low-hunger beat is due.
    pub fn tick_timers(&mut self, dt: f32, tuning: &Tuning) -> bool {
        self.hunger -= dt;
        self.round_time += dt;

        if self.hunger > tuning.low_hunger_threshold {
            // First beat fires as soon as hunger drops back under the threshold
            self.low_hunger_timer = 0.0;
            return false;
        }

        self.low_hunger_timer -= dt;
        if self.low_hunger_timer <= 0.0 {
            self.low_hunger_timer = tuning.low_hunger_beat;
            true
        } else {
            false
        }
    }

    /// Count a pellet and top up hunger, capped at a full stomach
    pub fn record_consumption(&mut self, tuning: &Tuning) {
        self.food_eaten += 1;
        self.hunger = (self.hunger + tuning.hunger_refill).min(tuning.hunger_reset);
    }

    pub fn record_attachment(&mut self) {
        self.attached += 1;
    }

    /// The invader's radius is a pure function of pellets eaten
    pub fn invader_radius(&self, tuning: &Tuning) -> f32 {
        tuning.start_radius + self.food_eaten as f32
    }

    pub fn hunger_fraction(&self, tuning: &Tuning) -> f32 {
        if tuning.hunger_reset <= 0.0 {
            return 0.0;
        }
        (self.hunger / tuning.hunger_reset).clamp(0.0, 1.0)
    }

    pub fn begin_win_display(&mut self, tuning: &Tuning) {
        self.win_countdown = tuning.win_display_seconds;
    }

    /// Run the win banner down. Returns true once it has expired.
    pub fn tick_win_display(&mut self, dt: f32) -> bool {
        self.win_countdown -= dt;
        self.win_countdown <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_round_scales_target() {
        let tuning = Tuning::default();
        let mut ledger = Ledger::new(&tuning);
        ledger.food_eaten = 12;
        ledger.attached = 4;
        ledger.hunger = 1.0;

        ledger.start_round(&tuning);
        assert_eq!(ledger.difficulty, 2);
        assert_eq!(ledger.round, 1);
        assert_eq!(ledger.target_radius, 60.0);
        assert_eq!(ledger.food_eaten, 0);
        assert_eq!(ledger.attached, 0);
        assert_eq!(ledger.hunger, tuning.hunger_reset);

        ledger.start_round(&tuning);
        assert_eq!(ledger.target_radius, 90.0);
        assert_eq!(ledger.round, 2);
    }

    #[test]
    fn test_reset_progress() {
        let tuning = Tuning::default();
        let mut ledger = Ledger::new(&tuning);
        ledger.start_round(&tuning);
        ledger.start_round(&tuning);
        ledger.reset_progress();
        assert_eq!(ledger.difficulty, 1);
        assert_eq!(ledger.round, 0);

        ledger.start_round(&tuning);
        assert_eq!(ledger.target_radius, 60.0);
    }

    /// Consumption uses the capped incremental refill, not a reset to full
    #[test]
    fn test_hunger_refill_is_capped_increment() {
        let tuning = Tuning::default();
        let mut ledger = Ledger::new(&tuning);

        ledger.hunger = 3.0;
        ledger.record_consumption(&tuning);
        assert_eq!(ledger.hunger, 8.0);
        assert_eq!(ledger.food_eaten, 1);

        ledger.hunger = 12.0;
        ledger.record_consumption(&tuning);
        assert_eq!(ledger.hunger, 15.0);

        ledger.record_consumption(&tuning);
        assert_eq!(ledger.hunger, 15.0);
        assert_eq!(ledger.food_eaten, 3);
    }

    #[test]
    fn test_low_hunger_beat_interval() {
        let tuning = Tuning::default();
        let mut ledger = Ledger::new(&tuning);
        ledger.hunger = 5.5;

        let dt = 0.125;
        let mut beats = Vec::new();
        for step in 0..12 {
            if ledger.tick_timers(dt, &tuning) {
                beats.push(step);
            }
        }
        // Crosses 5.0 at step 3, then beats every 0.25s (two steps)
        assert_eq!(beats, vec![3, 5, 7, 9, 11]);
        assert!((ledger.round_time - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_win_display_countdown() {
        let tuning = Tuning::default();
        let mut ledger = Ledger::new(&tuning);
        ledger.begin_win_display(&tuning);
        assert!(!ledger.tick_win_display(1.0));
        assert!(!ledger.tick_win_display(1.0));
        assert!(ledger.tick_win_display(1.0));
    }

    #[test]
    fn test_hunger_fraction() {
        let tuning = Tuning::default();
        let mut ledger = Ledger::new(&tuning);
        assert_eq!(ledger.hunger_fraction(&tuning), 1.0);
        ledger.hunger = 7.5;
        assert_eq!(ledger.hunger_fraction(&tuning), 0.5);
        ledger.hunger = -2.0;
        assert_eq!(ledger.hunger_fraction(&tuning), 0.0);
    }
}
