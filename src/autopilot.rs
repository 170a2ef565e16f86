//! Demo input generator
//!
//! Plays the game without a human: starts a round from the menu, steers
//! toward the nearest pellet and double-taps thrust every couple of seconds
//! to dash. Used by the headless runner and for smoke tests.

use glam::Vec2;

use crate::sim::{GamePhase, GameState, MenuItem, TickInput};

/// Frames per thrust cycle; the cycle starts with a quick double tap
const CYCLE_FRAMES: u64 = 120;
/// How far from screen center the virtual pointer sits
const POINTER_REACH: f32 = 200.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    now: f32,
    frame: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the input for the next frame of `dt` seconds
    pub fn next_input(&mut self, state: &GameState, dt: f32) -> TickInput {
        self.now += dt;
        self.frame += 1;

        let mut input = TickInput {
            now: self.now,
            pointer: state.tuning.screen_center(),
            ..Default::default()
        };

        match state.phase {
            GamePhase::Menu => {
                if state.menu_selection == MenuItem::Start {
                    input.confirm = true;
                } else {
                    input.menu_up = true;
                }
            }
            GamePhase::HowToPlay | GamePhase::GameLose => input.back = true,
            GamePhase::InGame => {
                if let Some(target) = nearest_food(state) {
                    let dir = (target - state.invader.pos).normalize_or_zero();
                    input.pointer += dir * POINTER_REACH;
                    input.thrust = !matches!(self.frame % CYCLE_FRAMES, 0 | 3);
                }
            }
            GamePhase::GameInit | GamePhase::GameWin | GamePhase::Quit => {}
        }

        input
    }
}

fn nearest_food(state: &GameState) -> Option<Vec2> {
    let from = state.invader.pos;
    state
        .food
        .items
        .iter()
        .filter(|f| !f.consumed)
        .map(|f| f.pos)
        .min_by(|a, b| a.distance_squared(from).total_cmp(&b.distance_squared(from)))
}
