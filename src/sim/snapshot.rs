//! Read-only view of the simulation for renderers, audio and HUD

use glam::Vec2;
use serde::Serialize;

use super::state::{GameEvent, GamePhase, GameState, MenuItem, MotionState};

#[derive(Debug, Clone, Serialize)]
pub struct InvaderView {
    pub pos: Vec2,
    pub radius: f32,
    pub rotation: f32,
    pub facing: Vec2,
    pub state: MotionState,
    pub dashed: bool,
    /// 1.0 = full stomach, 0.0 = starving
    pub hunger_fraction: f32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PredatorView {
    pub pos: Vec2,
    pub attached: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FoodView {
    pub pos: Vec2,
    pub consumed: bool,
}

/// HUD numbers
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub phase: GamePhase,
    pub menu_selection: MenuItem,
    pub round: u32,
    pub difficulty: u32,
    pub target_radius: f32,
    pub food_eaten: u32,
    pub attached: u32,
    pub hunger: f32,
    pub round_time: f32,
    pub win_countdown: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub invader: InvaderView,
    pub camera_target: Vec2,
    pub predators: Vec<PredatorView>,
    pub food: Vec<FoodView>,
    pub session: SessionView,
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Copy out everything the outer layers draw or play
    pub fn snapshot(&self) -> Snapshot {
        let invader = &self.invader;
        let ledger = &self.ledger;
        Snapshot {
            invader: InvaderView {
                pos: invader.pos,
                radius: invader.radius,
                rotation: invader.rotation,
                facing: invader.facing,
                state: invader.state,
                dashed: invader.dashed,
                hunger_fraction: self.hunger_fraction(),
            },
            camera_target: self.camera.target,
            predators: self
                .swarm
                .predators
                .iter()
                .map(|p| PredatorView {
                    pos: p.pos,
                    attached: p.attached,
                })
                .collect(),
            food: self
                .food
                .items
                .iter()
                .map(|f| FoodView {
                    pos: f.pos,
                    consumed: f.consumed,
                })
                .collect(),
            session: SessionView {
                phase: self.phase,
                menu_selection: self.menu_selection,
                round: ledger.round,
                difficulty: ledger.difficulty,
                target_radius: ledger.target_radius,
                food_eaten: ledger.food_eaten,
                attached: ledger.attached,
                hunger: ledger.hunger,
                round_time: ledger.round_time,
                win_countdown: ledger.win_countdown,
            },
            events: self.events.clone(),
        }
    }
}
