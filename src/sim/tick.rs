//! Per-frame simulation tick
//!
//! Dispatches on the current phase. In a round the order is fixed:
//! exit checks on last frame's settled state, ledger timers, invader,
//! swarm, food, then the settle step that re-derives radius and re-seats
//! riders so the published snapshot is self-consistent.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState, MenuItem};

/// Input for a single tick, already polled and edge-detected by the platform
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Wall-clock seconds (drives dash timing and spiral wobble)
    pub now: f32,
    /// Pointer in screen coordinates
    pub pointer: Vec2,
    /// Thrust button held (level)
    pub thrust: bool,
    /// Menu navigation (edges)
    pub menu_up: bool,
    pub menu_down: bool,
    /// Enter (edge)
    pub confirm: bool,
    /// Escape (edge)
    pub back: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time = input.now;

    match state.phase {
        GamePhase::Menu => update_menu(state, input),
        GamePhase::HowToPlay => {
            if input.back {
                state.set_phase(GamePhase::Menu);
            }
        }
        GamePhase::GameInit => {
            state.begin_round();
            state.set_phase(GamePhase::InGame);
        }
        GamePhase::InGame => update_round(state, input, dt),
        GamePhase::GameWin => {
            if state.ledger.tick_win_display(dt) {
                state.set_phase(GamePhase::GameInit);
            }
        }
        GamePhase::GameLose => {
            if input.back {
                state.set_phase(GamePhase::Menu);
            }
        }
        GamePhase::Quit => {}
    }
}

fn update_menu(state: &mut GameState, input: &TickInput) {
    if input.menu_up {
        state.menu_selection = state.menu_selection.prev();
    }
    if input.menu_down {
        state.menu_selection = state.menu_selection.next();
    }
    if input.confirm {
        let next = match state.menu_selection {
            MenuItem::Start => GamePhase::GameInit,
            MenuItem::HowToPlay => GamePhase::HowToPlay,
            MenuItem::Quit => GamePhase::Quit,
        };
        state.set_phase(next);
    }
}

fn update_round(state: &mut GameState, input: &TickInput, dt: f32) {
    // Escape beats everything, then win beats lose
    if input.back {
        state.set_phase(GamePhase::Menu);
        return;
    }
    if state.invader.radius >= state.ledger.target_radius {
        log::info!(
            "Round {} won at radius {} after {:.1}s",
            state.ledger.round,
            state.invader.radius,
            state.ledger.round_time
        );
        state.ledger.begin_win_display(&state.tuning);
        state.events.push(GameEvent::RoundWon {
            round: state.ledger.round,
        });
        state.set_phase(GamePhase::GameWin);
        return;
    }
    if state.ledger.hunger <= 0.0 {
        log::info!(
            "Round {} lost: starved at radius {}",
            state.ledger.round,
            state.invader.radius
        );
        state.events.push(GameEvent::RoundLost {
            round: state.ledger.round,
        });
        state.ledger.reset_progress();
        state.set_phase(GamePhase::GameLose);
        return;
    }

    if state.ledger.tick_timers(dt, &state.tuning) {
        state.events.push(GameEvent::LowHungerBeat);
    }

    state.invader.update(
        dt,
        input.now,
        input.pointer,
        input.thrust,
        &mut state.camera,
        &state.ledger,
        &state.tuning,
    );
    if state.invader.dashed {
        state.events.push(GameEvent::Dashed);
    }

    state.swarm.update(
        dt,
        input.now,
        state.invader.pos,
        state.invader.radius,
        &mut state.ledger,
        &mut state.events,
        &state.tuning,
    );

    let eaten = state.food.update(
        dt,
        &state.invader,
        &state.swarm.predators,
        &mut state.ledger,
        &mut state.rng,
        &mut state.events,
        &state.tuning,
    );

    if eaten > 0 {
        state.invader.radius = state.ledger.invader_radius(&state.tuning);
        state
            .swarm
            .seat_attached(state.invader.pos, state.invader.radius, &state.tuning);
    }

    debug_assert_eq!(state.ledger.attached, state.swarm.attached_count());
}
