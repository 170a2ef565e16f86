//! Round invariants under arbitrary play
//!
//! Random input sequences in a small, crowded world so pursuit, attachment,
//! shoving and eating all happen within a few hundred frames.

use clumpnuggets::Tuning;
use clumpnuggets::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use glam::Vec2;
use proptest::prelude::*;

fn crowded() -> Tuning {
    Tuning {
        predator_count: 40,
        food_count: 300,
        world_half_extent: 500.0,
        spawn_clear_radius: 60.0,
        ..Default::default()
    }
}

/// One frame of player intent: (dt, thrust, pointer angle)
fn frame() -> impl Strategy<Value = (f32, bool, f32)> {
    (0.005f32..0.05, any::<bool>(), 0.0f32..std::f32::consts::TAU)
}

fn start(state: &mut GameState) {
    let confirm = TickInput {
        confirm: true,
        ..Default::default()
    };
    tick(state, &confirm, 0.016);
    tick(state, &TickInput::default(), 0.016);
    assert_eq!(state.phase, GamePhase::InGame);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn round_invariants_hold(seed in any::<u64>(), frames in prop::collection::vec(frame(), 50..300)) {
        let mut state = GameState::new(seed, crowded());
        start(&mut state);

        let tuning = state.tuning.clone();
        let center = tuning.screen_center();
        let mut now = 0.0f32;

        let mut eaten = state.ledger.food_eaten;
        let mut consumed: Vec<bool> = state.food.items.iter().map(|f| f.consumed).collect();
        let mut attached: Vec<bool> = state.swarm.predators.iter().map(|p| p.attached).collect();

        for (dt, thrust, angle) in frames {
            now += dt;
            let input = TickInput {
                now,
                pointer: center + Vec2::from_angle(angle) * 150.0,
                thrust,
                ..Default::default()
            };
            tick(&mut state, &input, dt);

            if state.phase != GamePhase::InGame {
                // Only win or lose can end a round without escape
                prop_assert!(matches!(state.phase, GamePhase::GameWin | GamePhase::GameLose));
                break;
            }

            // Monotonic counters and flags
            prop_assert!(state.ledger.food_eaten >= eaten);
            eaten = state.ledger.food_eaten;
            for (seen, food) in consumed.iter_mut().zip(&state.food.items) {
                prop_assert!(!*seen || food.consumed);
                *seen = food.consumed;
            }
            for (seen, predator) in attached.iter_mut().zip(&state.swarm.predators) {
                prop_assert!(!*seen || predator.attached);
                *seen = predator.attached;
            }

            // Growth identity
            prop_assert_eq!(state.invader.radius, tuning.start_radius + state.ledger.food_eaten as f32);

            // Riders sit on the embedded surface
            let surface = state.invader.radius - tuning.embed_distance;
            for predator in state.swarm.predators.iter().filter(|p| p.attached) {
                let dist = predator.pos.distance(state.invader.pos);
                prop_assert!((dist - surface).abs() < 1e-2 * surface.max(1.0), "rider at {} vs {}", dist, surface);
            }

            // Ledger agrees with the swarm
            prop_assert_eq!(state.ledger.attached, state.swarm.attached_count());

            // One pickup event per pellet
            let pickups = state.events.iter().filter(|e| matches!(e, GameEvent::FoodConsumed { .. })).count();
            let newly = consumed.iter().filter(|c| **c).count() as u32;
            prop_assert_eq!(newly, state.ledger.food_eaten);
            prop_assert!(pickups as u32 <= state.ledger.food_eaten);

            // Hunger never exceeds a full stomach
            prop_assert!(state.ledger.hunger <= tuning.hunger_reset);
        }
    }

    #[test]
    fn win_and_lose_follow_previous_frame(seed in any::<u64>(), frames in prop::collection::vec(frame(), 50..300)) {
        let mut state = GameState::new(seed, crowded());
        start(&mut state);
        let center = state.tuning.screen_center();
        let mut now = 0.0f32;

        for (dt, thrust, angle) in frames {
            let grown = state.invader.radius >= state.ledger.target_radius;
            let starved = state.ledger.hunger <= 0.0;

            now += dt;
            let input = TickInput {
                now,
                pointer: center + Vec2::from_angle(angle) * 150.0,
                thrust,
                ..Default::default()
            };
            tick(&mut state, &input, dt);

            if grown {
                prop_assert_eq!(state.phase, GamePhase::GameWin);
                break;
            } else if starved {
                prop_assert_eq!(state.phase, GamePhase::GameLose);
                break;
            }
            prop_assert_eq!(state.phase, GamePhase::InGame);
        }
    }
}
