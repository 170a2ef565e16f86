//! Food field: pellets get eaten by the invader and jostled by its riders

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::circles_overlap;
use super::ledger::Ledger;
use super::state::{Food, GameEvent, Invader, Predator, spawn_point};
use crate::Tuning;

/// Fixed-size set of food pellets
#[derive(Debug, Clone, Default)]
pub struct FoodField {
    pub items: Vec<Food>,
}

impl FoodField {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            items: Vec::with_capacity(count),
        }
    }

    /// Scatter a fresh set of pellets (reuses the existing allocation)
    pub fn respawn(&mut self, rng: &mut Pcg32, tuning: &Tuning) {
        self.items.clear();
        for _ in 0..tuning.food_count {
            self.items.push(Food {
                pos: spawn_point(rng, tuning),
                vel: Vec2::ZERO,
                consumed: false,
            });
        }
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|f| !f.consumed).count()
    }

    /// Shove pellets touched by attached predators, then let the invader eat
    ///
    /// Returns the number of pellets eaten this frame.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        invader: &Invader,
        predators: &[Predator],
        ledger: &mut Ledger,
        rng: &mut Pcg32,
        events: &mut Vec<GameEvent>,
        tuning: &Tuning,
    ) -> u32 {
        let heading = invader.vel.normalize_or_zero();
        let mouth = invader.radius - tuning.embed_distance;
        let mut eaten = 0;

        for food in self.items.iter_mut().filter(|f| !f.consumed) {
            food.vel = Vec2::ZERO;

            for rider in predators.iter().filter(|p| p.attached) {
                if !circles_overlap(rider.pos, tuning.predator_radius, food.pos, tuning.food_radius) {
                    continue;
                }
                let normal = (food.pos - rider.pos).normalize_or_zero();
                let shove = normal * normal.dot(heading);
                food.pos += shove;
                if dt > 0.0 {
                    food.vel += shove / dt;
                }
            }

            if circles_overlap(invader.pos, mouth, food.pos, tuning.food_radius) {
                food.consumed = true;
                food.vel = Vec2::ZERO;
                ledger.record_consumption(tuning);
                eaten += 1;

                events.push(GameEvent::FoodConsumed {
                    pitch: sample_hint(rng, tuning.pickup_pitch),
                    volume: sample_hint(rng, tuning.pickup_volume),
                });
            }
        }

        eaten
    }
}

/// Uniform value between the two bounds, in either order
fn sample_hint(rng: &mut Pcg32, (a, b): (f32, f32)) -> f32 {
    rng.random_range(a.min(b)..=a.max(b))
}
