//! Predator swarm: pursuit, spiral wobble, attachment and crowd avoidance

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{circles_overlap, clamp_components, rotate_quarter};
use super::ledger::Ledger;
use super::state::{GameEvent, MovementStyle, Predator, SpeedTier, spawn_point};
use crate::Tuning;

/// Fixed-size set of clumpnuggets
#[derive(Debug, Clone, Default)]
pub struct Swarm {
    pub predators: Vec<Predator>,
}

impl Swarm {
    pub fn with_capacity(count: usize) -> Self {
        Self {
            predators: Vec::with_capacity(count),
        }
    }

    /// Refill the swarm for a new round (reuses the existing allocation)
    pub fn respawn(&mut self, rng: &mut Pcg32, tuning: &Tuning) {
        self.predators.clear();
        for _ in 0..tuning.predator_count {
            let tier = if rng.random_bool(tuning.predator_fast_chance.clamp(0.0, 1.0)) {
                SpeedTier::Fast
            } else {
                SpeedTier::Normal
            };
            let style = if rng.random_bool(tuning.predator_spiral_chance.clamp(0.0, 1.0)) {
                MovementStyle::Spiral
            } else {
                MovementStyle::Chase
            };
            self.predators.push(Predator {
                pos: spawn_point(rng, tuning),
                vel: Vec2::ZERO,
                offset: Vec2::ZERO,
                attached: false,
                tier,
                style,
            });
        }
    }

    pub fn attached_count(&self) -> u32 {
        self.predators.iter().filter(|p| p.attached).count() as u32
    }

    /// Advance every predator by one frame
    ///
    /// Free predators within sight chase the invader and may attach to it.
    /// Attached ones ride the invader's surface at its current radius.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        now: f32,
        invader_pos: Vec2,
        invader_radius: f32,
        ledger: &mut Ledger,
        events: &mut Vec<GameEvent>,
        tuning: &Tuning,
    ) {
        let radius = tuning.predator_radius;
        let surface = invader_radius - tuning.embed_distance;

        for i in 0..self.predators.len() {
            let predator = &mut self.predators[i];

            if !predator.attached {
                let to_invader = invader_pos - predator.pos;
                if to_invader.length() > tuning.predator_sight_radius {
                    continue;
                }

                let speed = predator.tier.speed(tuning);
                let dir = to_invader.normalize_or_zero();
                predator.vel = clamp_components(predator.vel + dir * speed * dt, speed);
                predator.pos += predator.vel * dt;

                if predator.style == MovementStyle::Spiral {
                    let wobble = (now * tuning.spiral_frequency).sin() * tuning.spiral_amplitude;
                    predator.pos += rotate_quarter(dir) * wobble;
                }

                if circles_overlap(invader_pos, surface, predator.pos, radius) {
                    predator.attached = true;
                    predator.offset = predator.pos - invader_pos;
                    ledger.record_attachment();
                    events.push(GameEvent::PredatorAttached { index: i });
                    log::debug!("Predator {} attached ({} total)", i, ledger.attached);
                } else {
                    let pos = predator.pos;
                    let crowded = self.predators.iter().enumerate().any(|(j, other)| {
                        j != i && other.attached && circles_overlap(pos, radius, other.pos, radius)
                    });
                    if crowded {
                        let predator = &mut self.predators[i];
                        predator.vel = rotate_quarter(predator.vel);
                    }
                    continue;
                }
            }

            self.predators[i].seat(invader_pos, surface);
        }
    }

    /// Re-seat attached predators after the invader's radius changed
    pub fn seat_attached(&mut self, invader_pos: Vec2, invader_radius: f32, tuning: &Tuning) {
        let surface = invader_radius - tuning.embed_distance;
        for predator in self.predators.iter_mut().filter(|p| p.attached) {
            predator.seat(invader_pos, surface);
        }
    }
}
