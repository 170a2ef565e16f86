//! Invader controller: thrust, friction, dash and growth

use glam::Vec2;

use super::collision::facing_rotation_degrees;
use super::ledger::Ledger;
use super::state::{Camera, Invader, MotionState};
use crate::Tuning;

impl Invader {
    /// Advance the invader by one frame
    ///
    /// `now` is the wall-clock time of this frame and only feeds the dash
    /// double-tap detector. The camera target integrates velocity and the
    /// invader's position mirrors it.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        now: f32,
        pointer: Vec2,
        thrust_held: bool,
        camera: &mut Camera,
        ledger: &Ledger,
        tuning: &Tuning,
    ) {
        let was_moving = self.state == MotionState::Moving;
        self.state = if thrust_held {
            MotionState::Moving
        } else {
            MotionState::Idle
        };
        self.dashed = false;
        self.dash_cooldown -= dt;

        let dash = !was_moving && thrust_held && self.register_thrust_start(now, tuning);

        // Pointer exactly on the center keeps the previous heading
        if let Some(dir) = (pointer - camera.offset).try_normalize() {
            self.facing = dir;
        }
        self.rotation = facing_rotation_degrees(self.facing);

        if self.state == MotionState::Moving {
            self.vel += self.facing * tuning.acceleration_for_round(ledger.round) * dt;
        }
        self.vel += self.vel * (-tuning.friction * dt);

        if dash {
            self.vel *= tuning.dash_boost;
            self.dash_cooldown = tuning.dash_cooldown_for(ledger.attached);
            self.dashed = true;
            log::debug!(
                "Dash at t={:.3}, cooldown {:.2}s ({} attached)",
                now,
                self.dash_cooldown,
                ledger.attached
            );
        }

        self.radius = ledger.invader_radius(tuning);

        camera.target += self.vel * dt;
        self.pos = camera.target;
    }

    /// Record an Idle -> Moving transition; returns true if it earns a dash
    fn register_thrust_start(&mut self, now: f32, tuning: &Tuning) -> bool {
        self.thrust_starts[self.thrust_slot] = Some(now);
        self.thrust_slot = (self.thrust_slot + 1) % self.thrust_starts.len();

        match self.thrust_starts {
            [Some(a), Some(b)] => (a - b).abs() < tuning.dash_window && self.dash_cooldown <= 0.0,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rig {
        invader: Invader,
        camera: Camera,
        ledger: Ledger,
        tuning: Tuning,
        pointer: Vec2,
    }

    impl Rig {
        fn new() -> Self {
            let tuning = Tuning::default();
            let mut ledger = Ledger::new(&tuning);
            ledger.start_round(&tuning);
            Self {
                invader: Invader::new(tuning.start_radius),
                camera: Camera {
                    target: Vec2::ZERO,
                    offset: tuning.screen_center(),
                },
                pointer: tuning.screen_center() + Vec2::new(100.0, 0.0),
                ledger,
                tuning,
            }
        }

        fn step(&mut self, dt: f32, now: f32, thrust: bool) {
            self.invader.update(
                dt,
                now,
                self.pointer,
                thrust,
                &mut self.camera,
                &self.ledger,
                &self.tuning,
            );
        }

        /// Velocity the next update would produce without any dash
        fn undashed_velocity(&self, dt: f32, thrust: bool) -> Vec2 {
            let mut vel = self.invader.vel;
            if thrust {
                vel += Vec2::X * self.tuning.acceleration_for_round(self.ledger.round) * dt;
            }
            vel + vel * (-self.tuning.friction * dt)
        }
    }

    #[test]
    fn test_motion_state_follows_thrust() {
        let mut rig = Rig::new();
        rig.step(0.016, 0.0, true);
        assert_eq!(rig.invader.state, MotionState::Moving);
        rig.step(0.016, 0.016, false);
        assert_eq!(rig.invader.state, MotionState::Idle);
    }

    #[test]
    fn test_thrust_accelerates_along_facing() {
        let mut rig = Rig::new();
        for i in 0..30 {
            rig.step(1.0 / 60.0, i as f32 / 60.0, true);
        }
        assert!(rig.invader.vel.x > 0.0);
        assert!(rig.invader.vel.y.abs() < 1e-4);
        assert!((rig.invader.facing - Vec2::X).length() < 1e-6);
        assert!((rig.invader.rotation - 90.0).abs() < 1e-3);
        // Position mirrors the camera target
        assert_eq!(rig.invader.pos, rig.camera.target);
        assert!(rig.invader.pos.x > 0.0);
    }

    #[test]
    fn test_friction_decays_velocity() {
        let mut rig = Rig::new();
        rig.invader.vel = Vec2::new(100.0, 0.0);
        rig.step(0.1, 0.0, false);
        assert!((rig.invader.vel.x - 88.0).abs() < 1e-3);
    }

    #[test]
    fn test_pointer_on_center_keeps_facing() {
        let mut rig = Rig::new();
        rig.step(0.016, 0.0, false);
        rig.pointer = rig.tuning.screen_center();
        rig.step(0.016, 0.016, false);
        assert!((rig.invader.facing - Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_radius_tracks_food_eaten() {
        let mut rig = Rig::new();
        rig.ledger.food_eaten = 7;
        rig.step(0.016, 0.0, false);
        assert_eq!(rig.invader.radius, 37.0);
    }

    #[test]
    fn test_double_tap_dashes_then_cooldown_blocks() {
        let mut rig = Rig::new();
        let dt = 0.05;

        rig.step(dt, 0.00, true);
        assert!(!rig.invader.dashed, "a single tap never dashes");
        rig.step(dt, 0.05, false);
        rig.step(dt, 0.10, false);

        // Second tap 0.15s after the first, cooldown expired
        let expected = rig.undashed_velocity(dt, true) * rig.tuning.dash_boost;
        rig.step(dt, 0.15, true);
        assert!(rig.invader.dashed);
        assert!((rig.invader.vel - expected).length() < 1e-3);
        assert!(rig.invader.dash_cooldown > 0.0);

        // Third tap 0.1s later is inside the window but on cooldown
        rig.step(dt, 0.20, false);
        let expected = rig.undashed_velocity(dt, true);
        rig.step(dt, 0.25, true);
        assert!(!rig.invader.dashed);
        assert!((rig.invader.vel - expected).length() < 1e-3);
    }

    #[test]
    fn test_slow_double_tap_does_not_dash() {
        let mut rig = Rig::new();
        rig.step(0.1, 0.0, true);
        rig.step(0.1, 0.1, false);
        rig.step(0.1, 0.2, false);
        rig.step(0.1, 0.3, true);
        assert!(!rig.invader.dashed);
    }

    #[test]
    fn test_held_thrust_is_not_a_new_tap() {
        let mut rig = Rig::new();
        rig.step(0.05, 0.0, true);
        rig.step(0.05, 0.05, true);
        rig.step(0.05, 0.10, true);
        assert!(!rig.invader.dashed);
        assert_eq!(rig.invader.thrust_starts, [Some(0.0), None]);
    }

    #[test]
    fn test_dash_cooldown_grows_with_attached_predators() {
        let mut rig = Rig::new();
        rig.ledger.attached = 5;
        rig.step(0.05, 0.0, true);
        rig.step(0.05, 0.05, false);
        rig.step(0.05, 0.1, true);
        assert!(rig.invader.dashed);
        assert!((rig.invader.dash_cooldown - 2.5).abs() < 1e-5);
    }
}
