//! Clumpnuggets headless runner
//!
//! Drives the simulation with the autopilot at a fixed frame rate and prints
//! the final session summary as JSON. A window/audio front end would replace
//! the autopilot with real input polling and draw from `GameState::snapshot`.
//!
//! Usage: `clumpnuggets [seed] [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clumpnuggets::sim::{GameEvent, tick};
    use clumpnuggets::{Autopilot, Tuning, sim::GameState};

    /// Simulated frame rate
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Two minutes of play
    const MAX_FRAMES: u32 = 60 * 120;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring non-numeric seed {:?}", arg);
            0xC1D3
        }),
        None => 0xC1D3,
    };
    let tuning = match args.next() {
        Some(path) => load_tuning(&path),
        None => Tuning::default(),
    };

    log::info!(
        "Seed {}: {} predators, {} pellets",
        seed,
        tuning.predator_count,
        tuning.food_count
    );

    let mut state = GameState::new(seed, tuning);
    let mut pilot = Autopilot::new();
    let mut pellets = 0u32;
    let mut rounds_won = 0u32;

    for _ in 0..MAX_FRAMES {
        let input = pilot.next_input(&state, FRAME_DT);
        tick(&mut state, &input, FRAME_DT);

        for event in &state.events {
            match event {
                GameEvent::FoodConsumed { .. } => pellets += 1,
                GameEvent::RoundWon { .. } => rounds_won += 1,
                other => log::debug!("{:?}", other),
            }
        }
        if state.is_finished() {
            break;
        }
    }

    log::info!(
        "Finished after {:.1}s: {} pellets, {} rounds won",
        state.time,
        pellets,
        rounds_won
    );

    let snapshot = state.snapshot();
    match serde_json::to_string_pretty(&snapshot.session) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize session: {}", e),
    }

    fn load_tuning(path: &str) -> Tuning {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                log::error!("Failed to read tuning {}: {}", path, e);
                return Tuning::default();
            }
        };
        match Tuning::from_json(&text) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::error!("Invalid tuning {}: {} (using defaults)", path, e);
                Tuning::default()
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds embed the library directly
}
