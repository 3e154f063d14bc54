//! Astroids entry point
//!
//! Headless frame driver: runs the simulation at a fixed frame step with a
//! scripted pilot and prints a JSON summary. Windowing lives elsewhere.
//!
//! Usage: `astroids [config.json] [seed] [frames]`

use serde::Serialize;

use astroids::consts::FRAME_DT;
use astroids::renderer::frame_outlines;
use astroids::sim::{GameEvent, GameState, TickInput, tick};
use astroids::SimConfig;

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    frames: u64,
    round: u32,
    best_round: u32,
    shots_fired: u64,
    asteroids_destroyed: u64,
    restarts: u32,
    live_asteroids: usize,
    last_frame_vertices: usize,
}

/// Spin slowly, shoot constantly, and burst the engine every few seconds
fn scripted_input(frame: u64) -> TickInput {
    TickInput {
        thrust: frame % 240 < 30,
        turn_left: false,
        turn_right: frame % 3 == 0,
        fire: true,
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) if path != "-" => SimConfig::load(&path)?,
        _ => SimConfig::default(),
    };
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_millis() as u64,
    };
    let frames: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 60 * 60,
    };

    log::info!("Astroids (headless) starting: seed={seed}, frames={frames}");

    let mut state = GameState::new(config, seed);
    for frame in 0..frames {
        tick(&mut state, &scripted_input(frame), FRAME_DT);
        for event in state.drain_events() {
            match event {
                GameEvent::RoundCleared { round } => log::info!("Frame {frame}: round {round} cleared"),
                GameEvent::PlayerHit => log::info!("Frame {frame}: ship destroyed"),
                other => log::debug!("Frame {frame}: {other:?}"),
            }
        }
    }

    let summary = RunSummary {
        seed: state.seed,
        frames,
        round: state.round,
        best_round: state.stats.best_round,
        shots_fired: state.stats.shots_fired,
        asteroids_destroyed: state.stats.asteroids_destroyed,
        restarts: state.stats.restarts,
        live_asteroids: state.asteroids.len(),
        last_frame_vertices: frame_outlines(&state).len(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
