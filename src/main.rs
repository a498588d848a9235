//! Dino Dash entry point
//!
//! Headless demo loop: a fixed-rate clock drives the simulation while an
//! autopilot plays, standing in for a windowing layer's input events. The
//! frame description built each tick is handed to a stub presenter; a real
//! renderer would consume the same ops.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use dino_dash::clock::FrameClock;
use dino_dash::scene::{self, Scene};
use dino_dash::sim::{
    tick, FlightLevel, GameEvent, GameSession, HazardKind, InputEvent, InputState, Key, Phase,
};
use dino_dash::{highscore, Settings};

/// How far ahead of the player the autopilot reacts, in pixels. Tuned so a
/// jump started at this gap is near its apex while the obstacle passes.
const REACT_DISTANCE: f32 = 40.0;
/// Ticks to sit on the game-over screen before clicking replay
const REPLAY_DELAY_TICKS: u64 = 60;

fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dino-dash")
        .join("settings.json")
}

/// Synthesize the input events a player would produce: jump over ground
/// hazards, duck under low birds, ignore high ones.
fn autopilot(session: &GameSession, ducking: &mut bool) -> Vec<InputEvent> {
    let mut events = Vec::new();

    let player_front = session.player.bounds.right();
    let threat = session
        .hazards
        .iter()
        .find(|h| h.bounds.right() > session.player.bounds.left())
        .filter(|h| h.bounds.left() < player_front + REACT_DISTANCE);

    let wants_duck = matches!(
        threat.map(|h| h.kind),
        Some(HazardKind::Bird {
            flight: FlightLevel::Low
        })
    );
    let wants_jump = matches!(threat.map(|h| h.kind), Some(HazardKind::Cactus(_)));

    if wants_duck && !*ducking {
        events.push(InputEvent::KeyDown(Key::ArrowDown));
        *ducking = true;
    } else if !wants_duck && *ducking {
        events.push(InputEvent::KeyUp(Key::ArrowDown));
        *ducking = false;
    }
    if wants_jump && !*ducking {
        events.push(InputEvent::KeyDown(Key::Space));
    }

    events
}

/// Stand-in for the external renderer
fn present(scene: &Scene) {
    log::trace!("frame: {} draw ops", scene.ops.len());
}

fn main() {
    env_logger::init();

    let settings = Settings::load(&settings_path());
    let score_path = settings
        .highscore_path
        .clone()
        .unwrap_or_else(highscore::default_path);

    let high_score = highscore::load(&score_path);
    let seed = settings.seed.unwrap_or_else(|| {
        // Seed from the wall clock when none is configured
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
            ^ u64::from(std::process::id())
    });
    log::info!("starting run, seed {}, high score {}", seed, high_score);

    let mut session = GameSession::new(seed, high_score);
    let mut input = InputState::default();
    let mut clock = FrameClock::new();
    let mut ducking = false;
    let mut game_over_since: Option<u64> = None;
    let mut ticks_run: u64 = 0;

    loop {
        // Poll input (autopilot in place of a real event queue)
        if session.phase == Phase::Running {
            for event in autopilot(&session, &mut ducking) {
                input.handle(event, session.phase);
            }
        } else if let Some(since) = game_over_since {
            if ticks_run.saturating_sub(since) >= REPLAY_DELAY_TICKS {
                // Release a held duck so it doesn't latch across the reset
                if ducking {
                    input.handle(InputEvent::KeyUp(Key::ArrowDown), session.phase);
                    ducking = false;
                }
                let center = scene::replay_bounds().center();
                input.handle(
                    InputEvent::PointerDown {
                        x: center.x,
                        y: center.y,
                    },
                    session.phase,
                );
                game_over_since = None;
            }
        }
        if input.quit {
            break;
        }

        // Advance the simulation one tick
        for event in tick(&mut session, &input.take()) {
            match event {
                GameEvent::GameOver { score } => {
                    log::info!("run ended at score {}", score);
                    game_over_since = Some(ticks_run);
                }
                GameEvent::HighScore(score) => {
                    if let Err(e) = highscore::save(&score_path, score) {
                        log::warn!("could not persist high score: {}", e);
                    }
                }
            }
        }

        present(&scene::build_scene(&session));

        ticks_run += 1;
        if settings.max_ticks > 0 && ticks_run >= settings.max_ticks {
            break;
        }

        clock.wait_for_next_frame();
    }

    log::info!(
        "exiting after {} ticks, score {}, high score {}",
        ticks_run,
        session.score,
        session.high_score
    );
}
