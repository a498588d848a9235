//! Fixed timestep simulation tick
//!
//! One call advances the whole world by one logical frame, in a fixed order:
//! input, spawning, entity updates, collision, state transition, score.
//! While the run is over nothing moves and only the reset input is honored.

use super::collision::first_hit;
use super::rect::Rect;
use super::spawn::spawn_pass;
use super::state::{GameEvent, GameSession, Phase};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start a jump this tick (edge-triggered)
    pub jump: bool,
    /// Duck for as long as this stays set (level-triggered)
    pub duck_held: bool,
    /// Restart after game over (edge-triggered, ignored while running)
    pub reset: bool,
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Jump alias
    Space,
    /// Jump alias
    ArrowUp,
    /// Duck while held
    ArrowDown,
}

/// Raw events from the platform layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Close/interrupt; ends the loop after the current tick
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer click in playfield coordinates
    PointerDown { x: f32, y: f32 },
}

/// Accumulates raw events into the next tick's input. Edge-triggered fields
/// are cleared by `take`; the duck level persists until its key-up arrives.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pending: TickInput,
    pub quit: bool,
}

impl InputState {
    pub fn handle(&mut self, event: InputEvent, phase: Phase) {
        match event {
            InputEvent::Quit => self.quit = true,
            InputEvent::KeyDown(Key::Space) | InputEvent::KeyDown(Key::ArrowUp) => {
                self.pending.jump = true;
            }
            InputEvent::KeyDown(Key::ArrowDown) => self.pending.duck_held = true,
            InputEvent::KeyUp(Key::ArrowDown) => self.pending.duck_held = false,
            InputEvent::KeyUp(_) => {}
            InputEvent::PointerDown { x, y } => {
                let (bx, by, bw, bh) = REPLAY_BUTTON;
                let replay = Rect::new(bx, by, bw, bh);
                if phase == Phase::GameOver && replay.contains_point(x, y) {
                    self.pending.reset = true;
                }
            }
        }
    }

    /// Drain the input for one tick, clearing the one-shot edges
    pub fn take(&mut self) -> TickInput {
        let input = self.pending.clone();
        self.pending.jump = false;
        self.pending.reset = false;
        input
    }
}

/// Advance the session by one tick, returning events for the platform layer
pub fn tick(session: &mut GameSession, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if session.phase == Phase::GameOver {
        // World stays frozen; only a reset gets through
        if input.reset {
            session.reset();
        }
        return events;
    }

    session.time_ticks += 1;

    // Apply input. Duck level first so a simultaneous jump press while
    // ducking stays a no-op.
    if input.duck_held {
        session.player.duck();
    } else {
        session.player.stand();
    }
    if input.jump {
        session.player.jump();
    }

    // Spawning
    let spawned = spawn_pass(&mut session.rng, &session.hazards);
    if let Some(hazard) = spawned.hazard {
        log::debug!("spawned {:?} at tick {}", hazard.kind, session.time_ticks);
        session.hazards.push(hazard);
    }
    if let Some(cloud) = spawned.cloud {
        session.clouds.push(cloud);
    }

    // Entity updates
    session.player.apply_gravity();
    session.player.tick_animation();
    for hazard in &mut session.hazards {
        hazard.update();
    }
    session.hazards.retain(|h| !h.off_screen());
    for cloud in &mut session.clouds {
        cloud.update();
    }
    session.scroll_ground();

    // Collision ends the run on the spot; the final score is frozen as-is
    if let Some(idx) = first_hit(&session.player.hitbox, &session.hazards) {
        session.phase = Phase::GameOver;
        log::info!(
            "game over: hit {:?} at score {}",
            session.hazards[idx].kind,
            session.score
        );
        events.push(GameEvent::GameOver {
            score: session.score,
        });
        if session.overtaken {
            events.push(GameEvent::HighScore(session.high_score));
        }
        return events;
    }

    // Score accrual; the high score tracks a live overtake immediately
    session.score += 1;
    if session.score > session.high_score {
        session.high_score = session.score;
        if !session.overtaken {
            session.overtaken = true;
            events.push(GameEvent::HighScore(session.high_score));
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::hazard::{CactusSize, Hazard, HazardKind};
    use crate::sim::player::Pose;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn session() -> GameSession {
        GameSession::new(12345, 0)
    }

    /// Park a hazard directly on top of the player so the next tick collides
    fn plant_hazard_on_player(session: &mut GameSession) {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut h = Hazard::spawn_cactus(&mut rng);
        h.kind = HazardKind::Cactus(CactusSize::Large);
        // One tick of scroll still leaves it overlapping the player
        h.bounds = Rect::from_bottom_left(PLAYER_X + 10.0, GROUND_HEIGHT, 30.0, 60.0);
        h.hitbox = h.bounds;
        session.hazards.push(h);
    }

    #[test]
    fn test_score_increments_per_running_tick() {
        let mut s = session();
        let input = TickInput::default();
        for expected in 1..=100u64 {
            tick(&mut s, &input);
            assert_eq!(s.score, expected);
        }
    }

    #[test]
    fn test_score_frozen_while_game_over() {
        let mut s = session();
        s.phase = Phase::GameOver;
        s.score = 42;
        let input = TickInput::default();
        for _ in 0..50 {
            tick(&mut s, &input);
        }
        assert_eq!(s.score, 42);
    }

    #[test]
    fn test_world_frozen_while_game_over() {
        let mut s = session();
        plant_hazard_on_player(&mut s);
        // Move the hazard out of collision range but keep it on screen
        s.hazards[0].bounds.x = 600.0;
        s.hazards[0].hitbox.x = 600.0;
        s.phase = Phase::GameOver;
        let x = s.hazards[0].bounds.x;
        let offset = s.ground_offset;

        tick(&mut s, &TickInput::default());
        assert_eq!(s.hazards[0].bounds.x, x);
        assert_eq!(s.ground_offset, offset);
        assert_eq!(s.phase, Phase::GameOver);
    }

    #[test]
    fn test_collision_transitions_to_game_over() {
        let mut s = session();
        plant_hazard_on_player(&mut s);
        let events = tick(&mut s, &TickInput::default());
        assert_eq!(s.phase, Phase::GameOver);
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { score: 0 })));
        // Collision tick does not score
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_game_over_updates_and_reports_high_score() {
        let mut s = session();
        s.score = 137;
        s.high_score = 100;
        // Live overtake bookkeeping as if the run got there normally
        tick(&mut s, &TickInput::default());
        assert_eq!(s.high_score, 138);
        assert!(s.overtaken);

        plant_hazard_on_player(&mut s);
        let events = tick(&mut s, &TickInput::default());
        assert_eq!(s.phase, Phase::GameOver);
        assert_eq!(s.high_score, 138);
        assert!(events.contains(&GameEvent::HighScore(138)));
    }

    #[test]
    fn test_game_over_keeps_higher_stored_score() {
        let mut s = session();
        s.score = 50;
        s.high_score = 100;
        plant_hazard_on_player(&mut s);
        let events = tick(&mut s, &TickInput::default());
        assert_eq!(s.phase, Phase::GameOver);
        assert_eq!(s.high_score, 100);
        assert!(!events
            .iter()
            .any(|e| matches!(e, GameEvent::HighScore(_))));
    }

    #[test]
    fn test_live_overtake_emits_once() {
        let mut s = session();
        s.high_score = 3;
        let input = TickInput::default();
        let mut high_score_events = 0;
        for _ in 0..10 {
            for e in tick(&mut s, &input) {
                if matches!(e, GameEvent::HighScore(_)) {
                    high_score_events += 1;
                }
            }
        }
        assert_eq!(high_score_events, 1);
        assert_eq!(s.high_score, 10);
    }

    #[test]
    fn test_reset_only_from_game_over() {
        let mut s = session();
        for _ in 0..5 {
            tick(&mut s, &TickInput::default());
        }
        let reset = TickInput {
            reset: true,
            ..Default::default()
        };
        tick(&mut s, &reset);
        assert_eq!(s.score, 6); // reset ignored while running

        s.phase = Phase::GameOver;
        tick(&mut s, &reset);
        assert_eq!(s.phase, Phase::Running);
        assert_eq!(s.score, 0);
        assert!(s.hazards.is_empty());
    }

    #[test]
    fn test_off_screen_hazard_removed_next_tick() {
        let mut s = session();
        let mut rng = Pcg32::seed_from_u64(0);
        let mut h = Hazard::spawn_cactus(&mut rng);
        h.bounds.x = -h.bounds.w + 1.0; // one tick from vanishing
        s.hazards.push(h);
        tick(&mut s, &TickInput::default());
        assert!(s.hazards.is_empty());
    }

    #[test]
    fn test_duck_held_and_release() {
        let mut s = session();
        let duck = TickInput {
            duck_held: true,
            ..Default::default()
        };
        tick(&mut s, &duck);
        assert_eq!(s.player.pose, Pose::Ducking);
        tick(&mut s, &duck);
        assert_eq!(s.player.pose, Pose::Ducking);
        tick(&mut s, &TickInput::default());
        assert_eq!(s.player.pose, Pose::Standing);
    }

    #[test]
    fn test_jump_while_ducking_ignored() {
        let mut s = session();
        let both = TickInput {
            jump: true,
            duck_held: true,
            ..Default::default()
        };
        tick(&mut s, &both);
        assert_eq!(s.player.pose, Pose::Ducking);
        assert!(s.player.grounded());
    }

    #[test]
    fn test_input_state_jump_aliases() {
        let mut input = InputState::default();
        input.handle(InputEvent::KeyDown(Key::Space), Phase::Running);
        assert!(input.take().jump);
        assert!(!input.take().jump); // edge cleared

        input.handle(InputEvent::KeyDown(Key::ArrowUp), Phase::Running);
        assert!(input.take().jump);
    }

    #[test]
    fn test_input_state_duck_level() {
        let mut input = InputState::default();
        input.handle(InputEvent::KeyDown(Key::ArrowDown), Phase::Running);
        assert!(input.take().duck_held);
        // Level persists across ticks until key-up
        assert!(input.take().duck_held);
        input.handle(InputEvent::KeyUp(Key::ArrowDown), Phase::Running);
        assert!(!input.take().duck_held);
    }

    #[test]
    fn test_replay_click_gated_on_phase_and_bounds() {
        let (bx, by, bw, bh) = REPLAY_BUTTON;
        let (cx, cy) = (bx + bw / 2.0, by + bh / 2.0);

        let mut input = InputState::default();
        input.handle(InputEvent::PointerDown { x: cx, y: cy }, Phase::Running);
        assert!(!input.take().reset);

        input.handle(InputEvent::PointerDown { x: cx, y: cy }, Phase::GameOver);
        assert!(input.take().reset);

        input.handle(InputEvent::PointerDown { x: 1.0, y: 1.0 }, Phase::GameOver);
        assert!(!input.take().reset);
    }

    #[test]
    fn test_quit_event_sets_flag_only() {
        let mut input = InputState::default();
        input.handle(InputEvent::Quit, Phase::Running);
        assert!(input.quit);
        let pending = input.take();
        assert!(!pending.jump && !pending.duck_held && !pending.reset);
    }

    #[test]
    fn test_ground_clamp_over_long_run() {
        let mut s = session();
        for i in 0..2000u32 {
            let input = TickInput {
                jump: i % 37 == 0,
                duck_held: (i / 100) % 2 == 0,
                ..Default::default()
            };
            tick(&mut s, &input);
            assert!(s.player.bounds.bottom() <= GROUND_HEIGHT + 1e-3);
            if s.phase == Phase::GameOver {
                let reset = TickInput {
                    reset: true,
                    ..Default::default()
                };
                tick(&mut s, &reset);
            }
        }
    }
}
