//! Dino Dash - a side-scrolling desert runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (locomotion, spawning, collisions, game state)
//! - `scene`: Declarative frame description consumed by an external renderer
//! - `clock`: Fixed-rate frame scheduler
//! - `highscore`: Plain-text high-score persistence
//! - `settings`: Optional JSON configuration for the binary

pub mod clock;
pub mod highscore;
pub mod scene;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate (fixed, one input poll + one update per tick)
    pub const TICK_RATE: u32 = 60;

    /// Playfield dimensions (y grows downward, origin at top-left)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 300.0;
    /// Screen-space y of the ground line; entity bottoms never exceed it
    pub const GROUND_HEIGHT: f32 = 250.0;

    /// Player vertical physics (pixels per tick)
    pub const GRAVITY_ACCEL: f32 = 0.6;
    pub const JUMP_VELOCITY: f32 = -10.0;
    /// Fixed left edge of the player; the world scrolls, the player doesn't
    pub const PLAYER_X: f32 = 50.0;

    /// Player sprite dimensions per pose
    pub const PLAYER_STAND_SIZE: (f32, f32) = (50.0, 75.0);
    pub const PLAYER_DUCK_SIZE: (f32, f32) = (70.0, 40.0);

    /// Run cycle: 3 frames, advanced every 8 ticks while grounded and standing
    pub const RUN_FRAME_COUNT: u8 = 3;
    pub const RUN_FRAME_PERIOD: u32 = 8;

    /// Horizontal scroll speed shared by all hazards and the ground texture
    pub const OBSTACLE_SPEED: f32 = 5.0;
    /// Decorative clouds drift slower than the ground plane
    pub const CLOUD_SPEED: f32 = 2.0;
    /// Cloud bottom edge sits at this y
    pub const CLOUD_HEIGHT: f32 = 75.0;
    pub const CLOUD_SIZE: (f32, f32) = (50.0, 20.0);
    /// Clouds spawn at a random x in [width, width + this]
    pub const CLOUD_SPAWN_SPREAD: f32 = 200.0;

    /// Cactus size variants (width, height), picked uniformly at spawn
    pub const CACTUS_SMALL_SIZE: (f32, f32) = (20.0, 40.0);
    pub const CACTUS_LARGE_SIZE: (f32, f32) = (30.0, 60.0);

    pub const BIRD_SIZE: (f32, f32) = (40.0, 28.0);
    /// Bottom edge of a low-flying bird: hits a standing player, clears a duck
    pub const BIRD_LOW_BOTTOM: f32 = 200.0;
    /// Bottom edge of a high-flying bird: clears a standing player entirely
    pub const BIRD_HIGH_BOTTOM: f32 = 170.0;
    /// Wing flap: 2 frames, advanced every 10 ticks
    pub const BIRD_FRAME_COUNT: u8 = 2;
    pub const BIRD_FRAME_PERIOD: u32 = 10;

    /// No hazard spawns while the newest one is still this close to the right
    /// edge; at OBSTACLE_SPEED this guarantees a 50-tick reaction window.
    pub const MIN_OBSTACLE_DISTANCE: f32 = 250.0;

    /// Replay control bounds (x, y, w, h), centered over the playfield.
    /// Clicks inside count as a reset, but only while the run is over.
    pub const REPLAY_BUTTON: (f32, f32, f32, f32) = (360.0, 110.0, 80.0, 80.0);

    /// Per-tick spawn probabilities. The cactus and bird draws are sequential
    /// (bird is only rolled when the cactus roll fails), both gated on the
    /// same distance check; the cloud draw is independent of both.
    pub const P_CACTUS: f64 = 0.02;
    pub const P_BIRD: f64 = 0.01;
    pub const P_CLOUD: f64 = 0.01;
}
