//! Coin Flap - A single-screen gap-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (mover physics, obstacles, game state)
//! - `session`: Frame loop glue between the simulation and its adapters
//! - `renderer`: Draw-call interface and HTML canvas backend
//! - `audio`: Sound cue playback (procedural Web Audio)
//! - `platform`: Browser/native platform abstraction (storage, device class)
//! - `tuning`: Difficulty profiles

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::BestScore;
pub use session::GameSession;
pub use settings::{DifficultyOverride, Settings};
pub use tuning::{DeviceClass, DifficultyProfile};

/// Game configuration constants
pub mod consts {
    /// Pipe body width (collision uses the body only)
    pub const PIPE_WIDTH: f32 = 60.0;
    /// Pipe head (lip) dimensions, purely visual
    pub const PIPE_HEAD_WIDTH: f32 = 80.0;
    pub const PIPE_HEAD_HEIGHT: f32 = 30.0;

    /// Height of the ground strip at the bottom of the field
    pub const GROUND_HEIGHT: f32 = 40.0;

    /// Mover defaults
    pub const MOVER_X: f32 = 50.0;
    pub const MOVER_START_Y: f32 = 150.0;
    pub const MOVER_RADIUS: f32 = 15.0;

    /// A new obstacle spawns every this many frames while playing
    pub const SPAWN_INTERVAL: u64 = 100;
    /// Minimum distance between a gap and the top/bottom of the field
    pub const GAP_MARGIN: f32 = 50.0;

    /// Storage key for the persisted best score
    pub const BEST_SCORE_KEY: &str = "bestScore";
}

/// Play field dimensions, read once at startup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Y coordinate of the ground line
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - consts::GROUND_HEIGHT
    }
}
