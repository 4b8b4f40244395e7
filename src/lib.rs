//! Football Pong - a two-paddle court game
//!
//! Core modules:
//! - `sim`: Simulation (paddles, ball, collisions, scoring)
//! - `session`: Frame-loop driver (input staging, serve timer, restart)
//! - `renderer`: Read-only frame view and vertex geometry
//! - `tuning`: Court geometry and physics constants

pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::{Key, LogScoreboard, Scoreboard, Session};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Reference frame length (ms) that per-frame speeds are tuned against
    pub const FRAME_MS: f32 = 16.67;
    /// Longest frame delta fed to the simulation (tab switches, debugger stops)
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Court dimensions
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 18.0;
    pub const PADDLE_HEIGHT: f32 = 110.0;
    /// Gap between a paddle and its back wall
    pub const PADDLE_OFFSET: f32 = 22.0;
    /// Player paddle speed (pixels per keyboard frame)
    pub const PLAYER_SPEED: f32 = 8.0;
    /// Computer paddle speed (pixels per reference frame)
    pub const COMPUTER_SPEED: f32 = 5.2;
    /// Computer ignores the ball while it is this close to the paddle centre
    pub const AI_DEAD_ZONE: f32 = 12.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    pub const SERVE_SPEED: f32 = 6.5;
    /// Serve vy is drawn uniformly from [-SERVE_SPREAD, SERVE_SPREAD)
    pub const SERVE_SPREAD: f32 = 2.0;
    /// Speed added per reference frame
    pub const SPEED_RAMP: f32 = 0.0009;
    pub const BALL_MIN_SPEED: f32 = 4.2;
    pub const BALL_MAX_SPEED: f32 = 16.0;
    /// Speed gain on a paddle hit (multiplicative)
    pub const REFLECT_GAIN: f32 = 1.06;
    /// Cap applied to the boosted speed of a paddle hit
    pub const BOUNCE_SPEED_CAP: f32 = 20.0;
    /// Steepest paddle bounce (60 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Real-time pause after a goal before the next serve
    pub const SCORE_PAUSE_MS: f64 = 650.0;
}

/// Sign of `v` as +1/-1, treating zero (and NaN) as +1
#[inline]
pub fn sign_or_positive(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}
