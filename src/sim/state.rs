//! Match state and core simulation types
//!
//! Everything the step function reads or writes lives in [`MatchState`]; the
//! frame-loop driver owns it and hands it to the renderer read-only.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Which end of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Human paddle, left wall
    Player,
    /// AI paddle, right wall
    Computer,
}

impl Side {
    /// Horizontal direction of a ball leaving this side's paddle (+1 = right)
    #[inline]
    pub fn facing(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Computer => -1.0,
        }
    }

    /// Horizontal direction pointing at this side's wall
    #[inline]
    pub fn toward(self) -> f32 {
        -self.facing()
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Things that happened during a step, for scoreboards and effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball went past `scorer`'s opponent; the match is now paused
    Scored { scorer: Side },
    /// Ball was returned by a paddle
    PaddleHit { side: Side },
    /// Ball bounced off the top or bottom wall
    WallBounce,
}

/// A paddle (axis-aligned rectangle, fixed x)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Player: pixels per keyboard frame. Computer: pixels per reference frame.
    pub speed: f32,
    /// Movement intent applied on the last step (-1 up, 0 still, 1 down)
    pub dir: i8,
    /// Last pointer-derived top edge applied to this paddle
    pub pointer_y: Option<f32>,
}

impl Paddle {
    /// Create a vertically centred paddle for `side`
    pub fn new(side: Side, tuning: &Tuning) -> Self {
        let (x, speed) = match side {
            Side::Player => (tuning.paddle_offset, tuning.player_speed),
            Side::Computer => (
                tuning.court_width - tuning.paddle_offset - tuning.paddle_width,
                tuning.computer_speed,
            ),
        };
        Self {
            side,
            x,
            y: tuning.centered_paddle_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed,
            dir: 0,
            pointer_y: None,
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// X of the edge that faces the court centre
    #[inline]
    pub fn face_x(&self) -> f32 {
        match self.side {
            Side::Player => self.x + self.width,
            Side::Computer => self.x,
        }
    }

    /// Whether `y` lies strictly inside the paddle's vertical span
    #[inline]
    pub fn spans(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }

    /// Keep the paddle between the walls
    pub fn clamp_to_court(&mut self, court_height: f32) {
        let max_y = (court_height - self.height).max(0.0);
        self.y = self.y.clamp(0.0, max_y);
    }

    /// Back to the vertical centre with no pending intent
    pub fn recenter(&mut self, tuning: &Tuning) {
        self.y = tuning.centered_paddle_y();
        self.dir = 0;
        self.pointer_y = None;
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
    /// Cached `vel.length()`, refreshed at the end of every running step
    pub speed: f32,
}

impl Ball {
    /// Motionless ball at the court centre
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.court_width / 2.0, tuning.court_height / 2.0),
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
            speed: 0.0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub tuning: Tuning,
    pub player: Paddle,
    pub computer: Paddle,
    pub ball: Ball,
    pub player_score: u32,
    pub computer_score: u32,
    /// False during the pause that follows a goal
    pub running: bool,
    /// Restart generation; deferred serves from an older epoch are stale
    pub epoch: u64,
    /// Seed the serve RNG was created from
    pub seed: u64,
    rng: Pcg32,
}

impl MatchState {
    /// Fresh 0-0 match with the ball served in a random direction
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut state = Self {
            player: Paddle::new(Side::Player, &tuning),
            computer: Paddle::new(Side::Computer, &tuning),
            ball: Ball::new(&tuning),
            player_score: 0,
            computer_score: 0,
            running: true,
            epoch: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };
        state.serve(None);
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Computer => self.computer_score,
        }
    }

    /// Credit a goal to `scorer` and pause play
    pub fn award_point(&mut self, scorer: Side) {
        match scorer {
            Side::Player => self.player_score += 1,
            Side::Computer => self.computer_score += 1,
        }
        self.running = false;
    }

    /// Put the ball back at the centre at serve speed.
    ///
    /// `toward` picks the horizontal direction; `None` flips a coin. The
    /// vertical component is drawn uniformly from `[-spread, spread)`.
    pub fn serve(&mut self, toward: Option<Side>) {
        let dir = match toward {
            Some(side) => side.toward(),
            None => {
                if self.rng.random_bool(0.5) {
                    1.0
                } else {
                    -1.0
                }
            }
        };
        let spread = self.tuning.serve_spread;
        let vy = self.rng.random::<f32>() * 2.0 * spread - spread;
        let speed = self.tuning.serve_speed;

        self.ball = Ball::new(&self.tuning);
        self.ball.speed = speed;
        self.ball.vel = Vec2::new(speed * dir, vy);
    }

    /// Zero the scores, recentre both paddles, serve randomly and resume.
    ///
    /// Bumps the epoch so any serve deferred before the restart is discarded.
    pub fn restart(&mut self) {
        self.player_score = 0;
        self.computer_score = 0;
        self.player.recenter(&self.tuning);
        self.computer.recenter(&self.tuning);
        self.serve(None);
        self.running = true;
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_layout() {
        let state = MatchState::new(Tuning::default(), 7);
        assert_eq!(state.player.x, 22.0);
        assert_eq!(state.computer.x, 800.0 - 22.0 - 18.0);
        assert_eq!(state.player.y, 195.0);
        assert_eq!(state.computer.y, 195.0);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 250.0));
        assert!(state.running);
        assert_eq!((state.player_score, state.computer_score), (0, 0));
    }

    #[test]
    fn test_serve_toward_side() {
        let mut state = MatchState::new(Tuning::default(), 1);
        state.serve(Some(Side::Computer));
        assert_eq!(state.ball.vel.x, 6.5);
        state.serve(Some(Side::Player));
        assert_eq!(state.ball.vel.x, -6.5);
        assert!(state.ball.vel.y >= -2.0 && state.ball.vel.y < 2.0);
        assert_eq!(state.ball.speed, 6.5);
    }

    #[test]
    fn test_random_serves_are_reproducible() {
        let a = MatchState::new(Tuning::default(), 4242);
        let b = MatchState::new(Tuning::default(), 4242);
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_award_point_pauses() {
        let mut state = MatchState::new(Tuning::default(), 3);
        state.award_point(Side::Computer);
        assert_eq!(state.computer_score, 1);
        assert_eq!(state.player_score, 0);
        assert!(!state.running);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = MatchState::new(Tuning::default(), 3);
        state.award_point(Side::Player);
        state.player.y = 0.0;
        state.computer.y = 390.0;
        state.player.pointer_y = Some(0.0);

        state.restart();

        assert_eq!((state.player_score, state.computer_score), (0, 0));
        assert_eq!(state.player.y, 195.0);
        assert_eq!(state.computer.y, 195.0);
        assert_eq!(state.player.pointer_y, None);
        assert!(state.running);
        assert_eq!(state.epoch, 1);
        assert_eq!(state.ball.vel.x.abs(), 6.5);
    }

    #[test]
    fn test_paddle_span_is_strict() {
        let paddle = Paddle::new(Side::Player, &Tuning::default());
        assert!(!paddle.spans(195.0));
        assert!(paddle.spans(196.0));
        assert!(!paddle.spans(305.0));
    }

    #[test]
    fn test_side_directions() {
        assert_eq!(Side::Player.facing(), 1.0);
        assert_eq!(Side::Computer.facing(), -1.0);
        assert_eq!(Side::Player.toward(), -1.0);
        assert_eq!(Side::Player.opponent(), Side::Computer);
    }
}
