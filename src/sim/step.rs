//! Per-frame simulation step
//!
//! Advances paddles and ball by one display frame. Ball and keyboard motion
//! are per frame; the AI paddle and the speed ramp scale with the frame delta
//! (`dt_ms * 60`, so a 16.67 ms frame moves the AI 60 times its speed).

use super::collision::{
    PaddleContact, bounce_off_walls, paddle_contact, pin_outside, reflect_off_paddle,
};
use super::state::{Ball, GameEvent, MatchState, Paddle, Side};
use crate::consts::FRAME_MS;
use crate::sign_or_positive;
use crate::tuning::Tuning;

/// Player intent for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepInput {
    /// Keyboard direction: -1 up, 0 none, 1 down
    pub direction: i8,
    /// Desired paddle top edge from pointer/touch (court space). Wins over
    /// `direction` when both are present.
    pub target_y: Option<f32>,
}

impl StepInput {
    pub fn direction(direction: i8) -> Self {
        Self {
            direction,
            target_y: None,
        }
    }

    pub fn pointer(target_y: f32) -> Self {
        Self {
            direction: 0,
            target_y: Some(target_y),
        }
    }
}

/// Advance the match by one frame of `dt_ms` milliseconds.
///
/// A zero, negative or non-finite delta leaves the state untouched. While the
/// match is paused after a goal only the player paddle moves.
pub fn step(state: &mut MatchState, input: &StepInput, dt_ms: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let dt = sanitize_dt(dt_ms);
    if dt == 0.0 {
        return events;
    }

    move_player(&mut state.player, input, state.tuning.court_height);

    if !state.running {
        return events;
    }

    track_ball(&mut state.computer, state.ball.pos.y, dt, &state.tuning);

    state.ball.pos += state.ball.vel;

    if bounce_off_walls(&mut state.ball, state.tuning.court_height) {
        events.push(GameEvent::WallBounce);
    }

    for side in [Side::Player, Side::Computer] {
        let paddle = *state.paddle(side);
        match paddle_contact(&state.ball, &paddle, state.tuning.court_width) {
            PaddleContact::Hit => {
                pin_outside(&mut state.ball, &paddle);
                reflect_off_paddle(&mut state.ball, &paddle, &state.tuning);
                events.push(GameEvent::PaddleHit { side });
            }
            PaddleContact::Goal if state.running => {
                let scorer = side.opponent();
                state.award_point(scorer);
                events.push(GameEvent::Scored { scorer });
            }
            _ => {}
        }
    }

    ramp_speed(&mut state.ball, dt, &state.tuning);

    events
}

/// Clamp a frame delta to a usable value
#[inline]
fn sanitize_dt(dt_ms: f32) -> f32 {
    if dt_ms.is_finite() && dt_ms > 0.0 {
        dt_ms
    } else {
        0.0
    }
}

fn move_player(paddle: &mut Paddle, input: &StepInput, court_height: f32) {
    let direction = input.direction.signum();
    paddle.dir = direction;

    match input.target_y.filter(|y| y.is_finite()) {
        Some(target) => {
            paddle.y = target;
            paddle.pointer_y = Some(target);
        }
        None if direction != 0 => {
            paddle.y += f32::from(direction) * paddle.speed;
        }
        None => {}
    }

    paddle.clamp_to_court(court_height);
}

/// Reactive AI: chase the ball's height, ignoring it inside the dead zone
fn track_ball(paddle: &mut Paddle, ball_y: f32, dt_ms: f32, tuning: &Tuning) {
    let center = paddle.center_y();
    let track_speed = paddle.speed * dt_ms * 60.0 / FRAME_MS;

    if ball_y < center - tuning.ai_dead_zone {
        paddle.y -= track_speed;
        paddle.dir = -1;
    } else if ball_y > center + tuning.ai_dead_zone {
        paddle.y += track_speed;
        paddle.dir = 1;
    } else {
        paddle.dir = 0;
    }

    paddle.clamp_to_court(tuning.court_height);
}

/// Grow the speed a little, clamp it, and reapply it along the current heading
fn ramp_speed(ball: &mut Ball, dt_ms: f32, tuning: &Tuning) {
    // Not f32::clamp: an unvalidated Tuning may carry inverted or NaN bounds
    let speed = (ball.vel.length() + tuning.speed_ramp * dt_ms * 60.0)
        .max(tuning.min_speed)
        .min(tuning.max_speed);

    let sign_x = sign_or_positive(ball.vel.x);
    let angle = ball.vel.y.atan2(ball.vel.x.abs());

    ball.speed = speed;
    ball.vel.x = sign_x * angle.cos() * speed;
    ball.vel.y = angle.sin() * speed;
}
