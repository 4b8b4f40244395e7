//! Collision detection and response
//!
//! Walls are horizontal lines at y = 0 and y = court height. Paddles are
//! treated as a facing edge plus a vertical span: the ball hits when its
//! leading edge crosses the facing edge while its centre is inside the span.
//! There is no corner test.

use super::state::{Ball, Paddle, Side};
use crate::tuning::Tuning;

/// Outcome of checking the ball against one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleContact {
    /// Ball has not reached the paddle's facing edge
    Clear,
    /// Ball crossed the facing edge inside the paddle's span
    Hit,
    /// Ball missed the paddle and crossed the back wall
    Goal,
}

/// Reflect the ball off the top/bottom walls.
///
/// Returns true if it bounced.
pub fn bounce_off_walls(ball: &mut Ball, court_height: f32) -> bool {
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + ball.radius > court_height {
        ball.pos.y = court_height - ball.radius;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Check the ball against `paddle`
pub fn paddle_contact(ball: &Ball, paddle: &Paddle, court_width: f32) -> PaddleContact {
    let (crossed_face, crossed_wall) = match paddle.side {
        Side::Player => (ball.left() < paddle.face_x(), ball.left() < 0.0),
        Side::Computer => (ball.right() > paddle.face_x(), ball.right() > court_width),
    };

    if !crossed_face {
        PaddleContact::Clear
    } else if paddle.spans(ball.pos.y) {
        PaddleContact::Hit
    } else if crossed_wall {
        PaddleContact::Goal
    } else {
        PaddleContact::Clear
    }
}

/// Move the ball so it just touches the paddle's facing edge
pub fn pin_outside(ball: &mut Ball, paddle: &Paddle) {
    ball.pos.x = paddle.face_x() + paddle.side.facing() * ball.radius;
}

/// Bounce angle (radians) for a ball centred at `ball_y`.
///
/// Linear in the offset from the paddle centre: 0 at the centre, `-max_angle`
/// at the top edge, `+max_angle` at the bottom edge.
pub fn bounce_angle(ball_y: f32, paddle: &Paddle, max_angle: f32) -> f32 {
    let half = paddle.height / 2.0;
    if half.is_nan() || half <= 0.0 {
        return 0.0;
    }
    let relative_y = ((ball_y - paddle.center_y()) / half).clamp(-1.0, 1.0);
    relative_y * max_angle
}

/// Send the ball back off `paddle`.
///
/// The outgoing direction depends only on where the ball met the paddle, never
/// on the incoming velocity. Speed grows by the reflect gain up to the bounce
/// cap.
pub fn reflect_off_paddle(ball: &mut Ball, paddle: &Paddle, tuning: &Tuning) {
    let angle = bounce_angle(ball.pos.y, paddle, tuning.max_bounce_angle);
    let speed = (ball.speed * tuning.reflect_gain).min(tuning.bounce_speed_cap);
    ball.vel.x = angle.cos() * speed * paddle.side.facing();
    ball.vel.y = angle.sin() * speed;
    ball.speed = speed;
}
