//! Read-only snapshot of a match for drawing

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{MatchState, Paddle, Side};

/// Text shown over the court while a goal pause runs
pub const GOAL_BANNER: &str = "Goal! Resetting...";

const NET_STEP: f32 = 16.0;
const NET_WIDTH: f32 = 4.0;
const BALL_SEGMENTS: u32 = 24;
const GLOW_MARGIN: f32 = 12.0;
const BANNER_SIZE: Vec2 = Vec2::new(320.0, 76.0);

/// Axis-aligned rectangle in court space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    fn of_paddle(paddle: &Paddle) -> Self {
        Self {
            origin: Vec2::new(paddle.x, paddle.y),
            size: Vec2::new(paddle.width, paddle.height),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub court: Vec2,
    pub player: Rect,
    pub computer: Rect,
    pub ball_center: Vec2,
    pub ball_radius: f32,
    pub running: bool,
    pub player_score: u32,
    pub computer_score: u32,
    /// Overlay text, present only while play is paused
    pub banner: Option<&'static str>,
}

impl FrameView {
    pub fn from_state(state: &MatchState) -> Self {
        Self {
            court: Vec2::new(state.tuning.court_width, state.tuning.court_height),
            player: Rect::of_paddle(state.paddle(Side::Player)),
            computer: Rect::of_paddle(state.paddle(Side::Computer)),
            ball_center: state.ball.pos,
            ball_radius: state.ball.radius,
            running: state.running,
            player_score: state.player_score,
            computer_score: state.computer_score,
            banner: (!state.running).then_some(GOAL_BANNER),
        }
    }

    /// Dashed centre line segments
    pub fn net(&self) -> Vec<Rect> {
        let mut dashes = Vec::new();
        let mut y = 0.0;
        while y < self.court.y {
            dashes.push(Rect {
                origin: Vec2::new(self.court.x / 2.0 - NET_WIDTH / 2.0, y + 4.0),
                size: Vec2::new(NET_WIDTH, NET_STEP / 2.0),
            });
            y += NET_STEP;
        }
        dashes
    }

    /// Panel behind the banner text, if one is showing
    pub fn banner_rect(&self) -> Option<Rect> {
        self.banner.map(|_| Rect {
            origin: self.court / 2.0 - BANNER_SIZE / 2.0,
            size: BANNER_SIZE,
        })
    }

    /// Flat-colour triangles, back to front
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::new();

        for dash in self.net() {
            vertices.extend(shapes::rect(dash.origin, dash.size, colors::NET));
        }
        vertices.extend(shapes::rect(
            self.player.origin,
            self.player.size,
            colors::PLAYER,
        ));
        vertices.extend(shapes::rect(
            self.computer.origin,
            self.computer.size,
            colors::COMPUTER,
        ));
        vertices.extend(shapes::circle(
            self.ball_center,
            self.ball_radius + GLOW_MARGIN,
            colors::BALL_GLOW,
            BALL_SEGMENTS,
        ));
        vertices.extend(shapes::circle(
            self.ball_center,
            self.ball_radius,
            colors::BALL,
            BALL_SEGMENTS,
        ));
        if let Some(panel) = self.banner_rect() {
            vertices.extend(shapes::rect(panel.origin, panel.size, colors::BANNER));
        }

        vertices
    }
}
