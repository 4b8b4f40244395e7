//! End-to-end match flow through the public API

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use football_pong::consts::FRAME_MS;
use football_pong::renderer::{FrameView, GOAL_BANNER};
use football_pong::sim::{GameEvent, MatchState, Side, StepInput, step};
use football_pong::{Scoreboard, Session, Tuning};

const DT: f32 = FRAME_MS;

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<(u32, u32)>>>);

impl Scoreboard for Recorder {
    fn show(&mut self, player: u32, computer: u32) {
        self.0.borrow_mut().push((player, computer));
    }
}

/// Centre serve moving right at speed 6
fn straight_serve() -> MatchState {
    let mut state = MatchState::new(Tuning::default(), 2024);
    state.ball.pos = Vec2::new(400.0, 250.0);
    state.ball.vel = Vec2::new(6.0, 0.0);
    state.ball.speed = 6.0;
    state
}

#[test]
fn ball_returns_off_computer_paddle() {
    let mut state = straight_serve();
    let paddle_x = state.computer.x;

    let mut hit = false;
    for _ in 0..200 {
        let events = step(&mut state, &StepInput::default(), DT);
        if events.contains(&GameEvent::PaddleHit {
            side: Side::Computer,
        }) {
            hit = true;
            break;
        }
        assert!(state.ball.vel.x > 0.0);
    }

    assert!(hit, "ball never reached the computer paddle");
    assert!(state.ball.vel.x < 0.0);
    assert_eq!(state.ball.pos.x, paddle_x - state.ball.radius);
    assert!((state.ball.vel.length() - state.ball.speed).abs() < 1e-4);
    assert_eq!(state.player_score + state.computer_score, 0);
}

#[test]
fn straight_rally_keeps_going() {
    let mut state = straight_serve();
    let mut hits = 0;
    for _ in 0..2000 {
        for event in step(&mut state, &StepInput::default(), DT) {
            if let GameEvent::PaddleHit { .. } = event {
                hits += 1;
            }
        }
    }
    // Dead-centre play never scores: both paddles sit on the ball line
    assert!(hits > 10);
    assert!(state.running);
    assert_eq!(state.player_score + state.computer_score, 0);
}

/// Session whose next running frame sends the ball past the player paddle
fn session_about_to_concede(recorder: &Recorder) -> Session {
    let mut state = straight_serve();
    state.ball.pos = Vec2::new(20.0, 40.0);
    state.ball.vel = Vec2::new(-10.0, 0.0);
    state.ball.speed = 10.0;
    Session::with_state(state, Box::new(recorder.clone()))
}

#[test]
fn miss_scores_once_and_restart_cancels_serve() {
    let recorder = Recorder::default();
    let mut session = session_about_to_concede(&recorder);
    session.frame(0.0);

    let mut goals = 0;
    let mut now = 0.0;
    for _ in 0..20 {
        now += f64::from(DT);
        for event in session.frame(now) {
            if let GameEvent::Scored { scorer } = event {
                assert_eq!(scorer, Side::Computer);
                goals += 1;
            }
        }
    }
    assert_eq!(goals, 1);
    assert_eq!(session.state().computer_score, 1);
    assert!(!session.state().running);
    assert!(session.serve_pending());

    // Restart mid-pause
    session.restart();
    assert!(!session.serve_pending());
    assert_eq!(recorder.0.borrow().last(), Some(&(0, 0)));

    // Long after the old serve was due, nothing resurrects it
    let served = session.state().ball;
    now += 1000.0;
    session.frame(now);
    assert_eq!(session.state().computer_score, 0);
    assert!(session.state().running);
    assert!((session.state().ball.pos.x - (served.pos.x + served.vel.x)).abs() < 1e-4);
}

#[test]
fn goal_pause_then_single_serve() {
    let recorder = Recorder::default();
    let mut session = session_about_to_concede(&recorder);
    session.frame(0.0);

    let scored_at = f64::from(DT);
    let events = session.frame(scored_at);
    assert!(events.contains(&GameEvent::Scored {
        scorer: Side::Computer
    }));

    let view = FrameView::from_state(session.state());
    assert_eq!(view.banner, Some(GOAL_BANNER));
    assert_eq!(view.computer_score, 1);

    // Still paused before 650 ms of real time, however many frames pass
    for frame in 1..=38 {
        let now = scored_at + f64::from(frame) * f64::from(DT);
        assert!(session.frame(now).is_empty());
        assert!(!session.state().running);
    }

    session.frame(scored_at + 660.0);
    assert!(session.state().running);
    assert!(!session.serve_pending());
    assert!(FrameView::from_state(session.state()).banner.is_none());
    // Serve heads toward the computer, which scored
    assert!(session.state().ball.vel.x > 0.0);

    // One update for the start, one for the goal
    assert_eq!(*recorder.0.borrow(), vec![(0, 0), (0, 1)]);
}
