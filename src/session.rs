//! Frame-loop driver
//!
//! Owns the match, stages input that arrives between frames, turns the
//! driver clock into frame deltas, fires the post-goal serve and reports
//! scores to a scoreboard sink. Input callbacks only stage intent; paddles are
//! only ever moved inside [`step`].

use crate::consts::MAX_FRAME_MS;
use crate::sim::{GameEvent, MatchState, ResetTimer, StepInput, step};
use crate::tuning::Tuning;

/// Keys the player paddle responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

/// Display-only sink for the two scores
pub trait Scoreboard {
    /// Called with both scores whenever either changes
    fn show(&mut self, player: u32, computer: u32);
}

/// Scoreboard that writes to the log
#[derive(Debug, Default)]
pub struct LogScoreboard;

impl Scoreboard for LogScoreboard {
    fn show(&mut self, player: u32, computer: u32) {
        log::info!("Score: player {player} - computer {computer}");
    }
}

/// Input staged between frames
#[derive(Debug, Clone, Default)]
struct StagedInput {
    up_held: bool,
    down_held: bool,
    /// Pointer target (paddle top edge), consumed by the next frame
    target_y: Option<f32>,
}

impl StagedInput {
    fn direction(&self) -> i8 {
        i8::from(self.down_held) - i8::from(self.up_held)
    }

    fn take_step_input(&mut self) -> StepInput {
        StepInput {
            direction: self.direction(),
            target_y: self.target_y.take(),
        }
    }
}

/// A running game: match state plus everything the frame loop needs
pub struct Session {
    state: MatchState,
    input: StagedInput,
    reset_timer: ResetTimer,
    last_time: Option<f64>,
    scoreboard: Box<dyn Scoreboard>,
}

impl Session {
    pub fn new(tuning: Tuning, seed: u64, scoreboard: Box<dyn Scoreboard>) -> Self {
        log::info!("New match with seed {seed}");
        Self::with_state(MatchState::new(tuning, seed), scoreboard)
    }

    /// Drive an existing match (debug snapshots, scripted scenarios)
    pub fn with_state(state: MatchState, scoreboard: Box<dyn Scoreboard>) -> Self {
        let mut session = Self {
            state,
            input: StagedInput::default(),
            reset_timer: ResetTimer::new(),
            last_time: None,
            scoreboard,
        };
        session.publish_scores();
        session
    }

    /// Read access for the renderer
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Whether a post-goal serve is waiting
    pub fn serve_pending(&self) -> bool {
        self.reset_timer.is_pending()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.input.up_held = true,
            Key::Down => self.input.down_held = true,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.input.up_held = false,
            Key::Down => self.input.down_held = false,
        }
    }

    /// Pointer or touch moved to `field_y` (court space); the paddle centres on it
    pub fn pointer_moved(&mut self, field_y: f32) {
        let half = self.state.tuning.paddle_height / 2.0;
        self.input.target_y = Some(field_y - half);
    }

    /// Run one display frame at driver time `now_ms`.
    ///
    /// The first frame has no reference time and advances nothing.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let dt = match self.last_time {
            Some(last) => (now_ms - last).clamp(0.0, f64::from(MAX_FRAME_MS)) as f32,
            None => 0.0,
        };
        self.last_time = Some(now_ms);

        if let Some(toward) = self.reset_timer.poll(now_ms, self.state.epoch) {
            self.state.serve(Some(toward));
            self.state.running = true;
            log::debug!("Serve toward {toward:?}");
        }

        let input = self.input.take_step_input();
        let events = step(&mut self.state, &input, dt);

        for event in &events {
            if let GameEvent::Scored { scorer } = *event {
                log::info!("Goal for {scorer:?}");
                let due = now_ms + self.state.tuning.score_pause_ms;
                self.reset_timer.schedule(due, scorer, self.state.epoch);
                self.publish_scores();
            }
        }

        events
    }

    /// Restart command: fresh 0-0 match, any pending serve is cancelled
    pub fn restart(&mut self) {
        self.reset_timer.cancel();
        self.state.restart();
        self.input = StagedInput::default();
        log::info!("Match restarted (epoch {})", self.state.epoch);
        self.publish_scores();
    }

    fn publish_scores(&mut self) {
        self.scoreboard
            .show(self.state.player_score, self.state.computer_score);
    }
}
