//! Football Pong entry point
//!
//! Runs a headless demo match: the player paddle follows the ball through the
//! pointer channel and the log shows every goal.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::time::{SystemTime, UNIX_EPOCH};

    use football_pong::consts::FRAME_MS;
    use football_pong::renderer::FrameView;
    use football_pong::sim::GameEvent;
    use football_pong::{LogScoreboard, Session, Tuning};

    /// Simulated match length
    const DEMO_SECONDS: f64 = 60.0;
    /// How far the demo player lags behind the ball (pixels per frame)
    const FOLLOW_RATE: f32 = 6.0;

    fn load_tuning() -> Tuning {
        let Some(path) = std::env::args().nth(1) else {
            return Tuning::default();
        };
        match std::fs::read_to_string(&path)
            .map_err(|err| err.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|err| err.to_string()))
        {
            Ok(tuning) => {
                log::info!("Loaded tuning from {path}");
                tuning
            }
            Err(err) => {
                log::warn!("Ignoring tuning file {path}: {err}");
                Tuning::default()
            }
        }
    }

    pub fn run() {
        let tuning = load_tuning();
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut session = Session::new(tuning, seed, Box::new(LogScoreboard));
        let frame_ms = f64::from(FRAME_MS);
        let frames = (DEMO_SECONDS * 1000.0 / frame_ms) as u64;

        let mut paddle_center = session.state().player.center_y();
        let mut hits = 0u32;
        for frame in 0..frames {
            let ball_y = session.state().ball.pos.y;
            paddle_center += (ball_y - paddle_center).clamp(-FOLLOW_RATE, FOLLOW_RATE);
            session.pointer_moved(paddle_center);

            for event in session.frame(frame as f64 * frame_ms) {
                match event {
                    GameEvent::PaddleHit { side } => {
                        hits += 1;
                        log::debug!("{side:?} returns the ball");
                    }
                    GameEvent::Scored { .. } | GameEvent::WallBounce => {}
                }
            }

            let view = FrameView::from_state(session.state());
            log::trace!(
                "frame {frame}: ball ({:.1}, {:.1}), {} vertices",
                view.ball_center.x,
                view.ball_center.y,
                view.vertices().len()
            );
        }

        let state = session.state();
        println!(
            "Final score after {DEMO_SECONDS}s: player {} - computer {} ({hits} returns)",
            state.player_score, state.computer_score
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Football Pong (native) starting...");
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web entry point: the binary is the native demo only
}
