//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - State is passed in explicitly, no globals
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod schedule;
pub mod state;
pub mod step;

pub use collision::{
    PaddleContact, bounce_angle, bounce_off_walls, paddle_contact, pin_outside,
    reflect_off_paddle,
};
pub use schedule::{PendingServe, ResetTimer};
pub use state::{Ball, GameEvent, MatchState, Paddle, Side};
pub use step::{StepInput, step};
