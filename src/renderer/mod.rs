//! Render collaborator
//!
//! Reads the post-step match state and turns it into flat-colour geometry.
//! Nothing here writes back into the simulation.

pub mod shapes;
pub mod vertex;
pub mod view;

pub use vertex::{Vertex, as_bytes};
pub use view::{FrameView, GOAL_BANNER, Rect};
