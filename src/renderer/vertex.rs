//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex slice, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    /// Player boot (#ff4d6d)
    pub const PLAYER: [f32; 4] = [1.0, 0.302, 0.427, 1.0];
    /// Computer boot (#39d3a2)
    pub const COMPUTER: [f32; 4] = [0.224, 0.827, 0.635, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL_GLOW: [f32; 4] = [1.0, 1.0, 1.0, 0.06];
    pub const NET: [f32; 4] = [1.0, 1.0, 1.0, 0.08];
    pub const BANNER: [f32; 4] = [0.024, 0.071, 0.149, 0.45];
}
