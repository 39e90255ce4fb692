//! GPU-ready vertex and instance types for seat rendering

use bytemuck::{Pod, Zeroable};

/// 3D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
            color,
        }
    }
}

/// Per-seat instance data: where to draw a seat disc and how
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SeatInstance {
    pub position: [f32; 2],
    pub radius: f32,
    /// Seat index, echoed back by the surface on hover
    pub seat_index: u32,
    pub color: [f32; 4],
}
