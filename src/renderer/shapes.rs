//! Shape generation for seat meshes

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::polar_to_cartesian;

/// Triangle list for a flat seat disc facing the camera
pub fn seat_disc(center: Vec2, radius: f32, z: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        let edge1 = center + polar_to_cartesian(radius, theta1);
        let edge2 = center + polar_to_cartesian(radius, theta2);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, z, color));
        vertices.push(Vertex::new(edge1.x, edge1.y, z, color));
        vertices.push(Vertex::new(edge2.x, edge2.y, z, color));
    }

    vertices
}

/// Side wall of a seat cylinder between z = 0 and z = height
pub fn seat_wall(center: Vec2, radius: f32, height: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        let a = center + polar_to_cartesian(radius, theta1);
        let b = center + polar_to_cartesian(radius, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(a.x, a.y, 0.0, color));
        vertices.push(Vertex::new(b.x, b.y, 0.0, color));
        vertices.push(Vertex::new(a.x, a.y, height, color));

        vertices.push(Vertex::new(a.x, a.y, height, color));
        vertices.push(Vertex::new(b.x, b.y, 0.0, color));
        vertices.push(Vertex::new(b.x, b.y, height, color));
    }

    vertices
}

/// Closed seat cylinder: bottom cap, wall and top cap
pub fn seat_cylinder(center: Vec2, radius: f32, height: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = seat_disc(center, radius, 0.0, color, segments);
    vertices.extend(seat_wall(center, radius, height, color, segments));
    vertices.extend(seat_disc(center, radius, height, color, segments));
    vertices
}
