//! Seat Chart - seating layout and seat numbering for a concentric/parallel venue
//!
//! Core modules:
//! - `venue`: Deterministic layout generation and seat index → seat number translation
//! - `renderer`: Seat instance data and disc meshes for a GPU renderer
//! - `hover`: Pointer hover tracking, hit testing and tooltip text
//! - `settings`: Presentation preferences (colors, tooltip prefix, camera)

pub mod hover;
pub mod renderer;
pub mod settings;
pub mod venue;

pub use hover::{HoverState, Tooltip};
pub use settings::Settings;
pub use venue::{Seat, SeatChart, VenueError, VenueGeometry};

use glam::Vec2;

/// Presentation constants taken from the venue page
pub mod consts {
    /// Height of a seat cylinder (world units)
    pub const SEAT_HEIGHT: f32 = 0.5;
    /// Radial segments used when tessellating a seat disc
    pub const SEAT_DISC_SEGMENTS: u32 = 15;
    /// Camera distance from the chart plane
    pub const CAMERA_DISTANCE: f32 = 40.0;
    /// Page title shown above the chart
    pub const PAGE_TITLE: &str = "Widok.org";
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
