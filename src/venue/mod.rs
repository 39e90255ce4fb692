//! Venue seating model
//!
//! Everything here is pure and deterministic:
//! - Geometry is a compile-time constant
//! - Layout order is the seat index space
//! - Seat numbers are precomputed once into an immutable table

pub mod chart;
pub mod geometry;
pub mod layout;
pub mod numbering;

pub use chart::SeatChart;
pub use geometry::{VenueError, VenueGeometry};
pub use layout::{Seat, Section, Side, generate_seat_layout};
pub use numbering::{SeatNumbering, seat_number_for};
