//! Seat layout generation
//!
//! Concentric rows come first, innermost to outermost, each swept left to
//! right across a half circle. Parallel rows follow in the same row order,
//! right side group before left side group. The position of a seat in the
//! resulting vector is its seat index.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::VenueGeometry;

/// Which block of parallel rows a seat belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Section of the hall a seat sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    /// Arced row, with the angular segment the seat falls in
    Concentric { segment: usize },
    /// Straight row on one side of the hall
    Parallel { side: Side },
}

/// A single seat position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub pos: Vec2,
    pub row: usize,
    pub section: Section,
}

impl Seat {
    /// Distance from the hall center
    #[inline]
    pub fn distance(&self) -> f32 {
        self.pos.length()
    }

    pub fn is_concentric(&self) -> bool {
        matches!(self.section, Section::Concentric { .. })
    }
}

/// Generate every seat of the hall in seat index order
pub fn generate_seat_layout(geometry: &VenueGeometry) -> Vec<Seat> {
    let mut seats = Vec::with_capacity(geometry.seat_total());
    for row in 0..geometry.row_count() {
        seats.extend(concentric_row(geometry, row));
    }

    let spacing = geometry.parallel_seat_spacing();
    for row in 0..geometry.row_count() {
        seats.extend(parallel_row(geometry, row, spacing));
    }
    seats
}

/// Seats of one arced row, evenly spread over a half circle
fn concentric_row(geometry: &VenueGeometry, row: usize) -> impl Iterator<Item = Seat> {
    let radius = geometry.row_radius(row);
    let seat_count = geometry.concentric_row_seat_count(row);
    let per_segment = geometry.concentric_seats_per_segment[row];
    let last = (seat_count - 1) as f32;

    (0..seat_count).map(move |i| {
        let theta = PI * i as f32 / last;
        Seat {
            pos: Vec2::new(-radius * theta.cos(), radius * theta.sin()),
            row,
            section: Section::Concentric {
                segment: i / per_segment,
            },
        }
    })
}

/// Seats of one straight row; right group (local 0..3) then left group
fn parallel_row(geometry: &VenueGeometry, row: usize, spacing: f32) -> impl Iterator<Item = Seat> {
    let radius = geometry.row_radius(row);
    let group = geometry.side_group_size as f32;
    let pitch = 2.0 * geometry.seat_radius + spacing;
    let left_from = geometry.side_group_size;

    (0..geometry.parallel_seats_per_row[row]).map(move |i| {
        let local = i as f32;
        let (side, x, y) = if i >= left_from {
            (Side::Left, -radius, pitch * (local - 2.0 * group))
        } else {
            (Side::Right, radius, pitch * (-1.0 - local))
        };
        Seat {
            pos: Vec2::new(x, y),
            row,
            section: Section::Parallel { side },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<Seat> {
        generate_seat_layout(&VenueGeometry::STANDARD)
    }

    #[test]
    fn test_layout_length() {
        assert_eq!(layout().len(), 465);
    }

    #[test]
    fn test_first_seat_is_left_end_of_inner_row() {
        let seats = layout();
        assert!((seats[0].pos - Vec2::new(-5.0, 0.0)).length() < 1e-5);
        assert_eq!(seats[0].row, 0);
        assert_eq!(seats[0].section, Section::Concentric { segment: 0 });
        // Last seat of the inner row sits at the opposite end
        assert!((seats[11].pos - Vec2::new(5.0, 0.0)).length() < 1e-4);
        assert_eq!(seats[11].section, Section::Concentric { segment: 3 });
    }

    #[test]
    fn test_concentric_seats_lie_on_row_radius() {
        let g = VenueGeometry::STANDARD;
        for seat in layout().iter().filter(|s| s.is_concentric()) {
            assert!((seat.distance() - g.row_radius(seat.row)).abs() < 1e-4);
            assert!(seat.pos.y >= -1e-4, "concentric seats stay in the upper half");
        }
    }

    #[test]
    fn test_parallel_rows_start_after_concentric() {
        let seats = layout();
        assert!(seats[..408].iter().all(Seat::is_concentric));
        assert!(seats[408..].iter().all(|s| !s.is_concentric()));
        // Row 0 has no parallel seats
        assert_eq!(seats[408].row, 1);
    }

    #[test]
    fn test_parallel_group_positions() {
        let g = VenueGeometry::STANDARD;
        let pitch = 2.0 * g.seat_radius + g.parallel_seat_spacing();
        let seats = layout();
        let row = &seats[408..414];

        for (i, seat) in row[..3].iter().enumerate() {
            assert_eq!(seat.section, Section::Parallel { side: Side::Right });
            assert_eq!(seat.pos.x, 7.0);
            assert!((seat.pos.y - pitch * (-1.0 - i as f32)).abs() < 1e-5);
        }
        for (i, seat) in row[3..].iter().enumerate() {
            assert_eq!(seat.section, Section::Parallel { side: Side::Left });
            assert_eq!(seat.pos.x, -7.0);
            assert!((seat.pos.y - pitch * (i as f32 - 3.0)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_last_parallel_row_is_single_group() {
        let seats = layout();
        let last_row: Vec<&Seat> = seats.iter().filter(|s| !s.is_concentric() && s.row == 10).collect();
        assert_eq!(last_row.len(), 3);
        assert!(last_row
            .iter()
            .all(|s| s.section == Section::Parallel { side: Side::Right } && s.pos.x == 25.0));
    }
}
