//! Venue geometry parameters
//!
//! The hall is built from concentric arced rows split into angular segments,
//! flanked by two blocks of straight parallel rows. All seat numbering offsets
//! live here so the translator never works with bare literals.

use std::f32::consts::PI;

use serde::Serialize;
use thiserror::Error;

/// Number of concentric rows in the standard hall
pub const CONCENTRIC_ROW_COUNT: usize = 11;

/// Geometry consistency errors, detected when the chart is built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VenueError {
    #[error("concentric row {row} has {seats} seats, at least 2 are required")]
    RowTooSmall { row: usize, seats: usize },
    #[error("sub-segmented row {row} has an odd segment seat count ({seats})")]
    OddSubsegmentedRow { row: usize, seats: usize },
    #[error("row tables disagree: {concentric} concentric rows, {parallel} parallel rows")]
    RowCountMismatch { concentric: usize, parallel: usize },
    #[error("reference row {row} is not a concentric row")]
    ReferenceRowOutOfRange { row: usize },
    #[error("parallel row {row} has {seats} seats, expected 0, one or two side groups")]
    InvalidParallelRow { row: usize, seats: usize },
    #[error("parallel row {row} has a single side group but is not the last parallel row")]
    SingleGroupRow { row: usize },
    #[error("seat number {number} is assigned to both seat #{first} and seat #{second}")]
    DuplicateSeatNumber {
        number: u32,
        first: usize,
        second: usize,
    },
}

/// Fixed geometry and numbering convention of a venue
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VenueGeometry {
    /// Radius of the innermost concentric row
    pub initial_row_radius: f32,
    /// Radius increment between consecutive rows
    pub row_interval: f32,
    /// Seats per angular segment, per concentric row (inner to outer)
    pub concentric_seats_per_segment: &'static [usize],
    /// Seats per parallel row, both sides together
    pub parallel_seats_per_row: &'static [usize],
    /// Radius of a single seat disc
    pub seat_radius: f32,
    /// Angular segments per concentric row
    pub segment_count: usize,
    /// Rows after this index are numbered in front/back half passes
    pub last_non_subsegmented_row: usize,
    /// Concentric row whose seat spacing is reused for parallel rows
    pub reference_row: usize,
    /// Seats in one side group of a parallel row
    pub side_group_size: usize,
    /// First seat number of the concentric section
    pub concentric_base_number: u32,
    /// First seat number of the left parallel block
    pub left_base_number: u32,
    /// First seat number of the right parallel block
    pub right_base_number: u32,
}

impl VenueGeometry {
    /// The hall the chart was drawn for
    pub const STANDARD: VenueGeometry = VenueGeometry {
        initial_row_radius: 5.0,
        row_interval: 2.0,
        concentric_seats_per_segment: &[3, 5, 6, 6, 8, 10, 10, 12, 14, 14, 14],
        parallel_seats_per_row: &[0, 6, 6, 6, 6, 6, 6, 6, 6, 6, 3],
        seat_radius: 0.5,
        segment_count: 4,
        last_non_subsegmented_row: 2,
        reference_row: 3,
        side_group_size: 3,
        concentric_base_number: 64,
        left_base_number: 34,
        right_base_number: 472,
    };

    /// Check that the constants describe a buildable hall
    pub fn validate(&self) -> Result<(), VenueError> {
        let rows = self.concentric_seats_per_segment.len();
        if rows != self.parallel_seats_per_row.len() {
            return Err(VenueError::RowCountMismatch {
                concentric: rows,
                parallel: self.parallel_seats_per_row.len(),
            });
        }
        if self.reference_row >= rows {
            return Err(VenueError::ReferenceRowOutOfRange {
                row: self.reference_row,
            });
        }

        for (row, &per_segment) in self.concentric_seats_per_segment.iter().enumerate() {
            let seats = per_segment * self.segment_count;
            if seats < 2 {
                return Err(VenueError::RowTooSmall { row, seats });
            }
            if self.is_subsegmented(row) && per_segment % 2 != 0 {
                return Err(VenueError::OddSubsegmentedRow {
                    row,
                    seats: per_segment,
                });
            }
        }

        let group = self.side_group_size;
        for (row, &seats) in self.parallel_seats_per_row.iter().enumerate() {
            if group == 0 || seats % group != 0 || seats > 2 * group {
                return Err(VenueError::InvalidParallelRow { row, seats });
            }
        }

        // Side groups alternate right/left in numbering, so only the last
        // non-empty row may stop after its right group
        let last_parallel = self.parallel_seats_per_row.iter().rposition(|&seats| seats > 0);
        for (row, &seats) in self.parallel_seats_per_row.iter().enumerate() {
            if seats == group && Some(row) != last_parallel {
                return Err(VenueError::SingleGroupRow { row });
            }
        }

        Ok(())
    }

    /// Number of concentric (and parallel) rows
    #[inline]
    pub fn row_count(&self) -> usize {
        self.concentric_seats_per_segment.len()
    }

    /// Distance of a row from the hall center
    #[inline]
    pub fn row_radius(&self, row: usize) -> f32 {
        self.initial_row_radius + row as f32 * self.row_interval
    }

    /// Whether a concentric row is numbered in two half-segment passes
    #[inline]
    pub fn is_subsegmented(&self, row: usize) -> bool {
        row > self.last_non_subsegmented_row
    }

    /// Seats in one full concentric row
    #[inline]
    pub fn concentric_row_seat_count(&self, row: usize) -> usize {
        self.concentric_seats_per_segment[row] * self.segment_count
    }

    /// Seats in one numbering pass of a segment
    pub fn subsegment_seat_count(&self, row: usize) -> usize {
        let per_segment = self.concentric_seats_per_segment[row];
        if self.is_subsegmented(row) {
            per_segment / 2
        } else {
            per_segment
        }
    }

    /// Seats across all concentric rows
    pub fn concentric_seat_total(&self) -> usize {
        (0..self.row_count())
            .map(|row| self.concentric_row_seat_count(row))
            .sum()
    }

    /// Seats across all parallel rows
    pub fn parallel_seat_total(&self) -> usize {
        self.parallel_seats_per_row.iter().sum()
    }

    /// Total seats in the hall
    pub fn seat_total(&self) -> usize {
        self.concentric_seat_total() + self.parallel_seat_total()
    }

    /// Inclusive upper seat index of each concentric row
    pub fn concentric_row_upper_bounds(&self) -> Vec<usize> {
        (0..self.row_count())
            .scan(0, |seen, row| {
                *seen += self.concentric_row_seat_count(row);
                Some(*seen - 1)
            })
            .collect()
    }

    /// Gap between neighbouring parallel seats, equal to the arc gap of the
    /// reference concentric row
    pub fn parallel_seat_spacing(&self) -> f32 {
        let seats = self.concentric_row_seat_count(self.reference_row) as f32;
        let radius = self.row_radius(self.reference_row);
        (PI * (radius - self.seat_radius) - self.seat_radius * 2.0 * seats) / (seats - 1.0)
    }
}

impl Default for VenueGeometry {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_geometry_is_valid() {
        assert_eq!(VenueGeometry::STANDARD.validate(), Ok(()));
        assert_eq!(VenueGeometry::STANDARD.row_count(), CONCENTRIC_ROW_COUNT);
    }

    #[test]
    fn test_standard_totals() {
        let g = VenueGeometry::STANDARD;
        assert_eq!(g.concentric_seat_total(), 408);
        assert_eq!(g.parallel_seat_total(), 57);
        assert_eq!(g.seat_total(), 465);
    }

    #[test]
    fn test_subsegment_counts() {
        let g = VenueGeometry::STANDARD;
        let counts: Vec<usize> = (0..g.row_count()).map(|r| g.subsegment_seat_count(r)).collect();
        assert_eq!(counts, vec![3, 5, 6, 3, 4, 5, 5, 6, 7, 7, 7]);
    }

    #[test]
    fn test_row_upper_bounds() {
        let bounds = VenueGeometry::STANDARD.concentric_row_upper_bounds();
        assert_eq!(&bounds[..4], &[11, 31, 55, 79]);
        assert_eq!(*bounds.last().unwrap(), 407);
    }

    #[test]
    fn test_parallel_spacing() {
        let spacing = VenueGeometry::STANDARD.parallel_seat_spacing();
        assert!((spacing - 0.390_727).abs() < 1e-4, "spacing = {spacing}");
    }

    #[test]
    fn test_validate_rejects_single_seat_row() {
        let g = VenueGeometry {
            concentric_seats_per_segment: &[0, 5],
            parallel_seats_per_row: &[0, 6],
            reference_row: 1,
            ..VenueGeometry::STANDARD
        };
        assert_eq!(g.validate(), Err(VenueError::RowTooSmall { row: 0, seats: 0 }));
    }

    #[test]
    fn test_validate_rejects_odd_subsegmented_row() {
        let g = VenueGeometry {
            concentric_seats_per_segment: &[3, 5, 6, 7],
            parallel_seats_per_row: &[0, 6, 6, 3],
            ..VenueGeometry::STANDARD
        };
        assert_eq!(
            g.validate(),
            Err(VenueError::OddSubsegmentedRow { row: 3, seats: 7 })
        );
    }

    #[test]
    fn test_validate_rejects_mismatched_tables() {
        let g = VenueGeometry {
            parallel_seats_per_row: &[0, 6],
            ..VenueGeometry::STANDARD
        };
        assert!(matches!(g.validate(), Err(VenueError::RowCountMismatch { .. })));
    }

    #[test]
    fn test_validate_rejects_single_group_before_last_row() {
        let g = VenueGeometry {
            parallel_seats_per_row: &[0, 3, 6, 6, 6, 6, 6, 6, 6, 6, 3],
            ..VenueGeometry::STANDARD
        };
        assert_eq!(g.validate(), Err(VenueError::SingleGroupRow { row: 1 }));

        let g = VenueGeometry {
            parallel_seats_per_row: &[3, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6],
            ..VenueGeometry::STANDARD
        };
        assert_eq!(g.validate(), Err(VenueError::SingleGroupRow { row: 0 }));
    }

    #[test]
    fn test_validate_accepts_single_group_before_empty_rows() {
        let g = VenueGeometry {
            parallel_seats_per_row: &[0, 6, 6, 6, 6, 6, 6, 6, 6, 3, 0],
            ..VenueGeometry::STANDARD
        };
        assert_eq!(g.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_reference_row_out_of_range() {
        let g = VenueGeometry {
            reference_row: 11,
            ..VenueGeometry::STANDARD
        };
        assert_eq!(
            g.validate(),
            Err(VenueError::ReferenceRowOutOfRange { row: 11 })
        );
    }

    #[test]
    fn test_validate_rejects_partial_side_group() {
        let g = VenueGeometry {
            parallel_seats_per_row: &[0, 6, 6, 6, 6, 6, 6, 6, 6, 6, 4],
            ..VenueGeometry::STANDARD
        };
        assert_eq!(
            g.validate(),
            Err(VenueError::InvalidParallelRow { row: 10, seats: 4 })
        );
    }
}
