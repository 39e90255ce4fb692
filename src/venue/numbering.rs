//! Seat index → seat number translation
//!
//! Concentric seats are numbered segment by segment around the hall. In the
//! outer (sub-segmented) rows the front half of every segment is numbered
//! first, then a second pass numbers the back halves. Parallel seats use two
//! independent blocks, one per side, three numbers per row.

use super::geometry::VenueGeometry;

/// Per-row lookup data for numbering, derived once from a geometry
#[derive(Debug, Clone)]
pub struct SeatNumbering<'a> {
    geometry: &'a VenueGeometry,
    seat_total: usize,
    concentric_total: usize,
    /// Inclusive upper seat index of each concentric row
    row_upper_bounds: Vec<usize>,
    /// First-pass offset of each row: sub-segment seats of all inner rows
    front_offsets: Vec<usize>,
    /// Second-pass offset of each row, meaningful for sub-segmented rows only
    back_offsets: Vec<usize>,
}

impl<'a> SeatNumbering<'a> {
    pub fn new(geometry: &'a VenueGeometry) -> Self {
        let rows = geometry.row_count();
        let subsegments: Vec<usize> = (0..rows).map(|r| geometry.subsegment_seat_count(r)).collect();

        let front_offsets: Vec<usize> = subsegments
            .iter()
            .scan(0, |seen, &count| {
                let offset = *seen;
                *seen += count;
                Some(offset)
            })
            .collect();

        // Second pass starts after every front pass of the segment
        let front_passes: usize = subsegments.iter().sum();
        let back_offsets: Vec<usize> = (0..rows)
            .scan(front_passes, |seen, row| {
                let offset = *seen;
                if geometry.is_subsegmented(row) {
                    *seen += subsegments[row];
                }
                Some(offset)
            })
            .collect();

        Self {
            geometry,
            seat_total: geometry.seat_total(),
            concentric_total: geometry.concentric_seat_total(),
            row_upper_bounds: geometry.concentric_row_upper_bounds(),
            front_offsets,
            back_offsets,
        }
    }

    /// Printed seat number of the seat at `seat_index`.
    ///
    /// # Panics
    ///
    /// Panics if `seat_index` is not in `0..geometry.seat_total()`.
    pub fn number(&self, seat_index: usize) -> u32 {
        assert!(
            seat_index < self.seat_total,
            "seat index {seat_index} out of range (hall has {} seats)",
            self.seat_total
        );

        if seat_index >= self.concentric_total {
            self.parallel_seat_number(seat_index - self.concentric_total)
        } else {
            self.concentric_seat_number(seat_index)
        }
    }

    fn parallel_seat_number(&self, relative_index: usize) -> u32 {
        let geometry = self.geometry;
        let group = geometry.side_group_size;
        let general_row = relative_index / group;
        let column = relative_index % group;

        // Right and left groups alternate in layout order
        let (base, side_row) = if general_row % 2 == 1 {
            (geometry.left_base_number, (general_row - 1) / 2)
        } else {
            (geometry.right_base_number, general_row / 2)
        };
        base + (group * side_row + column) as u32
    }

    fn concentric_seat_number(&self, seat_index: usize) -> u32 {
        let geometry = self.geometry;
        let bounds = &self.row_upper_bounds;
        let row = bounds.partition_point(|&upper| upper < seat_index);
        let inner_seats = if row == 0 { 0 } else { bounds[row - 1] + 1 };

        let within_row = seat_index - inner_seats;
        let segment_seats = geometry.concentric_seats_per_segment[row];
        let subsegment_seats = geometry.subsegment_seat_count(row);

        let in_back_half = geometry.is_subsegmented(row)
            && within_row % segment_seats >= segment_seats.div_ceil(2);
        let within_subsegment = within_row % subsegment_seats;
        let segment = within_row / segment_seats;

        let pass_offset = if in_back_half {
            self.back_offsets[row]
        } else {
            self.front_offsets[row]
        };

        let segment_stride = self.concentric_total / geometry.segment_count;
        geometry.concentric_base_number
            + (pass_offset + segment_stride * segment + within_subsegment) as u32
    }
}

/// Printed seat number of the seat at `seat_index`.
///
/// Derives the row tables on every call; use [`SeatNumbering`] to number
/// many seats.
///
/// # Panics
///
/// Panics if `seat_index` is not a seat of the hall, i.e. not in
/// `0..geometry.seat_total()`.
pub fn seat_number_for(geometry: &VenueGeometry, seat_index: usize) -> u32 {
    SeatNumbering::new(geometry).number(seat_index)
}
