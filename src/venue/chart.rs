//! Immutable seating chart
//!
//! Built once at startup and then only read: the layout plus the seat number
//! of every seat, so hover lookups are a single index.

use std::collections::HashMap;

use serde::Serialize;

use super::geometry::{VenueError, VenueGeometry};
use super::layout::{Seat, generate_seat_layout};
use super::numbering::SeatNumbering;

/// Seat layout and precomputed seat numbers
#[derive(Debug, Clone, Serialize)]
pub struct SeatChart {
    geometry: VenueGeometry,
    seats: Vec<Seat>,
    numbers: Vec<u32>,
    #[serde(skip)]
    index_by_number: HashMap<u32, usize>,
}

impl SeatChart {
    /// Validate the geometry, lay out every seat and number it
    pub fn build(geometry: &VenueGeometry) -> Result<Self, VenueError> {
        geometry.validate()?;

        let seats = generate_seat_layout(geometry);
        let numbering = SeatNumbering::new(geometry);
        let numbers: Vec<u32> = (0..seats.len()).map(|index| numbering.number(index)).collect();

        let mut index_by_number = HashMap::with_capacity(numbers.len());
        for (index, &number) in numbers.iter().enumerate() {
            if let Some(first) = index_by_number.insert(number, index) {
                return Err(VenueError::DuplicateSeatNumber {
                    number,
                    first,
                    second: index,
                });
            }
        }

        log::info!(
            "Seat chart built: {} seats ({} concentric, {} parallel), numbers {}..={}",
            seats.len(),
            geometry.concentric_seat_total(),
            geometry.parallel_seat_total(),
            numbers.iter().min().copied().unwrap_or_default(),
            numbers.iter().max().copied().unwrap_or_default(),
        );

        Ok(Self {
            geometry: *geometry,
            seats,
            numbers,
            index_by_number,
        })
    }

    /// Chart of the standard hall
    pub fn standard() -> Result<Self, VenueError> {
        Self::build(&VenueGeometry::STANDARD)
    }

    pub fn geometry(&self) -> &VenueGeometry {
        &self.geometry
    }

    /// All seats in seat index order
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }

    /// Printed number of a seat, `None` for an unknown index
    pub fn seat_number(&self, index: usize) -> Option<u32> {
        self.numbers.get(index).copied()
    }

    /// Seat index carrying a printed number
    pub fn seat_index_of(&self, number: u32) -> Option<usize> {
        self.index_by_number.get(&number).copied()
    }

    /// Seat numbers in seat index order
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }
}
