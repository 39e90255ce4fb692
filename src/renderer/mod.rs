//! Seat rendering data
//!
//! The drawing surface itself lives outside this crate. It receives one
//! instance per seat (or a prebuilt mesh) and reports pointer events back
//! with the seat index stored in the instance.

pub mod shapes;
pub mod vertex;

pub use vertex::{SeatInstance, Vertex};

use crate::consts::SEAT_HEIGHT;
use crate::hover::HoverState;
use crate::settings::Settings;
use crate::venue::SeatChart;

/// One instance per seat, in seat index order
pub fn instances(chart: &SeatChart, hover: &HoverState, settings: &Settings) -> Vec<SeatInstance> {
    let radius = chart.geometry().seat_radius;
    chart
        .seats()
        .iter()
        .enumerate()
        .map(|(index, seat)| SeatInstance {
            position: seat.pos.to_array(),
            radius,
            seat_index: index as u32,
            color: settings.seat_fill(hover.is_hovered(index)),
        })
        .collect()
}

/// Full triangle mesh of every seat cylinder
pub fn chart_mesh(chart: &SeatChart, hover: &HoverState, settings: &Settings) -> Vec<Vertex> {
    let radius = chart.geometry().seat_radius;
    chart
        .seats()
        .iter()
        .enumerate()
        .flat_map(|(index, seat)| {
            shapes::seat_cylinder(
                seat.pos,
                radius,
                SEAT_HEIGHT,
                settings.seat_fill(hover.is_hovered(index)),
                settings.disc_segments,
            )
        })
        .collect()
}
