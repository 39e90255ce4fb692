//! Pointer hover tracking and tooltip text
//!
//! The drawing surface reports pointer over/move/out with the opaque seat
//! index of the disc under the pointer. The tooltip shows the printed seat
//! number, or the raw index when the index does not resolve to a seat.

use glam::Vec2;

use crate::settings::Settings;
use crate::venue::SeatChart;

/// Seat under the pointer and where the pointer is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverState {
    hovered: Option<usize>,
    client_pos: Option<Vec2>,
}

/// Tooltip to draw next to the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    /// Client coordinates the tooltip's bottom-right corner is anchored to
    pub anchor: Vec2,
}

impl HoverState {
    pub fn pointer_over(&mut self, seat_index: usize, client_x: f32, client_y: f32) {
        self.hovered = Some(seat_index);
        self.client_pos = Some(Vec2::new(client_x, client_y));
    }

    pub fn pointer_move(&mut self, seat_index: usize, client_x: f32, client_y: f32) {
        self.pointer_over(seat_index, client_x, client_y);
    }

    pub fn pointer_out(&mut self) {
        self.hovered = None;
        self.client_pos = None;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_hovered(&self, seat_index: usize) -> bool {
        self.hovered == Some(seat_index)
    }

    /// Tooltip for the hovered seat, if any
    pub fn tooltip(&self, chart: &SeatChart, settings: &Settings) -> Option<Tooltip> {
        let index = self.hovered?;
        let anchor = self.client_pos?;
        Some(Tooltip {
            text: seat_label(chart, settings, index),
            anchor,
        })
    }
}

/// Tooltip text for a seat index
pub fn seat_label(chart: &SeatChart, settings: &Settings, seat_index: usize) -> String {
    match chart.seat_number(seat_index) {
        Some(number) => format!("{} {}", settings.tooltip_prefix, number),
        None => format!("#{seat_index}"),
    }
}

/// Seat whose disc contains `point` (chart space), nearest center wins
pub fn pick_seat(chart: &SeatChart, point: Vec2) -> Option<usize> {
    let radius = chart.geometry().seat_radius;
    chart
        .seats()
        .iter()
        .enumerate()
        .map(|(index, seat)| (index, seat.pos.distance_squared(point)))
        .filter(|&(_, d2)| d2 <= radius * radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_lifecycle() {
        let chart = SeatChart::standard().unwrap();
        let settings = Settings::default();
        let mut hover = HoverState::default();
        assert_eq!(hover.tooltip(&chart, &settings), None);

        hover.pointer_over(0, 120.0, 80.0);
        let tooltip = hover.tooltip(&chart, &settings).unwrap();
        assert_eq!(tooltip.text, "Poseł nr 64");
        assert_eq!(tooltip.anchor, Vec2::new(120.0, 80.0));

        hover.pointer_move(411, 130.0, 90.0);
        assert_eq!(hover.tooltip(&chart, &settings).unwrap().text, "Poseł nr 34");

        hover.pointer_out();
        assert_eq!(hover.hovered(), None);
        assert_eq!(hover.tooltip(&chart, &settings), None);
    }

    #[test]
    fn test_unknown_index_falls_back_to_raw_index() {
        let chart = SeatChart::standard().unwrap();
        assert_eq!(seat_label(&chart, &Settings::default(), 9000), "#9000");
    }

    #[test]
    fn test_pick_seat() {
        let chart = SeatChart::standard().unwrap();
        for index in [0, 100, 407, 408, 464] {
            let pos = chart.seats()[index].pos;
            assert_eq!(pick_seat(&chart, pos + Vec2::new(0.1, 0.0)), Some(index));
        }
        assert_eq!(pick_seat(&chart, Vec2::ZERO), None);
    }
}
