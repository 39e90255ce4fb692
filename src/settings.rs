//! Presentation settings
//!
//! Colors, tooltip wording and camera placement. The hall geometry itself is
//! fixed and deliberately not part of these settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_DISTANCE, SEAT_DISC_SEGMENTS};

/// Seat colors
pub mod colors {
    /// Orange
    pub const SEAT: [f32; 4] = [1.0, 0.647, 0.0, 1.0];
    /// Hot pink
    pub const SEAT_HOVERED: [f32; 4] = [1.0, 0.412, 0.706, 1.0];
}

/// Environment variable naming a JSON settings file
pub const SETTINGS_ENV: &str = "SEAT_CHART_SETTINGS";

/// Display preferences for the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Text placed before the seat number in the tooltip
    pub tooltip_prefix: String,
    /// Fill color of an idle seat
    pub seat_color: [f32; 4],
    /// Fill color of the seat under the pointer
    pub hovered_seat_color: [f32; 4],
    /// Radial segments per seat disc
    pub disc_segments: u32,
    /// Camera distance from the chart plane
    pub camera_distance: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tooltip_prefix: "Poseł nr".to_string(),
            seat_color: colors::SEAT,
            hovered_seat_color: colors::SEAT_HOVERED,
            disc_segments: SEAT_DISC_SEGMENTS,
            camera_distance: CAMERA_DISTANCE,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file; missing fields keep their defaults
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = serde_json::from_str(&json)?;
        Ok(settings)
    }

    /// Load from the file named by `SEAT_CHART_SETTINGS`, else defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.to_string_lossy());
                settings
            }
            Err(e) => {
                log::warn!(
                    "Failed to load settings from {}: {e}, using defaults",
                    path.to_string_lossy()
                );
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Fill color for a seat
    pub fn seat_fill(&self, hovered: bool) -> [f32; 4] {
        if hovered {
            self.hovered_seat_color
        } else {
            self.seat_color
        }
    }
}
