//! Weather data shown on the clock overlay.
//!
//! The snapshot arrives fully populated from the host (typically parsed off
//! the panel's telemetry feed) and is read-only for the lifetime of one
//! activation. The clock overlay renders only the summary line; the remaining
//! fields are available for richer host layouts.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Weather conditions supplied to [`DisplayModeController::activate`].
///
/// All fields are free-form strings as delivered by the upstream provider.
/// An empty `current_temperature` means the temperature is unknown and the
/// overlay's weather line stays empty.
///
/// [`DisplayModeController::activate`]: crate::DisplayModeController::activate
///
/// # Example
///
/// ```
/// use wallsaver::WeatherSnapshot;
///
/// let weather = WeatherSnapshot {
///     current_temperature: "18".to_string(),
///     current_conditions: "Cloudy".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(weather.summary_line(), "18°C, Cloudy");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Current temperature in °C; empty when unknown
    #[serde(default)]
    pub current_temperature: String,

    /// Current conditions text (e.g. "Cloudy")
    #[serde(default)]
    pub current_conditions: String,

    /// Forecast high temperature
    #[serde(default)]
    pub high_temperature: String,

    /// Forecast low temperature
    #[serde(default)]
    pub low_temperature: String,

    /// Wind direction (e.g. "NW")
    #[serde(default)]
    pub wind_direction: String,

    /// Wind speed
    #[serde(default)]
    pub wind_speed: String,

    /// Chance of precipitation
    #[serde(default)]
    pub chance_of_precip: String,
}

impl WeatherSnapshot {
    /// Parse a snapshot from the JSON form it arrives in over the wire.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// The one-line summary shown under the clock.
    ///
    /// Renders `"{temperature}°C, {conditions}"`, or an empty string when the
    /// temperature is unknown.
    pub fn summary_line(&self) -> String {
        if self.current_temperature.is_empty() {
            String::new()
        } else {
            format!(
                "{}°C, {}",
                self.current_temperature, self.current_conditions
            )
        }
    }
}
