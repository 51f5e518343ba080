//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Weather result from the OpenWeather current-weather API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherData {
    pub city: String,
    pub weather_summary: String,
    pub weather_description: String,
    pub current_temperature: f64,
    pub low_temperature: f64,
    pub high_temperature: f64,
}

/// Severity of a banner message
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub enum BannerKind {
    #[default]
    Info,
    Success,
    Error,
}

/// Transient user-facing notification shown under the header
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BannerMessage {
    pub text: String,
    pub kind: BannerKind,
}

impl BannerMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BannerKind::Error,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Core data (visible in debug) ---
    /// Last successfully fetched weather result; defaults when none is held
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: WeatherData,

    /// True iff `weather` reflects a successful fetch; gates the results panel
    #[debug(section = "Weather", label = "Valid")]
    pub valid_weather_data: bool,

    /// Whether a search request is in flight
    #[debug(section = "Weather", label = "Fetching")]
    pub is_fetching: bool,

    /// Current banner notification
    #[debug(section = "Banner", label = "Message", debug_fmt)]
    pub banner: BannerMessage,

    // --- Search input (skipped) ---
    /// Text currently in the search field
    #[debug(skip)]
    pub search_query: String,
}

impl AppState {
    /// Whether the Search/Clear buttons are enabled.
    /// Derived from the input text on every render, never stored.
    pub fn search_enabled(&self) -> bool {
        !self.search_query.trim().is_empty()
    }
}
