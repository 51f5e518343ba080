//! Actions demonstrating category inference and async patterns

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherData;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search input text changed (two-way binding)
    SearchQueryChange(String),

    /// Submit the search - the one entry point that triggers a fetch
    SearchQuerySubmit(String),

    /// Clear the search input (the form's Clear button)
    SearchClear,

    // ===== Weather category =====
    /// Result: weather data loaded successfully
    WeatherDidLoad(WeatherData),

    /// Result: fetch failed for the named city
    WeatherDidError(String),

    /// Discard the held weather result ("Clear Weather Data")
    WeatherReset,

    // ===== Banner category =====
    /// Dismiss the banner message
    BannerClear,

    // ===== Uncategorized (global) =====
    /// Force a re-render (for cursor movement, etc.)
    Render,

    /// Exit the application
    Quit,
}
