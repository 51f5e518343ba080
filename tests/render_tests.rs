//! Render snapshot tests using RenderHarness

use tui_dispatch::testing::*;
use weather_search::{
    components::{Component, WeatherSearch, WeatherSearchProps},
    state::{AppState, BannerKind, BannerMessage, WeatherData},
};

fn chicago_weather() -> WeatherData {
    WeatherData {
        city: "Chicago".into(),
        weather_summary: "Cloudy".into(),
        weather_description: "Cloudy with a chance of rain".into(),
        current_temperature: 56.3,
        low_temperature: 53.8,
        high_temperature: 58.6,
    }
}

fn render_state(state: &AppState) -> String {
    let mut render = RenderHarness::new(60, 24);
    let mut component = WeatherSearch::new();

    render.render_to_string_plain(|frame| {
        let props = WeatherSearchProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_initial_state() {
    let output = render_state(&AppState::default());

    // Both action buttons are present and rendered disabled
    assert!(output.contains("Search"), "Should show the Search button");
    assert!(output.contains("Clear"), "Should show the Clear button");

    // No result fields yet
    assert!(!output.contains("City:"), "No weather fields on first render");
    assert!(!output.contains("Summary:"));
    assert!(!output.contains("Current:"));
}

#[test]
fn test_render_valid_weather() {
    let state = AppState {
        weather: chicago_weather(),
        valid_weather_data: true,
        ..Default::default()
    };

    let output = render_state(&state);

    assert!(output.contains("Weather Summary"), "Section headings frame the fields");
    assert!(output.contains("Temperatures"));
    assert!(output.contains("City: Chicago"));
    assert!(output.contains("Summary: Cloudy"));
    assert!(output.contains("Details: Cloudy with a chance of rain"));
    assert!(output.contains("Current: 56.3° F"));
    assert!(output.contains("High (Today): 58.6° F"));
    assert!(output.contains("Low (Today): 53.8° F"));
    assert!(
        output.contains("Clear Weather Data"),
        "Results panel offers the reset action"
    );
}

#[test]
fn test_render_hides_panel_when_data_invalid() {
    // Same data, but the valid flag is down (e.g. after a failed refetch)
    let state = AppState {
        weather: chicago_weather(),
        valid_weather_data: false,
        ..Default::default()
    };

    let output = render_state(&state);

    assert!(!output.contains("City: Chicago"));
    assert!(!output.contains("Current:"));
}

#[test]
fn test_render_error_banner() {
    let state = AppState {
        banner: BannerMessage::error("ERROR! Unable to retrieve weather data for Chicago!"),
        ..Default::default()
    };

    let output = render_state(&state);

    assert!(
        output.contains("ERROR! Unable to retrieve weather data for Chicago!"),
        "Banner text should be visible:\n{}",
        output
    );
}

#[test]
fn test_render_success_banner() {
    let state = AppState {
        banner: BannerMessage {
            text: "Great search results!".into(),
            kind: BannerKind::Success,
        },
        ..Default::default()
    };

    let output = render_state(&state);

    assert!(output.contains("Great search results!"));
}

#[test]
fn test_render_fetching_placeholder() {
    let state = AppState {
        search_query: "Chicago".into(),
        is_fetching: true,
        ..Default::default()
    };

    let output = render_state(&state);

    assert!(output.contains("Searching..."), "Should show fetch placeholder");
    assert!(!output.contains("City:"));
}

#[test]
fn test_render_footer() {
    let output = render_state(&AppState::default());

    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("quit"), "Should show quit hint");
    assert!(
        output.contains("OpenWeather"),
        "Should show the static footer message"
    );
}
