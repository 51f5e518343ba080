//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, BannerMessage, WeatherData};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchQueryChange(query) => {
            state.search_query = query;
            DispatchResult::changed()
        }

        Action::SearchQuerySubmit(query) => {
            let city = query.trim().to_string();
            if city.is_empty() {
                // The Search button is disabled without input
                return DispatchResult::unchanged();
            }
            state.search_query = city.clone();
            state.banner = BannerMessage::default();
            state.is_fetching = true;
            DispatchResult::changed_with(Effect::FetchWeather { city })
        }

        Action::SearchClear => {
            if state.search_query.is_empty() {
                return DispatchResult::unchanged();
            }
            state.search_query.clear();
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherDidLoad(data) => {
            state.weather = data;
            state.valid_weather_data = true;
            state.is_fetching = false;
            DispatchResult::changed()
        }

        Action::WeatherDidError(city) => {
            // The held weather data is deliberately left in place; only the
            // valid flag gates the results panel.
            state.valid_weather_data = false;
            state.is_fetching = false;
            state.banner = BannerMessage::error(format!(
                "ERROR! Unable to retrieve weather data for {}!",
                city
            ));
            DispatchResult::changed()
        }

        Action::WeatherReset => {
            state.weather = WeatherData::default();
            state.valid_weather_data = false;
            DispatchResult::changed()
        }

        // ===== Banner actions =====
        Action::BannerClear => {
            if state.banner.is_empty() {
                return DispatchResult::unchanged();
            }
            state.banner = BannerMessage::default();
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BannerKind;

    fn sample_weather() -> WeatherData {
        WeatherData {
            city: "Boise".into(),
            weather_summary: "Sunny".into(),
            weather_description: "No clouds in the sky".into(),
            current_temperature: 75.5,
            low_temperature: 48.9,
            high_temperature: 78.6,
        }
    }

    #[test]
    fn test_submit_sets_fetching_and_emits_effect() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::SearchQuerySubmit("Chicago".into()));

        assert!(result.changed);
        assert!(state.is_fetching);
        assert_eq!(state.search_query, "Chicago");
        assert_eq!(result.effects.len(), 1);
        assert!(matches!(
            &result.effects[0],
            Effect::FetchWeather { city } if city == "Chicago"
        ));
    }

    #[test]
    fn test_submit_empty_query_is_ignored() {
        let mut state = AppState::default();

        let result = reducer(&mut state, Action::SearchQuerySubmit("   ".into()));

        assert!(!result.changed);
        assert!(!state.is_fetching);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_submit_clears_previous_banner() {
        let mut state = AppState {
            banner: BannerMessage::error("stale failure"),
            search_query: "Denver".into(),
            ..Default::default()
        };

        reducer(&mut state, Action::SearchQuerySubmit("Denver".into()));

        assert!(state.banner.is_empty());
        assert_eq!(state.banner.kind, BannerKind::Info);
    }

    #[test]
    fn test_did_load_marks_data_valid() {
        let mut state = AppState {
            is_fetching: true,
            ..Default::default()
        };

        let weather = sample_weather();
        let result = reducer(&mut state, Action::WeatherDidLoad(weather.clone()));

        assert!(result.changed);
        assert_eq!(state.weather, weather);
        assert!(state.valid_weather_data);
        assert!(!state.is_fetching);
    }

    #[test]
    fn test_did_error_sets_banner_and_keeps_data() {
        let mut state = AppState {
            weather: sample_weather(),
            valid_weather_data: true,
            is_fetching: true,
            ..Default::default()
        };

        let result = reducer(&mut state, Action::WeatherDidError("Chicago".into()));

        assert!(result.changed);
        assert!(!state.valid_weather_data);
        assert!(!state.is_fetching);
        assert_eq!(
            state.banner.text,
            "ERROR! Unable to retrieve weather data for Chicago!"
        );
        assert_eq!(state.banner.kind, BannerKind::Error);
        // Stale data survives; the panel is gated off by the flag
        assert_eq!(state.weather, sample_weather());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = AppState {
            weather: sample_weather(),
            valid_weather_data: true,
            ..Default::default()
        };

        let result = reducer(&mut state, Action::WeatherReset);

        assert!(result.changed);
        assert_eq!(state.weather, WeatherData::default());
        assert!(!state.valid_weather_data);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_reset_leaves_banner_alone() {
        let mut state = AppState {
            banner: BannerMessage::error("still here"),
            ..Default::default()
        };

        reducer(&mut state, Action::WeatherReset);

        assert_eq!(state.banner.text, "still here");
    }

    #[test]
    fn test_banner_clear() {
        let mut state = AppState {
            banner: BannerMessage {
                text: "Great search results!".into(),
                kind: BannerKind::Success,
            },
            ..Default::default()
        };

        let result = reducer(&mut state, Action::BannerClear);

        assert!(result.changed);
        assert!(state.banner.is_empty());
        assert_eq!(state.banner.kind, BannerKind::Info);

        // Clearing an already-empty banner is a no-op
        let result = reducer(&mut state, Action::BannerClear);
        assert!(!result.changed);
    }

    #[test]
    fn test_search_clear() {
        let mut state = AppState {
            search_query: "Chi".into(),
            ..Default::default()
        };

        let result = reducer(&mut state, Action::SearchClear);
        assert!(result.changed);
        assert!(state.search_query.is_empty());

        let result = reducer(&mut state, Action::SearchClear);
        assert!(!result.changed);
    }
}
