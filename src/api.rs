//! OpenWeather API client

use serde::Deserialize;

use crate::state::WeatherData;

/// Current-weather API response from OpenWeather
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: String,
    weather: Vec<WeatherCondition>,
    main: MainReadings,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

/// Fetch error type. Network failures and non-2xx statuses both surface to
/// the user as the same banner message.
#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    Status(reqwest::StatusCode),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "Weather request failed: {}", e),
            FetchError::Status(status) => {
                write!(f, "Weather request returned status {}", status)
            }
        }
    }
}

impl std::error::Error for FetchError {}

fn weather_from_response(response: WeatherResponse) -> WeatherData {
    let (summary, description) = response
        .weather
        .into_iter()
        .next()
        .map(|c| (c.main, c.description))
        .unwrap_or_default();
    WeatherData {
        city: response.name,
        weather_summary: summary,
        weather_description: description,
        current_temperature: response.main.temp,
        low_temperature: response.main.temp_min,
        high_temperature: response.main.temp_max,
    }
}

/// Fetch current weather for a city from the OpenWeather API
pub async fn fetch_current_weather(city: &str, api_key: &str) -> Result<WeatherData, FetchError> {
    let url = format!(
        "https://api.openweathermap.org/data/2.5/weather?q={}&appid={}&units=imperial",
        urlencoding::encode(city),
        api_key
    );

    let response = reqwest::get(&url).await.map_err(FetchError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let data: WeatherResponse = response.json().await.map_err(FetchError::Request)?;

    Ok(weather_from_response(data))
}
