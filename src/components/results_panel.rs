use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherData;

/// Weather result fields, shown only while the held data is valid.
pub struct ResultsPanel;

pub struct ResultsPanelProps<'a> {
    pub weather: &'a WeatherData,
    pub valid_weather_data: bool,
    pub is_fetching: bool,
}

fn heading_line(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn field_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn result_lines(weather: &WeatherData) -> Vec<Line<'static>> {
    vec![
        heading_line("Weather Summary"),
        field_line("City: ", weather.city.clone()),
        field_line("Summary: ", weather.weather_summary.clone()),
        field_line("Details: ", weather.weather_description.clone()),
        Line::raw(""),
        heading_line("Temperatures"),
        field_line("Current: ", format!("{}° F", weather.current_temperature)),
        field_line("High (Today): ", format!("{}° F", weather.high_temperature)),
        field_line("Low (Today): ", format!("{}° F", weather.low_temperature)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Ctrl+D]", Style::default().fg(Color::Cyan)),
            Span::styled(" Clear Weather Data", Style::default().fg(Color::Gray)),
        ]),
    ]
}

impl Component<Action> for ResultsPanel {
    type Props<'a> = ResultsPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.valid_weather_data {
            frame.render_widget(Paragraph::new(result_lines(props.weather)), area);
            return;
        }

        if props.is_fetching {
            let line = Line::from(Span::styled(
                "Searching...",
                Style::default().fg(Color::DarkGray),
            ))
            .centered();
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}
