use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;

use super::{
    Banner, BannerProps, Component, Footer, FooterProps, Header, HeaderProps, ResultsPanel,
    ResultsPanelProps, SearchForm, SearchFormProps,
};
use crate::action::Action;
use crate::state::AppState;

pub const APP_TITLE: &str = "Weather Search";
pub const FOOTER_MESSAGE: &str = "Weather data provided by OpenWeather";

/// Props for WeatherSearch - read-only view of state
pub struct WeatherSearchProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The root component: header, banner, search form, results, footer
pub struct WeatherSearch {
    form: SearchForm,
}

impl Default for WeatherSearch {
    fn default() -> Self {
        Self {
            form: SearchForm::new(),
        }
    }
}

impl WeatherSearch {
    pub fn new() -> Self {
        Self::default()
    }

    fn form_props<'a>(state: &'a AppState, is_focused: bool) -> SearchFormProps<'a> {
        SearchFormProps {
            query: &state.search_query,
            enabled: state.search_enabled(),
            is_focused,
            on_query_change: Action::SearchQueryChange,
            on_query_submit: Action::SearchQuerySubmit,
        }
    }
}

impl Component<Action> for WeatherSearch {
    type Props<'a> = WeatherSearchProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        // Control chords stay out of the text input's way
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => vec![Action::SearchClear],
                KeyCode::Char('d') => vec![Action::WeatherReset],
                KeyCode::Char('b') => vec![Action::BannerClear],
                _ => Vec::new(),
            };
        }

        if key.code == KeyCode::Esc {
            return vec![Action::Quit];
        }

        self.form
            .handle_event(event, Self::form_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Max(6),    // FIGlet title
            Constraint::Length(1), // Banner
            Constraint::Length(4), // Search form
            Constraint::Min(1),    // Results
            Constraint::Length(2), // Footer
        ])
        .split(area);

        let mut header = Header;
        header.render(frame, chunks[0], HeaderProps { title: APP_TITLE });

        let mut banner = Banner;
        banner.render(
            frame,
            chunks[1],
            BannerProps {
                message: &props.state.banner,
            },
        );

        self.form.render(
            frame,
            chunks[2],
            Self::form_props(props.state, props.is_focused),
        );

        let mut results = ResultsPanel;
        results.render(
            frame,
            chunks[3],
            ResultsPanelProps {
                weather: &props.state.weather,
                valid_weather_data: props.state.valid_weather_data,
                is_fetching: props.state.is_fetching,
            },
        );

        let mut footer = Footer;
        footer.render(
            frame,
            chunks[4],
            FooterProps {
                message: FOOTER_MESSAGE,
            },
        );
    }
}
