use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

/// City search input with its two action buttons. Both buttons are
/// disabled while the input is empty; Enter on an empty input is swallowed
/// for the same reason.
pub struct SearchForm {
    input: TextInput,
}

pub struct SearchFormProps<'a> {
    pub query: &'a str,
    pub enabled: bool,
    pub is_focused: bool,
    // Action constructors
    pub on_query_change: fn(String) -> Action,
    pub on_query_submit: fn(String) -> Action,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_style() -> TextInputStyle {
        TextInputStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::all(1),
                bg: Some(Color::Rgb(50, 50, 60)),
                fg: None,
            },
            placeholder_style: None,
            cursor_style: None,
        }
    }

    fn button_line(enabled: bool) -> Line<'static> {
        let key_style = if enabled {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label_style = if enabled {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Line::from(vec![
            Span::styled("[Enter]", key_style),
            Span::styled(" Search", label_style),
            Span::raw("   "),
            Span::styled("[Ctrl+U]", key_style),
            Span::styled(" Clear", label_style),
        ])
        .centered()
    }
}

impl Component<Action> for SearchForm {
    type Props<'a> = SearchFormProps<'a>;

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

        // Enter is gated on the enabled predicate, like the Search button
        if key.code == KeyCode::Enter {
            if props.enabled {
                return vec![(props.on_query_submit)(props.query.to_string())];
            }
            return Vec::new();
        }

        // All other keys go to the input
        let input_props = TextInputProps {
            value: props.query,
            placeholder: "Insert a city name...",
            is_focused: true,
            style: Self::input_style(),
            on_change: props.on_query_change,
            on_submit: props.on_query_submit,
            on_cursor_move: Some(|_| Action::Render),
        };

        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Buttons
        ])
        .split(area);

        let input_props = TextInputProps {
            value: props.query,
            placeholder: "Insert a city name...",
            is_focused: props.is_focused,
            style: Self::input_style(),
            on_change: props.on_query_change,
            on_submit: props.on_query_submit,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, chunks[0], input_props);

        frame.render_widget(Paragraph::new(Self::button_line(props.enabled)), chunks[1]);
    }
}
