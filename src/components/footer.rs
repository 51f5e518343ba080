use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::Component;
use crate::action::Action;

/// Key hints plus the static footer message
pub struct Footer;

pub struct FooterProps<'a> {
    pub message: &'a str,
}

impl Component<Action> for Footer {
    type Props<'a> = FooterProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Hint bar
            Constraint::Length(1), // Message
        ])
        .split(area);

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[0],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("ctrl+u", "clear input"),
                    StatusBarHint::new("ctrl+d", "clear data"),
                    StatusBarHint::new("ctrl+b", "dismiss banner"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );

        let message = Line::from(Span::styled(
            props.message,
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(message), chunks[1]);
    }
}
