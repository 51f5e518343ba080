use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::{BannerKind, BannerMessage};

/// One-line notification bar. Blank while the message text is empty.
pub struct Banner;

pub struct BannerProps<'a> {
    pub message: &'a BannerMessage,
}

fn kind_style(kind: BannerKind) -> Style {
    match kind {
        BannerKind::Info => Style::default().fg(Color::Cyan),
        BannerKind::Success => Style::default().fg(Color::Green),
        BannerKind::Error => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

impl Component<Action> for Banner {
    type Props<'a> = BannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.message.is_empty() {
            return;
        }

        let line = Line::from(Span::styled(
            props.message.text.as_str(),
            kind_style(props.message.kind),
        ))
        .centered();
        frame.render_widget(Paragraph::new(line), area);
    }
}
