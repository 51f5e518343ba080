use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::prelude::{Frame, Rect};

use super::Component;
use crate::action::Action;

/// FIGlet application title. Falls back to plain text when the area is
/// too small for a font.
pub struct Header;

pub struct HeaderProps<'a> {
    pub title: &'a str,
}

fn title_gradient() -> Fill {
    Fill::Linear(LinearGradient::horizontal(
        ArtColor::rgb(100, 180, 255),
        ArtColor::rgb(150, 220, 200),
    ))
}

impl Component<Action> for Header {
    type Props<'a> = HeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(title_gradient());

        let title_widget = ArtBox::new(&renderer, props.title);
        frame.render_widget(title_widget, area);
    }
}
