use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

pub struct HelpBar;

pub struct HelpBarProps {
    /// A dropdown is open, so list keys apply instead
    pub dropdown_open: bool,
}

impl HelpBar {
    fn bindings(dropdown_open: bool) -> &'static [(&'static str, &'static str)] {
        if dropdown_open {
            &[("↑↓", "move"), ("enter", "choose"), ("esc", "close")]
        } else {
            &[
                ("tab", "switch"),
                ("enter", "open"),
                ("r", "refresh"),
                ("q", "quit"),
            ]
        }
    }
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let bindings = Self::bindings(props.dropdown_open);
        let mut spans = Vec::with_capacity(bindings.len() * 2);
        for (i, (key, label)) in bindings.iter().enumerate() {
            let key = if i == 0 {
                format!(" {}", key)
            } else {
                key.to_string()
            };
            spans.push(Span::styled(key, Style::default().fg(Color::Cyan).bold()));
            spans.push(Span::styled(
                format!(" {}  ", label),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
