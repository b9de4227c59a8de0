//! The weather card: two selectors over the weather body
//!
//! Key routing: an open dropdown gets every key first. Otherwise Tab /
//! Shift-Tab move focus, `r` / F5 refresh, `q` / Esc quit, and the rest goes
//! to the focused selector.

use crossterm::event::KeyCode;
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
};

use tui_dispatch::EventKind;

use super::{
    Component, Dropdown, DropdownProps, HelpBar, HelpBarProps, WeatherBody, WeatherBodyProps,
    spinner_frame,
};
use crate::action::Action;
use crate::state::{AppState, Field};

/// Props for WeatherCard - read-only view of state
pub struct WeatherCardProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The top-level weather card component
///
/// Holds dropdown view state only; compare two snapshots to learn whether an
/// event changed what is on screen without producing an action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeatherCard {
    state_picker: Dropdown,
    district_picker: Dropdown,
}

impl WeatherCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.state_picker.is_open() || self.district_picker.is_open()
    }

    fn state_props<'a>(state: &'a AppState, is_focused: bool) -> DropdownProps<'a, Action> {
        DropdownProps {
            label: "State",
            options: &state.states,
            selected: state.selection.state(),
            placeholder: "None",
            is_focused: is_focused && state.focus == Field::State,
            is_disabled: false,
            on_select: Action::SelectionState,
        }
    }

    fn district_props<'a>(state: &'a AppState, is_focused: bool) -> DropdownProps<'a, Action> {
        let enabled = state.selection.district_enabled();
        DropdownProps {
            label: "District",
            options: state.selection.districts(),
            selected: state.selection.district(),
            placeholder: if enabled { "None" } else { "Select a state first" },
            is_focused: is_focused && state.focus == Field::District,
            is_disabled: !enabled,
            on_select: Action::SelectionDistrict,
        }
    }

    fn route_to_picker(&mut self, event: &EventKind, props: &WeatherCardProps<'_>) -> Vec<Action> {
        let state = props.state;
        match state.focus {
            Field::State => self
                .state_picker
                .handle_event(event, Self::state_props(state, props.is_focused))
                .into_iter()
                .collect(),
            Field::District => self
                .district_picker
                .handle_event(event, Self::district_props(state, props.is_focused))
                .into_iter()
                .collect(),
        }
    }
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return vec![];
        }

        if self.is_dropdown_open() {
            return self.route_to_picker(event, &props);
        }

        let EventKind::Key(key) = event else {
            return vec![];
        };

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => vec![Action::UiFocusNext],
            KeyCode::Char('r') | KeyCode::F(5) => props
                .state
                .selection
                .district()
                .map(|d| Action::SelectionDistrict(Some(d.to_string())))
                .into_iter()
                .collect(),
            KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
            _ => self.route_to_picker(event, &props),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        // Loading indicator for title
        let loading_indicator = if state.status.is_loading() {
            format!(" {} ", spinner_frame(state.tick_count))
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" ☁ Weather{}", loading_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let [selectors, body_area, help_area] = Layout::vertical([
            Constraint::Length(Dropdown::FIELD_HEIGHT),
            Constraint::Min(1),    // Main content (centered by WeatherBody)
            Constraint::Length(1), // Help bar
        ])
        .areas(inner);

        let [state_area, district_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(selectors);

        self.state_picker.render(
            frame,
            state_area,
            Self::state_props(state, props.is_focused),
        );
        self.district_picker.render(
            frame,
            district_area,
            Self::district_props(state, props.is_focused),
        );

        let mut body = WeatherBody;
        body.render(frame, body_area, WeatherBodyProps { state });

        let mut help = HelpBar;
        help.render(
            frame,
            help_area,
            HelpBarProps {
                dropdown_open: self.is_dropdown_open(),
            },
        );

        // Popups last so they draw over the body
        self.state_picker.render_list(
            frame,
            state_area,
            inner,
            &Self::state_props(state, props.is_focused),
        );
        self.district_picker.render_list(
            frame,
            district_area,
            inner,
            &Self::district_props(state, props.is_focused),
        );
    }
}
