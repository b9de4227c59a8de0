//! Dropdown selector
//!
//! A one-line field that opens into a scrollable list. The first entry is
//! always "None", which clears the selection.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use tui_dispatch::EventKind;

use super::Component;

const NONE_LABEL: &str = "None";

/// Props for Dropdown component
pub struct DropdownProps<'a, A> {
    /// Field title
    pub label: &'a str,
    /// Choices, not including the leading "None" entry
    pub options: &'a [String],
    /// Currently selected option
    pub selected: Option<&'a str>,
    /// Shown in the field while nothing is selected
    pub placeholder: &'a str,
    pub is_focused: bool,
    pub is_disabled: bool,
    /// Callback to create action when an entry is confirmed
    pub on_select: fn(Option<String>) -> A,
}

impl<A> DropdownProps<'_, A> {
    fn entry_count(&self) -> usize {
        self.options.len() + 1
    }

    /// Row of the current selection; unknown or empty selections sit on "None"
    fn selected_index(&self) -> usize {
        self.selected
            .and_then(|s| self.options.iter().position(|o| o == s))
            .map_or(0, |i| i + 1)
    }

    fn entry(&self, index: usize) -> Option<String> {
        index
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .cloned()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
    /// Highlighted row while open (0 = "None")
    highlighted: usize,
    /// Scroll offset for viewport
    scroll_offset: usize,
}

impl Dropdown {
    /// Height of the closed field including borders
    pub const FIELD_HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn open_at(&mut self, index: usize) {
        self.open = true;
        self.highlighted = index;
        self.scroll_offset = 0;
    }

    /// Ensure the highlighted row is visible within the viewport
    fn ensure_visible(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if self.highlighted < self.scroll_offset {
            self.scroll_offset = self.highlighted;
        } else if self.highlighted >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.highlighted.saturating_sub(viewport_height - 1);
        }
    }

    /// Render the open list as a popup below `field`, clipped to `bounds`.
    ///
    /// Call after everything else so the popup draws on top.
    pub fn render_list<A>(
        &mut self,
        frame: &mut Frame,
        field: Rect,
        bounds: Rect,
        props: &DropdownProps<'_, A>,
    ) {
        if !self.open {
            return;
        }

        let top = field.bottom().saturating_sub(1);
        let available = bounds.bottom().saturating_sub(top);
        let wanted = props.entry_count() as u16 + 2;
        let area = Rect {
            x: field.x,
            y: top,
            width: field.width,
            height: wanted.min(available),
        };
        if area.height < 3 {
            return;
        }

        let viewport_height = area.height.saturating_sub(2) as usize;
        self.ensure_visible(viewport_height);

        let items: Vec<ListItem> = std::iter::once(NONE_LABEL)
            .chain(props.options.iter().map(String::as_str))
            .enumerate()
            .map(|(i, item)| {
                let style = if i == 0 {
                    Style::default().fg(Color::DarkGray).italic()
                } else {
                    Style::default()
                };
                ListItem::new(Line::raw(item)).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default().with_selected(Some(self.highlighted));
        *state.offset_mut() = self.scroll_offset;

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl<A> Component<A> for Dropdown {
    type Props<'a> = DropdownProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.is_disabled {
            self.open = false;
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };

        if !self.open {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down
            ) {
                self.open_at(props.selected_index());
            }
            return None;
        }

        let last = props.entry_count() - 1;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.highlighted = (self.highlighted + 1).min(last);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            KeyCode::Home => {
                self.highlighted = 0;
                None
            }
            KeyCode::End => {
                self.highlighted = last;
                None
            }
            KeyCode::Enter => {
                self.open = false;
                Some((props.on_select)(props.entry(self.highlighted)))
            }
            KeyCode::Esc => {
                self.open = false;
                None
            }
            // Swallow everything else while open
            _ => None,
        }
    }

    /// Render the closed field; see [`Dropdown::render_list`] for the popup
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_style = if props.is_disabled {
            Style::default().fg(Color::Rgb(60, 60, 70))
        } else if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Rgb(80, 80, 100))
        };

        let value = match props.selected {
            Some(selected) if !props.is_disabled => Span::styled(
                selected.to_string(),
                Style::default().fg(Color::White).bold(),
            ),
            _ => Span::styled(
                props.placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };
        let arrow = if self.open { "▴" } else { "▾" };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", props.label));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = Line::from(vec![Span::raw(" "), value]);
        frame.render_widget(Paragraph::new(line), inner);

        if !props.is_disabled && inner.width > 2 {
            let arrow_area = Rect {
                x: inner.right().saturating_sub(2),
                width: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new(Span::styled(arrow, border_style)),
                arrow_area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::{RenderHarness, key};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Select(Option<String>),
    }

    fn options() -> Vec<String> {
        vec!["Chennai".into(), "Madurai".into(), "Salem".into()]
    }

    fn props<'a>(options: &'a [String], selected: Option<&'a str>) -> DropdownProps<'a, TestAction> {
        DropdownProps {
            label: "District",
            options,
            selected,
            placeholder: "None",
            is_focused: true,
            is_disabled: false,
            on_select: TestAction::Select,
        }
    }

    fn press(dropdown: &mut Dropdown, k: &str, props: DropdownProps<'_, TestAction>) -> Vec<TestAction> {
        dropdown
            .handle_event(&EventKind::Key(key(k)), props)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_enter_opens_on_current_selection() {
        let opts = options();
        let mut dropdown = Dropdown::new();

        let actions = press(&mut dropdown, "enter", props(&opts, Some("Madurai")));

        assert!(actions.is_empty());
        assert!(dropdown.is_open());
        assert_eq!(dropdown.highlighted, 2);
    }

    #[test]
    fn test_navigate_and_confirm() {
        let opts = options();
        let mut dropdown = Dropdown::new();
        press(&mut dropdown, "space", props(&opts, None));
        assert_eq!(dropdown.highlighted, 0);

        press(&mut dropdown, "j", props(&opts, None));
        press(&mut dropdown, "down", props(&opts, None));
        let actions = press(&mut dropdown, "enter", props(&opts, None));

        assert_eq!(actions, vec![TestAction::Select(Some("Madurai".into()))]);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_none_entry_clears() {
        let opts = options();
        let mut dropdown = Dropdown::new();
        press(&mut dropdown, "enter", props(&opts, Some("Salem")));

        press(&mut dropdown, "home", props(&opts, Some("Salem")));
        let actions = press(&mut dropdown, "enter", props(&opts, Some("Salem")));

        assert_eq!(actions, vec![TestAction::Select(None)]);
    }

    #[test]
    fn test_navigate_at_bounds() {
        let opts = options();
        let mut dropdown = Dropdown::new();
        press(&mut dropdown, "enter", props(&opts, None));

        press(&mut dropdown, "k", props(&opts, None));
        assert_eq!(dropdown.highlighted, 0);

        press(&mut dropdown, "end", props(&opts, None));
        press(&mut dropdown, "j", props(&opts, None));
        assert_eq!(dropdown.highlighted, 3);
    }

    #[test]
    fn test_esc_closes_without_selecting() {
        let opts = options();
        let mut dropdown = Dropdown::new();
        press(&mut dropdown, "enter", props(&opts, None));

        let actions = press(&mut dropdown, "esc", props(&opts, None));

        assert!(actions.is_empty());
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_disabled_ignores_events() {
        let opts: Vec<String> = Vec::new();
        let mut dropdown = Dropdown::new();
        let mut p = props(&opts, None);
        p.is_disabled = true;

        let actions = press(&mut dropdown, "enter", p);

        assert!(actions.is_empty());
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_unfocused_ignores_events() {
        let opts = options();
        let mut dropdown = Dropdown::new();
        let mut p = props(&opts, None);
        p.is_focused = false;

        press(&mut dropdown, "enter", p);

        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_render_field_and_list() {
        let opts = options();
        let mut render = RenderHarness::new(30, 10);
        let mut dropdown = Dropdown::new();
        press(&mut dropdown, "enter", props(&opts, Some("Chennai")));

        let output = render.render_to_string_plain(|frame| {
            let field = Rect::new(0, 0, 30, Dropdown::FIELD_HEIGHT);
            let bounds = frame.area();
            dropdown.render(frame, field, props(&opts, Some("Chennai")));
            dropdown.render_list(frame, field, bounds, &props(&opts, Some("Chennai")));
        });

        assert!(output.contains("District"));
        assert!(output.contains("Chennai"));
        assert!(output.contains("None"));
        assert!(output.contains("Salem"));
    }

    #[test]
    fn test_render_disabled_shows_placeholder() {
        let opts: Vec<String> = Vec::new();
        let mut render = RenderHarness::new(30, 3);
        let mut dropdown = Dropdown::new();

        let output = render.render_to_string_plain(|frame| {
            let mut p = props(&opts, None);
            p.placeholder = "Select a state first";
            p.is_disabled = true;
            dropdown.render(frame, frame.area(), p);
        });

        assert!(output.contains("Select a state first"));
    }
}
