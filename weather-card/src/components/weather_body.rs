//! Body of the card below the selectors
//!
//! Picks one view per request status: a prompt while idle, a spinner while
//! loading, the error message, or the reading with its condition sprite.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use super::{Component, ERROR_ICON, spinner_frame};
use crate::action::Action;
use crate::sprites;
use crate::state::{AppState, RequestStatus, WeatherReading};

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let blocks = blocks_for_state(props.state);

        let constraints = blocks
            .iter()
            .map(|block| Constraint::Length(block.height()));
        let chunks = Layout::vertical(constraints).flex(Flex::Center).split(area);

        for (block, area) in blocks.into_iter().zip(chunks.iter().copied()) {
            block.render(frame, area);
        }
    }
}

enum BodyBlock {
    Line(Line<'static>),
    Sprite { art: Text<'static>, height: u16 },
    /// Value/label pairs laid out two per row
    Grid(Vec<(String, &'static str)>),
}

impl BodyBlock {
    fn height(&self) -> u16 {
        match self {
            BodyBlock::Line(_) => 1,
            BodyBlock::Sprite { height, .. } => *height,
            BodyBlock::Grid(cells) => cells.len().div_ceil(2) as u16 * 2,
        }
    }

    fn render(self, frame: &mut Frame, area: Rect) {
        match self {
            BodyBlock::Line(line) => {
                frame.render_widget(Paragraph::new(line), area);
            }
            BodyBlock::Sprite { art, .. } => {
                frame.render_widget(Paragraph::new(art).alignment(Alignment::Center), area);
            }
            BodyBlock::Grid(cells) => {
                let rows = Layout::vertical(
                    cells
                        .chunks(2)
                        .map(|_| Constraint::Length(2))
                        .collect::<Vec<_>>(),
                )
                .split(area);

                for (pair, row) in cells.chunks(2).zip(rows.iter()) {
                    let columns =
                        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                            .split(*row);
                    for ((value, label), column) in pair.iter().zip(columns.iter()) {
                        let text = Text::from(vec![
                            Line::from(Span::styled(
                                value.clone(),
                                Style::default().fg(Color::White).bold(),
                            ))
                            .centered(),
                            Line::from(Span::styled(*label, Style::default().fg(Color::DarkGray)))
                                .centered(),
                        ]);
                        frame.render_widget(Paragraph::new(text), *column);
                    }
                }
            }
        }
    }
}

fn blocks_for_state(state: &AppState) -> Vec<BodyBlock> {
    match &state.status {
        RequestStatus::Error(error) => vec![
            BodyBlock::Line(Line::from(ERROR_ICON).centered()),
            BodyBlock::Line(
                Line::from(vec![Span::styled(
                    error.clone(),
                    Style::default().fg(Color::Rgb(200, 100, 100)).bold(),
                )])
                .centered(),
            ),
            blank_line(),
            BodyBlock::Line(
                Line::from(vec![
                    Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                    Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                    Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
                ])
                .centered(),
            ),
        ],
        RequestStatus::Success(reading) => reading_blocks(state, reading),
        RequestStatus::Loading => {
            let dots = ".".repeat((state.tick_count as usize / 3) % 4);

            vec![BodyBlock::Line(
                Line::from(vec![
                    Span::styled(
                        spinner_frame(state.tick_count),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!(" Fetching weather{:<3}", dots),
                        Style::default().fg(Color::Gray),
                    ),
                ])
                .centered(),
            )]
        }
        RequestStatus::Idle => {
            let hint = if state.selection.district_enabled() {
                "Now pick a district"
            } else {
                "Pick a state, then a district"
            };
            vec![BodyBlock::Line(
                Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))).centered(),
            )]
        }
    }
}

fn reading_blocks(state: &AppState, reading: &WeatherReading) -> Vec<BodyBlock> {
    let (art, _) = sprites::weather_sprite(&reading.condition, state.terminal_size);
    let sprite_height = art.lines.len() as u16;
    let district = state.fetched_district.clone().unwrap_or_default();

    vec![
        BodyBlock::Sprite {
            art,
            height: sprite_height,
        },
        blank_line(),
        BodyBlock::Line(
            Line::from(vec![Span::styled(
                reading.temperature_label(),
                Style::default()
                    .fg(temp_to_color(reading.temperature_c))
                    .bold(),
            )])
            .centered(),
        ),
        BodyBlock::Line(
            Line::from(vec![Span::styled(
                reading.condition.label().to_string(),
                Style::default().fg(Color::Gray),
            )])
            .centered(),
        ),
        BodyBlock::Line(
            Line::from(vec![Span::styled(
                district,
                Style::default().fg(Color::White).bold(),
            )])
            .centered(),
        ),
        BodyBlock::Line(
            Line::from(vec![Span::styled(
                format!("Today - {}", state.today_label()),
                Style::default().fg(Color::DarkGray),
            )])
            .centered(),
        ),
        blank_line(),
        BodyBlock::Grid(vec![
            (reading.humidity_label(), "Humidity"),
            (reading.wind_label(), "Wind Speed"),
            (reading.feels_like_label(), "Feel Like"),
            (reading.pressure_label(), "Pressure"),
        ]),
    ]
}

fn blank_line() -> BodyBlock {
    BodyBlock::Line(Line::from("").centered())
}

/// Get temperature-based color
fn temp_to_color(celsius: i32) -> Color {
    match celsius {
        ..=-10 => Color::Rgb(150, 200, 255),  // Very cold - light blue
        -9..=0 => Color::Rgb(100, 180, 255),  // Cold - blue
        1..=10 => Color::Rgb(100, 220, 200),  // Cool - cyan
        11..=20 => Color::Rgb(150, 230, 150), // Mild - green
        21..=30 => Color::Rgb(255, 220, 100), // Warm - yellow
        31..=40 => Color::Rgb(255, 150, 80),  // Hot - orange
        _ => Color::Rgb(255, 100, 100),       // Very hot - red
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Condition;
    use tui_dispatch::testing::RenderHarness;

    fn render(state: &AppState) -> String {
        let mut harness = RenderHarness::new(60, 26);
        harness.render_to_string_plain(|frame| {
            WeatherBody.render(frame, frame.area(), WeatherBodyProps { state });
        })
    }

    #[test]
    fn test_idle_prompt() {
        let state = AppState::default();
        assert!(render(&state).contains("Pick a state, then a district"));
    }

    #[test]
    fn test_error_hides_reading() {
        let state = AppState {
            status: RequestStatus::Error("Error fetching weather".into()),
            ..Default::default()
        };
        let output = render(&state);
        assert!(output.contains("Error fetching weather"));
        assert!(!output.contains("Humidity"));
    }

    #[test]
    fn test_reading_grid() {
        let state = AppState {
            status: RequestStatus::Success(WeatherReading {
                temperature_c: -3,
                feels_like_c: -8,
                humidity_pct: 81.0,
                wind_speed_kmh: 3.6,
                pressure_hpa: 1021.0,
                condition: Condition::Mist,
            }),
            ..Default::default()
        };
        let output = render(&state);
        assert!(output.contains("-3°C"));
        assert!(output.contains("-8°C"));
        assert!(output.contains("3.6 km/h"));
        assert!(output.contains("Feel Like"));
        assert!(output.contains("Mist"));
    }

    #[test]
    fn test_temp_colors() {
        assert_eq!(temp_to_color(31), Color::Rgb(255, 150, 80));
        assert_eq!(temp_to_color(-20), Color::Rgb(150, 200, 255));
    }
}
