//! UI components
//!
//! A component turns events into actions and renders from read-only props.
//! Local view state (an open dropdown, a highlighted row) lives on the
//! component; everything else comes from `AppState`.

pub mod dropdown;
pub mod help_bar;
pub mod weather_body;
pub mod weather_card;

pub use tui_dispatch::Component;

pub use dropdown::{Dropdown, DropdownProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_card::{WeatherCard, WeatherCardProps};

pub const ERROR_ICON: &str = "⚠️";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Spinner frame for the given animation tick
pub fn spinner_frame(tick_count: u32) -> &'static str {
    SPINNERS[(tick_count as usize / 2) % SPINNERS.len()]
}
