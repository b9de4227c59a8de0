//! Actions
//!
//! Naming follows the intent/result convention:
//! - prefix is the category: `Selection*`, `Weather*`, `Ui*`
//! - `Did` marks the result of async work

use crate::error::FetchError;
use crate::state::WeatherReading;
use tui_dispatch::ActionSummary;

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Selection category =====
    /// Pick a state (`None` = the "None" entry)
    SelectionState(Option<String>),

    /// Pick a district of the current state; a name triggers a fetch
    SelectionDistrict(Option<String>),

    // ===== Weather category =====
    /// Result: reading for request `request_id`
    WeatherDidLoad {
        request_id: u64,
        reading: WeatherReading,
    },

    /// Result: request `request_id` failed
    WeatherDidError { request_id: u64, error: FetchError },

    // ===== UI category =====
    /// Move keyboard focus to the other selector
    UiFocusNext,

    /// Terminal was resized - update sprite sizing
    UiTerminalResize(u16, u16),

    // ===== Uncategorized (global) =====
    /// Periodic tick for loading animation
    Tick,

    /// Exit the application
    Quit,
}

/// Concise log line for data-heavy results
impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::WeatherDidLoad {
                request_id,
                reading,
            } => format!(
                "WeatherDidLoad {{ request: {}, temp: {}°C, condition: {} }}",
                request_id,
                reading.temperature_c,
                reading.condition.label()
            ),
            Action::WeatherDidError { request_id, error } => {
                format!("WeatherDidError {{ request: {}, error: {:?} }}", request_id, error)
            }
            _ => format!("{:?}", self),
        }
    }
}
