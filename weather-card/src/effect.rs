//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and handled by the main loop.
//! This keeps the reducer pure while making async operations explicit.

/// Task key shared by every weather fetch, so a new fetch aborts the old one
pub const WEATHER_TASK: &str = "weather";

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Look up current weather for `district`, tagged with its request id
    FetchWeather { district: String, request_id: u64 },
}
