//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::directory::LocationDirectory;
use crate::selection::Selection;

/// Animation tick for the loading spinner
pub const LOADING_ANIM_TICK_MS: u64 = 80;

/// Condition keyword reported by the provider (`weather[0].main`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Mist,
    Snow,
    /// Any keyword not listed above, kept verbatim
    Other(String),
}

impl Condition {
    /// Exact, case-sensitive match on the provider keyword
    pub fn from_provider(keyword: &str) -> Self {
        match keyword {
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Rain" => Condition::Rain,
            "Drizzle" => Condition::Drizzle,
            "Mist" => Condition::Mist,
            "Snow" => Condition::Snow,
            other => Condition::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Drizzle => "Drizzle",
            Condition::Mist => "Mist",
            Condition::Snow => "Snow",
            Condition::Other(keyword) => keyword,
        }
    }
}

/// Normalized current conditions for one district
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub pressure_hpa: f64,
    pub condition: Condition,
}

impl WeatherReading {
    pub fn temperature_label(&self) -> String {
        format!("{}°C", self.temperature_c)
    }

    pub fn feels_like_label(&self) -> String {
        format!("{}°C", self.feels_like_c)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity_pct)
    }

    pub fn wind_label(&self) -> String {
        format!("{} km/h", self.wind_speed_kmh)
    }

    pub fn pressure_label(&self) -> String {
        format!("{} hPa", self.pressure_hpa)
    }
}

/// Lifecycle of the weather lookup
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success(WeatherReading),
    Error(String),
}

impl RequestStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        match self {
            RequestStatus::Success(reading) => Some(reading),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Drop a shown error; a reading or a pending fetch is left alone
    pub fn clear_error(&mut self) {
        if matches!(self, RequestStatus::Error(_)) {
            *self = RequestStatus::Idle;
        }
    }
}

/// Which selector has keyboard focus
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    State,
    District,
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug)]
pub struct AppState {
    /// Static location data shared with the reducer
    pub directory: Arc<LocationDirectory>,

    /// State names offered by the state selector
    pub states: Vec<String>,

    pub selection: Selection,

    pub status: RequestStatus,

    /// Id of the most recently issued fetch; older results are discarded
    pub latest_request: u64,

    /// District the latest fetch asked for; names the reading on screen
    pub fetched_district: Option<String>,

    pub focus: Field,

    /// Date shown on the card, captured once at startup
    pub today: NaiveDate,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,

    /// Terminal dimensions (for sprite sizing)
    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(directory: Arc<LocationDirectory>, today: NaiveDate) -> Self {
        Self {
            states: directory.list_states(),
            directory,
            selection: Selection::new(),
            status: RequestStatus::Idle,
            latest_request: 0,
            fetched_district: None,
            focus: Field::State,
            today,
            tick_count: 0,
            terminal_size: (80, 24), // Default, updated on resize
        }
    }

    /// Date in the `M/D/YYYY` form used on the card
    pub fn today_label(&self) -> String {
        self.today.format("%-m/%-d/%Y").to_string()
    }
}

impl Default for AppState {
    fn default() -> Self {
        let directory = LocationDirectory::embedded().unwrap_or_default();
        Self::new(Arc::new(directory), NaiveDate::default())
    }
}
