//! Command-line and environment configuration

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::api::DEFAULT_BASE_URL;
use crate::directory::LocationDirectory;
use crate::error::{ConfigError, SelectionError};

/// Weather card - pick a state, then a district, see current conditions
#[derive(Parser, Debug, Clone)]
#[command(name = "weather-card", version)]
#[command(about = "Terminal weather card for Indian states and districts")]
pub struct Args {
    /// OpenWeatherMap API key
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Current-weather endpoint
    #[arg(long, env = "OPENWEATHER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// JSON file with states and districts (defaults to the built-in list)
    #[arg(long, env = "WEATHER_CARD_LOCATIONS")]
    pub locations: Option<PathBuf>,

    /// State to select on startup
    #[arg(long)]
    pub state: Option<String>,

    /// District to select on startup (requires --state)
    #[arg(long, requires = "state")]
    pub district: Option<String>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long, env = "WEATHER_CARD_LOG")]
    pub log_file: Option<PathBuf>,
}

/// Validated startup configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub directory: Arc<LocationDirectory>,
    pub initial_state: Option<String>,
    pub initial_district: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load the location data and check the preselection against it
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let directory = match &args.locations {
            Some(path) => LocationDirectory::load(path)?,
            None => LocationDirectory::embedded()?,
        };

        if let Some(state) = &args.state {
            if !directory.contains_state(state) {
                return Err(ConfigError::UnknownState(state.clone()));
            }
        }

        if let Some(district) = &args.district {
            let Some(state) = &args.state else {
                return Err(SelectionError::NoStateSelected.into());
            };
            if !directory.contains_district(state, district) {
                return Err(SelectionError::UnknownDistrict {
                    state: state.clone(),
                    district: district.clone(),
                }
                .into());
            }
        }

        Ok(Self {
            api_key: args.api_key,
            base_url: args.base_url,
            directory: Arc::new(directory),
            initial_state: args.state,
            initial_district: args.district,
            log_file: args.log_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["weather-card", "--api-key", "k"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(parse(&[])).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.directory.contains_state("Tamil Nadu"));
        assert_eq!(config.initial_state, None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_preselection_accepted() {
        let config =
            Config::from_args(parse(&["--state", "Tamil Nadu", "--district", "Chennai"])).unwrap();
        assert_eq!(config.initial_state.as_deref(), Some("Tamil Nadu"));
        assert_eq!(config.initial_district.as_deref(), Some("Chennai"));
    }

    #[test]
    fn test_unknown_state_rejected() {
        let err = Config::from_args(parse(&["--state", "Atlantis"])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownState(s) if s == "Atlantis"));
    }

    #[test]
    fn test_district_outside_state_rejected() {
        let err =
            Config::from_args(parse(&["--state", "Goa", "--district", "Chennai"])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Selection(SelectionError::UnknownDistrict { .. })
        ));
    }

    #[test]
    fn test_district_requires_state() {
        let result = Args::try_parse_from(["weather-card", "--api-key", "k", "--district", "Chennai"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_locations_file() {
        let path = std::env::temp_dir().join(format!(
            "weather-card-locations-{}.json",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"states": [{{"state": "Atlantis", "districts": ["Poseidonia"]}}]}}"#
        )
        .unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let config = Config::from_args(parse(&[
            "--locations",
            &path_arg,
            "--state",
            "Atlantis",
        ]))
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.directory.list_states(), vec!["Atlantis".to_string()]);
    }

    #[test]
    fn test_missing_locations_file() {
        let err = Config::from_args(parse(&["--locations", "/nonexistent/locations.json"]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Directory(_)));
    }
}
