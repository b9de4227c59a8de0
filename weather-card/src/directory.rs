//! Static state -> district lookup
//!
//! Loaded once at startup and never mutated. Query methods never fail: unknown
//! states simply have no districts.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::DirectoryError;

const EMBEDDED_LOCATIONS: &str = include_str!("../data/locations.json");

#[derive(Debug, Deserialize)]
struct Dataset {
    states: Vec<StateRecord>,
}

#[derive(Debug, Deserialize)]
struct StateRecord {
    state: String,
    districts: Vec<String>,
}

/// A state and its districts, in dataset order
#[derive(Clone, Debug, PartialEq, Eq)]
struct StateEntry {
    name: String,
    districts: Vec<String>,
}

/// Read-only location dataset
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationDirectory {
    states: Vec<StateEntry>,
}

impl LocationDirectory {
    /// Dataset compiled into the binary
    pub fn embedded() -> Result<Self, DirectoryError> {
        Self::from_json(EMBEDDED_LOCATIONS)
    }

    /// Read a dataset file of the form `{"states": [{"state", "districts"}]}`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, DirectoryError> {
        let dataset: Dataset = serde_json::from_str(text)?;
        let states = dataset
            .states
            .into_iter()
            .map(|record| StateEntry {
                name: record.state,
                districts: record.districts,
            })
            .collect();
        Self::from_entries(states)
    }

    /// Build from entries, enforcing unique states and unique districts per state
    fn from_entries(states: Vec<StateEntry>) -> Result<Self, DirectoryError> {
        let mut seen_states = HashSet::new();
        for entry in &states {
            if entry.name.trim().is_empty() {
                return Err(DirectoryError::BlankName("state"));
            }
            if !seen_states.insert(entry.name.as_str()) {
                return Err(DirectoryError::DuplicateState(entry.name.clone()));
            }

            let mut seen_districts = HashSet::new();
            for district in &entry.districts {
                if district.trim().is_empty() {
                    return Err(DirectoryError::BlankName("district"));
                }
                if !seen_districts.insert(district.as_str()) {
                    return Err(DirectoryError::DuplicateDistrict {
                        state: entry.name.clone(),
                        district: district.clone(),
                    });
                }
            }
        }

        tracing::debug!(states = states.len(), "location directory loaded");
        Ok(Self { states })
    }

    /// State names in dataset order
    pub fn list_states(&self) -> Vec<String> {
        self.states.iter().map(|entry| entry.name.clone()).collect()
    }

    /// Districts of `state` in dataset order; empty if the state is unknown
    pub fn list_districts(&self, state: &str) -> &[String] {
        self.states
            .iter()
            .find(|entry| entry.name == state)
            .map(|entry| entry.districts.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.states.iter().any(|entry| entry.name == state)
    }

    pub fn contains_district(&self, state: &str, district: &str) -> bool {
        self.list_districts(state).iter().any(|d| d == district)
    }
}
