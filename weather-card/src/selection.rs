//! Current state / district choice
//!
//! Invariant: a district is only ever set together with the state it belongs
//! to, and `districts` always mirrors the directory entry of the selected state.

use crate::directory::LocationDirectory;
use crate::error::SelectionError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    state: Option<String>,
    district: Option<String>,
    districts: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    /// Districts offered for the selected state (empty when none is selected)
    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    /// The district selector is usable only once a state is chosen
    pub fn district_enabled(&self) -> bool {
        self.state.is_some()
    }

    /// Select a state, or clear it with `None` / an empty name.
    ///
    /// Always drops the district and rebuilds the district list in one step.
    pub fn select_state(&mut self, name: Option<&str>, directory: &LocationDirectory) {
        let name = name.filter(|n| !n.is_empty());

        self.district = None;
        self.districts = name
            .map(|n| directory.list_districts(n).to_vec())
            .unwrap_or_default();
        self.state = name.map(str::to_owned);
    }

    /// Select a district of the current state, or clear it with `None` / an empty name.
    pub fn select_district(&mut self, name: Option<&str>) -> Result<(), SelectionError> {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            self.district = None;
            return Ok(());
        };

        let Some(state) = self.state.as_deref() else {
            return Err(SelectionError::NoStateSelected);
        };

        if !self.districts.iter().any(|d| d == name) {
            return Err(SelectionError::UnknownDistrict {
                state: state.to_owned(),
                district: name.to_owned(),
            });
        }

        self.district = Some(name.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> LocationDirectory {
        LocationDirectory::from_json(
            r#"{"states": [
                {"state": "Tamil Nadu", "districts": ["Chennai", "Madurai"]},
                {"state": "Kerala", "districts": ["Kochi"]}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_select_state_populates_districts() {
        let dir = directory();
        let mut sel = Selection::new();
        assert!(!sel.district_enabled());

        sel.select_state(Some("Tamil Nadu"), &dir);

        assert_eq!(sel.state(), Some("Tamil Nadu"));
        assert_eq!(sel.districts(), ["Chennai", "Madurai"]);
        assert!(sel.district_enabled());
    }

    #[test]
    fn test_select_state_clears_district() {
        let dir = directory();
        let mut sel = Selection::new();
        sel.select_state(Some("Tamil Nadu"), &dir);
        sel.select_district(Some("Chennai")).unwrap();

        sel.select_state(Some("Kerala"), &dir);

        assert_eq!(sel.district(), None);
        assert_eq!(sel.districts(), ["Kochi"]);
    }

    #[test]
    fn test_reselecting_same_state_still_clears_district() {
        let dir = directory();
        let mut sel = Selection::new();
        sel.select_state(Some("Tamil Nadu"), &dir);
        sel.select_district(Some("Madurai")).unwrap();

        sel.select_state(Some("Tamil Nadu"), &dir);

        assert_eq!(sel.district(), None);
    }

    #[test]
    fn test_none_or_empty_state_resets_everything() {
        let dir = directory();
        for cleared in [None, Some("")] {
            let mut sel = Selection::new();
            sel.select_state(Some("Tamil Nadu"), &dir);
            sel.select_district(Some("Chennai")).unwrap();

            sel.select_state(cleared, &dir);

            assert_eq!(sel, Selection::new());
            assert!(!sel.district_enabled());
        }
    }

    #[test]
    fn test_unknown_state_has_empty_district_list() {
        let dir = directory();
        let mut sel = Selection::new();
        sel.select_state(Some("Atlantis"), &dir);

        assert_eq!(sel.state(), Some("Atlantis"));
        assert!(sel.districts().is_empty());
    }

    #[test]
    fn test_district_without_state_rejected() {
        let mut sel = Selection::new();
        assert_eq!(
            sel.select_district(Some("Chennai")),
            Err(SelectionError::NoStateSelected)
        );
        assert!(sel.districts().is_empty());
        assert_eq!(sel.district(), None);
    }

    #[test]
    fn test_district_of_other_state_rejected() {
        let dir = directory();
        let mut sel = Selection::new();
        sel.select_state(Some("Kerala"), &dir);

        let err = sel.select_district(Some("Chennai")).unwrap_err();
        assert!(matches!(err, SelectionError::UnknownDistrict { .. }));
        assert_eq!(sel.district(), None);
    }

    #[test]
    fn test_clear_district() {
        let dir = directory();
        let mut sel = Selection::new();
        sel.select_state(Some("Kerala"), &dir);
        sel.select_district(Some("Kochi")).unwrap();

        sel.select_district(None).unwrap();

        assert_eq!(sel.district(), None);
        assert_eq!(sel.state(), Some("Kerala"));
    }
}
