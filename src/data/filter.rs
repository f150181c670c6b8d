use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::{LaunchRecord, LaunchTable};

/// Wire value of the "all sites" dropdown entry.
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Site selection: the dropdown value
// ---------------------------------------------------------------------------

/// Which launch site the dashboard is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a dropdown value; [`ALL_SITES`] is the sentinel.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// The dropdown value this selection round-trips to.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }

    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        SiteSelection::from_value(&value)
    }
}

impl From<SiteSelection> for String {
    fn from(sel: SiteSelection) -> Self {
        sel.value().to_string()
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(site) => write!(f, "{site}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range: the slider value
// ---------------------------------------------------------------------------

/// Inclusive payload mass interval in kilograms.
///
/// A range whose `low` is above its `high` contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    pub fn contains(&self, mass_kg: f64) -> bool {
        self.low <= mass_kg && mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

fn passes(rec: &LaunchRecord, site: &SiteSelection, range: &PayloadRange) -> bool {
    site.matches(&rec.launch_site) && range.contains(rec.payload_mass_kg)
}

/// Return indices of launches matching the site and payload range.
pub fn filtered_indices(
    table: &LaunchTable,
    site: &SiteSelection,
    range: &PayloadRange,
) -> Vec<usize> {
    table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| passes(rec, site, range))
        .map(|(i, _)| i)
        .collect()
}

/// Like [`filtered_indices`] but borrowing the rows themselves.
pub fn filtered_records<'a>(
    table: &'a LaunchTable,
    site: &SiteSelection,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    table
        .records()
        .iter()
        .filter(|rec| passes(rec, site, range))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    fn fixture() -> LaunchTable {
        parse_csv(include_str!("../../tests/data/launches.csv").as_bytes())
            .expect("fixture parses")
    }

    #[test]
    fn all_sites_with_full_range_keeps_every_row() {
        let table = fixture();
        let idx = filtered_indices(&table, &SiteSelection::All, &PayloadRange::new(0.0, 10000.0));
        assert_eq!(idx.len(), table.len());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let table = fixture();
        // The fixture has launches at exactly 0 kg and 9600 kg.
        let idx = filtered_indices(&table, &SiteSelection::All, &PayloadRange::new(0.0, 0.0));
        assert!(!idx.is_empty());
        assert!(idx.iter().all(|&i| table.records()[i].payload_mass_kg == 0.0));

        let idx = filtered_indices(&table, &SiteSelection::All, &PayloadRange::new(9600.0, 9600.0));
        assert!(!idx.is_empty());
    }

    #[test]
    fn specific_site_excludes_other_sites() {
        let table = fixture();
        let site = SiteSelection::from_value("KSC LC-39A");
        let rows = filtered_records(&table, &site, &PayloadRange::new(0.0, 10000.0));
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r.launch_site == "KSC LC-39A"));
    }

    #[test]
    fn narrowing_the_range_never_adds_rows() {
        let table = fixture();
        let mut previous = usize::MAX;
        for high in (0..=10).rev().map(|k| f64::from(k) * 1000.0) {
            let n = filtered_indices(&table, &SiteSelection::All, &PayloadRange::new(0.0, high)).len();
            assert!(n <= previous, "range [0, {high}] grew to {n} rows");
            previous = n;
        }
    }

    #[test]
    fn inverted_range_selects_nothing() {
        let table = fixture();
        let idx = filtered_indices(&table, &SiteSelection::All, &PayloadRange::new(5000.0, 1000.0));
        assert!(idx.is_empty());
    }

    #[test]
    fn sentinel_round_trips_through_serde() {
        let all: SiteSelection = serde_json::from_str("\"ALL\"").unwrap();
        assert_eq!(all, SiteSelection::All);
        let site: SiteSelection = serde_json::from_str("\"CCAFS LC-40\"").unwrap();
        assert_eq!(site.value(), "CCAFS LC-40");
        assert_eq!(serde_json::to_string(&SiteSelection::All).unwrap(), "\"ALL\"");
    }
}
