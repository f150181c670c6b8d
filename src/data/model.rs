use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the launch CSV
// ---------------------------------------------------------------------------

/// A single launch (one row of the source CSV).
///
/// Field names follow the CSV headers of the published launch dataset, so the
/// same type is used for decoding and for writing synthetic files. Columns
/// that are not listed here (e.g. the unnamed leading index) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Outcome class: 1 = successful landing, 0 = failure.
    #[serde(rename = "class")]
    pub outcome: u8,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version", default)]
    pub booster_version: Option<String>,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    /// Outcome as a number, for sums and means.
    pub fn outcome_value(&self) -> f64 {
        f64::from(self.outcome)
    }
}

// ---------------------------------------------------------------------------
// LaunchTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset with pre-computed category indices.
///
/// Built once at startup and never mutated; filters produce index views.
#[derive(Debug, Clone, Default)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    launch_sites: Vec<String>,
    booster_categories: BTreeSet<String>,
}

impl LaunchTable {
    /// Build category indices from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut launch_sites: Vec<String> = Vec::new();
        let mut booster_categories = BTreeSet::new();

        for rec in &records {
            if !launch_sites.contains(&rec.launch_site) {
                launch_sites.push(rec.launch_site.clone());
            }
            booster_categories.insert(rec.booster_category.clone());
        }

        LaunchTable {
            records,
            launch_sites,
            booster_categories,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn launch_sites(&self) -> &[String] {
        &self.launch_sites
    }

    /// Sorted set of booster version categories.
    pub fn booster_categories(&self) -> &BTreeSet<String> {
        &self.booster_categories
    }

    /// Smallest and largest payload mass, `None` for an empty table.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        self.records.iter().map(|r| r.payload_mass_kg).fold(None, |acc, m| match acc {
            None => Some((m, m)),
            Some((lo, hi)) => Some((lo.min(m), hi.max(m))),
        })
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, mass: f64, category: &str, outcome: u8) -> LaunchRecord {
        LaunchRecord {
            flight_number: None,
            launch_site: site.to_string(),
            outcome,
            payload_mass_kg: mass,
            booster_version: None,
            booster_category: category.to_string(),
        }
    }

    #[test]
    fn sites_keep_first_appearance_order() {
        let table = LaunchTable::from_records(vec![
            record("VAFB SLC-4E", 500.0, "v1.1", 0),
            record("CCAFS LC-40", 2000.0, "FT", 1),
            record("VAFB SLC-4E", 9600.0, "FT", 1),
            record("KSC LC-39A", 3000.0, "B4", 1),
        ]);
        assert_eq!(
            table.launch_sites(),
            ["VAFB SLC-4E", "CCAFS LC-40", "KSC LC-39A"]
        );
        let categories: Vec<&str> = table.booster_categories().iter().map(String::as_str).collect();
        assert_eq!(categories, ["B4", "FT", "v1.1"]);
    }

    #[test]
    fn payload_bounds_span_all_rows() {
        let table = LaunchTable::from_records(vec![
            record("A", 3000.0, "FT", 1),
            record("B", 0.0, "FT", 0),
            record("A", 9600.0, "B5", 1),
        ]);
        assert_eq!(table.payload_bounds(), Some((0.0, 9600.0)));
        assert_eq!(LaunchTable::default().payload_bounds(), None);
    }
}
