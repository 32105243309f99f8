//! One-time parameter loading from JSON or CSV.
//!
//! # JSON format
//!
//! Maps keyed by disease index.  Every disease below `disease_count` must
//! appear in both maps; `normalize` is optional (default `false`).
//!
//! ```json
//! {
//!   "contacts_per_day": { "0": 4.0, "1": 1.5 },
//!   "prob_transmission_per_contact": { "0": [0.1], "1": [0.05, 0.2] },
//!   "normalize": false
//! }
//! ```
//!
//! # CSV format
//!
//! One row per (disease, group).  Rows of the same disease must repeat the
//! same `contacts_per_day`, and group indices must be contiguous from 0.
//!
//! ```csv
//! disease,group,contacts_per_day,prob_transmission_per_contact
//! 0,0,4.0,0.1
//! 1,0,1.5,0.05
//! 1,1,1.5,0.2
//! ```
//!
//! Both loaders reject negative or non-finite contact rates and
//! probabilities outside `[0, 1]`.  Errors name the offending disease.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::{NetworkParams, ParamsError, ParamsResult};

// ── File records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ParamsFile {
    contacts_per_day:              BTreeMap<u8, f64>,
    prob_transmission_per_contact: BTreeMap<u8, Vec<f64>>,
    #[serde(default)]
    normalize:                     bool,
}

#[derive(Deserialize)]
struct ParamsRecord {
    disease:                       u8,
    group:                         u16,
    contacts_per_day:              f64,
    prob_transmission_per_contact: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the parameter table for a run modeling `disease_count` diseases.
///
/// Dispatches on the file extension (`.json` or `.csv`).  This is the single
/// write of the table; the returned `Arc` is what every network shares.
pub fn get_parameters(path: &Path, disease_count: u8) -> ParamsResult<Arc<NetworkParams>> {
    let params = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_params_json(path, disease_count)?,
        Some("csv")  => load_params_csv(path, disease_count)?,
        _ => {
            return Err(ParamsError::Config(format!(
                "unsupported parameter file {}: expected .json or .csv",
                path.display()
            )));
        }
    };
    log::debug!("network parameters loaded from {}:\n{params}", path.display());
    Ok(Arc::new(params))
}

/// Load parameters from a JSON file.
pub fn load_params_json(path: &Path, disease_count: u8) -> ParamsResult<NetworkParams> {
    let file = std::fs::File::open(path)?;
    load_params_json_reader(file, disease_count)
}

/// Like [`load_params_json`] but accepts any `Read` source.
pub fn load_params_json_reader<R: Read>(reader: R, disease_count: u8) -> ParamsResult<NetworkParams> {
    let file: ParamsFile = serde_json::from_reader(reader)
        .map_err(|e| ParamsError::Parse(e.to_string()))?;

    let params = assemble(disease_count, file.contacts_per_day, file.prob_transmission_per_contact)?;
    if file.normalize {
        log::debug!("normalizing transmission probabilities");
        Ok(params.normalized())
    } else {
        Ok(params)
    }
}

/// Load parameters from a CSV file.
pub fn load_params_csv(path: &Path, disease_count: u8) -> ParamsResult<NetworkParams> {
    let file = std::fs::File::open(path)?;
    load_params_csv_reader(file, disease_count)
}

/// Like [`load_params_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_params_csv_reader<R: Read>(reader: R, disease_count: u8) -> ParamsResult<NetworkParams> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut rates: BTreeMap<u8, f64> = BTreeMap::new();
    let mut groups: BTreeMap<u8, BTreeMap<u16, f64>> = BTreeMap::new();

    for result in csv_reader.deserialize::<ParamsRecord>() {
        let row = result.map_err(|e| ParamsError::Parse(e.to_string()))?;

        match rates.entry(row.disease) {
            Entry::Vacant(slot) => {
                slot.insert(row.contacts_per_day);
            }
            Entry::Occupied(slot) if *slot.get() != row.contacts_per_day => {
                return Err(ParamsError::Config(format!(
                    "disease {} has conflicting contacts_per_day values {} and {}",
                    row.disease,
                    slot.get(),
                    row.contacts_per_day
                )));
            }
            Entry::Occupied(_) => {}
        }

        let by_group = groups.entry(row.disease).or_default();
        if by_group.insert(row.group, row.prob_transmission_per_contact).is_some() {
            return Err(ParamsError::Config(format!(
                "disease {} group {} appears more than once",
                row.disease, row.group
            )));
        }
    }

    let mut rows: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
    for (disease, by_group) in groups {
        // BTreeMap iterates groups in order; any gap shows up as a key mismatch.
        if let Some((expected, _)) = by_group.keys().enumerate().find(|&(i, &g)| usize::from(g) != i) {
            return Err(ParamsError::Config(format!(
                "disease {disease} is missing transmission probability for group {expected}"
            )));
        }
        rows.insert(disease, by_group.into_values().collect());
    }

    assemble(disease_count, rates, rows)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Check completeness and ranges, then build the dense table.
fn assemble(
    disease_count: u8,
    mut rates:     BTreeMap<u8, f64>,
    mut rows:      BTreeMap<u8, Vec<f64>>,
) -> ParamsResult<NetworkParams> {
    if disease_count == 0 {
        return Err(ParamsError::Config("run models no diseases".into()));
    }
    if let Some(&extra) = rates.keys().chain(rows.keys()).find(|&&d| d >= disease_count) {
        return Err(ParamsError::Config(format!(
            "disease {extra} is configured but the run models only {disease_count}"
        )));
    }

    let mut contacts_per_day = Vec::with_capacity(usize::from(disease_count));
    let mut prob_transmission_per_contact = Vec::with_capacity(usize::from(disease_count));

    for d in 0..disease_count {
        let rate = rates.remove(&d).ok_or_else(|| {
            ParamsError::Config(format!("missing contacts_per_day for disease {d}"))
        })?;
        let row = rows.remove(&d).ok_or_else(|| {
            ParamsError::Config(format!("missing prob_transmission_per_contact for disease {d}"))
        })?;

        if !rate.is_finite() || rate < 0.0 {
            return Err(ParamsError::Config(format!(
                "contacts_per_day for disease {d} must be a non-negative number, got {rate}"
            )));
        }
        if let Some((g, p)) = row.iter().enumerate().find(|&(_, &p)| !(0.0..=1.0).contains(&p)) {
            return Err(ParamsError::Config(format!(
                "prob_transmission_per_contact for disease {d} group {g} must be in [0, 1], got {p}"
            )));
        }

        contacts_per_day.push(rate);
        prob_transmission_per_contact.push(row);
    }

    NetworkParams::new(contacts_per_day, prob_transmission_per_contact)
}
