//! The immutable parameter table.

use std::fmt;

use cn_core::{DiseaseId, GroupId};

use crate::{ParamsError, ParamsResult};

/// Per-disease contact rate and per-(disease, group) transmission probability.
///
/// Indexed densely by `DiseaseId` and `GroupId`.  Values are trusted as
/// already range-checked by the loader; construction only enforces that the
/// two tables describe the same diseases and that every disease has at least
/// one group.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkParams {
    contacts_per_day:              Vec<f64>,
    prob_transmission_per_contact: Vec<Vec<f64>>,
}

impl NetworkParams {
    /// Build the table from `contacts_per_day[disease]` and
    /// `prob_transmission_per_contact[disease][group]`.
    pub fn new(
        contacts_per_day:              Vec<f64>,
        prob_transmission_per_contact: Vec<Vec<f64>>,
    ) -> ParamsResult<Self> {
        if contacts_per_day.is_empty() {
            return Err(ParamsError::Config("no diseases configured".into()));
        }
        if contacts_per_day.len() > usize::from(u8::MAX) + 1 {
            return Err(ParamsError::Config(format!(
                "{} diseases configured; at most 256 are supported",
                contacts_per_day.len()
            )));
        }
        let (rates, rows) = (contacts_per_day.len(), prob_transmission_per_contact.len());
        if rates != rows {
            // The first disease present in one table but not the other.
            let missing = rates.min(rows);
            let which = if rates < rows { "contacts_per_day" } else { "prob_transmission_per_contact" };
            return Err(ParamsError::Config(format!("missing {which} for disease {missing}")));
        }
        if let Some(d) = prob_transmission_per_contact.iter().position(Vec::is_empty) {
            return Err(ParamsError::Config(format!(
                "prob_transmission_per_contact for disease {d} has no groups"
            )));
        }
        Ok(Self { contacts_per_day, prob_transmission_per_contact })
    }

    /// Single-group table: one contact rate and one probability per disease.
    pub fn single_group(entries: &[(f64, f64)]) -> ParamsResult<Self> {
        let (rates, probs): (Vec<f64>, Vec<Vec<f64>>) = entries.iter().map(|&(rate, p)| (rate, vec![p])).unzip();
        Self::new(rates, probs)
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Mean contacts per agent per day for `disease`.
    ///
    /// # Panics
    /// If `disease` was never configured.  This is a wiring defect between
    /// the population setup and the parameter file, not a runtime condition.
    #[inline]
    pub fn contact_rate(&self, disease: DiseaseId) -> f64 {
        self.try_contact_rate(disease)
            .unwrap_or_else(|e| panic!("parameter lookup failed: {e}"))
    }

    /// Probability that one contact transmits `disease` within `group`.
    ///
    /// # Panics
    /// If `disease` or `group` was never configured.
    #[inline]
    pub fn transmission_probability(&self, disease: DiseaseId, group: GroupId) -> f64 {
        self.try_transmission_probability(disease, group)
            .unwrap_or_else(|e| panic!("parameter lookup failed: {e}"))
    }

    pub fn try_contact_rate(&self, disease: DiseaseId) -> ParamsResult<f64> {
        self.contacts_per_day
            .get(disease.index())
            .copied()
            .ok_or(ParamsError::UnknownDisease(disease))
    }

    pub fn try_transmission_probability(&self, disease: DiseaseId, group: GroupId) -> ParamsResult<f64> {
        self.prob_transmission_per_contact
            .get(disease.index())
            .ok_or(ParamsError::UnknownDisease(disease))?
            .get(group.index())
            .copied()
            .ok_or(ParamsError::UnknownGroup { disease, group })
    }

    // ── Metadata ──────────────────────────────────────────────────────────

    pub fn disease_count(&self) -> usize {
        self.contacts_per_day.len()
    }

    /// Number of groups configured for `disease` (0 if unconfigured).
    pub fn group_count(&self, disease: DiseaseId) -> usize {
        self.prob_transmission_per_contact
            .get(disease.index())
            .map_or(0, Vec::len)
    }

    /// Iterator over every configured disease.
    pub fn diseases(&self) -> impl Iterator<Item = DiseaseId> + '_ {
        (0..self.disease_count()).map(|d| DiseaseId(d as u8))
    }

    // ── Normalization ─────────────────────────────────────────────────────

    /// Rescale each disease so its largest per-contact probability is 1.0.
    ///
    /// The probability row is divided by its maximum and the contact rate is
    /// multiplied by the same factor, which keeps `rate * probability`
    /// (expected transmissions per infectious agent-day) unchanged while
    /// letting the driver skip contacts that could never transmit.  Rows
    /// whose maximum is zero are left as they are.
    pub fn normalized(&self) -> NetworkParams {
        let mut out = self.clone();
        for (rate, row) in out
            .contacts_per_day
            .iter_mut()
            .zip(out.prob_transmission_per_contact.iter_mut())
        {
            let max = row.iter().copied().fold(0.0_f64, f64::max);
            if max > 0.0 {
                row.iter_mut().for_each(|p| *p /= max);
                *rate *= max;
            }
        }
        out
    }
}

impl fmt::Display for NetworkParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (d, (rate, row)) in self
            .contacts_per_day
            .iter()
            .zip(&self.prob_transmission_per_contact)
            .enumerate()
        {
            write!(f, "disease {d}: contacts_per_day={rate} prob_transmission_per_contact=[")?;
            for (g, p) in row.iter().enumerate() {
                if g > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{p}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
