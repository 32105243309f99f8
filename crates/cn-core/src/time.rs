//! Simulation day model and run configuration.
//!
//! The transmission kernel is evaluated once per simulated day, so time is a
//! plain day counter.  Calendar mapping belongs to the enclosing application.

use std::fmt;

use crate::{CnError, CnResult, DiseaseId};

// ── Day ───────────────────────────────────────────────────────────────────────

/// An absolute simulation day, counted from 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// The following day.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }

    /// Return the day `n` days after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Day {
        Day(self.0 + n)
    }
}

impl std::ops::Add<u32> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u32) -> Day {
        Day(self.0 + rhs)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration of a simulation run.
///
/// Typically loaded from JSON by the application and handed to the driver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of simulated days.
    pub days: u32,

    /// Number of diseases modeled concurrently.  Every `DiseaseId` below this
    /// must be present in the parameter table.
    pub disease_count: u8,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    #[cfg_attr(feature = "serde", serde(default))]
    pub num_threads: Option<usize>,
}

impl RunConfig {
    /// The day at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_day(&self) -> Day {
        Day(self.days)
    }

    /// All days of the run in order.
    pub fn day_range(&self) -> impl Iterator<Item = Day> {
        (0..self.days).map(Day)
    }

    /// All diseases modeled by the run.
    pub fn diseases(&self) -> impl Iterator<Item = DiseaseId> {
        DiseaseId::all(self.disease_count)
    }

    /// `Err` if `disease` is outside the run's disease range.
    pub fn check_disease(&self, disease: DiseaseId) -> CnResult<()> {
        if disease.0 < self.disease_count {
            Ok(())
        } else {
            Err(CnError::DiseaseOutOfRange(disease))
        }
    }

    /// Reject configurations that cannot describe a run.
    pub fn validate(&self) -> CnResult<()> {
        if self.disease_count == 0 {
            return Err(CnError::Config("disease_count must be at least 1".into()));
        }
        if self.num_threads == Some(0) {
            return Err(CnError::Config("num_threads must be at least 1 when set".into()));
        }
        Ok(())
    }
}
