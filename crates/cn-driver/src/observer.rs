//! Observer trait for progress reporting and data collection.

use cn_core::Day;

use crate::{Exposure, NetworkDaySummary};

/// Callbacks invoked by [`DayDriver::run`][crate::DayDriver::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Callbacks always arrive in network
/// order, even when the networks were evaluated in parallel.
///
/// # Example: attack-rate printer
///
/// ```rust,ignore
/// struct NewCases;
///
/// impl DayObserver for NewCases {
///     fn on_day_end(&mut self, day: Day, _exposures: &[Exposure], new_infections: usize) {
///         println!("{day}: {new_infections} new infections");
///     }
/// }
/// ```
pub trait DayObserver {
    /// Called before any network is evaluated for `day`.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called once per (network, disease) evaluation, open or closed.
    fn on_network_day(&mut self, _summary: &NetworkDaySummary) {}

    /// Called after the day's exposures were merged and applied.
    ///
    /// `new_infections` counts agents whose state actually changed.
    fn on_day_end(&mut self, _day: Day, _exposures: &[Exposure], _new_infections: usize) {}

    /// Called once after the final day.
    fn on_run_end(&mut self, _final_day: Day) {}
}

/// A [`DayObserver`] that does nothing.
pub struct NoopObserver;

impl DayObserver for NoopObserver {}
