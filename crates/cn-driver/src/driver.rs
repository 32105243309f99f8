//! The day-stepped driver.

use cn_core::{ContactRng, Day, DiseaseId, NetworkId, RunConfig};
use cn_network::ContactNetwork;
use log::{debug, info, trace};

use crate::{
    DayObserver, DriverError, DriverResult, Exposure, HealthTable, HealthView, NetworkDaySummary,
};

/// Steps a fixed set of contact networks through the days of a run.
///
/// Built by [`DriverBuilder`][crate::DriverBuilder].  The driver owns the
/// networks but not the health state, which is passed to every call so the
/// caller can inspect or edit it between days.
pub struct DayDriver {
    pub(crate) config:   RunConfig,
    pub(crate) networks: Vec<Box<dyn ContactNetwork>>,
    pub(crate) current:  Day,
    #[cfg(feature = "parallel")]
    pub(crate) pool:     Option<rayon::ThreadPool>,
}

impl DayDriver {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn networks(&self) -> &[Box<dyn ContactNetwork>] {
        &self.networks
    }

    /// The next day [`run`](Self::run) or [`run_days`](Self::run_days) will
    /// evaluate.
    pub fn current_day(&self) -> Day {
        self.current
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Run from the current day to `config.end_day()`, applying each day's
    /// exposures to `health` before the next day starts.
    ///
    /// Returns the number of new infections over the whole run.
    pub fn run<O: DayObserver>(
        &mut self,
        health:   &mut HealthTable,
        observer: &mut O,
    ) -> DriverResult<usize> {
        self.check_health(health)?;

        let mut total = 0;
        while self.current < self.config.end_day() {
            total += self.step(health, observer);
        }
        observer.on_run_end(self.current);
        info!("run finished at {} with {total} new infections", self.current);
        Ok(total)
    }

    /// Run exactly `n` days from the current position (ignores `end_day`).
    pub fn run_days<O: DayObserver>(
        &mut self,
        n:        u32,
        health:   &mut HealthTable,
        observer: &mut O,
    ) -> DriverResult<usize> {
        self.check_health(health)?;

        let mut total = 0;
        for _ in 0..n {
            total += self.step(health, observer);
        }
        Ok(total)
    }

    fn step<O: DayObserver>(&mut self, health: &mut HealthTable, observer: &mut O) -> usize {
        let day = self.current;
        observer.on_day_start(day);

        let exposures = self.run_day(day, &*health, observer);
        let new_infections = health.apply(&exposures);

        observer.on_day_end(day, &exposures, new_infections);
        debug!("{day}: {} exposures, {new_infections} new infections", exposures.len());

        self.current = day.next();
        new_infections
    }

    /// Evaluate every (network, disease) pair for `day` without touching
    /// health state.
    ///
    /// The result holds at most one exposure per (disease, infectee): when
    /// several contacts succeed, the one from the lowest network id wins,
    /// then the lowest infector id.  Sorted by disease, then infectee.
    pub fn run_day<O: DayObserver>(
        &self,
        day:      Day,
        health:   &dyn HealthView,
        observer: &mut O,
    ) -> Vec<Exposure> {
        let seed = self.config.seed;
        let jobs: Vec<(usize, DiseaseId)> = (0..self.networks.len())
            .flat_map(|i| self.config.diseases().map(move |d| (i, d)))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results: Vec<(NetworkDaySummary, Vec<Exposure>)> = jobs
            .iter()
            .map(|&(i, disease)| evaluate_network_day(&*self.networks[i], seed, day, disease, health))
            .collect();

        #[cfg(feature = "parallel")]
        let results: Vec<(NetworkDaySummary, Vec<Exposure>)> = {
            use rayon::prelude::*;

            let networks = &self.networks;
            let evaluate = || -> Vec<(NetworkDaySummary, Vec<Exposure>)> {
                jobs.par_iter()
                    .map(|&(i, disease)| evaluate_network_day(&*networks[i], seed, day, disease, health))
                    .collect()
            };
            match &self.pool {
                Some(pool) => pool.install(evaluate),
                None       => evaluate(),
            }
        };

        // Observer calls stay in job order regardless of how the work ran.
        let mut exposures = Vec::new();
        for (summary, found) in results {
            observer.on_network_day(&summary);
            exposures.extend(found);
        }
        merge_exposures(exposures)
    }

    /// Evaluate one of the driven networks for one disease on `day`,
    /// without merging or touching health state.
    ///
    /// Uses the same seeding as [`run_day`](Self::run_day), so the result is
    /// exactly that network's share of the day.
    pub fn evaluate(
        &self,
        network: NetworkId,
        day:     Day,
        disease: DiseaseId,
        health:  &dyn HealthView,
    ) -> DriverResult<(NetworkDaySummary, Vec<Exposure>)> {
        self.config.check_disease(disease)?;
        let found = self
            .networks
            .iter()
            .find(|n| n.id() == network)
            .ok_or(DriverError::UnknownNetwork(network))?;
        Ok(evaluate_network_day(&**found, self.config.seed, day, disease, health))
    }

    // ── Validation ────────────────────────────────────────────────────────

    fn check_health(&self, health: &HealthTable) -> DriverResult<()> {
        let expected = usize::from(self.config.disease_count);
        if health.disease_count() != expected {
            return Err(DriverError::CountMismatch {
                expected,
                got:  health.disease_count(),
                what: "health table disease count",
            });
        }
        for network in &self.networks {
            let members = network.container().members();
            if let Some(&agent) = members.iter().find(|a| a.index() >= health.agent_count()) {
                return Err(DriverError::AgentOutOfRange {
                    agent,
                    network: network.id(),
                    agent_count: health.agent_count(),
                });
            }
        }
        Ok(())
    }
}

/// Evaluate one network for one disease on one day.
///
/// Each infectious member draws `round_stochastic(get_contacts_per_day)`
/// partners uniformly, with replacement, from the other members.  Each
/// contact with a susceptible partner transmits with
/// `get_transmission_prob(disease, infector, partner)`.  All draws come from
/// a [`ContactRng`] seeded by `(seed, day, network, disease)`, so the result
/// does not depend on evaluation order.
pub fn evaluate_network_day(
    network: &dyn ContactNetwork,
    seed:    u64,
    day:     Day,
    disease: DiseaseId,
    health:  &dyn HealthView,
) -> (NetworkDaySummary, Vec<Exposure>) {
    let id = network.id();
    let mut summary = NetworkDaySummary::new(day, id, disease);
    let mut exposures = Vec::new();

    if !network.should_be_open(day, disease) {
        trace!("{id} closed for {disease} on {day}");
        return (summary, exposures);
    }
    summary.open = true;

    let members = network.container().members();
    let rate = network.get_contacts_per_day(disease);
    let mut rng = ContactRng::for_evaluation(seed, day, id, disease);

    for (pos, &infector) in members.iter().enumerate() {
        if !health.is_infectious(infector, disease) {
            continue;
        }
        summary.infectious += 1;
        if members.len() < 2 {
            continue;
        }

        let draws = rng.round_stochastic(rate);
        for _ in 0..draws {
            // Uniform over the other members: skip the infector's own slot.
            let mut pick = rng.gen_range(0..members.len() - 1);
            if pick >= pos {
                pick += 1;
            }
            let partner = members[pick];
            summary.contacts += 1;

            if !health.is_susceptible(partner, disease) {
                continue;
            }
            summary.susceptible_contacts += 1;

            let p = network.get_transmission_prob(disease, infector, partner);
            if rng.gen_bool(p) {
                exposures.push(Exposure { day, network: id, disease, infector, infectee: partner });
            }
        }
    }

    summary.exposures = exposures.len();
    trace!(
        "{id} {disease} {day}: {} infectious, {} contacts, {} exposures",
        summary.infectious,
        summary.contacts,
        summary.exposures,
    );
    (summary, exposures)
}

fn merge_exposures(mut exposures: Vec<Exposure>) -> Vec<Exposure> {
    exposures.sort_unstable_by_key(|e| (e.disease, e.infectee, e.network, e.infector));
    exposures.dedup_by_key(|e| (e.disease, e.infectee));
    exposures
}
