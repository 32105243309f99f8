//! Unit tests for cn-driver.

use std::sync::Arc;

use cn_core::{AgentId, CnError, Day, DiseaseId, GeoPoint, NetworkId, RunConfig};
use cn_network::{ClosedForDiseases, Network};
use cn_params::NetworkParams;
use cn_place::{ClosureWindow, Place, PlaceKind};

use crate::{
    DayDriver, DayObserver, DriverBuilder, DriverError, Exposure, HealthState, HealthTable,
    NetworkDaySummary, NoopObserver, evaluate_network_day,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(days: u32, disease_count: u8) -> RunConfig {
    RunConfig { seed: 42, days, disease_count, num_threads: None }
}

fn params(rate: f64, p: f64) -> Arc<NetworkParams> {
    Arc::new(NetworkParams::single_group(&[(rate, p)]).unwrap())
}

fn network(id: u32, members: impl IntoIterator<Item = u32>, params: Arc<NetworkParams>) -> Network {
    let place = Place::with_members(
        format!("net-{id}"),
        PlaceKind::AcquaintanceNetwork,
        GeoPoint::default(),
        members.into_iter().map(AgentId),
    )
    .unwrap();
    Network::new(NetworkId(id), place, params).unwrap()
}

fn driver(days: u32, networks: Vec<Network>) -> DayDriver {
    networks
        .into_iter()
        .fold(DriverBuilder::new(config(days, 1)), |b, n| b.network(n))
        .build()
        .unwrap()
}

/// Health table with `infectious` agents infected for disease 0.
fn health(agent_count: usize, infectious: &[u32]) -> HealthTable {
    let mut h = HealthTable::new(agent_count, 1);
    for &a in infectious {
        h.infect(AgentId(a), DiseaseId(0));
    }
    h
}

#[derive(Default)]
struct Recorder {
    started:   Vec<Day>,
    summaries: Vec<NetworkDaySummary>,
    new_cases: Vec<usize>,
    ended:     Option<Day>,
}

impl DayObserver for Recorder {
    fn on_day_start(&mut self, day: Day) {
        self.started.push(day);
    }
    fn on_network_day(&mut self, summary: &NetworkDaySummary) {
        self.summaries.push(summary.clone());
    }
    fn on_day_end(&mut self, _day: Day, _exposures: &[Exposure], new_infections: usize) {
        self.new_cases.push(new_infections);
    }
    fn on_run_end(&mut self, final_day: Day) {
        self.ended = Some(final_day);
    }
}

// ── Health table ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod health_table {
    use super::*;

    #[test]
    fn starts_susceptible() {
        let h = HealthTable::new(3, 2);
        assert_eq!(h.count(DiseaseId(0), HealthState::Susceptible), 3);
        assert_eq!(h.count(DiseaseId(1), HealthState::Infectious), 0);
    }

    #[test]
    fn diseases_are_independent() {
        let mut h = HealthTable::new(2, 2);
        h.infect(AgentId(1), DiseaseId(1));
        assert_eq!(h.state(AgentId(1), DiseaseId(1)), HealthState::Infectious);
        assert_eq!(h.state(AgentId(1), DiseaseId(0)), HealthState::Susceptible);
    }

    #[test]
    fn apply_only_moves_susceptibles() {
        let mut h = HealthTable::new(3, 1);
        h.set_state(AgentId(2), DiseaseId(0), HealthState::Recovered);
        let e = |infectee| Exposure {
            day:      Day::ZERO,
            network:  NetworkId(0),
            disease:  DiseaseId(0),
            infector: AgentId(0),
            infectee: AgentId(infectee),
        };
        assert_eq!(h.apply(&[e(1), e(2)]), 1);
        assert_eq!(h.state(AgentId(1), DiseaseId(0)), HealthState::Infectious);
        assert_eq!(h.state(AgentId(2), DiseaseId(0)), HealthState::Recovered);
    }

    #[test]
    #[should_panic(expected = "outside health table")]
    fn out_of_range_agent_panics() {
        HealthTable::new(2, 1).state(AgentId(5), DiseaseId(0));
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn rejects_zero_diseases() {
        let err = DriverBuilder::new(config(1, 0)).build().err().unwrap();
        assert!(matches!(err, DriverError::Core(CnError::Config(_))));
    }

    #[test]
    fn rejects_parameter_table_for_other_disease_count() {
        let err = DriverBuilder::new(config(1, 2))
            .network(network(0, 0..2, params(1.0, 0.5)))
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            DriverError::CountMismatch { expected: 2, got: 1, .. }
        ));
    }

    #[test]
    fn rejects_duplicate_network_ids() {
        let p = params(1.0, 0.5);
        let err = DriverBuilder::new(config(1, 1))
            .network(network(3, 0..2, p.clone()))
            .network(network(3, 2..4, p))
            .build()
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "NetworkId(3) appears more than once");
        assert!(matches!(err, DriverError::DuplicateNetwork(NetworkId(3))));
    }

    #[test]
    fn accepts_boxed_mix_and_starts_at_day_zero() {
        let p = params(1.0, 0.5);
        let gated = network(1, 0..2, p.clone()).with_gate(ClosedForDiseases::new(
            [DiseaseId(0)],
            ClosureWindow::new(Day(0), Day(1)),
        ));
        let d = DriverBuilder::new(config(1, 1))
            .networks([
                Box::new(network(0, 0..2, p)) as Box<dyn cn_network::ContactNetwork>,
                Box::new(gated),
            ])
            .build()
            .unwrap();
        assert_eq!(d.networks().len(), 2);
        assert_eq!(d.current_day(), Day::ZERO);
    }

    #[test]
    fn empty_driver_is_allowed() {
        let mut d = DriverBuilder::new(config(3, 1)).build().unwrap();
        let mut h = HealthTable::new(0, 1);
        assert_eq!(d.run(&mut h, &mut NoopObserver).unwrap(), 0);
        assert_eq!(d.current_day(), Day(3));
    }
}

// ── Single network-day evaluation ─────────────────────────────────────────────

#[cfg(test)]
mod evaluation {
    use super::*;

    #[test]
    fn certain_transmission_reaches_the_only_partner() {
        // Two members: every contact of agent 0 is with agent 1.
        let net = network(0, 0..2, params(3.0, 1.0));
        let h = health(2, &[0]);
        let (summary, exposures) = evaluate_network_day(&net, 7, Day::ZERO, DiseaseId(0), &h);

        assert!(summary.open);
        assert_eq!(summary.infectious, 1);
        assert_eq!(summary.contacts, 3);
        assert_eq!(summary.susceptible_contacts, 3);
        assert_eq!(exposures.len(), 3);
        assert!(exposures.iter().all(|e| e.infector == AgentId(0) && e.infectee == AgentId(1)));
    }

    #[test]
    fn zero_probability_never_transmits() {
        let net = network(0, 0..20, params(5.0, 0.0));
        let h = health(20, &[0, 1, 2]);
        let (summary, exposures) = evaluate_network_day(&net, 7, Day::ZERO, DiseaseId(0), &h);
        assert_eq!(summary.contacts, 15);
        assert!(exposures.is_empty());
    }

    #[test]
    fn zero_rate_draws_no_contacts() {
        let net = network(0, 0..10, params(0.0, 1.0));
        let h = health(10, &[0]);
        let (summary, exposures) = evaluate_network_day(&net, 7, Day::ZERO, DiseaseId(0), &h);
        assert_eq!(summary.contacts, 0);
        assert!(exposures.is_empty());
    }

    #[test]
    fn closed_network_draws_nothing() {
        let net = network(0, 0..4, params(4.0, 1.0)).with_gate(ClosedForDiseases::new(
            [DiseaseId(0)],
            ClosureWindow::new(Day(0), Day(5)),
        ));
        let h = health(4, &[0]);
        let (summary, exposures) = evaluate_network_day(&net, 7, Day(2), DiseaseId(0), &h);
        assert!(!summary.open);
        assert_eq!(summary.infectious, 0);
        assert!(exposures.is_empty());

        let (reopened, _) = evaluate_network_day(&net, 7, Day(5), DiseaseId(0), &h);
        assert!(reopened.open);
    }

    #[test]
    fn lone_member_has_no_partners() {
        let net = network(0, [0], params(4.0, 1.0));
        let h = health(1, &[0]);
        let (summary, exposures) = evaluate_network_day(&net, 7, Day::ZERO, DiseaseId(0), &h);
        assert_eq!(summary.infectious, 1);
        assert_eq!(summary.contacts, 0);
        assert!(exposures.is_empty());
    }

    #[test]
    fn non_susceptible_partners_are_skipped() {
        let net = network(0, 0..2, params(2.0, 1.0));
        let mut h = health(2, &[0]);
        h.set_state(AgentId(1), DiseaseId(0), HealthState::Recovered);
        let (summary, exposures) = evaluate_network_day(&net, 7, Day::ZERO, DiseaseId(0), &h);
        assert_eq!(summary.contacts, 2);
        assert_eq!(summary.susceptible_contacts, 0);
        assert!(exposures.is_empty());
    }

    #[test]
    fn same_coordinates_same_draws() {
        let net = network(0, 0..50, params(2.5, 0.3));
        let h = health(50, &[0, 10, 20, 30]);
        let a = evaluate_network_day(&net, 99, Day(4), DiseaseId(0), &h);
        let b = evaluate_network_day(&net, 99, Day(4), DiseaseId(0), &h);
        assert_eq!(a, b);
    }
}

// ── Day loop ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod day_loop {
    use super::*;

    #[test]
    fn run_covers_every_day_and_notifies_observer() {
        let mut d = driver(4, vec![network(0, 0..3, params(1.0, 0.0))]);
        let mut h = health(3, &[0]);
        let mut rec = Recorder::default();

        d.run(&mut h, &mut rec).unwrap();

        assert_eq!(rec.started, vec![Day(0), Day(1), Day(2), Day(3)]);
        assert_eq!(rec.summaries.len(), 4);
        assert_eq!(rec.new_cases, vec![0; 4]);
        assert_eq!(rec.ended, Some(Day(4)));
        assert_eq!(d.current_day(), Day(4));
    }

    #[test]
    fn run_days_ignores_end_day() {
        let mut d = driver(1, vec![network(0, 0..3, params(1.0, 0.0))]);
        let mut h = health(3, &[0]);
        d.run_days(3, &mut h, &mut NoopObserver).unwrap();
        assert_eq!(d.current_day(), Day(3));
    }

    #[test]
    fn exposures_are_applied_between_days() {
        // Day 0: agent 0 infects agent 1.  Day 1: agent 1 may infect agent 2
        // only if its day-0 infection was applied.
        let p = params(4.0, 1.0);
        let mut d = driver(2, vec![network(0, 0..2, p.clone()), network(1, 1..3, p)]);
        let mut h = health(3, &[0]);
        let mut rec = Recorder::default();

        let total = d.run(&mut h, &mut rec).unwrap();

        assert_eq!(total, 2);
        assert_eq!(rec.new_cases, vec![1, 1]);
        assert_eq!(h.count(DiseaseId(0), HealthState::Infectious), 3);
    }

    #[test]
    fn one_exposure_per_infectee_lowest_network_wins() {
        let p = params(3.0, 1.0);
        let d = driver(1, vec![network(5, 0..2, p.clone()), network(2, 0..2, p)]);
        let h = health(2, &[0]);

        let exposures = d.run_day(Day::ZERO, &h, &mut NoopObserver);

        assert_eq!(exposures.len(), 1);
        assert_eq!(exposures[0].network, NetworkId(2));
        assert_eq!(exposures[0].infectee, AgentId(1));
    }

    #[test]
    fn identical_runs_are_identical() {
        let build = || {
            let p = params(2.0, 0.2);
            driver(6, vec![network(0, 0..40, p.clone()), network(1, 20..60, p)])
        };
        let mut h1 = health(60, &[0, 45]);
        let mut h2 = health(60, &[0, 45]);
        let mut r1 = Recorder::default();
        let mut r2 = Recorder::default();

        let t1 = build().run(&mut h1, &mut r1).unwrap();
        let t2 = build().run(&mut h2, &mut r2).unwrap();

        assert_eq!(t1, t2);
        assert_eq!(r1.summaries, r2.summaries);
        assert_eq!(r1.new_cases, r2.new_cases);
    }

    #[test]
    fn rejects_health_table_with_wrong_disease_count() {
        let mut d = driver(1, vec![network(0, 0..2, params(1.0, 0.5))]);
        let mut h = HealthTable::new(2, 2);
        let err = d.run(&mut h, &mut NoopObserver).err().unwrap();
        assert!(matches!(err, DriverError::CountMismatch { expected: 1, got: 2, .. }));
    }

    #[test]
    fn rejects_roster_outside_health_table() {
        let mut d = driver(1, vec![network(0, 0..5, params(1.0, 0.5))]);
        let mut h = health(3, &[]);
        let err = d.run(&mut h, &mut NoopObserver).err().unwrap();
        assert!(matches!(
            err,
            DriverError::AgentOutOfRange { agent: AgentId(3), network: NetworkId(0), agent_count: 3 }
        ));
    }
}

// ── Checked single evaluation ─────────────────────────────────────────────────

#[cfg(test)]
mod checked_evaluation {
    use super::*;

    #[test]
    fn matches_the_networks_share_of_run_day() {
        let p = params(3.0, 1.0);
        let d = driver(1, vec![network(0, 0..2, p.clone()), network(1, 2..4, p)]);
        let h = health(4, &[0, 2]);

        let (summary, found) = d.evaluate(NetworkId(1), Day::ZERO, DiseaseId(0), &h).unwrap();
        let day = d.run_day(Day::ZERO, &h, &mut NoopObserver);

        assert_eq!(summary.network, NetworkId(1));
        assert_eq!(found[0].infectee, AgentId(3));
        assert!(day.contains(&found[0]));
    }

    #[test]
    fn rejects_disease_outside_the_run() {
        let d = driver(1, vec![network(0, 0..2, params(1.0, 0.5))]);
        let h = health(2, &[0]);
        let err = d.evaluate(NetworkId(0), Day::ZERO, DiseaseId(1), &h).err().unwrap();
        assert!(matches!(err, DriverError::Core(CnError::DiseaseOutOfRange(DiseaseId(1)))));
    }

    #[test]
    fn rejects_network_not_in_the_run() {
        let d = driver(1, vec![network(0, 0..2, params(1.0, 0.5))]);
        let h = health(2, &[0]);
        let err = d.evaluate(NetworkId(9), Day::ZERO, DiseaseId(0), &h).err().unwrap();
        assert_eq!(err.to_string(), "NetworkId(9) is not driven by this run");
    }
}

// ── Parallel evaluation ───────────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod parallel {
    use super::*;

    #[test]
    fn dedicated_pool_matches_sequential_evaluation() {
        let p = params(4.0, 0.5);
        let nets = || vec![network(0, 0..40, p.clone()), network(1, 20..60, p.clone())];
        let cfg = RunConfig { num_threads: Some(2), ..config(5, 1) };
        let d = nets()
            .into_iter()
            .fold(DriverBuilder::new(cfg.clone()), |b, n| b.network(n))
            .build()
            .unwrap();
        let h = health(60, &[0, 25, 45]);
        let mut rec = Recorder::default();

        let pooled = d.run_day(Day(3), &h, &mut rec);

        let mut summaries = Vec::new();
        let mut expected = Vec::new();
        for net in nets() {
            let (summary, found) = evaluate_network_day(&net, cfg.seed, Day(3), DiseaseId(0), &h);
            summaries.push(summary);
            expected.extend(found);
        }
        expected.sort_unstable_by_key(|e| (e.disease, e.infectee, e.network, e.infector));
        expected.dedup_by_key(|e| (e.disease, e.infectee));

        assert!(!pooled.is_empty());
        assert_eq!(pooled, expected);
        assert_eq!(rec.summaries, summaries);
    }

    #[test]
    fn pooled_and_global_runs_agree() {
        let build = |threads| {
            let p = params(2.0, 0.3);
            let cfg = RunConfig { num_threads: threads, ..config(6, 1) };
            DriverBuilder::new(cfg)
                .network(network(0, 0..40, p.clone()))
                .network(network(1, 20..60, p))
                .build()
                .unwrap()
        };
        let mut h1 = health(60, &[0, 45]);
        let mut h2 = health(60, &[0, 45]);

        let t1 = build(Some(2)).run(&mut h1, &mut NoopObserver).unwrap();
        let t2 = build(None).run(&mut h2, &mut NoopObserver).unwrap();

        assert_eq!(t1, t2);
        assert_eq!(
            h1.count(DiseaseId(0), HealthState::Infectious),
            h2.count(DiseaseId(0), HealthState::Infectious),
        );
    }
}
