//! Minimal per-agent, per-disease health state.
//!
//! The full disease-state machine (exposure periods, symptoms, recovery
//! timing) lives in the enclosing application.  The driver only needs to know
//! who can infect and who can be infected, which it reads through
//! [`HealthView`].  [`HealthTable`] is a small S/I/R store for tests and
//! demos.

use cn_core::{AgentId, DiseaseId};

use crate::Exposure;

/// Health state of one agent for one disease.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HealthState {
    #[default]
    Susceptible,
    Infectious,
    Recovered,
}

/// Read-only health queries used by the driver.
///
/// `Sync` because the parallel driver shares one view across worker threads.
pub trait HealthView: Sync {
    fn is_infectious(&self, agent: AgentId, disease: DiseaseId) -> bool;
    fn is_susceptible(&self, agent: AgentId, disease: DiseaseId) -> bool;
}

/// Dense `agent × disease` state table.
#[derive(Clone, Debug)]
pub struct HealthTable {
    agent_count:   usize,
    disease_count: usize,
    states:        Vec<HealthState>,
}

impl HealthTable {
    /// Everyone starts susceptible to every disease.
    pub fn new(agent_count: usize, disease_count: u8) -> Self {
        let disease_count = usize::from(disease_count);
        Self {
            agent_count,
            disease_count,
            states: vec![HealthState::Susceptible; agent_count * disease_count],
        }
    }

    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    pub fn disease_count(&self) -> usize {
        self.disease_count
    }

    #[inline]
    fn slot(&self, agent: AgentId, disease: DiseaseId) -> usize {
        assert!(
            agent.index() < self.agent_count && disease.index() < self.disease_count,
            "{agent} / {disease} outside health table of {} agents × {} diseases",
            self.agent_count,
            self.disease_count,
        );
        agent.index() * self.disease_count + disease.index()
    }

    pub fn state(&self, agent: AgentId, disease: DiseaseId) -> HealthState {
        self.states[self.slot(agent, disease)]
    }

    pub fn set_state(&mut self, agent: AgentId, disease: DiseaseId, state: HealthState) {
        let slot = self.slot(agent, disease);
        self.states[slot] = state;
    }

    /// Seed an infection.
    pub fn infect(&mut self, agent: AgentId, disease: DiseaseId) {
        self.set_state(agent, disease, HealthState::Infectious);
    }

    /// Move every still-susceptible infectee to `Infectious`.
    ///
    /// Returns the number of agents that changed state.
    pub fn apply(&mut self, exposures: &[Exposure]) -> usize {
        let mut changed = 0;
        for e in exposures {
            if self.state(e.infectee, e.disease) == HealthState::Susceptible {
                self.infect(e.infectee, e.disease);
                changed += 1;
            }
        }
        changed
    }

    /// Number of agents in `state` for `disease`.
    pub fn count(&self, disease: DiseaseId, state: HealthState) -> usize {
        (0..self.agent_count)
            .filter(|&a| self.states[a * self.disease_count + disease.index()] == state)
            .count()
    }
}

impl HealthView for HealthTable {
    #[inline]
    fn is_infectious(&self, agent: AgentId, disease: DiseaseId) -> bool {
        self.state(agent, disease) == HealthState::Infectious
    }

    #[inline]
    fn is_susceptible(&self, agent: AgentId, disease: DiseaseId) -> bool {
        self.state(agent, disease) == HealthState::Susceptible
    }
}
