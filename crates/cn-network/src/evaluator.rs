//! The `ContactNetwork` trait: the transmission evaluator seen by drivers.

use cn_core::{AgentId, Day, DiseaseId, GroupId, NetworkId};
use cn_params::NetworkParams;
use cn_place::Container;

/// Everything a day-stepped driver needs from a contact network.
///
/// Only the identity, place, parameter and policy accessors are required;
/// the quantitative methods have default bodies so every network subtype
/// shares the same formulas.  Object safe, so heterogeneous networks can be
/// driven through `&dyn ContactNetwork`.
///
/// # Thread safety
///
/// Implementations are read-only during evaluation and must be
/// `Send + Sync`.
pub trait ContactNetwork: Send + Sync {
    /// Index of this network within the run.
    fn id(&self) -> NetworkId;

    /// Roster, identity and open/closed view of the underlying place.
    fn container(&self) -> &dyn Container;

    /// The run's shared parameter table.
    fn params(&self) -> &NetworkParams;

    /// Transmission group of `agent` under `disease`.
    fn get_group(&self, disease: DiseaseId, agent: AgentId) -> GroupId;

    /// Whether the network produces any contacts on `day` for `disease`.
    fn should_be_open(&self, day: Day, disease: DiseaseId) -> bool;

    /// Mean contacts per member per day for `disease`.
    ///
    /// Exactly the configured rate; turning the mean into an integer count
    /// for a specific agent is the caller's draw.
    ///
    /// # Panics
    /// If `disease` is not in the parameter table.
    fn get_contacts_per_day(&self, disease: DiseaseId) -> f64 {
        self.params().contact_rate(disease)
    }

    /// Probability that one contact between `infector` and `susceptible`
    /// transmits `disease`.
    ///
    /// The matrix entry is selected by the susceptible agent's group; the
    /// infector's group does not enter the lookup.
    ///
    /// # Panics
    /// If `disease`, or the group the policy returns, is not in the
    /// parameter table.
    fn get_transmission_prob(&self, disease: DiseaseId, _infector: AgentId, susceptible: AgentId) -> f64 {
        let group = self.get_group(disease, susceptible);
        self.params().transmission_probability(disease, group)
    }

    /// Current roster size.
    fn get_container_size(&self) -> usize {
        self.container().size()
    }
}
