//! Per-day evaluation results.

use cn_core::{AgentId, Day, DiseaseId, NetworkId};

/// A successful transmission draw: `infectee` was exposed to `disease` by
/// `infector` through `network` on `day`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Exposure {
    pub day:      Day,
    pub network:  NetworkId,
    pub disease:  DiseaseId,
    pub infector: AgentId,
    pub infectee: AgentId,
}

/// What one network did for one disease on one day.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkDaySummary {
    pub day:        Day,
    pub network:    NetworkId,
    pub disease:    DiseaseId,
    /// `false` when the activity gate closed the network.
    pub open:       bool,
    /// Infectious members at the start of the evaluation.
    pub infectious: usize,
    /// Contacts drawn across all infectious members.
    pub contacts:   usize,
    /// Contacts with susceptible partners.
    pub susceptible_contacts: usize,
    /// Successful transmission draws, before cross-network de-duplication.
    pub exposures:  usize,
}

impl NetworkDaySummary {
    pub(crate) fn new(day: Day, network: NetworkId, disease: DiseaseId) -> Self {
        Self {
            day,
            network,
            disease,
            open:                 false,
            infectious:           0,
            contacts:             0,
            susceptible_contacts: 0,
            exposures:            0,
        }
    }
}
