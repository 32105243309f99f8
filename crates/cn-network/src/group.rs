//! Group assignment: which row of the transmission matrix an agent uses.
//!
//! The transmission evaluator selects the matrix entry with the
//! *susceptible* agent's group.  Policies are consulted per call and hold no
//! per-day state.

use rustc_hash::FxHashMap;

use cn_core::{AgentId, DiseaseId, GroupId};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Partition of a network's members into transmission groups.
///
/// # Contract
///
/// - Deterministic: the same `(disease, agent)` always yields the same group.
/// - Must not block or perform I/O.
/// - `Send + Sync`: shared across the driver's worker threads.
///
/// Returning a group the parameter table does not configure is a wiring
/// defect; the evaluator panics on the lookup.
pub trait GroupPolicy: Send + Sync {
    fn group(&self, disease: DiseaseId, agent: AgentId) -> GroupId;
}

// ── Single group ──────────────────────────────────────────────────────────────

/// Every agent is in group 0 for every disease, so the matrix is a per-disease
/// scalar.  The default policy.
#[derive(Copy, Clone, Debug, Default)]
pub struct SingleGroup;

impl GroupPolicy for SingleGroup {
    #[inline]
    fn group(&self, _disease: DiseaseId, _agent: AgentId) -> GroupId {
        GroupId::DEFAULT
    }
}

// ── Explicit assignment ───────────────────────────────────────────────────────

/// Per-agent group table, e.g. behavior classes decided at population setup.
///
/// Agents without an entry fall back to `fallback`; with no fallback an
/// unassigned agent is a setup defect and the lookup panics.
#[derive(Clone, Debug, Default)]
pub struct AssignedGroups {
    groups:   FxHashMap<AgentId, GroupId>,
    fallback: Option<GroupId>,
}

impl AssignedGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `group` for any agent without an explicit assignment.
    pub fn with_fallback(mut self, group: GroupId) -> Self {
        self.fallback = Some(group);
        self
    }

    /// Assign (or reassign) `agent` to `group`.
    pub fn assign(&mut self, agent: AgentId, group: GroupId) {
        self.groups.insert(agent, group);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromIterator<(AgentId, GroupId)> for AssignedGroups {
    fn from_iter<I: IntoIterator<Item = (AgentId, GroupId)>>(iter: I) -> Self {
        Self { groups: iter.into_iter().collect(), fallback: None }
    }
}

impl GroupPolicy for AssignedGroups {
    fn group(&self, disease: DiseaseId, agent: AgentId) -> GroupId {
        match self.groups.get(&agent).copied().or(self.fallback) {
            Some(group) => group,
            None => panic!("{agent} has no group assignment for {disease} and no fallback group is set"),
        }
    }
}

// ── Per-disease override ──────────────────────────────────────────────────────

/// Uses a dedicated table for selected diseases and delegates the rest.
///
/// Lets one disease (say, a sexually transmitted one) distinguish behavior
/// classes while the others keep a single group.
pub struct DiseaseGroups<P: GroupPolicy> {
    default:   P,
    overrides: FxHashMap<DiseaseId, AssignedGroups>,
}

impl<P: GroupPolicy> DiseaseGroups<P> {
    pub fn new(default: P) -> Self {
        Self { default, overrides: FxHashMap::default() }
    }

    /// Route lookups for `disease` to `groups`.
    pub fn with_override(mut self, disease: DiseaseId, groups: AssignedGroups) -> Self {
        self.overrides.insert(disease, groups);
        self
    }
}

impl<P: GroupPolicy> GroupPolicy for DiseaseGroups<P> {
    fn group(&self, disease: DiseaseId, agent: AgentId) -> GroupId {
        match self.overrides.get(&disease) {
            Some(groups) => groups.group(disease, agent),
            None => self.default.group(disease, agent),
        }
    }
}
