//! The concrete `Network` type.

use std::fmt;
use std::sync::Arc;

use cn_core::{AgentId, Day, DiseaseId, GeoPoint, GroupId, NetworkId};
use cn_params::NetworkParams;
use cn_place::{Container, Place, PlaceKind};

use crate::{ActivityGate, AlwaysOpen, ContactNetwork, GroupPolicy, NetworkError, NetworkResult, SingleGroup};

/// One contact network: a place roster, the run's shared parameter table,
/// and the group-assignment and activity-gate policies of its subtype.
///
/// The defaults (`SingleGroup`, `AlwaysOpen`) give the plain network
/// behavior: one group per disease, never closed.  Richer subtypes swap the
/// policies with [`with_groups`](Self::with_groups) and
/// [`with_gate`](Self::with_gate) without touching the evaluator.
///
/// # Example
///
/// ```rust,ignore
/// let params = cn_params::get_parameters(path, 1)?;
/// let place = Place::with_members("friends", PlaceKind::AcquaintanceNetwork, anchor, members)?;
/// let net = Network::new(NetworkId(0), place, Arc::clone(&params))?;
/// let p = net.get_transmission_prob(DiseaseId(0), infector, susceptible);
/// ```
pub struct Network<G: GroupPolicy = SingleGroup, A: ActivityGate = AlwaysOpen> {
    id:     NetworkId,
    place:  Place,
    params: Arc<NetworkParams>,
    groups: G,
    gate:   A,
}

impl Network {
    /// Wrap `place` as a network with the default policies.
    ///
    /// Fails if `place` is a spatial kind (household, school, …).
    pub fn new(id: NetworkId, place: Place, params: Arc<NetworkParams>) -> NetworkResult<Self> {
        if !place.kind().is_network() {
            return Err(NetworkError::NotANetwork {
                label: place.label().to_owned(),
                kind:  place.kind(),
            });
        }
        Ok(Self { id, place, params, groups: SingleGroup, gate: AlwaysOpen })
    }
}

impl<G: GroupPolicy, A: ActivityGate> Network<G, A> {
    /// Replace the group-assignment policy.
    pub fn with_groups<G2: GroupPolicy>(self, groups: G2) -> Network<G2, A> {
        Network { id: self.id, place: self.place, params: self.params, groups, gate: self.gate }
    }

    /// Replace the activity gate.
    pub fn with_gate<A2: ActivityGate>(self, gate: A2) -> Network<G, A2> {
        Network { id: self.id, place: self.place, params: self.params, groups: self.groups, gate }
    }

    pub fn place(&self) -> &Place {
        &self.place
    }

    /// Mutable roster access for network-building code.
    ///
    /// Only population setup should call this; the evaluator never does.
    pub fn place_mut(&mut self) -> &mut Place {
        &mut self.place
    }

    pub fn label(&self) -> &str {
        self.place.label()
    }

    pub fn kind(&self) -> PlaceKind {
        self.place.kind()
    }

    pub fn anchor(&self) -> GeoPoint {
        self.place.anchor()
    }

    /// Shared handle to the parameter table.
    pub fn params_handle(&self) -> &Arc<NetworkParams> {
        &self.params
    }

    /// Emit the diagnostic dump of this network through the logger.
    pub fn print(&self) {
        log::info!("{self}");
    }
}

impl<G: GroupPolicy, A: ActivityGate> ContactNetwork for Network<G, A> {
    fn id(&self) -> NetworkId {
        self.id
    }

    fn container(&self) -> &dyn Container {
        &self.place
    }

    fn params(&self) -> &NetworkParams {
        &self.params
    }

    #[inline]
    fn get_group(&self, disease: DiseaseId, agent: AgentId) -> GroupId {
        self.groups.group(disease, agent)
    }

    #[inline]
    fn should_be_open(&self, day: Day, disease: DiseaseId) -> bool {
        self.gate.is_active(day, disease, &self.place)
    }
}

impl<G: GroupPolicy, A: ActivityGate> fmt::Debug for Network<G, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("id", &self.id)
            .field("label", &self.place.label())
            .field("kind", &self.place.kind())
            .field("size", &self.place.size())
            .finish_non_exhaustive()
    }
}

impl<G: GroupPolicy, A: ActivityGate> fmt::Display for Network<G, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {:?} kind={} anchor={} size={}",
            self.id,
            self.place.label(),
            self.place.kind(),
            self.place.anchor(),
            self.place.size(),
        )?;
        write!(f, "{}", self.params)
    }
}
