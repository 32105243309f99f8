//! Activity gates: whether a network produces contacts on a given day.
//!
//! The driver asks the gate before any other question; a closed network
//! contributes zero contacts that day.  Gates compose: chain them with
//! `gate_a.and(gate_b)` to require both to be open.

use cn_core::{Day, DiseaseId};
use cn_place::{ClosureWindow, Container};

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Day-level open/closed policy for a network.
///
/// # Contract
///
/// - Deterministic given `(day, disease)` and the place state.
/// - Must not block or perform I/O.
/// - `Send + Sync`: shared across the driver's worker threads.
pub trait ActivityGate: Send + Sync {
    fn is_active(&self, day: Day, disease: DiseaseId, place: &dyn Container) -> bool;
}

// ── Always open ───────────────────────────────────────────────────────────────

/// Networks of this kind are never closed.  The default gate.
#[derive(Copy, Clone, Debug, Default)]
pub struct AlwaysOpen;

impl ActivityGate for AlwaysOpen {
    #[inline]
    fn is_active(&self, _day: Day, _disease: DiseaseId, _place: &dyn Container) -> bool {
        true
    }
}

// ── Place closure ─────────────────────────────────────────────────────────────

/// Defers to the place's own closure window for every disease.
#[derive(Copy, Clone, Debug, Default)]
pub struct FollowPlace;

impl ActivityGate for FollowPlace {
    #[inline]
    fn is_active(&self, day: Day, _disease: DiseaseId, place: &dyn Container) -> bool {
        place.is_open(day)
    }
}

// ── Intervention closure ──────────────────────────────────────────────────────

/// Closed for the listed diseases during `window`; open otherwise.
///
/// Models interventions that suspend contact for one pathogen only, such as
/// a campaign targeting a single infection.
#[derive(Clone, Debug)]
pub struct ClosedForDiseases {
    diseases: Vec<DiseaseId>,
    window:   ClosureWindow,
}

impl ClosedForDiseases {
    pub fn new(diseases: impl IntoIterator<Item = DiseaseId>, window: ClosureWindow) -> Self {
        Self { diseases: diseases.into_iter().collect(), window }
    }
}

impl ActivityGate for ClosedForDiseases {
    fn is_active(&self, day: Day, disease: DiseaseId, _place: &dyn Container) -> bool {
        !self.diseases.contains(&disease) || self.window.is_open(day)
    }
}

// ── Composition ───────────────────────────────────────────────────────────────

/// Open only when both inner gates are open.
///
/// Construct with `gate_a.and(gate_b)`.
pub struct BothGates<A: ActivityGate, B: ActivityGate> {
    first:  A,
    second: B,
}

impl<A: ActivityGate, B: ActivityGate> ActivityGate for BothGates<A, B> {
    fn is_active(&self, day: Day, disease: DiseaseId, place: &dyn Container) -> bool {
        self.first.is_active(day, disease, place) && self.second.is_active(day, disease, place)
    }
}

/// Extension trait that adds `.and(other)` to any `ActivityGate`.
pub trait ActivityGateExt: ActivityGate + Sized {
    fn and<B: ActivityGate>(self, other: B) -> BothGates<Self, B> {
        BothGates { first: self, second: other }
    }
}

impl<G: ActivityGate + Sized> ActivityGateExt for G {}
