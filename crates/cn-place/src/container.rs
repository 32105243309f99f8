//! The `Container` trait: the read-only place view the transmission kernel
//! depends on.

use cn_core::{AgentId, Day, GeoPoint};

use crate::PlaceKind;

/// Read-only view of a place: identity, roster, and open/closed status.
///
/// Implementations must be `Send + Sync`; networks are shared across worker
/// threads once the population is built.
pub trait Container: Send + Sync {
    /// Human-readable identifier.
    fn label(&self) -> &str;

    /// Subtype tag.
    fn kind(&self) -> PlaceKind;

    /// Reporting anchor.  Never used for transmission.
    fn anchor(&self) -> GeoPoint;

    /// Current roster, in enrollment order (modulo removals).
    fn members(&self) -> &[AgentId];

    /// `true` if `agent` is currently enrolled.
    fn contains(&self, agent: AgentId) -> bool {
        self.members().contains(&agent)
    }

    /// Number of enrolled agents.
    fn size(&self) -> usize {
        self.members().len()
    }

    /// Whether the place is open on `day`.  Default: always open.
    fn is_open(&self, _day: Day) -> bool {
        true
    }
}
