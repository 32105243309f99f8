//! Place subtype tag.
//!
//! Spatial kinds exist so that a mixed population can be described with one
//! enum; only the network kinds are evaluated by this workspace.

/// What sort of place a roster belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum PlaceKind {
    Household,
    School,
    Workplace,
    Neighborhood,
    /// Generic non-spatial contact network.
    #[default]
    Network,
    /// Acquaintance / friendship network.
    AcquaintanceNetwork,
    /// Risk-behavior network (e.g. sexual partnerships).
    SexualPartnerNetwork,
}

impl PlaceKind {
    /// `true` for non-geographic contact networks.
    #[inline]
    pub fn is_network(self) -> bool {
        matches!(
            self,
            PlaceKind::Network | PlaceKind::AcquaintanceNetwork | PlaceKind::SexualPartnerNetwork
        )
    }

    /// Short label used in diagnostics and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceKind::Household            => "household",
            PlaceKind::School               => "school",
            PlaceKind::Workplace            => "workplace",
            PlaceKind::Neighborhood         => "neighborhood",
            PlaceKind::Network              => "network",
            PlaceKind::AcquaintanceNetwork  => "acquaintance_network",
            PlaceKind::SexualPartnerNetwork => "sexual_partner_network",
        }
    }
}

impl std::fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
