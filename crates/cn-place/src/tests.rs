//! Unit tests for cn-place.

use cn_core::{AgentId, Day, GeoPoint};

use crate::{ClosureWindow, Container, Place, PlaceError, PlaceKind};

fn network(members: &[u32]) -> Place {
    Place::with_members(
        "net-1",
        PlaceKind::Network,
        GeoPoint::new(40.44, -79.99),
        members.iter().copied().map(AgentId),
    )
    .unwrap()
}

#[cfg(test)]
mod kind {
    use super::*;

    #[test]
    fn network_kinds() {
        assert!(PlaceKind::Network.is_network());
        assert!(PlaceKind::AcquaintanceNetwork.is_network());
        assert!(PlaceKind::SexualPartnerNetwork.is_network());
        assert!(!PlaceKind::Household.is_network());
        assert!(!PlaceKind::School.is_network());
    }

    #[test]
    fn display() {
        assert_eq!(PlaceKind::Network.to_string(), "network");
        assert_eq!(PlaceKind::AcquaintanceNetwork.to_string(), "acquaintance_network");
    }
}

#[cfg(test)]
mod roster {
    use super::*;

    #[test]
    fn empty_place_has_size_zero() {
        let place = Place::new("empty", PlaceKind::Network, GeoPoint::default());
        assert_eq!(place.size(), 0);
        assert!(place.members().is_empty());
    }

    #[test]
    fn size_tracks_enrollment() {
        let mut place = network(&[1, 2, 3]);
        assert_eq!(place.size(), 3);
        place.enroll(AgentId(9)).unwrap();
        assert_eq!(place.size(), 4);
        assert!(place.contains(AgentId(9)));
    }

    #[test]
    fn duplicate_enrollment_rejected() {
        let mut place = network(&[1]);
        let err = place.enroll(AgentId(1)).unwrap_err();
        assert!(matches!(err, PlaceError::AlreadyEnrolled { agent: AgentId(1), .. }));
        assert_eq!(place.size(), 1);
    }

    #[test]
    fn with_members_rejects_duplicates() {
        let result = Place::with_members(
            "dup",
            PlaceKind::Network,
            GeoPoint::default(),
            [AgentId(1), AgentId(1)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn unenroll_keeps_slots_consistent() {
        let mut place = network(&[1, 2, 3, 4]);
        place.unenroll(AgentId(2)).unwrap();
        assert_eq!(place.size(), 3);
        assert!(!place.contains(AgentId(2)));
        // The moved member (4) must still be removable.
        place.unenroll(AgentId(4)).unwrap();
        assert_eq!(place.members(), &[AgentId(1), AgentId(3)]);
    }

    #[test]
    fn unenroll_missing_agent_errors() {
        let mut place = network(&[1]);
        assert!(matches!(
            place.unenroll(AgentId(5)),
            Err(PlaceError::NotEnrolled { agent: AgentId(5), .. })
        ));
    }

    #[test]
    fn identity_accessors() {
        let place = network(&[]);
        assert_eq!(place.label(), "net-1");
        assert_eq!(place.kind(), PlaceKind::Network);
        assert_eq!(place.anchor(), GeoPoint::new(40.44, -79.99));
    }
}

#[cfg(test)]
mod closure {
    use super::*;

    #[test]
    fn open_without_window() {
        let place = network(&[1]);
        assert!(place.is_open(Day(0)));
        assert!(place.is_open(Day(10_000)));
    }

    #[test]
    fn window_is_half_open() {
        let mut place = network(&[1]);
        place.set_closure(ClosureWindow::new(Day(5), Day(8)));
        assert!(place.is_open(Day(4)));
        assert!(!place.is_open(Day(5)));
        assert!(!place.is_open(Day(7)));
        assert!(place.is_open(Day(8)));
    }

    #[test]
    fn clear_closure_reopens() {
        let mut place = network(&[1]);
        place.set_closure(ClosureWindow::new(Day(0), Day(100)));
        assert!(!place.is_open(Day(1)));
        place.clear_closure();
        assert!(place.is_open(Day(1)));
        assert!(place.closure().is_none());
    }
}
