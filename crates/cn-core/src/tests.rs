//! Unit tests for cn-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, DiseaseId, GroupId, NetworkId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn disease_id_rejects_oversized_index() {
        assert!(DiseaseId::try_from(300usize).is_err());
        assert_eq!(DiseaseId::try_from(3usize).unwrap(), DiseaseId(3));
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(NetworkId(100) > NetworkId(99));
    }

    #[test]
    fn default_group_is_zero() {
        assert_eq!(GroupId::DEFAULT, GroupId(0));
    }

    #[test]
    fn all_diseases() {
        let ids: Vec<DiseaseId> = DiseaseId::all(3).collect();
        assert_eq!(ids, vec![DiseaseId(0), DiseaseId(1), DiseaseId(2)]);
        assert_eq!(DiseaseId::all(0).count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(DiseaseId(1).to_string(), "DiseaseId(1)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn lon_lat_order() {
        let p = GeoPoint::from_lon_lat(-79.99, 40.44);
        assert_eq!(p, GeoPoint::new(40.44, -79.99));
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod time {
    use crate::{CnError, Day, DiseaseId, RunConfig};

    fn config(disease_count: u8) -> RunConfig {
        RunConfig { seed: 42, days: 30, disease_count, num_threads: None }
    }

    #[test]
    fn day_arithmetic() {
        let d = Day(10);
        assert_eq!(d + 5, Day(15));
        assert_eq!(d.offset(3), Day(13));
        assert_eq!(d.next(), Day(11));
        assert_eq!(d.to_string(), "day 10");
    }

    #[test]
    fn day_range_covers_run() {
        let cfg = config(1);
        let days: Vec<Day> = cfg.day_range().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], Day::ZERO);
        assert_eq!(*days.last().unwrap(), Day(29));
        assert_eq!(cfg.end_day(), Day(30));
    }

    #[test]
    fn check_disease_bounds() {
        let cfg = config(2);
        assert!(cfg.check_disease(DiseaseId(1)).is_ok());
        assert!(matches!(
            cfg.check_disease(DiseaseId(2)),
            Err(CnError::DiseaseOutOfRange(DiseaseId(2)))
        ));
        assert_eq!(cfg.diseases().count(), 2);
    }

    #[test]
    fn validate_rejects_zero_diseases() {
        assert!(config(0).validate().is_err());
        assert!(config(1).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_threads() {
        let cfg = RunConfig { num_threads: Some(0), ..config(1) };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{ContactRng, Day, DiseaseId, NetworkId};

    #[test]
    fn deterministic_same_coordinates() {
        let mut r1 = ContactRng::for_evaluation(12345, Day(3), NetworkId(0), DiseaseId(0));
        let mut r2 = ContactRng::for_evaluation(12345, Day(3), NetworkId(0), DiseaseId(0));
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn coordinates_diverge() {
        let base: u64 = ContactRng::for_evaluation(1, Day(0), NetworkId(0), DiseaseId(0)).gen_range(0..u64::MAX);
        let day: u64 = ContactRng::for_evaluation(1, Day(1), NetworkId(0), DiseaseId(0)).gen_range(0..u64::MAX);
        let net: u64 = ContactRng::for_evaluation(1, Day(0), NetworkId(1), DiseaseId(0)).gen_range(0..u64::MAX);
        let dis: u64 = ContactRng::for_evaluation(1, Day(0), NetworkId(0), DiseaseId(1)).gen_range(0..u64::MAX);
        assert_ne!(base, day);
        assert_ne!(base, net);
        assert_ne!(base, dis);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = ContactRng::from_seed(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }

    #[test]
    fn round_stochastic_whole_numbers_are_exact() {
        let mut rng = ContactRng::from_seed(7);
        for _ in 0..100 {
            assert_eq!(rng.round_stochastic(4.0), 4);
            assert_eq!(rng.round_stochastic(0.0), 0);
        }
    }

    #[test]
    fn round_stochastic_stays_between_floor_and_ceil() {
        let mut rng = ContactRng::from_seed(7);
        let mut total = 0usize;
        for _ in 0..10_000 {
            let n = rng.round_stochastic(1.5);
            assert!(n == 1 || n == 2, "got {n}");
            total += n;
        }
        // Mean should be close to 1.5.
        let mean = total as f64 / 10_000.0;
        assert!((mean - 1.5).abs() < 0.05, "mean {mean}");
    }

    #[test]
    fn round_stochastic_rejects_garbage() {
        let mut rng = ContactRng::from_seed(0);
        assert_eq!(rng.round_stochastic(-3.0), 0);
        assert_eq!(rng.round_stochastic(f64::NAN), 0);
    }
}
