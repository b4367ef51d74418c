//! Unit tests for lift-core primitives.

#[cfg(test)]
mod floors {
    use crate::{FloorSet, LiftError};

    #[test]
    fn range_skips_zero() {
        let floors = FloorSet::from_range(-10, 10).unwrap();
        assert_eq!(floors.len(), 20);
        assert_eq!(floors.lowest(), Some(-10));
        assert_eq!(floors.highest(), Some(10));
        assert!(!floors.contains(0));
    }

    #[test]
    fn size_is_high_minus_low_when_range_spans_zero() {
        for (low, high) in [(-1, 1), (-3, 5), (-7, 2), (-1, 40)] {
            let floors = FloorSet::from_range(low, high).unwrap();
            assert_eq!(floors.len() as i32, high - low, "range ({low}, {high})");
            assert!(floors.iter().all(|f| f != 0));
        }
    }

    #[test]
    fn positive_only_range_keeps_every_floor() {
        let floors = FloorSet::from_range(1, 5).unwrap();
        assert_eq!(floors.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn inverted_range_is_config_error() {
        assert!(matches!(FloorSet::from_range(5, 1), Err(LiftError::Config(_))));
    }

    #[test]
    fn from_floors_sorts_and_drops_zero() {
        let floors = FloorSet::from_floors([3, 0, -1, 3, 1]);
        assert_eq!(floors.as_slice(), &[-1, 1, 3]);
    }

    #[test]
    fn excluding_removes_only_that_floor() {
        let floors = FloorSet::from_floors([-1, 1, 2, 3]);
        assert_eq!(floors.excluding(2), vec![-1, 1, 3]);
        assert_eq!(floors.excluding(7), vec![-1, 1, 2, 3]);
    }

    #[test]
    fn positions_map_to_floors_only_when_integral() {
        let floors = FloorSet::from_range(-2, 3).unwrap();
        assert_eq!(FloorSet::as_floor(3.0), Some(3));
        assert_eq!(FloorSet::as_floor(-2.0), Some(-2));
        assert_eq!(FloorSet::as_floor(2.5), None);
        assert!(floors.contains_position(1.0));
        assert!(!floors.contains_position(0.0));
        assert!(!floors.contains_position(1.5));
        assert!(!floors.contains_position(f64::NAN));
    }
}

#[cfg(test)]
mod direction {
    use crate::{Direction, LiftError};

    #[test]
    fn up_and_down() {
        assert_eq!(Direction::between(1, 10).unwrap(), Direction::Up);
        assert_eq!(Direction::between(10, 1).unwrap(), Direction::Down);
        assert_eq!(Direction::between(-2, 1).unwrap(), Direction::Up);
    }

    #[test]
    fn same_floor_is_error() {
        assert!(matches!(Direction::between(3, 3), Err(LiftError::SameFloor(3))));
    }

    #[test]
    fn sign_and_display() {
        assert_eq!(Direction::Up.sign(), 1);
        assert_eq!(Direction::Down.sign(), -1);
        assert_eq!(Direction::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, PassengerId};

    #[test]
    fn index_roundtrip() {
        let id = PassengerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PassengerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn elevator_id_overflow_is_rejected() {
        assert!(ElevatorId::try_from(70_000usize).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(3).to_string(), "ElevatorId#3");
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, UniformChoice};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<usize> = (0..32).map(|_| a.choose_index(10)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.choose_index(10)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut rng = SimRng::new(1);
        for len in 1..20 {
            for _ in 0..50 {
                assert!(rng.choose_index(len) < len);
            }
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [i32; 0] = [];
        assert_eq!(rng.choose(&empty), None);
        assert_eq!(rng.choose(&[5]), Some(5));
    }

    #[test]
    fn every_element_reachable() {
        let mut rng = SimRng::new(99);
        let items = [-1, 1, 2, 3];
        let mut seen = [false; 4];
        for _ in 0..400 {
            let i = rng.choose_index(items.len());
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}

#[cfg(test)]
mod config {
    use crate::{EnvConfig, ErrorKind, LiftError};

    #[test]
    fn default_validates() {
        let floors = EnvConfig::default().validate().unwrap();
        assert_eq!(floors.len(), 10);
    }

    #[test]
    fn zero_people_rejected() {
        let cfg = EnvConfig::new((-2, 5), 0, 1);
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn zero_elevators_rejected() {
        let cfg = EnvConfig::new((-2, 5), 10, 0);
        assert!(matches!(cfg.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn single_floor_rejected() {
        let cfg = EnvConfig::new((1, 1), 10, 1);
        assert!(matches!(cfg.validate(), Err(LiftError::TooFewFloors(1))));
    }

    #[test]
    fn range_without_base_floor_rejected() {
        let cfg = EnvConfig::new((2, 9), 10, 1);
        assert!(matches!(cfg.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn zero_capacity_rejected() {
        let cfg = EnvConfig { car_capacity: Some(0), ..EnvConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod errors {
    use crate::{ElevatorId, ErrorKind, LiftError};

    #[test]
    fn kinds() {
        assert_eq!(
            LiftError::ActionCountMismatch { expected: 2, got: 1 }.kind(),
            ErrorKind::Configuration
        );
        assert_eq!(LiftError::UnknownElevator(ElevatorId(4)).kind(), ErrorKind::Configuration);
        assert_eq!(LiftError::ReservoirExhausted.kind(), ErrorKind::Invariant);
        assert_eq!(LiftError::InvalidVelocity(0.25).kind(), ErrorKind::Invariant);
        assert_eq!(LiftError::NotAtFloor(2.5).kind(), ErrorKind::Invariant);
    }

    #[test]
    fn messages_name_the_values() {
        let msg = LiftError::ActionCountMismatch { expected: 3, got: 2 }.to_string();
        assert!(msg.contains('3') && msg.contains('2'), "{msg}");
    }
}
