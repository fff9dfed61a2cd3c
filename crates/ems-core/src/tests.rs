//! Unit tests for ems-core.

#[cfg(test)]
mod ids {
    use crate::{NodeId, VehicleId};

    #[test]
    fn invalid_sentinel() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert_eq!(VehicleId::default(), VehicleId::INVALID);
    }

    #[test]
    fn index_roundtrip() {
        let id = NodeId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(usize::from(id), 7);
        assert_eq!(NodeId::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn ordering_is_numeric() {
        let mut ids = vec![VehicleId(3), VehicleId(0), VehicleId(2)];
        ids.sort();
        assert_eq!(ids, vec![VehicleId(0), VehicleId(2), VehicleId(3)]);
    }

    #[test]
    fn try_from_overflow() {
        assert!(NodeId::try_from(usize::MAX).is_err() || usize::MAX <= u32::MAX as usize);
    }
}

#[cfg(test)]
mod coord {
    use crate::Coord;

    #[test]
    fn euclidean_distance() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn zero_distance_to_self() {
        let a = Coord::new(-2.5, 7.0);
        assert_eq!(a.distance_to(a), 0.0);
    }
}
