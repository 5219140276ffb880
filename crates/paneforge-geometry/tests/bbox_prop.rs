use paneforge_core::Vec3;
use paneforge_geometry::Bbox;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    (-64i32..64).prop_map(|c| f64::from(c) * 128.0)
}

fn point() -> impl Strategy<Value = Vec3> {
    (coord(), coord(), coord()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn fold(points: &[Vec3]) -> Bbox {
    let mut bbox = Bbox::point(points[0]);
    for p in &points[1..] {
        bbox.include(*p);
    }
    bbox
}

proptest! {
    #[test]
    fn fold_is_order_independent(mut points in prop::collection::vec(point(), 1..24)) {
        let forward = fold(&points);
        points.reverse();
        let backward = fold(&points);
        let mid = points.len() / 2;
        points.rotate_left(mid);
        let rotated = fold(&points);
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, rotated);
    }

    #[test]
    fn fold_contains_every_point(points in prop::collection::vec(point(), 1..24)) {
        let bbox = fold(&points);
        for p in &points {
            prop_assert!(bbox.contains_point(*p));
        }
    }

    #[test]
    fn fold_bounds_are_attained(points in prop::collection::vec(point(), 1..24)) {
        let bbox = fold(&points);
        prop_assert!(points.iter().any(|p| p.x == bbox.min.x));
        prop_assert!(points.iter().any(|p| p.z == bbox.max.z));
    }
}
