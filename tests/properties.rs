use density_clustering::{AbsoluteDifference, Dbscan, Error};
use proptest::prelude::*;

fn cluster(input: &[i32], min_points: usize, eps: f64) -> Vec<Vec<i32>> {
    let mut model = Dbscan::new(Some(input), min_points, eps, Some(AbsoluteDifference)).unwrap();
    model.perform_clustering().unwrap()
}

proptest! {
    #[test]
    fn prop_clusters_are_dense(
        input in prop::collection::vec(0i32..200, 2..80),
        min_points in 2usize..6,
        eps in 0.0f64..6.0,
    ) {
        for c in cluster(&input, min_points, eps) {
            prop_assert!(c.len() >= min_points);
        }
    }

    #[test]
    fn prop_members_are_reachable(
        input in prop::collection::vec(0i32..200, 2..80),
        min_points in 2usize..6,
        eps in 0.0f64..6.0,
    ) {
        for c in cluster(&input, min_points, eps) {
            for (i, a) in c.iter().enumerate() {
                prop_assert!(input.contains(a));
                let near = c
                    .iter()
                    .enumerate()
                    .any(|(j, b)| i != j && f64::from((a - b).abs()) <= eps);
                prop_assert!(near);
            }
        }
    }

    #[test]
    fn prop_runs_are_repeatable(
        input in prop::collection::vec(0i32..200, 2..80),
        min_points in 2usize..6,
        eps in 0.0f64..6.0,
    ) {
        let mut model =
            Dbscan::new(Some(&input[..]), min_points, eps, Some(AbsoluteDifference)).unwrap();
        let first = model.perform_clustering().unwrap();
        let second = model.perform_clustering().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_no_duplicates_across_merges(
        input in prop::collection::hash_set(0i32..200, 2..80),
        min_points in 2usize..6,
        eps in 0.0f64..6.0,
    ) {
        let input: Vec<i32> = input.into_iter().collect();
        for c in cluster(&input, min_points, eps) {
            let mut sorted = c.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), c.len());
        }
    }

    #[test]
    fn prop_invalid_configuration_is_rejected(
        input in prop::collection::vec(0i32..200, 2..20),
        min_points in 0usize..2,
        eps in -10.0f64..-0.001,
    ) {
        let mut model =
            Dbscan::new(Some(&input[..]), min_points, eps, Some(AbsoluteDifference)).unwrap();
        prop_assert_eq!(model.perform_clustering(), Err(Error::NegativeDistance { eps }));
        model.set_max_distance(eps.abs());
        prop_assert_eq!(model.perform_clustering(), Err(Error::TooFewMembers { min_points }));
    }
}
