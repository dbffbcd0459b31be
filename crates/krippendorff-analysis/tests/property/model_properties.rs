//! Property tests for the coincidence model: symmetry, conservation,
//! order invariance, and the closed-form pair count.

use krippendorff_analysis::{
    build_coincidence_matrix, compute_alpha, BigRational, CoincidenceModel, ObserverRecord,
    UnitId, UnitTally,
};
use proptest::prelude::*;

/// Observers × units grid of optional ratings in 1..=max_value.
fn reliability_data() -> impl Strategy<Value = Vec<Vec<Option<u32>>>> {
    (1usize..6, 1usize..10, 1u32..6).prop_flat_map(|(observers, units, max_value)| {
        prop::collection::vec(
            prop::collection::vec(prop::option::of(1..=max_value), units),
            observers,
        )
    })
}

fn to_records(grid: &[Vec<Option<u32>>]) -> Vec<ObserverRecord> {
    grid.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(u, &value)| (UnitId::from(u as u32), value))
                .collect()
        })
        .collect()
}

fn build(grid: &[Vec<Option<u32>>]) -> CoincidenceModel {
    CoincidenceModel::new(to_records(grid)).unwrap()
}

/// Ordered pairs of distinct observers (i, j) with i → c and j → k.
fn brute_force_pairs(ratings: &[Option<u32>], c: u32, k: u32) -> u64 {
    let mut pairs = 0;
    for (i, &a) in ratings.iter().enumerate() {
        for (j, &b) in ratings.iter().enumerate() {
            if i != j && a == Some(c) && b == Some(k) {
                pairs += 1;
            }
        }
    }
    pairs
}

proptest! {
    #[test]
    fn matrix_is_symmetric(grid in reliability_data()) {
        let model = build(&grid);
        prop_assert!(model.coincidence_matrix().is_symmetric());
        for (c, k) in model.value_pairs() {
            prop_assert_eq!(
                model.observed_coincidence(c, k).unwrap(),
                model.observed_coincidence(k, c).unwrap()
            );
        }
    }

    #[test]
    fn total_is_conserved(grid in reliability_data()) {
        let model = build(&grid);
        let marginal_sum: BigRational = model.marginals().iter().sum();
        prop_assert_eq!(&marginal_sum, model.total());

        let pairable_mass: usize = model
            .units()
            .iter()
            .map(|u| model.participation(u))
            .filter(|&m| m >= 2)
            .sum();
        prop_assert_eq!(model.total().clone(), BigRational::from_integer(pairable_mass.into()));
    }

    #[test]
    fn unit_iteration_order_is_irrelevant(grid in reliability_data(), seed in any::<u64>()) {
        let model = build(&grid);
        let records = to_records(&grid);

        let mut units = model.units().to_vec();
        // Deterministic shuffle from the seed.
        let mut state = seed | 1;
        for i in (1..units.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            units.swap(i, (state >> 33) as usize % (i + 1));
        }

        let shuffled = build_coincidence_matrix(&records, &units, model.values());
        prop_assert_eq!(&shuffled, model.coincidence_matrix());

        let marginals = shuffled.marginals();
        let total: BigRational = marginals.iter().sum();
        prop_assert_eq!(marginals.as_slice(), model.marginals());
        prop_assert_eq!(compute_alpha(&shuffled, &marginals, &total).ok(), model.alpha().ok());
    }

    #[test]
    fn unit_relabeling_is_irrelevant(grid in reliability_data()) {
        // Same data under non-numeric labels sorts differently but rates identically.
        let relabeled: Vec<ObserverRecord> = grid
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(u, &v)| (format!("unit-{}", 100 - u), v))
                    .collect()
            })
            .collect();
        let a = build(&grid);
        let b = CoincidenceModel::new(relabeled).unwrap();
        prop_assert_eq!(a.coincidence_matrix(), b.coincidence_matrix());
        prop_assert_eq!(a.alpha().ok(), b.alpha().ok());
    }

    #[test]
    fn observer_order_is_irrelevant(grid in reliability_data()) {
        let mut reversed = grid.clone();
        reversed.reverse();
        let mut rotated = grid.clone();
        rotated.rotate_left(1);

        let a = build(&grid);
        for other in [reversed, rotated] {
            let b = build(&other);
            prop_assert_eq!(a.coincidence_matrix(), b.coincidence_matrix());
            prop_assert_eq!(a.total(), b.total());
            prop_assert_eq!(a.alpha().ok(), b.alpha().ok());
        }
    }

    #[test]
    fn perfect_agreement_is_one(
        truth in prop::collection::vec(1u32..5, 2..10),
        mask in prop::collection::vec(prop::collection::vec(any::<bool>(), 10), 3),
    ) {
        let grid: Vec<Vec<Option<u32>>> = mask
            .iter()
            .map(|keep| truth.iter().zip(keep).map(|(&v, &k)| k.then_some(v)).collect())
            .collect();
        let model = build(&grid);
        // Defined only when at least two values appear among pairable ratings.
        if let Ok(alpha) = model.alpha() {
            prop_assert_eq!(alpha.to_string(), "1");
        }
    }

    #[test]
    fn alpha_defined_or_explicitly_undefined(grid in reliability_data()) {
        let model = build(&grid);
        match model.alpha() {
            Ok(alpha) => prop_assert!(alpha.to_f64() <= 1.0),
            Err(e) => prop_assert_eq!(
                krippendorff_core::errors::KrippErrorCode::error_code(&e),
                "UNDEFINED_COEFFICIENT"
            ),
        }
    }

    #[test]
    fn ordered_pairs_match_brute_force(
        ratings in prop::collection::vec(prop::option::of(1u32..5), 0..8),
        c in 1u32..5,
        k in 1u32..5,
    ) {
        let observers: Vec<ObserverRecord> = ratings
            .iter()
            .map(|&value| std::iter::once(("u", value)).collect())
            .collect();
        let tally = UnitTally::from_observers(&observers, &UnitId::from("u"));
        let expected = brute_force_pairs(&ratings, c, k);
        prop_assert_eq!(tally.ordered_pairs(c, k), expected);

        let m = ratings.iter().flatten().count();
        prop_assert_eq!(tally.participation(), m);
        let contribution = if m < 2 {
            BigRational::from_integer(0.into())
        } else {
            BigRational::new(expected.into(), (m as u64 - 1).into())
        };
        prop_assert_eq!(tally.contribution(c, k), contribution);
    }
}
