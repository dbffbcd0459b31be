//! Observed coincidence matrix.
//!
//! For a unit rated by m_u observers, every ordered pair of distinct
//! observers contributes `1 / (m_u - 1)` to the cell of the values they
//! assigned. Units with fewer than two ratings contribute nothing.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use tracing::trace;

use krippendorff_core::constants::MIN_PAIRABLE_RATINGS;

use crate::data::{ObserverRecord, Rating, UnitId};

/// Square matrix of exact coincidence counts over the value universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoincidenceMatrix {
    values: Vec<Rating>,
    /// Row-major, `values.len()` squared cells.
    cells: Vec<BigRational>,
}

impl CoincidenceMatrix {
    /// All-zero matrix over `values`.
    pub fn zeros(values: Vec<Rating>) -> Self {
        let dim = values.len();
        Self {
            values,
            cells: vec![BigRational::zero(); dim * dim],
        }
    }

    pub fn values(&self) -> &[Rating] {
        &self.values
    }

    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    fn index_of(&self, value: Rating) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }

    /// O[c][k], or `None` if either value is outside the universe.
    pub fn get(&self, c: Rating, k: Rating) -> Option<&BigRational> {
        let (ci, ki) = (self.index_of(c)?, self.index_of(k)?);
        self.cells.get(ci * self.dimension() + ki)
    }

    pub fn row(&self, c: Rating) -> Option<&[BigRational]> {
        let ci = self.index_of(c)?;
        let dim = self.dimension();
        Some(&self.cells[ci * dim..(ci + 1) * dim])
    }

    /// Rows paired with their value, in universe order.
    pub fn rows(&self) -> impl Iterator<Item = (Rating, &[BigRational])> {
        // chunks(0) panics
        self.values
            .iter()
            .copied()
            .zip(self.cells.chunks(self.dimension().max(1)))
    }

    /// O[c][c] for every value, in universe order.
    pub fn diagonal(&self) -> impl Iterator<Item = &BigRational> {
        let dim = self.dimension();
        (0..dim).map(move |i| &self.cells[i * dim + i])
    }

    /// Row sums N[c], in universe order.
    pub fn marginals(&self) -> Vec<BigRational> {
        self.rows().map(|(_, row)| row.iter().sum()).collect()
    }

    pub fn is_symmetric(&self) -> bool {
        let dim = self.dimension();
        (0..dim).all(|i| (i + 1..dim).all(|j| self.cells[i * dim + j] == self.cells[j * dim + i]))
    }

    fn add(&mut self, c: Rating, k: Rating, amount: &BigRational) {
        if let (Some(ci), Some(ki)) = (self.index_of(c), self.index_of(k)) {
            let dim = self.dimension();
            self.cells[ci * dim + ki] += amount;
        }
    }
}

/// How often each value was assigned to one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTally {
    participation: usize,
    /// (value, observers assigning it), sorted by value.
    counts: Vec<(Rating, u64)>,
}

impl UnitTally {
    pub fn from_observers(observers: &[ObserverRecord], unit: &UnitId) -> Self {
        let mut counts: Vec<(Rating, u64)> = Vec::new();
        let mut participation = 0;
        for value in observers.iter().filter_map(|o| o.get(unit)) {
            participation += 1;
            match counts.binary_search_by_key(&value, |&(v, _)| v) {
                Ok(i) => counts[i].1 += 1,
                Err(i) => counts.insert(i, (value, 1)),
            }
        }
        Self {
            participation,
            counts,
        }
    }

    /// m_u: observers with a non-absent rating.
    pub fn participation(&self) -> usize {
        self.participation
    }

    pub fn is_pairable(&self) -> bool {
        self.participation >= MIN_PAIRABLE_RATINGS
    }

    fn count_of(&self, value: Rating) -> u64 {
        self.counts
            .binary_search_by_key(&value, |&(v, _)| v)
            .map(|i| self.counts[i].1)
            .unwrap_or(0)
    }

    /// Ordered pairs of distinct observers (o1, o2) with o1 → c and o2 → k.
    pub fn ordered_pairs(&self, c: Rating, k: Rating) -> u64 {
        let count_c = self.count_of(c);
        if c == k {
            count_c * count_c.saturating_sub(1)
        } else {
            count_c * self.count_of(k)
        }
    }

    /// This unit's share of O[c][k]: `ordered_pairs / (m_u - 1)`, or zero
    /// when fewer than two observers rated the unit.
    pub fn contribution(&self, c: Rating, k: Rating) -> BigRational {
        if !self.is_pairable() {
            return BigRational::zero();
        }
        BigRational::new(
            BigInt::from(self.ordered_pairs(c, k)),
            BigInt::from(self.participation - 1),
        )
    }
}

/// Sum every unit's contributions into the matrix over `values`.
pub fn build_coincidence_matrix(
    observers: &[ObserverRecord],
    units: &[UnitId],
    values: &[Rating],
) -> CoincidenceMatrix {
    let mut matrix = CoincidenceMatrix::zeros(values.to_vec());

    for unit in units {
        let tally = UnitTally::from_observers(observers, unit);
        if !tally.is_pairable() {
            trace!(unit = %unit, m_u = tally.participation(), "unit has fewer than two ratings, skipped");
            continue;
        }
        // Values nobody assigned to this unit contribute zero.
        for &(c, _) in &tally.counts {
            for &(k, _) in &tally.counts {
                let amount = tally.contribution(c, k);
                if !amount.is_zero() {
                    matrix.add(c, k, &amount);
                }
            }
        }
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_tally_pairs_match_permutation_count() {
        // Unit rated 1, 1, 2 by three observers.
        let observers = vec![
            ObserverRecord::new().rate("u", 1),
            ObserverRecord::new().rate("u", 1),
            ObserverRecord::new().rate("u", 2),
        ];
        let tally = UnitTally::from_observers(&observers, &"u".into());
        assert_eq!(tally.participation(), 3);
        assert_eq!(tally.ordered_pairs(1, 1), 2);
        assert_eq!(tally.ordered_pairs(1, 2), 2);
        assert_eq!(tally.ordered_pairs(2, 1), 2);
        assert_eq!(tally.ordered_pairs(2, 2), 0);
        assert_eq!(tally.contribution(1, 1), ratio(1, 1));
        assert_eq!(tally.contribution(1, 2), ratio(1, 1));
    }

    #[test]
    fn test_single_rating_contributes_zero() {
        let observers = vec![ObserverRecord::new().rate("u", 3), ObserverRecord::new().skip("u")];
        let tally = UnitTally::from_observers(&observers, &"u".into());
        assert!(!tally.is_pairable());
        assert!(tally.contribution(3, 3).is_zero());
    }

    #[test]
    fn test_normalization_uses_unit_participation() {
        // Four observers agree on value 2: 12 ordered pairs over (4 - 1).
        let observers: Vec<_> = (0..4).map(|_| ObserverRecord::new().rate("u", 2)).collect();
        let tally = UnitTally::from_observers(&observers, &"u".into());
        assert_eq!(tally.contribution(2, 2), ratio(4, 1));
    }

    #[test]
    fn test_matrix_accessors() {
        let observers = vec![
            ObserverRecord::new().rate("a", 1).rate("b", 2),
            ObserverRecord::new().rate("a", 2).rate("b", 2),
        ];
        let units = vec![UnitId::from("a"), UnitId::from("b")];
        let matrix = build_coincidence_matrix(&observers, &units, &[1, 2]);

        assert_eq!(matrix.get(1, 2), Some(&ratio(1, 1)));
        assert_eq!(matrix.get(2, 1), Some(&ratio(1, 1)));
        assert_eq!(matrix.get(2, 2), Some(&ratio(2, 1)));
        assert_eq!(matrix.get(3, 1), None);
        assert_eq!(matrix.row(2).map(<[_]>::len), Some(2));
        assert_eq!(matrix.diagonal().cloned().collect::<Vec<_>>(), vec![ratio(0, 1), ratio(2, 1)]);
        assert_eq!(matrix.marginals(), vec![ratio(1, 1), ratio(3, 1)]);
        assert!(matrix.is_symmetric());
    }
}
