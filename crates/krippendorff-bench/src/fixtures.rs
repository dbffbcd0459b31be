//! Shared fixtures and generators.
//! Deterministic: same seed → same dataset across runs.

use krippendorff_analysis::{ObserverRecord, Rating, UnitId};

/// Fixture size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureSize {
    /// 4 observers × 12 units — the scale of the canonical dataset
    Micro,
    /// 8 observers × 60 units
    Small,
    /// 12 observers × 400 units
    Medium,
}

impl FixtureSize {
    pub fn observer_count(&self) -> usize {
        match self {
            Self::Micro => 4,
            Self::Small => 8,
            Self::Medium => 12,
        }
    }

    pub fn unit_count(&self) -> usize {
        match self {
            Self::Micro => 12,
            Self::Small => 60,
            Self::Medium => 400,
        }
    }

    pub fn max_value(&self) -> Rating {
        match self {
            Self::Micro => 5,
            Self::Small => 7,
            Self::Medium => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }
}

/// Missing-rating probability, in percent.
const MISSING_PERCENT: u64 = 20;

/// Probability (percent) that an observer agrees with the unit's true value.
const AGREEMENT_PERCENT: u64 = 70;

/// 64-bit LCG (Knuth's MMIX constants). Not for anything but fixtures.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // High bits of an LCG are the well-mixed ones.
        self.state >> 16
    }

    /// Uniform-ish value in `0..bound`.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound.max(1)
    }
}

/// Generate reliability data: each unit has a true value that observers
/// reproduce most of the time, with some ratings left absent.
pub fn generate_fixture(size: FixtureSize, seed: u64) -> Vec<ObserverRecord> {
    let mut rng = SimpleRng::new(seed);
    let max_value = u64::from(size.max_value());

    let truth: Vec<Rating> = (0..size.unit_count())
        .map(|_| rng.below(max_value) as Rating + 1)
        .collect();

    (0..size.observer_count())
        .map(|_| {
            let mut record = ObserverRecord::new();
            for (unit, &true_value) in truth.iter().enumerate() {
                let value = if rng.below(100) < MISSING_PERCENT {
                    None
                } else if rng.below(100) < AGREEMENT_PERCENT {
                    Some(true_value)
                } else {
                    Some(rng.below(max_value) as Rating + 1)
                };
                record.insert(UnitId::from(unit as u64 + 1), value);
            }
            record
        })
        .collect()
}

/// Four observers, twelve units, values 1..=5 (Krippendorff's worked
/// example). Alpha is exactly 113/152.
pub fn canonical_dataset() -> Vec<ObserverRecord> {
    const RATINGS: [[Option<Rating>; 12]; 4] = [
        [Some(1), Some(2), Some(3), Some(3), Some(2), Some(1), Some(4), Some(1), Some(2), None, None, None],
        [Some(1), Some(2), Some(3), Some(3), Some(2), Some(2), Some(4), Some(1), Some(2), Some(5), None, Some(3)],
        [None, Some(3), Some(3), Some(3), Some(2), Some(3), Some(4), Some(2), Some(2), Some(5), Some(1), None],
        [Some(1), Some(2), Some(3), Some(3), Some(2), Some(4), Some(4), Some(1), Some(2), Some(5), Some(1), None],
    ];

    RATINGS
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, &value)| (UnitId::from(i as u64 + 1), value))
                .collect()
        })
        .collect()
}
