//! Ordered threshold tables used by the rarity classifier.
//!
//! Both tables are plain `(boundary, result)` lists scanned linearly. Keeping them as data
//! lets each boundary be tuned and tested on its own.
use crate::error::{Error, Result};
use crate::rarity::Rarity;

/// Weight thresholds, highest first. The first threshold `<=` the weight decides the tier.
#[derive(Clone, Debug, PartialEq)]
pub struct RarityTable {
    tiers: Vec<(f64, Rarity)>,
}

impl RarityTable {
    pub const DEFAULT_TIERS: [(f64, Rarity); 6] = [
        (0.15, Rarity::VeryCommon),
        (0.06, Rarity::Common),
        (0.03, Rarity::Uncommon),
        (0.008, Rarity::VeryUncommon),
        (0.0007, Rarity::Rare),
        (-1.0, Rarity::VeryRare),
    ];

    /// Builds a table, requiring finite thresholds in strictly descending order.
    pub fn try_new(tiers: Vec<(f64, Rarity)>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(Error::InvalidConfig("rarity table must not be empty".into()));
        }
        if tiers.iter().any(|(t, _)| !t.is_finite()) {
            return Err(Error::InvalidConfig("rarity thresholds must be finite".into()));
        }
        if tiers.windows(2).any(|w| w[0].0 <= w[1].0) {
            return Err(Error::InvalidConfig(
                "rarity thresholds must be strictly descending".into(),
            ));
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[(f64, Rarity)] {
        &self.tiers
    }

    /// Tier for `weight`; weights below every threshold are [`Rarity::RAREST`].
    pub fn tier_for(&self, weight: f64) -> Rarity {
        self.tiers
            .iter()
            .find(|(threshold, _)| *threshold <= weight)
            .map(|(_, rarity)| *rarity)
            .unwrap_or(Rarity::RAREST)
    }
}

impl Default for RarityTable {
    fn default() -> Self {
        Self {
            tiers: Self::DEFAULT_TIERS.to_vec(),
        }
    }
}

/// Downshift steps by best shared minimum, lowest bound first. The first bound `>=` the
/// value decides the step count; values past the last bound, and values `<= 0`, get none.
#[derive(Clone, Debug, PartialEq)]
pub struct DownshiftTable {
    bounds: Vec<(f64, usize)>,
}

impl DownshiftTable {
    pub const DEFAULT_BOUNDS: [(f64, usize); 3] = [(2.0, 6), (5.0, 2), (14.0, 1)];

    /// Builds a table, requiring finite bounds in strictly ascending order.
    pub fn try_new(bounds: Vec<(f64, usize)>) -> Result<Self> {
        if bounds.iter().any(|(b, _)| !b.is_finite()) {
            return Err(Error::InvalidConfig("downshift bounds must be finite".into()));
        }
        if bounds.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(Error::InvalidConfig("downshift bounds must be strictly ascending".into()));
        }
        Ok(Self { bounds })
    }

    /// A table that never downshifts.
    pub fn disabled() -> Self {
        Self { bounds: Vec::new() }
    }

    pub fn bounds(&self) -> &[(f64, usize)] {
        &self.bounds
    }

    pub fn steps_for(&self, best_shared_min: f64) -> usize {
        if best_shared_min <= 0.0 {
            return 0;
        }
        self.bounds
            .iter()
            .find(|(max, _)| *max >= best_shared_min)
            .map(|(_, steps)| *steps)
            .unwrap_or(0)
    }
}

impl Default for DownshiftTable {
    fn default() -> Self {
        Self {
            bounds: Self::DEFAULT_BOUNDS.to_vec(),
        }
    }
}
