//! Rarity classification of spawn entries.
//!
//! The rarity of an entry is a pure function of its weight and best shared minimum:
//! the weight picks a base tier from a [`RarityTable`], then the best shared minimum
//! pushes it towards the rare end by the steps a [`DownshiftTable`] assigns.
use tracing::{debug, warn};

use crate::model::{CreatureDefinition, SpawnConfig, SpawnEntry};
use crate::rarity::table::{DownshiftTable, RarityTable};
use crate::rarity::Rarity;

/// Classifies spawn entries into [`Rarity`] tiers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RarityClassifier {
    pub tiers: RarityTable,
    pub downshift: DownshiftTable,
}

impl RarityClassifier {
    pub fn new(tiers: RarityTable, downshift: DownshiftTable) -> Self {
        Self { tiers, downshift }
    }

    pub fn with_tiers(mut self, tiers: RarityTable) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn with_downshift(mut self, downshift: DownshiftTable) -> Self {
        self.downshift = downshift;
        self
    }

    /// Tier from weight alone.
    pub fn base_rarity(&self, weight: f64) -> Rarity {
        self.tiers.tier_for(finite_or_zero(weight, "weight"))
    }

    pub fn downshift_steps(&self, best_shared_min: f64) -> usize {
        self.downshift
            .steps_for(finite_or_zero(best_shared_min, "bestSharedMin"))
    }

    pub fn rarity_for(&self, weight: f64, best_shared_min: f64) -> Rarity {
        self.base_rarity(weight)
            .downshifted(self.downshift_steps(best_shared_min))
    }

    /// Rarity of `entry` without touching it.
    pub fn classify(&self, entry: &SpawnEntry) -> Rarity {
        self.rarity_for(entry.weight, entry.best_shared_min)
    }

    /// Stores the rarity on `entry`, replacing any earlier result.
    pub fn classify_entry(&self, entry: &mut SpawnEntry) -> Rarity {
        let rarity = self.classify(entry);
        entry.rarity = Some(rarity);
        rarity
    }

    pub fn classify_creature(&self, creature: &mut CreatureDefinition) {
        for entry in &mut creature.entries {
            self.classify_entry(entry);
        }
    }

    /// Classifies every entry of every creature and returns how many entries were touched.
    pub fn classify_config(&self, config: &mut SpawnConfig) -> usize {
        let mut count = 0;
        for creature in config.creatures.values_mut() {
            self.classify_creature(creature);
            count += creature.entries.len();
        }
        debug!(
            "Classified {} entries across {} creatures.",
            count,
            config.creatures.len()
        );
        count
    }
}

fn finite_or_zero(value: f64, field: &str) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!("Non-finite {} {}; treating as 0.", field, value);
        0.0
    }
}
