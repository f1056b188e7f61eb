//! Rarity tiers and the classifier that derives them from spawn weights.
//!
//! - [`Rarity`]: the six ordered tiers, most common first.
//! - [`table`]: the tuning tables ([`RarityTable`], [`DownshiftTable`]).
//! - [`classifier`]: [`RarityClassifier`], which combines both tables.
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub mod classifier;
pub mod table;

pub use classifier::RarityClassifier;
pub use table::{DownshiftTable, RarityTable};

/// Rarity tier of a spawn entry, ordered from most to least common.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rarity {
    #[cfg_attr(feature = "serde", serde(rename = "very common"))]
    VeryCommon,
    #[cfg_attr(feature = "serde", serde(rename = "common"))]
    Common,
    #[cfg_attr(feature = "serde", serde(rename = "uncommon"))]
    Uncommon,
    #[cfg_attr(feature = "serde", serde(rename = "very uncommon"))]
    VeryUncommon,
    #[cfg_attr(feature = "serde", serde(rename = "rare"))]
    Rare,
    #[cfg_attr(feature = "serde", serde(rename = "very rare"))]
    VeryRare,
}

impl Rarity {
    /// All tiers in order, most common first.
    pub const ALL: [Rarity; 6] = [
        Rarity::VeryCommon,
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::VeryUncommon,
        Rarity::Rare,
        Rarity::VeryRare,
    ];

    pub const RAREST: Rarity = Rarity::VeryRare;

    // Each "very" label contains its shorter sibling, so it has to be tested first.
    const SUBSTRING_ORDER: [Rarity; 6] = [
        Rarity::VeryRare,
        Rarity::Rare,
        Rarity::VeryUncommon,
        Rarity::Uncommon,
        Rarity::VeryCommon,
        Rarity::Common,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rarity::VeryCommon => "very common",
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::VeryUncommon => "very uncommon",
            Rarity::Rare => "rare",
            Rarity::VeryRare => "very rare",
        }
    }

    /// Position in [`Rarity::ALL`]; `0` is the most common tier.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Rarity> {
        Self::ALL.get(index).copied()
    }

    /// Moves `steps` tiers towards [`Rarity::RAREST`], stopping there.
    pub fn downshifted(self, steps: usize) -> Rarity {
        let max = Self::ALL.len() - 1;
        Self::ALL[self.index().saturating_add(steps).min(max)]
    }

    /// Like [`Rarity::downshifted`] for a free-form label; labels that match no tier count as
    /// the rarest.
    pub fn downshift_label(label: &str, steps: usize) -> Rarity {
        label
            .parse::<Rarity>()
            .unwrap_or(Self::RAREST)
            .downshifted(steps)
    }

    /// Case-insensitive containment match of a free-form label, e.g. `"Very Rare (cave)"`.
    pub fn from_label_loose(label: &str) -> Option<Rarity> {
        let lower = label.to_lowercase();
        Self::SUBSTRING_ORDER
            .into_iter()
            .find(|r| lower.contains(r.label()))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::Other(format!("unknown rarity '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_runs_from_common_to_rare() {
        for (i, r) in Rarity::ALL.iter().enumerate() {
            assert_eq!(r.index(), i);
            assert_eq!(Rarity::from_index(i), Some(*r));
        }
        assert_eq!(Rarity::from_index(6), None);
        assert!(Rarity::VeryCommon < Rarity::VeryRare);
    }

    #[test]
    fn downshift_is_clamped() {
        assert_eq!(Rarity::Common.downshifted(0), Rarity::Common);
        assert_eq!(Rarity::Common.downshifted(2), Rarity::VeryUncommon);
        assert_eq!(Rarity::Common.downshifted(6), Rarity::VeryRare);
        assert_eq!(Rarity::VeryRare.downshifted(usize::MAX), Rarity::VeryRare);
    }

    #[test]
    fn downshift_never_makes_commoner() {
        for base in Rarity::ALL {
            for steps in 0..10 {
                let shifted = base.downshifted(steps);
                assert!(shifted >= base);
                assert_eq!(shifted.index(), (base.index() + steps).min(5));
            }
        }
    }

    #[test]
    fn unknown_label_downshifts_from_rarest() {
        assert_eq!(Rarity::downshift_label("legendary", 0), Rarity::VeryRare);
        assert_eq!(Rarity::downshift_label("Uncommon", 1), Rarity::VeryUncommon);
    }

    #[test]
    fn parse_is_exact_and_case_insensitive() {
        assert_eq!("Very Uncommon".parse::<Rarity>().unwrap(), Rarity::VeryUncommon);
        assert_eq!(" rare ".parse::<Rarity>().unwrap(), Rarity::Rare);
        assert!("rare-ish".parse::<Rarity>().is_err());
    }

    #[test]
    fn loose_match_prefers_very_variants() {
        assert_eq!(Rarity::from_label_loose("VERY RARE"), Some(Rarity::VeryRare));
        assert_eq!(Rarity::from_label_loose("rare"), Some(Rarity::Rare));
        assert_eq!(
            Rarity::from_label_loose("very uncommon"),
            Some(Rarity::VeryUncommon)
        );
        assert_eq!(Rarity::from_label_loose("Uncommon"), Some(Rarity::Uncommon));
        assert_eq!(
            Rarity::from_label_loose("very common"),
            Some(Rarity::VeryCommon)
        );
        assert_eq!(Rarity::from_label_loose("common"), Some(Rarity::Common));
        assert_eq!(Rarity::from_label_loose(""), None);
        assert_eq!(Rarity::from_label_loose("mythic"), None);
    }
}
