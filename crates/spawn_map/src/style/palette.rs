//! Official rarity colours.
use crate::rarity::Rarity;
use crate::style::Color;

/// Colour per rarity tier plus a neutral colour for unclassified entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Indexed by [`Rarity::index`].
    pub tiers: [Color; 6],
    pub fallback: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tiers: [
                Color::rgb(0x00, 0xFF, 0x00),
                Color::rgb(0xB2, 0xFF, 0x00),
                Color::rgb(0xFF, 0xFF, 0x00),
                Color::rgb(0xFF, 0xCC, 0x00),
                Color::rgb(0xFF, 0x66, 0x00),
                Color::rgb(0xFF, 0x00, 0x00),
            ],
            fallback: Color::BLACK,
        }
    }
}

impl Palette {
    pub fn with_tier(mut self, rarity: Rarity, color: Color) -> Self {
        self.tiers[rarity.index()] = color;
        self
    }

    pub fn with_fallback(mut self, color: Color) -> Self {
        self.fallback = color;
        self
    }

    pub fn color_for(&self, rarity: Option<Rarity>) -> Color {
        rarity.map_or(self.fallback, |r| self.tiers[r.index()])
    }

    /// Colour for a free-form label, matched with [`Rarity::from_label_loose`].
    pub fn color_for_label(&self, label: &str) -> Color {
        self.color_for(Rarity::from_label_loose(label))
    }
}
