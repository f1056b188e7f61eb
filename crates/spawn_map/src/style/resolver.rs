//! Style resolution for spawn entries.
//!
//! The official presentation colours entries by rarity. An override presentation (used
//! for mod sources) paints every entry with one user-chosen colour and opacity, with an
//! optional emphasis that thickens outlines. Category flags adjust both presentations.
use tracing::warn;

use crate::model::{SourceId, SpawnEntry};
use crate::rarity::Rarity;
use crate::style::{Color, DashPattern, Palette, Style};

pub const OVERRIDE_OPACITY_MIN: f32 = 0.1;
pub const OVERRIDE_OPACITY_MAX: f32 = 1.0;

/// Category flags of an entry that influence its style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryFlags {
    pub special_category: bool,
    pub force_untameable: bool,
}

impl From<&SpawnEntry> for EntryFlags {
    fn from(entry: &SpawnEntry) -> Self {
        Self {
            special_category: entry.special_category,
            force_untameable: entry.force_untameable,
        }
    }
}

/// User-chosen look applied uniformly in override mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverrideStyle {
    pub color: Color,
    /// Stroke and fill opacity. Values outside `[0.1, 1.0]` are clamped when styles are
    /// resolved; see [`OverrideStyle::effective_opacity`].
    pub opacity: f32,
    /// Thickens outlines to simulate a glow.
    pub emphasis: bool,
}

impl Default for OverrideStyle {
    fn default() -> Self {
        Self {
            color: Color::RED,
            opacity: 0.8,
            emphasis: true,
        }
    }
}

impl OverrideStyle {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the colour from user input, keeping the current colour if `hex` does not parse.
    pub fn with_color_hex(mut self, hex: &str) -> Self {
        match Color::from_hex(hex) {
            Ok(color) => self.color = color,
            Err(e) => warn!("{}; keeping {}.", e, self.color),
        }
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = clamp_opacity(opacity);
        self
    }

    /// Opacity within the user range, whatever was stored in [`OverrideStyle::opacity`].
    pub fn effective_opacity(&self) -> f32 {
        clamp_opacity(self.opacity)
    }

    pub fn with_emphasis(mut self, emphasis: bool) -> Self {
        self.emphasis = emphasis;
        self
    }
}

fn clamp_opacity(opacity: f32) -> f32 {
    if opacity.is_nan() {
        OVERRIDE_OPACITY_MAX
    } else {
        opacity.clamp(OVERRIDE_OPACITY_MIN, OVERRIDE_OPACITY_MAX)
    }
}

/// Which presentation is active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PresentationMode {
    /// Rarity palette for the official spawn data.
    #[default]
    Official,
    /// One colour for everything, used while a mod source is shown.
    Override(OverrideStyle),
}

impl PresentationMode {
    /// Official presentation for the official source, `style` for any other.
    pub fn for_source(source: &SourceId, style: OverrideStyle) -> Self {
        if source.is_official() {
            PresentationMode::Official
        } else {
            PresentationMode::Override(style)
        }
    }

    pub fn is_official(&self) -> bool {
        matches!(self, PresentationMode::Official)
    }
}

/// Numbers behind the resolved styles.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleConfig {
    pub palette: Palette,
    pub base_stroke_weight: f32,
    pub special_stroke_weight: f32,
    /// Added to the stroke weight when the override emphasis is on.
    pub emphasis_delta: f32,
    pub stroke_opacity: f32,
    pub untameable_stroke_opacity: f32,
    pub fill_opacity: f32,
    pub special_fill_opacity: f32,
    pub untameable_fill_opacity: f32,
    pub untameable_dash: DashPattern,
    /// Radius in pixels of point markers.
    pub marker_radius: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            base_stroke_weight: 1.0,
            special_stroke_weight: 3.0,
            emphasis_delta: 2.0,
            stroke_opacity: 1.0,
            untameable_stroke_opacity: 0.8,
            fill_opacity: 0.8,
            special_fill_opacity: 0.5,
            untameable_fill_opacity: 0.5,
            untameable_dash: DashPattern::new(3.0, 3.0),
            marker_radius: 4.0,
        }
    }
}

impl StyleConfig {
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_marker_radius(mut self, radius: f32) -> Self {
        self.marker_radius = radius;
        self
    }

    pub fn with_stroke_weights(mut self, base: f32, special: f32) -> Self {
        self.base_stroke_weight = base;
        self.special_stroke_weight = special;
        self
    }

    pub fn with_emphasis_delta(mut self, delta: f32) -> Self {
        self.emphasis_delta = delta;
        self
    }
}

/// Maps entries to [`Style`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleResolver {
    pub config: StyleConfig,
}

impl StyleResolver {
    pub fn new(config: StyleConfig) -> Self {
        Self { config }
    }

    pub fn marker_radius(&self) -> f32 {
        self.config.marker_radius
    }

    /// Style for `entry` under `mode`.
    pub fn resolve(&self, entry: &SpawnEntry, mode: &PresentationMode) -> Style {
        self.resolve_parts(entry.rarity(), EntryFlags::from(entry), mode)
    }

    pub fn resolve_parts(
        &self,
        rarity: Option<Rarity>,
        flags: EntryFlags,
        mode: &PresentationMode,
    ) -> Style {
        let cfg = &self.config;
        let base_weight = if flags.special_category {
            cfg.special_stroke_weight
        } else {
            cfg.base_stroke_weight
        };

        match mode {
            PresentationMode::Official => {
                let color = cfg.palette.color_for(rarity);
                let fill_opacity = if flags.force_untameable {
                    cfg.untameable_fill_opacity
                } else if flags.special_category {
                    cfg.special_fill_opacity
                } else {
                    cfg.fill_opacity
                };
                Style {
                    stroke_color: color,
                    fill_color: color,
                    stroke_weight: base_weight,
                    stroke_opacity: if flags.force_untameable {
                        cfg.untameable_stroke_opacity
                    } else {
                        cfg.stroke_opacity
                    },
                    fill_opacity,
                    dash: flags.force_untameable.then_some(cfg.untameable_dash),
                }
            }
            PresentationMode::Override(style) => {
                let stroke_weight = if style.emphasis {
                    base_weight + cfg.emphasis_delta
                } else {
                    base_weight
                };
                let opacity = style.effective_opacity();
                let fill_opacity = if flags.force_untameable {
                    opacity.min(cfg.untameable_fill_opacity)
                } else {
                    opacity
                };
                Style {
                    stroke_color: style.color,
                    fill_color: style.color,
                    stroke_weight,
                    stroke_opacity: opacity,
                    fill_opacity,
                    dash: None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> StyleResolver {
        StyleResolver::default()
    }

    fn flags(special_category: bool, force_untameable: bool) -> EntryFlags {
        EntryFlags {
            special_category,
            force_untameable,
        }
    }

    #[test]
    fn official_plain_entry() {
        let style = resolver().resolve_parts(
            Some(Rarity::Rare),
            EntryFlags::default(),
            &PresentationMode::Official,
        );
        assert_eq!(style.stroke_color.to_hex(), "#FF6600");
        assert_eq!(style.fill_color, style.stroke_color);
        assert_eq!(style.stroke_weight, 1.0);
        assert_eq!(style.stroke_opacity, 1.0);
        assert_eq!(style.fill_opacity, 0.8);
        assert_eq!(style.dash, None);
    }

    #[test]
    fn official_special_category_is_heavier_and_lighter_filled() {
        let style = resolver().resolve_parts(
            Some(Rarity::Common),
            flags(true, false),
            &PresentationMode::Official,
        );
        assert_eq!(style.stroke_weight, 3.0);
        assert_eq!(style.fill_opacity, 0.5);
    }

    #[test]
    fn official_untameable_is_dashed_and_faded() {
        let style = resolver().resolve_parts(
            Some(Rarity::Common),
            flags(false, true),
            &PresentationMode::Official,
        );
        assert_eq!(style.dash, Some(DashPattern::new(3.0, 3.0)));
        assert_eq!(style.stroke_opacity, 0.8);
        assert_eq!(style.fill_opacity, 0.5);
    }

    #[test]
    fn official_unclassified_uses_neutral_colour() {
        let entry = SpawnEntry::new(0.5, 0.0);
        let style = resolver().resolve(&entry, &PresentationMode::Official);
        assert_eq!(style.stroke_color, Color::BLACK);
    }

    #[test]
    fn override_ignores_rarity() {
        let mode = PresentationMode::Override(
            OverrideStyle::default()
                .with_color(Color::rgb(0, 0, 255))
                .with_opacity(0.6)
                .with_emphasis(false),
        );
        let a = resolver().resolve_parts(Some(Rarity::VeryCommon), EntryFlags::default(), &mode);
        let b = resolver().resolve_parts(Some(Rarity::VeryRare), EntryFlags::default(), &mode);
        let c = resolver().resolve_parts(None, EntryFlags::default(), &mode);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.stroke_color, Color::rgb(0, 0, 255));
        assert_eq!(a.stroke_weight, 1.0);
        assert_eq!(a.stroke_opacity, 0.6);
        assert_eq!(a.fill_opacity, 0.6);
    }

    #[test]
    fn override_emphasis_adds_weight() {
        let mode = PresentationMode::Override(OverrideStyle::default());
        let plain = resolver().resolve_parts(None, EntryFlags::default(), &mode);
        let special = resolver().resolve_parts(None, flags(true, false), &mode);
        assert_eq!(plain.stroke_weight, 3.0);
        assert_eq!(special.stroke_weight, 5.0);
    }

    #[test]
    fn override_untameable_fades_fill_without_dash() {
        let mode = PresentationMode::Override(OverrideStyle::default().with_opacity(0.9));
        let style = resolver().resolve_parts(None, flags(false, true), &mode);
        assert_eq!(style.dash, None);
        assert_eq!(style.stroke_opacity, 0.9);
        assert_eq!(style.fill_opacity, 0.5);

        let faint = PresentationMode::Override(OverrideStyle::default().with_opacity(0.2));
        let style = resolver().resolve_parts(None, flags(false, true), &faint);
        assert_eq!(style.fill_opacity, 0.2);
    }

    #[test]
    fn override_opacity_is_clamped() {
        assert_eq!(OverrideStyle::default().with_opacity(0.0).opacity, 0.1);
        assert_eq!(OverrideStyle::default().with_opacity(4.0).opacity, 1.0);
        assert_eq!(OverrideStyle::default().with_opacity(f32::NAN).opacity, 1.0);
    }

    #[test]
    fn literal_opacity_is_clamped_when_resolving() {
        let loud = PresentationMode::Override(OverrideStyle {
            opacity: 7.5,
            ..OverrideStyle::default()
        });
        let style = resolver().resolve_parts(None, EntryFlags::default(), &loud);
        assert_eq!(style.stroke_opacity, 1.0);
        assert_eq!(style.fill_opacity, 1.0);

        let invisible = PresentationMode::Override(OverrideStyle {
            opacity: -1.0,
            ..OverrideStyle::default()
        });
        let style = resolver().resolve_parts(None, flags(false, true), &invisible);
        assert_eq!(style.stroke_opacity, 0.1);
        assert_eq!(style.fill_opacity, 0.1);
    }

    #[test]
    fn bad_hex_keeps_previous_colour() {
        let style = OverrideStyle::default().with_color_hex("not-a-colour");
        assert_eq!(style.color, Color::RED);
        let style = style.with_color_hex("#00ff00");
        assert_eq!(style.color, Color::rgb(0, 255, 0));
    }

    #[test]
    fn mode_follows_source() {
        let style = OverrideStyle::default();
        assert!(PresentationMode::for_source(&SourceId::Official, style).is_official());
        assert_eq!(
            PresentationMode::for_source(&SourceId::from("runicwyverns"), style),
            PresentationMode::Override(style)
        );
    }
}
