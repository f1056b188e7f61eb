//! Spawn data model: per-map configs, creature definitions, spawn entries, and their geometry.
//!
//! All coordinates are in image pixel space with the origin at the top-left corner of the
//! map image. Numeric fields default to `0` when absent; see [`lenient`] for the rules
//! applied when the `serde` feature is enabled.
use std::collections::BTreeMap;

use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rarity::Rarity;

#[cfg(feature = "serde")]
pub mod lenient;
#[cfg(feature = "serde")]
mod record;
pub mod source;

pub use source::{ModMap, ModSource, SourceId};

/// Key of a creature inside a [`SpawnConfig`].
pub type CreatureKey = String;

/// An axis-aligned spawn box given by its top-left corner and size.
///
/// Degenerate (zero-sized) and negative sizes are legal input and are kept as-is.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Region {
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::number_f32"))]
    pub x: f32,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::number_f32"))]
    pub y: f32,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::number_f32"))]
    pub w: f32,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::number_f32"))]
    pub h: f32,
}

impl Region {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Geometric center of the box.
    #[inline]
    pub fn centroid(&self) -> Vec2 {
        self.top_left() + self.size() * 0.5
    }
}

/// A single spawn location.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::number_f32"))]
    pub x: f32,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::number_f32"))]
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Point {
    fn from(value: Vec2) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<mint::Point2<f32>> for Point {
    fn from(value: mint::Point2<f32>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for mint::Point2<f32> {
    fn from(value: Point) -> Self {
        mint::Point2 {
            x: value.x,
            y: value.y,
        }
    }
}

/// Pixel dimensions of the map image.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageSize {
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::dimension"))]
    pub width: u32,
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::dimension"))]
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// One spawn entry of a creature: where it can appear and how often.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "record::SpawnEntryRecord"))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpawnEntry {
    /// Spawn weight; higher means more common.
    pub weight: f64,
    /// Smallest shared spawn limit this entry takes part in; `0` when unknown.
    #[cfg_attr(feature = "serde", serde(rename = "bestSharedMin"))]
    pub best_shared_min: f64,
    #[cfg_attr(feature = "serde", serde(rename = "boxes"))]
    pub regions: Vec<Region>,
    pub points: Vec<Point>,
    /// Entry belongs to the special category drawn above the surface layer (cave managers).
    #[cfg_attr(feature = "serde", serde(rename = "bIsCaveManager"))]
    pub special_category: bool,
    #[cfg_attr(feature = "serde", serde(rename = "bForceUntameable"))]
    pub force_untameable: bool,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "entryClass", skip_serializing_if = "Option::is_none")
    )]
    pub entry_class: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "groupWeight", skip_serializing_if = "Option::is_none")
    )]
    pub group_weight: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "spawnLimit", skip_serializing_if = "Option::is_none")
    )]
    pub spawn_limit: Option<f64>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "percentChance", skip_serializing_if = "Option::is_none")
    )]
    pub percent_chance: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) rarity: Option<Rarity>,
}

impl SpawnEntry {
    pub fn new(weight: f64, best_shared_min: f64) -> Self {
        Self {
            weight,
            best_shared_min,
            ..Default::default()
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    pub fn with_point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    pub fn with_special_category(mut self, special: bool) -> Self {
        self.special_category = special;
        self
    }

    pub fn with_force_untameable(mut self, untameable: bool) -> Self {
        self.force_untameable = untameable;
        self
    }

    pub fn with_entry_class(mut self, entry_class: impl Into<String>) -> Self {
        self.entry_class = Some(entry_class.into());
        self
    }

    /// Rarity assigned by the last classification pass, or `None` if the entry was never
    /// classified.
    pub fn rarity(&self) -> Option<Rarity> {
        self.rarity
    }

    #[inline]
    pub fn has_points(&self) -> bool {
        !self.points.is_empty()
    }
}

/// A creature and its ordered spawn entries.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "record::CreatureRecord"))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreatureDefinition {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "displayName", skip_serializing_if = "Option::is_none")
    )]
    pub display_name: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "bpPath", skip_serializing_if = "Option::is_none")
    )]
    pub blueprint_path: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub nametag: Option<String>,
    pub entries: Vec<SpawnEntry>,
}

impl CreatureDefinition {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..Default::default()
        }
    }

    pub fn with_blueprint_path(mut self, path: impl Into<String>) -> Self {
        self.blueprint_path = Some(path.into());
        self
    }

    pub fn with_nametag(mut self, nametag: impl Into<String>) -> Self {
        self.nametag = Some(nametag.into());
        self
    }

    pub fn with_entry(mut self, entry: SpawnEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn with_entries(mut self, entries: Vec<SpawnEntry>) -> Self {
        self.entries.extend(entries);
        self
    }
}

/// Spawn data for one map image.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpawnConfig {
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::or_default"))]
    pub image: String,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "imageSize", default, deserialize_with = "lenient::or_default")
    )]
    pub image_size: ImageSize,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "dinos", default, deserialize_with = "lenient::or_default")
    )]
    pub creatures: BTreeMap<CreatureKey, CreatureDefinition>,
}

impl SpawnConfig {
    pub fn new(image: impl Into<String>, image_size: ImageSize) -> Self {
        Self {
            image: image.into(),
            image_size,
            creatures: BTreeMap::new(),
        }
    }

    pub fn with_creature(mut self, key: impl Into<CreatureKey>, def: CreatureDefinition) -> Self {
        self.creatures.insert(key.into(), def);
        self
    }

    pub fn creature(&self, key: &str) -> Option<&CreatureDefinition> {
        self.creatures.get(key)
    }

    /// Creature keys ordered for display: case-insensitive, ties broken by the raw key.
    pub fn creature_keys_sorted(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.creatures.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        keys
    }

    /// Effective config when an override source is active for `map_id`.
    ///
    /// Keeps this map's image and size and swaps the creature table for the mod's table.
    /// A mod without data for the map yields an empty creature table.
    pub fn with_override_source(&self, source: &ModSource, map_id: &str) -> SpawnConfig {
        SpawnConfig {
            image: self.image.clone(),
            image_size: self.image_size,
            creatures: source.creatures_for(map_id).cloned().unwrap_or_default(),
        }
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[cfg(feature = "json")]
    pub fn from_json_slice(bytes: &[u8]) -> crate::error::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_centroid_is_box_center() {
        let region = Region::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(region.centroid(), Vec2::new(25.0, 40.0));
        assert_eq!(region.area(), 1200.0);
    }

    #[test]
    fn point_round_trips_through_mint() {
        let p = Point::new(3.0, 4.0);
        let m: mint::Point2<f32> = p.into();
        assert_eq!((m.x, m.y), (3.0, 4.0));
        assert_eq!(Point::from(m), p);
    }

    #[test]
    fn creature_keys_sort_case_insensitively() {
        let cfg = SpawnConfig::new("map.png", ImageSize::new(8, 8))
            .with_creature("raptor", CreatureDefinition::default())
            .with_creature("Ankylo", CreatureDefinition::default())
            .with_creature("Bronto", CreatureDefinition::default())
            .with_creature("ankylo", CreatureDefinition::default());
        assert_eq!(
            cfg.creature_keys_sorted(),
            vec!["Ankylo", "ankylo", "Bronto", "raptor"]
        );
    }

    #[test]
    fn new_entry_is_unclassified() {
        let entry = SpawnEntry::new(0.2, 0.0);
        assert_eq!(entry.rarity(), None);
        assert!(!entry.has_points());
    }

    #[test]
    fn override_source_replaces_creatures_only() {
        let vanilla = SpawnConfig::new("island.png", ImageSize::new(100, 50))
            .with_creature("dodo", CreatureDefinition::new("Dodo"));
        let mut source = ModSource::default();
        source.insert_map(
            "The Island",
            ModMap::default().with_creature("wyvern", CreatureDefinition::new("Wyvern")),
        );

        let effective = vanilla.with_override_source(&source, "The Island");
        assert_eq!(effective.image, "island.png");
        assert_eq!(effective.image_size, ImageSize::new(100, 50));
        assert!(effective.creature("dodo").is_none());
        assert!(effective.creature("wyvern").is_some());

        let empty = vanilla.with_override_source(&source, "Ragnarok");
        assert!(empty.creatures.is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn parses_external_field_names() {
        let json = r#"{
            "image": "maps/island.webp",
            "imageSize": { "width": 4096, "height": "4096" },
            "dinos": {
                "Raptor": {
                    "displayName": "Raptor",
                    "bpPath": "/Game/Raptor_Character_BP",
                    "nameTag": "Raptor",
                    "entries": [
                        {
                            "weight": 0.05,
                            "bestSharedMin": 1,
                            "boxes": [{ "x": 10, "y": 20, "w": 30, "h": null }],
                            "points": [{ "x": 1.5, "y": 2.5 }],
                            "bIsCaveManager": true,
                            "bForceUntameable": "yes",
                            "entry": "RaptorSpawner",
                            "group_weight": "0.3",
                            "rarity": "very common"
                        },
                        {}
                    ]
                }
            }
        }"#;

        let cfg = SpawnConfig::from_json_str(json).expect("config parses");
        assert_eq!(cfg.image_size, ImageSize::new(4096, 4096));
        let raptor = cfg.creature("Raptor").expect("raptor present");
        assert_eq!(raptor.nametag.as_deref(), Some("Raptor"));
        assert_eq!(raptor.entries.len(), 2);

        let first = &raptor.entries[0];
        assert_eq!(first.weight, 0.05);
        assert_eq!(first.best_shared_min, 1.0);
        assert_eq!(first.regions, vec![Region::new(10.0, 20.0, 30.0, 0.0)]);
        assert_eq!(first.points, vec![Point::new(1.5, 2.5)]);
        assert!(first.special_category);
        assert!(!first.force_untameable);
        assert_eq!(first.entry_class.as_deref(), Some("RaptorSpawner"));
        assert_eq!(first.group_weight, Some(0.3));
        assert_eq!(first.rarity(), None);

        let second = &raptor.entries[1];
        assert_eq!(second.weight, 0.0);
        assert!(second.regions.is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn missing_creature_table_is_empty() {
        let cfg = SpawnConfig::from_json_str(r#"{"image": "a.png"}"#).expect("config parses");
        assert!(cfg.creatures.is_empty());
        assert_eq!(cfg.image_size, ImageSize::default());
    }

    #[cfg(feature = "json")]
    #[test]
    fn null_tables_degrade_to_empty() {
        let cfg = SpawnConfig::from_json_str(r#"{"image": null, "imageSize": null, "dinos": null}"#)
            .expect("config parses");
        assert_eq!(cfg.image, "");
        assert_eq!(cfg.image_size, ImageSize::default());
        assert!(cfg.creatures.is_empty());

        let json = r#"{
            "dinos": {
                "Dodo": { "entries": null },
                "Raptor": {
                    "nametag": "raptor",
                    "nameTag": "Raptor",
                    "entries": [
                        { "weight": 0.1, "boxes": null, "points": null },
                        {
                            "entryClass": "Beach", "entry": "Other",
                            "spawnLimit": 2, "spawn_limit": 5
                        }
                    ]
                }
            }
        }"#;
        let cfg = SpawnConfig::from_json_str(json).expect("config parses");
        assert!(cfg.creature("Dodo").is_some_and(|d| d.entries.is_empty()));

        let raptor = cfg.creature("Raptor").expect("raptor present");
        assert_eq!(raptor.nametag.as_deref(), Some("raptor"));
        assert!(raptor.entries[0].regions.is_empty());
        assert!(raptor.entries[0].points.is_empty());
        assert_eq!(raptor.entries[1].entry_class.as_deref(), Some("Beach"));
        assert_eq!(raptor.entries[1].spawn_limit, Some(2.0));
    }
}
