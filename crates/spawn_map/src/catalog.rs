//! Catalog of known maps and spawn data sources.
//!
//! The host uses the catalog to populate its map and source selectors and to locate the
//! data file of each. Lookups by id fall back to the first entry so a stale selection
//! never leaves the host without a map.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::SourceId;

/// Anything listed in a catalog under a string id.
pub trait CatalogEntry {
    fn id(&self) -> &str;
}

/// Returns the entry with `id`, or the first entry when none matches.
///
/// Returns `None` only for an empty list.
pub fn pick_by_id<'a, T: CatalogEntry>(entries: &'a [T], id: &str) -> Option<&'a T> {
    entries
        .iter()
        .find(|entry| entry.id() == id)
        .or_else(|| entries.first())
}

/// Alternative background image of a map.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Background {
    pub id: String,
    pub label: String,
    pub url: String,
}

impl Background {
    pub fn new(id: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: url.into(),
        }
    }
}

impl CatalogEntry for Background {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A selectable map and where its official spawn data lives.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapMeta {
    pub id: String,
    pub file: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub backgrounds: Vec<Background>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "defaultBg", default, skip_serializing_if = "Option::is_none")
    )]
    pub default_background: Option<String>,
}

impl MapMeta {
    pub fn new(id: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file: file.into(),
            backgrounds: Vec::new(),
            default_background: None,
        }
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.backgrounds.push(background);
        self
    }

    pub fn with_default_background(mut self, id: impl Into<String>) -> Self {
        self.default_background = Some(id.into());
        self
    }

    /// Background shown when the map is opened: the configured default, else the first.
    ///
    /// `None` means the map only has the image named in its spawn config.
    pub fn default_background(&self) -> Option<&Background> {
        let id = self.default_background.as_deref().unwrap_or_default();
        pick_by_id(&self.backgrounds, id)
    }

    /// Url of the image to show, using `config_image` when no background is listed.
    pub fn background_url<'a>(&'a self, config_image: &'a str) -> &'a str {
        self.default_background()
            .map_or(config_image, |bg| bg.url.as_str())
    }
}

impl CatalogEntry for MapMeta {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A spawn data source: the official data or a mod overlay with its own file.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceMeta {
    pub id: SourceId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub file: Option<String>,
}

impl SourceMeta {
    pub fn official() -> Self {
        Self {
            id: SourceId::Official,
            name: "Official".into(),
            file: None,
        }
    }

    pub fn mod_source(
        id: impl Into<String>,
        name: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            id: SourceId::Mod(id.into()),
            name: name.into(),
            file: Some(file.into()),
        }
    }
}

impl CatalogEntry for SourceMeta {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

const BUILTIN_MAPS: [(&str, &str); 9] = [
    ("The Island", "data/TheIsland.json"),
    ("The Center", "data/TheCenter.json"),
    ("Scorched Earth", "data/ScorchedEarth.json"),
    ("Valguero", "data/Valguero.json"),
    ("Ragnarok", "data/Ragnarok.json"),
    ("Lost Colony", "data/LostColony.json"),
    ("Extinction", "data/Extinction.json"),
    ("Aberration", "data/Aberration.json"),
    ("Astraeos", "data/Astraeos.json"),
];

/// Maps shipped with the viewer, in selector order.
pub fn builtin_maps() -> Vec<MapMeta> {
    BUILTIN_MAPS
        .iter()
        .map(|&(id, file)| {
            let meta = MapMeta::new(id, file);
            if id == "Astraeos" {
                meta.with_background(Background::new(
                    "hand",
                    "In Game",
                    "maps/astraeos_ingame.webp",
                ))
                .with_background(Background::new("sat", "Satellite", "maps/astraeos.webp"))
                .with_default_background("sat")
            } else {
                meta
            }
        })
        .collect()
}

/// Sources shipped with the viewer; the official source comes first.
pub fn builtin_sources() -> Vec<SourceMeta> {
    vec![
        SourceMeta::official(),
        SourceMeta::mod_source("runicwyverns", "Runic Wyverns", "data/mods/runicwyverns.json"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_falls_back_to_first() {
        let maps = builtin_maps();
        assert_eq!(pick_by_id(&maps, "Ragnarok").map(|m| m.id.as_str()), Some("Ragnarok"));
        assert_eq!(pick_by_id(&maps, "Genesis").map(|m| m.id.as_str()), Some("The Island"));
        assert!(pick_by_id::<MapMeta>(&[], "The Island").is_none());
    }

    #[test]
    fn astraeos_defaults_to_satellite() {
        let maps = builtin_maps();
        let astraeos = pick_by_id(&maps, "Astraeos").unwrap();
        assert_eq!(astraeos.backgrounds.len(), 2);
        assert_eq!(astraeos.default_background().unwrap().label, "Satellite");
        assert_eq!(astraeos.background_url("ignored.png"), "maps/astraeos.webp");
    }

    #[test]
    fn unknown_default_background_uses_first() {
        let meta = MapMeta::new("Test", "data/Test.json")
            .with_background(Background::new("a", "A", "a.webp"))
            .with_background(Background::new("b", "B", "b.webp"))
            .with_default_background("missing");
        assert_eq!(meta.default_background().unwrap().id, "a");
    }

    #[test]
    fn maps_without_backgrounds_use_config_image() {
        let maps = builtin_maps();
        let island = &maps[0];
        assert!(island.default_background().is_none());
        assert_eq!(island.background_url("maps/island.webp"), "maps/island.webp");
    }

    #[test]
    fn official_source_comes_first() {
        let sources = builtin_sources();
        assert!(sources[0].id.is_official());
        assert!(sources[0].file.is_none());
        let wyverns = pick_by_id(&sources, "runicwyverns").unwrap();
        assert_eq!(wyverns.name, "Runic Wyverns");
        assert_eq!(wyverns.file.as_deref(), Some("data/mods/runicwyverns.json"));
    }
}
