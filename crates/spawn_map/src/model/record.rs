//! Wire shapes of spawn entries and creatures.
//!
//! Spawn data comes from several exporters that spell some keys differently
//! (`entryClass`/`entry`, `groupWeight`/`group_weight`, `spawnLimit`/`spawn_limit`,
//! `nametag`/`nameTag`), sometimes both in the same object. Each spelling is read into
//! its own field and merged, the preferred spelling first.
use serde::Deserialize;

use crate::model::{lenient, CreatureDefinition, Point, Region, SpawnEntry};

#[derive(Deserialize)]
pub(crate) struct SpawnEntryRecord {
    #[serde(default, deserialize_with = "lenient::number")]
    weight: f64,
    #[serde(rename = "bestSharedMin", default, deserialize_with = "lenient::number")]
    best_shared_min: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    boxes: Vec<Region>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    points: Vec<Point>,
    #[serde(rename = "bIsCaveManager", default, deserialize_with = "lenient::flag")]
    special_category: bool,
    #[serde(rename = "bForceUntameable", default, deserialize_with = "lenient::flag")]
    force_untameable: bool,
    #[serde(rename = "entryClass", default)]
    entry_class: Option<String>,
    #[serde(default)]
    entry: Option<String>,
    #[serde(rename = "groupWeight", default, deserialize_with = "lenient::optional_number")]
    group_weight: Option<f64>,
    #[serde(rename = "group_weight", default, deserialize_with = "lenient::optional_number")]
    group_weight_snake: Option<f64>,
    #[serde(rename = "spawnLimit", default, deserialize_with = "lenient::optional_number")]
    spawn_limit: Option<f64>,
    #[serde(rename = "spawn_limit", default, deserialize_with = "lenient::optional_number")]
    spawn_limit_snake: Option<f64>,
    #[serde(rename = "percentChance", default, deserialize_with = "lenient::optional_number")]
    percent_chance: Option<f64>,
}

impl From<SpawnEntryRecord> for SpawnEntry {
    fn from(record: SpawnEntryRecord) -> Self {
        SpawnEntry {
            weight: record.weight,
            best_shared_min: record.best_shared_min,
            regions: record.boxes,
            points: record.points,
            special_category: record.special_category,
            force_untameable: record.force_untameable,
            entry_class: first_non_empty(record.entry_class, record.entry),
            group_weight: record.group_weight.or(record.group_weight_snake),
            spawn_limit: record.spawn_limit.or(record.spawn_limit_snake),
            percent_chance: record.percent_chance,
            rarity: None,
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct CreatureRecord {
    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
    #[serde(rename = "bpPath", default)]
    blueprint_path: Option<String>,
    #[serde(default)]
    nametag: Option<String>,
    #[serde(rename = "nameTag", default)]
    name_tag: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    entries: Vec<SpawnEntry>,
}

impl From<CreatureRecord> for CreatureDefinition {
    fn from(record: CreatureRecord) -> Self {
        CreatureDefinition {
            display_name: record.display_name,
            blueprint_path: record.blueprint_path,
            nametag: first_non_empty(record.nametag, record.name_tag),
            entries: record.entries,
        }
    }
}

fn first_non_empty(preferred: Option<String>, fallback: Option<String>) -> Option<String> {
    preferred
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.filter(|s| !s.is_empty()))
}
