//! Data sources: the official spawn tables and mod-provided replacements.
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::model::lenient;
use crate::model::{CreatureDefinition, CreatureKey};

/// Identifier of the spawn data source currently shown.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "String", into = "String")
)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceId {
    #[default]
    Official,
    Mod(String),
}

impl SourceId {
    pub const OFFICIAL: &'static str = "official";

    pub fn as_str(&self) -> &str {
        match self {
            SourceId::Official => Self::OFFICIAL,
            SourceId::Mod(id) => id,
        }
    }

    pub fn is_official(&self) -> bool {
        matches!(self, SourceId::Official)
    }
}

impl From<&str> for SourceId {
    fn from(value: &str) -> Self {
        if value == Self::OFFICIAL {
            SourceId::Official
        } else {
            SourceId::Mod(value.to_owned())
        }
    }
}

impl From<String> for SourceId {
    fn from(value: String) -> Self {
        if value == Self::OFFICIAL {
            SourceId::Official
        } else {
            SourceId::Mod(value)
        }
    }
}

impl From<SourceId> for String {
    fn from(value: SourceId) -> Self {
        match value {
            SourceId::Official => SourceId::OFFICIAL.to_owned(),
            SourceId::Mod(id) => id,
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creature table a mod provides for one map.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModMap {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "dinos", default, deserialize_with = "lenient::or_default")
    )]
    pub creatures: BTreeMap<CreatureKey, CreatureDefinition>,
}

impl ModMap {
    pub fn with_creature(mut self, key: impl Into<CreatureKey>, def: CreatureDefinition) -> Self {
        self.creatures.insert(key.into(), def);
        self
    }
}

/// Mod spawn data, keyed by map id.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModSource {
    #[cfg_attr(feature = "serde", serde(default, deserialize_with = "lenient::or_default"))]
    pub maps: BTreeMap<String, ModMap>,
}

impl ModSource {
    pub fn insert_map(&mut self, map_id: impl Into<String>, map: ModMap) {
        self.maps.insert(map_id.into(), map);
    }

    pub fn creatures_for(
        &self,
        map_id: &str,
    ) -> Option<&BTreeMap<CreatureKey, CreatureDefinition>> {
        self.maps.get(map_id).map(|m| &m.creatures)
    }

    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn official_id_round_trips() {
        let id = SourceId::from("official");
        assert!(id.is_official());
        assert_eq!(id.to_string(), "official");
    }

    #[test]
    fn other_ids_are_mods() {
        let id = SourceId::from(String::from("runicwyverns"));
        assert_eq!(id, SourceId::Mod("runicwyverns".into()));
        assert_eq!(id.as_str(), "runicwyverns");
        assert!(!id.is_official());
    }

    #[cfg(feature = "json")]
    #[test]
    fn parses_per_map_tables() {
        let json = r#"{ "maps": { "The Island": { "dinos": { "Wyvern": { "entries": [] } } } } }"#;
        let source = ModSource::from_json_str(json).expect("mod parses");
        assert!(source
            .creatures_for("The Island")
            .is_some_and(|c| c.contains_key("Wyvern")));
        assert!(source.creatures_for("Aberration").is_none());
    }

    #[cfg(feature = "json")]
    #[test]
    fn null_tables_read_as_empty() {
        let source = ModSource::from_json_str(r#"{ "maps": null }"#).expect("mod parses");
        assert!(source.maps.is_empty());

        let source = ModSource::from_json_str(r#"{ "maps": { "Valguero": { "dinos": null } } }"#)
            .expect("mod parses");
        assert!(source.creatures_for("Valguero").is_some_and(|c| c.is_empty()));
    }
}
