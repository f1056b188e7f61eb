//! Display summaries of creatures and their spawn entries.
use crate::model::{CreatureDefinition, SpawnEntry};
use crate::rarity::Rarity;

/// Identity block shown for the selected creature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatureInfo {
    /// Display name, or the creature key when the data has none.
    pub name: String,
    pub blueprint_path: Option<String>,
    pub nametag: Option<String>,
    pub entry_count: usize,
}

impl CreatureInfo {
    pub fn from_definition(key: &str, creature: &CreatureDefinition) -> Self {
        Self {
            name: non_empty(creature.display_name.as_deref())
                .unwrap_or(key)
                .to_owned(),
            blueprint_path: non_empty(creature.blueprint_path.as_deref()).map(str::to_owned),
            nametag: non_empty(creature.nametag.as_deref()).map(str::to_owned),
            entry_count: creature.entries.len(),
        }
    }

    /// Summaries of every entry, in data order.
    pub fn entries(creature: &CreatureDefinition) -> Vec<EntrySummary> {
        creature
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| EntrySummary::from_entry(index, entry))
            .collect()
    }
}

/// One row of the entry list next to its visibility toggle.
#[derive(Clone, Debug, PartialEq)]
pub struct EntrySummary {
    pub index: usize,
    pub label: String,
    pub group_weight: f64,
    pub spawn_limit: f64,
    pub percent_chance: Option<f64>,
    pub rarity: Option<Rarity>,
}

impl EntrySummary {
    pub fn from_entry(index: usize, entry: &SpawnEntry) -> Self {
        let label = match non_empty(entry.entry_class.as_deref()) {
            Some(class) => class.to_owned(),
            None => format!("Entry {}", index + 1),
        };
        Self {
            index,
            label,
            group_weight: entry.group_weight.unwrap_or(entry.weight),
            spawn_limit: entry.spawn_limit.unwrap_or(0.0),
            percent_chance: entry.percent_chance,
            rarity: entry.rarity(),
        }
    }

    /// Percent chance with two decimals, e.g. `"12.50%"`.
    pub fn percent_label(&self) -> Option<String> {
        self.percent_chance.map(|p| format!("{p:.2}%"))
    }

    /// One-line metadata, e.g. `"w=0.2 • 12.50% • limit=0.05"`.
    pub fn meta_line(&self) -> String {
        let mut line = format!("w={}", format_number(self.group_weight));
        if let Some(pct) = self.percent_label() {
            line.push_str(" • ");
            line.push_str(&pct);
        }
        line.push_str(" • limit=");
        line.push_str(&format_number(self.spawn_limit));
        line
    }
}

/// Rounds to four decimals and prints without trailing zeros. Non-finite values print as `0`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = (value * 10_000.0 + 0.5).floor() / 10_000.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_owned();
    }
    rounded.to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_trims_and_rounds() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(0.123456), "0.1235");
        assert_eq!(format_number(-0.00001), "0");
        assert_eq!(format_number(f64::NAN), "0");
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn info_falls_back_to_key() {
        let creature = CreatureDefinition::default()
            .with_blueprint_path("/Game/Dinos/Raptor.Raptor_C")
            .with_entry(SpawnEntry::new(0.1, 0.0));
        let info = CreatureInfo::from_definition("Raptor", &creature);
        assert_eq!(info.name, "Raptor");
        assert_eq!(info.blueprint_path.as_deref(), Some("/Game/Dinos/Raptor.Raptor_C"));
        assert_eq!(info.nametag, None);
        assert_eq!(info.entry_count, 1);

        let named = CreatureDefinition::new("Utahraptor").with_nametag("raptor");
        let info = CreatureInfo::from_definition("Raptor", &named);
        assert_eq!(info.name, "Utahraptor");
        assert_eq!(info.nametag.as_deref(), Some("raptor"));
    }

    #[test]
    fn entry_summary_labels_and_fallbacks() {
        let plain = EntrySummary::from_entry(2, &SpawnEntry::new(0.25, 0.0));
        assert_eq!(plain.label, "Entry 3");
        assert_eq!(plain.group_weight, 0.25);
        assert_eq!(plain.spawn_limit, 0.0);
        assert_eq!(plain.meta_line(), "w=0.25 • limit=0");

        let mut entry = SpawnEntry::new(0.25, 0.0).with_entry_class("DinoSpawnEntriesBeach_C");
        entry.group_weight = Some(0.4);
        entry.spawn_limit = Some(0.05);
        entry.percent_chance = Some(12.5);
        let summary = EntrySummary::from_entry(0, &entry);
        assert_eq!(summary.label, "DinoSpawnEntriesBeach_C");
        assert_eq!(summary.percent_label().as_deref(), Some("12.50%"));
        assert_eq!(summary.meta_line(), "w=0.4 • 12.50% • limit=0.05");
    }

    #[test]
    fn entries_keep_data_order() {
        let creature = CreatureDefinition::new("Dodo")
            .with_entry(SpawnEntry::new(0.1, 0.0).with_entry_class("A"))
            .with_entry(SpawnEntry::new(0.2, 0.0));
        let labels: Vec<String> = CreatureInfo::entries(&creature)
            .into_iter()
            .map(|e| e.label)
            .collect();
        assert_eq!(labels, vec!["A".to_owned(), "Entry 2".to_owned()]);
    }
}
