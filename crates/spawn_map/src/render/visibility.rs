//! Per-entry visibility toggles.
//!
//! Toggles are keyed by (source, map, creature, entry index) and live outside the spawn
//! data, so they can be set before the matching data is loaded and survive reloads.
use std::collections::HashMap;

use crate::model::{CreatureKey, SourceId};

/// Source and map the planner is currently drawing for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlanContext {
    pub source: SourceId,
    pub map_id: String,
}

impl PlanContext {
    pub fn new(source: impl Into<SourceId>, map_id: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            map_id: map_id.into(),
        }
    }

    pub fn key(&self, creature: &str, entry_index: usize) -> VisibilityKey {
        VisibilityKey {
            source: self.source.clone(),
            map_id: self.map_id.clone(),
            creature: creature.to_owned(),
            entry_index,
        }
    }
}

/// Identity of one spawn entry across sources and maps.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisibilityKey {
    pub source: SourceId,
    pub map_id: String,
    pub creature: CreatureKey,
    pub entry_index: usize,
}

/// Answers whether the entry at a given index of the creature being planned is shown.
pub trait EntryVisibility {
    fn is_entry_visible(&self, entry_index: usize) -> bool;
}

/// Shows every entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllVisible;

impl EntryVisibility for AllVisible {
    #[inline]
    fn is_entry_visible(&self, _entry_index: usize) -> bool {
        true
    }
}

impl<F> EntryVisibility for F
where
    F: Fn(usize) -> bool,
{
    #[inline]
    fn is_entry_visible(&self, entry_index: usize) -> bool {
        self(entry_index)
    }
}

/// Caller-owned toggle table. Unknown keys are visible.
#[derive(Clone, Debug, Default)]
pub struct VisibilityMap {
    toggles: HashMap<VisibilityKey, bool>,
}

impl VisibilityMap {
    pub fn new() -> Self {
        Self {
            toggles: HashMap::new(),
        }
    }

    pub fn is_visible(&self, key: &VisibilityKey) -> bool {
        self.toggles.get(key).copied().unwrap_or(true)
    }

    pub fn set(&mut self, key: VisibilityKey, visible: bool) {
        self.toggles.insert(key, visible);
    }

    /// Flips the toggle and returns the new state.
    pub fn toggle(&mut self, key: VisibilityKey) -> bool {
        let state = self.toggles.entry(key).or_insert(true);
        *state = !*state;
        *state
    }

    pub fn remove(&mut self, key: &VisibilityKey) -> Option<bool> {
        self.toggles.remove(key)
    }

    pub fn clear(&mut self) {
        self.toggles.clear();
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    /// View of the toggles for one creature under `ctx`.
    pub fn scoped<'a>(&'a self, ctx: &PlanContext, creature: &str) -> ScopedVisibility<'a> {
        ScopedVisibility {
            map: self,
            template: ctx.key(creature, 0),
        }
    }
}

/// [`VisibilityMap`] narrowed to a single creature.
pub struct ScopedVisibility<'a> {
    map: &'a VisibilityMap,
    template: VisibilityKey,
}

impl EntryVisibility for ScopedVisibility<'_> {
    fn is_entry_visible(&self, entry_index: usize) -> bool {
        if self.map.is_empty() {
            return true;
        }
        let key = VisibilityKey {
            entry_index,
            ..self.template.clone()
        };
        self.map.is_visible(&key)
    }
}
