#![forbid(unsafe_code)]
//! spawn_map: Rarity classification and layered overlay planning for creature spawn maps.
//!
//! Modules:
//! - model: spawn configs, creatures, entries, regions, points, and mod sources
//! - rarity: weight tiers, best-shared-minimum downshift, entry classification
//! - geometry: tiny-region detection and region-to-point collapsing
//! - style: colours, palette, and official/override style resolution
//! - render: draw-list planning with layers, visibility toggles, and events
//! - catalog, info: map/source listings and creature summaries for the host UI
//!
//! The crate never touches a rendering surface. Hosts load a [`model::SpawnConfig`],
//! classify it once, then ask a [`render::RenderPlanner`] for a [`render::DrawList`] each
//! time the selection or a toggle changes.
pub mod catalog;
pub mod error;
pub mod geometry;
pub mod info;
pub mod model;
pub mod rarity;
pub mod render;
pub mod style;

use crate::geometry::GeometryClassifier;
use crate::model::{CreatureDefinition, Region, SpawnEntry};
use crate::rarity::{Rarity, RarityClassifier};
use crate::render::{DrawList, EntryVisibility, RenderPlanner};
use crate::style::{PresentationMode, Style, StyleResolver};

/// Rarity of an entry under the default tables.
pub fn classify(entry: &SpawnEntry) -> Rarity {
    RarityClassifier::default().classify(entry)
}

/// Whether `region` is tiny under the default thresholds.
pub fn is_tiny_region(region: &Region) -> bool {
    GeometryClassifier::default().is_tiny_region(region)
}

/// Style of `entry` under the default style numbers.
pub fn resolve_style(entry: &SpawnEntry, mode: &PresentationMode) -> Style {
    StyleResolver::default().resolve(entry, mode)
}

/// Draw list for `creature` with the default planner.
pub fn plan(
    creature: &CreatureDefinition,
    visibility: &dyn EntryVisibility,
    mode: &PresentationMode,
) -> DrawList {
    RenderPlanner::default().plan(creature, visibility, mode)
}

/// Convenient re-exports for common types. Import with `use spawn_map::prelude::*;`.
pub mod prelude {
    pub use crate::catalog::{
        builtin_maps, builtin_sources, pick_by_id, Background, CatalogEntry, MapMeta, SourceMeta,
    };
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{GeometryClassifier, RegionPrimitive};
    pub use crate::info::{format_number, CreatureInfo, EntrySummary};
    pub use crate::model::{
        CreatureDefinition, CreatureKey, ImageSize, ModMap, ModSource, Point, Region, SourceId,
        SpawnConfig, SpawnEntry,
    };
    pub use crate::rarity::{DownshiftTable, Rarity, RarityClassifier, RarityTable};
    pub use crate::render::events::{
        EventSink, FnSink, MultiSink, PlanEvent, PlanEventKind, VecSink,
    };
    pub use crate::render::{
        AllVisible, DrawCommand, DrawLayer, DrawList, EntryVisibility, PlanContext,
        RenderPlanner, Shape, VisibilityKey, VisibilityMap,
    };
    pub use crate::style::{
        Color, DashPattern, EntryFlags, OverrideStyle, Palette, PresentationMode, Style,
        StyleConfig, StyleResolver,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use crate::render::AllVisible;

    #[test]
    fn free_functions_use_defaults() {
        let entry = SpawnEntry::new(0.05, 1.0)
            .with_region(Region::new(0.0, 0.0, 30.0, 30.0))
            .with_point(Point::new(1.0, 1.0));
        assert_eq!(classify(&entry), Rarity::VeryRare);
        assert!(is_tiny_region(&entry.regions[0]));
        assert_eq!(resolve_style(&entry, &PresentationMode::Official).stroke_weight, 1.0);

        let creature = CreatureDefinition::new("Dodo").with_entry(entry);
        let list = plan(&creature, &AllVisible, &PresentationMode::Official);
        assert_eq!(list.len(), 2);
        assert!(list.commands().iter().all(|c| c.is_point()));
    }
}
