//! Render planner walking a creature's spawn entries into a [`DrawList`].
use tracing::{debug, warn};

use crate::geometry::{GeometryClassifier, RegionPrimitive};
use crate::model::{CreatureDefinition, SpawnConfig};
use crate::render::events::{EventSink, PlanEvent, PlanEventKind};
use crate::render::visibility::{EntryVisibility, PlanContext, VisibilityMap};
use crate::render::{DrawCommand, DrawLayer, DrawList, Shape};
use crate::style::{PresentationMode, StyleResolver};

/// Plans draw commands for creatures.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderPlanner {
    pub geometry: GeometryClassifier,
    pub styles: StyleResolver,
}

impl RenderPlanner {
    pub fn new(geometry: GeometryClassifier, styles: StyleResolver) -> Self {
        Self { geometry, styles }
    }

    pub fn with_geometry(mut self, geometry: GeometryClassifier) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_styles(mut self, styles: StyleResolver) -> Self {
        self.styles = styles;
        self
    }

    /// Plans every visible entry of `creature`.
    pub fn plan(
        &self,
        creature: &CreatureDefinition,
        visibility: &dyn EntryVisibility,
        mode: &PresentationMode,
    ) -> DrawList {
        self.plan_with_events(creature, visibility, mode, &mut ())
    }

    pub fn plan_with_events(
        &self,
        creature: &CreatureDefinition,
        visibility: &dyn EntryVisibility,
        mode: &PresentationMode,
        sink: &mut dyn EventSink,
    ) -> DrawList {
        if sink.wants(PlanEventKind::PlanStarted) {
            sink.send(PlanEvent::PlanStarted {
                creature: None,
                entry_count: creature.entries.len(),
            });
        }
        let list = self.plan_entries(creature, visibility, mode, sink);
        finish(&list, sink);
        list
    }

    /// Plans the creature stored under `creature_key`, with toggles looked up in
    /// `visibility` under `ctx`. An unknown key yields an empty list.
    pub fn plan_config(
        &self,
        config: &SpawnConfig,
        creature_key: &str,
        ctx: &PlanContext,
        visibility: &VisibilityMap,
        mode: &PresentationMode,
    ) -> DrawList {
        self.plan_config_with_events(config, creature_key, ctx, visibility, mode, &mut ())
    }

    pub fn plan_config_with_events(
        &self,
        config: &SpawnConfig,
        creature_key: &str,
        ctx: &PlanContext,
        visibility: &VisibilityMap,
        mode: &PresentationMode,
        sink: &mut dyn EventSink,
    ) -> DrawList {
        let Some(creature) = config.creature(creature_key) else {
            warn!(
                "Creature '{}' not present for {} / {}; nothing to draw.",
                creature_key, ctx.source, ctx.map_id
            );
            if sink.wants(PlanEventKind::Warning) {
                sink.send(PlanEvent::Warning {
                    context: format!("creature:{creature_key}"),
                    message: "Creature not present in config; nothing to draw".into(),
                });
            }
            return DrawList::new();
        };

        if sink.wants(PlanEventKind::PlanStarted) {
            sink.send(PlanEvent::PlanStarted {
                creature: Some(creature_key.to_owned()),
                entry_count: creature.entries.len(),
            });
        }
        let scoped = visibility.scoped(ctx, creature_key);
        let list = self.plan_entries(creature, &scoped, mode, sink);
        finish(&list, sink);
        list
    }

    fn plan_entries(
        &self,
        creature: &CreatureDefinition,
        visibility: &dyn EntryVisibility,
        mode: &PresentationMode,
        sink: &mut dyn EventSink,
    ) -> DrawList {
        let radius = self.styles.marker_radius();
        let mut list = DrawList::new();

        for (entry_index, entry) in creature.entries.iter().enumerate() {
            if !visibility.is_entry_visible(entry_index) {
                if sink.wants(PlanEventKind::EntryHidden) {
                    sink.send(PlanEvent::EntryHidden { entry_index });
                }
                continue;
            }

            let layer = DrawLayer::for_entry(entry);
            let style = self.styles.resolve(entry, mode);
            let marker_style = style.without_dash();

            for (region_index, region) in entry.regions.iter().enumerate() {
                let command = match self.geometry.primitive_for(entry, region) {
                    RegionPrimitive::Point { center } => {
                        if sink.wants(PlanEventKind::RegionCollapsed) {
                            sink.send(PlanEvent::RegionCollapsed {
                                entry_index,
                                region_index,
                                center,
                            });
                        }
                        DrawCommand {
                            layer,
                            entry_index,
                            shape: Shape::Point { center, radius },
                            style: marker_style,
                        }
                    }
                    RegionPrimitive::Area { top_left, size } => DrawCommand {
                        layer,
                        entry_index,
                        shape: Shape::Area { top_left, size },
                        style,
                    },
                };
                emit(&mut list, command, sink);
            }

            for point in &entry.points {
                let command = DrawCommand {
                    layer,
                    entry_index,
                    shape: Shape::Point {
                        center: point.position(),
                        radius,
                    },
                    style: marker_style,
                };
                emit(&mut list, command, sink);
            }
        }

        list
    }
}

fn emit(list: &mut DrawList, command: DrawCommand, sink: &mut dyn EventSink) {
    if sink.wants(PlanEventKind::CommandEmitted) {
        sink.send(PlanEvent::CommandEmitted { command });
    }
    list.push(command);
}

fn finish(list: &DrawList, sink: &mut dyn EventSink) {
    let surface = list.count_in(DrawLayer::Surface);
    let special = list.count_in(DrawLayer::Special);
    debug!(
        "Planned {} commands ({} surface, {} special).",
        list.len(),
        surface,
        special
    );
    if sink.wants(PlanEventKind::PlanFinished) {
        sink.send(PlanEvent::PlanFinished { surface, special });
    }
}
