//! Render planning: turning a creature's spawn entries into layered draw commands.
//!
//! The planner never touches a rendering surface. It produces a [`DrawList`] that the host
//! replays, surface layer first, special-category layer on top.
use glam::Vec2;

use crate::model::SpawnEntry;
use crate::style::Style;

pub mod events;
pub mod planner;
pub mod visibility;

pub use planner::RenderPlanner;
pub use visibility::{
    AllVisible, EntryVisibility, PlanContext, ScopedVisibility, VisibilityKey, VisibilityMap,
};

/// Display layer of a draw command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DrawLayer {
    /// Regular spawn entries.
    Surface,
    /// Special-category entries (cave managers), drawn above the surface layer.
    Special,
}

impl DrawLayer {
    /// Layers in the order they must be drawn.
    pub const DRAW_ORDER: [DrawLayer; 2] = [DrawLayer::Surface, DrawLayer::Special];

    pub fn for_entry(entry: &SpawnEntry) -> Self {
        if entry.special_category {
            DrawLayer::Special
        } else {
            DrawLayer::Surface
        }
    }
}

/// Geometry of a draw command, in image pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Area { top_left: Vec2, size: Vec2 },
    Point { center: Vec2, radius: f32 },
}

/// One styled shape to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub layer: DrawLayer,
    /// Index of the spawn entry that produced this command.
    pub entry_index: usize,
    pub shape: Shape,
    pub style: Style,
}

impl DrawCommand {
    pub fn is_point(&self) -> bool {
        matches!(self.shape, Shape::Point { .. })
    }

    pub fn is_area(&self) -> bool {
        matches!(self.shape, Shape::Area { .. })
    }
}

/// Planner output: commands in entry order, each tagged with its layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// All commands in emission order, layers interleaved.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn commands_in(&self, layer: DrawLayer) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands.iter().filter(move |c| c.layer == layer)
    }

    pub fn count_in(&self, layer: DrawLayer) -> usize {
        self.commands_in(layer).count()
    }

    /// Commands in paint order: every surface command, then every special command,
    /// each layer keeping emission order.
    pub fn in_draw_order(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        DrawLayer::DRAW_ORDER
            .into_iter()
            .flat_map(move |layer| self.commands_in(layer))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn into_inner(self) -> Vec<DrawCommand> {
        self.commands
    }
}
