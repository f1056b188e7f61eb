//! Event types and sinks for observing render planning.
//!
//! This module defines [`PlanEvent`] and a set of sinks to collect or forward events while
//! [`crate::render::RenderPlanner::plan_with_events`] or
//! [`crate::render::RenderPlanner::plan_config_with_events`] runs.
use glam::Vec2;

use crate::render::DrawCommand;

/// Describes events emitted while planning.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PlanEvent {
    /// Emitted before the first entry is walked.
    PlanStarted {
        /// Creature key, when planning from a config.
        creature: Option<String>,
        /// Number of spawn entries of the creature.
        entry_count: usize,
    },

    /// Emitted when an entry is skipped because it is toggled off.
    EntryHidden { entry_index: usize },

    /// Emitted when a tiny region is drawn as a point at its center.
    RegionCollapsed {
        entry_index: usize,
        region_index: usize,
        center: Vec2,
    },

    /// Emitted for every command added to the draw list.
    CommandEmitted { command: DrawCommand },

    /// Emitted after the last entry.
    PlanFinished {
        /// Commands on the surface layer.
        surface: usize,
        /// Commands on the special-category layer.
        special: usize,
    },

    /// Non-fatal warning generated during planning.
    Warning {
        /// Context string (e.g. creature key).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

impl PlanEvent {
    pub fn kind(&self) -> PlanEventKind {
        match self {
            PlanEvent::PlanStarted { .. } => PlanEventKind::PlanStarted,
            PlanEvent::EntryHidden { .. } => PlanEventKind::EntryHidden,
            PlanEvent::RegionCollapsed { .. } => PlanEventKind::RegionCollapsed,
            PlanEvent::CommandEmitted { .. } => PlanEventKind::CommandEmitted,
            PlanEvent::PlanFinished { .. } => PlanEventKind::PlanFinished,
            PlanEvent::Warning { .. } => PlanEventKind::Warning,
        }
    }
}

/// Discriminant of [`PlanEvent`], used by sinks to opt out of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanEventKind {
    PlanStarted,
    EntryHidden,
    RegionCollapsed,
    CommandEmitted,
    PlanFinished,
    Warning,
}

/// A generic event sink that accepts [`PlanEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: PlanEvent);

    /// Whether events of `kind` should be built at all.
    #[inline]
    fn wants(&self, _kind: PlanEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: PlanEvent) {}

    #[inline]
    fn wants(&self, _kind: PlanEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PlanEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PlanEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PlanEvent),
{
    #[inline]
    fn send(&mut self, event: PlanEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally limited to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PlanEvent>,
    only: Option<Vec<PlanEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            only: None,
        }
    }

    /// Collects only events of the given kinds.
    pub fn only(kinds: &[PlanEventKind]) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.to_vec()),
        }
    }

    pub fn into_inner(self) -> Vec<PlanEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[PlanEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PlanEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: PlanEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: PlanEvent) {
        let kind = event.kind();
        let mut targets: Vec<&mut S> = self.sinks.iter_mut().filter(|s| s.wants(kind)).collect();
        if let Some(last) = targets.pop() {
            for sink in targets {
                sink.send(event.clone());
            }
            last.send(event);
        }
    }

    fn wants(&self, kind: PlanEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
