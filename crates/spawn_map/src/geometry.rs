//! Area-or-point decision for spawn regions.
//!
//! Small boxes clutter the map when an entry already carries explicit spawn points, so a
//! region that is "tiny" collapses to a marker at its center. Entries without explicit
//! points always keep their boxes.
use glam::Vec2;

use crate::error::{Error, Result};
use crate::model::{Region, SpawnEntry};

pub const DEFAULT_AREA_THRESHOLD: f32 = 18_000.0;
pub const DEFAULT_MIN_DIMENSION: f32 = 40.0;

/// How a region should be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RegionPrimitive {
    /// Draw the box itself.
    Area { top_left: Vec2, size: Vec2 },
    /// Draw a marker at the box center.
    Point { center: Vec2 },
}

/// Thresholds deciding when a region counts as tiny.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryClassifier {
    /// Largest area (square pixels) that still counts as tiny. Zero or negative areas never do.
    pub area_threshold: f32,
    /// A side at or below this length makes the region tiny. `0` disables the rule.
    pub min_dimension: f32,
}

impl Default for GeometryClassifier {
    fn default() -> Self {
        Self {
            area_threshold: DEFAULT_AREA_THRESHOLD,
            min_dimension: DEFAULT_MIN_DIMENSION,
        }
    }
}

impl GeometryClassifier {
    pub fn new(area_threshold: f32, min_dimension: f32) -> Self {
        Self {
            area_threshold,
            min_dimension,
        }
    }

    pub fn try_new(area_threshold: f32, min_dimension: f32) -> Result<Self> {
        let classifier = Self::new(area_threshold, min_dimension);
        classifier.validate()?;
        Ok(classifier)
    }

    pub fn with_area_threshold(mut self, area_threshold: f32) -> Self {
        self.area_threshold = area_threshold;
        self
    }

    pub fn with_min_dimension(mut self, min_dimension: f32) -> Self {
        self.min_dimension = min_dimension;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.area_threshold.is_finite() {
            return Err(Error::InvalidConfig("area_threshold must be finite".into()));
        }
        if !self.min_dimension.is_finite() {
            return Err(Error::InvalidConfig("min_dimension must be finite".into()));
        }
        Ok(())
    }

    /// Whether `region` is small enough to collapse to a point.
    ///
    /// A zero-area region skips the area rule but can still match the dimension rule
    /// (e.g. `w = 0, h = 10`); that case is left as-is.
    pub fn is_tiny_region(&self, region: &Region) -> bool {
        let area = region.area();
        if area > 0.0 && area <= self.area_threshold {
            return true;
        }

        self.min_dimension > 0.0
            && (region.w <= self.min_dimension || region.h <= self.min_dimension)
    }

    /// Whether `region` of `entry` should be drawn as a point.
    pub fn collapses_to_point(&self, entry: &SpawnEntry, region: &Region) -> bool {
        entry.has_points() && self.is_tiny_region(region)
    }

    pub fn primitive_for(&self, entry: &SpawnEntry, region: &Region) -> RegionPrimitive {
        if self.collapses_to_point(entry, region) {
            RegionPrimitive::Point {
                center: region.centroid(),
            }
        } else {
            RegionPrimitive::Area {
                top_left: region.top_left(),
                size: region.size(),
            }
        }
    }
}
