//! Snap controller configuration
//!
//! These are the settable properties of a scroll-snap container. Every value goes
//! through [`SnapConfig::validate`] before the controller uses it, both at build time
//! and whenever a property is changed afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, SnapError};

/// Smallest and largest page step multiplier accepted
pub const PAGE_STEP_RANGE: (f32, f32) = (1.0, 8.0);

/// Configuration for a [`PageSnapController`](crate::PageSnapController)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Page the control starts on (0-based)
    pub starting_page: usize,

    /// Distance between two pages as a multiple of the page extent
    pub page_step: f32,

    /// Transition speed between pages
    pub transition_speed: f32,

    /// Fast swipe pages to the neighbour instead of snapping to the closest page
    pub fast_swipe_enabled: bool,

    /// How far a swipe has to travel to count as a fast swipe
    pub fast_swipe_distance_threshold: u32,

    /// How fast a release has to be to count as a fast swipe
    pub swipe_velocity_threshold: u32,

    /// Remaining distance at which a transition is considered arrived
    pub snap_epsilon: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            starting_page: 1,
            page_step: 1.0,
            transition_speed: 7.5,
            fast_swipe_enabled: false,
            fast_swipe_distance_threshold: 100,
            swipe_velocity_threshold: 200,
            snap_epsilon: 0.005,
        }
    }
}

impl SnapConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Clamp the values that can be clamped and reject the ones that cannot.
    ///
    /// `starting_page` is clamped into `[0, child_count - 1]` and `page_step` into
    /// [`PAGE_STEP_RANGE`]. A transition speed or epsilon that is not a positive
    /// finite number would never converge, so it is an error.
    pub fn validate(&mut self, child_count: usize) -> Result<()> {
        if !self.transition_speed.is_finite() || self.transition_speed <= 0.0 {
            return Err(SnapError::InvalidConfig(format!(
                "transition speed must be positive, got {}",
                self.transition_speed
            )));
        }

        if !self.snap_epsilon.is_finite() || self.snap_epsilon <= 0.0 {
            return Err(SnapError::InvalidConfig(format!(
                "snap epsilon must be positive, got {}",
                self.snap_epsilon
            )));
        }

        if !self.page_step.is_finite() {
            return Err(SnapError::InvalidConfig("page step must be finite".to_string()));
        }

        let (min_step, max_step) = PAGE_STEP_RANGE;
        let clamped_step = self.page_step.clamp(min_step, max_step);
        if clamped_step != self.page_step {
            warn!(requested = self.page_step, clamped = clamped_step, "page step clamped");
            self.page_step = clamped_step;
        }

        let last_page = child_count.saturating_sub(1);
        if self.starting_page > last_page {
            warn!(requested = self.starting_page, clamped = last_page, "starting page clamped");
            self.starting_page = last_page;
        }

        Ok(())
    }
}
