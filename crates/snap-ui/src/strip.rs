//! Page strip container for egui hosts

use std::sync::Arc;

use glam::Vec3;
use parking_lot::RwLock;
use snap_core::config::PAGE_STEP_RANGE;
use snap_core::{distribute_pages, Axis, PageSnapController, ScrollContainer, SnapConfig};

use crate::pagination::SharedIndicators;

/// Controller shared between the snap view, its pagination and its buttons
pub type SharedSnapController = Arc<RwLock<PageSnapController<PageStrip>>>;

/// A row (or column) of equally sized pages with a scroll offset
#[derive(Debug, Clone, PartialEq)]
pub struct PageStrip {
    axis: Axis,
    page_extent: f32,
    page_step: f32,
    page_count: usize,
    offset: Vec3,
}

impl PageStrip {
    pub fn new(axis: Axis, page_extent: f32, page_count: usize) -> Self {
        Self {
            axis,
            page_extent,
            page_step: 1.0,
            page_count,
            offset: Vec3::ZERO,
        }
    }

    pub fn with_page_step(mut self, step: f32) -> Self {
        ScrollContainer::set_page_step(&mut self, step);
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Move by the component of `delta` that lies along the strip axis
    pub fn drag_by(&mut self, delta: Vec3) {
        self.offset += project_on_axis(self.axis, delta);
    }
}

impl ScrollContainer for PageStrip {
    fn child_positions(&self) -> Vec<Vec3> {
        distribute_pages(self.axis, self.page_extent, self.page_step, self.page_count)
    }

    fn local_position(&self) -> Vec3 {
        self.offset
    }

    fn set_local_position(&mut self, position: Vec3) {
        self.offset = position;
    }

    fn child_count(&self) -> usize {
        self.page_count
    }

    fn set_page_step(&mut self, step: f32) {
        let (min_step, max_step) = PAGE_STEP_RANGE;
        self.page_step = step.clamp(min_step, max_step);
    }
}

/// Component of `v` along `axis`
pub fn project_on_axis(axis: Axis, v: Vec3) -> Vec3 {
    let unit = axis.unit();
    unit * unit.dot(v)
}

/// Build a controller for `page_count` pages of `page_extent` points, wired to
/// `indicators` when given.
pub fn shared_controller(
    axis: Axis,
    page_extent: f32,
    page_count: usize,
    config: SnapConfig,
    indicators: Option<&SharedIndicators>,
) -> snap_core::Result<SharedSnapController> {
    let strip = PageStrip::new(axis, page_extent, page_count).with_page_step(config.page_step);
    let mut builder = PageSnapController::builder().container(strip).config(config);
    if let Some(indicators) = indicators {
        builder = builder.indicators(Box::new(indicators.clone()));
    }
    Ok(Arc::new(RwLock::new(builder.build()?)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_children_follow_step() {
        let strip = PageStrip::new(Axis::Vertical, 300.0, 3).with_page_step(2.0);
        assert_eq!(
            strip.child_positions(),
            vec![Vec3::ZERO, Vec3::new(0.0, 600.0, 0.0), Vec3::new(0.0, 1200.0, 0.0)]
        );
    }

    #[test]
    fn test_page_step_change_moves_anchors_after_rebuild() {
        let controller = shared_controller(
            Axis::Horizontal,
            100.0,
            3,
            SnapConfig {
                starting_page: 0,
                ..Default::default()
            },
            None,
        )
        .unwrap();

        let mut controller = controller.write();
        controller.set_page_step(2.0).unwrap();
        controller.rebuild_pages(None).unwrap();

        assert_eq!(controller.config().page_step, 2.0);
        assert_eq!(controller.position_of(1).unwrap(), Vec3::new(-200.0, 0.0, 0.0));
        assert_eq!(controller.position_of(2).unwrap(), Vec3::new(-400.0, 0.0, 0.0));

        controller.set_page_step(20.0).unwrap();
        controller.rebuild_pages(None).unwrap();
        assert_eq!(controller.position_of(1).unwrap(), Vec3::new(-800.0, 0.0, 0.0));
    }

    #[test]
    fn test_drag_ignores_cross_axis_motion() {
        let mut strip = PageStrip::new(Axis::Horizontal, 100.0, 3);
        strip.drag_by(Vec3::new(-30.0, 12.0, 0.0));
        assert_eq!(strip.local_position(), Vec3::new(-30.0, 0.0, 0.0));
    }

    #[test]
    fn test_shared_controller_starts_on_configured_page() {
        let indicators = SharedIndicators::new(4);
        let controller = shared_controller(
            Axis::Horizontal,
            200.0,
            4,
            SnapConfig {
                starting_page: 2,
                ..Default::default()
            },
            Some(&indicators),
        )
        .unwrap();

        let controller = controller.read();
        assert_eq!(controller.current_page(), 2);
        assert_eq!(controller.container().local_position(), Vec3::new(-400.0, 0.0, 0.0));
        assert_eq!(indicators.states(), vec![false, false, true, false]);
    }

    #[test]
    fn test_shared_controller_without_pages() {
        let result = shared_controller(Axis::Horizontal, 200.0, 0, SnapConfig::default(), None);
        assert!(matches!(result, Err(snap_core::SnapError::NoPages)));
    }
}
