//! Host-side collaborators: the scrollable container and the pagination widget

use glam::Vec3;

/// The scrollable content whose local position the controller drives
pub trait ScrollContainer {
    /// Positions of the child pages relative to the container origin, in child order
    fn child_positions(&self) -> Vec<Vec3>;

    /// Current local position of the container
    fn local_position(&self) -> Vec3;

    /// Move the container
    fn set_local_position(&mut self, position: Vec3);

    fn child_count(&self) -> usize {
        self.child_positions().len()
    }

    /// Spacing multiplier for laying out children. Containers that do their own
    /// layout apply it on the next [`child_positions`](Self::child_positions).
    fn set_page_step(&mut self, _step: f32) {}
}

/// A row of toggle indicators, one per page
pub trait PaginationIndicators {
    fn indicator_count(&self) -> usize;

    fn set_active(&mut self, index: usize, active: bool);
}

/// Activation state of `count` indicators with `current` selected
pub fn indicator_states(current: usize, count: usize) -> Vec<bool> {
    (0..count).map(|i| i == current).collect()
}

/// Push the activation state for `current` into `indicators`
pub fn sync_indicators(indicators: &mut dyn PaginationIndicators, current: usize) {
    let count = indicators.indicator_count();
    for (index, active) in indicator_states(current, count).into_iter().enumerate() {
        indicators.set_active(index, active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Toggles(Vec<bool>);

    impl PaginationIndicators for Toggles {
        fn indicator_count(&self) -> usize {
            self.0.len()
        }

        fn set_active(&mut self, index: usize, active: bool) {
            self.0[index] = active;
        }
    }

    #[test]
    fn test_indicator_states() {
        assert_eq!(indicator_states(2, 4), vec![false, false, true, false]);
        assert!(indicator_states(0, 0).is_empty());
    }

    #[test]
    fn test_sync_indicators() {
        let mut toggles = Toggles(vec![true, false, false]);
        sync_indicators(&mut toggles, 1);
        assert_eq!(toggles.0, vec![false, true, false]);
    }

    #[test]
    fn test_sync_with_no_indicators() {
        let mut toggles = Toggles(vec![]);
        sync_indicators(&mut toggles, 3);
        assert!(toggles.0.is_empty());
    }
}
