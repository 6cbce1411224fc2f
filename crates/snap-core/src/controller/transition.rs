//! Per-frame transition driver

use tracing::{debug, trace};

use super::PageSnapController;
use crate::container::ScrollContainer;
use crate::events::SelectionChange;

/// Fraction of the remaining distance covered in `dt` seconds at `speed`.
///
/// Exponential decay, so two ticks of `dt` land where one tick of `2 * dt` does.
pub fn lerp_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt.max(0.0)).exp()
}

impl<C: ScrollContainer> PageSnapController<C> {
    /// Advance an active transition by `dt` seconds. Returns whether the
    /// controller is still transitioning, so hosts know to request another frame.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.state.is_transitioning {
            return false;
        }

        let target = self.state.transition_target;
        let t = lerp_factor(self.config.transition_speed, dt);
        let next = self.container.local_position().lerp(target, t);

        if next.distance(target) < self.config.snap_epsilon {
            self.container.set_local_position(target);
            self.finish_transition();
            return false;
        }

        trace!(position = ?next, target = ?target, "transition tick");
        self.container.set_local_position(next);
        true
    }

    pub(super) fn begin_transition(&mut self) {
        if !self.state.is_transitioning {
            self.announce_change();
        }
        self.state.is_transitioning = true;
    }

    /// Stop without arriving. No End signal.
    pub(super) fn cancel_transition(&mut self) {
        if self.state.is_transitioning {
            debug!(page = self.state.current_page, "transition cancelled by drag");
        }
        self.state.is_transitioning = false;
    }

    fn finish_transition(&mut self) {
        self.state.is_transitioning = false;
        self.state.previous_page = self.state.current_page;
        self.change_announced = false;
        debug!(page = self.state.current_page, "snapped to page");
        self.events.emit(SelectionChange::End);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::super::testing::*;
    use super::*;

    #[test]
    fn test_lerp_factor_is_framerate_independent() {
        let one = lerp_factor(7.5, 0.1);
        let half = lerp_factor(7.5, 0.05);
        let remaining_two_steps = (1.0 - half) * (1.0 - half);
        assert!(((1.0 - one) - remaining_two_steps).abs() < 1e-6);
        assert_eq!(lerp_factor(7.5, -1.0), 0.0);
    }

    #[test]
    fn test_tick_idle_is_noop() {
        let (mut controller, _, counters) = controller(3, 1);
        assert!(!controller.tick(0.016));
        assert_eq!(controller.container().position, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(counters.ends(), 0);
    }

    #[test]
    fn test_distance_decreases_monotonically_until_epsilon() {
        let (mut controller, _, counters) = controller(4, 0);
        controller.go_to_page(3);
        let target = controller.transition_target();
        let epsilon = controller.config().snap_epsilon;

        let mut last = controller.container().position.distance(target);
        let mut ticks = 0;
        while controller.is_transitioning() {
            controller.tick(1.0 / 60.0);
            let distance = controller.container().position.distance(target);
            assert!(distance < last);
            assert_eq!(controller.is_transitioning(), distance >= epsilon);
            last = distance;
            ticks += 1;
            assert!(ticks < 1000);
        }

        assert_eq!(controller.container().position, target);
        assert_eq!(counters.starts(), 1);
        assert_eq!(counters.ends(), 1);
    }

    #[test]
    fn test_start_and_end_fire_once_per_transition() {
        let (mut controller, _, counters) = controller(4, 0);
        controller.next_page();
        settle(&mut controller);
        controller.next_page();
        settle(&mut controller);

        assert_eq!(counters.starts(), 2);
        assert_eq!(counters.ends(), 2);
    }
}
