//! Drag and pointer input resolution

use glam::Vec3;
use tracing::debug;

use super::PageSnapController;
use crate::container::ScrollContainer;
use crate::events::SelectionChange;
use crate::pages::closest_page;

/// Pointer event as delivered by the host dispatcher
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerEventData {
    /// Pointer position in host coordinates
    pub position: Vec3,
    /// Movement since the previous event
    pub delta: Vec3,
    /// Pointer velocity in container units per second
    pub velocity: Vec3,
}

impl PointerEventData {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }
}

/// Drag and pointer callbacks invoked by the host input dispatcher
pub trait SnapInputHandler {
    fn on_pointer_down(&mut self, event: &PointerEventData);

    fn on_drag_begin(&mut self, event: &PointerEventData);

    /// The host moves the container itself; this only stops auto-scrolling
    fn on_drag_move(&mut self, event: &PointerEventData);

    fn on_drag_end(&mut self, event: &PointerEventData);

    fn on_pointer_up(&mut self, event: &PointerEventData);
}

impl<C: ScrollContainer> SnapInputHandler for PageSnapController<C> {
    fn on_pointer_down(&mut self, _event: &PointerEventData) {
        self.state.pointer_down = true;
    }

    fn on_drag_begin(&mut self, _event: &PointerEventData) {
        self.change_announced = true;
        self.events.emit(SelectionChange::Start);
        self.state.dragging = true;
        self.state.drag_start_position = self.container.local_position();
    }

    fn on_drag_move(&mut self, _event: &PointerEventData) {
        self.cancel_transition();
    }

    fn on_drag_end(&mut self, event: &PointerEventData) {
        self.release(event);
    }

    fn on_pointer_up(&mut self, event: &PointerEventData) {
        self.release(event);
    }
}

impl<C: ScrollContainer> PageSnapController<C> {
    /// Resolve the page to snap to once the pointer lets go. Only the first of
    /// drag-end and pointer-up resolves; a release without a drag does nothing else.
    fn release(&mut self, event: &PointerEventData) {
        self.state.pointer_down = false;
        if !self.state.dragging {
            return;
        }
        self.state.dragging = false;

        let position = self.container.local_position();
        let page = match self.fast_swipe_target(position, event.velocity) {
            Some(page) => page,
            None => closest_page(position, self.visible_pages.anchors()),
        };

        debug!(page, position = ?position, "drag released");
        self.commit_page(page);
    }

    /// Neighbour page for a fast swipe, or `None` when the release should snap to
    /// the closest page instead.
    fn fast_swipe_target(&self, position: Vec3, velocity: Vec3) -> Option<usize> {
        if !self.config.fast_swipe_enabled {
            return None;
        }

        let displacement = position - self.state.drag_start_position;
        let far_enough =
            displacement.length() >= self.config.fast_swipe_distance_threshold as f32;
        let fast_enough = velocity.length() >= self.config.swipe_velocity_threshold as f32;
        if !far_enough && !fast_enough {
            return None;
        }

        let swipe = if far_enough { displacement } else { velocity };
        let along = swipe.dot(self.pages.forward_direction());
        let current = self.state.current_page;
        let last = self.pages.len() - 1;

        let page = if along > 0.0 {
            (current + 1).min(last)
        } else if along < 0.0 {
            current.saturating_sub(1)
        } else {
            current
        };
        debug!(from = current, to = page, ?displacement, ?velocity, "fast swipe");
        Some(page)
    }
}
