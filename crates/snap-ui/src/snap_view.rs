//! Scroll snap view widget
//!
//! Hosts a strip of pages inside a fixed viewport. Pointer and drag input from
//! egui is translated into [`SnapInputHandler`] calls, the container follows the
//! drag, and every frame the controller's transition driver is ticked with the
//! frame's `stable_dt`.

use egui::{Align, Color32, Layout, Pos2, Rect, Response, Rounding, Sense, Ui, Vec2};
use glam::Vec3;
use tracing::trace;
use snap_core::{PageSnapController, PointerEventData, ScrollContainer, SnapInputHandler};

use crate::strip::{project_on_axis, PageStrip, SharedSnapController};
use crate::widget_utils::page_widget_id;

fn to_vec3(v: Vec2) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

/// Snap view widget
pub struct SnapView {
    id_source: String,
    page_size: Vec2,
    background: Color32,
}

impl SnapView {
    /// `page_size` must match the page extent the controller's strip was built with
    pub fn new(id_source: impl Into<String>, page_size: Vec2) -> Self {
        Self {
            id_source: id_source.into(),
            page_size,
            background: Color32::from_rgb(23, 23, 23),
        }
    }

    pub fn with_background(mut self, background: Color32) -> Self {
        self.background = background;
        self
    }

    /// Show the view, calling `add_page` for every page that intersects the viewport
    pub fn show(
        &self,
        ui: &mut Ui,
        controller: &SharedSnapController,
        mut add_page: impl FnMut(&mut Ui, usize),
    ) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.page_size, Sense::drag());

        let (offset, children) = {
            let mut controller = controller.write();
            self.handle_input(ui, &response, &mut controller);

            let dt = ui.input(|i| i.stable_dt);
            if controller.tick(dt) {
                ui.ctx().request_repaint();
            }

            let container = controller.container();
            (container.local_position(), container.child_positions())
        };

        let clip = rect.intersect(ui.clip_rect());
        ui.painter_at(clip)
            .rect_filled(rect, Rounding::same(4.0), self.background);

        for (index, child) in children.iter().enumerate() {
            let min = rect.min + Vec2::new(child.x + offset.x, child.y + offset.y);
            let page_rect = Rect::from_min_size(Pos2::new(min.x, min.y), self.page_size);
            if !page_rect.intersects(rect) {
                continue;
            }

            let mut page_ui = ui.child_ui(page_rect, Layout::top_down(Align::Center));
            page_ui.set_clip_rect(clip);
            page_ui.push_id(page_widget_id(&self.id_source, index), |ui| {
                add_page(ui, index)
            });
        }

        response
    }

    fn handle_input(
        &self,
        ui: &Ui,
        response: &Response,
        controller: &mut PageSnapController<PageStrip>,
    ) {
        let axis = controller.container().axis();
        let event = PointerEventData {
            position: response
                .interact_pointer_pos()
                .map(|p| to_vec3(p.to_vec2()))
                .unwrap_or_default(),
            delta: project_on_axis(axis, to_vec3(response.drag_delta())),
            velocity: project_on_axis(axis, to_vec3(ui.input(|i| i.pointer.velocity()))),
        };

        let pressed = response.is_pointer_button_down_on();
        if pressed && !controller.state().pointer_down {
            controller.on_pointer_down(&event);
        }

        if response.drag_started() {
            trace!(view = %self.id_source, page = controller.current_page(), "drag started");
            controller.on_drag_begin(&event);
        }

        if response.dragged() {
            drag_move(controller, &event);
        }

        if response.drag_released() {
            controller.on_drag_end(&event);
        }

        if !pressed && controller.state().pointer_down {
            controller.on_pointer_up(&event);
        }
    }
}

/// Follow the pointer along the strip axis. Any drag motion stops auto-scrolling,
/// even one that lies entirely across the axis.
fn drag_move(controller: &mut PageSnapController<PageStrip>, event: &PointerEventData) {
    if event.delta != Vec3::ZERO {
        controller.container_mut().drag_by(event.delta);
    }
    controller.on_drag_move(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use snap_core::{Axis, SnapConfig};

    use crate::strip::shared_controller;

    #[test]
    fn test_cross_axis_drag_cancels_transition() {
        let controller =
            shared_controller(Axis::Horizontal, 100.0, 4, SnapConfig::default(), None).unwrap();
        let mut controller = controller.write();
        controller.go_to_page(3);
        controller.tick(1.0 / 60.0);
        assert!(controller.is_transitioning());

        let position = controller.container().local_position();
        let event = PointerEventData::default();
        controller.on_drag_begin(&event);
        // Vertical motion projects to zero on a horizontal strip
        let cross = PointerEventData {
            delta: project_on_axis(Axis::Horizontal, Vec3::new(0.0, 14.0, 0.0)),
            ..event
        };
        drag_move(&mut controller, &cross);

        assert!(!controller.is_transitioning());
        assert_eq!(controller.container().local_position(), position);
    }

    #[test]
    fn test_drag_move_follows_axis_delta() {
        let controller =
            shared_controller(Axis::Horizontal, 100.0, 4, SnapConfig::default(), None).unwrap();
        let mut controller = controller.write();
        let start = controller.container().local_position();

        drag_move(
            &mut controller,
            &PointerEventData {
                delta: Vec3::new(-25.0, 0.0, 0.0),
                ..Default::default()
            },
        );
        assert_eq!(
            controller.container().local_position(),
            start + Vec3::new(-25.0, 0.0, 0.0)
        );
    }
}
