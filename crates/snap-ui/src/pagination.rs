//! Pagination toggles

use std::sync::Arc;

use egui::{Color32, Response, Sense, Stroke, Ui, Vec2};
use parking_lot::RwLock;
use snap_core::PaginationIndicators;
use tracing::debug;

use crate::strip::SharedSnapController;
use crate::widget_utils::indicator_widget_id;

/// Indicator states written by the controller and read by [`Pagination`]
#[derive(Debug, Clone, Default)]
pub struct SharedIndicators {
    states: Arc<RwLock<Vec<bool>>>,
}

impl SharedIndicators {
    pub fn new(count: usize) -> Self {
        Self {
            states: Arc::new(RwLock::new(vec![false; count])),
        }
    }

    pub fn states(&self) -> Vec<bool> {
        self.states.read().clone()
    }

    pub fn active(&self) -> Option<usize> {
        self.states.read().iter().position(|on| *on)
    }
}

impl PaginationIndicators for SharedIndicators {
    fn indicator_count(&self) -> usize {
        self.states.read().len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        if let Some(state) = self.states.write().get_mut(index) {
            *state = active;
        }
    }
}

/// Pagination widget configuration
#[derive(Debug, Clone)]
pub struct PaginationStyle {
    pub radius: f32,
    pub spacing: f32,
    pub active_color: Color32,
    pub inactive_color: Color32,
}

impl Default for PaginationStyle {
    fn default() -> Self {
        Self {
            radius: 5.0,
            spacing: 8.0,
            active_color: Color32::from_rgb(100, 150, 250),
            inactive_color: Color32::from_gray(90),
        }
    }
}

/// Row of toggles, one per page. Clicking a toggle jumps to its page.
pub struct Pagination<'a> {
    view_id: &'a str,
    indicators: &'a SharedIndicators,
    style: PaginationStyle,
}

impl<'a> Pagination<'a> {
    pub fn new(view_id: &'a str, indicators: &'a SharedIndicators) -> Self {
        Self {
            view_id,
            indicators,
            style: PaginationStyle::default(),
        }
    }

    pub fn with_style(mut self, style: PaginationStyle) -> Self {
        self.style = style;
        self
    }

    pub fn show(self, ui: &mut Ui, controller: &SharedSnapController) -> Response {
        let states = self.indicators.states();
        let diameter = self.style.radius * 2.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = self.style.spacing;

            for (index, active) in states.iter().enumerate() {
                let (rect, response) = ui
                    .push_id(indicator_widget_id(self.view_id, index), |ui| {
                        ui.allocate_exact_size(Vec2::splat(diameter), Sense::click())
                    })
                    .inner;

                let painter = ui.painter();
                if *active {
                    painter.circle_filled(rect.center(), self.style.radius, self.style.active_color);
                } else {
                    painter.circle_stroke(
                        rect.center(),
                        self.style.radius - 1.0,
                        Stroke::new(1.5, self.style.inactive_color),
                    );
                }

                if response.on_hover_text(format!("Page {}", index + 1)).clicked() {
                    debug!(view = self.view_id, page = index, "pagination toggle clicked");
                    controller.write().go_to_page(index);
                }
            }
        })
        .response
    }
}
