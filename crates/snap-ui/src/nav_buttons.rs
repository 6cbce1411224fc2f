//! Next / previous page buttons

use egui::{Color32, RichText, Ui, Vec2};

use crate::strip::SharedSnapController;

/// Which button was pressed this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Previous,
    Next,
}

/// A pair of step buttons, disabled at the first and last page
pub struct NavButtons {
    pub previous_label: String,
    pub next_label: String,
    pub size: Vec2,
}

impl Default for NavButtons {
    fn default() -> Self {
        Self {
            previous_label: "◀".to_string(),
            next_label: "▶".to_string(),
            size: Vec2::new(28.0, 28.0),
        }
    }
}

impl NavButtons {
    /// Show the previous button
    pub fn show_previous(&self, ui: &mut Ui, controller: &SharedSnapController) -> Option<NavAction> {
        let enabled = controller.read().can_go_previous();
        let button = egui::Button::new(RichText::new(&self.previous_label).size(14.0))
            .fill(Color32::from_gray(40));

        if ui
            .add_enabled_ui(enabled, |ui| ui.add_sized(self.size, button))
            .inner
            .on_hover_text("Previous page")
            .clicked()
        {
            controller.write().previous_page();
            return Some(NavAction::Previous);
        }
        None
    }

    /// Show the next button
    pub fn show_next(&self, ui: &mut Ui, controller: &SharedSnapController) -> Option<NavAction> {
        let enabled = controller.read().can_go_next();
        let button = egui::Button::new(RichText::new(&self.next_label).size(14.0))
            .fill(Color32::from_gray(40));

        if ui
            .add_enabled_ui(enabled, |ui| ui.add_sized(self.size, button))
            .inner
            .on_hover_text("Next page")
            .clicked()
        {
            controller.write().next_page();
            return Some(NavAction::Next);
        }
        None
    }

    /// Both buttons side by side
    pub fn show(&self, ui: &mut Ui, controller: &SharedSnapController) -> Option<NavAction> {
        ui.horizontal(|ui| {
            let previous = self.show_previous(ui, controller);
            let next = self.show_next(ui, controller);
            previous.or(next)
        })
        .inner
    }
}
