//! Scroll snap demo application

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use eframe::egui::{self, Color32, Context, RichText};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use snap_core::{Axis, SelectionChange, SelectionSubscriber, SnapConfig};
use snap_ui::{shared_controller, NavButtons, Pagination, SharedIndicators, SharedSnapController, SnapView};

const VIEW_ID: &str = "gallery";
const PAGE_SIZE: egui::Vec2 = egui::vec2(480.0, 300.0);

const PAGE_COLORS: [Color32; 5] = [
    Color32::from_rgb(76, 175, 80),
    Color32::from_rgb(100, 150, 250),
    Color32::from_rgb(220, 80, 80),
    Color32::from_rgb(240, 180, 60),
    Color32::from_rgb(150, 100, 200),
];

/// Counts selection changes for the status line
#[derive(Default)]
struct SelectionCounter {
    starts: AtomicUsize,
    ends: AtomicUsize,
}

impl SelectionSubscriber for SelectionCounter {
    fn on_selection_change(&self, change: SelectionChange) {
        match change {
            SelectionChange::Start => self.starts.fetch_add(1, Ordering::Relaxed),
            SelectionChange::End => self.ends.fetch_add(1, Ordering::Relaxed),
        };
    }
}

/// Main application state
struct SnapDemoApp {
    controller: SharedSnapController,
    indicators: SharedIndicators,
    view: SnapView,
    buttons: NavButtons,
    counter: Arc<SelectionCounter>,
    /// Kept alive so the weak subscription stays valid
    _subscriber: Arc<dyn SelectionSubscriber>,
}

impl SnapDemoApp {
    fn new(config: SnapConfig) -> Result<Self> {
        let indicators = SharedIndicators::new(PAGE_COLORS.len());
        let controller = shared_controller(
            Axis::Horizontal,
            PAGE_SIZE.x,
            PAGE_COLORS.len(),
            config,
            Some(&indicators),
        )?;

        let counter = Arc::new(SelectionCounter::default());
        let subscriber: Arc<dyn SelectionSubscriber> = counter.clone();
        {
            let mut controller = controller.write();
            let events = controller.events_mut();
            events.subscribe(&subscriber);
            events.on_start(|| debug!("selection change started"));
            events.on_end(|| debug!("selection change ended"));
        }

        Ok(Self {
            controller,
            indicators,
            view: SnapView::new(VIEW_ID, PAGE_SIZE),
            buttons: NavButtons::default(),
            counter,
            _subscriber: subscriber,
        })
    }

    fn show_settings(&mut self, ui: &mut egui::Ui) {
        let mut config = self.controller.read().config().clone();

        ui.horizontal(|ui| {
            let mut changed = ui.checkbox(&mut config.fast_swipe_enabled, "Fast swipe").changed();

            ui.label("Distance:");
            changed |= ui
                .add(egui::DragValue::new(&mut config.fast_swipe_distance_threshold).clamp_range(1..=1000))
                .changed();

            ui.label("Velocity:");
            changed |= ui
                .add(egui::DragValue::new(&mut config.swipe_velocity_threshold).clamp_range(1..=5000))
                .changed();

            ui.label("Speed:");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut config.transition_speed)
                        .speed(0.1)
                        .clamp_range(0.5..=30.0)
                        .max_decimals(1),
                )
                .changed();

            if changed {
                if let Err(e) = self.controller.write().set_config(config) {
                    warn!("Rejected configuration change: {}", e);
                }
            }
        });
    }
}

impl eframe::App for SnapDemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.controller.write().previous_page();
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.controller.write().next_page();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.show_settings(ui);
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    self.buttons.show_previous(ui, &self.controller);
                    self.view.show(ui, &self.controller, |ui, index| {
                        let rect = ui.max_rect().shrink(12.0);
                        ui.painter().rect_filled(rect, egui::Rounding::same(8.0), PAGE_COLORS[index]);
                        ui.add_space(rect.height() / 2.0);
                        ui.label(RichText::new(format!("Page {}", index + 1)).size(28.0).strong());
                    });
                    self.buttons.show_next(ui, &self.controller);
                });

                ui.add_space(8.0);
                Pagination::new(VIEW_ID, &self.indicators).show(ui, &self.controller);

                ui.add_space(8.0);
                let controller = self.controller.read();
                ui.label(format!(
                    "Page {} of {} | changes started {} / ended {}",
                    controller.current_page() + 1,
                    controller.page_count(),
                    self.counter.starts.load(Ordering::Relaxed),
                    self.counter.ends.load(Ordering::Relaxed),
                ));
            });
        });
    }
}

fn load_config() -> Result<SnapConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading snap configuration from {}", path);
            SnapConfig::from_json_file(&path)
                .with_context(|| format!("Failed to load configuration from {}", path))
        }
        None => Ok(SnapConfig::default()),
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting scroll snap demo");

    let app = SnapDemoApp::new(load_config()?)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 480.0])
            .with_min_inner_size([640.0, 420.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Scroll Snap Demo",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
