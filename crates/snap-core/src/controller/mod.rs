//! Page snap controller

mod input;
mod transition;

pub use input::{PointerEventData, SnapInputHandler};

use glam::Vec3;
use tracing::{debug, info};

use crate::config::SnapConfig;
use crate::container::{sync_indicators, PaginationIndicators, ScrollContainer};
use crate::error::{Result, SnapError};
use crate::events::{SelectionChange, SelectionEvents};
use crate::pages::PageSet;

/// Boxed pagination widget handle
pub type IndicatorHandle = Box<dyn PaginationIndicators + Send + Sync>;

/// Navigation bookkeeping of a controller
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub current_page: usize,
    /// Last committed page before the current change began
    pub previous_page: usize,
    pub is_transitioning: bool,
    pub transition_target: Vec3,
    pub pointer_down: bool,
    pub dragging: bool,
    pub drag_start_position: Vec3,
}

/// Snaps a scroll container onto discrete pages
pub struct PageSnapController<C: ScrollContainer> {
    container: C,
    config: SnapConfig,
    pages: PageSet,
    visible_pages: PageSet,
    state: NavigationState,
    indicators: Option<IndicatorHandle>,
    events: SelectionEvents,
    /// SelectionChange::Start fired and End still pending
    change_announced: bool,
}

/// Builder for [`PageSnapController`]
pub struct PageSnapControllerBuilder<C: ScrollContainer> {
    container: Option<C>,
    config: SnapConfig,
    indicators: Option<IndicatorHandle>,
    visible_anchors: Option<Vec<Vec3>>,
    events: SelectionEvents,
}

impl<C: ScrollContainer> PageSnapControllerBuilder<C> {
    pub fn container(mut self, container: C) -> Self {
        self.container = Some(container);
        self
    }

    pub fn config(mut self, config: SnapConfig) -> Self {
        self.config = config;
        self
    }

    pub fn indicators(mut self, indicators: IndicatorHandle) -> Self {
        self.indicators = Some(indicators);
        self
    }

    /// Anchors used for nearest-page matching on release, parallel to the pages
    pub fn visible_anchors(mut self, anchors: Vec<Vec3>) -> Self {
        self.visible_anchors = Some(anchors);
        self
    }

    /// Listeners registered before the controller moves to its starting page
    pub fn events(mut self, events: SelectionEvents) -> Self {
        self.events = events;
        self
    }

    /// Derive the page sets from the container and place it on the starting page
    pub fn build(self) -> Result<PageSnapController<C>> {
        let mut container = self.container.ok_or(SnapError::MissingContainer)?;
        let (pages, visible_pages) = derive_page_sets(&container, self.visible_anchors)?;

        let mut config = self.config;
        config.validate(pages.len())?;

        let start = config.starting_page;
        let anchor = pages.position_of(start)?;
        container.set_local_position(anchor);

        let mut controller = PageSnapController {
            container,
            config,
            pages,
            visible_pages,
            state: NavigationState {
                current_page: start,
                previous_page: start,
                is_transitioning: false,
                transition_target: anchor,
                pointer_down: false,
                dragging: false,
                drag_start_position: anchor,
            },
            indicators: self.indicators,
            events: self.events,
            change_announced: false,
        };
        controller.sync_indicators();

        info!(
            pages = controller.pages.len(),
            starting_page = start,
            "Scroll snap controller initialized"
        );
        Ok(controller)
    }
}

fn derive_page_sets<C: ScrollContainer>(
    container: &C,
    visible_anchors: Option<Vec<Vec3>>,
) -> Result<(PageSet, PageSet)> {
    let pages = PageSet::from_child_positions(&container.child_positions())?;
    let visible_pages = match visible_anchors {
        Some(anchors) => {
            if anchors.len() != pages.len() {
                return Err(SnapError::AnchorCountMismatch {
                    visible: anchors.len(),
                    pages: pages.len(),
                });
            }
            PageSet::from_anchors(anchors)?
        }
        None => pages.clone(),
    };
    Ok((pages, visible_pages))
}

impl<C: ScrollContainer> PageSnapController<C> {
    pub fn builder() -> PageSnapControllerBuilder<C> {
        PageSnapControllerBuilder {
            container: None,
            config: SnapConfig::default(),
            indicators: None,
            visible_anchors: None,
            events: SelectionEvents::new(),
        }
    }

    /// Create a controller without indicators or custom visible anchors
    pub fn new(container: C, config: SnapConfig) -> Result<Self> {
        Self::builder().container(container).config(config).build()
    }

    // Navigation

    /// Move to the next page. No-op on the last page.
    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.commit_page(self.state.current_page + 1);
        }
    }

    /// Move to the previous page. No-op on the first page.
    pub fn previous_page(&mut self) {
        if self.can_go_previous() {
            self.commit_page(self.state.current_page - 1);
        }
    }

    /// Move to `index` (0-based). Out-of-range indices are ignored.
    pub fn go_to_page(&mut self, index: usize) {
        if index >= self.pages.len() {
            debug!(index, pages = self.pages.len(), "go_to_page ignored: out of range");
            return;
        }
        self.commit_page(index);
    }

    pub fn can_go_next(&self) -> bool {
        self.state.current_page + 1 < self.pages.len()
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.current_page > 0
    }

    /// Commit `index` as the current page and head for its anchor
    fn commit_page(&mut self, index: usize) {
        self.begin_transition();
        self.state.current_page = index;
        self.state.transition_target = self.pages.anchors()[index];
        self.sync_indicators();
        debug!(
            page = index,
            previous = self.state.previous_page,
            target = ?self.state.transition_target,
            "page committed"
        );
    }

    /// Fire Start once per change
    fn announce_change(&mut self) {
        if !self.change_announced {
            self.change_announced = true;
            self.events.emit(SelectionChange::Start);
        }
    }

    fn sync_indicators(&mut self) {
        if let Some(indicators) = self.indicators.as_deref_mut() {
            sync_indicators(indicators, self.state.current_page);
        }
    }

    // Page data

    /// Re-derive both page sets after the host rebuilt the container.
    ///
    /// The current page is clamped into the new range and the container is sent
    /// to its anchor.
    pub fn rebuild_pages(&mut self, visible_anchors: Option<Vec<Vec3>>) -> Result<()> {
        let (pages, visible_pages) = derive_page_sets(&self.container, visible_anchors)?;
        let mut config = self.config.clone();
        config.validate(pages.len())?;

        let last = pages.len() - 1;
        self.pages = pages;
        self.visible_pages = visible_pages;
        self.config = config;
        self.state.previous_page = self.state.previous_page.min(last);

        info!(pages = self.pages.len(), "page sets rebuilt");
        self.commit_page(self.state.current_page.min(last));
        Ok(())
    }

    /// Anchor of page `index`
    pub fn position_of(&self, index: usize) -> Result<Vec3> {
        self.pages.position_of(index)
    }

    pub fn pages(&self) -> &PageSet {
        &self.pages
    }

    pub fn visible_pages(&self) -> &PageSet {
        &self.visible_pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    // State

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn previous_page_index(&self) -> usize {
        self.state.previous_page
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning
    }

    pub fn transition_target(&self) -> Vec3 {
        self.state.transition_target
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    /// Mutable access for hosts that move the container during a drag
    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn events_mut(&mut self) -> &mut SelectionEvents {
        &mut self.events
    }

    /// Attach a pagination widget and bring it in line with the current page
    pub fn set_indicators(&mut self, indicators: IndicatorHandle) {
        self.indicators = Some(indicators);
        self.sync_indicators();
    }

    // Configuration

    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Replace the whole configuration. Rejected configurations leave the current
    /// one untouched.
    pub fn set_config(&mut self, mut config: SnapConfig) -> Result<()> {
        config.validate(self.pages.len())?;
        self.config = config;
        Ok(())
    }

    pub fn set_starting_page(&mut self, page: usize) -> Result<()> {
        self.update_config(|config| config.starting_page = page)
    }

    /// Page spacing used when laying out pages. The clamped step is handed to the
    /// container; call [`rebuild_pages`](Self::rebuild_pages) once its children moved.
    pub fn set_page_step(&mut self, step: f32) -> Result<()> {
        self.update_config(|config| config.page_step = step)?;
        self.container.set_page_step(self.config.page_step);
        Ok(())
    }

    pub fn set_transition_speed(&mut self, speed: f32) -> Result<()> {
        self.update_config(|config| config.transition_speed = speed)
    }

    pub fn set_fast_swipe(&mut self, enabled: bool) -> Result<()> {
        self.update_config(|config| config.fast_swipe_enabled = enabled)
    }

    pub fn set_fast_swipe_distance_threshold(&mut self, threshold: u32) -> Result<()> {
        self.update_config(|config| config.fast_swipe_distance_threshold = threshold)
    }

    pub fn set_swipe_velocity_threshold(&mut self, threshold: u32) -> Result<()> {
        self.update_config(|config| config.swipe_velocity_threshold = threshold)
    }

    fn update_config(&mut self, change: impl FnOnce(&mut SnapConfig)) -> Result<()> {
        let mut config = self.config.clone();
        change(&mut config);
        self.set_config(config)
    }
}

impl<C: ScrollContainer> std::fmt::Debug for PageSnapController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageSnapController")
            .field("config", &self.config)
            .field("pages", &self.pages)
            .field("state", &self.state)
            .field("events", &self.events)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    /// Container with children one unit apart along x
    pub struct StripContainer {
        pub children: Vec<Vec3>,
        pub position: Vec3,
    }

    impl StripContainer {
        pub fn unit(count: usize) -> Self {
            Self {
                children: (0..count).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect(),
                position: Vec3::ZERO,
            }
        }

        pub fn spaced(count: usize, spacing: f32) -> Self {
            Self {
                children: (0..count).map(|i| Vec3::new(i as f32 * spacing, 0.0, 0.0)).collect(),
                position: Vec3::ZERO,
            }
        }
    }

    impl ScrollContainer for StripContainer {
        fn child_positions(&self) -> Vec<Vec3> {
            self.children.clone()
        }

        fn local_position(&self) -> Vec3 {
            self.position
        }

        fn set_local_position(&mut self, position: Vec3) {
            self.position = position;
        }
    }

    /// Indicators whose state is observable from the test
    #[derive(Clone)]
    pub struct SharedToggles(pub Arc<Mutex<Vec<bool>>>);

    impl SharedToggles {
        pub fn new(count: usize) -> Self {
            Self(Arc::new(Mutex::new(vec![false; count])))
        }

        pub fn active(&self) -> Vec<usize> {
            self.0
                .lock()
                .iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .map(|(i, _)| i)
                .collect()
        }
    }

    impl PaginationIndicators for SharedToggles {
        fn indicator_count(&self) -> usize {
            self.0.lock().len()
        }

        fn set_active(&mut self, index: usize, active: bool) {
            self.0.lock()[index] = active;
        }
    }

    #[derive(Clone, Default)]
    pub struct Counters {
        pub starts: Arc<AtomicUsize>,
        pub ends: Arc<AtomicUsize>,
    }

    impl Counters {
        pub fn starts(&self) -> usize {
            self.starts.load(Ordering::SeqCst)
        }

        pub fn ends(&self) -> usize {
            self.ends.load(Ordering::SeqCst)
        }

        pub fn attach(&self, events: &mut SelectionEvents) {
            let starts = self.starts.clone();
            events.on_start(move || {
                starts.fetch_add(1, Ordering::SeqCst);
            });
            let ends = self.ends.clone();
            events.on_end(move || {
                ends.fetch_add(1, Ordering::SeqCst);
            });
        }
    }

    pub fn controller(
        count: usize,
        starting_page: usize,
    ) -> (PageSnapController<StripContainer>, SharedToggles, Counters) {
        let toggles = SharedToggles::new(count);
        let counters = Counters::default();
        let mut controller = PageSnapController::builder()
            .container(StripContainer::unit(count))
            .config(SnapConfig {
                starting_page,
                ..Default::default()
            })
            .indicators(Box::new(toggles.clone()))
            .build()
            .unwrap();
        counters.attach(controller.events_mut());
        (controller, toggles, counters)
    }

    /// Tick until idle, bounded
    pub fn settle<C: ScrollContainer>(controller: &mut PageSnapController<C>) {
        for _ in 0..1000 {
            if !controller.is_transitioning() {
                return;
            }
            controller.tick(1.0 / 60.0);
        }
        panic!("transition did not converge");
    }
}
