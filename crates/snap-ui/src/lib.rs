//! egui components for scroll-snap containers
//!
//! This crate connects a [`snap_core::PageSnapController`] to egui: a view that
//! feeds it drag input and draws its pages, pagination toggles and step buttons.

pub mod nav_buttons;
pub mod pagination;
pub mod snap_view;
pub mod strip;
pub mod widget_utils;

/// Re-export commonly used types
pub use nav_buttons::{NavAction, NavButtons};
pub use pagination::{Pagination, PaginationStyle, SharedIndicators};
pub use snap_view::SnapView;
pub use strip::{shared_controller, PageStrip, SharedSnapController};
pub use widget_utils::{indicator_widget_id, page_widget_id};
