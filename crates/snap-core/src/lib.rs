//! Core paging logic for scroll-snap containers
//!
//! This crate holds the snapping state machine: page anchor bookkeeping,
//! closest-page resolution, swipe decisions and the animated transition driver.
//! Rendering and input plumbing live with the host, behind the traits in
//! [`container`] and [`controller::SnapInputHandler`].

pub mod config;
pub mod container;
pub mod controller;
pub mod error;
pub mod events;
pub mod pages;

// Re-export commonly used types
pub use config::SnapConfig;
pub use container::{indicator_states, PaginationIndicators, ScrollContainer};
pub use controller::{
    NavigationState, PageSnapController, PageSnapControllerBuilder, PointerEventData,
    SnapInputHandler,
};
pub use error::{Result, SnapError};
pub use events::{SelectionChange, SelectionEvents, SelectionSubscriber};
pub use pages::{closest_page, distribute_pages, Axis, PageSet};
