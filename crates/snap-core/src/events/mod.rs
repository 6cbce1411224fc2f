//! Selection change notifications
//!
//! A transition between pages is bracketed by [`SelectionChange::Start`] and
//! [`SelectionChange::End`]. Listeners are invoked synchronously, in registration
//! order, from inside the state change that caused them.

use std::sync::{Arc, Weak};

/// Lifecycle signal of a page change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionChange {
    Start,
    End,
}

/// Trait for components that need to respond to page changes
pub trait SelectionSubscriber: Send + Sync {
    fn on_selection_change(&self, change: SelectionChange);
}

type ChangeHandler = Box<dyn FnMut() + Send + Sync>;

/// Multi-subscriber broadcast for selection changes
#[derive(Default)]
pub struct SelectionEvents {
    start_handlers: Vec<ChangeHandler>,
    end_handlers: Vec<ChangeHandler>,
    subscribers: Vec<Weak<dyn SelectionSubscriber>>,
}

impl SelectionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure called whenever a page change starts
    pub fn on_start<F>(&mut self, handler: F)
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.start_handlers.push(Box::new(handler));
    }

    /// Register a closure called whenever a page change ends
    pub fn on_end<F>(&mut self, handler: F)
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.end_handlers.push(Box::new(handler));
    }

    /// Add a subscriber. Only a weak reference is kept; dropped subscribers are
    /// pruned on the next broadcast.
    pub fn subscribe(&mut self, subscriber: &Arc<dyn SelectionSubscriber>) {
        self.subscribers.push(Arc::downgrade(subscriber));
    }

    pub fn listener_count(&self) -> usize {
        self.start_handlers.len()
            + self.end_handlers.len()
            + self.subscribers.iter().filter(|w| w.strong_count() > 0).count()
    }

    pub(crate) fn emit(&mut self, change: SelectionChange) {
        let handlers = match change {
            SelectionChange::Start => &mut self.start_handlers,
            SelectionChange::End => &mut self.end_handlers,
        };
        for handler in handlers.iter_mut() {
            handler();
        }

        // Remove any dead weak references
        self.subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in self.subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_selection_change(change);
            }
        }
    }
}

impl std::fmt::Debug for SelectionEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionEvents")
            .field("start_handlers", &self.start_handlers.len())
            .field("end_handlers", &self.end_handlers.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
