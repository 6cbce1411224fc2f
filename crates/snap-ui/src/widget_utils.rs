//! Widget IDs for snap views
//!
//! Pages are rendered into child `Ui`s that share layouts, and several views can
//! sit in one window, so every page and toggle ID is scoped by view and index.

use egui::Id;

/// Role of a widget inside a snap view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Part {
    Page,
    Indicator,
}

fn scoped_id(view: &str, part: Part, index: usize) -> Id {
    Id::new(view).with(part).with(index)
}

/// ID for page `index` of the snap view `view`
pub fn page_widget_id(view: &str, index: usize) -> Id {
    scoped_id(view, Part::Page, index)
}

/// ID for the pagination toggle `index` of the snap view `view`
pub fn indicator_widget_id(view: &str, index: usize) -> Id {
    scoped_id(view, Part::Indicator, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_scoped_by_view_part_and_index() {
        assert_eq!(page_widget_id("gallery", 2), page_widget_id("gallery", 2));
        assert_ne!(page_widget_id("gallery", 2), page_widget_id("gallery", 3));
        assert_ne!(page_widget_id("gallery", 2), page_widget_id("covers", 2));
        assert_ne!(page_widget_id("gallery", 2), indicator_widget_id("gallery", 2));
    }
}
