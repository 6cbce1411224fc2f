//! Page anchor bookkeeping

use glam::Vec3;

use crate::error::{Result, SnapError};

/// Axis the pages are laid out along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Unit vector along the axis
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::Horizontal => Vec3::X,
            Axis::Vertical => Vec3::Y,
        }
    }
}

/// Lay out `count` child pages along `axis`, each `page_extent * page_step` apart.
///
/// Returns child positions relative to the container origin. The first page sits
/// at the origin.
pub fn distribute_pages(axis: Axis, page_extent: f32, page_step: f32, count: usize) -> Vec<Vec3> {
    let spacing = page_extent * page_step;
    (0..count)
        .map(|i| axis.unit() * (i as f32 * spacing))
        .collect()
}

/// Ordered container positions at which each page is aligned with the viewport
#[derive(Debug, Clone, PartialEq)]
pub struct PageSet {
    anchors: Vec<Vec3>,
}

impl PageSet {
    /// Build a page set from explicit anchors. At least one anchor is required.
    pub fn from_anchors(anchors: Vec<Vec3>) -> Result<Self> {
        if anchors.is_empty() {
            return Err(SnapError::NoPages);
        }
        Ok(Self { anchors })
    }

    /// Derive anchors from child positions: the container rests on page `i` when it
    /// is moved by the negated child offset.
    pub fn from_child_positions(children: &[Vec3]) -> Result<Self> {
        Self::from_anchors(children.iter().map(|p| -*p).collect())
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn anchors(&self) -> &[Vec3] {
        &self.anchors
    }

    /// Anchor of page `index`
    pub fn position_of(&self, index: usize) -> Result<Vec3> {
        self.anchors
            .get(index)
            .copied()
            .ok_or(SnapError::IndexOutOfRange {
                index,
                count: self.anchors.len(),
            })
    }

    /// Index of the anchor exactly equal to `position`, if any
    pub fn page_index_for_position(&self, position: Vec3) -> Option<usize> {
        self.anchors.iter().position(|anchor| *anchor == position)
    }

    /// Like [`page_index_for_position`](Self::page_index_for_position) but falls
    /// back to the first page when nothing matches.
    pub fn page_index_for_position_or_first(&self, position: Vec3) -> usize {
        self.page_index_for_position(position).unwrap_or(0)
    }

    /// Direction in which the container moves when advancing to later pages.
    ///
    /// Zero for a single page.
    pub fn forward_direction(&self) -> Vec3 {
        match (self.anchors.first(), self.anchors.last()) {
            (Some(first), Some(last)) => (*last - *first).normalize_or_zero(),
            _ => Vec3::ZERO,
        }
    }
}

/// Index of the candidate closest to `point`.
///
/// Ascending scan with a strict comparison, so ties resolve to the lowest index.
/// Returns 0 for an empty candidate list.
pub fn closest_page(point: Vec3, candidates: &[Vec3]) -> usize {
    let mut closest_index = 0;
    let mut closest = f32::INFINITY;

    for (index, candidate) in candidates.iter().enumerate() {
        let distance = point.distance(*candidate);
        if distance < closest {
            closest = distance;
            closest_index = index;
        }
    }

    closest_index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_pages(count: usize) -> PageSet {
        PageSet::from_anchors((0..count).map(|i| Vec3::new(-(i as f32), 0.0, 0.0)).collect())
            .unwrap()
    }

    #[test]
    fn test_empty_page_set_rejected() {
        assert!(matches!(PageSet::from_anchors(vec![]), Err(SnapError::NoPages)));
    }

    #[test]
    fn test_position_of_out_of_range() {
        let pages = unit_pages(4);
        assert_eq!(pages.position_of(2).unwrap(), Vec3::new(-2.0, 0.0, 0.0));
        assert!(matches!(
            pages.position_of(4),
            Err(SnapError::IndexOutOfRange { index: 4, count: 4 })
        ));
    }

    #[test]
    fn test_closest_page_exact_anchor() {
        let pages = unit_pages(4);
        for k in 0..4 {
            assert_eq!(closest_page(pages.anchors()[k], pages.anchors()), k);
        }
    }

    #[test]
    fn test_closest_page_minimizes_distance() {
        let pages = unit_pages(4);
        assert_eq!(closest_page(Vec3::new(-1.4, 0.3, 0.0), pages.anchors()), 1);
        assert_eq!(closest_page(Vec3::new(-2.6, 0.0, 0.0), pages.anchors()), 3);
        assert_eq!(closest_page(Vec3::new(5.0, 0.0, 0.0), pages.anchors()), 0);
    }

    #[test]
    fn test_closest_page_tie_goes_to_lowest_index() {
        let pages = unit_pages(4);
        assert_eq!(closest_page(Vec3::new(-1.5, 0.0, 0.0), pages.anchors()), 1);
    }

    #[test]
    fn test_page_index_for_position() {
        let pages = unit_pages(3);
        assert_eq!(pages.page_index_for_position(Vec3::new(-2.0, 0.0, 0.0)), Some(2));
        assert_eq!(pages.page_index_for_position(Vec3::new(-0.5, 0.0, 0.0)), None);
        assert_eq!(pages.page_index_for_position_or_first(Vec3::new(-0.5, 0.0, 0.0)), 0);
    }

    #[test]
    fn test_distribute_pages_uses_step() {
        let children = distribute_pages(Axis::Horizontal, 100.0, 2.0, 3);
        assert_eq!(children[2], Vec3::new(400.0, 0.0, 0.0));

        let pages = PageSet::from_child_positions(&children).unwrap();
        assert_eq!(pages.position_of(1).unwrap(), Vec3::new(-200.0, 0.0, 0.0));
        assert_eq!(pages.forward_direction(), Vec3::NEG_X);
    }

    #[test]
    fn test_forward_direction_single_page() {
        assert_eq!(unit_pages(1).forward_direction(), Vec3::ZERO);
    }
}
