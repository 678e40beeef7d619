//! Padding layout that insets a child by fixed edge distances.

use alloc::{vec, vec::Vec};

use crate::{EdgeInsets, Layout, ProposalSize, Rect, Size, SubView};

/// Layout that insets its single child by the configured edge values.
///
/// Only the first child is considered; any others are ignored and receive
/// no placement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaddingLayout {
    edges: EdgeInsets,
}

impl PaddingLayout {
    /// Creates a padding layout with the given insets.
    #[must_use]
    pub const fn new(edges: EdgeInsets) -> Self {
        Self { edges }
    }

    /// The insets applied to the child.
    #[must_use]
    pub const fn edges(&self) -> &EdgeInsets {
        &self.edges
    }
}

impl Layout for PaddingLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        // Reduce the proposed size for the child by the padding amount.
        let child_proposal = proposal.inset_by(&self.edges);

        let child_size = children
            .first()
            .map_or(Size::zero(), |c| c.size_that_fits(child_proposal));

        // Greedy children report infinity; they get whatever was proposed.
        let width = if child_size.width.is_infinite() {
            child_proposal.width_or(0.0)
        } else {
            child_size.width
        };
        let height = if child_size.height.is_infinite() {
            child_proposal.height_or(0.0)
        } else {
            child_size.height
        };

        Size::new(width, height).sanitized().outset_by(&self.edges)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return vec![];
        }
        vec![bounds.inset_by(&self.edges)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn test_padding_size() {
        let layout = PaddingLayout::new(EdgeInsets::all(10.0));
        let child = Size::new(50.0, 30.0);
        let children: Vec<&dyn SubView> = vec![&child];

        let size = layout.size_that_fits(ProposalSize::UNSPECIFIED, &children);

        // Size = child size + padding on all sides
        assert_eq!(size.width, 70.0); // 50 + 10 + 10
        assert_eq!(size.height, 50.0); // 30 + 10 + 10
    }

    #[test]
    fn test_padding_without_child() {
        let layout = PaddingLayout::new(EdgeInsets::symmetric(4.0, 2.0));

        let size = layout.size_that_fits(ProposalSize::UNSPECIFIED, &[]);
        assert_eq!(size, Size::new(8.0, 4.0));

        let rects = layout.place(Rect::from_size(Size::new(10.0, 10.0)), &[]);
        assert!(rects.is_empty());
    }

    #[test]
    fn test_padding_placement() {
        let layout = PaddingLayout::new(EdgeInsets::new(10.0, 15.0, 20.0, 25.0));
        let child = Size::new(50.0, 30.0);
        let children: Vec<&dyn SubView> = vec![&child];

        let bounds = Rect::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        let rects = layout.place(bounds, &children);

        // Child origin is offset by leading and top
        assert_eq!(rects[0].x(), 15.0);
        assert_eq!(rects[0].y(), 10.0);

        // Child size is bounds minus padding
        assert_eq!(rects[0].width(), 60.0); // 100 - 15 - 25
        assert_eq!(rects[0].height(), 70.0); // 100 - 10 - 20
    }

    #[test]
    fn test_padding_clamps_to_zero() {
        let layout = PaddingLayout::new(EdgeInsets::all(30.0));
        let child = Size::new(5.0, 5.0);
        let children: Vec<&dyn SubView> = vec![&child];

        let rects = layout.place(Rect::from_size(Size::new(40.0, 40.0)), &children);
        assert_eq!(*rects[0].size(), Size::zero());
    }
}
