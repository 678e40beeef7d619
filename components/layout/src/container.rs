//! Pairs a [`Layout`] with borrowed children so the pair can be measured
//! and placed like any other child.

use core::fmt::{self, Debug};

use alloc::vec::Vec;

use crate::{Layout, ProposalSize, Rect, Size, SubView};

/// A layout together with the children it arranges.
///
/// `Container` implements [`SubView`], which lets one layout be a child of
/// another (for example a padded flow).
pub struct Container<'a, L> {
    layout: L,
    children: &'a [&'a dyn SubView],
}

impl<L: Debug> Debug for Container<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("layout", &self.layout)
            .field("children", &self.children.len())
            .finish()
    }
}

impl<'a, L: Layout> Container<'a, L> {
    /// Wraps `layout` around `children`.
    pub const fn new(layout: L, children: &'a [&'a dyn SubView]) -> Self {
        Self { layout, children }
    }

    /// The wrapped layout.
    pub const fn layout(&self) -> &L {
        &self.layout
    }

    /// Places the children inside `bounds`.
    #[must_use]
    pub fn place(&self, bounds: Rect) -> Vec<Rect> {
        self.layout.place(bounds, self.children)
    }
}

impl<L: Layout> SubView for Container<'_, L> {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        self.layout.size_that_fits(proposal, self.children)
    }
}
