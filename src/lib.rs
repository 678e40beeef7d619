#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod debug;

#[doc(inline)]
pub use flowkit_color as color;
#[doc(inline)]
pub use flowkit_core::path;
#[doc(inline)]
pub use flowkit_layout as layout;

pub mod prelude {
    //! A collection of commonly used traits and types for easy importing.
    //!
    //! ```rust
    //! use flowkit::prelude::*;
    //!
    //! let flow = FlowLayout::default();
    //! let tag = Size::new(40.0, 20.0);
    //! let children: [&dyn SubView; 1] = [&tag];
    //! assert_eq!(flow.size_that_fits(ProposalSize::UNSPECIFIED, &children), tag);
    //! ```
    pub use crate::color::{HexColorError, Srgb, WithOpacity};
    pub use crate::layout::{
        Axis, Container, EdgeInsets, FlowLayout, FlowLayoutConfig, Layout, LayoutError,
        PaddingLayout, Point, ProposalSize, Rect, Size, SubView,
    };
    pub use crate::path::{Path, PathElement};
}
