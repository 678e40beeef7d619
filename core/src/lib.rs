#![no_std]
//! Geometry and the two-phase layout protocol shared by the `flowkit` crates.
//!
//! Everything here is a plain value type: no view tree, no environment, no
//! rendering. Layout containers talk to their children through the
//! [`SubView`](layout::SubView) size-query trait and report placements as
//! [`Rect`](layout::Rect)s.

extern crate alloc;

pub mod layout;
pub use layout::{EdgeInsets, Layout, Point, ProposalSize, Rect, Size, SubView};

pub mod path;
pub use path::{Path, PathElement};
