#![no_std]
//! Layout containers for `flowkit`.
//!
//! This crate runs the two-pass layout protocol from
//! [`flowkit_core::layout`] over borrowed children. It contains:
//!
//! - [`FlowLayout`], a wrapping row layout for chips and tags,
//! - [`PaddingLayout`], which insets a single child,
//! - [`Container`], which turns a layout plus its children back into a
//!   [`SubView`] so layouts can nest.
//!
//! # Example
//!
//! ```
//! use flowkit_layout::{FlowLayout, Point, Rect, Size, SubView};
//!
//! let flow = FlowLayout::with_spacing(2.0, 4.0)?;
//! let chips = [Size::new(10.0, 6.0), Size::new(10.0, 6.0), Size::new(10.0, 6.0)];
//! let children: Vec<&dyn SubView> = chips.iter().map(|c| c as &dyn SubView).collect();
//!
//! assert_eq!(flow.measure(&children, 25.0), Size::new(22.0, 16.0));
//!
//! let rects = flow.place_children(Rect::from_size(Size::new(25.0, 100.0)), &children);
//! assert_eq!(rects[2].origin(), Point::new(0.0, 10.0));
//! # Ok::<(), flowkit_layout::LayoutError>(())
//! ```

extern crate alloc;

pub use flowkit_core::layout::*;

pub mod container;
pub use container::Container;

mod error;
pub use error::{Axis, LayoutError};

pub mod flow;
pub use flow::{FlowLayout, FlowLayoutConfig};

pub mod padding;
pub use padding::PaddingLayout;
