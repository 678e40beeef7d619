//! Wrapping flow layout.
//!
//! Items are laid out left to right and wrap to a new row as soon as the
//! next one would overflow the available width. Rows are top-aligned and as
//! tall as their tallest item.
//!
//! Measuring and placing run the same [`Walker`], so the reported size and
//! the actual placement always agree on where rows break.

use core::ops::Range;

use alloc::vec::Vec;

use crate::{Axis, Layout, LayoutError, Point, ProposalSize, Rect, Size, SubView};

/// Spacing used by [`FlowLayout::default`] on both axes.
pub const DEFAULT_SPACING: f32 = 8.0;

/// Layout engine that wraps children into rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    horizontal_spacing: f32,
    vertical_spacing: f32,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            horizontal_spacing: DEFAULT_SPACING,
            vertical_spacing: DEFAULT_SPACING,
        }
    }
}

/// Plain configuration for a [`FlowLayout`], validated on conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlowLayoutConfig {
    /// Gap between neighbouring items of a row.
    pub horizontal_spacing: f32,
    /// Gap between rows.
    pub vertical_spacing: f32,
}

impl Default for FlowLayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: DEFAULT_SPACING,
            vertical_spacing: DEFAULT_SPACING,
        }
    }
}

impl TryFrom<FlowLayoutConfig> for FlowLayout {
    type Error = LayoutError;

    fn try_from(config: FlowLayoutConfig) -> Result<Self, Self::Error> {
        Self::with_spacing(config.horizontal_spacing, config.vertical_spacing)
    }
}

impl From<FlowLayout> for FlowLayoutConfig {
    fn from(layout: FlowLayout) -> Self {
        Self {
            horizontal_spacing: layout.horizontal_spacing,
            vertical_spacing: layout.vertical_spacing,
        }
    }
}

fn validate(axis: Axis, value: f32) -> Result<f32, LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::InvalidSpacing { axis, value })
    }
}

impl FlowLayout {
    /// Creates a flow layout using `spacing` on both axes.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSpacing`] if `spacing` is negative or
    /// not finite.
    pub fn new(spacing: f32) -> Result<Self, LayoutError> {
        Self::with_spacing(spacing, spacing)
    }

    /// Creates a flow layout with separate gaps within and between rows.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidSpacing`] if either value is negative
    /// or not finite.
    pub fn with_spacing(horizontal: f32, vertical: f32) -> Result<Self, LayoutError> {
        Ok(Self {
            horizontal_spacing: validate(Axis::Horizontal, horizontal)?,
            vertical_spacing: validate(Axis::Vertical, vertical)?,
        })
    }

    /// Gap between neighbouring items of a row.
    #[must_use]
    pub const fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    /// Gap between rows.
    #[must_use]
    pub const fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    /// Total size the children need when wrapped at `available_width`.
    ///
    /// `f32::INFINITY` (or NaN) never wraps. Zero or negative widths put
    /// every item on its own row.
    #[must_use]
    pub fn measure(&self, children: &[&dyn SubView], available_width: f32) -> Size {
        if children.is_empty() {
            return Size::zero();
        }

        let mut max_row_width = 0.0_f32;
        let mut row_width = 0.0_f32;
        let mut row_height = 0.0_f32;
        let mut total_height = 0.0_f32;
        let mut rows = 1_usize;

        for slot in self.walk(children, available_width) {
            if slot.wraps {
                total_height += row_height + self.vertical_spacing;
                max_row_width = max_row_width.max(row_width);
                row_height = 0.0;
                rows += 1;
            }
            row_width = slot.x + slot.size.width;
            row_height = row_height.max(slot.size.height);
        }
        total_height += row_height;

        let size = Size::new(max_row_width.max(row_width), total_height);
        tracing::trace!(
            items = children.len(),
            available_width,
            rows,
            width = size.width,
            height = size.height,
            "measured flow"
        );
        size
    }

    /// Positions every child inside `bounds`, one rect per child in order.
    ///
    /// Only `bounds.width()` drives wrapping. Rows that run past
    /// `bounds.max_y()` are still placed.
    #[must_use]
    pub fn place_children(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let mut y = bounds.min_y();
        let mut row_height = 0.0_f32;

        let rects: Vec<Rect> = self
            .walk(children, bounds.width())
            .map(|slot| {
                if slot.wraps {
                    y += row_height + self.vertical_spacing;
                    row_height = 0.0;
                }
                row_height = row_height.max(slot.size.height);
                Rect::new(Point::new(bounds.min_x() + slot.x, y), slot.size)
            })
            .collect();

        tracing::trace!(
            items = rects.len(),
            x = bounds.x(),
            y = bounds.y(),
            width = bounds.width(),
            "placed flow"
        );
        rects
    }

    /// Index ranges of the children that share a row at `available_width`.
    #[must_use]
    pub fn rows(&self, children: &[&dyn SubView], available_width: f32) -> Vec<Range<usize>> {
        let mut rows = Vec::new();
        let mut start = 0;

        for (index, slot) in self.walk(children, available_width).enumerate() {
            if slot.wraps {
                rows.push(start..index);
                start = index;
            }
        }
        if !children.is_empty() {
            rows.push(start..children.len());
        }
        rows
    }

    fn walk<'a>(
        &self,
        children: &'a [&'a dyn SubView],
        available_width: f32,
    ) -> Walker<impl Iterator<Item = Size> + 'a> {
        Walker {
            sizes: children.iter().map(|child| intrinsic_size(*child)),
            spacing: self.horizontal_spacing,
            available_width: if available_width.is_nan() {
                f32::INFINITY
            } else {
                available_width
            },
            row_width: 0.0,
            row_is_empty: true,
        }
    }
}

impl Layout for FlowLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        self.measure(children, proposal.width_or(f32::INFINITY))
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        self.place_children(bounds, children)
    }
}

fn intrinsic_size(child: &dyn SubView) -> Size {
    let size = child.intrinsic_size();
    if size.is_valid() {
        size
    } else {
        tracing::warn!(
            width = size.width,
            height = size.height,
            "flow item reported an invalid size, clamping to zero"
        );
        size.sanitized()
    }
}

/// Where one child lands, relative to the start of its row.
#[derive(Debug, Clone, Copy)]
struct Slot {
    size: Size,
    x: f32,
    /// The child opens a new row.
    wraps: bool,
}

/// Row-breaking pass shared by measuring and placing.
struct Walker<I> {
    sizes: I,
    spacing: f32,
    available_width: f32,
    row_width: f32,
    row_is_empty: bool,
}

impl<I: Iterator<Item = Size>> Iterator for Walker<I> {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        let size = self.sizes.next()?;

        // A lone item never wraps against itself, however wide it is.
        let x = if self.row_is_empty {
            0.0
        } else {
            self.row_width + self.spacing
        };
        let wraps = !self.row_is_empty && x + size.width > self.available_width;
        let x = if wraps { 0.0 } else { x };

        self.row_width = x + size.width;
        self.row_is_empty = false;

        Some(Slot { size, x, wraps })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sizes.size_hint()
    }
}
