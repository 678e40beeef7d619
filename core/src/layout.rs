//! Layout primitives and geometry types for the `flowkit` layout system.
//!
//! # Logical Pixels (Points)
//!
//! All layout values use **logical pixels** (also called "points" or "dp"),
//! the same unit design tools like Figma and Sketch use. Conversion to
//! physical pixels is the caller's business.
//!
//! # Example
//!
//! ```
//! use flowkit_core::{ProposalSize, Rect, Size, SubView};
//!
//! // A fixed-size item answers every proposal with its own size.
//! let chip = Size::new(48.0, 24.0);
//! assert_eq!(chip.size_that_fits(ProposalSize::UNSPECIFIED), chip);
//!
//! let bounds = Rect::from_size(Size::new(100.0, 40.0));
//! assert_eq!(bounds.max_x(), 100.0);
//! ```

use core::fmt::Debug;
use core::ops::Add;

use alloc::vec::Vec;

// ============================================================================
// SubView Trait - Child Proxy
// ============================================================================

/// A proxy for querying child sizes during layout.
///
/// This trait allows layout containers to negotiate with children by asking
/// "if I propose this size, how big would you be?" as many times as they
/// need.
///
/// # Pure Functions
///
/// All methods take `&self` and must not have side effects. A layout may
/// query the same child several times in one pass and expects the same
/// answer for the same proposal.
pub trait SubView {
    /// Query the child's size for a given proposal.
    ///
    /// - `ProposalSize::UNSPECIFIED` - ideal/intrinsic size
    /// - `ProposalSize::new(Some(0.0), None)` - minimum width
    /// - `ProposalSize::new(Some(200.0), None)` - constrained width
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;

    /// The child's natural size, independent of the space it is given.
    fn intrinsic_size(&self) -> Size {
        self.size_that_fits(ProposalSize::UNSPECIFIED)
    }
}

/// A [`Size`] is the simplest child: rigid, it ignores every proposal.
impl SubView for Size {
    fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
        *self
    }
}

// ============================================================================
// Layout Trait - Container Layout
// ============================================================================

/// A layout algorithm for arranging child views.
///
/// Layouts receive a size proposal from their parent, query their children
/// to determine sizes, and then place children within the final bounds.
///
/// # Two-Phase Layout
///
/// 1. **Sizing** ([`size_that_fits`](Self::size_that_fits)): Determine how big
///    this container should be given a proposal
/// 2. **Placement** ([`place`](Self::place)): Position children within the
///    final bounds
///
/// Implementations must make the same decisions in both phases for the same
/// input, otherwise the reported size and the actual placement disagree.
pub trait Layout: Debug {
    /// Calculate the size this layout wants given a proposal.
    ///
    /// # Arguments
    ///
    /// * `proposal` - The size proposed by the parent
    /// * `children` - References to child proxies for size queries
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// Place children within the given bounds.
    ///
    /// Returns one rect per child, in child order, specifying its position
    /// and size within `bounds`.
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect>;
}

// ============================================================================
// Geometry Types
// ============================================================================

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Creates the rectangle spanned by two opposite corners.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let origin = Point::new(a.x.min(b.x), a.y.min(b.y));
        Self::new(
            origin,
            Size::new(a.x.max(b.x) - origin.x, a.y.max(b.y) - origin.y),
        )
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> &Size {
        &self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Returns the minimum x-coordinate (left edge).
    #[must_use]
    pub const fn min_x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the minimum y-coordinate (top edge).
    #[must_use]
    pub const fn min_y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the maximum x-coordinate (right edge).
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the maximum y-coordinate (bottom edge).
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the midpoint x-coordinate.
    #[must_use]
    pub const fn mid_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }

    /// Returns the midpoint y-coordinate.
    #[must_use]
    pub const fn mid_y(&self) -> f32 {
        self.origin.y + self.size.height / 2.0
    }

    /// Returns the center point of the rectangle.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Inset the rectangle by the given amounts on each edge.
    #[must_use]
    pub fn inset(&self, top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self::new(
            Point::new(self.origin.x + leading, self.origin.y + top),
            Size::new(
                (self.size.width - leading - trailing).max(0.0),
                (self.size.height - top - bottom).max(0.0),
            ),
        )
    }

    /// Inset the rectangle by `insets`. The result never has a negative size.
    #[must_use]
    pub fn inset_by(&self, insets: &EdgeInsets) -> Self {
        self.inset(insets.top, insets.bottom, insets.leading, insets.trailing)
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_corners(
            Point::new(self.min_x().min(other.min_x()), self.min_y().min(other.min_y())),
            Point::new(self.max_x().max(other.max_x()), self.max_y().max(other.max_y())),
        )
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in points.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns true if both dimensions are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns true if both dimensions are finite and not negative.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    /// Replaces negative or non-finite dimensions with zero.
    #[must_use]
    pub const fn sanitized(self) -> Self {
        Self {
            width: sanitize(self.width),
            height: sanitize(self.height),
        }
    }

    /// Grows the size by the total of `insets` on each axis.
    #[must_use]
    pub fn outset_by(self, insets: &EdgeInsets) -> Self {
        Self::new(
            self.width + insets.horizontal(),
            self.height + insets.vertical(),
        )
    }
}

const fn sanitize(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

// ============================================================================
// Point
// ============================================================================

/// Absolute coordinate relative to a parent layout's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Add<Size> for Point {
    type Output = Self;

    fn add(self, rhs: Size) -> Self::Output {
        Self::new(self.x + rhs.width, self.y + rhs.height)
    }
}

// ============================================================================
// ProposalSize
// ============================================================================

/// A size proposal from parent to child during layout negotiation.
///
/// Each dimension can be:
/// - `None` - "Tell me your ideal size" (unspecified)
/// - `Some(0.0)` - "Tell me your minimum size"
/// - `Some(f32::INFINITY)` - "Tell me your maximum size"
/// - `Some(value)` - "I suggest you use this size"
///
/// Children are free to return any size; the proposal is just a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProposalSize {
    /// Width proposal: `None` = unspecified, `Some(f32)` = suggested width
    pub width: Option<f32>,
    /// Height proposal: `None` = unspecified, `Some(f32)` = suggested height
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Creates a [`ProposalSize`] from optional width and height.
    #[must_use]
    pub fn new(width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Unspecified proposal - asks for ideal/intrinsic size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Zero proposal - asks for minimum size.
    pub const ZERO: Self = Self {
        width: Some(0.0),
        height: Some(0.0),
    };

    /// Infinite proposal - asks for maximum size.
    pub const INFINITY: Self = Self {
        width: Some(f32::INFINITY),
        height: Some(f32::INFINITY),
    };

    /// Returns the width or a default value if unspecified.
    #[must_use]
    pub fn width_or(&self, default: f32) -> f32 {
        self.width.unwrap_or(default)
    }

    /// Returns the height or a default value if unspecified.
    #[must_use]
    pub fn height_or(&self, default: f32) -> f32 {
        self.height.unwrap_or(default)
    }

    /// Replace only the width, keeping the height.
    #[must_use]
    pub const fn with_width(self, width: Option<f32>) -> Self {
        Self {
            width,
            height: self.height,
        }
    }

    /// Replace only the height, keeping the width.
    #[must_use]
    pub const fn with_height(self, height: Option<f32>) -> Self {
        Self {
            width: self.width,
            height,
        }
    }

    /// Shrinks each specified dimension by `insets`, never below zero.
    #[must_use]
    pub fn inset_by(self, insets: &EdgeInsets) -> Self {
        Self {
            width: self.width.map(|w| (w - insets.horizontal()).max(0.0)),
            height: self.height.map(|h| (h - insets.vertical()).max(0.0)),
        }
    }
}

// ============================================================================
// EdgeInsets
// ============================================================================

/// Insets applied to the four edges of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    /// Top inset in points.
    pub top: f32,
    /// Leading inset in points (left in LTR).
    pub leading: f32,
    /// Bottom inset in points.
    pub bottom: f32,
    /// Trailing inset in points (right in LTR).
    pub trailing: f32,
}

impl EdgeInsets {
    /// Zero insets.
    pub const ZERO: Self = Self::all(0.0);

    /// Creates an [`EdgeInsets`] value with explicit edges.
    #[must_use]
    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns one inset for both horizontal edges and one for both vertical edges.
    #[must_use]
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total of the leading and trailing insets.
    #[must_use]
    pub const fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    /// Total of the top and bottom insets.
    #[must_use]
    pub const fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[allow(clippy::cast_possible_truncation)]
impl<T: Into<f64>> From<T> for EdgeInsets {
    fn from(value: T) -> Self {
        Self::all(value.into() as f32)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));

        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.min_y(), 20.0);
        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.max_y(), 70.0);
        assert_eq!(rect.mid_x(), 60.0);
        assert_eq!(rect.mid_y(), 45.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        let inset = rect.inset(10.0, 10.0, 20.0, 20.0);

        assert_eq!(inset.x(), 20.0);
        assert_eq!(inset.y(), 10.0);
        assert_eq!(inset.width(), 60.0);
        assert_eq!(inset.height(), 80.0);
    }

    #[test]
    fn test_rect_inset_by_never_negative() {
        let rect = Rect::from_size(Size::new(10.0, 10.0));
        let inset = rect.inset_by(&EdgeInsets::all(8.0));

        assert_eq!(inset.origin(), Point::new(8.0, 8.0));
        assert_eq!(*inset.size(), Size::zero());
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b = Rect::new(Point::new(20.0, 5.0), Size::new(5.0, 20.0));
        let u = a.union(&b);

        assert_eq!(u.origin(), Point::zero());
        assert_eq!(u.max_x(), 25.0);
        assert_eq!(u.max_y(), 25.0);
    }

    #[test]
    fn test_proposal_size() {
        let proposal = ProposalSize::new(Some(100.0), None);

        assert_eq!(proposal.width_or(0.0), 100.0);
        assert_eq!(proposal.height_or(50.0), 50.0);

        let with_height = proposal.with_height(Some(200.0));
        assert_eq!(with_height.width, Some(100.0));
        assert_eq!(with_height.height, Some(200.0));
    }

    #[test]
    fn test_proposal_inset_keeps_unspecified() {
        let proposal = ProposalSize::new(Some(30.0), None).inset_by(&EdgeInsets::all(20.0));

        assert_eq!(proposal.width, Some(0.0));
        assert_eq!(proposal.height, None);
    }

    #[test]
    fn test_size_sanitized() {
        let size = Size::new(f32::NAN, -3.0).sanitized();
        assert_eq!(size, Size::zero());
        assert!(!Size::new(f32::INFINITY, 1.0).is_valid());
        assert!(Size::new(4.0, 2.0).is_valid());
    }

    #[test]
    fn test_edge_insets_constructors() {
        let symmetric = EdgeInsets::symmetric(5.0, 2.0);
        assert_eq!(symmetric, EdgeInsets::new(2.0, 5.0, 2.0, 5.0));
        assert_eq!(symmetric.horizontal(), 10.0);
        assert_eq!(symmetric.vertical(), 4.0);
        assert_eq!(EdgeInsets::from(3), EdgeInsets::all(3.0));
    }

    #[test]
    fn test_size_is_rigid_subview() {
        let chip = Size::new(12.0, 8.0);
        assert_eq!(chip.size_that_fits(ProposalSize::ZERO), chip);
        assert_eq!(chip.intrinsic_size(), chip);
    }
}
