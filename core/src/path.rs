//! Polyline, rectangle and circle outlines as plain command lists.
//!
//! A [`Path`] does not rasterize anything. It records the commands a
//! renderer would replay, in order.

use alloc::vec::Vec;

use crate::{Point, Rect, Size};

/// One drawing command of a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathElement {
    /// Starts a new subpath at the point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Ellipse inscribed in the rectangle.
    Ellipse(Rect),
}

/// An ordered list of [`PathElement`]s.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Moves to the first point and draws lines through the rest.
    ///
    /// When `closed` is set, a final line returns to the first point.
    /// No points produce an empty path.
    #[must_use]
    pub fn polyline(points: &[Point], closed: bool) -> Self {
        let mut path = Self::new();
        let Some((first, rest)) = points.split_first() else {
            return path;
        };

        path.move_to(*first);
        for point in rest {
            path.add_line(*point);
        }
        if closed {
            path.add_line(*first);
        }
        path
    }

    /// Outline of the axis-aligned rectangle with opposite corners `from` and `to`.
    ///
    /// The outline starts at `from` and runs through `(from.x, to.y)`, `to`
    /// and `(to.x, from.y)` before returning to `from`.
    #[must_use]
    pub fn rect_between(from: Point, to: Point) -> Self {
        Self::polyline(
            &[
                from,
                Point::new(from.x, to.y),
                to,
                Point::new(to.x, from.y),
            ],
            true,
        )
    }

    /// Outline of the rectangle at `origin` with `size`.
    #[must_use]
    pub fn rect(origin: Point, size: Size) -> Self {
        Self::rect_between(origin, origin + size)
    }

    /// Circle of `radius` around `center`.
    #[must_use]
    pub fn circle(center: Point, radius: f32) -> Self {
        let mut path = Self::new();
        path.elements.push(PathElement::Ellipse(Rect::new(
            Point::new(center.x - radius, center.y - radius),
            Size::new(radius * 2.0, radius * 2.0),
        )));
        path
    }

    /// Starts a new subpath at `point`.
    pub fn move_to(&mut self, point: Point) {
        self.elements.push(PathElement::MoveTo(point));
    }

    /// Adds a straight line to `point`.
    pub fn add_line(&mut self, point: Point) {
        self.elements.push(PathElement::LineTo(point));
    }

    /// Adds a straight line to `(x, y)`.
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.add_line(Point::new(x, y));
    }

    /// The recorded commands.
    #[must_use]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Returns true if the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Axis-aligned bounds of every point and ellipse the path references.
    #[must_use]
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.elements
            .iter()
            .map(|element| match *element {
                PathElement::MoveTo(point) | PathElement::LineTo(point) => {
                    Rect::new(point, Size::zero())
                }
                PathElement::Ellipse(rect) => rect,
            })
            .reduce(|acc, rect| acc.union(&rect))
    }
}
