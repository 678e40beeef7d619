use core::fmt::{self, Display};

/// Layout axis a value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along a row.
    Horizontal,
    /// Between rows.
    Vertical,
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        })
    }
}

/// Errors raised while configuring a layout.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Spacing was negative, NaN or infinite.
    #[error("{axis} spacing must be finite and non-negative, got {value}")]
    InvalidSpacing {
        /// Which spacing was rejected.
        axis: Axis,
        /// The rejected value.
        value: f32,
    },
}
