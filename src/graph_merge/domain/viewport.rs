use crate::shared::error::GraphMergeError;
use crate::shared::Result;
use serde::Serialize;

pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1200.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;
pub const DEFAULT_VIEWPORT_MARGIN: f64 = 40.0;

/// Viewport value object: drawing area the layout is computed for
///
/// Invariant: width and height are finite, positive and larger than twice
/// the margin, so the usable area is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    width: f64,
    height: f64,
    margin: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, margin: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && margin.is_finite()) {
            return Err(invalid("dimensions must be finite numbers"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(invalid(format!(
                "width and height must be positive (got {}x{})",
                width, height
            )));
        }
        if margin < 0.0 {
            return Err(invalid(format!("margin must not be negative (got {})", margin)));
        }
        if 2.0 * margin >= width || 2.0 * margin >= height {
            return Err(invalid(format!(
                "margin {} leaves no drawing area in a {}x{} viewport",
                margin, width, height
            )));
        }

        Ok(Self {
            width,
            height,
            margin,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Width left between the left and right margins
    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Height left between the top and bottom margins
    pub fn usable_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
            margin: DEFAULT_VIEWPORT_MARGIN,
        }
    }
}

fn invalid(reason: impl Into<String>) -> anyhow::Error {
    GraphMergeError::InvalidViewport {
        reason: reason.into(),
    }
    .into()
}
