//! Scale-factor arithmetic for displaying an image inside a box.
//!
//! Everything here is plain floating-point math on intrinsic sizes. The free
//! functions assume a positive intrinsic size; a zero side divides by zero
//! and yields an infinite or NaN scale. Use [`Size::try_new`] (or
//! [`ImageFile::new`](crate::ImageFile::new)) where inputs are untrusted.
//!
//! # Example
//!
//! ```
//! use zendisplay::geometry::{Size, Target, scale_to_fit};
//!
//! let intrinsic = Size::new(1000.0, 500.0);
//! let scale = scale_to_fit(intrinsic, Target::new(400.0, 300.0));
//!
//! // Width constrains: 400 / 1000
//! assert_eq!(scale, 0.4);
//! assert_eq!(intrinsic.scale(scale), Size::new(400.0, 200.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DisplayError;

/// Relative tolerance for comparing computed sizes.
const EPSILON: f64 = 1e-9;

/// Width × height in (possibly fractional) pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a size without checking it.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a size, rejecting zero, negative, and non-finite sides.
    pub fn try_new(width: f64, height: f64) -> Result<Self, DisplayError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(width) && valid(height) {
            Ok(Self { width, height })
        } else {
            Err(DisplayError::InvalidDimension { width, height })
        }
    }

    /// A square of the given side.
    pub const fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Multiply both sides by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Whether this size fits inside `target` on every axis the target constrains.
    pub fn fits_within(&self, target: Target) -> bool {
        let fits = |v: f64, max: Option<f64>| max.is_none_or(|m| v <= m || approx_eq(v, m));
        fits(self.width, target.width) && fits(self.height, target.height)
    }

    /// Whether this size meets `target` exactly on at least one constrained axis.
    pub fn touches(&self, target: Target) -> bool {
        let hit = |v: f64, max: Option<f64>| max.is_some_and(|m| approx_eq(v, m));
        hit(self.width, target.width) || hit(self.height, target.height)
    }
}

/// Axis-aligned rectangle in the coordinate space of the original image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Size of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Top-left corner as an offset from the image origin.
    pub fn origin(&self) -> Offset {
        Offset::new(self.x, self.y)
    }

    /// Whether every field is non-negative and the rect stays inside `bounds`.
    pub fn contained_in(&self, bounds: Size) -> bool {
        let non_negative = [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        non_negative
            && self.x + self.width <= bounds.width
            && self.y + self.height <= bounds.height
    }
}

/// A 2D translation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    /// Create a new offset.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `factor`.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// The opposite translation.
    pub fn negate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Whether this is the identity translation.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// A bounding box where either side may be left unconstrained.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl Target {
    /// Constrain both sides.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Constrain only width.
    pub const fn width_only(width: f64) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// Constrain only height.
    pub const fn height_only(height: f64) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }

    /// No constraint at all. Fitting into it is the identity.
    pub const fn unbounded() -> Self {
        Self {
            width: None,
            height: None,
        }
    }
}

impl From<Size> for Target {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Scale that makes `size` exactly `width` wide.
///
/// Requires `size.width > 0`.
pub fn scale_for_width(size: Size, width: f64) -> f64 {
    width / size.width
}

/// Scale that makes `size` exactly `height` tall.
///
/// Requires `size.height > 0`.
pub fn scale_for_height(size: Size, height: f64) -> f64 {
    height / size.height
}

/// Largest scale at which `size` fits inside `target` (contain).
///
/// With only one side constrained, that axis decides. With neither, the
/// scale is `1.0`.
pub fn scale_to_fit(size: Size, target: Target) -> f64 {
    match (target.width, target.height) {
        (Some(w), Some(h)) => scale_for_width(size, w).min(scale_for_height(size, h)),
        (Some(w), None) => scale_for_width(size, w),
        (None, Some(h)) => scale_for_height(size, h),
        (None, None) => 1.0,
    }
}

/// Like [`scale_to_fit`], but never upscales.
pub fn shrink_to_fit(size: Size, target: Target) -> f64 {
    scale_to_fit(size, target).min(1.0)
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON * a.abs().max(b.abs()).max(1.0)
}
