//! Errors raised when constructing display inputs.
//!
//! Layout itself never fails: once an [`ImageFile`](crate::ImageFile) exists,
//! every sizing function produces an element. Validation happens at the
//! edges, where caller data enters the crate.

use thiserror::Error;

use crate::geometry::{Rect, Size};

/// Display input error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DisplayError {
    /// Intrinsic width or height is zero, negative, or not finite.
    #[error("invalid image dimensions {width}x{height}: both sides must be positive and finite")]
    InvalidDimension { width: f64, height: f64 },
    /// Scale factor is zero, negative, or not finite.
    #[error("invalid scale factor {0}: must be positive and finite")]
    InvalidScale(f64),
    /// Crop rectangle extends past the image or has negative fields.
    #[error("crop rectangle {rect:?} does not fit inside image of size {image:?}")]
    RectangleOutOfBounds { rect: Rect, image: Size },
    /// A sizing variant was requested without a value it needs.
    #[error("missing display parameter: {0}")]
    MissingParameter(&'static str),
}
