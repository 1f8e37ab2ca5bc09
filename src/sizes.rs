//! Standard image display variants.
//!
//! Each function takes the caller's [`ImageProps`] plus the one parameter its
//! variant needs, computes the display size, and returns an [`Element`].
//! Width, height, and resize mode on the incoming props are overwritten.
//!
//! # Example
//!
//! ```
//! use zendisplay::{ImageFile, ImageProps, ResizeMode, Target, sizes};
//!
//! let image = ImageFile::new("a.jpg", 1000.0, 500.0).unwrap();
//! let element = sizes::restrained(ImageProps::new(&image), Target::new(400.0, 300.0));
//!
//! // The element takes the contained image's own size, not the box's.
//! assert_eq!(element.footprint().width, 400.0);
//! assert_eq!(element.footprint().height, 200.0);
//! assert_eq!(element.image().fit(), ResizeMode::Cover);
//! ```

use serde::{Deserialize, Serialize};

use crate::crop;
use crate::element::Element;
use crate::error::DisplayError;
use crate::geometry::{self, Rect, Size, Target};
use crate::image::{ImageProps, ResizeMode, Style};

/// Uniform scale factor. Defaults to `1.0`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scale(pub f64);

impl Scale {
    /// Identity scale.
    pub const ONE: Self = Self(1.0);

    /// Checked constructor: the factor must be positive and finite.
    pub fn new(factor: f64) -> Result<Self, DisplayError> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Self(factor))
        } else {
            Err(DisplayError::InvalidScale(factor))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::ONE
    }
}

// ---- With a given size ----

/// Exactly `size`, cover. The element always has the requested footprint;
/// the bitmap may be cropped on the sides.
pub fn fixed_size(props: ImageProps<'_>, size: Size) -> Element<'_> {
    props
        .size(size.width, size.height)
        .resize_mode(ResizeMode::Cover)
        .into()
}

/// Exactly `size`, contain. The bitmap keeps its shape and may leave bars.
pub fn fixed_contained(props: ImageProps<'_>, size: Size) -> Element<'_> {
    props
        .size(size.width, size.height)
        .resize_mode(ResizeMode::Contain)
        .into()
}

/// Contained in `target`, but the element shrinks to the contained image.
///
/// Either side of `target` may be absent; with neither, this is the
/// intrinsic size.
pub fn restrained(props: ImageProps<'_>, target: Target) -> Element<'_> {
    let scale = geometry::scale_to_fit(props.image.size(), target);
    scaled(props, Scale(scale))
}

/// Like [`restrained`], but never scales up. Images already smaller than
/// `target` display at their intrinsic size.
pub fn shrink_to_fit(props: ImageProps<'_>, target: Target) -> Element<'_> {
    let scale = geometry::shrink_to_fit(props.image.size(), target);
    scaled(props, Scale(scale))
}

// ---- Special shapes ----

/// Square of side `size`, cover.
pub fn square(props: ImageProps<'_>, size: f64) -> Element<'_> {
    fixed_size(props, Size::square(size))
}

/// Circle of diameter `size`: a square with a corner radius of `size / 2`
/// over the caller's style.
pub fn circular(props: ImageProps<'_>, size: f64) -> Element<'_> {
    let style = props
        .style
        .clone()
        .merge(&Style::new().border_radius(size / 2.0));
    square(props.style(style), size)
}

// ---- Scaled from the intrinsic size ----

/// Intrinsic size times `scale`, cover. The box has the image's own aspect
/// ratio, so nothing is cropped or distorted.
pub fn scaled(props: ImageProps<'_>, scale: Scale) -> Element<'_> {
    let size = props.image.size().scale(scale.get());
    fixed_size(props, size)
}

/// `height` tall, width following the aspect ratio.
pub fn fixed_height(props: ImageProps<'_>, height: f64) -> Element<'_> {
    let scale = geometry::scale_for_height(props.image.size(), height);
    scaled(props, Scale(scale))
}

/// `width` wide, height following the aspect ratio.
pub fn fixed_width(props: ImageProps<'_>, width: f64) -> Element<'_> {
    let scale = geometry::scale_for_width(props.image.size(), width);
    scaled(props, Scale(scale))
}

/// A display variant chosen by data rather than by call site.
///
/// Deserializes from a map tagged by `fit`, e.g.
/// `{"fit": "square", "size": 64}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fit", rename_all = "snake_case")]
pub enum Sizing {
    /// [`fixed_size`]
    Cover { width: f64, height: f64 },
    /// [`fixed_contained`]
    Contain { width: f64, height: f64 },
    /// [`restrained`]
    Restrain {
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
    },
    /// [`shrink_to_fit`]
    Shrink {
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>,
    },
    /// [`scaled`]
    Scale {
        #[serde(default)]
        scale: Scale,
    },
    /// [`fixed_width`]
    Width { width: f64 },
    /// [`fixed_height`]
    Height { height: f64 },
    /// [`square`]
    Square { size: f64 },
    /// [`circular`]
    Circle { size: f64 },
    /// [`crop::cropped`]
    Crop {
        rectangle: Rect,
        #[serde(default)]
        scale: Scale,
    },
}

impl Default for Sizing {
    fn default() -> Self {
        Self::Scale {
            scale: Scale::ONE,
        }
    }
}

impl Sizing {
    /// Lay out `props` with this variant.
    pub fn layout<'a>(&self, props: ImageProps<'a>) -> Element<'a> {
        match *self {
            Self::Cover { width, height } => fixed_size(props, Size::new(width, height)),
            Self::Contain { width, height } => fixed_contained(props, Size::new(width, height)),
            Self::Restrain { width, height } => restrained(props, Target { width, height }),
            Self::Shrink { width, height } => shrink_to_fit(props, Target { width, height }),
            Self::Scale { scale } => scaled(props, scale),
            Self::Width { width } => fixed_width(props, width),
            Self::Height { height } => fixed_height(props, height),
            Self::Square { size } => square(props, size),
            Self::Circle { size } => circular(props, size),
            Self::Crop { rectangle, scale } => crop::cropped(props, rectangle, scale),
        }
    }
}
