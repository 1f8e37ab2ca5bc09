//! Platform-neutral render description.
//!
//! Sizing functions build an [`Element`]; a [`Renderer`](crate::render::Renderer)
//! turns it into platform output.

use crate::geometry::{Offset, Size};
use crate::image::ImageProps;

/// One render call's output, before a platform adapter sees it.
#[derive(Clone, Debug, PartialEq)]
pub enum Element<'a> {
    /// A single image element with fully resolved props.
    Image(ImageProps<'a>),
    /// A fixed-size box with hidden overflow around translated content.
    Clip(Clip<'a>),
}

/// Visible window onto a larger element.
#[derive(Clone, Debug, PartialEq)]
pub struct Clip<'a> {
    /// Size of the visible box.
    pub frame: Size,
    /// Translation applied to `content` inside the box.
    pub offset: Offset,
    pub content: Box<Element<'a>>,
}

impl<'a> Element<'a> {
    /// Footprint of the element in its parent's layout.
    pub fn footprint(&self) -> Size {
        match self {
            Self::Image(props) => props.display_size(),
            Self::Clip(clip) => clip.frame,
        }
    }

    /// The image leaf at the bottom of this element.
    pub fn image(&self) -> &ImageProps<'a> {
        match self {
            Self::Image(props) => props,
            Self::Clip(clip) => clip.content.image(),
        }
    }
}

impl<'a> From<ImageProps<'a>> for Element<'a> {
    fn from(props: ImageProps<'a>) -> Self {
        Self::Image(props)
    }
}
