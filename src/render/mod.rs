//! Platform adapters.
//!
//! A [`Renderer`] is the only code that touches the platform image primitive.
//! Both adapters accept the same [`Element`] tree; `class_name` is the one
//! prop only the web adapter honors.
//!
//! [`PlatformRenderer`] picks the adapter for the compile target: web on
//! `wasm32`, native everywhere else.

#[cfg(feature = "native")]
pub mod native;
#[cfg(feature = "web")]
pub mod web;

use crate::element::Element;
use crate::geometry::{Offset, Size};
use crate::image::ImageProps;

#[cfg(feature = "native")]
pub use native::{ImageSource, NativeImage, NativeNode, NativeRenderer, NativeStyle, NativeView};
#[cfg(feature = "web")]
pub use web::WebRenderer;

/// Turns a render description into platform output.
pub trait Renderer {
    type Output;

    /// Render one image element.
    fn render_image(&self, props: &ImageProps<'_>) -> Self::Output;

    /// Wrap already-rendered `content` in a `frame`-sized box with hidden
    /// overflow, translating the content by `offset`.
    fn render_clip(&self, frame: Size, offset: Offset, content: Self::Output) -> Self::Output;

    /// Render a whole element tree.
    fn render(&self, element: &Element<'_>) -> Self::Output {
        match element {
            Element::Image(props) => self.render_image(props),
            Element::Clip(clip) => {
                let content = self.render(&clip.content);
                self.render_clip(clip.frame, clip.offset, content)
            }
        }
    }
}

/// Adapter for the compile target.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformRenderer = WebRenderer;

/// Adapter for the compile target.
#[cfg(all(not(target_arch = "wasm32"), feature = "native"))]
pub type PlatformRenderer = NativeRenderer;
