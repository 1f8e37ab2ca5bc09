//! Image display sizing, cropping, and cross-platform render descriptions.
//!
//! Pure computation: no pixel operations, no I/O. The platform image
//! primitive does the drawing; this crate decides the numbers it is given.
//!
//! # Modules
//!
//! - [`geometry`] — Sizes, rectangles, and aspect-preserving scale factors
//! - [`image`] — Image file descriptor and the shared display props
//! - [`sizes`] — Fixed, contained, restrained, scaled, square, and circular variants
//! - [`crop`] — Visual crop of a sub-rectangle via a clip box
//! - [`render`] — Native and web adapters behind one [`Renderer`] trait
//! - [`params`] — Display parameters from URL query strings
//!
//! # Example
//!
//! ```
//! use zendisplay::{ImageFile, ImageProps, Renderer, sizes};
//! use zendisplay::render::NativeRenderer;
//!
//! let image = ImageFile::new("a.jpg", 200.0, 100.0).unwrap();
//! let element = sizes::square(ImageProps::new(&image).alt("avatar"), 50.0);
//!
//! let node = NativeRenderer.render(&element);
//! let img = node.image().unwrap();
//! assert_eq!(img.style.width, Some(50.0));
//! assert_eq!(img.resize_mode, "cover");
//! ```

#![forbid(unsafe_code)]

pub mod crop;
pub mod element;
pub mod error;
pub mod geometry;
pub mod image;
#[cfg(feature = "params")]
pub mod params;
pub mod render;
pub mod sizes;

pub use element::{Clip, Element};
pub use error::DisplayError;
pub use geometry::{Offset, Rect, Size, Target};
pub use image::{ImageFile, ImageProps, ResizeMode, Style};
pub use render::Renderer;
pub use sizes::{Scale, Sizing};
