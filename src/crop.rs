//! Visually crop an image to a sub-rectangle.
//!
//! No pixels are cut. The full image is laid out at `scale`, shifted so the
//! rectangle's corner sits at the origin, and wrapped in a clip box the size
//! of the scaled rectangle. The one `scale` value drives the frame, the
//! offset, and the content; if any of them drifted the visible window would
//! no longer match the rectangle.
//!
//! # Example
//!
//! ```
//! use zendisplay::{Element, ImageFile, ImageProps, Rect, Scale, crop};
//! use zendisplay::geometry::{Offset, Size};
//!
//! let image = ImageFile::new("a.jpg", 100.0, 100.0).unwrap();
//! let el = crop::cropped(
//!     ImageProps::new(&image),
//!     Rect::new(10.0, 20.0, 30.0, 40.0),
//!     Scale(2.0),
//! );
//!
//! let Element::Clip(clip) = el else { unreachable!() };
//! assert_eq!(clip.frame, Size::new(60.0, 80.0));
//! assert_eq!(clip.offset, Offset::new(-20.0, -40.0));
//! assert_eq!(clip.content.footprint(), Size::new(200.0, 200.0));
//! ```

use crate::element::{Clip, Element};
use crate::error::DisplayError;
use crate::geometry::Rect;
use crate::image::ImageProps;
use crate::sizes::{self, Scale};

/// Show only `rectangle` of the image, displayed at `scale`.
///
/// The rectangle is in the image's intrinsic coordinates and is assumed to
/// lie inside it. Use [`try_cropped`] to check that first.
pub fn cropped(props: ImageProps<'_>, rectangle: Rect, scale: Scale) -> Element<'_> {
    let factor = scale.get();
    let frame = rectangle.size().scale(factor);
    let offset = rectangle.origin().scale(factor).negate();
    let content = sizes::scaled(props, scale);
    Element::Clip(Clip {
        frame,
        offset,
        content: Box::new(content),
    })
}

/// [`cropped`], after checking the rectangle lies inside the image and the
/// scale is positive and finite.
pub fn try_cropped(
    props: ImageProps<'_>,
    rectangle: Rect,
    scale: Scale,
) -> Result<Element<'_>, DisplayError> {
    let scale = Scale::new(scale.get())?;
    let image = props.image.size();
    if !rectangle.contained_in(image) {
        return Err(DisplayError::RectangleOutOfBounds {
            rect: rectangle,
            image,
        });
    }
    Ok(cropped(props, rectangle, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageFile;
    use crate::geometry::{Offset, Size};
    use crate::image::ResizeMode;

    fn clip<'a>(element: Element<'a>) -> Clip<'a> {
        match element {
            Element::Clip(clip) => clip,
            Element::Image(_) => panic!("expected a clip"),
        }
    }

    #[test]
    fn crop_frame_offset_and_content_share_scale() {
        let image = ImageFile::new("a.jpg", 100.0, 100.0).unwrap();
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        let c = clip(cropped(ImageProps::new(&image), rect, Scale(2.0)));
        assert_eq!(c.frame, Size::new(60.0, 80.0));
        assert_eq!(c.offset, Offset::new(-20.0, -40.0));
        assert_eq!(c.content.footprint(), Size::new(200.0, 200.0));
        assert_eq!(c.content.image().fit(), ResizeMode::Cover);
    }

    #[test]
    fn default_scale_is_intrinsic() {
        let image = ImageFile::new("a.jpg", 640.0, 480.0).unwrap();
        let rect = Rect::new(100.0, 50.0, 200.0, 100.0);
        let c = clip(cropped(ImageProps::new(&image), rect, Scale::default()));
        assert_eq!(c.frame, Size::new(200.0, 100.0));
        assert_eq!(c.offset, Offset::new(-100.0, -50.0));
        assert_eq!(c.content.footprint(), Size::new(640.0, 480.0));
    }

    #[test]
    fn origin_rect_has_no_offset() {
        let image = ImageFile::new("a.jpg", 50.0, 50.0).unwrap();
        let c = clip(cropped(
            ImageProps::new(&image),
            Rect::new(0.0, 0.0, 25.0, 25.0),
            Scale(0.5),
        ));
        assert!(c.offset.x == 0.0 && c.offset.y == 0.0);
        assert_eq!(c.frame, Size::new(12.5, 12.5));
    }

    #[test]
    fn visible_window_maps_back_to_rectangle() {
        let image = ImageFile::new("a.jpg", 300.0, 200.0).unwrap();
        let rect = Rect::new(40.0, 60.0, 120.0, 80.0);
        let scale = 1.75;
        let c = clip(cropped(ImageProps::new(&image), rect, Scale(scale)));
        // Frame corners, shifted back by the offset and unscaled, land on the rect.
        let left = (0.0 - c.offset.x) / scale;
        let top = (0.0 - c.offset.y) / scale;
        let right = (c.frame.width - c.offset.x) / scale;
        let bottom = (c.frame.height - c.offset.y) / scale;
        assert!((left - rect.x).abs() < 1e-9);
        assert!((top - rect.y).abs() < 1e-9);
        assert!((right - (rect.x + rect.width)).abs() < 1e-9);
        assert!((bottom - (rect.y + rect.height)).abs() < 1e-9);
    }

    #[test]
    fn try_cropped_rejects_out_of_bounds() {
        let image = ImageFile::new("a.jpg", 100.0, 100.0).unwrap();
        let rect = Rect::new(80.0, 0.0, 30.0, 10.0);
        let err = try_cropped(ImageProps::new(&image), rect, Scale::ONE).unwrap_err();
        assert_eq!(
            err,
            DisplayError::RectangleOutOfBounds {
                rect,
                image: Size::new(100.0, 100.0)
            }
        );
    }

    #[test]
    fn try_cropped_rejects_bad_scale() {
        let image = ImageFile::new("a.jpg", 100.0, 100.0).unwrap();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let err = try_cropped(ImageProps::new(&image), rect, Scale(-1.0)).unwrap_err();
        assert_eq!(err, DisplayError::InvalidScale(-1.0));
        assert!(try_cropped(ImageProps::new(&image), rect, Scale(3.0)).is_ok());
    }
}
