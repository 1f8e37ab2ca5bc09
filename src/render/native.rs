//! Native adapter: a serializable tree of image and view props.
//!
//! The output mirrors what a native image element expects: display size in
//! a style object, the intrinsic size as a separate source hint (some
//! engines need it for remote images), `resizeMode`, and an accessibility
//! label. It serializes to camelCase JSON for a UI bridge.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use super::Renderer;
use crate::geometry::{Offset, Size};
use crate::image::{ImageProps, camel_case};

/// Native render output.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum NativeNode {
    Image(NativeImage),
    View(NativeView),
}

impl NativeNode {
    /// The first image in this tree.
    pub fn image(&self) -> Option<&NativeImage> {
        match self {
            Self::Image(image) => Some(image),
            Self::View(view) => view.children.iter().find_map(NativeNode::image),
        }
    }
}

/// Props for a native image element.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeImage {
    pub source: ImageSource,
    pub style: NativeStyle,
    pub resize_mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_label: Option<String>,
}

/// Image location plus its intrinsic size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageSource {
    pub uri: String,
    pub width: f64,
    pub height: f64,
}

/// Props for a container view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NativeView {
    pub style: NativeStyle,
    pub children: Vec<NativeNode>,
}

/// Native style object. Unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub transform: Vec<Transform>,
    /// Caller declarations, keyed in camelCase.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// One entry of a native transform list.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform {
    TranslateX(f64),
    TranslateY(f64),
}

/// Style keys the adapter computes itself. Caller declarations with these
/// names are dropped.
const COMPUTED_KEYS: &[&str] = &[
    "borderRadius",
    "height",
    "objectFit",
    "overflow",
    "resizeMode",
    "transform",
    "width",
];

/// Renders into [`NativeNode`] trees.
#[derive(Copy, Clone, Debug, Default)]
pub struct NativeRenderer;

impl Renderer for NativeRenderer {
    type Output = NativeNode;

    fn render_image(&self, props: &ImageProps<'_>) -> NativeNode {
        let image = props.image;
        let shown = props.display_size();
        let resize_mode = props.fit().as_native();
        trace!(
            uri = image.source_url(),
            width = shown.width,
            height = shown.height,
            resize_mode,
            "native image"
        );
        if let Some(class_name) = &props.class_name {
            debug!(class_name = %class_name, "class name has no native equivalent, ignoring");
        }

        let extra = props
            .style
            .declarations()
            .map(|(name, value)| (camel_case(name), value.to_owned()))
            .filter(|(name, _)| !COMPUTED_KEYS.contains(&name.as_str()))
            .collect();
        let style = NativeStyle {
            width: Some(shown.width),
            height: Some(shown.height),
            border_radius: props.style.border_radius,
            extra,
            ..NativeStyle::default()
        };

        NativeNode::Image(NativeImage {
            source: ImageSource {
                uri: image.source_url().to_owned(),
                width: image.width(),
                height: image.height(),
            },
            style,
            resize_mode,
            accessibility_label: props.alt.clone(),
        })
    }

    fn render_clip(&self, frame: Size, offset: Offset, content: NativeNode) -> NativeNode {
        trace!(
            width = frame.width,
            height = frame.height,
            x = offset.x,
            y = offset.y,
            "native clip"
        );
        let shifted = NativeView {
            style: NativeStyle {
                transform: vec![
                    Transform::TranslateX(offset.x),
                    Transform::TranslateY(offset.y),
                ],
                ..NativeStyle::default()
            },
            children: vec![content],
        };
        NativeNode::View(NativeView {
            style: NativeStyle {
                width: Some(frame.width),
                height: Some(frame.height),
                overflow: Some("hidden"),
                ..NativeStyle::default()
            },
            children: vec![NativeNode::View(shifted)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::image::Style;
    use crate::sizes::{self, Scale};
    use crate::{ImageFile, crop};

    fn image() -> ImageFile {
        ImageFile::new("https://cdn.example/a.jpg", 200.0, 100.0).unwrap()
    }

    #[test]
    fn image_carries_source_hint_and_display_size() {
        let image = image();
        let node = NativeRenderer.render(&sizes::square(ImageProps::new(&image), 50.0));
        let NativeNode::Image(img) = node else {
            panic!("expected image");
        };
        assert_eq!(img.source.uri, "https://cdn.example/a.jpg");
        assert_eq!((img.source.width, img.source.height), (200.0, 100.0));
        assert_eq!((img.style.width, img.style.height), (Some(50.0), Some(50.0)));
        assert_eq!(img.resize_mode, "cover");
        assert_eq!(img.accessibility_label, None);
    }

    #[test]
    fn alt_becomes_accessibility_label() {
        let image = image();
        let props = ImageProps::new(&image).alt("sunset").class_name("ignored");
        let node = NativeRenderer.render_image(&props);
        assert_eq!(node.image().unwrap().accessibility_label.as_deref(), Some("sunset"));
    }

    #[test]
    fn unset_size_falls_back_to_intrinsic() {
        let image = image();
        let node = NativeRenderer.render_image(&ImageProps::new(&image).width(80.0));
        assert_eq!(node.image().unwrap().style.width, Some(80.0));
        assert_eq!(node.image().unwrap().style.height, Some(100.0));
    }

    #[test]
    fn computed_size_wins_over_caller_style() {
        let image = image();
        let style = Style::new()
            .with("width", "999")
            .with("object-fit", "none")
            .with("border-color", "red");
        let props = ImageProps::new(&image).style(style);
        let node = NativeRenderer.render(&sizes::square(props, 10.0));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["style"]["width"], 10.0);
        assert_eq!(json["style"]["borderColor"], "red");
        assert!(json["style"].get("objectFit").is_none());
    }

    #[test]
    fn circular_serializes_border_radius() {
        let image = image();
        let node = NativeRenderer.render(&sizes::circular(ImageProps::new(&image), 40.0));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "Image");
        assert_eq!(json["style"]["borderRadius"], 20.0);
        assert_eq!(json["resizeMode"], "cover");
        assert!(json.get("accessibilityLabel").is_none());
    }

    #[test]
    fn circular_radius_beats_caller_radius() {
        let image = image();
        let props = ImageProps::new(&image).style(Style::new().with("border-radius", "3px"));
        let node = NativeRenderer.render(&sizes::circular(props, 40.0));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["style"]["borderRadius"], 20.0);
        assert_eq!(json["style"].as_object().unwrap().len(), 3);
    }

    #[test]
    fn crop_nests_clip_view_translate_view_image() {
        let image = image();
        let el = crop::cropped(
            ImageProps::new(&image),
            Rect::new(10.0, 20.0, 30.0, 40.0),
            Scale(2.0),
        );
        let node = NativeRenderer.render(&el);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "View");
        assert_eq!(json["style"]["width"], 60.0);
        assert_eq!(json["style"]["height"], 80.0);
        assert_eq!(json["style"]["overflow"], "hidden");
        let inner = &json["children"][0];
        assert_eq!(inner["style"]["transform"][0]["translateX"], -20.0);
        assert_eq!(inner["style"]["transform"][1]["translateY"], -40.0);
        let img = node.image().unwrap();
        assert_eq!(img.style.width, Some(400.0));
        assert_eq!(img.style.height, Some(200.0));
    }
}
