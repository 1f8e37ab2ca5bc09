//! Web adapter: HTML markup via [maud](https://maud.lambda.xyz/).
//!
//! Width and height go out as `<img>` attributes, the resize mode as CSS
//! `object-fit`, and `alt` as-is (empty when unset). Caller declarations
//! follow `object-fit` in the inline style, minus any that would override a
//! computed property.

use std::fmt::Write;

use maud::{Markup, html};
use tracing::trace;

use super::Renderer;
use crate::geometry::{Offset, Size};
use crate::image::{ImageProps, Style, kebab_case};

/// Renders into HTML [`Markup`].
#[derive(Copy, Clone, Debug, Default)]
pub struct WebRenderer;

impl Renderer for WebRenderer {
    type Output = Markup;

    fn render_image(&self, props: &ImageProps<'_>) -> Markup {
        let shown = props.display_size();
        let object_fit = props.fit().as_object_fit();
        trace!(
            src = props.image.source_url(),
            width = shown.width,
            height = shown.height,
            object_fit,
            "web image"
        );

        let mut style = format!("object-fit:{object_fit}");
        push_style(&mut style, &props.style);
        let alt = props.alt.as_deref().unwrap_or_default();

        html! {
            img src=(props.image.source_url())
                style=(style)
                width=(shown.width.to_string())
                height=(shown.height.to_string())
                alt=(alt)
                class=[props.class_name.as_deref()];
        }
    }

    fn render_clip(&self, frame: Size, offset: Offset, content: Markup) -> Markup {
        trace!(
            width = frame.width,
            height = frame.height,
            x = offset.x,
            y = offset.y,
            "web clip"
        );
        let outer = format!(
            "width:{}px;height:{}px;overflow:hidden",
            frame.width, frame.height
        );
        let inner = format!("transform:translate({}px,{}px)", offset.x, offset.y);
        html! {
            div style=(outer) {
                div style=(inner) { (content) }
            }
        }
    }
}

/// CSS properties the adapter computes itself. Caller declarations with
/// these names are dropped.
const COMPUTED_PROPERTIES: &[&str] = &["border-radius", "height", "object-fit", "width"];

/// Append `style` to an inline CSS string.
fn push_style(css: &mut String, style: &Style) {
    if let Some(radius) = style.border_radius {
        write!(css, ";border-radius:{radius}px").ok();
    }
    for (name, value) in style.declarations() {
        let property = kebab_case(name);
        if COMPUTED_PROPERTIES.contains(&property.as_str()) {
            continue;
        }
        write!(css, ";{property}:{value}").ok();
    }
}
