//! Shared data contracts: the image file descriptor and the display props
//! every component accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DisplayError;
use crate::geometry::Size;

/// A bitmap's location and intrinsic pixel size.
///
/// Construction validates the dimensions, so every `ImageFile` in
/// circulation satisfies the scale functions' precondition.
///
/// ```
/// use zendisplay::ImageFile;
///
/// let image = ImageFile::new("a.jpg", 200.0, 100.0).unwrap();
/// assert_eq!(image.size().aspect_ratio(), 2.0);
/// assert!(ImageFile::new("b.jpg", 0.0, 100.0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawImageFile")]
pub struct ImageFile {
    source_url: String,
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RawImageFile {
    source_url: String,
    width: f64,
    height: f64,
}

impl TryFrom<RawImageFile> for ImageFile {
    type Error = DisplayError;

    fn try_from(raw: RawImageFile) -> Result<Self, Self::Error> {
        ImageFile::new(raw.source_url, raw.width, raw.height)
    }
}

impl ImageFile {
    /// Describe an image at `source_url` (remote URL or local path).
    pub fn new(
        source_url: impl Into<String>,
        width: f64,
        height: f64,
    ) -> Result<Self, DisplayError> {
        let size = Size::try_new(width, height)?;
        Ok(Self {
            source_url: source_url.into(),
            width: size.width,
            height: size.height,
        })
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Intrinsic size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// How the bitmap fills the element's box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Fill the box, cropping overflow. Preserves aspect ratio.
    #[default]
    Cover,
    /// Fit entirely inside the box, possibly leaving empty bars.
    Contain,
    /// Fill the box exactly, distorting aspect ratio.
    Stretch,
}

impl ResizeMode {
    /// Native image `resizeMode` value.
    pub fn as_native(&self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
            Self::Stretch => "stretch",
        }
    }

    /// CSS `object-fit` value.
    pub fn as_object_fit(&self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Contain => "contain",
            Self::Stretch => "fill",
        }
    }
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_native())
    }
}

/// Style overrides applied on top of whatever the adapters compute.
///
/// Declaration names may be given in either `kebab-case` or `camelCase`;
/// each adapter converts to its platform's convention.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the corner radius, replacing any free-form `border-radius`.
    pub fn border_radius(mut self, radius: f64) -> Self {
        self.set_radius(radius);
        self
    }

    /// Add a free-form declaration, replacing an earlier one with the same name.
    ///
    /// A pixel `border-radius` (`"3px"` or `"3"`) sets [`Style::border_radius`]
    /// instead. Adapters drop declarations for properties they compute
    /// (size, fit, corner radius).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name.into(), value.into());
        self
    }

    /// Compose two styles. Anything set in `over` wins.
    pub fn merge(mut self, over: &Style) -> Self {
        for (name, value) in &over.declarations {
            self.set(name.clone(), value.clone());
        }
        if let Some(radius) = over.border_radius {
            self.set_radius(radius);
        }
        self
    }

    /// Free-form declarations in insertion order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.border_radius.is_none() && self.declarations.is_empty()
    }

    fn set_radius(&mut self, radius: f64) {
        self.border_radius = Some(radius);
        self.declarations.retain(|(name, _)| camel_case(name) != RADIUS_KEY);
    }

    fn set(&mut self, name: String, value: String) {
        let key = camel_case(&name);
        if key == RADIUS_KEY
            && let Some(radius) = pixels(&value)
        {
            self.set_radius(radius);
            return;
        }
        match self
            .declarations
            .iter_mut()
            .find(|(existing, _)| camel_case(existing) == key)
        {
            Some(slot) => *slot = (name, value),
            None => self.declarations.push((name, value)),
        }
    }
}

const RADIUS_KEY: &str = "borderRadius";

/// Parse `"12px"` or `"12"` as a pixel length.
fn pixels(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value);
    number.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Props accepted by every display component.
///
/// Borrows the [`ImageFile`]; the caller owns it. Width and height, when
/// unset or non-positive, fall back to the intrinsic size.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageProps<'a> {
    pub image: &'a ImageFile,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub resize_mode: Option<ResizeMode>,
    /// Alt text on web, accessibility label on native.
    pub alt: Option<String>,
    pub style: Style,
    /// Web only. Native rendering ignores it.
    pub class_name: Option<String>,
}

impl<'a> ImageProps<'a> {
    pub fn new(image: &'a ImageFile) -> Self {
        Self {
            image,
            width: None,
            height: None,
            resize_mode: None,
            alt: None,
            style: Style::default(),
            class_name: None,
        }
    }

    /// Set both display dimensions.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn resize_mode(mut self, mode: ResizeMode) -> Self {
        self.resize_mode = Some(mode);
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Size the element occupies, after intrinsic fallback.
    pub fn display_size(&self) -> Size {
        let pick = |v: Option<f64>, intrinsic: f64| v.filter(|v| *v > 0.0).unwrap_or(intrinsic);
        Size::new(
            pick(self.width, self.image.width()),
            pick(self.height, self.image.height()),
        )
    }

    /// Effective fit mode. Unset means cover.
    pub fn fit(&self) -> ResizeMode {
        self.resize_mode.unwrap_or_default()
    }
}

/// `border-top-left-radius` → `borderTopLeftRadius`.
pub(crate) fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for ch in name.chars() {
        if ch == '-' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// `borderTopLeftRadius` → `border-top-left-radius`.
#[cfg_attr(not(feature = "web"), allow(dead_code))]
pub(crate) fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
