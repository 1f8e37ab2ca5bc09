//! Display parameters from a URL query string.
//!
//! Parses strings like `?fit=square&size=64&alt=Avatar` into
//! [`DisplayParams`], then picks the [`Sizing`] variant they describe.
//! Problems that don't stop parsing are collected as warnings.
//!
//! # Example
//!
//! ```
//! use zendisplay::{ImageFile, params};
//! use zendisplay::sizes::Sizing;
//!
//! let result = params::parse("fit=crop&crop=10,20,30,40&scale=2&alt=detail");
//! assert!(result.warnings.is_empty());
//!
//! let sizing = result.params.to_sizing().unwrap();
//! assert!(matches!(sizing, Sizing::Crop { .. }));
//!
//! let image = ImageFile::new("a.jpg", 100.0, 100.0).unwrap();
//! let element = result.params.layout(&image).unwrap();
//! assert_eq!(element.footprint().width, 60.0);
//! ```
//!
//! # Keys
//!
//! | Key | Value |
//! |---|---|
//! | `w`, `width` | positive number |
//! | `h`, `height` | positive number |
//! | `size` | positive number (square and circle) |
//! | `scale` | positive number, optional `x` suffix |
//! | `fit`, `mode` | `cover` `contain` `restrain` `shrink` `scale` `width` `height` `square` `circle` `crop` |
//! | `crop` | `x,y,width,height`, parentheses allowed |
//! | `alt` | text |
//! | `class` | text |
//!
//! Without `fit`, the variant is inferred: `crop` → crop, `size` → square,
//! `w`/`h` → restrain, otherwise scale.

use tracing::debug;

use crate::element::Element;
use crate::error::DisplayError;
use crate::geometry::Rect;
use crate::image::{ImageFile, ImageProps};
use crate::sizes::{Scale, Sizing};

/// Which sizing variant was asked for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FitKind {
    Cover,
    Contain,
    Restrain,
    Shrink,
    Scale,
    Width,
    Height,
    Square,
    Circle,
    Crop,
}

/// Parsed display parameters. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayParams {
    pub fit: Option<FitKind>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub size: Option<f64>,
    pub scale: Option<f64>,
    pub crop: Option<Rect>,
    pub alt: Option<String>,
    pub class_name: Option<String>,
}

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub params: DisplayParams,
    /// Non-fatal warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// The key is not a display parameter.
    KeyNotRecognized { key: String, value: String },
    /// The key is known but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without a leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let mut params = DisplayParams::default();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);
        dispatch_key(&key, &value, &mut params, &mut warnings);
    }

    for warning in &warnings {
        debug!(?warning, "display parameter warning");
    }
    ParseResult { params, warnings }
}

impl DisplayParams {
    /// Choose the sizing variant these parameters describe.
    pub fn to_sizing(&self) -> Result<Sizing, DisplayError> {
        let scale = match self.scale {
            Some(s) => Scale::new(s)?,
            None => Scale::ONE,
        };
        let fit = self.fit.unwrap_or_else(|| self.inferred_fit());
        let width = || self.width.ok_or(DisplayError::MissingParameter("w"));
        let height = || self.height.ok_or(DisplayError::MissingParameter("h"));
        let size = || self.size.ok_or(DisplayError::MissingParameter("size"));

        Ok(match fit {
            FitKind::Cover => Sizing::Cover {
                width: width()?,
                height: height()?,
            },
            FitKind::Contain => Sizing::Contain {
                width: width()?,
                height: height()?,
            },
            FitKind::Restrain => Sizing::Restrain {
                width: self.width,
                height: self.height,
            },
            FitKind::Shrink => Sizing::Shrink {
                width: self.width,
                height: self.height,
            },
            FitKind::Scale => Sizing::Scale { scale },
            FitKind::Width => Sizing::Width { width: width()? },
            FitKind::Height => Sizing::Height { height: height()? },
            FitKind::Square => Sizing::Square { size: size()? },
            FitKind::Circle => Sizing::Circle { size: size()? },
            FitKind::Crop => Sizing::Crop {
                rectangle: self.crop.ok_or(DisplayError::MissingParameter("crop"))?,
                scale,
            },
        })
    }

    /// Copy `alt` and `class` onto props.
    pub fn apply<'a>(&self, mut props: ImageProps<'a>) -> ImageProps<'a> {
        if let Some(alt) = &self.alt {
            props.alt = Some(alt.clone());
        }
        if let Some(class_name) = &self.class_name {
            props.class_name = Some(class_name.clone());
        }
        props
    }

    /// Lay out `image` with these parameters.
    pub fn layout<'a>(&self, image: &'a ImageFile) -> Result<Element<'a>, DisplayError> {
        let sizing = self.to_sizing()?;
        Ok(sizing.layout(self.apply(ImageProps::new(image))))
    }

    fn inferred_fit(&self) -> FitKind {
        if self.crop.is_some() {
            FitKind::Crop
        } else if self.size.is_some() {
            FitKind::Square
        } else if self.width.is_some() || self.height.is_some() {
            FitKind::Restrain
        } else {
            FitKind::Scale
        }
    }
}

fn dispatch_key(
    key: &str,
    value: &str,
    params: &mut DisplayParams,
    warnings: &mut Vec<ParseWarning>,
) {
    match key {
        "w" | "width" => number(&mut params.width, "w", key, value, warnings),
        "h" | "height" => number(&mut params.height, "h", key, value, warnings),
        "size" => number(&mut params.size, "size", key, value, warnings),
        "scale" => match parse_scale(value) {
            Some(s) => set_or_warn(&mut params.scale, s, key, value, warnings),
            None => invalid("scale", value, "expected a positive number", warnings),
        },
        "fit" | "mode" => match parse_fit(value) {
            Some(f) => set_or_warn(&mut params.fit, f, key, value, warnings),
            None => invalid(
                "fit",
                value,
                "expected cover|contain|restrain|shrink|scale|width|height|square|circle|crop",
                warnings,
            ),
        },
        "crop" => match parse_rect(value) {
            Some(r) => set_or_warn(&mut params.crop, r, key, value, warnings),
            None => invalid("crop", value, "expected x,y,width,height", warnings),
        },
        "alt" => set_or_warn(&mut params.alt, String::from(value), key, value, warnings),
        "class" | "classname" => {
            set_or_warn(&mut params.class_name, String::from(value), key, value, warnings);
        }
        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

fn number(
    field: &mut Option<f64>,
    name: &'static str,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    match parse_positive(value) {
        Some(v) => set_or_warn(field, v, key, value, warnings),
        None => invalid(name, value, "expected a positive number", warnings),
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: T,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if field.is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key: String::from(key),
            value: String::from(value),
        });
    }
    *field = Some(parsed);
}

fn invalid(key: &'static str, value: &str, reason: &'static str, warnings: &mut Vec<ParseWarning>) {
    warnings.push(ParseWarning::ValueInvalid {
        key,
        value: String::from(value),
        reason,
    });
}

// ---- Value parsers ----

fn parse_positive(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Scale value, allowing a trailing `x` ("2x").
fn parse_scale(s: &str) -> Option<f64> {
    parse_positive(s.trim().trim_end_matches(['x', 'X']))
}

fn parse_fit(s: &str) -> Option<FitKind> {
    match s.trim().to_ascii_lowercase().as_str() {
        "cover" | "fixed" => Some(FitKind::Cover),
        "contain" => Some(FitKind::Contain),
        "restrain" | "max" => Some(FitKind::Restrain),
        "shrink" | "within" => Some(FitKind::Shrink),
        "scale" => Some(FitKind::Scale),
        "width" => Some(FitKind::Width),
        "height" => Some(FitKind::Height),
        "square" => Some(FitKind::Square),
        "circle" | "circular" => Some(FitKind::Circle),
        "crop" => Some(FitKind::Crop),
        _ => None,
    }
}

/// `x,y,width,height`, optionally wrapped in parentheses. Negative values
/// and zero-area rectangles are rejected.
fn parse_rect(s: &str) -> Option<Rect> {
    let s = s.trim().trim_start_matches('(').trim_end_matches(')');
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().ok())
        .collect::<Option<_>>()?;
    let &[x, y, width, height] = parts.as_slice() else {
        return None;
    };
    let valid = [x, y, width, height]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
        && width > 0.0
        && height > 0.0;
    valid.then(|| Rect::new(x, y, width, height))
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn parse_dimensions_and_fit() {
        let r = parse("?w=300&h=200&fit=contain");
        assert!(r.warnings.is_empty());
        assert_eq!(r.params.width, Some(300.0));
        assert_eq!(r.params.height, Some(200.0));
        assert_eq!(
            r.params.to_sizing().unwrap(),
            Sizing::Contain {
                width: 300.0,
                height: 200.0
            }
        );
    }

    #[test]
    fn aliases_and_case() {
        let r = parse("WIDTH=10&Height=20&Mode=COVER");
        assert!(r.warnings.is_empty());
        assert_eq!(r.params.fit, Some(FitKind::Cover));
        assert_eq!(r.params.width, Some(10.0));
        assert_eq!(r.params.height, Some(20.0));
    }

    #[test]
    fn infer_square_from_size() {
        let r = parse("size=64");
        assert_eq!(r.params.to_sizing().unwrap(), Sizing::Square { size: 64.0 });
    }

    #[test]
    fn infer_restrain_from_single_side() {
        let r = parse("w=120");
        assert_eq!(
            r.params.to_sizing().unwrap(),
            Sizing::Restrain {
                width: Some(120.0),
                height: None
            }
        );
    }

    #[test]
    fn infer_identity_scale_from_nothing() {
        let r = parse("");
        assert!(r.warnings.is_empty());
        assert_eq!(r.params.to_sizing().unwrap(), Sizing::Scale { scale: Scale::ONE });
    }

    #[test]
    fn scale_with_suffix() {
        let r = parse("scale=2x");
        assert_eq!(r.params.scale, Some(2.0));
        assert_eq!(r.params.to_sizing().unwrap(), Sizing::Scale { scale: Scale(2.0) });
    }

    #[test]
    fn crop_with_parens() {
        let r = parse("crop=(10,20,30,40)");
        assert_eq!(r.params.crop, Some(Rect::new(10.0, 20.0, 30.0, 40.0)));
        assert!(matches!(r.params.to_sizing().unwrap(), Sizing::Crop { .. }));
    }

    #[test]
    fn crop_rejects_bad_values() {
        for bad in ["1,2,3", "1,2,3,4,5", "a,b,c,d", "-1,0,10,10", "0,0,0,10"] {
            let r = parse(&format!("crop={bad}"));
            assert!(r.params.crop.is_none(), "{bad}");
            assert!(
                matches!(r.warnings[0], ParseWarning::ValueInvalid { key: "crop", .. }),
                "{bad}"
            );
        }
    }

    #[test]
    fn negative_and_zero_numbers_warn() {
        let r = parse("w=-5&h=0&scale=0");
        assert_eq!(r.params, DisplayParams::default());
        assert_eq!(r.warnings.len(), 3);
    }

    #[test]
    fn unknown_fit_warns() {
        let r = parse("fit=zoom");
        assert_eq!(
            r.warnings,
            vec![ParseWarning::ValueInvalid {
                key: "fit",
                value: String::from("zoom"),
                reason: "expected cover|contain|restrain|shrink|scale|width|height|square|circle|crop",
            }]
        );
    }

    #[test]
    fn unknown_key_warns() {
        let r = parse("quality=90");
        assert_eq!(
            r.warnings,
            vec![ParseWarning::KeyNotRecognized {
                key: String::from("quality"),
                value: String::from("90"),
            }]
        );
    }

    #[test]
    fn duplicate_key_warns_last_wins() {
        let r = parse("w=10&width=20");
        assert_eq!(r.params.width, Some(20.0));
        assert_eq!(
            r.warnings,
            vec![ParseWarning::DuplicateKey {
                key: String::from("width"),
                value: String::from("20"),
            }]
        );
    }

    #[test]
    fn missing_required_value_errors() {
        let r = parse("fit=cover&w=10");
        assert_eq!(r.params.to_sizing(), Err(DisplayError::MissingParameter("h")));
        let r = parse("fit=circle");
        assert_eq!(r.params.to_sizing(), Err(DisplayError::MissingParameter("size")));
        let r = parse("fit=crop");
        assert_eq!(r.params.to_sizing(), Err(DisplayError::MissingParameter("crop")));
    }

    #[test]
    fn percent_decoding() {
        let r = parse("alt=A%20red+fox%21&class=thumb%2Fbig");
        assert_eq!(r.params.alt.as_deref(), Some("A red fox!"));
        assert_eq!(r.params.class_name.as_deref(), Some("thumb/big"));
        assert_eq!(percent_decode("caf%C3%A9"), "café");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    fn layout_applies_alt_and_class() {
        let image = ImageFile::new("a.jpg", 200.0, 100.0).unwrap();
        let r = parse("fit=circle&size=40&alt=me&class=avatar");
        let el = r.params.layout(&image).unwrap();
        assert_eq!(el.footprint(), Size::square(40.0));
        let props = el.image();
        assert_eq!(props.alt.as_deref(), Some("me"));
        assert_eq!(props.class_name.as_deref(), Some("avatar"));
        assert_eq!(props.style.border_radius, Some(20.0));
    }
}
