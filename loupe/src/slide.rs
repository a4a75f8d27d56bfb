// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide data.
//!
//! Slides decode from the same JSON shape galleries usually ship with:
//!
//! ```json
//! { "src": "/a.jpg", "width": 1600, "height": 900, "alt": "Harbour",
//!   "srcSet": [{ "src": "/a-800.jpg", "width": 800, "height": 450 }] }
//! ```
//!
//! A missing or `"image"` `type` yields [`Slide::Image`]; any other `type`
//! yields [`Slide::Custom`] with the remaining fields kept verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SlideError;

/// One candidate in an image's source set.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSource {
    /// Image URL.
    pub src: String,
    /// Intrinsic width in pixels.
    pub width: f64,
    /// Intrinsic height in pixels.
    pub height: f64,
}

/// An image slide.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageSlide {
    /// Image URL.
    pub src: String,
    /// Intrinsic width in pixels.
    pub width: Option<f64>,
    /// Intrinsic height in pixels.
    pub height: Option<f64>,
    /// Alternative text.
    pub alt: Option<String>,
    /// Responsive candidates, in any order.
    pub src_set: Vec<ImageSource>,
    /// Stable identity across slide list updates.
    pub key: Option<String>,
}

impl ImageSlide {
    /// An image slide with only a URL.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    /// Returns this slide with intrinsic dimensions.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// A slide of a host-defined type, rendered by the host.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomSlide {
    /// The slide's `type` tag.
    pub kind: String,
    /// Stable identity across slide list updates.
    pub key: Option<String>,
    /// Every other field of the slide.
    pub fields: Map<String, Value>,
}

/// One displayable unit of the carousel.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum Slide {
    /// An image.
    Image(ImageSlide),
    /// A host-rendered slide.
    Custom(CustomSlide),
}

impl From<ImageSlide> for Slide {
    fn from(slide: ImageSlide) -> Self {
        Self::Image(slide)
    }
}

impl From<CustomSlide> for Slide {
    fn from(slide: CustomSlide) -> Self {
        Self::Custom(slide)
    }
}

impl Slide {
    /// Decodes a slide from a JSON value.
    pub fn from_json(value: &Value) -> Result<Self, SlideError> {
        let object = value.as_object().ok_or(SlideError::NotAnObject)?;
        let key = key_field(object)?;
        let kind = optional_str(object, "type")?;

        match kind.as_deref() {
            None | Some("image") => {
                let src = optional_str(object, "src")?.ok_or(SlideError::MissingSrc)?;
                Ok(Self::Image(ImageSlide {
                    src,
                    width: optional_f64(object, "width")?,
                    height: optional_f64(object, "height")?,
                    alt: optional_str(object, "alt")?,
                    src_set: src_set(object)?,
                    key,
                }))
            }
            Some(kind) => {
                let mut fields = object.clone();
                fields.remove("type");
                fields.remove("key");
                Ok(Self::Custom(CustomSlide {
                    kind: kind.to_owned(),
                    key,
                    fields,
                }))
            }
        }
    }

    /// Decodes a JSON array of slides.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The slide's `type` tag: `"image"` for images.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Image(_) => "image",
            Self::Custom(custom) => &custom.kind,
        }
    }

    /// Returns the image slide, if this is one.
    #[must_use]
    pub fn as_image(&self) -> Option<&ImageSlide> {
        match self {
            Self::Image(image) => Some(image),
            Self::Custom(_) => None,
        }
    }

    /// The explicit key, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Image(image) => image.key.as_deref(),
            Self::Custom(custom) => custom.key.as_deref(),
        }
    }

    /// The key to mount this slide under at `index`: the explicit key, or one
    /// derived from the index and the image URL (custom slides use their kind).
    #[must_use]
    pub fn key_for(&self, index: usize) -> String {
        match (self.key(), self) {
            (Some(key), _) => key.to_owned(),
            (None, Self::Image(image)) => format!("{index}-{}", image.src),
            (None, Self::Custom(custom)) => format!("{index}-{}", custom.kind),
        }
    }
}

impl TryFrom<Value> for Slide {
    type Error = SlideError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}

impl From<Slide> for Value {
    fn from(slide: Slide) -> Self {
        let mut object = Map::new();
        match slide {
            Slide::Image(image) => {
                object.insert("src".into(), image.src.into());
                if let Some(width) = image.width {
                    object.insert("width".into(), width.into());
                }
                if let Some(height) = image.height {
                    object.insert("height".into(), height.into());
                }
                if let Some(alt) = image.alt {
                    object.insert("alt".into(), alt.into());
                }
                if !image.src_set.is_empty() {
                    let sources = image
                        .src_set
                        .into_iter()
                        .map(|source| {
                            let mut entry = Map::new();
                            entry.insert("src".into(), source.src.into());
                            entry.insert("width".into(), source.width.into());
                            entry.insert("height".into(), source.height.into());
                            Self::Object(entry)
                        })
                        .collect();
                    object.insert("srcSet".into(), Self::Array(sources));
                }
                if let Some(key) = image.key {
                    object.insert("key".into(), key.into());
                }
            }
            Slide::Custom(custom) => {
                object = custom.fields;
                object.insert("type".into(), custom.kind.into());
                if let Some(key) = custom.key {
                    object.insert("key".into(), key.into());
                }
            }
        }
        Self::Object(object)
    }
}

fn invalid(field: impl Into<String>, expected: &'static str) -> SlideError {
    SlideError::InvalidField {
        field: field.into(),
        expected,
    }
}

fn optional_str(object: &Map<String, Value>, field: &str) -> Result<Option<String>, SlideError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(invalid(field, "a string")),
    }
}

fn optional_f64(object: &Map<String, Value>, field: &str) -> Result<Option<f64>, SlideError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| invalid(field, "a number")),
    }
}

fn key_field(object: &Map<String, Value>) -> Result<Option<String>, SlideError> {
    match object.get("key") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(key)) => Ok(Some(key.clone())),
        Some(Value::Number(key)) => Ok(Some(key.to_string())),
        Some(_) => Err(invalid("key", "a string or a number")),
    }
}

fn src_set(object: &Map<String, Value>) -> Result<Vec<ImageSource>, SlideError> {
    let entries = match object.get("srcSet") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(invalid("srcSet", "an array")),
    };
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let entry = entry
                .as_object()
                .ok_or_else(|| invalid(format!("srcSet[{i}]"), "an object"))?;
            let src = match entry.get("src") {
                Some(Value::String(src)) => src.clone(),
                _ => return Err(invalid(format!("srcSet[{i}].src"), "a string")),
            };
            let dimension = |name: &str| {
                entry
                    .get(name)
                    .and_then(Value::as_f64)
                    .ok_or_else(|| invalid(format!("srcSet[{i}].{name}"), "a number"))
            };
            Ok(ImageSource {
                src,
                width: dimension("width")?,
                height: dimension("height")?,
            })
        })
        .collect()
}
