// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Translatable UI strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Label {
    /// Previous-slide button.
    Previous,
    /// Next-slide button.
    Next,
    /// Close button.
    Close,
    /// Accessible name of the overlay.
    Lightbox,
    /// Accessible name of the carousel.
    Carousel,
    /// Accessible name of each slide; `{index}` and `{total}` are substituted.
    Slide,
}

impl Label {
    /// The label's built-in text.
    #[must_use]
    pub fn default_text(self) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::Next => "Next",
            Self::Close => "Close",
            Self::Lightbox => "Lightbox",
            Self::Carousel => "Carousel",
            Self::Slide => "{index} of {total}",
        }
    }
}

/// Custom UI labels, keyed by [`Label`].
///
/// ```
/// use loupe::{Label, Labels};
///
/// let labels = Labels::default().with(Label::Close, "Schließen");
/// assert_eq!(labels.translate(Label::Close), "Schließen");
/// assert_eq!(labels.translate(Label::Next), "Next");
/// assert_eq!(labels.slide_label(2, 5), "2 of 5");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Labels(BTreeMap<Label, String>);

impl Labels {
    /// Returns these labels with `label` overridden.
    #[must_use]
    pub fn with(mut self, label: Label, text: impl Into<String>) -> Self {
        self.0.insert(label, text.into());
        self
    }

    /// The custom text for `label`, or its built-in text.
    #[must_use]
    pub fn translate(&self, label: Label) -> &str {
        self.0
            .get(&label)
            .map_or_else(|| label.default_text(), String::as_str)
    }

    /// The accessible name of the slide at 1-based `index` of `total`.
    #[must_use]
    pub fn slide_label(&self, index: usize, total: usize) -> String {
        self.translate(Label::Slide)
            .replace("{index}", &index.to_string())
            .replace("{total}", &total.to_string())
    }
}
