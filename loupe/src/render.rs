// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render model.
//!
//! [`Lightbox::view`](crate::Lightbox::view) describes the whole overlay as
//! plain data: the element attributes it wants and, where the host supplied
//! them through [`Render`], host nodes. The host maps the description onto its
//! own element tree.

use kurbo::Size;
use loupe_overlay::OverlayView;
use loupe_zoom::ZoomState;

use crate::image::ImageView;
use crate::settings::Style;
use crate::slide::Slide;

/// What a slide render function knows about its slide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderSlideProps<'a> {
    /// The slide.
    pub slide: &'a Slide,
    /// Index of the slide in the slide list.
    pub slide_index: usize,
    /// Size of the carousel box.
    pub rect: Size,
    /// Zoom level; always `1.0` for slides other than the current one.
    pub zoom: f64,
    /// Whether the slide is the current one.
    pub current: bool,
}

/// Host-supplied content.
///
/// Every method is optional. Returning `None` from [`Render::slide`] falls
/// back to the built-in image slide, which renders nothing for custom slide
/// types.
pub trait Render {
    /// The host's node type.
    type Node;

    /// Renders a slide body: a custom slide type, or a replacement for the
    /// built-in image slide.
    fn slide(&self, _props: &RenderSlideProps<'_>) -> Option<Self::Node> {
        None
    }

    /// Renders content above a slide body.
    fn slide_header(&self, _props: &RenderSlideProps<'_>) -> Option<Self::Node> {
        None
    }

    /// Renders content below or over a slide body.
    fn slide_footer(&self, _props: &RenderSlideProps<'_>) -> Option<Self::Node> {
        None
    }

    /// Renders extra controls, positioned by the host.
    fn controls(&self) -> Option<Self::Node> {
        None
    }

    /// Renders extra toolbar buttons, placed before the close button.
    fn toolbar_buttons(&self) -> Vec<Self::Node> {
        Vec::new()
    }

    /// Replaces the previous-slide icon.
    fn icon_prev(&self) -> Option<Self::Node> {
        None
    }

    /// Replaces the next-slide icon.
    fn icon_next(&self) -> Option<Self::Node> {
        None
    }

    /// Replaces the close icon.
    fn icon_close(&self) -> Option<Self::Node> {
        None
    }
}

/// A [`Render`] that supplies nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoRender;

impl Render for NoRender {
    type Node = ();
}

/// The whole lightbox, while mounted.
#[derive(Clone, Debug, PartialEq)]
pub struct LightboxView<N> {
    /// Overlay container attributes.
    pub overlay: OverlayView,
    /// Accessible name of the overlay.
    pub aria_label: String,
    /// Inline style of the overlay container.
    pub style: Style,
    /// The toolbar.
    pub toolbar: ToolbarView<N>,
    /// The carousel.
    pub carousel: CarouselView<N>,
    /// Previous-slide button, present with more than one slide.
    pub prev: Option<ButtonView<N>>,
    /// Next-slide button, present with more than one slide.
    pub next: Option<ButtonView<N>>,
    /// Host controls.
    pub controls: Option<N>,
}

/// The toolbar.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolbarView<N> {
    /// `loupe__toolbar`, plus `loupe__toolbar_fixed` when fixed.
    pub class_name: String,
    /// Inline style.
    pub style: Style,
    /// Host buttons.
    pub buttons: Vec<N>,
    /// The close button, always last.
    pub close: ButtonView<N>,
}

/// The carousel box.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselView<N> {
    /// Always `loupe__carousel`.
    pub class_name: String,
    /// Inline style.
    pub style: Style,
    /// Accessible name.
    pub aria_label: String,
    /// Mounted slides in window order. Empty until the carousel box has been
    /// measured.
    pub slides: Vec<SlideView<N>>,
}

/// One mounted slide.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideView<N> {
    /// Stable identity for the host's reconciliation.
    pub key: String,
    /// Index of the slide in the slide list.
    pub slide_index: usize,
    /// Position relative to the current slide.
    pub offset: isize,
    /// Always `"group"`.
    pub role: &'static str,
    /// Always `"slide"`.
    pub aria_roledescription: &'static str,
    /// Accessible name, such as `"2 of 5"`.
    pub aria_label: String,
    /// Always `loupe__slide`.
    pub class_name: String,
    /// `true` for every slide but the current one.
    pub hidden: bool,
    /// Inline style.
    pub style: Style,
    /// Zoom and pan to apply, for the current slide only.
    pub zoom: Option<ZoomState>,
    /// Host header.
    pub header: Option<N>,
    /// The slide body.
    pub content: SlideContent<N>,
    /// Host footer.
    pub footer: Option<N>,
}

/// A slide body.
#[derive(Clone, Debug, PartialEq)]
pub enum SlideContent<N> {
    /// Rendered by the host.
    Custom(N),
    /// The built-in image.
    Image(ImageView),
    /// A custom slide type the host did not render.
    Empty,
}

/// A button.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonView<N> {
    /// Title and accessible name.
    pub label: String,
    /// `loupe__button` plus a modifier such as `loupe__button_prev`.
    pub class_name: String,
    /// Whether the button is disabled.
    pub disabled: bool,
    /// Inline style from the button slot.
    pub style: Style,
    /// The button's icon.
    pub icon: IconView<N>,
}

/// A button icon.
#[derive(Clone, Debug, PartialEq)]
pub enum IconView<N> {
    /// Supplied by the host.
    Custom(N),
    /// A built-in icon.
    Builtin {
        /// Icon name: `"prev"`, `"next"`, or `"close"`.
        name: &'static str,
        /// Always `loupe__icon`.
        class_name: String,
        /// Inline style from the icon slot.
        style: Style,
    },
}
