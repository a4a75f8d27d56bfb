// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe: a headless image lightbox.
//!
//! [`Lightbox`] ties the Loupe kernels together for one overlay instance:
//!
//! - [`loupe_gesture`] turns raw input into navigation, close, zoom, and pan
//!   intents,
//! - [`loupe_controller`] applies navigation under a policy and runs the close
//!   protocol,
//! - [`loupe_zoom`] keeps the current slide's zoom and pan in range,
//! - [`loupe_carousel`] picks the slides to keep mounted,
//! - [`loupe_overlay`] takes over the page while the lightbox is open.
//!
//! The host owns the element tree. It feeds events into the `on_*` entry
//! points, reports measurements with [`Lightbox::on_resize`] and
//! [`Lightbox::on_content_measured`], and renders the [`LightboxView`] returned
//! by [`Lightbox::view`], supplying custom content through [`Render`].
//!
//! ## Slides and settings
//!
//! ```rust
//! use loupe::{Label, LightboxSettings, NavigationPolicy, Slide};
//!
//! let slides = Slide::list_from_json(
//!     r#"[
//!         { "src": "/harbour.jpg", "width": 1600, "height": 900, "alt": "Harbour" },
//!         { "type": "video", "poster": "/ferry.jpg" }
//!     ]"#,
//! )
//! .unwrap();
//! assert_eq!(slides[0].kind(), "image");
//! assert_eq!(slides[1].kind(), "video");
//!
//! let settings = LightboxSettings::from_toml_str(
//!     r#"
//!     [labels]
//!     Close = "Fermer"
//!
//!     [controller]
//!     navigation = "clamp"
//!
//!     [zoom]
//!     supports = ["video"]
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(settings.labels.translate(Label::Close), "Fermer");
//! assert_eq!(settings.controller.navigation, NavigationPolicy::Clamp);
//! assert_eq!(settings.zoom.max_zoom_for(&slides[1]), 8.0);
//! ```
//!
//! ## Index ownership
//!
//! The lightbox never changes its own index. Navigation and close requests
//! reach the owner through the `set_index` callback, and the owner applies
//! them with [`Lightbox::set_index`]. Closing waits for every exit hook,
//! including the overlay's fade out, before the callback receives `None`.

mod error;
mod image;
mod labels;
mod lightbox;
mod render;
mod settings;
mod slide;

pub use error::{ConfigError, SlideError};
pub use image::{
    IMAGE_SCALE_DELAY_MS, ImageScale, ImageView, fitted_dimensions, round, sizes_attr,
    src_set_attr,
};
pub use labels::{Label, Labels};
pub use lightbox::Lightbox;
pub use render::{
    ButtonView, CarouselView, IconView, LightboxView, NoRender, Render, RenderSlideProps,
    SlideContent, SlideView, ToolbarView,
};
pub use settings::{
    CarouselSettings, ControllerSettings, LightboxSettings, MAX_PRELOAD, Slot, Style,
    ToolbarSettings, ZoomSettings,
};
pub use slide::{CustomSlide, ImageSlide, ImageSource, Slide};

pub use loupe_controller::{Controller, ExitHookError, ExitHookHandle, NavigationPolicy, Spawner};
pub use loupe_gesture::{
    ClickInput, Intent, Key, KeyInput, Modifiers, NamedKey, PointerButtons, PointerId,
    PointerInput, PointerKind, SensorResponse, SensorSettings, TargetKind, WheelInput,
};
pub use loupe_overlay::css::{clsx, css_class, css_var};
pub use loupe_overlay::{ElementId, Overlay, OverlayHost, OverlayView, Sibling, Timer};
pub use loupe_zoom::{MAX_ZOOM, ZoomState};
