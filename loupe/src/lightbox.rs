// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use hashbrown::HashMap;
use kurbo::{Rect, Size};
use loupe_carousel::{SlideWindow, WindowSlot, compute_window};
use loupe_controller::{Controller, ExitHookHandle, Spawner};
use loupe_gesture::{
    ClickInput, Intent, KeyInput, PointerInput, SensorResponse, Sensors, WheelInput, ZoomView,
};
use loupe_overlay::Overlay;
use loupe_overlay::css::{clsx, css_class};
use loupe_zoom::{ZoomModel, ZoomState};
use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::image::{ImageScale, ImageView};
use crate::labels::Label;
use crate::render::{
    ButtonView, CarouselView, IconView, LightboxView, Render, RenderSlideProps, SlideContent,
    SlideView, ToolbarView,
};
use crate::settings::{LightboxSettings, Slot};
use crate::slide::Slide;

/// One lightbox instance.
///
/// The owner keeps the authoritative index. Navigation and close requests are
/// reported through the `set_index` callback given to [`Lightbox::new`]; the
/// owner answers by calling [`Lightbox::set_index`] once it has applied them.
/// The callback runs synchronously from within the event entry points (and
/// from a spawned task for closes), so it must not call back into the
/// `Lightbox` directly.
///
/// Event entry points return the sensors' [`SensorResponse`] after applying
/// its intents; the host uses [`SensorResponse::prevent_default`] to decide
/// whether to suppress the platform action. Every entry point is a no-op
/// while the lightbox is closed or closing.
///
/// Time comes from the event timestamps and from [`Lightbox::poll_timers`].
pub struct Lightbox {
    slides: Vec<Slide>,
    index: Option<usize>,
    settings: LightboxSettings,
    controller: Controller,
    zoom: ZoomModel,
    sensors: Sensors,
    overlay: Overlay,
    window: SlideWindow,
    image_scales: HashMap<String, ImageScale>,
    clock_ms: u64,
    exit_hook: Option<ExitHookHandle>,
}

impl fmt::Debug for Lightbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lightbox")
            .field("slides", &self.slides.len())
            .field("index", &self.index)
            .field("zoom", &self.zoom.state())
            .field("window", &self.window)
            .field("overlay", &self.overlay)
            .finish_non_exhaustive()
    }
}

impl Lightbox {
    /// Creates a closed lightbox.
    ///
    /// Fails if `settings` does not pass [`LightboxSettings::validate`].
    pub fn new(
        slides: Vec<Slide>,
        settings: LightboxSettings,
        set_index: impl Fn(Option<usize>) + 'static,
        spawner: impl Spawner + 'static,
        overlay: Overlay,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        let controller = Controller::new(slides.len(), None, set_index, spawner);
        controller.set_policy(settings.controller.navigation);
        Ok(Self {
            sensors: Sensors::new(settings.controller.sensors),
            zoom: ZoomModel::new(1.0),
            slides,
            index: None,
            settings,
            controller,
            overlay,
            window: SlideWindow::default(),
            image_scales: HashMap::new(),
            clock_ms: 0,
            exit_hook: None,
        })
    }

    /// The slides.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// The current slide index, `None` while closed.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns `true` while a slide is shown, including during the close
    /// transition.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.index.is_some()
    }

    /// The settings.
    #[must_use]
    pub fn settings(&self) -> &LightboxSettings {
        &self.settings
    }

    /// The navigation controller, for hosts wiring their own buttons or exit
    /// hooks.
    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// The overlay.
    #[must_use]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Zoom and pan of the current slide.
    #[must_use]
    pub fn zoom_state(&self) -> ZoomState {
        self.zoom.state()
    }

    /// The mounted slides.
    #[must_use]
    pub fn window(&self) -> &SlideWindow {
        &self.window
    }

    /// Applies an index chosen by the owner. An index outside the slide list
    /// closes the lightbox.
    pub fn set_index(&mut self, index: Option<usize>) {
        let index = index.filter(|&index| index < self.slides.len());
        if index == self.index {
            return;
        }
        let was_open = self.index.is_some();
        self.index = index;
        self.controller.sync(self.slides.len(), index);

        // The new slide pans against its own size once the host measures it.
        self.zoom.reset();
        self.zoom.set_content_half_extents(Size::ZERO);
        self.zoom.set_max_zoom(self.current_max_zoom());
        for scale in self.image_scales.values_mut() {
            scale.request(1.0, self.clock_ms);
        }
        let previous = self.refresh_window();
        for index in self.window.diff(&previous).left {
            if let Some(slide) = self.slides.get(index) {
                self.image_scales.remove(&slide.key_for(index));
            }
        }

        match (was_open, index) {
            (false, Some(index)) => {
                self.overlay.mount();
                self.exit_hook = Some(self.overlay.register_exit_hook(&self.controller));
                debug!(index, "lightbox opened");
            }
            (true, None) => {
                self.release_overlay();
                self.sensors.reset();
                debug!("lightbox closed");
            }
            (_, index) => debug!(?index, "slide changed"),
        }
    }

    /// Replaces the slide list, keeping the index if it is still in range.
    pub fn set_slides(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        let index = self.index.filter(|&index| index < self.slides.len());
        if index != self.index {
            self.set_index(index);
        } else {
            self.controller.sync(self.slides.len(), index);
            self.zoom.set_max_zoom(self.current_max_zoom());
            self.refresh_window();
        }

        // Indices may now name other slides, so drop scales by key.
        let stale: Vec<String> = self
            .image_scales
            .keys()
            .filter(|key| !self.is_mounted_key(key))
            .cloned()
            .collect();
        for key in stale {
            self.image_scales.remove(&key);
        }
    }

    /// Handles a key down.
    pub fn on_key_down(&mut self, input: &KeyInput) -> SensorResponse {
        if !self.accepts_input() {
            return SensorResponse::none();
        }
        let response = self.sensors.on_key_down(input, self.zoom_view());
        self.apply(&response);
        response
    }

    /// Handles a pointer down.
    pub fn on_pointer_down(&mut self, input: &PointerInput) -> SensorResponse {
        if !self.accepts_input() {
            return SensorResponse::none();
        }
        self.tick(input.time_ms);
        let response = self.sensors.on_pointer_down(input);
        self.apply(&response);
        response
    }

    /// Handles a pointer move.
    pub fn on_pointer_move(&mut self, input: &PointerInput) -> SensorResponse {
        if !self.accepts_input() {
            return SensorResponse::none();
        }
        self.tick(input.time_ms);
        let response = self.sensors.on_pointer_move(input, self.zoom_view());
        self.apply(&response);
        response
    }

    /// Handles a pointer up.
    pub fn on_pointer_up(&mut self, input: &PointerInput) -> SensorResponse {
        if !self.accepts_input() {
            return SensorResponse::none();
        }
        self.tick(input.time_ms);
        let response = self.sensors.on_pointer_up(input, self.zoom_view());
        self.apply(&response);
        response
    }

    /// Handles a pointer cancel.
    pub fn on_pointer_cancel(&mut self, input: &PointerInput) -> SensorResponse {
        if !self.accepts_input() {
            return SensorResponse::none();
        }
        self.tick(input.time_ms);
        let response = self.sensors.on_pointer_cancel(input, self.zoom_view());
        self.apply(&response);
        response
    }

    /// Handles a pointer leaving the lightbox.
    pub fn on_pointer_leave(&mut self, input: &PointerInput) -> SensorResponse {
        if !self.accepts_input() {
            return SensorResponse::none();
        }
        self.tick(input.time_ms);
        let response = self.sensors.on_pointer_leave(input, self.zoom_view());
        self.apply(&response);
        response
    }

    /// Handles a wheel event. The default action is always suppressed while
    /// open so the page behind the overlay never scrolls.
    pub fn on_wheel(&mut self, input: &WheelInput) -> SensorResponse {
        if !self.accepts_input() {
            return SensorResponse::none();
        }
        self.tick(input.time_ms);
        let mut response = self.sensors.on_wheel(input, self.zoom_view());
        self.apply(&response);
        response.prevent_default = true;
        response
    }

    /// Handles a double-click.
    pub fn on_double_click(&mut self, input: &ClickInput) -> SensorResponse {
        if !self.accepts_input() {
            return SensorResponse::none();
        }
        let response = self.sensors.on_double_click(input, self.zoom_view());
        self.apply(&response);
        response
    }

    /// Reports the carousel box in client coordinates.
    pub fn on_resize(&mut self, rect: Rect) {
        self.zoom.set_viewport(Some(rect));
        trace!(?rect, zoom = ?self.zoom.state(), "carousel resized");
    }

    /// Reports the boxes of the current slide's rendered children, in
    /// carousel-local coordinates.
    pub fn on_content_measured(&mut self, children: impl IntoIterator<Item = Rect>) {
        self.zoom.set_content_bounds(children);
    }

    /// Reports that the overlay's fade transition finished.
    pub fn on_transition_end(&self) {
        self.overlay.on_transition_end();
    }

    /// Advances the clock to `now_ms` and fires due timers. Returns `true` if
    /// the view changed.
    pub fn poll_timers(&mut self, now_ms: u64) -> bool {
        self.tick(now_ms);
        let now = self.clock_ms;
        let mut changed = false;
        for scale in self.image_scales.values_mut() {
            changed |= scale.poll(now);
        }
        changed
    }

    /// Describes the lightbox for rendering, or `None` while closed.
    pub fn view<R: Render>(&self, render: &R) -> Option<LightboxView<R::Node>> {
        self.index?;
        let overlay = self.overlay.view(self.settings.class_name.as_deref())?;
        let labels = &self.settings.labels;

        let slides = match self.zoom.viewport_size() {
            Some(rect) => self
                .window
                .slots()
                .iter()
                .filter_map(|slot| self.slide_view(render, slot, rect))
                .collect(),
            None => Vec::new(),
        };

        let navigable = self.slides.len() > 1;
        let prev = navigable.then(|| {
            self.button(
                Label::Previous,
                "button_prev",
                !self.controller.can_prev(),
                render.icon_prev(),
                "prev",
            )
        });
        let next = navigable.then(|| {
            self.button(
                Label::Next,
                "button_next",
                !self.controller.can_next(),
                render.icon_next(),
                "next",
            )
        });

        let toolbar_class = css_class("toolbar");
        let toolbar_fixed = css_class("toolbar_fixed");
        Some(LightboxView {
            overlay,
            aria_label: labels.translate(Label::Lightbox).to_owned(),
            style: self.settings.style(Slot::Portal),
            toolbar: ToolbarView {
                class_name: clsx([
                    Some(toolbar_class.as_str()),
                    self.settings.toolbar.fixed.then_some(toolbar_fixed.as_str()),
                ]),
                style: self.settings.style(Slot::Toolbar),
                buttons: render.toolbar_buttons(),
                close: self.button(Label::Close, "button_close", false, render.icon_close(), "close"),
            },
            carousel: CarouselView {
                class_name: css_class("carousel"),
                style: self.settings.style(Slot::Carousel),
                aria_label: labels.translate(Label::Carousel).to_owned(),
                slides,
            },
            prev,
            next,
            controls: render.controls(),
        })
    }

    fn accepts_input(&self) -> bool {
        self.is_open() && !self.controller.is_closing()
    }

    fn tick(&mut self, now_ms: u64) {
        self.clock_ms = self.clock_ms.max(now_ms);
    }

    fn zoom_view(&self) -> ZoomView {
        ZoomView::from(self.zoom.state())
    }

    fn current_slide(&self) -> Option<&Slide> {
        self.index.and_then(|index| self.slides.get(index))
    }

    fn current_max_zoom(&self) -> f64 {
        self.current_slide()
            .map_or(1.0, |slide| self.settings.zoom.max_zoom_for(slide))
    }

    /// Recomputes the mounted window and returns the previous one.
    fn refresh_window(&mut self) -> SlideWindow {
        let window = compute_window(
            self.index,
            self.slides.len(),
            self.settings.carousel.preload,
            self.settings.carousel.looping,
        );
        core::mem::replace(&mut self.window, window)
    }

    fn is_mounted_key(&self, key: &str) -> bool {
        self.window.slide_indices().any(|index| {
            self.slides
                .get(index)
                .is_some_and(|slide| slide.key_for(index) == key)
        })
    }

    fn release_overlay(&mut self) {
        if let Some(hook) = self.exit_hook.take() {
            hook.remove();
        }
        self.overlay.unmount();
    }

    fn apply(&mut self, response: &SensorResponse) {
        for intent in &response.intents {
            match *intent {
                Intent::Prev => self.controller.prev(),
                Intent::Next => self.controller.next(),
                Intent::Close => self.controller.close(),
                Intent::Zoom { zoom, anchor } => {
                    if self.zoom.change_zoom(zoom, anchor) {
                        trace!(zoom = ?self.zoom.state(), "zoom changed");
                        self.schedule_image_scale();
                    }
                }
                Intent::Pan(delta) => {
                    self.zoom.change_offsets(delta);
                    trace!(?delta, zoom = ?self.zoom.state(), "panned");
                }
            }
        }
    }

    fn schedule_image_scale(&mut self) {
        let Some(index) = self.index else {
            return;
        };
        let Some(slide) = self.slides.get(index) else {
            return;
        };
        if slide.as_image().is_none() {
            return;
        }
        let key = slide.key_for(index);
        self.image_scales
            .entry(key)
            .or_default()
            .request(self.zoom.zoom(), self.clock_ms);
    }

    fn slide_view<R: Render>(
        &self,
        render: &R,
        slot: &WindowSlot,
        rect: Size,
    ) -> Option<SlideView<R::Node>> {
        let slide = self.slides.get(slot.slide_index)?;
        let key = slide.key_for(slot.slide_index);
        let props = RenderSlideProps {
            slide,
            slide_index: slot.slide_index,
            rect,
            zoom: if slot.current { self.zoom.zoom() } else { 1.0 },
            current: slot.current,
        };

        let content = match (render.slide(&props), slide.as_image()) {
            (Some(node), _) => SlideContent::Custom(node),
            (None, Some(image)) => {
                let scale = self.image_scales.get(&key).map_or(1.0, ImageScale::scale);
                SlideContent::Image(ImageView::new(
                    image,
                    rect,
                    scale,
                    self.settings.style(Slot::Image),
                    self.settings.carousel.image_props.clone(),
                ))
            }
            (None, None) => SlideContent::Empty,
        };

        Some(SlideView {
            header: render.slide_header(&props),
            footer: render.slide_footer(&props),
            key,
            slide_index: slot.slide_index,
            offset: slot.offset,
            role: "group",
            aria_roledescription: "slide",
            aria_label: self
                .settings
                .labels
                .slide_label(slot.slide_index + 1, self.slides.len()),
            class_name: css_class("slide"),
            hidden: !slot.current,
            style: self.settings.style(Slot::Slide),
            zoom: slot.current.then(|| self.zoom.state()),
            content,
        })
    }

    fn button<N>(
        &self,
        label: Label,
        modifier: &str,
        disabled: bool,
        icon: Option<N>,
        icon_name: &'static str,
    ) -> ButtonView<N> {
        let button = css_class("button");
        let modifier = css_class(modifier);
        ButtonView {
            label: self.settings.labels.translate(label).to_owned(),
            class_name: clsx([Some(button.as_str()), Some(modifier.as_str())]),
            disabled,
            style: self.settings.style(Slot::Button),
            icon: match icon {
                Some(node) => IconView::Custom(node),
                None => IconView::Builtin {
                    name: icon_name,
                    class_name: css_class("icon"),
                    style: self.settings.style(Slot::Icon),
                },
            },
        }
    }
}

impl Drop for Lightbox {
    fn drop(&mut self) {
        self.release_overlay();
    }
}
