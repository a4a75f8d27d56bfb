// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for `loupe::Lightbox`.
//!
//! A fake page stands in for the document, the owner's index lives in the
//! harness, and synthetic input drives the lightbox through navigation, zoom,
//! and the close protocol.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use futures_util::future::LocalBoxFuture;
use kurbo::{Point, Rect, Vec2};
use loupe::{
    ClickInput, CustomSlide, ElementId, IconView, ImageSlide, ImageSource, ImageView, Key,
    KeyInput, Lightbox, LightboxSettings, LightboxView, Modifiers, NavigationPolicy,
    NoRender, Overlay, OverlayHost, PointerInput, Render, RenderSlideProps, Sibling, Slide,
    SlideContent, TargetKind, WheelInput,
};
use tokio::task::LocalSet;
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Page {
    siblings: Vec<Sibling>,
    attributes: RefCell<HashMap<(ElementId, String), String>>,
    focused: Cell<Option<ElementId>>,
    overlay_focused: Cell<bool>,
}

impl Page {
    fn new() -> Self {
        Self {
            siblings: vec![
                Sibling {
                    id: ElementId(1),
                    tag: "DIV".into(),
                },
                Sibling {
                    id: ElementId(2),
                    tag: "SCRIPT".into(),
                },
            ],
            ..Self::default()
        }
    }

    fn attribute(&self, id: u64, name: &str) -> Option<String> {
        self.get_attribute(ElementId(id), name)
    }
}

impl OverlayHost for Page {
    fn focus_overlay(&self) {
        self.overlay_focused.set(true);
    }

    fn focused_element(&self) -> Option<ElementId> {
        self.focused.get()
    }

    fn focus_element(&self, id: ElementId) {
        self.overlay_focused.set(false);
        self.focused.set(Some(id));
    }

    fn siblings(&self) -> Vec<Sibling> {
        self.siblings.clone()
    }

    fn get_attribute(&self, id: ElementId, name: &str) -> Option<String> {
        self.attributes.borrow().get(&(id, name.to_owned())).cloned()
    }

    fn set_attribute(&self, id: ElementId, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert((id, name.to_owned()), value.to_owned());
    }

    fn remove_attribute(&self, id: ElementId, name: &str) {
        self.attributes.borrow_mut().remove(&(id, name.to_owned()));
    }

    fn scrollbar_width(&self) -> f64 {
        0.0
    }

    fn set_root_style_property(&self, _name: &str, _value: &str) {}

    fn remove_root_style_property(&self, _name: &str) {}

    fn transition_duration(&self) -> Duration {
        Duration::from_millis(300)
    }
}

type Tasks = Rc<RefCell<Vec<LocalBoxFuture<'static, ()>>>>;

fn tokio_sleep(duration: Duration) -> LocalBoxFuture<'static, ()> {
    Box::pin(sleep(duration))
}

const CAROUSEL: Rect = Rect::new(0.0, 0.0, 1024.0, 768.0);

struct Harness {
    lightbox: Lightbox,
    requests: Rc<RefCell<Vec<Option<usize>>>>,
    tasks: Tasks,
    page: Rc<Page>,
}

impl Harness {
    fn new(slides: Vec<Slide>, settings: LightboxSettings) -> Self {
        // `RUST_LOG=loupe=trace` shows the lightbox's decisions.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let requests = Rc::new(RefCell::new(Vec::new()));
        let tasks: Tasks = Rc::new(RefCell::new(Vec::new()));
        let page = Rc::new(Page::new());

        let recorder = Rc::clone(&requests);
        let queue = Rc::clone(&tasks);
        let lightbox = Lightbox::new(
            slides,
            settings,
            move |index| recorder.borrow_mut().push(index),
            move |task: LocalBoxFuture<'static, ()>| queue.borrow_mut().push(task),
            Overlay::new(Rc::clone(&page), tokio_sleep),
        )
        .expect("valid settings");

        Self {
            lightbox,
            requests,
            tasks,
            page,
        }
    }

    fn open(&mut self, index: usize) {
        self.lightbox.set_index(Some(index));
        self.lightbox.on_resize(CAROUSEL);
    }

    /// Plays the owner: applies every index the lightbox asked for.
    fn apply(&mut self) {
        let requests: Vec<_> = self.requests.borrow_mut().drain(..).collect();
        for index in requests {
            self.lightbox.set_index(index);
        }
    }

    fn requests(&self) -> Vec<Option<usize>> {
        self.requests.borrow().clone()
    }

    fn view(&self) -> LightboxView<()> {
        self.lightbox.view(&NoRender).expect("open lightbox has a view")
    }

    fn key(&mut self, key: &str) {
        self.lightbox.on_key_down(&KeyInput::new(Key::from_dom(key)));
    }

    fn swipe(&mut self, from: Point, to: Point) {
        self.lightbox.on_pointer_down(&PointerInput::touch(1, from));
        self.lightbox.on_pointer_move(&PointerInput::touch(1, to));
        self.lightbox.on_pointer_up(&PointerInput::touch(1, to));
    }
}

fn landscape(count: usize) -> Vec<Slide> {
    (0..count)
        .map(|i| Slide::from(ImageSlide::new(format!("/{i}.jpg")).with_size(1200.0, 800.0)))
        .collect()
}

fn portrait(src: &str) -> Slide {
    Slide::from(ImageSlide {
        src_set: vec![ImageSource {
            src: format!("{src}-800"),
            width: 800.0,
            height: 1200.0,
        }],
        ..ImageSlide::new(src)
    })
}

fn custom(kind: &str) -> Slide {
    Slide::from(CustomSlide {
        kind: kind.into(),
        ..CustomSlide::default()
    })
}

fn current_image(view: &LightboxView<()>) -> ImageView {
    let slide = view
        .carousel
        .slides
        .iter()
        .find(|slide| !slide.hidden)
        .expect("a current slide");
    match &slide.content {
        SlideContent::Image(image) => image.clone(),
        other => panic!("expected an image, got {other:?}"),
    }
}

fn ctrl_wheel(dy: f64, time_ms: u64) -> WheelInput {
    WheelInput::new(Vec2::new(0.0, dy), time_ms)
        .with_modifiers(Modifiers::CTRL)
        .with_position(CAROUSEL.center())
}

#[test]
fn opening_takes_over_the_page() {
    let mut h = Harness::new(landscape(5), LightboxSettings::default());
    h.page.focused.set(Some(ElementId(1)));
    assert!(h.lightbox.view(&NoRender).is_none());

    h.open(0);
    assert!(h.page.overlay_focused.get());
    assert_eq!(h.page.attribute(1, "inert").as_deref(), Some(""));
    assert_eq!(h.page.attribute(1, "aria-hidden").as_deref(), Some("true"));
    assert_eq!(h.page.attribute(2, "inert"), None);

    let view = h.view();
    assert_eq!(view.overlay.class_name, "loupe__portal");
    assert_eq!(view.aria_label, "Lightbox");
    assert_eq!(view.carousel.aria_label, "Carousel");

    let mounted: Vec<_> = view.carousel.slides.iter().map(|slide| slide.slide_index).collect();
    assert_eq!(mounted, [3, 4, 0, 1, 2]);
    let current = &view.carousel.slides[2];
    assert!(!current.hidden);
    assert_eq!(current.aria_label, "1 of 5");
    assert_eq!(current.key, "0-/0.jpg");
    assert_eq!(current.role, "group");
    assert_eq!(current.aria_roledescription, "slide");
    assert!(current.zoom.is_some());
    assert!(view.carousel.slides[1].hidden);
    assert!(view.carousel.slides[1].zoom.is_none());

    let image = current_image(&view);
    assert_eq!(image.width, Some(1024.0));
    assert_eq!(image.height, Some(682.67));
    assert!(!image.draggable);

    let close = &view.toolbar.close;
    assert_eq!(close.label, "Close");
    assert_eq!(close.class_name, "loupe__button loupe__button_close");
    assert!(matches!(close.icon, IconView::Builtin { name: "close", .. }));
    assert_eq!(view.toolbar.class_name, "loupe__toolbar");
}

#[test]
fn slides_render_only_after_the_carousel_is_measured() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.lightbox.set_index(Some(0));
    assert!(h.view().carousel.slides.is_empty());
    h.lightbox.on_resize(CAROUSEL);
    assert_eq!(h.view().carousel.slides.len(), 3);
}

#[test]
fn arrow_keys_wrap_around_by_default() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(2);
    let view = h.view();
    assert!(view.next.is_some_and(|next| !next.disabled));

    h.key("ArrowRight");
    assert_eq!(h.requests(), [Some(0)]);
    h.apply();
    assert_eq!(h.lightbox.index(), Some(0));

    h.key("ArrowLeft");
    h.apply();
    assert_eq!(h.lightbox.index(), Some(2));
}

#[test]
fn clamp_policy_stops_at_the_edges() {
    let mut settings = LightboxSettings::default();
    settings.controller.navigation = NavigationPolicy::Clamp;
    let mut h = Harness::new(landscape(3), settings);
    h.open(2);

    let view = h.view();
    assert!(view.next.as_ref().is_some_and(|next| next.disabled));
    assert!(view.prev.as_ref().is_some_and(|prev| !prev.disabled));
    assert_eq!(
        view.next.map(|next| next.class_name),
        Some("loupe__button loupe__button_next".to_owned())
    );

    h.key("ArrowRight");
    assert!(h.requests().is_empty());
}

#[test]
fn a_single_slide_has_no_navigation_buttons() {
    let mut h = Harness::new(landscape(1), LightboxSettings::default());
    h.open(0);
    let view = h.view();
    assert!(view.prev.is_none());
    assert!(view.next.is_none());

    h.key("ArrowRight");
    assert!(h.requests().is_empty());
}

#[test]
fn horizontal_swipes_navigate() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(1);
    h.swipe(Point::new(600.0, 400.0), Point::new(400.0, 410.0));
    assert_eq!(h.requests(), [Some(2)]);
    h.apply();

    h.swipe(Point::new(400.0, 400.0), Point::new(600.0, 400.0));
    assert_eq!(h.requests(), [Some(1)]);
}

#[test]
fn pull_down_starts_closing() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(1);
    h.swipe(Point::new(500.0, 200.0), Point::new(500.0, 400.0));

    assert!(h.lightbox.controller().is_closing());
    assert_eq!(h.tasks.borrow().len(), 1);
    // The owner only hears about the close once the exit hooks finish.
    assert!(h.requests().is_empty());

    // Input is ignored while closing.
    h.key("ArrowRight");
    assert!(h.requests().is_empty());
}

#[test]
fn pull_close_can_be_disabled() {
    let mut settings = LightboxSettings::default();
    settings.controller.sensors.close_on_pull_down = false;
    let mut h = Harness::new(landscape(3), settings);
    h.open(1);
    h.swipe(Point::new(500.0, 200.0), Point::new(500.0, 400.0));
    assert!(!h.lightbox.controller().is_closing());
}

#[test]
fn backdrop_clicks_close_but_content_clicks_do_not() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(0);

    let content = PointerInput::mouse(CAROUSEL.center());
    h.lightbox.on_pointer_down(&content);
    h.lightbox.on_pointer_up(&content);
    assert!(!h.lightbox.controller().is_closing());

    let button = content.with_target(TargetKind::Control);
    h.lightbox.on_pointer_down(&button);
    h.lightbox.on_pointer_up(&button);
    assert!(!h.lightbox.controller().is_closing());

    let backdrop = content.with_target(TargetKind::Backdrop);
    h.lightbox.on_pointer_down(&backdrop);
    h.lightbox.on_pointer_up(&backdrop);
    assert!(h.lightbox.controller().is_closing());
}

#[test]
fn wheel_swipes_navigate_once_per_gesture() {
    let mut h = Harness::new(landscape(5), LightboxSettings::default());
    h.open(0);

    let first = h.lightbox.on_wheel(&WheelInput::new(Vec2::new(60.0, 0.0), 1_000));
    assert!(first.prevent_default);
    assert!(h.requests().is_empty());

    h.lightbox.on_wheel(&WheelInput::new(Vec2::new(60.0, 0.0), 1_016));
    assert_eq!(h.requests(), [Some(1)]);
    h.apply();

    // Trailing momentum from the same gesture is swallowed.
    for (i, dx) in [80.0, 60.0, 40.0, 20.0].into_iter().enumerate() {
        let time = 1_032 + 16 * i as u64;
        let response = h.lightbox.on_wheel(&WheelInput::new(Vec2::new(dx, 0.0), time));
        assert!(response.prevent_default);
    }
    assert!(h.requests().is_empty());
    assert_eq!(h.lightbox.index(), Some(1));
}

#[test]
fn ctrl_wheel_zooms_around_the_cursor() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(0);

    let response = h.lightbox.on_wheel(&ctrl_wheel(-50.0, 100));
    assert!(response.prevent_default);
    assert_eq!(h.lightbox.zoom_state().zoom, 1.5);

    h.lightbox.on_wheel(&ctrl_wheel(50.0, 200));
    assert_eq!(h.lightbox.zoom_state().zoom, 1.0);
}

#[test]
fn keyboard_zoom_reaches_the_maximum_in_four_steps() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(0);
    for _ in 0..4 {
        h.key("+");
    }
    assert!((h.lightbox.zoom_state().zoom - 8.0).abs() < 1e-9);

    // Arrow keys pan instead of navigating while zoomed.
    h.key("ArrowRight");
    assert!(h.requests().is_empty());

    h.lightbox.on_key_down(&KeyInput::with_modifiers(Key::Character('0'), Modifiers::CTRL));
    assert_eq!(h.lightbox.zoom_state().zoom, 1.0);
}

#[test]
fn two_finger_pinch_zooms() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(0);

    let a = PointerInput::touch(1, Point::new(400.0, 384.0));
    let b = PointerInput::touch(2, Point::new(600.0, 384.0));
    h.lightbox.on_pointer_down(&a);
    h.lightbox.on_pointer_down(&b);
    let b = PointerInput::touch(2, Point::new(700.0, 384.0));
    let response = h.lightbox.on_pointer_move(&b);
    assert!(response.prevent_default);
    assert_eq!(h.lightbox.zoom_state().zoom, 2.0);

    h.lightbox.on_pointer_up(&b);
    h.lightbox.on_pointer_up(&a);
    assert!(h.requests().is_empty());
    assert!(!h.lightbox.controller().is_closing());
}

#[test]
fn double_click_toggles_zoom() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(0);
    let click = ClickInput {
        position: CAROUSEL.center(),
        target: TargetKind::Content,
    };
    h.lightbox.on_double_click(&click);
    assert_eq!(h.lightbox.zoom_state().zoom, 2.0);
    for _ in 0..2 {
        h.lightbox.on_double_click(&click);
    }
    assert_eq!(h.lightbox.zoom_state().zoom, 8.0);
    h.lightbox.on_double_click(&click);
    assert_eq!(h.lightbox.zoom_state().zoom, 1.0);
}

#[test]
fn zoom_availability_follows_the_slide_type() {
    let mut settings = LightboxSettings::default();
    settings.zoom.supports = vec!["map".into()];
    let slides = vec![custom("video"), custom("map")];
    let mut h = Harness::new(slides, settings);

    h.open(0);
    assert_eq!(h.lightbox.zoom_state().max_zoom, 1.0);
    h.key("+");
    assert_eq!(h.lightbox.zoom_state().zoom, 1.0);

    h.key("ArrowRight");
    h.apply();
    assert_eq!(h.lightbox.zoom_state().max_zoom, 8.0);

    let mut settings = LightboxSettings::default();
    settings.zoom.disabled = true;
    let mut h = Harness::new(landscape(2), settings);
    h.open(0);
    assert_eq!(h.lightbox.zoom_state().max_zoom, 1.0);
}

#[test]
fn navigation_resets_zoom() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(0);
    h.key("+");
    assert!(h.lightbox.zoom_state().zoom > 1.0);

    // Arrow keys pan while zoomed, so navigate through the controller.
    h.lightbox.controller().next();
    h.apply();
    assert_eq!(h.lightbox.index(), Some(1));
    assert_eq!(h.lightbox.zoom_state().zoom, 1.0);
    assert_eq!(h.lightbox.zoom_state().offset_x, 0.0);
}

#[test]
fn resizing_reclamps_the_pan_offset() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(0);
    h.lightbox
        .on_content_measured([Rect::new(0.0, 42.67, 1024.0, 725.33)]);
    h.lightbox.on_double_click(&ClickInput {
        position: CAROUSEL.center(),
        target: TargetKind::Content,
    });
    h.key("ArrowLeft");
    assert_eq!(h.lightbox.zoom_state().offset_x, 50.0);

    // A wider carousel leaves only 24px of horizontal overflow at 2x.
    h.lightbox.on_resize(Rect::new(0.0, 0.0, 2000.0, 768.0));
    assert_eq!(h.lightbox.zoom_state().offset_x, 24.0);
}

#[test]
fn navigation_forgets_the_previous_slide_measurement() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(0);
    h.lightbox
        .on_content_measured([Rect::new(0.0, 42.67, 1024.0, 725.33)]);
    h.lightbox.controller().next();
    h.apply();
    assert_eq!(h.lightbox.index(), Some(1));

    let click = ClickInput {
        position: CAROUSEL.center(),
        target: TargetKind::Content,
    };
    h.lightbox.on_double_click(&click);
    h.key("ArrowLeft");
    assert_eq!(h.lightbox.zoom_state().offset_x, 0.0);

    h.lightbox
        .on_content_measured([Rect::new(0.0, 42.67, 1024.0, 725.33)]);
    h.key("ArrowLeft");
    assert_eq!(h.lightbox.zoom_state().offset_x, 50.0);
}

#[test]
fn preload_bounds_the_mounted_slides() {
    let mut settings = LightboxSettings::default();
    settings.carousel.preload = 1;
    settings.carousel.looping = false;
    let mut h = Harness::new(landscape(5), settings);

    h.open(0);
    assert_eq!(h.lightbox.window().len(), 2);
    h.lightbox.set_index(Some(2));
    let mounted: Vec<_> = h.lightbox.window().slide_indices().collect();
    assert_eq!(mounted, [1, 2, 3]);
}

#[test]
fn image_sizes_follow_zoom_after_a_delay() {
    let mut h = Harness::new(vec![portrait("/p"), portrait("/q")], LightboxSettings::default());
    h.open(0);
    assert_eq!(current_image(&h.view()).sizes.as_deref(), Some("512px"));
    assert_eq!(current_image(&h.view()).src_set.as_deref(), Some("/p-800 800w"));

    h.lightbox.on_wheel(&ctrl_wheel(-50.0, 1_000));
    assert_eq!(current_image(&h.view()).sizes.as_deref(), Some("512px"));
    assert!(!h.lightbox.poll_timers(1_299));
    assert!(h.lightbox.poll_timers(1_300));
    assert_eq!(current_image(&h.view()).sizes.as_deref(), Some("768px"));

    // The sharper hint survives navigating away and back while mounted.
    h.lightbox.controller().next();
    h.apply();
    h.lightbox.controller().prev();
    h.apply();
    assert_eq!(h.lightbox.zoom_state().zoom, 1.0);
    assert_eq!(current_image(&h.view()).sizes.as_deref(), Some("768px"));
}

#[test]
fn image_scale_is_dropped_once_the_slide_unmounts() {
    let mut settings = LightboxSettings::default();
    settings.carousel.preload = 0;
    let mut h = Harness::new(vec![portrait("/p"), portrait("/q")], settings);
    h.open(0);

    h.lightbox.on_wheel(&ctrl_wheel(-50.0, 1_000));
    h.lightbox.poll_timers(2_000);
    assert_eq!(current_image(&h.view()).sizes.as_deref(), Some("768px"));

    h.lightbox.set_index(Some(1));
    h.lightbox.set_index(Some(0));
    assert_eq!(current_image(&h.view()).sizes.as_deref(), Some("512px"));
}

#[test]
fn replacing_slides_drops_scales_of_replaced_slides() {
    let mut h = Harness::new(vec![portrait("/p"), portrait("/q")], LightboxSettings::default());
    h.open(0);
    h.lightbox.on_wheel(&ctrl_wheel(-50.0, 1_000));
    h.lightbox.poll_timers(2_000);
    assert_eq!(current_image(&h.view()).sizes.as_deref(), Some("768px"));

    h.lightbox.set_slides(vec![portrait("/r"), portrait("/q")]);
    assert_eq!(current_image(&h.view()).sizes.as_deref(), Some("512px"));
    h.lightbox.set_slides(vec![portrait("/p"), portrait("/q")]);
    assert_eq!(current_image(&h.view()).sizes.as_deref(), Some("512px"));
}

#[test]
fn image_props_and_styles_reach_the_view() {
    let settings = LightboxSettings::from_toml_str(
        r#"
        class_name = "gallery"

        [toolbar]
        fixed = true

        [carousel.image_props]
        crossorigin = "anonymous"

        [styles.image]
        "object-fit" = "contain"
        "#,
    )
    .expect("valid settings");
    let mut h = Harness::new(landscape(2), settings);
    h.open(0);

    let view = h.view();
    assert_eq!(view.overlay.class_name, "loupe__portal gallery");
    assert_eq!(view.toolbar.class_name, "loupe__toolbar loupe__toolbar_fixed");
    let image = current_image(&view);
    assert_eq!(image.extra.get("crossorigin").map(String::as_str), Some("anonymous"));
    assert_eq!(image.style.get("object-fit").map(String::as_str), Some("contain"));
}

struct Html;

impl Render for Html {
    type Node = String;

    fn slide(&self, props: &RenderSlideProps<'_>) -> Option<String> {
        (props.slide.kind() == "video").then(|| format!("<video #{}>", props.slide_index))
    }

    fn slide_footer(&self, props: &RenderSlideProps<'_>) -> Option<String> {
        props.current.then(|| "caption".to_owned())
    }

    fn controls(&self) -> Option<String> {
        Some("thumbnails".to_owned())
    }

    fn toolbar_buttons(&self) -> Vec<String> {
        vec!["share".to_owned()]
    }

    fn icon_close(&self) -> Option<String> {
        Some("x".to_owned())
    }
}

#[test]
fn custom_render_functions_fill_the_view() {
    let slides = vec![landscape(1).remove(0), custom("video"), custom("map")];
    let mut h = Harness::new(slides, LightboxSettings::default());
    h.open(1);

    let view = h.lightbox.view(&Html).expect("open lightbox has a view");
    assert_eq!(view.controls.as_deref(), Some("thumbnails"));
    assert_eq!(view.toolbar.buttons, ["share"]);
    assert_eq!(view.toolbar.close.icon, IconView::Custom("x".to_owned()));

    let slides = &view.carousel.slides;
    assert_eq!(slides.len(), 3);
    assert!(matches!(slides[0].content, SlideContent::Image(_)));
    assert_eq!(slides[1].content, SlideContent::Custom("<video #1>".to_owned()));
    assert_eq!(slides[1].footer.as_deref(), Some("caption"));
    assert_eq!(slides[1].key, "1-video");
    assert_eq!(slides[2].content, SlideContent::Empty);
    assert_eq!(slides[2].footer, None);
}

#[test]
fn shrinking_the_slide_list_past_the_index_closes() {
    let mut h = Harness::new(landscape(5), LightboxSettings::default());
    h.open(4);
    h.lightbox.set_slides(landscape(3));
    assert!(!h.lightbox.is_open());
    assert!(!h.lightbox.overlay().is_mounted());
    assert_eq!(h.page.attribute(1, "inert"), None);
}

#[test]
fn closed_lightboxes_ignore_input() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    let response = h.lightbox.on_wheel(&WheelInput::new(Vec2::new(200.0, 0.0), 0));
    assert!(!response.prevent_default);
    h.key("ArrowRight");
    assert!(h.requests().is_empty());
}

#[test]
fn dropping_an_open_lightbox_releases_the_page() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(0);
    assert_eq!(h.page.attribute(1, "inert").as_deref(), Some(""));
    let Harness { lightbox, page, .. } = h;
    drop(lightbox);
    assert_eq!(page.attribute(1, "inert"), None);
}

#[tokio::test(start_paused = true)]
async fn close_waits_for_exit_hooks_and_the_fade_out() {
    let mut h = Harness::new(landscape(3), LightboxSettings::default());
    h.open(1);

    let hook_finished = Rc::new(Cell::new(false));
    let flag = Rc::clone(&hook_finished);
    let _handle = h.lightbox.controller().add_exit_hook(move || {
        let flag = Rc::clone(&flag);
        async move {
            sleep(Duration::from_millis(50)).await;
            flag.set(true);
            Ok(())
        }
    });
    assert_eq!(h.lightbox.controller().exit_hook_count(), 2);

    h.key("Escape");
    let tasks: Vec<_> = h.tasks.borrow_mut().drain(..).collect();
    assert_eq!(tasks.len(), 1);

    LocalSet::new()
        .run_until(async {
            for task in tasks {
                tokio::task::spawn_local(task);
            }
            sleep(Duration::from_millis(1)).await;

            // Fading out: the page is released but the owner still shows the slide.
            assert!(!h.lightbox.overlay().is_visible());
            assert_eq!(h.page.attribute(1, "inert"), None);
            assert!(h.requests().is_empty());

            h.lightbox.on_transition_end();
            sleep(Duration::from_millis(100)).await;
            assert!(hook_finished.get());
            assert_eq!(h.requests(), [None]);
        })
        .await;

    h.apply();
    assert!(!h.lightbox.is_open());
    assert!(!h.lightbox.overlay().is_mounted());
    assert!(h.lightbox.view(&NoRender).is_none());
    assert_eq!(h.lightbox.controller().exit_hook_count(), 0);
    assert!(!h.lightbox.controller().is_closing());

    // Reopening registers the overlay's exit hook again.
    h.open(0);
    assert_eq!(h.lightbox.controller().exit_hook_count(), 1);
}
