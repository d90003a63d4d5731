// Tests for two-way control bindings. The counting views record every
// display update so each test can check that a change crosses the binding
// exactly once and never comes back around.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tso_config::quantize::{FOVY_DEGREE, OCCLUSION_RADIUS};
use tso_config::{CameraConfig, DepthMapConfig, Field};
use tsoview::binding::format_value;
use tsoview::{InputError, SliderBinding, SliderView, TextBinding, TextView};

#[derive(Default)]
struct CountingSlider {
    shown: RefCell<Vec<i32>>,
}

impl SliderView for CountingSlider {
    fn show_position(&self, position: i32) {
        self.shown.borrow_mut().push(position);
    }
}

#[derive(Default)]
struct CountingText {
    shown: RefCell<Vec<String>>,
}

impl TextView for CountingText {
    fn show_text(&self, text: &str) {
        self.shown.borrow_mut().push(text.to_owned());
    }
}

fn counter() -> (Rc<Cell<usize>>, impl Fn(&tso_config::Change<f32>) + 'static) {
    let hits = Rc::new(Cell::new(0));
    let inner = Rc::clone(&hits);
    (hits, move |_: &tso_config::Change<f32>| inner.set(inner.get() + 1))
}

#[test]
fn bind_shows_current_value_without_writing() {
    let camera = CameraConfig::default();
    let (writes, listener) = counter();
    let _viewer = camera.fovy_degree.subscribe(listener);

    let view = Rc::new(CountingSlider::default());
    let slider = SliderBinding::bind(Rc::clone(&camera.fovy_degree), FOVY_DEGREE, Rc::clone(&view));

    assert_eq!(*view.shown.borrow(), vec![3]);
    assert_eq!(slider.position(), 3);
    assert_eq!(camera.fovy_degree.get(), 30.0);
    assert_eq!(writes.get(), 0);
}

#[test]
fn config_change_updates_the_slider_once() {
    let camera = CameraConfig::default();
    let view = Rc::new(CountingSlider::default());
    let _slider = SliderBinding::bind(Rc::clone(&camera.fovy_degree), FOVY_DEGREE, Rc::clone(&view));
    view.shown.borrow_mut().clear();

    let (writes, listener) = counter();
    let _viewer = camera.fovy_degree.subscribe(listener);

    camera.fovy_degree.set(47.0);
    assert_eq!(*view.shown.borrow(), vec![6]);
    // The displayed position is lossy but the field keeps what was written
    assert_eq!(camera.fovy_degree.get(), 47.0);
    assert_eq!(writes.get(), 1);
}

#[test]
fn config_change_within_the_same_step_still_refreshes_the_slider() {
    let camera = CameraConfig::default();
    let view = Rc::new(CountingSlider::default());
    let slider = SliderBinding::bind(Rc::clone(&camera.fovy_degree), FOVY_DEGREE, Rc::clone(&view));
    view.shown.borrow_mut().clear();

    let (writes, listener) = counter();
    let _viewer = camera.fovy_degree.subscribe(listener);

    // 31 degrees still snaps to position 3 (30 degrees)
    camera.fovy_degree.set(31.0);
    assert_eq!(*view.shown.borrow(), vec![3]);
    assert_eq!(writes.get(), 1);
    assert_eq!(slider.position(), 3);
    // The refresh wrote nothing back
    assert_eq!(camera.fovy_degree.get(), 31.0);
}

#[test]
fn slider_input_notifies_other_listeners_once() {
    let camera = CameraConfig::default();
    let view = Rc::new(CountingSlider::default());
    let slider = SliderBinding::bind(Rc::clone(&camera.fovy_degree), FOVY_DEGREE, Rc::clone(&view));
    view.shown.borrow_mut().clear();

    let (writes, listener) = counter();
    let _viewer = camera.fovy_degree.subscribe(listener);

    assert!(slider.input(5));
    assert_eq!(camera.fovy_degree.get(), 40.0);
    assert_eq!(writes.get(), 1);
    // The slider already sits at 5; it is not told again
    assert!(view.shown.borrow().is_empty());

    // Same position again changes nothing
    assert!(!slider.input(5));
    assert_eq!(writes.get(), 1);
}

#[test]
fn slider_input_is_clamped_to_range() {
    let camera = CameraConfig::default();
    let view = Rc::new(CountingSlider::default());
    let slider = SliderBinding::bind(Rc::clone(&camera.fovy_degree), FOVY_DEGREE, view);

    slider.input(99);
    assert_eq!(camera.fovy_degree.get(), 100.0);
    slider.input(-4);
    assert_eq!(camera.fovy_degree.get(), 15.0);
}

#[test]
fn step_moves_from_the_current_value() {
    let field = Field::shared(1.3_f32);
    let view = Rc::new(CountingSlider::default());
    let slider = SliderBinding::bind(Rc::clone(&field), OCCLUSION_RADIUS, Rc::clone(&view));
    // 1.3 snaps to position 5
    assert_eq!(slider.position(), 5);

    slider.step(1);
    assert_eq!(field.get(), 1.5);
    assert_eq!(view.shown.borrow().last(), Some(&6));

    // Stepping past the end stays at the end
    for _ in 0..40 {
        slider.step(1);
    }
    assert_eq!(slider.position(), 20);
    assert_eq!(field.get(), 5.0);
}

#[test]
fn writes_alternating_between_sides_never_loop() {
    let camera = CameraConfig::default();
    let view = Rc::new(CountingSlider::default());
    let slider = SliderBinding::bind(Rc::clone(&camera.fovy_degree), FOVY_DEGREE, Rc::clone(&view));
    let (writes, listener) = counter();
    let _viewer = camera.fovy_degree.subscribe(listener);
    view.shown.borrow_mut().clear();

    let mut expected_writes = 0;
    let mut expected_shows = 0;
    for i in 0..17 {
        if i % 2 == 0 {
            slider.input(i);
        } else {
            camera.fovy_degree.set(15.0 + i as f32 * 5.0);
            expected_shows += 1;
        }
        expected_writes += 1;
        assert_eq!(writes.get(), expected_writes);
        assert_eq!(view.shown.borrow().len(), expected_shows);
    }
}

#[test]
fn text_commit_parses_and_notifies_others() {
    let depth = DepthMapConfig::default();
    let view = Rc::new(CountingText::default());
    let text = TextBinding::bind(Rc::clone(&depth.znear_plane), Rc::clone(&view));
    assert_eq!(*view.shown.borrow(), vec!["15".to_owned()]);

    let (writes, listener) = counter();
    let _viewer = depth.znear_plane.subscribe(listener);

    assert_eq!(text.commit(" 12.5 "), Ok(12.5));
    assert_eq!(depth.znear_plane.get(), 12.5);
    assert_eq!(writes.get(), 1);
    assert_eq!(view.shown.borrow().len(), 1);
}

#[test]
fn text_commit_rejects_garbage_and_keeps_value() {
    let depth = DepthMapConfig::default();
    let view = Rc::new(CountingText::default());
    let text = TextBinding::bind(Rc::clone(&depth.zfar_plane), view);
    let (writes, listener) = counter();
    let _viewer = depth.zfar_plane.subscribe(listener);

    for bad in ["", "abc", "1,5", "--3"] {
        assert!(
            matches!(text.commit(bad), Err(InputError::NotANumber { .. })),
            "{bad:?}"
        );
    }
    for bad in ["inf", "NaN", "-infinity"] {
        assert!(
            matches!(text.commit(bad), Err(InputError::NotFinite { .. })),
            "{bad:?}"
        );
    }
    assert_eq!(depth.zfar_plane.get(), 50.0);
    assert_eq!(writes.get(), 0);
}

#[test]
fn text_box_follows_external_writes() {
    let depth = DepthMapConfig::default();
    let view = Rc::new(CountingText::default());
    let _text = TextBinding::bind(Rc::clone(&depth.zfar_plane), Rc::clone(&view));

    depth.zfar_plane.set(80.25);
    assert_eq!(view.shown.borrow().last().map(String::as_str), Some("80.25"));
}

#[test]
fn format_value_is_plain_decimal() {
    assert_eq!(format_value(15.0), "15");
    assert_eq!(format_value(0.5), "0.5");
    assert_eq!(format_value(-2.25), "-2.25");
}
