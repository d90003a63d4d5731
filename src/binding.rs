//! Two-way bindings between panel controls and config fields.
//!
//! A binding owns both directions of one control/field pair. Control input is
//! written with [`Field::set_from`] under the binding's own subscriber id, so
//! the field notifies every other listener (the viewer, other panels) but not
//! the binding. Field changes from anyone else are pushed into the control's
//! display through [`SliderView::show_position`] / [`TextView::show_text`],
//! which never raise control input. Neither direction can come back around.

use std::cell::{Cell, RefCell};
use std::num::ParseFloatError;
use std::rc::Rc;
use thiserror::Error;
use tso_config::{ControlRange, Field, Quantizer, SharedField, Subscription};

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("not a number: {text:?}")]
    NotANumber {
        text: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("not a finite value: {text:?}")]
    NotFinite { text: String },
}

/// Display side of a slider. Implemented by the host toolkit.
pub trait SliderView {
    /// Move the thumb without raising an input event.
    fn show_position(&self, position: i32);
}

/// Display side of a single-line numeric text box.
pub trait TextView {
    /// Replace the displayed text without raising an input event.
    fn show_text(&self, text: &str);
}

/// Headless slider model: the position and range a toolkit would paint.
#[derive(Debug)]
pub struct SliderState {
    range: ControlRange,
    position: Cell<i32>,
}

impl SliderState {
    pub fn new(range: ControlRange) -> Self {
        Self {
            range,
            position: Cell::new(range.min),
        }
    }

    pub fn position(&self) -> i32 {
        self.position.get()
    }

    pub fn range(&self) -> ControlRange {
        self.range
    }
}

impl SliderView for SliderState {
    fn show_position(&self, position: i32) {
        self.position.set(position);
    }
}

#[derive(Debug, Default)]
pub struct TextState {
    text: RefCell<String>,
}

impl TextState {
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl TextView for TextState {
    fn show_text(&self, text: &str) {
        let mut current = self.text.borrow_mut();
        current.clear();
        current.push_str(text);
    }
}

/// Slider bound to a float field through a [`Quantizer`].
pub struct SliderBinding<V> {
    field: SharedField<f32>,
    quantizer: Quantizer,
    view: Rc<V>,
    subscription: Subscription,
}

impl<V: SliderView + 'static> SliderBinding<V> {
    /// Bind and show the field's current value on the slider. The field is
    /// not written.
    pub fn bind(field: SharedField<f32>, quantizer: Quantizer, view: Rc<V>) -> Self {
        view.show_position(quantizer.quantize(field.get()));
        let display = Rc::clone(&view);
        let subscription = field.subscribe(move |change| {
            display.show_position(quantizer.quantize(change.value));
        });
        Self {
            field,
            quantizer,
            view,
            subscription,
        }
    }

    /// Slider moved by the user. Returns whether the field changed.
    pub fn input(&self, position: i32) -> bool {
        let position = self.quantizer.range.clamp(position);
        let value = self.quantizer.dequantize(position);
        self.field.set_from(value, self.subscription.id())
    }

    /// Move the slider `delta` positions from where the field currently sits,
    /// as a keyboard nudge would, and show the result.
    pub fn step(&self, delta: i32) -> bool {
        let target = self.quantizer.range.clamp(self.position() + delta);
        let changed = self.input(target);
        self.view.show_position(target);
        changed
    }

    /// Position the field's current value snaps to.
    pub fn position(&self) -> i32 {
        self.quantizer.quantize(self.field.get())
    }

    pub fn value(&self) -> f32 {
        self.field.get()
    }

    pub fn quantizer(&self) -> Quantizer {
        self.quantizer
    }

    pub fn field(&self) -> &Field<f32> {
        &self.field
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Free-form decimal text box bound to a float field.
pub struct TextBinding<V> {
    field: SharedField<f32>,
    view: Rc<V>,
    subscription: Subscription,
}

impl<V: TextView + 'static> TextBinding<V> {
    pub fn bind(field: SharedField<f32>, view: Rc<V>) -> Self {
        view.show_text(&format_value(field.get()));
        let display = Rc::clone(&view);
        let subscription = field.subscribe(move |change| {
            display.show_text(&format_value(change.value));
        });
        Self {
            field,
            view,
            subscription,
        }
    }

    /// Text edited by the user. Text that is not a finite decimal number is
    /// rejected and the field keeps its value; the view is left as typed.
    pub fn commit(&self, text: &str) -> Result<f32, InputError> {
        let value = parse_value(text)?;
        self.field.set_from(value, self.subscription.id());
        Ok(value)
    }

    pub fn value(&self) -> f32 {
        self.field.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

fn parse_value(text: &str) -> Result<f32, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(InputError::NotFinite {
            text: text.to_owned(),
        }),
        Err(source) => Err(InputError::NotANumber {
            text: text.to_owned(),
            source,
        }),
    }
}

pub fn format_value(value: f32) -> String {
    format!("{value}")
}
