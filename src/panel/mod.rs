mod config;
mod figure;

pub use config::ConfigPanel;
pub use figure::FigurePanel;

use crate::binding::{SliderBinding, SliderState};
use std::rc::Rc;
use tso_config::{Quantizer, SharedField};

fn slider(field: &SharedField<f32>, quantizer: Quantizer) -> SliderBinding<SliderState> {
    SliderBinding::bind(
        Rc::clone(field),
        quantizer,
        Rc::new(SliderState::new(quantizer.range)),
    )
}
