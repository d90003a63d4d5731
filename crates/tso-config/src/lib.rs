pub mod constants;
pub mod entities;
pub mod field;
pub mod modes;
pub mod quantize;
pub mod settings;

pub use constants::*;
pub use entities::*;
pub use field::*;
pub use modes::*;
pub use quantize::{ControlRange, Mapping, Quantizer};
pub use settings::*;
