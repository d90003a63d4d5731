//! Mappings between physical config values and integer control positions.
//!
//! Sliders only move in whole steps, so every slider-backed field has a
//! [`Quantizer`]: `dequantize` turns a slider position into the physical
//! value, `quantize` snaps a physical value back onto the nearest position.
//! `quantize(dequantize(q)) == q` holds for every position in range; the
//! physical side is lossy (47° of field of view displays as 45°).

/// Inclusive range of integer control positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlRange {
    pub min: i32,
    pub max: i32,
}

impl ControlRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, position: i32) -> i32 {
        position.clamp(self.min, self.max)
    }

    pub fn contains(&self, position: i32) -> bool {
        (self.min..=self.max).contains(&position)
    }

    pub fn positions(&self) -> std::ops::RangeInclusive<i32> {
        self.min..=self.max
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mapping {
    /// `origin + position * step`
    Linear { origin: f32, step: f32 },
    /// `position / divisions`
    Fraction { divisions: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantizer {
    pub mapping: Mapping,
    pub range: ControlRange,
}

impl Quantizer {
    pub const fn linear(origin: f32, step: f32, range: ControlRange) -> Self {
        Self {
            mapping: Mapping::Linear { origin, step },
            range,
        }
    }

    pub const fn fraction(divisions: f32, range: ControlRange) -> Self {
        Self {
            mapping: Mapping::Fraction { divisions },
            range,
        }
    }

    /// Control position to physical value. Positions outside the range are
    /// mapped as-is.
    pub fn dequantize(&self, position: i32) -> f32 {
        match self.mapping {
            Mapping::Linear { origin, step } => position as f32 * step + origin,
            Mapping::Fraction { divisions } => position as f32 / divisions,
        }
    }

    /// Physical value to the nearest control position, clamped into range.
    /// Halves round away from zero; NaN snaps to the range minimum.
    pub fn quantize(&self, value: f32) -> i32 {
        let raw = match self.mapping {
            Mapping::Linear { origin, step } => ((value - origin) / step).round(),
            Mapping::Fraction { divisions } => (value * divisions).round(),
        };
        if raw.is_nan() {
            return self.range.min;
        }
        // `as` saturates, so infinities land on the range ends after clamping.
        self.range.clamp(raw as i32)
    }

    /// Snap a physical value onto the representable grid.
    pub fn snap(&self, value: f32) -> f32 {
        self.dequantize(self.quantize(value))
    }
}

/// Camera field of view: 15°..=100° in 5° steps.
pub const FOVY_DEGREE: Quantizer = Quantizer::linear(15.0, 5.0, ControlRange::new(0, 17));
/// Camera roll: 0°..=100° in 5° steps.
pub const ROLL_DEGREE: Quantizer = Quantizer::linear(0.0, 5.0, ControlRange::new(0, 20));
/// Ambient occlusion intensity: 0..=1 in 1/20 steps.
pub const OCCLUSION_INTENSITY: Quantizer = Quantizer::fraction(20.0, ControlRange::new(0, 20));
/// Ambient occlusion sample radius: 0..=5 in 1/4 steps.
pub const OCCLUSION_RADIUS: Quantizer = Quantizer::fraction(4.0, ControlRange::new(0, 20));
/// Diffusion intensity: 0..=1 in 1/20 steps.
pub const DIFFUSION_INTENSITY: Quantizer = Quantizer::fraction(20.0, ControlRange::new(0, 20));
/// Diffusion extent: 0..=2 in 1/10 steps.
pub const DIFFUSION_EXTENT: Quantizer = Quantizer::fraction(10.0, ControlRange::new(0, 20));

/// Upper bound of the morph sliders.
pub const MORPH_CONTROL_MAX: i32 = 20;

/// Morph ratio 0..=1 over a slider whose upper bound is `control_max`.
pub fn morph(control_max: i32) -> Quantizer {
    let control_max = control_max.max(1);
    Quantizer::fraction(control_max as f32, ControlRange::new(0, control_max))
}
