//! Config records shared between the control panels and the viewer.
//!
//! Records do not validate ranges; whatever is written is stored. Range
//! enforcement happens when a value is snapped onto a slider (see
//! [`crate::quantize`]).

use crate::constants::*;
use crate::field::{Field, SharedField};
use crate::settings::Settings;
use std::rc::Rc;

#[derive(Debug)]
pub struct CameraConfig {
    pub fovy_degree: SharedField<f32>,
    pub roll_degree: SharedField<f32>,
}

impl CameraConfig {
    pub fn new(fovy_degree: f32) -> Self {
        Self {
            fovy_degree: Field::shared(fovy_degree),
            roll_degree: Field::shared(DEFAULT_ROLL_DEGREE),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FOVY_DEGREE)
    }
}

/// Clip planes used when rendering the depth map. `zfar_plane` is expected to
/// exceed `znear_plane`, but nothing enforces it.
#[derive(Debug)]
pub struct DepthMapConfig {
    pub znear_plane: SharedField<f32>,
    pub zfar_plane: SharedField<f32>,
}

impl Default for DepthMapConfig {
    fn default() -> Self {
        Self {
            znear_plane: Field::shared(DEFAULT_ZNEAR_PLANE),
            zfar_plane: Field::shared(DEFAULT_ZFAR_PLANE),
        }
    }
}

#[derive(Debug)]
pub struct OcclusionConfig {
    pub intensity: SharedField<f32>,
    pub radius: SharedField<f32>,
}

impl Default for OcclusionConfig {
    fn default() -> Self {
        Self {
            intensity: Field::shared(DEFAULT_OCCLUSION_INTENSITY),
            radius: Field::shared(DEFAULT_OCCLUSION_RADIUS),
        }
    }
}

#[derive(Debug)]
pub struct DiffusionConfig {
    pub intensity: SharedField<f32>,
    pub extent: SharedField<f32>,
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self {
            intensity: Field::shared(DEFAULT_DIFFUSION_INTENSITY),
            extent: Field::shared(DEFAULT_DIFFUSION_EXTENT),
        }
    }
}

/// The four render-parameter records, created once by the composition root
/// and handed to both the viewer and the config panel.
#[derive(Clone, Debug, Default)]
pub struct Configs {
    pub camera: Rc<CameraConfig>,
    pub depth_map: Rc<DepthMapConfig>,
    pub occlusion: Rc<OcclusionConfig>,
    pub diffusion: Rc<DiffusionConfig>,
}

impl Configs {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            camera: Rc::new(CameraConfig::new(settings.fovy)),
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MorphRatio {
    Arm,
    Leg,
    Waist,
    Oppai,
    Age,
    Eye,
}

impl MorphRatio {
    pub const ALL: [MorphRatio; 6] = [
        MorphRatio::Arm,
        MorphRatio::Leg,
        MorphRatio::Waist,
        MorphRatio::Oppai,
        MorphRatio::Age,
        MorphRatio::Eye,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MorphRatio::Arm => "arm",
            MorphRatio::Leg => "leg",
            MorphRatio::Waist => "waist",
            MorphRatio::Oppai => "oppai",
            MorphRatio::Age => "age",
            MorphRatio::Eye => "eye",
        }
    }
}

/// Plain copy of the six morph ratios, as handed to a figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphValues {
    pub arm: f32,
    pub leg: f32,
    pub waist: f32,
    pub oppai: f32,
    pub age: f32,
    pub eye: f32,
}

impl MorphValues {
    pub fn get(&self, which: MorphRatio) -> f32 {
        match which {
            MorphRatio::Arm => self.arm,
            MorphRatio::Leg => self.leg,
            MorphRatio::Waist => self.waist,
            MorphRatio::Oppai => self.oppai,
            MorphRatio::Age => self.age,
            MorphRatio::Eye => self.eye,
        }
    }

    pub fn set(&mut self, which: MorphRatio, value: f32) {
        let slot = match which {
            MorphRatio::Arm => &mut self.arm,
            MorphRatio::Leg => &mut self.leg,
            MorphRatio::Waist => &mut self.waist,
            MorphRatio::Oppai => &mut self.oppai,
            MorphRatio::Age => &mut self.age,
            MorphRatio::Eye => &mut self.eye,
        };
        *slot = value;
    }
}

impl Default for MorphValues {
    fn default() -> Self {
        Self {
            arm: DEFAULT_MORPH_RATIO,
            leg: DEFAULT_MORPH_RATIO,
            waist: DEFAULT_MORPH_RATIO,
            oppai: DEFAULT_MORPH_RATIO,
            age: DEFAULT_MORPH_RATIO,
            eye: DEFAULT_MORPH_RATIO,
        }
    }
}

/// Observable morph ratios of the figure being edited.
#[derive(Debug)]
pub struct MorphRatios {
    arm: SharedField<f32>,
    leg: SharedField<f32>,
    waist: SharedField<f32>,
    oppai: SharedField<f32>,
    age: SharedField<f32>,
    eye: SharedField<f32>,
}

impl MorphRatios {
    pub fn new(values: MorphValues) -> Self {
        Self {
            arm: Field::shared(values.arm),
            leg: Field::shared(values.leg),
            waist: Field::shared(values.waist),
            oppai: Field::shared(values.oppai),
            age: Field::shared(values.age),
            eye: Field::shared(values.eye),
        }
    }

    pub fn field(&self, which: MorphRatio) -> &SharedField<f32> {
        match which {
            MorphRatio::Arm => &self.arm,
            MorphRatio::Leg => &self.leg,
            MorphRatio::Waist => &self.waist,
            MorphRatio::Oppai => &self.oppai,
            MorphRatio::Age => &self.age,
            MorphRatio::Eye => &self.eye,
        }
    }

    pub fn values(&self) -> MorphValues {
        let mut values = MorphValues::default();
        for which in MorphRatio::ALL {
            values.set(which, self.field(which).get());
        }
        values
    }
}

impl Default for MorphRatios {
    fn default() -> Self {
        Self::new(MorphValues::default())
    }
}
