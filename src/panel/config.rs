use super::slider;
use crate::binding::{SliderBinding, SliderState, TextBinding, TextState};
use crate::selection::{SelectionGroup, SelectionState};
use std::cell::Cell;
use std::rc::Rc;
use tso_config::quantize::{
    DIFFUSION_EXTENT, DIFFUSION_INTENSITY, FOVY_DEGREE, OCCLUSION_INTENSITY, OCCLUSION_RADIUS,
    ROLL_DEGREE,
};
use tso_config::{Configs, ProjectionMode, RenderMode, ViewModes};

/// Render-parameter panel: camera, depth map, occlusion and diffusion
/// controls plus the projection and render mode groups.
pub struct ConfigPanel {
    visible: Cell<bool>,
    pub fovy: SliderBinding<SliderState>,
    pub roll: SliderBinding<SliderState>,
    pub znear: TextBinding<TextState>,
    pub zfar: TextBinding<TextState>,
    pub occlusion_intensity: SliderBinding<SliderState>,
    pub occlusion_radius: SliderBinding<SliderState>,
    pub diffusion_intensity: SliderBinding<SliderState>,
    pub diffusion_extent: SliderBinding<SliderState>,
    pub projection: SelectionGroup<ProjectionMode, SelectionState<ProjectionMode>>,
    pub render: SelectionGroup<RenderMode, SelectionState<RenderMode>>,
}

impl ConfigPanel {
    pub fn new(configs: &Configs, modes: &ViewModes) -> Self {
        let camera = &configs.camera;
        let depth = &configs.depth_map;
        let occlusion = &configs.occlusion;
        let diffusion = &configs.diffusion;
        Self {
            visible: Cell::new(false),
            fovy: slider(&camera.fovy_degree, FOVY_DEGREE),
            roll: slider(&camera.roll_degree, ROLL_DEGREE),
            znear: TextBinding::bind(Rc::clone(&depth.znear_plane), Rc::new(TextState::default())),
            zfar: TextBinding::bind(Rc::clone(&depth.zfar_plane), Rc::new(TextState::default())),
            occlusion_intensity: slider(&occlusion.intensity, OCCLUSION_INTENSITY),
            occlusion_radius: slider(&occlusion.radius, OCCLUSION_RADIUS),
            diffusion_intensity: slider(&diffusion.intensity, DIFFUSION_INTENSITY),
            diffusion_extent: slider(&diffusion.extent, DIFFUSION_EXTENT),
            projection: SelectionGroup::bind(
                Rc::clone(&modes.projection),
                &ProjectionMode::ALL,
                Rc::new(SelectionState::default()),
            ),
            render: SelectionGroup::bind(
                Rc::clone(&modes.render),
                &RenderMode::ALL,
                Rc::new(SelectionState::default()),
            ),
        }
    }

    pub fn show(&self) {
        self.visible.set(true);
    }

    pub fn hide(&self) {
        self.visible.set(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// One-line readout of what the panel currently displays.
    pub fn summary(&self) -> String {
        format!(
            "fovy={} roll={} znear={} zfar={} ao=({}, {}) df=({}, {}) projection={} render={}",
            self.fovy.view().position(),
            self.roll.view().position(),
            self.znear.view().text(),
            self.zfar.view().text(),
            self.occlusion_intensity.view().position(),
            self.occlusion_radius.view().position(),
            self.diffusion_intensity.view().position(),
            self.diffusion_extent.view().position(),
            shown(self.projection.view().selected()),
            shown(self.render.view().selected()),
        )
    }
}

fn shown<M: std::fmt::Display>(selected: Option<M>) -> String {
    selected.map_or_else(|| "-".to_owned(), |m| m.to_string())
}
