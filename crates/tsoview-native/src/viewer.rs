//! Stand-in viewer: keeps a list of loaded files grouped into figures and
//! draws them as placeholder cards over a ground grid, shaded by the
//! current config records.

use crate::render::{FrameParams, InstanceData, Renderer};
use anyhow::Context;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tso_config::{Configs, MorphValues, Signal, Subscription, ViewModes};
use tsoview::{Figure, FigureRef, TsoFile, TsoFileRef, Viewer, ViewerEvent};

const GRID_HALF_EXTENT: i32 = 4;
const GRID_SPACING: f32 = 4.0;
const FIGURE_SPACING: f32 = 10.0;
const FIGURE_HEIGHT: f32 = 12.0;

const FIGURE_COLORS: [[f32; 4]; 3] = [
    [0.9, 0.55, 0.5, 1.0],
    [0.5, 0.75, 0.9, 1.0],
    [0.6, 0.85, 0.55, 1.0],
];

pub struct SceneFile {
    path: PathBuf,
}

impl TsoFile for SceneFile {
    fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    // File contents are not parsed here, so there are no sub-scripts to list.
    fn sub_scripts(&self) -> Vec<String> {
        Vec::new()
    }
}

pub struct SceneFigure {
    files: RefCell<Vec<Rc<SceneFile>>>,
    ratios: Cell<MorphValues>,
}

impl SceneFigure {
    fn new() -> Self {
        Self {
            files: RefCell::new(Vec::new()),
            ratios: Cell::new(MorphValues::default()),
        }
    }

    fn last_file(&self) -> Option<Rc<SceneFile>> {
        self.files.borrow().last().cloned()
    }
}

impl Figure for SceneFigure {
    fn morph_ratios(&self) -> MorphValues {
        self.ratios.get()
    }

    fn apply_morph_ratios(&self, ratios: &MorphValues) {
        log::debug!("[viewer] morph {:?}", ratios);
        self.ratios.set(*ratios);
    }

    fn tso_files(&self) -> Vec<TsoFileRef> {
        self.files
            .borrow()
            .iter()
            .map(|f| Rc::clone(f) as TsoFileRef)
            .collect()
    }
}

#[derive(Serialize)]
struct SceneSnapshot {
    render_mode: String,
    projection: String,
    fovy_degree: f32,
    roll_degree: f32,
    figures: Vec<Vec<String>>,
}

pub struct FrameViewer {
    renderer: RefCell<Renderer>,
    configs: Configs,
    modes: Rc<ViewModes>,
    events: Signal<ViewerEvent>,
    figures: RefCell<Vec<Rc<SceneFigure>>>,
    active: Cell<Option<usize>>,
    hoho_alpha: f32,
    snapshot_path: PathBuf,
    _mode_log: [Subscription; 2],
}

impl FrameViewer {
    pub fn new(
        renderer: Renderer,
        configs: Configs,
        modes: Rc<ViewModes>,
        hoho_alpha: f32,
        snapshot_path: PathBuf,
    ) -> Self {
        let mode_log = [
            modes
                .render
                .subscribe(|c| log::info!("[viewer] render mode {} -> {}", c.previous, c.value)),
            modes
                .projection
                .subscribe(|c| log::info!("[viewer] projection {} -> {}", c.previous, c.value)),
        ];
        Self {
            renderer: RefCell::new(renderer),
            configs,
            modes,
            events: Signal::new(),
            figures: RefCell::new(Vec::new()),
            active: Cell::new(None),
            hoho_alpha,
            snapshot_path,
            _mode_log: mode_log,
        }
    }

    pub fn resize(&self, size: winit::dpi::PhysicalSize<u32>) {
        self.renderer.borrow_mut().resize(size);
    }

    /// Select the figure at `index` and announce it.
    pub fn select_figure(&self, index: usize) {
        if index >= self.figures.borrow().len() {
            return;
        }
        self.active.set(Some(index));
        self.events.emit(&ViewerEvent::FigureSelected);
        self.events.emit(&ViewerEvent::FileSelected);
    }

    /// Ask the panels to open, as the viewer's own key bindings do.
    pub fn request_panel(&self, request: ViewerEvent) {
        self.events.emit(&request);
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.get()
    }

    pub fn figure_count(&self) -> usize {
        self.figures.borrow().len()
    }

    fn active_scene_figure(&self) -> Option<Rc<SceneFigure>> {
        let index = self.active.get()?;
        self.figures.borrow().get(index).cloned()
    }

    fn frame_params(&self) -> FrameParams {
        let camera = &self.configs.camera;
        let depth = &self.configs.depth_map;
        let occlusion = &self.configs.occlusion;
        let diffusion = &self.configs.diffusion;
        FrameParams {
            fovy_degree: camera.fovy_degree.get(),
            roll_degree: camera.roll_degree.get(),
            znear: depth.znear_plane.get(),
            zfar: depth.zfar_plane.get(),
            projection: self.modes.projection.get(),
            mode: self.modes.render.get(),
            occlusion_intensity: occlusion.intensity.get(),
            occlusion_radius: occlusion.radius.get(),
            diffusion_intensity: diffusion.intensity.get(),
            diffusion_extent: diffusion.extent.get(),
            hoho_alpha: self.hoho_alpha,
        }
    }

    fn instances(&self) -> Vec<InstanceData> {
        let mut out = Vec::new();
        for gx in -GRID_HALF_EXTENT..=GRID_HALF_EXTENT {
            for gz in -GRID_HALF_EXTENT..=GRID_HALF_EXTENT {
                let shade = if (gx + gz).rem_euclid(2) == 0 { 0.55 } else { 0.4 };
                out.push(InstanceData {
                    pos: [gx as f32 * GRID_SPACING, 0.0, gz as f32 * GRID_SPACING],
                    scale: GRID_SPACING,
                    color: [shade, shade, shade, 1.0],
                    upright: 0.0,
                });
            }
        }

        let figures = self.figures.borrow();
        let count = figures.len() as f32;
        for (i, figure) in figures.iter().enumerate() {
            let x = (i as f32 - (count - 1.0) * 0.5) * FIGURE_SPACING;
            // Taller legs make a taller card; enough to see the sliders work
            let legs = figure.ratios.get().leg;
            out.push(InstanceData {
                pos: [x, 0.0, 0.0],
                scale: FIGURE_HEIGHT * (0.8 + 0.4 * legs),
                color: FIGURE_COLORS[i % FIGURE_COLORS.len()],
                upright: 1.0,
            });
        }
        out
    }
}

impl Viewer for FrameViewer {
    fn update_scene(&self) {
        let instances = self.instances();
        self.renderer.borrow_mut().set_instances(&instances);
    }

    fn render_frame(&self) {
        let params = self.frame_params();
        let mut renderer = self.renderer.borrow_mut();
        match renderer.render(&params) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = renderer.window().inner_size();
                renderer.resize(size);
            }
            Err(e) => log::error!("[render] {e}"),
        }
    }

    fn load_file(&self, path: &Path, append: bool) -> anyhow::Result<()> {
        std::fs::metadata(path).with_context(|| format!("cannot open {}", path.display()))?;
        let file = Rc::new(SceneFile {
            path: path.to_path_buf(),
        });

        let index = {
            let mut figures = self.figures.borrow_mut();
            match self.active.get().filter(|_| append) {
                Some(index) if index < figures.len() => {
                    figures[index].files.borrow_mut().push(file);
                    index
                }
                _ => {
                    if !append {
                        figures.clear();
                    }
                    let figure = SceneFigure::new();
                    figure.files.borrow_mut().push(file);
                    figures.push(Rc::new(figure));
                    figures.len() - 1
                }
            }
        };
        log::info!(
            "[viewer] loaded {} into figure {index}",
            path.display()
        );
        self.select_figure(index);
        Ok(())
    }

    fn save_scene_snapshot(&self) -> anyhow::Result<()> {
        let snapshot = SceneSnapshot {
            render_mode: self.modes.render.get().to_string(),
            projection: self.modes.projection.get().to_string(),
            fovy_degree: self.configs.camera.fovy_degree.get(),
            roll_degree: self.configs.camera.roll_degree.get(),
            figures: self
                .figures
                .borrow()
                .iter()
                .map(|f| {
                    f.files
                        .borrow()
                        .iter()
                        .map(|file| file.path.display().to_string())
                        .collect()
                })
                .collect(),
        };
        let text = toml::to_string_pretty(&snapshot)?;
        std::fs::write(&self.snapshot_path, text)
            .with_context(|| format!("failed to write {}", self.snapshot_path.display()))?;
        log::info!("[viewer] saved scene to {}", self.snapshot_path.display());
        Ok(())
    }

    fn capture_screenshot(&self, path: &Path) -> anyhow::Result<()> {
        let params = self.frame_params();
        self.renderer.borrow().capture(&params, path)
    }

    fn active_figure(&self) -> Option<FigureRef> {
        self.active_scene_figure().map(|f| f as FigureRef)
    }

    fn active_tso_file(&self) -> Option<TsoFileRef> {
        self.active_scene_figure()
            .and_then(|f| f.last_file())
            .map(|f| f as TsoFileRef)
    }

    fn modes(&self) -> Rc<ViewModes> {
        Rc::clone(&self.modes)
    }

    fn events(&self) -> &Signal<ViewerEvent> {
        &self.events
    }
}
