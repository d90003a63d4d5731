//! Composition root: owns the config records and the panels, and wires the
//! panels to the viewer's notifications.

use crate::capture;
use crate::panel::{ConfigPanel, FigurePanel};
use crate::viewer::{Viewer, ViewerEvent};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tso_config::quantize::MORPH_CONTROL_MAX;
use tso_config::{Configs, Settings, Subscription};

pub struct App {
    viewer: Rc<dyn Viewer>,
    configs: Configs,
    config_panel: Rc<ConfigPanel>,
    figure_panel: Rc<FigurePanel>,
    capture_dir: PathBuf,
    record_step: u64,
    recording: Cell<bool>,
    recorded_ticks: Cell<u64>,
    _viewer_events: Subscription,
}

impl App {
    /// `configs` must be the same records the viewer renders from.
    pub fn new(viewer: Rc<dyn Viewer>, configs: Configs, settings: &Settings) -> Self {
        let modes = viewer.modes();
        let config_panel = Rc::new(ConfigPanel::new(&configs, &modes));
        let scene = Rc::downgrade(&viewer);
        let figure_panel = Rc::new(FigurePanel::new(MORPH_CONTROL_MAX, move || {
            if let Some(viewer) = scene.upgrade() {
                viewer.update_scene();
            }
        }));
        figure_panel.set_figure(viewer.active_figure());
        figure_panel.set_tso_file(viewer.active_tso_file());

        let source = Rc::downgrade(&viewer);
        let config = Rc::clone(&config_panel);
        let figure = Rc::clone(&figure_panel);
        let viewer_events = viewer.events().subscribe(move |event| {
            let Some(viewer) = source.upgrade() else {
                return;
            };
            match event {
                ViewerEvent::FigureSelected => figure.set_figure(viewer.active_figure()),
                ViewerEvent::FileSelected => figure.set_tso_file(viewer.active_tso_file()),
                ViewerEvent::ConfigPanelRequested => config.show(),
                ViewerEvent::FigurePanelRequested => figure.show(),
            }
        });

        Self {
            viewer,
            configs,
            config_panel,
            figure_panel,
            capture_dir: PathBuf::from("."),
            record_step: u64::from(settings.record_step()),
            recording: Cell::new(false),
            recorded_ticks: Cell::new(0),
            _viewer_events: viewer_events,
        }
    }

    pub fn with_capture_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.capture_dir = dir.into();
        self
    }

    /// Load files given on the command line. The first replaces the scene,
    /// the rest are appended. Stops at the first failure.
    pub fn open<P: AsRef<Path>>(&self, paths: &[P]) -> anyhow::Result<()> {
        for (i, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            log::info!("[app] loading {}", path.display());
            self.viewer.load_file(path, i > 0)?;
        }
        Ok(())
    }

    /// One update/render step; captures a frame every `record_step` ticks
    /// while recording.
    pub fn tick(&self) {
        self.viewer.update_scene();
        self.viewer.render_frame();

        if !self.recording.get() {
            return;
        }
        let n = self.recorded_ticks.get();
        self.recorded_ticks.set(n + 1);
        if n % self.record_step == 0 {
            if let Err(e) = self.capture() {
                log::error!("[record] capture failed, stopping: {e:#}");
                self.recording.set(false);
            }
        }
    }

    /// Screenshot named after the current time and render mode.
    pub fn capture(&self) -> anyhow::Result<PathBuf> {
        let mode = self.viewer.modes().render.get();
        let path = self.capture_dir.join(capture::file_name_now(Some(mode)));
        self.viewer.capture_screenshot(&path)?;
        log::info!("[capture] {}", path.display());
        Ok(path)
    }

    /// Returns whether recording is now on.
    pub fn toggle_recording(&self) -> bool {
        let on = !self.recording.get();
        self.recording.set(on);
        self.recorded_ticks.set(0);
        log::info!(
            "[record] {} (every {} frames)",
            if on { "started" } else { "stopped" },
            self.record_step
        );
        on
    }

    pub fn is_recording(&self) -> bool {
        self.recording.get()
    }

    pub fn save_scene(&self) -> anyhow::Result<()> {
        self.viewer.save_scene_snapshot()
    }

    pub fn viewer(&self) -> &Rc<dyn Viewer> {
        &self.viewer
    }

    pub fn configs(&self) -> &Configs {
        &self.configs
    }

    pub fn config_panel(&self) -> &ConfigPanel {
        &self.config_panel
    }

    pub fn figure_panel(&self) -> &FigurePanel {
        &self.figure_panel
    }
}
