//! Collaborator interfaces of the rendering engine and the figure library.
//!
//! Collaborators are shared, single-threaded handles (`Rc<dyn ..>`), so their
//! methods take `&self` and keep their own interior state. Implementations
//! must not hold internal borrows while emitting on [`Viewer::events`]:
//! listeners call straight back into the viewer.

use std::path::Path;
use std::rc::Rc;
use tso_config::{MorphValues, Signal, ViewModes};

/// Notifications the viewer raises towards the panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The active figure changed (selection or scene load).
    FigureSelected,
    /// The active TSO file of the active figure changed.
    FileSelected,
    ConfigPanelRequested,
    FigurePanelRequested,
}

/// A figure part file.
pub trait TsoFile {
    fn name(&self) -> String;
    fn sub_scripts(&self) -> Vec<String>;
}

pub type TsoFileRef = Rc<dyn TsoFile>;

/// A posed, morphable figure.
pub trait Figure {
    fn morph_ratios(&self) -> MorphValues;
    /// Re-pose the figure for `ratios`.
    fn apply_morph_ratios(&self, ratios: &MorphValues);
    fn tso_files(&self) -> Vec<TsoFileRef>;
}

pub type FigureRef = Rc<dyn Figure>;

/// The rendering engine.
pub trait Viewer {
    fn update_scene(&self);
    fn render_frame(&self);
    /// Load a figure, pose or scene file. With `append` the file is added to
    /// the current scene instead of replacing it.
    fn load_file(&self, path: &Path, append: bool) -> anyhow::Result<()>;
    fn save_scene_snapshot(&self) -> anyhow::Result<()>;
    fn capture_screenshot(&self, path: &Path) -> anyhow::Result<()>;
    fn active_figure(&self) -> Option<FigureRef>;
    fn active_tso_file(&self) -> Option<TsoFileRef>;
    /// Render and projection modes; owned by the viewer.
    fn modes(&self) -> Rc<ViewModes>;
    fn events(&self) -> &Signal<ViewerEvent>;
}
