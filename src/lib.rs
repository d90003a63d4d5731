//! Control panels for the TSO figure viewer.
//!
//! The viewer renders from shared config records; this crate keeps the
//! panel controls and those records in step (see [`binding`]), mirrors the
//! viewer's render/projection modes (see [`selection`]), and names
//! screenshots (see [`capture`]).

pub mod app;
pub mod binding;
pub mod capture;
pub mod panel;
pub mod selection;
pub mod viewer;

pub use app::App;
pub use binding::{
    InputError, SliderBinding, SliderState, SliderView, TextBinding, TextState, TextView,
};
pub use panel::{ConfigPanel, FigurePanel};
pub use selection::{SelectionGroup, SelectionState, SelectionView};
pub use viewer::{Figure, FigureRef, TsoFile, TsoFileRef, Viewer, ViewerEvent};

pub use tso_config;
