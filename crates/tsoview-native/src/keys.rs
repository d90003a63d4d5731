// Keyboard shortcuts, keyed by the DOM-style key names winit reports
// ("a", "1", "ArrowUp", "F12", ...). Kept free of winit types so the mapping
// can be tested on its own.

use tso_config::{MorphRatio, ProjectionMode, RenderMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Render(RenderMode),
    Projection(ProjectionMode),
    /// Nudge the field-of-view slider by this many positions.
    Fovy(i32),
    /// Nudge the roll slider by this many positions.
    Roll(i32),
    /// Nudge one morph slider of the active figure.
    Morph(MorphRatio, i32),
    Capture,
    ToggleRecording,
    SaveScene,
    ShowConfigPanel,
    ShowFigurePanel,
    NextFigure,
    Quit,
}

#[inline]
pub fn render_mode_for_digit(key: &str) -> Option<RenderMode> {
    match key {
        "1" => Some(RenderMode::Main),
        "2" => Some(RenderMode::Ambient),
        "3" => Some(RenderMode::Occlusion),
        "4" => Some(RenderMode::DepthMap),
        "5" => Some(RenderMode::NormalMap),
        "6" => Some(RenderMode::Diffusion),
        "7" => Some(RenderMode::Shadow),
        _ => None,
    }
}

pub fn command_for_key(key: &str) -> Option<Command> {
    if let Some(mode) = render_mode_for_digit(key) {
        return Some(Command::Render(mode));
    }
    match key {
        "p" | "P" => Some(Command::Projection(ProjectionMode::Perspective)),
        "o" | "O" => Some(Command::Projection(ProjectionMode::Ortho)),
        "ArrowUp" => Some(Command::Fovy(1)),
        "ArrowDown" => Some(Command::Fovy(-1)),
        "ArrowRight" => Some(Command::Roll(1)),
        "ArrowLeft" => Some(Command::Roll(-1)),
        "[" => Some(Command::Morph(MorphRatio::Leg, -1)),
        "]" => Some(Command::Morph(MorphRatio::Leg, 1)),
        "F12" => Some(Command::Capture),
        "r" | "R" => Some(Command::ToggleRecording),
        "s" | "S" => Some(Command::SaveScene),
        "Tab" => Some(Command::ShowConfigPanel),
        "f" | "F" => Some(Command::ShowFigurePanel),
        "n" | "N" => Some(Command::NextFigure),
        "Escape" => Some(Command::Quit),
        _ => None,
    }
}
