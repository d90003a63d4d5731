use crate::field::{Field, SharedField};
use std::fmt;

/// Which pass the viewer presents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    #[default]
    Main,
    Ambient,
    Occlusion,
    DepthMap,
    NormalMap,
    Diffusion,
    Shadow,
}

impl RenderMode {
    pub const ALL: [RenderMode; 7] = [
        RenderMode::Main,
        RenderMode::Ambient,
        RenderMode::Occlusion,
        RenderMode::DepthMap,
        RenderMode::NormalMap,
        RenderMode::Diffusion,
        RenderMode::Shadow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RenderMode::Main => "Main",
            RenderMode::Ambient => "Ambient",
            RenderMode::Occlusion => "Occlusion",
            RenderMode::DepthMap => "DepthMap",
            RenderMode::NormalMap => "NormalMap",
            RenderMode::Diffusion => "Diffusion",
            RenderMode::Shadow => "Shadow",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Ortho,
}

impl ProjectionMode {
    pub const ALL: [ProjectionMode; 2] = [ProjectionMode::Perspective, ProjectionMode::Ortho];

    pub fn name(self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "Perspective",
            ProjectionMode::Ortho => "Ortho",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Viewer-owned mode state. The UI only mirrors these fields.
#[derive(Debug, Default)]
pub struct ViewModes {
    pub render: SharedField<RenderMode>,
    pub projection: SharedField<ProjectionMode>,
}

impl ViewModes {
    pub fn new(render: RenderMode, projection: ProjectionMode) -> Self {
        Self {
            render: Field::shared(render),
            projection: Field::shared(projection),
        }
    }
}
