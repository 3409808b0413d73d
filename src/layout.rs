//! Layout presets for arranging the preview and the controls.
//!
//! Layouts are cosmetic and orthogonal to the style; only the preset id is
//! stored in [`StyleModel`](crate::StyleModel) so layout changes are undoable.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the preview sits relative to the controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewPlacement {
    Left,
    Right,
    Top,
}

/// How the control panels are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsArrangement {
    Stacked,
    SideBySide,
}

/// A statically defined layout preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub grid_layout: &'static str,
    pub preview_placement: PreviewPlacement,
    pub controls_arrangement: ControlsArrangement,
}

pub static LAYOUTS: [LayoutPreset; 4] = [
    LayoutPreset {
        id: "default",
        name: "Default Layout",
        description: "Preview on the right, controls on the left",
        grid_layout: "md:grid-cols-[2fr_3fr]",
        preview_placement: PreviewPlacement::Right,
        controls_arrangement: ControlsArrangement::Stacked,
    },
    LayoutPreset {
        id: "preview-left",
        name: "Preview Left",
        description: "Preview on the left, controls on the right",
        grid_layout: "md:grid-cols-[3fr_2fr]",
        preview_placement: PreviewPlacement::Left,
        controls_arrangement: ControlsArrangement::Stacked,
    },
    LayoutPreset {
        id: "preview-top",
        name: "Preview Top",
        description: "Preview at the top, controls below",
        grid_layout: "grid-cols-1",
        preview_placement: PreviewPlacement::Top,
        controls_arrangement: ControlsArrangement::SideBySide,
    },
    LayoutPreset {
        id: "wide-preview",
        name: "Wide Preview",
        description: "Large preview with side-by-side controls",
        grid_layout: "grid-cols-1",
        preview_placement: PreviewPlacement::Top,
        controls_arrangement: ControlsArrangement::SideBySide,
    },
];

/// Identifier of the selected layout preset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct LayoutId(String);

impl LayoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the preset, falling back to the default layout for unknown ids.
    pub fn preset(&self) -> &'static LayoutPreset {
        LAYOUTS
            .iter()
            .find(|l| l.id == self.0)
            .unwrap_or(&LAYOUTS[0])
    }
}

impl Default for LayoutId {
    fn default() -> Self {
        Self::new(LAYOUTS[0].id)
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LayoutId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
