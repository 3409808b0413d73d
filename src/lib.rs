//! logo-forge: undoable logo and favicon design with multi-format export
//!
//! A design is a [`StyleModel`]: one subject (icon or short text) over a
//! styled background. [`DesignState`] applies [`Action`]s to it through an
//! undo/redo [`History`]; [`Surface`] projects the present model into a
//! renderable description; [`ExportPipeline`] turns the mounted preview
//! into a PNG, a self-contained SVG or a zipped favicon package.
//!
//! # Example
//!
//! ```
//! use logo_forge::{Action, DesignState, IconRef, IconStylePatch};
//!
//! let mut state = DesignState::new();
//! state.dispatch(Action::SetIcon(IconRef::from("Heart")));
//! state.dispatch(Action::UpdateIconStyle(IconStylePatch {
//!     rotation_degrees: Some(15.0),
//!     ..Default::default()
//! }));
//! assert!(state.can_undo());
//!
//! state.undo();
//! state.redo();
//! assert_eq!(state.present().icon_style().unwrap().rotation_degrees, 15.0);
//! ```
//!
//! # Exporting
//!
//! Exports run against a [`PreviewHost`] holding the live surface; each
//! request works on a detached copy so the preview is never disturbed:
//!
//! ```no_run
//! use logo_forge::{
//!     DesignState, ExportFormat, ExportPipeline, ExportRequest, IconCatalog, PreviewHost,
//!     SizePx, Surface,
//! };
//!
//! let state = DesignState::new();
//! let mut host = PreviewHost::new();
//! host.mount(Surface::project(state.present(), IconCatalog::global(), SizePx::square(320)));
//!
//! let request = ExportRequest::new(ExportFormat::IconBundle).with_browser_config(false);
//! match ExportPipeline::new().export(&host, &request) {
//!     Ok(artifact) => println!("{} ({} bytes)", artifact.filename, artifact.bytes.len()),
//!     Err(failure) => eprintln!("{}", failure.message()),
//! }
//! ```
//!
//! # Searching icons
//!
//! ```
//! use logo_forge::IconSearch;
//!
//! let names = IconSearch::global().names("arow");
//! assert!(names.iter().any(|name| name.starts_with("Arrow")));
//! ```

mod color;
mod engine;
mod error;
mod geometry;
mod history;
mod icon;
mod layout;
mod palettes;
mod search;
mod shortcuts;
mod style;

pub mod export;
pub mod surface;

pub use color::Color;
pub use engine::{Action, DesignState, transition};
pub use error::{ExportError, ExportFailure, ParseError};
pub use export::{
    Artifact, DetachedSurface, ExportFormat, ExportPipeline, ExportRequest, FormatHandler,
    PreviewHost, Rasterizer, ResvgRasterizer,
};
pub use geometry::{RectPx, SizePx, letterbox};
pub use history::{History, HistoryConfig};
pub use icon::{ICON_GRID, IconCatalog, IconCategory, IconDef, SEARCH_SUGGESTIONS};
pub use layout::{ControlsArrangement, LAYOUTS, LayoutId, LayoutPreset, PreviewPlacement};
pub use palettes::{ColorPalette, PALETTES, PaletteColors, default_palette, find_palette};
pub use search::{IconSearch, SIMILARITY_THRESHOLD, SearchHit};
pub use shortcuts::{
    KeyEvent, KeyOutcome, Shortcut, ShortcutRegistry, Subscription, bind_design_state,
};
pub use style::{
    BackgroundPatch, BackgroundStyle, CornerRadius, FontFamily, GradientDirection, IconRef,
    IconStyle, IconStylePatch, MAX_TEXT_CHARS, ShadowLevel, Subject, SubjectKind, StyleModel,
    TextStyle, TextStylePatch,
};
pub use surface::{Content, Fill, PREVIEW_SIZE, Surface};
