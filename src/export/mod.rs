//! Export pipeline: turns the mounted preview into a downloadable artifact.
//!
//! Every export works on a [`DetachedSurface`], a private copy of the
//! preview re-sized to the requested target. The copy is released when the
//! guard drops, on success and on every error path alike, and the mounted
//! preview is never touched.
//!
//! # Example
//!
//! ```no_run
//! use logo_forge::{
//!     ExportFormat, ExportPipeline, ExportRequest, IconCatalog, PreviewHost, SizePx,
//!     StyleModel, Surface,
//! };
//!
//! let model = StyleModel::default();
//! let mut host = PreviewHost::new();
//! host.mount(Surface::project(&model, IconCatalog::global(), SizePx::square(320)));
//!
//! let pipeline = ExportPipeline::new();
//! let artifact = pipeline.export(&host, &ExportRequest::new(ExportFormat::Vector)).unwrap();
//! assert_eq!(artifact.filename, "logo.svg");
//! ```

pub mod bundle;
pub mod raster;
pub mod vector;

pub use bundle::{BUNDLE_SIZES, BundleHandler};
pub use raster::{RasterHandler, Rasterizer, ResvgRasterizer, SUPERSAMPLE};
pub use vector::VectorHandler;

use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::{ExportError, ExportFailure};
use crate::geometry::SizePx;
use crate::surface::{PREVIEW_SIZE, Surface};

// ============================================================================
// Requests and artifacts
// ============================================================================

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum ExportFormat {
    #[serde(alias = "png")]
    Raster,
    #[serde(alias = "svg")]
    Vector,
    #[serde(alias = "favicon-package")]
    IconBundle,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Raster, Self::Vector, Self::IconBundle];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raster => "raster",
            Self::Vector => "vector",
            Self::IconBundle => "icon-bundle",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raster" | "png" => Ok(Self::Raster),
            "vector" | "svg" => Ok(Self::Vector),
            "icon-bundle" | "favicon-package" => Ok(Self::IconBundle),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// What to export and at which size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// Edge length in logical pixels; defaults to 320.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_size: Option<u32>,
    /// Icon bundle only; defaults to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_manifest: Option<bool>,
    /// Icon bundle only; defaults to true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_browser_config: Option<bool>,
}

impl ExportRequest {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            target_size: None,
            include_manifest: None,
            include_browser_config: None,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.target_size = Some(size);
        self
    }

    pub fn with_manifest(mut self, include: bool) -> Self {
        self.include_manifest = Some(include);
        self
    }

    pub fn with_browser_config(mut self, include: bool) -> Self {
        self.include_browser_config = Some(include);
        self
    }

    pub fn size(&self) -> u32 {
        self.target_size.unwrap_or(PREVIEW_SIZE)
    }

    pub fn manifest(&self) -> bool {
        self.include_manifest.unwrap_or(true)
    }

    pub fn browser_config(&self) -> bool {
        self.include_browser_config.unwrap_or(true)
    }
}

/// A finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Writes the artifact into `dir` under its own filename.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> std::io::Result<PathBuf> {
        let path = dir.as_ref().join(self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

// ============================================================================
// Preview host and detached clones
// ============================================================================

/// Owns the live preview surface and hands out detached copies for export.
#[derive(Debug, Default)]
pub struct PreviewHost {
    surface: Option<Surface>,
    live_clones: Arc<AtomicUsize>,
}

impl PreviewHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts (or replaces) the live preview.
    pub fn mount(&mut self, surface: Surface) {
        self.surface = Some(surface);
    }

    pub fn unmount(&mut self) -> Option<Surface> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Copies the live preview at `viewport`. The copy is counted until its
    /// guard drops.
    pub fn detach(&self, viewport: SizePx) -> Result<DetachedSurface, ExportError> {
        let surface = self
            .surface
            .as_ref()
            .ok_or(ExportError::MissingRenderTarget)?
            .with_viewport(viewport);
        self.live_clones.fetch_add(1, Ordering::SeqCst);
        Ok(DetachedSurface {
            surface,
            live_clones: Arc::clone(&self.live_clones),
        })
    }

    /// Number of detached copies that have not been released yet.
    pub fn live_clones(&self) -> usize {
        self.live_clones.load(Ordering::SeqCst)
    }
}

/// A private, re-sized copy of the preview. Released on drop.
#[derive(Debug)]
pub struct DetachedSurface {
    surface: Surface,
    live_clones: Arc<AtomicUsize>,
}

impl Deref for DetachedSurface {
    type Target = Surface;

    fn deref(&self) -> &Surface {
        &self.surface
    }
}

impl Drop for DetachedSurface {
    fn drop(&mut self) {
        self.live_clones.fetch_sub(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Handlers and pipeline
// ============================================================================

/// Produces one artifact format from a sized surface.
pub trait FormatHandler {
    fn format(&self) -> ExportFormat;

    fn export(&self, surface: &Surface, request: &ExportRequest) -> Result<Artifact, ExportError>;
}

/// Routes export requests to the format handlers.
#[derive(Debug, Clone, Default)]
pub struct ExportPipeline<R: Rasterizer = ResvgRasterizer> {
    rasterizer: R,
}

impl ExportPipeline<ResvgRasterizer> {
    /// A pipeline backed by resvg with the system fonts loaded.
    pub fn new() -> Self {
        Self::with_rasterizer(ResvgRasterizer::new())
    }
}

impl<R: Rasterizer> ExportPipeline<R> {
    pub fn with_rasterizer(rasterizer: R) -> Self {
        Self { rasterizer }
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    fn handler(&self, format: ExportFormat) -> Box<dyn FormatHandler + '_> {
        match format {
            ExportFormat::Raster => Box::new(RasterHandler::new(&self.rasterizer)),
            ExportFormat::Vector => Box::new(VectorHandler),
            ExportFormat::IconBundle => Box::new(BundleHandler::new(&self.rasterizer)),
        }
    }

    /// Exports the mounted preview, mapping any failure to the single
    /// user-facing [`ExportFailure`].
    pub fn export(
        &self,
        host: &PreviewHost,
        request: &ExportRequest,
    ) -> Result<Artifact, ExportFailure> {
        self.try_export(host, request).map_err(|err| {
            error!(format = %request.format, error = %err, "export failed");
            ExportFailure::new(err)
        })
    }

    /// Like [`export`](Self::export) but keeps the detailed error.
    pub fn try_export(
        &self,
        host: &PreviewHost,
        request: &ExportRequest,
    ) -> Result<Artifact, ExportError> {
        let size = request.size();
        let detached = host.detach(SizePx::square(size))?;
        debug!(format = %request.format, size, "exporting detached surface");

        let artifact = self.handler(request.format).export(&detached, request)?;
        info!(
            filename = artifact.filename,
            bytes = artifact.bytes.len(),
            "export complete"
        );
        Ok(artifact)
    }
}
