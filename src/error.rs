//! Error types for parsing style values and producing export artifacts.

use thiserror::Error;

/// Errors raised while parsing textual style values (colors, radii, directions).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid color `{0}`: expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("invalid gradient direction `{0}`")]
    InvalidDirection(String),

    #[error("invalid shadow level `{0}`")]
    InvalidShadow(String),

    #[error("invalid font family `{0}`")]
    InvalidFontFamily(String),
}

/// Failures of the export pipeline.
///
/// None of these ever leave a partial artifact behind: a handler either
/// returns a complete [`Artifact`](crate::Artifact) or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Export was requested while no preview surface is mounted.
    #[error("no preview surface is mounted")]
    MissingRenderTarget,

    /// The bitmap backend could not render the surface.
    #[error("failed to rasterize at {size}px: {reason}")]
    Rasterization { size: u32, reason: String },

    /// The requested format is not one of raster, vector or icon-bundle.
    #[error("unsupported export format `{0}`")]
    UnsupportedFormat(String),

    /// A drawing surface of the requested dimensions could not be allocated.
    #[error("could not allocate a {width}x{height} drawing surface")]
    CanvasContextUnavailable { width: u32, height: u32 },

    /// The final binary encoding step (PNG, JSON or zip) failed.
    #[error("failed to encode output: {0}")]
    BlobEncoding(String),
}

/// The single user-facing failure surfaced by [`ExportPipeline::export`](crate::ExportPipeline::export).
///
/// The underlying [`ExportError`] is kept as the error source for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExportFailure {
    message: &'static str,
    #[source]
    source: ExportError,
}

impl ExportFailure {
    pub const MESSAGE: &'static str = "Failed to download logo. Please try again.";

    pub(crate) fn new(source: ExportError) -> Self {
        Self {
            message: Self::MESSAGE,
            source,
        }
    }

    /// The message to show to the user.
    pub fn message(&self) -> &str {
        self.message
    }

    /// The underlying pipeline error.
    pub fn cause(&self) -> &ExportError {
        &self.source
    }
}
