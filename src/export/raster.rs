//! Bitmap rendering: the pluggable [`Rasterizer`] seam, the resvg backend
//! and the PNG handler.

use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree, fontdb};
use tracing::debug;

use super::{Artifact, ExportFormat, ExportRequest, FormatHandler};
use crate::error::ExportError;
use crate::geometry::{RectPx, SizePx};
use crate::surface::Surface;

/// Supersampling factor of the raster export.
pub const SUPERSAMPLE: u32 = 2;

/// Renders SVG markup into a bitmap.
pub trait Rasterizer {
    /// Draws `svg` scaled into `placement` on a transparent `canvas`.
    fn rasterize(
        &self,
        svg: &str,
        placement: RectPx,
        canvas: SizePx,
    ) -> Result<RgbaImage, ExportError>;
}

/// The default backend: resvg with a shared font database.
#[derive(Debug, Clone)]
pub struct ResvgRasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResvgRasterizer {
    /// Loads the system fonts once; clones share the database.
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        debug!(faces = db.len(), "loaded system fonts");
        Self::with_fontdb(Arc::new(db))
    }

    pub fn with_fontdb(fontdb: Arc<fontdb::Database>) -> Self {
        Self { fontdb }
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(
        &self,
        svg: &str,
        placement: RectPx,
        canvas: SizePx,
    ) -> Result<RgbaImage, ExportError> {
        let mut options = Options::default();
        options.fontdb = Arc::clone(&self.fontdb);

        let tree = Tree::from_str(svg, &options).map_err(|err| ExportError::Rasterization {
            size: canvas.width,
            reason: err.to_string(),
        })?;

        let mut pixmap =
            Pixmap::new(canvas.width, canvas.height).ok_or(ExportError::CanvasContextUnavailable {
                width: canvas.width,
                height: canvas.height,
            })?;

        let source = tree.size();
        let transform = Transform::from_scale(
            placement.width as f32 / source.width(),
            placement.height as f32 / source.height(),
        )
        .post_translate(placement.x as f32, placement.y as f32);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap_to_rgba_image(&pixmap).ok_or(ExportError::CanvasContextUnavailable {
            width: canvas.width,
            height: canvas.height,
        })
    }
}

/// Converts a premultiplied tiny-skia pixmap into a straight-alpha image.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> Option<RgbaImage> {
    let bytes = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let (r, g, b, a) = unpremultiply(p.red(), p.green(), p.blue(), p.alpha());
            [r, g, b, a]
        })
        .collect();
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), bytes)
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

/// Encodes an image as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|err| ExportError::BlobEncoding(err.to_string()))?;
    Ok(bytes)
}

/// `logo.png` at [`SUPERSAMPLE`] times the surface size.
#[derive(Debug)]
pub struct RasterHandler<'a, R> {
    rasterizer: &'a R,
}

impl<'a, R: Rasterizer> RasterHandler<'a, R> {
    pub fn new(rasterizer: &'a R) -> Self {
        Self { rasterizer }
    }
}

impl<R: Rasterizer> FormatHandler for RasterHandler<'_, R> {
    fn format(&self) -> ExportFormat {
        ExportFormat::Raster
    }

    fn export(&self, surface: &Surface, _request: &ExportRequest) -> Result<Artifact, ExportError> {
        let viewport = surface.viewport();
        let canvas = viewport
            .scaled(SUPERSAMPLE)
            .ok_or(ExportError::CanvasContextUnavailable {
                width: viewport.width,
                height: viewport.height,
            })?;
        let image = self
            .rasterizer
            .rasterize(&surface.to_svg(), RectPx::from_size(canvas), canvas)?;
        Ok(Artifact {
            filename: "logo.png",
            mime: "image/png",
            bytes: encode_png(&image)?,
        })
    }
}
