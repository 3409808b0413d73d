//! Multi-resolution favicon package.

use std::fmt::Write as _;
use std::io::{Cursor, Write};

use serde::Serialize;
use tracing::debug;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::raster::{Rasterizer, encode_png};
use super::{Artifact, ExportFormat, ExportRequest, FormatHandler};
use crate::error::ExportError;
use crate::geometry::{SizePx, letterbox};
use crate::surface::Surface;

/// Edge lengths of the packaged PNGs, in archive order.
pub const BUNDLE_SIZES: [u32; 6] = [16, 32, 48, 96, 144, 192];

/// Browser tile name and the bundle size it points at.
const TILES: [(&str, u32); 3] = [
    ("square70x70logo", 96),
    ("square150x150logo", 144),
    ("square310x310logo", 192),
];

const MANIFEST_NAME: &str = "Logo";

fn favicon_name(size: u32) -> String {
    format!("favicon-{size}x{size}.png")
}

#[derive(Debug, Serialize)]
struct WebManifest {
    name: &'static str,
    icons: Vec<ManifestIcon>,
}

#[derive(Debug, Serialize)]
struct ManifestIcon {
    src: String,
    sizes: String,
    #[serde(rename = "type")]
    mime: &'static str,
}

impl WebManifest {
    fn for_sizes(sizes: &[u32]) -> Self {
        Self {
            name: MANIFEST_NAME,
            icons: sizes
                .iter()
                .map(|&size| ManifestIcon {
                    src: format!("/{}", favicon_name(size)),
                    sizes: format!("{size}x{size}"),
                    mime: "image/png",
                })
                .collect(),
        }
    }
}

/// `manifest.json` listing every produced size.
pub fn manifest_json(sizes: &[u32]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(&WebManifest::for_sizes(sizes))
        .map_err(|err| ExportError::BlobEncoding(format!("manifest.json: {err}")))
}

/// `browserconfig.xml`; a tile line is emitted only for produced sizes.
pub fn browser_config(sizes: &[u32]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<browserconfig>\n  <msapplication>\n    <tile>\n",
    );
    for (tile, size) in TILES {
        if sizes.contains(&size) {
            let _ = writeln!(out, "      <{tile} src=\"/{}\"/>", favicon_name(size));
        }
    }
    out.push_str("    </tile>\n  </msapplication>\n</browserconfig>\n");
    out
}

/// `favicon-package.zip`.
#[derive(Debug)]
pub struct BundleHandler<'a, R> {
    rasterizer: &'a R,
}

impl<'a, R: Rasterizer> BundleHandler<'a, R> {
    pub fn new(rasterizer: &'a R) -> Self {
        Self { rasterizer }
    }

    /// Rasterizes every bundle size. The first failure aborts the rest.
    fn render_all(&self, surface: &Surface) -> Result<Vec<(u32, Vec<u8>)>, ExportError> {
        let svg = surface.to_svg();
        BUNDLE_SIZES
            .iter()
            .map(|&size| {
                let placement = letterbox(surface.viewport(), size);
                let image = self
                    .rasterizer
                    .rasterize(&svg, placement, SizePx::square(size))?;
                debug!(size, "rendered favicon");
                Ok((size, encode_png(&image)?))
            })
            .collect()
    }
}

impl<R: Rasterizer> FormatHandler for BundleHandler<'_, R> {
    fn format(&self) -> ExportFormat {
        ExportFormat::IconBundle
    }

    fn export(&self, surface: &Surface, request: &ExportRequest) -> Result<Artifact, ExportError> {
        let images = self.render_all(surface)?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for (size, png) in &images {
            add_file_to_zip(&mut zip, &favicon_name(*size), png, options)?;
        }
        if request.manifest() {
            let manifest = manifest_json(&BUNDLE_SIZES)?;
            add_file_to_zip(&mut zip, "manifest.json", manifest.as_bytes(), options)?;
        }
        if request.browser_config() {
            let config = browser_config(&BUNDLE_SIZES);
            add_file_to_zip(&mut zip, "browserconfig.xml", config.as_bytes(), options)?;
        }

        let bytes = zip
            .finish()
            .map_err(|err| ExportError::BlobEncoding(format!("finalize archive: {err}")))?
            .into_inner();

        Ok(Artifact {
            filename: "favicon-package.zip",
            mime: "application/zip",
            bytes,
        })
    }
}

fn add_file_to_zip(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    content: &[u8],
    options: SimpleFileOptions,
) -> Result<(), ExportError> {
    zip.start_file(name, options)
        .map_err(|err| ExportError::BlobEncoding(format!("start {name}: {err}")))?;
    zip.write_all(content)
        .map_err(|err| ExportError::BlobEncoding(format!("write {name}: {err}")))?;
    Ok(())
}
