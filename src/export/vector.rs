//! Self-contained SVG export.
//!
//! The background is translated into native SVG (rounded rect, gradient,
//! shadow filter); the content is embedded verbatim as XHTML inside a
//! `foreignObject` so any future content kind stays representable.

use std::fmt::Write;

use super::{Artifact, ExportFormat, ExportRequest, FormatHandler};
use crate::error::ExportError;
use crate::surface::Surface;
use crate::surface::svg::{SHADOW_ID, SVG_NS, XHTML_NS, fmt_num};

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// `logo.svg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorHandler;

impl FormatHandler for VectorHandler {
    fn format(&self) -> ExportFormat {
        ExportFormat::Vector
    }

    fn export(&self, surface: &Surface, _request: &ExportRequest) -> Result<Artifact, ExportError> {
        Ok(Artifact {
            filename: "logo.svg",
            mime: "image/svg+xml",
            bytes: vector_document(surface).into_bytes(),
        })
    }
}

/// Builds the complete SVG document for `surface`.
pub fn vector_document(surface: &Surface) -> String {
    let viewport = surface.viewport();
    let (w, h) = (viewport.width, viewport.height);

    let mut out = String::with_capacity(2048);
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
    let _ = writeln!(
        out,
        "<svg xmlns=\"{SVG_NS}\" xmlns:xlink=\"{XLINK_NS}\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">"
    );
    surface.write_defs(&mut out, false);
    surface.write_background_rect(&mut out);
    out.push('\n');

    let _ = write!(out, "<foreignObject x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\"");
    if surface.drop_shadow().is_some() {
        let _ = write!(out, " filter=\"url(#{SHADOW_ID})\"");
    }
    out.push_str(">\n");
    let _ = writeln!(
        out,
        "<div xmlns=\"{XHTML_NS}\" style=\"width: 100%; height: 100%; box-sizing: border-box; \
         padding: {}px; display: flex; align-items: center; justify-content: center;\">{}</div>",
        fmt_num(surface.padding_px()),
        surface.inner_markup()
    );
    out.push_str("</foreignObject>\n</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::{StubRasterizer, mounted_host};
    use crate::export::ExportPipeline;
    use crate::geometry::SizePx;
    use crate::icon::IconCatalog;
    use crate::style::{IconRef, ShadowLevel, StyleModel, Subject};

    #[test]
    fn document_structure() {
        let host = mounted_host();
        let pipeline = ExportPipeline::with_rasterizer(StubRasterizer::default());
        let artifact = pipeline
            .export(&host, &ExportRequest::new(ExportFormat::Vector).with_size(128))
            .unwrap();
        assert_eq!(artifact.filename, "logo.svg");
        assert_eq!(artifact.mime, "image/svg+xml");

        let doc = String::from_utf8(artifact.bytes).unwrap();
        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>"));
        assert!(doc.contains(r#"viewBox="0 0 128 128" width="128" height="128""#));
        assert!(doc.contains(r#"<linearGradient id="logo-bg""#));
        assert!(doc.contains(r#"<foreignObject x="0" y="0" width="128" height="128""#));
        assert!(doc.contains(r#"<div xmlns="http://www.w3.org/1999/xhtml""#));
        assert!(doc.contains("padding: 6.4px"));
        assert!(doc.contains("justify-content: center"));
        assert!(doc.contains("<polygon"));
        assert!(!doc.contains("clipPath"));
        assert_eq!(host.live_clones(), 0);
    }

    #[test]
    fn padding_reaches_both_realizations() {
        let mut model = StyleModel::default();
        if let Subject::Icon(style) = &mut model.subject {
            style.icon = Some(IconRef::from("Star"));
            style.size = 256;
        }
        model.background.padding = 0;
        let loose = Surface::project(&model, IconCatalog::global(), SizePx::square(320));
        model.background.padding = 100;
        let tight = Surface::project(&model, IconCatalog::global(), SizePx::square(320));

        assert_ne!(loose.to_svg(), tight.to_svg());
        assert_ne!(vector_document(&loose), vector_document(&tight));

        assert!(tight.to_svg().contains(r#"<svg x="100" y="100" width="120" height="120""#));
        let doc = vector_document(&tight);
        assert!(doc.contains("padding: 100px"));
        assert!(doc.contains(r#"width="120" height="120""#));
        assert!(loose.to_svg().contains(r#"width="256" height="256""#));
    }

    #[test]
    fn flat_background_without_shadow() {
        let mut model = StyleModel::default();
        model.background.gradient_to = None;
        model.background.shadow = ShadowLevel::None;
        let surface = Surface::project(&model, IconCatalog::global(), SizePx::square(64));

        let doc = vector_document(&surface);
        assert!(!doc.contains("<defs>"));
        assert!(doc.contains(r##"fill="#ffffff""##));
        assert!(!doc.contains("filter="));
        assert!(doc.contains("justify-content: center;\"></div>"));
    }
}
