//! SVG and XHTML realizations of a [`Surface`].
//!
//! Element ids are fixed and numbers go through [`fmt_num`], so equal
//! surfaces always realize to equal bytes.

use std::fmt::Write;

use quick_xml::escape::escape;

use super::{Content, Fill, IconGlyph, Surface, TextGlyph};
use crate::icon::ICON_GRID;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

pub const GRADIENT_ID: &str = "logo-bg";
pub const SHADOW_ID: &str = "logo-shadow";
pub const CLIP_ID: &str = "logo-clip";

/// Formats a number with at most three decimals and no trailing zeros.
pub fn fmt_num(value: f32) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 || !rounded.is_finite() {
        return "0".to_string();
    }
    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Adds size (and optionally position) attributes to the root of an SVG
/// document so it can be nested or inlined.
#[cfg(feature = "twemoji")]
fn sized_svg(document: &str, origin: Option<(f32, f32)>, size: f32) -> String {
    let Some(rest) = document.trim_start().strip_prefix("<svg") else {
        return String::new();
    };
    let position = origin
        .map(|(x, y)| format!(" x=\"{}\" y=\"{}\"", fmt_num(x), fmt_num(y)))
        .unwrap_or_default();
    format!(
        "<svg{position} width=\"{s}\" height=\"{s}\"{rest}",
        s = fmt_num(size)
    )
}

impl Surface {
    /// `url(#logo-bg)` for gradients, otherwise the flat color.
    pub(crate) fn background_paint(&self) -> String {
        match self.fill() {
            Fill::Solid(color) => color.to_hex(),
            Fill::Linear(_) => format!("url(#{GRADIENT_ID})"),
        }
    }

    /// Writes `<defs>` for the gradient, the shadow filter and (when
    /// `clip` is set and the corners are rounded) the corner clip path.
    pub(crate) fn write_defs(&self, out: &mut String, clip: bool) {
        let shadow = self.drop_shadow();
        let radius = self.corner_radius_px();
        let gradient = match self.fill() {
            Fill::Linear(gradient) => Some(gradient),
            Fill::Solid(_) => None,
        };
        let clip = clip && radius > 0.0;
        if gradient.is_none() && shadow.is_none() && !clip {
            return;
        }

        out.push_str("<defs>");
        if let Some(gradient) = gradient {
            let c = gradient.direction.svg_coords();
            let _ = write!(
                out,
                "<linearGradient id=\"{GRADIENT_ID}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">\
                 <stop offset=\"0%\" stop-color=\"{}\"/>\
                 <stop offset=\"100%\" stop-color=\"{}\"/>\
                 </linearGradient>",
                c.x1, c.y1, c.x2, c.y2, gradient.from, gradient.to
            );
        }
        if let Some(shadow) = shadow {
            let _ = write!(
                out,
                "<filter id=\"{SHADOW_ID}\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\
                 <feDropShadow dx=\"0\" dy=\"{}\" stdDeviation=\"{}\" flood-color=\"{}\" flood-opacity=\"{}\"/>\
                 </filter>",
                fmt_num(shadow.dy),
                fmt_num(shadow.std_deviation),
                shadow.color,
                fmt_num(shadow.opacity)
            );
        }
        if clip {
            let _ = write!(out, "<clipPath id=\"{CLIP_ID}\">");
            self.write_background_shape(out, None);
            out.push_str("</clipPath>");
        }
        out.push_str("</defs>");
    }

    /// Writes the rounded background rectangle.
    pub(crate) fn write_background_rect(&self, out: &mut String) {
        let paint = self.background_paint();
        self.write_background_shape(out, Some(&paint));
    }

    fn write_background_shape(&self, out: &mut String, fill: Option<&str>) {
        let viewport = self.viewport();
        let radius = fmt_num(self.corner_radius_px());
        let _ = write!(
            out,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" rx=\"{radius}\" ry=\"{radius}\"",
            viewport.width, viewport.height
        );
        if let Some(fill) = fill {
            let _ = write!(out, " fill=\"{fill}\"");
        }
        out.push_str("/>");
    }

    /// A standalone SVG document drawing the whole surface.
    pub fn to_svg(&self) -> String {
        let viewport = self.viewport();
        let mut out = String::with_capacity(1024);
        let _ = write!(
            out,
            "<svg xmlns=\"{SVG_NS}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = viewport.width,
            h = viewport.height
        );
        self.write_defs(&mut out, true);
        self.write_background_rect(&mut out);

        let content = self.content_svg();
        if !content.is_empty() {
            out.push_str("<g");
            if self.corner_radius_px() > 0.0 {
                let _ = write!(out, " clip-path=\"url(#{CLIP_ID})\"");
            }
            out.push('>');
            out.push_str("<g");
            if self.drop_shadow().is_some() {
                let _ = write!(out, " filter=\"url(#{SHADOW_ID})\"");
            }
            out.push('>');
            out.push_str(&content);
            out.push_str("</g></g>");
        }
        out.push_str("</svg>");
        out
    }

    /// The content subtree alone, as XHTML-embeddable markup.
    ///
    /// Empty content yields an empty string.
    pub fn inner_markup(&self) -> String {
        match self.content() {
            Content::Empty => String::new(),
            Content::Icon(glyph) => self.icon_inline(glyph),
            Content::Text(glyph) => self.text_inline(glyph),
            #[cfg(feature = "twemoji")]
            Content::Emoji(glyph) => sized_svg(glyph.svg, None, self.font_size_px(glyph.size)),
        }
    }

    fn content_svg(&self) -> String {
        match self.content() {
            Content::Empty => String::new(),
            Content::Icon(glyph) => self.icon_svg(glyph),
            Content::Text(glyph) => self.text_svg(glyph),
            #[cfg(feature = "twemoji")]
            Content::Emoji(glyph) => {
                let size = self.font_size_px(glyph.size);
                let viewport = self.viewport();
                let origin = (
                    (viewport.width as f32 - size) / 2.0,
                    (viewport.height as f32 - size) / 2.0,
                );
                sized_svg(glyph.svg, Some(origin), size)
            }
        }
    }

    fn icon_paint_attrs(&self, glyph: &IconGlyph, size: f32) -> String {
        format!(
            "viewBox=\"0 0 {grid} {grid}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\"",
            glyph.fill,
            glyph.stroke,
            fmt_num(glyph.grid_stroke_width(size)),
            grid = ICON_GRID
        )
    }

    fn icon_svg(&self, glyph: &IconGlyph) -> String {
        let size = self.icon_size_px(glyph);
        let viewport = self.viewport();
        let cx = viewport.width as f32 / 2.0;
        let cy = viewport.height as f32 / 2.0;

        let mut out = String::new();
        let _ = write!(out, "<g opacity=\"{}\"", fmt_num(glyph.opacity));
        if glyph.rotation_degrees != 0.0 {
            let _ = write!(
                out,
                " transform=\"rotate({} {} {})\"",
                fmt_num(glyph.rotation_degrees),
                fmt_num(cx),
                fmt_num(cy)
            );
        }
        let _ = write!(
            out,
            "><svg x=\"{}\" y=\"{}\" width=\"{s}\" height=\"{s}\" {}>{}</svg></g>",
            fmt_num(cx - size / 2.0),
            fmt_num(cy - size / 2.0),
            self.icon_paint_attrs(glyph, size),
            glyph.body,
            s = fmt_num(size)
        );
        out
    }

    fn icon_inline(&self, glyph: &IconGlyph) -> String {
        let size = self.icon_size_px(glyph);
        format!(
            "<svg xmlns=\"{SVG_NS}\" width=\"{s}\" height=\"{s}\" {} \
             style=\"transform: rotate({}deg); opacity: {};\">{}</svg>",
            self.icon_paint_attrs(glyph, size),
            fmt_num(glyph.rotation_degrees),
            fmt_num(glyph.opacity),
            glyph.body,
            s = fmt_num(size)
        )
    }

    fn text_svg(&self, glyph: &TextGlyph) -> String {
        if glyph.text.is_empty() {
            return String::new();
        }
        let viewport = self.viewport();
        let mut out = String::new();
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" \
             font-family=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\"",
            fmt_num(viewport.width as f32 / 2.0),
            fmt_num(viewport.height as f32 / 2.0),
            glyph.font_family.css_stack(),
            fmt_num(self.font_size_px(glyph.font_size)),
            glyph.font_weight,
            glyph.color
        );
        if glyph.border_width > 0.0 {
            let _ = write!(
                out,
                " stroke=\"{}\" stroke-width=\"{}\"",
                glyph.border_color,
                fmt_num(glyph.border_width)
            );
        }
        let _ = write!(out, ">{}</text>", escape(glyph.text.as_str()));
        out
    }

    fn text_inline(&self, glyph: &TextGlyph) -> String {
        format!(
            "<span style=\"font-size: {}px; font-weight: {}; color: {}; \
             -webkit-text-stroke: {}px {}; font-family: {};\">{}</span>",
            fmt_num(self.font_size_px(glyph.font_size)),
            glyph.font_weight,
            glyph.color,
            fmt_num(glyph.border_width),
            glyph.border_color,
            glyph.font_family.css_stack(),
            escape(glyph.text.as_str())
        )
    }
}
