//! The render surface: a pure projection of a [`StyleModel`] onto a sized
//! visual tree.
//!
//! A [`Surface`] keeps the requested glyph sizes and resolves them against
//! its viewport only when realized, so the same projection can be re-sized
//! for an export ([`Surface::with_viewport`]) without going back to the
//! model. Realizations live in [`svg`](self::svg) and are byte-identical for
//! identical inputs.
//!
//! # Example
//!
//! ```
//! use logo_forge::{IconCatalog, SizePx, StyleModel, Surface};
//!
//! let surface = Surface::project(&StyleModel::default(), IconCatalog::global(), SizePx::square(320));
//! assert!(surface.to_svg().starts_with("<svg"));
//! ```

pub mod gradient;
pub mod svg;

pub use gradient::{Fill, GradientCoords, LinearGradient};

use crate::color::Color;
use crate::geometry::SizePx;
use crate::icon::{ICON_GRID, IconCatalog};
use crate::style::{CornerRadius, FontFamily, IconStyle, ShadowLevel, StyleModel, Subject, TextStyle};

/// Edge length of the interactive preview.
pub const PREVIEW_SIZE: u32 = 320;

/// Largest icon edge, as a fraction of the surface's shorter side.
pub const ICON_MAX_RATIO: f32 = 0.8;
/// Largest font size, as a fraction of the surface's shorter side.
pub const FONT_MAX_RATIO: f32 = 0.4;

/// Lightness removed from the background color to tint the drop shadow.
const SHADOW_DARKEN: f32 = 0.5;

// ============================================================================
// Glyphs
// ============================================================================

/// A catalog icon with its paint.
#[derive(Debug, Clone, PartialEq)]
pub struct IconGlyph {
    pub name: &'static str,
    /// SVG children on the 24x24 icon grid.
    pub body: &'static str,
    /// Requested edge length before clamping.
    pub size: f32,
    pub rotation_degrees: f32,
    pub stroke_width: f32,
    pub stroke_scales_with_size: bool,
    pub stroke: Color,
    pub fill: Color,
    pub opacity: f32,
}

impl IconGlyph {
    fn from_style(style: &IconStyle, catalog: &IconCatalog) -> Option<Self> {
        let def = catalog.get(style.icon.as_ref()?)?;
        Some(Self {
            name: def.name,
            body: def.body,
            size: style.size as f32,
            rotation_degrees: style.rotation_degrees,
            stroke_width: style.stroke_width,
            stroke_scales_with_size: style.stroke_scales_with_size,
            stroke: style.stroke_color,
            fill: style.fill_color,
            opacity: style.opacity.clamp(0.0, 1.0),
        })
    }

    /// Stroke width in icon-grid units for an icon drawn `rendered` pixels wide.
    ///
    /// A non-scaling stroke keeps its pixel width, so it is converted back
    /// into grid units.
    pub fn grid_stroke_width(&self, rendered: f32) -> f32 {
        if self.stroke_scales_with_size || rendered <= 0.0 {
            self.stroke_width
        } else {
            self.stroke_width * ICON_GRID as f32 / rendered
        }
    }
}

/// A short text glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextGlyph {
    pub text: String,
    /// Requested size before clamping.
    pub font_size: f32,
    pub font_weight: u16,
    pub color: Color,
    pub border_width: f32,
    pub border_color: Color,
    pub font_family: FontFamily,
}

impl TextGlyph {
    fn from_style(style: &TextStyle) -> Self {
        Self {
            text: style.text.clone(),
            font_size: style.font_size as f32,
            font_weight: style.font_weight,
            color: style.text_color,
            border_width: style.border_width.max(0.0),
            border_color: style.border_color,
            font_family: style.font_family,
        }
    }
}

/// A Twemoji asset standing in for a single-emoji text subject.
#[cfg(feature = "twemoji")]
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiGlyph {
    pub emoji: String,
    /// Complete SVG document of the asset.
    pub svg: &'static str,
    /// Requested size before clamping.
    pub size: f32,
}

#[cfg(feature = "twemoji")]
impl EmojiGlyph {
    fn lookup(style: &TextStyle) -> Option<Self> {
        use twemoji_assets::svg::SvgTwemojiAsset;

        let asset = SvgTwemojiAsset::from_emoji(&style.text)?;
        let svg: &'static str = asset.as_ref();
        Some(Self {
            emoji: style.text.clone(),
            svg,
            size: style.font_size as f32,
        })
    }
}

/// What is drawn on top of the background.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// No icon selected, or the selected icon is not in the catalog.
    Empty,
    Icon(IconGlyph),
    Text(TextGlyph),
    #[cfg(feature = "twemoji")]
    Emoji(EmojiGlyph),
}

impl Content {
    fn project(subject: &Subject, catalog: &IconCatalog) -> Self {
        match subject {
            Subject::Icon(style) => IconGlyph::from_style(style, catalog)
                .map(Self::Icon)
                .unwrap_or(Self::Empty),
            Subject::Text(style) => {
                #[cfg(feature = "twemoji")]
                {
                    if let Some(emoji) = EmojiGlyph::lookup(style) {
                        return Self::Emoji(emoji);
                    }
                }
                Self::Text(TextGlyph::from_style(style))
            }
        }
    }
}

// ============================================================================
// Shadow
// ============================================================================

/// A drop shadow below the glyph, in pixels at the surface's own scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropShadow {
    pub dy: f32,
    pub std_deviation: f32,
    pub color: Color,
    pub opacity: f32,
}

/// Offset, blur deviation and opacity of each level on a 320px preview.
fn shadow_metrics(level: ShadowLevel) -> Option<(f32, f32, f32)> {
    match level {
        ShadowLevel::None | ShadowLevel::Inner => None,
        ShadowLevel::Sm => Some((1.0, 1.0, 0.05)),
        ShadowLevel::Md => Some((4.0, 3.0, 0.1)),
        ShadowLevel::Lg => Some((10.0, 7.5, 0.1)),
        ShadowLevel::Xl => Some((20.0, 12.5, 0.1)),
        ShadowLevel::Xxl => Some((25.0, 25.0, 0.25)),
    }
}

// ============================================================================
// Surface
// ============================================================================

/// A projected design at a given viewport size.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    viewport: SizePx,
    fill: Fill,
    corner_radius: CornerRadius,
    padding: u32,
    shadow: ShadowLevel,
    shadow_tint: Color,
    content: Content,
}

impl Surface {
    /// Projects `model` onto a `viewport`-sized surface.
    pub fn project(model: &StyleModel, catalog: &IconCatalog, viewport: SizePx) -> Self {
        let fill = Fill::resolve(&model.background);
        let subject_radius = model.subject.corner_radius();
        let corner_radius = if subject_radius.is_zero() {
            model.background.corner_radius
        } else {
            subject_radius
        };

        Self {
            viewport,
            fill,
            corner_radius,
            padding: model.background.padding,
            shadow: model.background.shadow,
            shadow_tint: fill.base_color().darken(SHADOW_DARKEN),
            content: Content::project(&model.subject, catalog),
        }
    }

    /// The same projection realized at another size.
    pub fn with_viewport(&self, viewport: SizePx) -> Self {
        Self {
            viewport,
            ..self.clone()
        }
    }

    pub fn viewport(&self) -> SizePx {
        self.viewport
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Padding as styled on the 320px preview.
    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Padding in pixels at this viewport.
    pub fn padding_px(&self) -> f32 {
        self.padding as f32 * self.scale()
    }

    /// Shorter side of the box left inside the padding.
    pub fn content_side_px(&self) -> f32 {
        (self.viewport.min_side() as f32 - 2.0 * self.padding_px()).max(0.0)
    }

    pub fn shadow_level(&self) -> ShadowLevel {
        self.shadow
    }

    fn scale(&self) -> f32 {
        self.viewport.min_side() as f32 / PREVIEW_SIZE as f32
    }

    /// Corner radius in pixels, capped at half the shorter side.
    pub fn corner_radius_px(&self) -> f32 {
        self.corner_radius.resolve(self.viewport.min_side() as f32)
    }

    /// The drop shadow scaled to this viewport, if the level draws one.
    pub fn drop_shadow(&self) -> Option<DropShadow> {
        let (dy, std_deviation, opacity) = shadow_metrics(self.shadow)?;
        let scale = self.scale();
        Some(DropShadow {
            dy: dy * scale,
            std_deviation: std_deviation * scale,
            color: self.shadow_tint,
            opacity,
        })
    }

    /// Rendered icon edge length after clamping to the surface and the
    /// padded content box.
    pub fn icon_size_px(&self, glyph: &IconGlyph) -> f32 {
        glyph
            .size
            .min(self.viewport.min_side() as f32 * ICON_MAX_RATIO)
            .min(self.content_side_px())
            .max(0.0)
    }

    /// Rendered font size after clamping to the surface and the padded
    /// content box.
    pub fn font_size_px(&self, requested: f32) -> f32 {
        requested
            .min(self.viewport.min_side() as f32 * FONT_MAX_RATIO)
            .min(self.content_side_px())
            .max(0.0)
    }
}
