//! The style model: a complete, immutable description of one design.
//!
//! A design is exactly one visual subject (an icon or a short text glyph)
//! drawn over a background. The subject is a sum type so the inactive
//! payload simply does not exist; switching kind builds a fresh default
//! payload for the new kind.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "subject": { "kind": "icon", "icon": "Star", "size": 48, ... },
//!   "background": {
//!     "gradientFrom": "#ffffff",
//!     "gradientTo": "#f5f5f7",
//!     "direction": "to-r",
//!     "padding": 16,
//!     "cornerRadius": "12px",
//!     "shadow": "md"
//!   },
//!   "layout": "default"
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Color;
use crate::error::ParseError;
use crate::layout::LayoutId;
use crate::palettes::default_palette;

/// Maximum number of characters kept in a text subject.
pub const MAX_TEXT_CHARS: usize = 2;

// ============================================================================
// Enumerations
// ============================================================================

/// Which kind of subject a design shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum SubjectKind {
    #[default]
    Icon,
    Text,
}

/// One of the eight compass directions a linear gradient can run towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum GradientDirection {
    #[serde(rename = "to-t")]
    ToTop,
    #[serde(rename = "to-tr")]
    ToTopRight,
    #[serde(rename = "to-r")]
    ToRight,
    #[serde(rename = "to-br")]
    ToBottomRight,
    #[serde(rename = "to-b")]
    ToBottom,
    #[serde(rename = "to-bl")]
    ToBottomLeft,
    #[serde(rename = "to-l")]
    ToLeft,
    #[serde(rename = "to-tl")]
    ToTopLeft,
}

impl GradientDirection {
    /// All directions, clockwise from top.
    pub const ALL: [Self; 8] = [
        Self::ToTop,
        Self::ToTopRight,
        Self::ToRight,
        Self::ToBottomRight,
        Self::ToBottom,
        Self::ToBottomLeft,
        Self::ToLeft,
        Self::ToTopLeft,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToTop => "to-t",
            Self::ToTopRight => "to-tr",
            Self::ToRight => "to-r",
            Self::ToBottomRight => "to-br",
            Self::ToBottom => "to-b",
            Self::ToBottomLeft => "to-bl",
            Self::ToLeft => "to-l",
            Self::ToTopLeft => "to-tl",
        }
    }
}

impl FromStr for GradientDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseError::InvalidDirection(s.to_string()))
    }
}

/// Drop-shadow strength applied to the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum ShadowLevel {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
    Inner,
}

impl FromStr for ShadowLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            "2xl" => Ok(Self::Xxl),
            "inner" => Ok(Self::Inner),
            _ => Err(ParseError::InvalidShadow(s.to_string())),
        }
    }
}

/// Font family class for text subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Mono,
}

impl FontFamily {
    /// CSS font stack used by both the preview and the exports.
    pub fn css_stack(self) -> &'static str {
        match self {
            Self::Sans => "ui-sans-serif, system-ui, sans-serif",
            Self::Serif => "ui-serif, Georgia, serif",
            Self::Mono => "ui-monospace, monospace",
        }
    }
}

impl FromStr for FontFamily {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sans" => Ok(Self::Sans),
            "serif" => Ok(Self::Serif),
            "mono" => Ok(Self::Mono),
            _ => Err(ParseError::InvalidFontFamily(s.to_string())),
        }
    }
}

// ============================================================================
// CornerRadius
// ============================================================================

/// A corner radius in pixels or as a percentage of the shorter side.
///
/// Serialized as `"12px"`, `"50%"` or `"0"`. Malformed strings read as zero,
/// the same way a blank slider value does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerRadius {
    Px(u32),
    Percent(u32),
}

impl CornerRadius {
    pub const ZERO: Self = Self::Px(0);

    pub fn is_zero(self) -> bool {
        matches!(self, Self::Px(0) | Self::Percent(0))
    }

    /// Resolves to pixels for a box whose shorter side is `extent`.
    ///
    /// The result never exceeds half of `extent`.
    pub fn resolve(self, extent: f32) -> f32 {
        let px = match self {
            Self::Px(v) => v as f32,
            Self::Percent(p) => extent * p as f32 / 100.0,
        };
        px.min(extent / 2.0).max(0.0)
    }

    /// Lenient parse: anything that is not `N`, `Npx` or `N%` is zero.
    pub fn parse_lenient(value: &str) -> Self {
        let value = value.trim();
        if let Some(n) = value.strip_suffix('%') {
            return n.parse().map(Self::Percent).unwrap_or(Self::ZERO);
        }
        let n = value.strip_suffix("px").unwrap_or(value);
        n.parse().map(Self::Px).unwrap_or(Self::ZERO)
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for CornerRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            _ if self.is_zero() => f.write_str("0"),
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

impl Serialize for CornerRadius {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CornerRadius {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

#[cfg(feature = "jsonschema")]
impl schemars::JsonSchema for CornerRadius {
    fn schema_name() -> String {
        "CornerRadius".to_string()
    }

    fn json_schema(generator: &mut schemars::r#gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

// ============================================================================
// Icon reference
// ============================================================================

/// Opaque handle into the icon catalog (the icon's catalog name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct IconRef(String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Payload styles
// ============================================================================

/// Style of an icon subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct IconStyle {
    /// Selected catalog icon; `None` draws an empty background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    pub size: u32,
    pub rotation_degrees: f32,
    pub stroke_width: f32,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub opacity: f32,
    /// When false the stroke keeps its pixel width regardless of icon size.
    pub stroke_scales_with_size: bool,
    pub corner_radius: CornerRadius,
}

impl Default for IconStyle {
    fn default() -> Self {
        let colors = default_palette().colors;
        Self {
            icon: None,
            size: 48,
            rotation_degrees: 0.0,
            stroke_width: 2.0,
            stroke_color: colors.primary,
            fill_color: colors.secondary,
            opacity: 1.0,
            stroke_scales_with_size: true,
            corner_radius: CornerRadius::ZERO,
        }
    }
}

/// Style of a text subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct TextStyle {
    /// At most [`MAX_TEXT_CHARS`] characters.
    pub text: String,
    pub font_size: u32,
    pub font_weight: u16,
    pub text_color: Color,
    pub border_width: f32,
    pub border_color: Color,
    pub font_family: FontFamily,
    pub corner_radius: CornerRadius,
}

impl Default for TextStyle {
    fn default() -> Self {
        let colors = default_palette().colors;
        Self {
            text: String::new(),
            font_size: 24,
            font_weight: 600,
            text_color: colors.primary,
            border_width: 0.0,
            border_color: colors.secondary,
            font_family: FontFamily::Sans,
            corner_radius: CornerRadius::ZERO,
        }
    }
}

/// Background shared by both subject kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct BackgroundStyle {
    pub gradient_from: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_to: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<GradientDirection>,
    pub padding: u32,
    pub corner_radius: CornerRadius,
    pub shadow: ShadowLevel,
}

impl Default for BackgroundStyle {
    fn default() -> Self {
        let colors = default_palette().colors;
        Self {
            gradient_from: colors.gradient_from,
            gradient_to: Some(colors.gradient_to),
            direction: Some(GradientDirection::ToRight),
            padding: 16,
            corner_radius: CornerRadius::Px(12),
            shadow: ShadowLevel::Md,
        }
    }
}

/// The visual subject of a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum Subject {
    Icon(IconStyle),
    Text(TextStyle),
}

impl Subject {
    /// Default payload for `kind`.
    pub fn defaults_for(kind: SubjectKind) -> Self {
        match kind {
            SubjectKind::Icon => Self::Icon(IconStyle::default()),
            SubjectKind::Text => Self::Text(TextStyle::default()),
        }
    }

    pub fn kind(&self) -> SubjectKind {
        match self {
            Self::Icon(_) => SubjectKind::Icon,
            Self::Text(_) => SubjectKind::Text,
        }
    }

    /// Corner radius carried by the payload itself.
    pub fn corner_radius(&self) -> CornerRadius {
        match self {
            Self::Icon(s) => s.corner_radius,
            Self::Text(s) => s.corner_radius,
        }
    }
}

// ============================================================================
// StyleModel
// ============================================================================

/// One complete, immutable design snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct StyleModel {
    pub subject: Subject,
    pub background: BackgroundStyle,
    #[serde(default)]
    pub layout: LayoutId,
}

impl StyleModel {
    /// A default design of the given kind that keeps `layout`.
    pub fn for_kind(kind: SubjectKind, layout: LayoutId) -> Self {
        Self {
            subject: Subject::defaults_for(kind),
            background: BackgroundStyle::default(),
            layout,
        }
    }

    pub fn kind(&self) -> SubjectKind {
        self.subject.kind()
    }

    pub fn icon_style(&self) -> Option<&IconStyle> {
        match &self.subject {
            Subject::Icon(s) => Some(s),
            Subject::Text(_) => None,
        }
    }

    pub fn text_style(&self) -> Option<&TextStyle> {
        match &self.subject {
            Subject::Text(s) => Some(s),
            Subject::Icon(_) => None,
        }
    }

    /// Serializes the model to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a model from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for StyleModel {
    fn default() -> Self {
        Self::for_kind(SubjectKind::default(), LayoutId::default())
    }
}

// ============================================================================
// Partial updates
// ============================================================================

/// Deserializes a present field (including an explicit `null`) as `Some`.
///
/// Combined with `#[serde(default)]` this distinguishes "leave unchanged"
/// (field missing) from "clear" (field is `null`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Field-level overwrite of an [`IconStyle`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct IconStylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_degrees: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_scales_with_size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
}

impl IconStylePatch {
    pub fn apply_to(&self, style: &mut IconStyle) {
        if let Some(v) = self.size {
            style.size = v;
        }
        if let Some(v) = self.rotation_degrees {
            style.rotation_degrees = v;
        }
        if let Some(v) = self.stroke_width {
            style.stroke_width = v;
        }
        if let Some(v) = self.stroke_color {
            style.stroke_color = v;
        }
        if let Some(v) = self.fill_color {
            style.fill_color = v;
        }
        if let Some(v) = self.opacity {
            style.opacity = v;
        }
        if let Some(v) = self.stroke_scales_with_size {
            style.stroke_scales_with_size = v;
        }
        if let Some(v) = self.corner_radius {
            style.corner_radius = v;
        }
    }
}

/// Field-level overwrite of a [`TextStyle`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct TextStylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
}

impl TextStylePatch {
    /// Applies the patch. Text longer than [`MAX_TEXT_CHARS`] is truncated.
    pub fn apply_to(&self, style: &mut TextStyle) {
        if let Some(v) = &self.text {
            style.text = v.chars().take(MAX_TEXT_CHARS).collect();
        }
        if let Some(v) = self.font_size {
            style.font_size = v;
        }
        if let Some(v) = self.font_weight {
            style.font_weight = v;
        }
        if let Some(v) = self.text_color {
            style.text_color = v;
        }
        if let Some(v) = self.border_width {
            style.border_width = v;
        }
        if let Some(v) = self.border_color {
            style.border_color = v;
        }
        if let Some(v) = self.font_family {
            style.font_family = v;
        }
        if let Some(v) = self.corner_radius {
            style.corner_radius = v;
        }
    }
}

/// Field-level overwrite of a [`BackgroundStyle`].
///
/// `gradient_to` and `direction` are doubly optional: `Some(None)` clears the
/// field, which turns the background into a flat color.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct BackgroundPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_from: Option<Color>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub gradient_to: Option<Option<Color>>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub direction: Option<Option<GradientDirection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowLevel>,
}

impl BackgroundPatch {
    pub fn apply_to(&self, style: &mut BackgroundStyle) {
        if let Some(v) = self.gradient_from {
            style.gradient_from = v;
        }
        if let Some(v) = self.gradient_to {
            style.gradient_to = v;
        }
        if let Some(v) = self.direction {
            style.direction = v;
        }
        if let Some(v) = self.padding {
            style.padding = v;
        }
        if let Some(v) = self.corner_radius {
            style.corner_radius = v;
        }
        if let Some(v) = self.shadow {
            style.shadow = v;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_icon_with_apple_white() {
        let model = StyleModel::default();
        assert_eq!(model.kind(), SubjectKind::Icon);

        let icon = model.icon_style().unwrap();
        assert_eq!(icon.size, 48);
        assert_eq!(icon.stroke_color, Color::BLACK);
        assert!(icon.icon.is_none());
        assert!(model.text_style().is_none());

        assert_eq!(model.background.gradient_from, Color::WHITE);
        assert_eq!(model.background.direction, Some(GradientDirection::ToRight));
        assert_eq!(model.background.padding, 16);
        assert_eq!(model.layout, LayoutId::default());
    }

    #[test]
    fn corner_radius_parse_and_display() {
        assert_eq!(CornerRadius::parse_lenient("12px"), CornerRadius::Px(12));
        assert_eq!(CornerRadius::parse_lenient("12"), CornerRadius::Px(12));
        assert_eq!(CornerRadius::parse_lenient("50%"), CornerRadius::Percent(50));
        assert_eq!(CornerRadius::parse_lenient("none"), CornerRadius::ZERO);
        assert_eq!(CornerRadius::parse_lenient(""), CornerRadius::ZERO);

        assert_eq!(CornerRadius::Px(8).to_string(), "8px");
        assert_eq!(CornerRadius::Percent(30).to_string(), "30%");
        assert_eq!(CornerRadius::Percent(0).to_string(), "0");
    }

    #[test]
    fn corner_radius_resolution_is_capped() {
        assert_eq!(CornerRadius::Px(12).resolve(320.0), 12.0);
        assert_eq!(CornerRadius::Percent(25).resolve(320.0), 80.0);
        assert_eq!(CornerRadius::Percent(100).resolve(320.0), 160.0);
        assert_eq!(CornerRadius::Px(9999).resolve(100.0), 50.0);
    }

    #[test]
    fn direction_and_shadow_parse() {
        for d in GradientDirection::ALL {
            assert_eq!(d.as_str().parse::<GradientDirection>().unwrap(), d);
        }
        assert!("to-x".parse::<GradientDirection>().is_err());
        assert_eq!("2xl".parse::<ShadowLevel>().unwrap(), ShadowLevel::Xxl);
        assert_eq!("mono".parse::<FontFamily>().unwrap(), FontFamily::Mono);
    }

    #[test]
    fn icon_patch_overwrites_only_supplied_fields() {
        let mut style = IconStyle::default();
        let patch = IconStylePatch {
            size: Some(96),
            opacity: Some(0.5),
            ..Default::default()
        };
        patch.apply_to(&mut style);

        assert_eq!(style.size, 96);
        assert_eq!(style.opacity, 0.5);
        assert_eq!(style.stroke_width, IconStyle::default().stroke_width);
        assert_eq!(style.stroke_color, IconStyle::default().stroke_color);
    }

    #[test]
    fn text_patch_truncates_to_two_chars() {
        let mut style = TextStyle::default();
        TextStylePatch {
            text: Some("ABC".into()),
            ..Default::default()
        }
        .apply_to(&mut style);
        assert_eq!(style.text, "AB");
    }

    #[test]
    fn background_patch_distinguishes_missing_and_null() {
        let keep: BackgroundPatch = serde_json::from_str(r#"{"padding": 4}"#).unwrap();
        assert_eq!(keep.gradient_to, None);

        let clear: BackgroundPatch = serde_json::from_str(r#"{"gradientTo": null}"#).unwrap();
        assert_eq!(clear.gradient_to, Some(None));

        let mut bg = BackgroundStyle::default();
        keep.apply_to(&mut bg);
        assert!(bg.gradient_to.is_some());
        assert_eq!(bg.padding, 4);

        clear.apply_to(&mut bg);
        assert!(bg.gradient_to.is_none());
    }

    #[test]
    fn model_json_format() {
        let model = StyleModel::for_kind(SubjectKind::Text, LayoutId::from("preview-top"));
        let json = model.to_json().unwrap();

        assert!(json.contains("\"kind\":\"text\""));
        assert!(json.contains("\"gradientFrom\":\"#ffffff\""));
        assert!(json.contains("\"direction\":\"to-r\""));
        assert!(json.contains("\"cornerRadius\":\"12px\""));
        assert!(json.contains("\"layout\":\"preview-top\""));

        let restored = StyleModel::from_json(&json).unwrap();
        assert_eq!(restored, model);
    }
}
