//! Background fill resolution.

use crate::color::Color;
use crate::style::{BackgroundStyle, GradientDirection};

/// Endpoints of an SVG `linearGradient`, as percentages of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientCoords {
    pub x1: &'static str,
    pub y1: &'static str,
    pub x2: &'static str,
    pub y2: &'static str,
}

impl GradientDirection {
    /// CSS angle in degrees, clockwise from "to top".
    pub fn angle(self) -> u16 {
        match self {
            Self::ToTop => 0,
            Self::ToTopRight => 45,
            Self::ToRight => 90,
            Self::ToBottomRight => 135,
            Self::ToBottom => 180,
            Self::ToBottomLeft => 225,
            Self::ToLeft => 270,
            Self::ToTopLeft => 315,
        }
    }

    pub fn svg_coords(self) -> GradientCoords {
        let (x1, y1, x2, y2) = match self {
            Self::ToRight => ("0%", "50%", "100%", "50%"),
            Self::ToLeft => ("100%", "50%", "0%", "50%"),
            Self::ToTop => ("50%", "100%", "50%", "0%"),
            Self::ToBottom => ("50%", "0%", "50%", "100%"),
            Self::ToTopRight => ("0%", "100%", "100%", "0%"),
            Self::ToTopLeft => ("100%", "100%", "0%", "0%"),
            Self::ToBottomRight => ("0%", "0%", "100%", "100%"),
            Self::ToBottomLeft => ("100%", "0%", "0%", "100%"),
        };
        GradientCoords { x1, y1, x2, y2 }
    }
}

/// A two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearGradient {
    pub direction: GradientDirection,
    pub from: Color,
    pub to: Color,
}

impl LinearGradient {
    pub fn angle(&self) -> u16 {
        self.direction.angle()
    }

    /// CSS `background` value, e.g. `linear-gradient(90deg, #ffffff, #f5f5f7)`.
    pub fn css(&self) -> String {
        format!("linear-gradient({}deg, {}, {})", self.angle(), self.from, self.to)
    }
}

/// Resolved background paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(Color),
    Linear(LinearGradient),
}

impl Fill {
    /// A gradient needs both a second color and a direction; otherwise the
    /// background is flat `gradient_from`.
    pub fn resolve(background: &BackgroundStyle) -> Self {
        match (background.gradient_to, background.direction) {
            (Some(to), Some(direction)) => Self::Linear(LinearGradient {
                direction,
                from: background.gradient_from,
                to,
            }),
            _ => Self::Solid(background.gradient_from),
        }
    }

    /// The first color stop (or the flat color).
    pub fn base_color(&self) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::Linear(gradient) => gradient.from,
        }
    }

    pub fn css(&self) -> String {
        match self {
            Self::Solid(color) => color.to_hex(),
            Self::Linear(gradient) => gradient.css(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(d: GradientDirection) -> [&'static str; 4] {
        let c = d.svg_coords();
        [c.x1, c.y1, c.x2, c.y2]
    }

    #[test]
    fn every_direction_maps_to_svg_coords() {
        use GradientDirection::*;
        let expected = [
            (ToTop, ["50%", "100%", "50%", "0%"]),
            (ToTopRight, ["0%", "100%", "100%", "0%"]),
            (ToRight, ["0%", "50%", "100%", "50%"]),
            (ToBottomRight, ["0%", "0%", "100%", "100%"]),
            (ToBottom, ["50%", "0%", "50%", "100%"]),
            (ToBottomLeft, ["100%", "0%", "0%", "100%"]),
            (ToLeft, ["100%", "50%", "0%", "50%"]),
            (ToTopLeft, ["100%", "100%", "0%", "0%"]),
        ];
        for (direction, want) in expected {
            assert_eq!(coords(direction), want, "{direction:?}");
        }
    }

    #[test]
    fn angles_step_by_45_degrees() {
        let angles: Vec<u16> = GradientDirection::ALL.iter().map(|d| d.angle()).collect();
        assert_eq!(angles, vec![0, 45, 90, 135, 180, 225, 270, 315]);
    }

    #[test]
    fn fill_needs_both_stop_and_direction() {
        let mut bg = BackgroundStyle::default();
        assert!(matches!(Fill::resolve(&bg), Fill::Linear(_)));

        bg.direction = None;
        assert_eq!(Fill::resolve(&bg), Fill::Solid(bg.gradient_from));

        bg.direction = Some(GradientDirection::ToLeft);
        bg.gradient_to = None;
        assert_eq!(Fill::resolve(&bg), Fill::Solid(bg.gradient_from));
    }

    #[test]
    fn css_value() {
        let fill = Fill::resolve(&BackgroundStyle::default());
        assert_eq!(fill.css(), "linear-gradient(90deg, #ffffff, #f5f5f7)");
        assert_eq!(Fill::Solid(Color::BLACK).css(), "#000000");
    }
}
