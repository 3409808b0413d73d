//! Pixel geometry shared by the render surface and the export handlers.

/// A rectangle defined in pixel coordinates.
///
/// Used to place scaled content inside an export canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the canvas
    pub x: u32,
    /// Y offset from the top edge of the canvas
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle starting at origin (0, 0) with the given dimensions.
    pub fn from_size(size: SizePx) -> Self {
        Self {
            x: 0,
            y: 0,
            width: size.width,
            height: size.height,
        }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Length of the shorter side.
    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Multiplies both sides by an integer factor, or `None` on overflow.
    pub fn scaled(&self, factor: u32) -> Option<Self> {
        Some(Self::new(
            self.width.checked_mul(factor)?,
            self.height.checked_mul(factor)?,
        ))
    }
}

/// Fits `source` into a `side x side` square, preserving its aspect ratio.
///
/// The content fills the longer axis and is centered on the shorter one.
pub fn letterbox(source: SizePx, side: u32) -> RectPx {
    if source.width == 0 || source.height == 0 {
        return RectPx::from_size(SizePx::square(side));
    }

    let aspect = source.width as f32 / source.height as f32;
    let side_f = side as f32;

    if aspect > 1.0 {
        let draw_height = side_f / aspect;
        let offset_y = (side_f - draw_height) / 2.0;
        RectPx::new(0, offset_y.round() as u32, side, draw_height.round().max(1.0) as u32)
    } else {
        let draw_width = side_f * aspect;
        let offset_x = (side_f - draw_width) / 2.0;
        RectPx::new(offset_x.round() as u32, 0, draw_width.round().max(1.0) as u32, side)
    }
}
