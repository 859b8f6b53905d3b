use crate::color::Color;
use crate::surface::{
    CoordinateSpace, DrawingSurface, FontStyle, HorizontalAlignment, TextStyle, VerticalAlignment,
};
use tracing::{debug, trace};

pub const TINHATBEN_GRAY: Color = Color::rgb(0x7a, 0x7a, 0x7a);
pub const TINHATBEN_YELLOW: Color = Color::rgb(0xff, 0xaf, 0x1f);

/// Font size of every watermark fragment, in points
pub const WATERMARK_FONT_SIZE: f32 = 25.0;

/// Watermark pieces as (text, x offset from the anchor, colour), in draw order
pub const WATERMARK_FRAGMENTS: [(&str, f64, Color); 6] = [
    ("t", 0.0, TINHATBEN_YELLOW),
    ("in", 0.02, TINHATBEN_GRAY),
    ("h", 0.06, TINHATBEN_YELLOW),
    ("at", 0.09, TINHATBEN_GRAY),
    ("b", 0.135, TINHATBEN_YELLOW),
    ("en.com", 0.16, TINHATBEN_GRAY),
];

/// The full watermark text
pub fn watermark_text() -> String {
    WATERMARK_FRAGMENTS.iter().map(|(text, _, _)| *text).collect()
}

/// Style shared by every fragment; only the colour varies
pub fn watermark_style(color: Color) -> TextStyle {
    TextStyle {
        vertical: VerticalAlignment::Bottom,
        horizontal: HorizontalAlignment::Left,
        coordinates: CoordinateSpace::Axes,
        color,
        font_size: WATERMARK_FONT_SIZE,
        font_style: FontStyle::Normal,
    }
}

/// Draw the "tinhatben.com" watermark with its bottom-left corner at `pos`,
/// in the surface's axes-relative coordinates.
///
/// Surface errors are returned as-is and stop the remaining fragments.
pub fn add_watermark<S>(surface: &mut S, pos: (f64, f64)) -> Result<(), S::Error>
where
    S: DrawingSurface + ?Sized,
{
    let (x, y) = pos;
    debug!("Adding watermark at ({}, {})", x, y);

    for (text, offset, color) in WATERMARK_FRAGMENTS {
        trace!("Drawing {:?} at x={} in {}", text, x + offset, color);
        surface.draw_text(x + offset, y, text, &watermark_style(color))?;
    }

    Ok(())
}
