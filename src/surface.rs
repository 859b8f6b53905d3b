use crate::color::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    Center,
    Baseline,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

/// Which rectangle normalized coordinates are relative to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSpace {
    /// The axes drawing area: (0, 0) bottom-left, (1, 1) top-right
    Axes,
    /// The whole canvas
    Figure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

/// Styling for a single text-draw call
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TextStyle {
    pub vertical: VerticalAlignment,
    pub horizontal: HorizontalAlignment,
    pub coordinates: CoordinateSpace,
    pub color: Color,
    /// Font size in points
    pub font_size: f32,
    pub font_style: FontStyle,
}

/// A canvas that can place text at normalized coordinates.
///
/// Implementations decide how coordinates, sizes and alignment map onto
/// their own output; callers only see this one primitive.
pub trait DrawingSurface {
    type Error;

    fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle)
    -> Result<(), Self::Error>;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    type Error = S::Error;

    fn draw_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        (**self).draw_text(x, y, text, style)
    }
}
