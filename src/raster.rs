use crate::error::RasterError;
use crate::surface::{
    CoordinateSpace, DrawingSurface, FontStyle, HorizontalAlignment, TextStyle, VerticalAlignment,
};
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use imageproc::drawing::{draw_text_mut, text_size};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, trace};

/// Placement of the axes drawing area inside the figure, as fractions of the
/// figure measured from its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AxesRect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl AxesRect {
    /// The axes cover the whole figure
    pub const FULL: AxesRect = AxesRect {
        left: 0.0,
        bottom: 0.0,
        width: 1.0,
        height: 1.0,
    };
}

impl Default for AxesRect {
    // Standard single-subplot margins
    fn default() -> Self {
        Self {
            left: 0.125,
            bottom: 0.11,
            width: 0.775,
            height: 0.77,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterOptions {
    /// Pixels per inch, used to turn point sizes into pixels
    pub dpi: f32,
    pub axes: AxesRect,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            dpi: 100.0,
            axes: AxesRect::default(),
        }
    }
}

/// Renders text onto an RGBA image buffer with a single TrueType font
pub struct RasterSurface {
    image: RgbaImage,
    font: FontVec,
    options: RasterOptions,
}

impl RasterSurface {
    pub fn new(image: RgbaImage, font: FontVec, options: RasterOptions) -> Self {
        Self {
            image,
            font,
            options,
        }
    }

    /// Load the font from file and wrap `image`
    pub fn from_font_file(
        image: RgbaImage,
        font_path: &Path,
        options: RasterOptions,
    ) -> Result<Self, RasterError> {
        let font_data = std::fs::read(font_path)?;
        let font = FontVec::try_from_vec(font_data).map_err(|_| RasterError::InvalidFont)?;
        debug!("Loaded font from {:?}", font_path);
        Ok(Self::new(image, font, options))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn options(&self) -> &RasterOptions {
        &self.options
    }

    fn scale_for(&self, font_size: f32) -> PxScale {
        PxScale::from(font_size * self.options.dpi / 72.0)
    }
}

impl DrawingSurface for RasterSurface {
    type Error = RasterError;

    fn draw_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), Self::Error> {
        if style.font_style != FontStyle::Normal {
            return Err(RasterError::UnsupportedFontStyle(style.font_style));
        }

        let invalid = || RasterError::InvalidCoordinate {
            text: text.to_string(),
            x,
            y,
        };
        if !x.is_finite() || !y.is_finite() {
            return Err(invalid());
        }

        let scale = self.scale_for(style.font_size);
        let scaled = self.font.as_scaled(scale);
        let metrics = LineMetrics {
            ascent: scaled.ascent(),
            descent: scaled.descent(),
        };
        let (text_width, _) = text_size(scale, &self.font, text);

        let anchor = anchor_to_pixel(
            x,
            y,
            style.coordinates,
            &self.options.axes,
            self.image.dimensions(),
        );
        let (left, top) = aligned_origin(
            anchor,
            text_width,
            metrics,
            style.vertical,
            style.horizontal,
        );
        let (width, height) = self.image.dimensions();
        if is_off_canvas((left, top), text_width, metrics, (width, height)) {
            trace!("Skipping {:?}, box at ({}, {}) is off the image", text, left, top);
            return Ok(());
        }

        let (px, py) = match (to_i32(left), to_i32(top)) {
            (Some(px), Some(py)) => (px, py),
            _ => return Err(invalid()),
        };

        trace!(
            "Rendering {:?} at pixel ({}, {}) width {} scale {:?}",
            text, px, py, text_width, scale
        );

        draw_text_mut(
            &mut self.image,
            style.color.to_rgba(),
            px,
            py,
            scale,
            &self.font,
            text,
        );

        Ok(())
    }
}

/// Map a normalized point to image pixels. Normalized y grows upwards, pixel
/// y grows downwards.
pub fn anchor_to_pixel(
    x: f64,
    y: f64,
    space: CoordinateSpace,
    axes: &AxesRect,
    (width, height): (u32, u32),
) -> (f64, f64) {
    let rect = match space {
        CoordinateSpace::Axes => *axes,
        CoordinateSpace::Figure => AxesRect::FULL,
    };
    let width = width as f64;
    let height = height as f64;

    let px = (rect.left + x * rect.width) * width;
    let py = height - (rect.bottom + y * rect.height) * height;
    (px, py)
}

/// Vertical font metrics in pixels; `descent` is negative below the baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl LineMetrics {
    pub fn height(&self) -> f32 {
        self.ascent - self.descent
    }
}

/// Top-left corner of a one-line text box aligned against `anchor`. The box
/// spans the font's full line height so fragments of a word share a baseline.
pub fn aligned_origin(
    anchor: (f64, f64),
    text_width: u32,
    metrics: LineMetrics,
    vertical: VerticalAlignment,
    horizontal: HorizontalAlignment,
) -> (f64, f64) {
    let (ax, ay) = anchor;
    let w = text_width as f64;
    let h = metrics.height() as f64;

    let left = match horizontal {
        HorizontalAlignment::Left => ax,
        HorizontalAlignment::Center => ax - w / 2.0,
        HorizontalAlignment::Right => ax - w,
    };
    let top = match vertical {
        VerticalAlignment::Top => ay,
        VerticalAlignment::Center => ay - h / 2.0,
        VerticalAlignment::Baseline => ay - metrics.ascent as f64,
        VerticalAlignment::Bottom => ay - h,
    };
    (left, top)
}

/// Whether a text box with top-left `origin` misses the image entirely.
/// Such boxes are never handed to the rasterizer, whose glyph offsets are
/// plain `i32` additions.
pub fn is_off_canvas(
    (left, top): (f64, f64),
    text_width: u32,
    metrics: LineMetrics,
    (width, height): (u32, u32),
) -> bool {
    left + (text_width as f64) < 0.0
        || left > width as f64
        || top + (metrics.height() as f64) < 0.0
        || top > height as f64
}

fn to_i32(value: f64) -> Option<i32> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= i32::MIN as f64 && rounded <= i32::MAX as f64 {
        Some(rounded as i32)
    } else {
        None
    }
}
