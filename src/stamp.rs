use crate::error::BrandingError;
use crate::raster::{AxesRect, RasterOptions, RasterSurface};
use crate::{Config, add_watermark};
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::info;

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StampOverrides {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub font: Option<PathBuf>,
    pub dpi: Option<f32>,
    /// Treat the whole image as the axes area
    pub figure: bool,
}

/// Everything needed to watermark one image
#[derive(Debug, Clone, PartialEq)]
pub struct StampSettings {
    pub font_path: PathBuf,
    pub options: RasterOptions,
    pub position: (f64, f64),
}

impl StampSettings {
    pub fn resolve(config: &Config, overrides: &StampOverrides) -> Self {
        let (default_x, default_y) = config.watermark.position;

        let mut options = config.raster_options();
        if let Some(dpi) = overrides.dpi {
            options.dpi = dpi;
        }
        if overrides.figure {
            options.axes = AxesRect::FULL;
        }

        Self {
            font_path: overrides
                .font
                .clone()
                .unwrap_or_else(|| config.render.font_path.clone()),
            options,
            position: (
                overrides.x.unwrap_or(default_x),
                overrides.y.unwrap_or(default_y),
            ),
        }
    }
}

/// Open `input`, draw the watermark, and save to `output`
pub fn stamp_file(input: &Path, output: &Path, settings: &StampSettings) -> Result<(), BrandingError> {
    let (x, y) = settings.position;
    info!("Stamping {:?} at ({}, {})", input, x, y);

    let image = image::open(input)?;
    let mut surface =
        RasterSurface::from_font_file(image.to_rgba8(), &settings.font_path, settings.options)?;
    add_watermark(&mut surface, settings.position)?;

    prepare_for_output(surface.into_image(), output).save(output)?;
    info!("Wrote {:?}", output);
    Ok(())
}

/// JPEG has no alpha channel, so those outputs are flattened to RGB
fn prepare_for_output(image: RgbaImage, output: &Path) -> DynamicImage {
    let is_jpeg = output
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
        .unwrap_or(false);

    let rgba = DynamicImage::ImageRgba8(image);
    if is_jpeg {
        DynamicImage::ImageRgb8(rgba.to_rgb8())
    } else {
        rgba
    }
}
