use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod branding;
pub mod color;
pub mod error;
pub mod raster;
pub mod recording;
pub mod stamp;
pub mod surface;

pub use branding::{TINHATBEN_GRAY, TINHATBEN_YELLOW, add_watermark};
pub use color::Color;
pub use error::{BrandingError, ColorError, RasterError};
pub use raster::{AxesRect, RasterOptions, RasterSurface};
pub use recording::{RecordingSurface, TextCall};
pub use stamp::{StampOverrides, StampSettings, stamp_file};
pub use surface::{
    CoordinateSpace, DrawingSurface, FontStyle, HorizontalAlignment, TextStyle, VerticalAlignment,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub watermark: WatermarkConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    pub dpi: f32,
    pub font_path: PathBuf,
    pub axes: AxesRect,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WatermarkConfig {
    /// Anchor in axes coordinates
    pub position: (f64, f64),
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 100.0,
            font_path: PathBuf::from("static/DejaVuSans.ttf"),
            axes: AxesRect::default(),
        }
    }
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            position: (0.02, 0.02),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, BrandingError> {
        Ok(toml_edit::de::from_str::<Config>(content)?)
    }

    /// Read `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, BrandingError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            info!("Configuration loaded from: {:?}", path);
            Self::from_toml(&content)
        } else {
            info!("Config file not found at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    pub fn raster_options(&self) -> RasterOptions {
        RasterOptions {
            dpi: self.render.dpi,
            axes: self.render.axes,
        }
    }
}
