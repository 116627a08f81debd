use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming a JSON file with the grid geometry.
pub const CONFIG_ENV_VAR: &str = "PIXEL_GRID_CONFIG";

/// Largest grid the editor will lay out.
pub const MAX_PIXEL_COUNT: u64 = 1 << 20;

/// Canvas and pixel dimensions, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct GridConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            canvas_width: 640,
            canvas_height: 480,
            pixel_width: 20,
            pixel_height: 20,
        }
    }
}

impl GridConfig {
    /// Build and validate a configuration.
    pub fn new(
        canvas_width: u32,
        canvas_height: u32,
        pixel_width: u32,
        pixel_height: u32,
    ) -> ConfigResult<Self> {
        let config = Self {
            canvas_width,
            canvas_height,
            pixel_width,
            pixel_height,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject zero sizes and canvases that are not an exact multiple of the pixel size.
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("pixel_width", self.pixel_width),
            ("pixel_height", self.pixel_height),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDimension { field });
            }
        }

        if self.canvas_width % self.pixel_width != 0 {
            return Err(ConfigError::NotDivisible {
                axis: "width",
                canvas: self.canvas_width,
                pixel: self.pixel_width,
            });
        }
        if self.canvas_height % self.pixel_height != 0 {
            return Err(ConfigError::NotDivisible {
                axis: "height",
                canvas: self.canvas_height,
                pixel: self.pixel_height,
            });
        }

        let count = u64::from(self.canvas_width / self.pixel_width)
            * u64::from(self.canvas_height / self.pixel_height);
        if count > MAX_PIXEL_COUNT {
            return Err(ConfigError::TooManyPixels {
                count,
                max: MAX_PIXEL_COUNT,
            });
        }
        Ok(())
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `PIXEL_GRID_CONFIG`, or use the defaults when unset.
    pub fn from_env() -> ConfigResult<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading grid config from {}", path.to_string_lossy());
                Self::load(path)
            }
            None => {
                log::info!("{CONFIG_ENV_VAR} not set, using default grid config");
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn columns(&self) -> usize {
        (self.canvas_width / self.pixel_width) as usize
    }

    pub fn rows(&self) -> usize {
        (self.canvas_height / self.pixel_height) as usize
    }

    pub fn pixel_count(&self) -> usize {
        self.columns() * self.rows()
    }
}
