use thiserror::Error;

/// Errors raised while loading or validating the grid geometry.
///
/// These are fatal at startup: the editor refuses to start on a bad configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive integer")]
    ZeroDimension { field: &'static str },

    #[error("canvas {axis} {canvas} is not a multiple of pixel {axis} {pixel}")]
    NotDivisible {
        axis: &'static str,
        canvas: u32,
        pixel: u32,
    },

    #[error("grid of {count} pixels exceeds the limit of {max}")]
    TooManyPixels { count: u64, max: u64 },

    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised when a color control delivers text that is not a color.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("empty color value")]
    Empty,

    #[error("unrecognised color value: {0:?}")]
    Unrecognised(String),
}

/// Errors from tool selection requests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("no tool registered under {0:?}")]
    UnknownTool(String),

    #[error("tool {0:?} has no drag lifecycle and cannot be made active")]
    NotAGridTool(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ColorResult<T> = Result<T, ColorError>;
pub type ToolResult<T> = Result<T, ToolError>;
