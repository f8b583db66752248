// ABOUTME: Shared color types and configuration for cocoa-extended.
// ABOUTME: Defines colors, contrast ratio math, and config file handling.

pub mod color;
pub mod config;
pub mod contrast;

pub use color::{Color, ColorParseError, ConversionError, Hsba, PatternId, Rgba};
pub use config::{Config, ConfigError, ContrastSettings, CursorSettings};
pub use contrast::{
    adjusted_color, adjusted_color_to_meet_contrast_ratio, brightness_to_meet_min_contrast_ratio,
    contrast_ratio, contrast_ratio_between, HsbAdjustment, DEFAULT_CONTRAST_RATIO,
};
