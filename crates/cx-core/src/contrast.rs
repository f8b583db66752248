// ABOUTME: Contrast ratio math between two colors.
// ABOUTME: Finds the brightness a color needs to hit a target ratio and adjusts HSB components.

use serde::{Deserialize, Serialize};

use crate::color::{Color, ConversionError, Hsba};

/// Ratio considered great contrast for accessibility
pub const DEFAULT_CONTRAST_RATIO: f64 = 7.0;

pub const MIN_CONTRAST_RATIO: f64 = 1.0;

pub const MAX_CONTRAST_RATIO: f64 = 21.0;

/// Contrast ratio between two brightness values, from 1 (none) to 21 (black on white).
pub fn contrast_ratio_between(a: f64, b: f64) -> f64 {
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    (hi + 0.05) / (lo + 0.05)
}

/// Contrast ratio of two colors, compared in device RGB.
pub fn contrast_ratio(a: &Color, b: &Color) -> Result<f64, ConversionError> {
    Ok(contrast_ratio_between(a.brightness()?, b.brightness()?))
}

/// Brightness `subject` should have to reach `target` contrast with `reference`.
///
/// `target` is clamped to 1..=21. A subject strictly brighter than the
/// reference stays on the bright side; otherwise the result is darker than
/// the reference. The result is not clamped to 0..=1, so an unreachable
/// ratio shows up as a value outside that range.
pub fn brightness_to_meet_min_contrast_ratio(
    target: f64,
    reference: &Color,
    subject: &Color,
) -> Result<f64, ConversionError> {
    let reference = reference.brightness()?;
    let subject = subject.brightness()?;
    let target = target.clamp(MIN_CONTRAST_RATIO, MAX_CONTRAST_RATIO);

    let brightness = if subject > reference {
        target * (reference + 0.05) - 0.05
    } else {
        (reference + 0.05) / target - 0.05
    };

    tracing::debug!(
        "Brightness {:.4} meets ratio {} against {:.4}",
        brightness,
        target,
        reference
    );
    Ok(brightness)
}

/// Per-component HSB override. `None` keeps the base color's component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HsbAdjustment {
    pub hue: Option<f64>,
    pub saturation: Option<f64>,
    pub brightness: Option<f64>,
    pub alpha: Option<f64>,
}

impl HsbAdjustment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hue(mut self, hue: f64) -> Self {
        self.hue = Some(hue);
        self
    }

    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = Some(saturation);
        self
    }

    pub fn with_brightness(mut self, brightness: f64) -> Self {
        self.brightness = Some(brightness);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.hue.is_none()
            && self.saturation.is_none()
            && self.brightness.is_none()
            && self.alpha.is_none()
    }

    fn apply(&self, base: Hsba) -> Hsba {
        Hsba {
            hue: self.hue.unwrap_or(base.hue),
            saturation: self.saturation.unwrap_or(base.saturation),
            brightness: self.brightness.unwrap_or(base.brightness),
            alpha: self.alpha.unwrap_or(base.alpha),
        }
    }
}

/// New color with the given components replaced.
///
/// Returns `base` unchanged if the adjustment is empty or `base` has no
/// device RGB representation.
pub fn adjusted_color(base: &Color, adjustment: &HsbAdjustment) -> Color {
    if adjustment.is_empty() {
        return *base;
    }
    match base.to_hsba() {
        Ok(hsba) => Color::Rgb(adjustment.apply(hsba).to_rgba()),
        Err(e) => {
            tracing::warn!("Keeping color unadjusted: {}", e);
            *base
        }
    }
}

/// `subject` with its brightness changed to reach `target` contrast with `reference`.
pub fn adjusted_color_to_meet_contrast_ratio(
    target: f64,
    reference: &Color,
    subject: &Color,
) -> Result<Color, ConversionError> {
    let brightness = brightness_to_meet_min_contrast_ratio(target, reference, subject)?;
    Ok(adjusted_color(
        subject,
        &HsbAdjustment::new().with_brightness(brightness),
    ))
}

impl Color {
    pub fn contrast_ratio(&self, other: &Color) -> Result<f64, ConversionError> {
        contrast_ratio(self, other)
    }

    /// Brightness this color needs for the default ratio of 7 against `other`.
    pub fn brightness_to_meet_contrast(&self, other: &Color) -> Result<f64, ConversionError> {
        brightness_to_meet_min_contrast_ratio(DEFAULT_CONTRAST_RATIO, other, self)
    }

    pub fn adjusted(&self, adjustment: &HsbAdjustment) -> Color {
        adjusted_color(self, adjustment)
    }

    /// This color re-lit for the default ratio of 7 against `other`.
    pub fn adjusted_to_meet_contrast(&self, other: &Color) -> Result<Color, ConversionError> {
        adjusted_color_to_meet_contrast_ratio(DEFAULT_CONTRAST_RATIO, other, self)
    }
}
