use std::fmt;

use crate::consts::{THIN_T_H_LIMIT, VIA_HEIGHT_MAX, VIA_HEIGHT_MIN, VIA_WAVELENGTH_FRACTION};

/// Applicability failures of the closed-form models. Each one ends the
/// calculation before any result is produced.
#[derive(Clone, Debug, PartialEq)]
pub enum StrayError {
    /// T/H >= 0.005 for a model that assumes a negligibly thin conductor
    ThinConductorRequired { t_h: f64 },
    /// Thick conductor outside T <= H and T < W/2
    UnsatisfiedConditions { t: f64, h: f64, w: f64 },
    /// Neither chained inequality for the extended width holds
    ExtendedWidthUndefined { w_h: f64, t_h: f64 },
    /// Via height outside the validated range and not electrically short
    ViaOutOfRange { height: f64, wavelength: f64 },
}

impl StrayError {
    /// Explanatory lines printed after the headline
    pub fn details(&self) -> Vec<String> {
        match self {
            StrayError::ThinConductorRequired { t_h } => vec![
                "This equation can only be used if the thickness of the line is negligibly thin."
                    .to_string(),
                format!("T/H = {}", t_h),
            ],
            StrayError::UnsatisfiedConditions { t, h, w } => vec![
                "A thick conductor requires T <= H and T < W/2.".to_string(),
                format!("T = {} [m], H = {} [m], W/2 = {} [m]", t, h, w / 2.0),
            ],
            StrayError::ExtendedWidthUndefined { w_h, t_h } => vec![
                "Requires 1/(2π) > W/H > 2T/H or W/H > 1/(2π) > 2T/H.".to_string(),
                format!(
                    "W/H = {}, 1/(2π) = {}, 2T/H = {}",
                    w_h,
                    crate::consts::W_H_EXTENDED_SPLIT,
                    2.0 * t_h
                ),
            ],
            StrayError::ViaOutOfRange { height, wavelength } => vec![
                format!(
                    "Requires {} <= H <= {} [m] or H <= {} * WAVE_L.",
                    VIA_HEIGHT_MIN, VIA_HEIGHT_MAX, VIA_WAVELENGTH_FRACTION
                ),
                format!("H = {} [m], WAVE_L = {} [m]", height, wavelength),
            ],
        }
    }
}

impl fmt::Display for StrayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StrayError::ThinConductorRequired { .. } => {
                write!(f, "T/H < {} does not hold.", THIN_T_H_LIMIT)
            }
            StrayError::UnsatisfiedConditions { .. } | StrayError::ViaOutOfRange { .. } => write!(
                f,
                "Unable to calculate because the conditional equation is not satisfied."
            ),
            StrayError::ExtendedWidthUndefined { .. } => write!(f, "W_E cannot be calculated."),
        }
    }
}

impl std::error::Error for StrayError {}

/// Failures at the configuration boundary, before any model is evaluated.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    UnknownKey(String),
    InvalidValue { key: String, reason: String },
    NonPositive { key: String, value: f64 },
    MissingArgument(String),
    UnknownOption(String),
    File(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::UnknownKey(key) => write!(f, "Unknown parameter: {}", key),
            ConfigError::InvalidValue { key, reason } => {
                write!(f, "Invalid value for {}: {}", key, reason)
            }
            ConfigError::NonPositive { key, value } => write!(
                f,
                "{} must be a positive finite number, got {}",
                key, value
            ),
            ConfigError::MissingArgument(opt) => write!(f, "Option {} requires an argument", opt),
            ConfigError::UnknownOption(opt) => write!(f, "Unknown option: {}", opt),
            ConfigError::File(msg) => write!(f, "Parameter file error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
