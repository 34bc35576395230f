//! Stray inductance of a cylindrical via (Goldfarb & Pucel).
//!
//! ```text
//! L_VIA = μ0/(2π) · [H·ln((H + √(R² + H²))/R) + 1.5·(R − √(R² + H²))]
//! ```
//!
//! The fit was validated for via heights of 100 µm to 631 µm. Outside that
//! range it is still accepted when the via is electrically short,
//! H <= 0.03·WAVE_L.

use crate::{
    calculator::Calculator,
    consts::{MU_0, VIA_HEIGHT_MAX, VIA_HEIGHT_MIN, VIA_WAVELENGTH_FRACTION},
    error::StrayError,
    scale::Scale,
};
use serde::Serialize;
use std::f64::consts::PI;
use tracing::{debug, trace, warn};

/// Cylindrical via, lengths in meters
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Via {
    height: f64,
    radius: f64,
    wavelength: f64,
}

impl Via {
    pub fn new(height: f64, radius: f64, wavelength: f64) -> Via {
        Via {
            height,
            radius,
            wavelength,
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Wavelength of the signal passing through the via
    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    pub fn set_height(&mut self, val: f64) -> &mut Self {
        self.height = val;
        self
    }

    pub fn set_radius(&mut self, val: f64) -> &mut Self {
        self.radius = val;
        self
    }

    pub fn set_wavelength(&mut self, val: f64) -> &mut Self {
        self.wavelength = val;
        self
    }
}

impl Default for Via {
    fn default() -> Self {
        Self {
            height: 0.52e-3,
            radius: 0.15e-3,
            wavelength: 300e6,
        }
    }
}

#[derive(Clone)]
pub struct ViaBuilder {
    height: f64,
    radius: f64,
    wavelength: f64,
}

impl ViaBuilder {
    pub fn new() -> Self {
        ViaBuilder::default()
    }

    pub fn height(mut self, val: f64) -> Self {
        self.height = val;
        self
    }

    pub fn height_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.height = scale.unscale(val);
        self
    }

    pub fn radius(mut self, val: f64) -> Self {
        self.radius = val;
        self
    }

    pub fn radius_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.radius = scale.unscale(val);
        self
    }

    pub fn wavelength(mut self, val: f64) -> Self {
        self.wavelength = val;
        self
    }

    pub fn wavelength_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.wavelength = scale.unscale(val);
        self
    }

    pub fn build(self) -> Via {
        Via::new(self.height, self.radius, self.wavelength)
    }
}

impl Default for ViaBuilder {
    fn default() -> Self {
        let via = Via::default();
        Self {
            height: via.height,
            radius: via.radius,
            wavelength: via.wavelength,
        }
    }
}

/// Stray inductance of a via
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ViaInductance {
    via: Via,
    mean_sq: f64,
    inductance: f64,
}

impl ViaInductance {
    pub fn via(&self) -> &Via {
        &self.via
    }

    /// √(R² + H²)
    pub fn mean_sq(&self) -> f64 {
        self.mean_sq
    }

    /// Stray inductance [H]
    pub fn inductance(&self) -> f64 {
        self.inductance
    }
}

/// True for 100 µm <= `height` <= 631 µm
pub fn within_validated_height(height: f64) -> bool {
    (VIA_HEIGHT_MIN..=VIA_HEIGHT_MAX).contains(&height)
}

/// True when `height` <= 0.03 · `wavelength`
pub fn electrically_short(height: f64, wavelength: f64) -> bool {
    height <= wavelength * VIA_WAVELENGTH_FRACTION
}

pub fn via_inductance(via: &Via) -> Result<ViaInductance, StrayError> {
    let (h, r) = (via.height, via.radius);
    if !within_validated_height(h) && !electrically_short(h, via.wavelength) {
        warn!(height = h, wavelength = via.wavelength, "via outside validated range");
        return Err(StrayError::ViaOutOfRange {
            height: h,
            wavelength: via.wavelength,
        });
    }
    debug!(
        height = h,
        validated = within_validated_height(h),
        "via inductance"
    );

    let mean_sq = (r * r + h * h).sqrt();
    let inductance = MU_0 / (2.0 * PI) * (h * ((h + mean_sq) / r).ln() + 1.5 * (r - mean_sq));
    trace!(mean_sq, inductance, "via stray inductance");

    Ok(ViaInductance {
        via: *via,
        mean_sq,
        inductance,
    })
}

/// Goldfarb & Pucel via model
pub struct ViaModel;

impl Calculator for ViaModel {
    type Input = Via;
    type Output = ViaInductance;

    const NAME: &'static str = "stray_l_via";
    const ABOUT: &'static str = "Calculator of stray L of a via in a microstrip line";

    fn defaults() -> Via {
        Via::default()
    }

    fn calculate(input: &Via) -> Result<ViaInductance, StrayError> {
        via_inductance(input)
    }
}
