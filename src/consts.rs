//! Physical constants and the applicability limits of the closed-form models.

use std::f64::consts::PI;

/// Speed of light in vacuum [m/s]
pub const V_L: f64 = 299_792_458.0;

/// Free-space wave impedance approximated as 120π [Ω]
pub const Z_F: f64 = 120.0 * PI;

/// Vacuum permeability μ0 = 4π·10⁻⁷ [H/m]
pub const MU_0: f64 = 4.0 * PI * 1e-7;

/// Largest T/H for which the conductor counts as negligibly thin
pub const THIN_T_H_LIMIT: f64 = 0.005;

/// W/H at which the narrow and wide strip equations hand over
pub const W_H_SPLIT: f64 = 1.0;

/// W/H separating the two forms of the extended-width correction, 1/(2π)
pub const W_H_EXTENDED_SPLIT: f64 = 1.0 / (2.0 * PI);

/// Lower bound of the via height range the inductance fit was validated on [m]
pub const VIA_HEIGHT_MIN: f64 = 100e-6;

/// Upper bound of the via height range the inductance fit was validated on [m]
pub const VIA_HEIGHT_MAX: f64 = 631e-6;

/// Fraction of a wavelength under which a via is electrically short
pub const VIA_WAVELENGTH_FRACTION: f64 = 0.03;

#[cfg(test)]
mod consts_tests {
    use super::*;
    use crate::util::{comp_f64, comp_rel, DEFAULT_MARGIN, RELATIVE_TOL};

    #[test]
    fn test_free_space_impedance() {
        comp_f64(&376.991_118_430_775_2, &Z_F, DEFAULT_MARGIN, "Z_F", "");
    }

    #[test]
    fn test_mu_0() {
        comp_rel(&1.256_637_061_435_917_3e-6, &MU_0, RELATIVE_TOL, "MU_0", "");
    }
}
