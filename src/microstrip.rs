//! Stray inductance and capacitance of a microstrip line.
//!
//! Two models are provided:
//!
//! * [`thin_conductor`] evaluates Hammerstad's closed-form equations and
//!   refuses lines whose conductor is not negligibly thin (T/H < 0.005).
//! * [`thickness_corrected`] falls back to the same equations for thin
//!   conductors and otherwise applies Hamood's thickness correction, which
//!   lowers the effective permittivity by a term C and widens the strip to an
//!   effective width W_E.
//!
//! Both return the line's effective permittivity and characteristic impedance
//! together with the stray elements
//!
//! ```text
//! INDUCTANCE  = Z_0 * (sqrt(E_EFF) / c) * L
//! CAPACITANCE = 1 / Z_0 * (sqrt(E_EFF) / c) * L
//! ```
//!
//! ## Example
//! ```
//! use straylc::microstrip::{thin_conductor, MicrostripBuilder, WidthRatio};
//! use straylc::scale::Scale;
//!
//! let line = MicrostripBuilder::new()
//!     .thickness_scaled(5.0, Scale::Micro)
//!     .width_scaled(1.5, Scale::Milli)
//!     .height_scaled(1.6, Scale::Milli)
//!     .length_scaled(1.0, Scale::Milli)
//!     .er(4.3)
//!     .build();
//!
//! let lc = thin_conductor(&line).unwrap();
//! assert_eq!(lc.branch(), WidthRatio::Narrow);
//! assert!(lc.inductance() > 0.0 && lc.capacitance() > 0.0);
//! ```

use crate::{
    calculator::Calculator,
    consts::{THIN_T_H_LIMIT, V_L, W_H_EXTENDED_SPLIT, W_H_SPLIT, Z_F},
    error::StrayError,
    scale::Scale,
};
use serde::Serialize;
use std::{f64::consts::PI, fmt};
use tracing::{debug, trace, warn};

/// Physical description of a microstrip line, all lengths in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Microstrip {
    thickness: f64,
    width: f64,
    height: f64,
    length: f64,
    er: f64,
}

impl Microstrip {
    pub fn new(thickness: f64, width: f64, height: f64, length: f64, er: f64) -> Microstrip {
        Microstrip {
            thickness,
            width,
            height,
            length,
            er,
        }
    }

    /// Conductor thickness T
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Trace width W
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Dielectric thickness H
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Trace length L
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Relative permittivity of the dielectric E_R
    pub fn er(&self) -> f64 {
        self.er
    }

    pub fn w_h(&self) -> f64 {
        self.width / self.height
    }

    pub fn t_h(&self) -> f64 {
        self.thickness / self.height
    }

    pub fn set_thickness(&mut self, val: f64) -> &mut Self {
        self.thickness = val;
        self
    }

    pub fn set_width(&mut self, val: f64) -> &mut Self {
        self.width = val;
        self
    }

    pub fn set_height(&mut self, val: f64) -> &mut Self {
        self.height = val;
        self
    }

    pub fn set_length(&mut self, val: f64) -> &mut Self {
        self.length = val;
        self
    }

    pub fn set_er(&mut self, val: f64) -> &mut Self {
        self.er = val;
        self
    }
}

impl Default for Microstrip {
    fn default() -> Self {
        Self {
            thickness: 18e-6,
            width: 1.5e-3,
            height: 1.6e-3,
            length: 1e-3,
            er: 4.3,
        }
    }
}

#[derive(Clone)]
pub struct MicrostripBuilder {
    thickness: f64,
    width: f64,
    height: f64,
    length: f64,
    er: f64,
}

impl MicrostripBuilder {
    pub fn new() -> Self {
        MicrostripBuilder::default()
    }

    pub fn thickness(mut self, val: f64) -> Self {
        self.thickness = val;
        self
    }

    pub fn thickness_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.thickness = scale.unscale(val);
        self
    }

    pub fn width(mut self, val: f64) -> Self {
        self.width = val;
        self
    }

    pub fn width_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.width = scale.unscale(val);
        self
    }

    pub fn height(mut self, val: f64) -> Self {
        self.height = val;
        self
    }

    pub fn height_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.height = scale.unscale(val);
        self
    }

    pub fn length(mut self, val: f64) -> Self {
        self.length = val;
        self
    }

    pub fn length_scaled(mut self, val: f64, scale: Scale) -> Self {
        self.length = scale.unscale(val);
        self
    }

    pub fn er(mut self, val: f64) -> Self {
        self.er = val;
        self
    }

    pub fn build(self) -> Microstrip {
        Microstrip::new(self.thickness, self.width, self.height, self.length, self.er)
    }
}

impl Default for MicrostripBuilder {
    fn default() -> Self {
        let line = Microstrip::default();
        Self {
            thickness: line.thickness,
            width: line.width,
            height: line.height,
            length: line.length,
            er: line.er,
        }
    }
}

/// Which pair of Hammerstad equations applies
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WidthRatio {
    /// W/H <= 1
    Narrow,
    /// W/H > 1
    Wide,
}

impl WidthRatio {
    pub fn from_w_h(w_h: f64) -> WidthRatio {
        if w_h <= W_H_SPLIT {
            WidthRatio::Narrow
        } else {
            WidthRatio::Wide
        }
    }

    pub fn to_str(&self) -> &str {
        match self {
            WidthRatio::Narrow => "W/H <= 1",
            WidthRatio::Wide => "W/H > 1",
        }
    }
}

impl fmt::Display for WidthRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Conductor regime the result was computed in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Regime {
    /// T/H < 0.005, Hammerstad's equations
    ThinConductor,
    /// T/H >= 0.005, Hamood's thickness correction
    ThickConductor,
}

impl Regime {
    pub fn to_str(&self) -> &str {
        match self {
            Regime::ThinConductor => "T/H < 0.005",
            Regime::ThickConductor => "T/H >= 0.005",
        }
    }

    /// Index into the reference list of the equation that was used
    pub fn reference(&self) -> usize {
        match self {
            Regime::ThinConductor => 1,
            Regime::ThickConductor => 3,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Calculator a result was produced by
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Model {
    /// Hammerstad only, thin conductors
    ThinConductor,
    /// Hammerstad with Hamood's thickness correction
    ThicknessCorrected,
}

/// Form of the extended width equation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ExtendedWidth {
    /// 2T/H < W/H < 1/(2π), W_E = W + 1.25T/π·(1 + ln(4πW/T))
    NarrowStrip,
    /// 2T/H < 1/(2π) < W/H, W_E = W + 1.25T/π·(1 + ln(2H/T))
    WideStrip,
}

/// Intermediates of the thickness-corrected regime
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ThicknessCorrection {
    correction: f64,
    extended_width: f64,
    form: ExtendedWidth,
}

impl ThicknessCorrection {
    /// Permittivity correction C
    pub fn correction(&self) -> f64 {
        self.correction
    }

    /// Extended width W_E
    pub fn extended_width(&self) -> f64 {
        self.extended_width
    }

    pub fn form(&self) -> ExtendedWidth {
        self.form
    }
}

/// Stray elements of a microstrip line and the intermediates they came from
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrayLc {
    line: Microstrip,
    model: Model,
    regime: Regime,
    branch: WidthRatio,
    thickness: Option<ThicknessCorrection>,
    er_eff: f64,
    z0: f64,
    inductance: f64,
    capacitance: f64,
}

impl StrayLc {
    pub fn line(&self) -> &Microstrip {
        &self.line
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn branch(&self) -> WidthRatio {
        self.branch
    }

    pub fn thickness(&self) -> Option<ThicknessCorrection> {
        self.thickness
    }

    /// Effective permittivity E_EFF
    pub fn er_eff(&self) -> f64 {
        self.er_eff
    }

    /// Characteristic impedance Z_0 [Ω]
    pub fn z0(&self) -> f64 {
        self.z0
    }

    /// Stray inductance [H]
    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    /// Stray capacitance [F]
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Propagation delay per unit length sqrt(E_EFF)/c [s/m], shared by L and C
    pub fn delay_per_length(&self) -> f64 {
        self.er_eff.sqrt() / V_L
    }
}

pub fn er_eff_narrow(er: f64, w_h: f64) -> f64 {
    (er + 1.0) / 2.0
        + (er - 1.0) / 2.0 * ((1.0 + 12.0 / w_h).powf(-0.5) + 0.04 * (1.0 - w_h).powi(2))
}

pub fn er_eff_wide(er: f64, w_h: f64) -> f64 {
    (er + 1.0) / 2.0 + (er - 1.0) / 2.0 * (1.0 + 12.0 / w_h).powf(-0.5)
}

pub fn z0_narrow(er_eff: f64, w_h: f64) -> f64 {
    Z_F / (2.0 * PI * er_eff.sqrt()) * (8.0 / w_h + w_h / 4.0).ln()
}

pub fn z0_wide(er_eff: f64, w_h: f64) -> f64 {
    Z_F / (er_eff.sqrt() * (1.393 + w_h + 2.0 / 3.0 * (w_h + 1.444).ln()))
}

/// Reduction of the effective permittivity due to conductor thickness, C
pub fn thickness_correction(er: f64, t_h: f64, w_h: f64) -> f64 {
    (er - 1.0) / 4.6 * t_h / w_h.sqrt()
}

/// Effective width W_E of a strip of thickness `t`, width `w` over a dielectric of height `h`.
///
/// Only defined where one of the chained inequalities
/// `1/(2π) > W/H > 2T/H` or `W/H > 1/(2π) > 2T/H` holds.
pub fn extended_width(t: f64, w: f64, h: f64) -> Result<(f64, ExtendedWidth), StrayError> {
    let w_h = w / h;
    let t2_h = 2.0 * t / h;
    let form = if W_H_EXTENDED_SPLIT > w_h && w_h > t2_h {
        ExtendedWidth::NarrowStrip
    } else if w_h > W_H_EXTENDED_SPLIT && W_H_EXTENDED_SPLIT > t2_h {
        ExtendedWidth::WideStrip
    } else {
        warn!(w_h, t2_h, "extended width undefined");
        return Err(StrayError::ExtendedWidthUndefined { w_h, t_h: t / h });
    };
    let w_e = match form {
        ExtendedWidth::NarrowStrip => w + (1.25 * t) / PI * (1.0 + (4.0 * PI * w / t).ln()),
        ExtendedWidth::WideStrip => w + (1.25 * t) / PI * (1.0 + (2.0 * h / t).ln()),
    };
    debug!(?form, w_e, "extended width");
    Ok((w_e, form))
}

/// Stray (inductance, capacitance) of a line of `length` from E_EFF and Z_0
pub fn stray_lc(er_eff: f64, z0: f64, length: f64) -> (f64, f64) {
    let delay = er_eff.sqrt() / V_L;
    (z0 * delay * length, 1.0 / z0 * delay * length)
}

fn finish(
    line: &Microstrip,
    model: Model,
    regime: Regime,
    branch: WidthRatio,
    thickness: Option<ThicknessCorrection>,
    er_eff: f64,
    z0: f64,
) -> StrayLc {
    let (inductance, capacitance) = stray_lc(er_eff, z0, line.length);
    trace!(er_eff, z0, inductance, capacitance, "stray elements");
    StrayLc {
        line: *line,
        model,
        regime,
        branch,
        thickness,
        er_eff,
        z0,
        inductance,
        capacitance,
    }
}

fn hammerstad(line: &Microstrip, model: Model) -> StrayLc {
    let w_h = line.w_h();
    let branch = WidthRatio::from_w_h(w_h);
    debug!(w_h, %branch, "hammerstad equations");
    let (er_eff, z0) = match branch {
        WidthRatio::Narrow => {
            let er_eff = er_eff_narrow(line.er, w_h);
            (er_eff, z0_narrow(er_eff, w_h))
        }
        WidthRatio::Wide => {
            let er_eff = er_eff_wide(line.er, w_h);
            (er_eff, z0_wide(er_eff, w_h))
        }
    };
    finish(line, model, Regime::ThinConductor, branch, None, er_eff, z0)
}

/// Stray L and C of a line with a negligibly thin conductor.
///
/// Fails with [`StrayError::ThinConductorRequired`] when T/H >= 0.005.
pub fn thin_conductor(line: &Microstrip) -> Result<StrayLc, StrayError> {
    let t_h = line.t_h();
    if t_h >= THIN_T_H_LIMIT {
        warn!(t_h, "conductor is not negligibly thin");
        return Err(StrayError::ThinConductorRequired { t_h });
    }
    Ok(hammerstad(line, Model::ThinConductor))
}

/// Stray L and C of a line of any conductor thickness up to the dielectric height.
///
/// Checks run in order: the regime (T/H < 0.005, else T <= H and T < W/2),
/// then, for thick conductors only, the extended width.
pub fn thickness_corrected(line: &Microstrip) -> Result<StrayLc, StrayError> {
    let t_h = line.t_h();
    if t_h < THIN_T_H_LIMIT {
        debug!(t_h, regime = %Regime::ThinConductor, "regime selected");
        return Ok(hammerstad(line, Model::ThicknessCorrected));
    }

    let (t, w, h) = (line.thickness, line.width, line.height);
    if !(t <= h && t < w / 2.0) {
        warn!(t, h, w, "thick conductor conditions not satisfied");
        return Err(StrayError::UnsatisfiedConditions { t, h, w });
    }
    debug!(t_h, regime = %Regime::ThickConductor, "regime selected");

    let w_h = line.w_h();
    let correction = thickness_correction(line.er, t_h, w_h);
    let (extended_width, form) = extended_width(t, w, h)?;
    let we_h = extended_width / h;

    let branch = WidthRatio::from_w_h(w_h);
    debug!(w_h, %branch, correction, "hamood equations");
    let (er_eff, z0) = match branch {
        WidthRatio::Narrow => {
            let er_eff = er_eff_narrow(line.er, w_h) - correction;
            (er_eff, z0_narrow(er_eff, we_h))
        }
        WidthRatio::Wide => {
            let er_eff = er_eff_wide(line.er, w_h) - correction;
            (er_eff, z0_wide(er_eff, we_h))
        }
    };

    let thickness = ThicknessCorrection {
        correction,
        extended_width,
        form,
    };
    Ok(finish(
        line,
        Model::ThicknessCorrected,
        Regime::ThickConductor,
        branch,
        Some(thickness),
        er_eff,
        z0,
    ))
}

/// Hammerstad model restricted to thin conductors
pub struct ThinConductorModel;

impl Calculator for ThinConductorModel {
    type Input = Microstrip;
    type Output = StrayLc;

    const NAME: &'static str = "stray_lc_mstl";
    const ABOUT: &'static str = "Calculator of stray L,C in a microstrip line (thin conductor)";

    fn defaults() -> Microstrip {
        Microstrip::default()
    }

    fn calculate(input: &Microstrip) -> Result<StrayLc, StrayError> {
        thin_conductor(input)
    }
}

/// Hammerstad model with Hamood's thickness correction
pub struct ThicknessCorrectedModel;

impl Calculator for ThicknessCorrectedModel {
    type Input = Microstrip;
    type Output = StrayLc;

    const NAME: &'static str = "stray_l_mstl";
    const ABOUT: &'static str =
        "Calculator of stray L,C in a microstrip line (thickness corrected)";

    fn defaults() -> Microstrip {
        Microstrip::new(18e-6, 2e-3, 0.52e-3, 6.22e-3, 4.3)
    }

    fn calculate(input: &Microstrip) -> Result<StrayLc, StrayError> {
        thickness_corrected(input)
    }
}
