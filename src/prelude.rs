//! straylc prelude.
//!
//! This module contains the most used types, traits and functions, which
//! you can import easily as a group.
//!
//! ```
//! use straylc::prelude::*;
//!
//! let lc = thickness_corrected(&MicrostripBuilder::new().thickness(35e-6).build()).unwrap();
//! assert_eq!(lc.regime(), Regime::ThickConductor);
//! ```

#[doc(no_inline)]
pub use crate::calculator::Calculator;

#[doc(no_inline)]
pub use crate::error::{ConfigError, StrayError};

#[doc(no_inline)]
pub use crate::microstrip::{
    thickness_corrected, thin_conductor, ExtendedWidth, Microstrip, MicrostripBuilder, Model,
    Regime, StrayLc, ThicknessCorrectedModel, ThinConductorModel, WidthRatio,
};

#[doc(no_inline)]
pub use crate::report::{render_json, render_text, Report};

#[doc(no_inline)]
pub use crate::scale::Scale;

#[doc(no_inline)]
pub use crate::unit::Unit;

#[doc(no_inline)]
pub use crate::via::{via_inductance, Via, ViaBuilder, ViaInductance, ViaModel};
