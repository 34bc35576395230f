use serde::Serialize;
use simple_error::{bail, SimpleError};
use std::{fmt, str::FromStr};

/// Descriptor of scaling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Scale {
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    #[default]
    Base,
    Kilo,
    Mega,
    Giga,
    Tera,
}

impl Scale {
    pub fn to_str(&self) -> &str {
        match self {
            Scale::Atto => "a",
            Scale::Femto => "f",
            Scale::Pico => "p",
            Scale::Nano => "n",
            Scale::Micro => "u",
            Scale::Milli => "m",
            Scale::Centi => "c",
            Scale::Base => "",
            Scale::Kilo => "k",
            Scale::Mega => "M",
            Scale::Giga => "G",
            Scale::Tera => "T",
        }
    }

    /// Provides multiplier for scale
    /// Scale::Pico = 1e-12
    pub fn multiplier(&self) -> f64 {
        match self {
            Scale::Atto => 1e-18,
            Scale::Femto => 1e-15,
            Scale::Pico => 1e-12,
            Scale::Nano => 1e-9,
            Scale::Micro => 1e-6,
            Scale::Milli => 1e-3,
            Scale::Centi => 1e-2,
            Scale::Base => 1.0,
            Scale::Kilo => 1e3,
            Scale::Mega => 1e6,
            Scale::Giga => 1e9,
            Scale::Tera => 1e12,
        }
    }

    /// Converts a value expressed in this scale back into the base unit
    pub fn unscale(&self, val: f64) -> f64 {
        val * self.multiplier()
    }
}

impl FromStr for Scale {
    type Err = SimpleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Atto" | "atto" | "a" => Ok(Scale::Atto),
            "Femto" | "femto" | "f" => Ok(Scale::Femto),
            "Pico" | "pico" | "p" => Ok(Scale::Pico),
            "Nano" | "nano" | "n" => Ok(Scale::Nano),
            "Micro" | "micro" | "u" | "µ" | "μ" => Ok(Scale::Micro),
            "Milli" | "milli" | "m" => Ok(Scale::Milli),
            "Centi" | "centi" | "c" => Ok(Scale::Centi),
            "" => Ok(Scale::Base),
            "Kilo" | "kilo" | "k" => Ok(Scale::Kilo),
            "Mega" | "mega" | "M" => Ok(Scale::Mega),
            "Giga" | "giga" | "G" => Ok(Scale::Giga),
            "Tera" | "tera" | "T" => Ok(Scale::Tera),
            _ => bail!("unknown SI prefix '{}'", s),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

#[cfg(test)]
mod scale_tests {
    use super::*;
    use crate::util::{comp_rel, RELATIVE_TOL};

    #[test]
    fn test_scale_from_str() {
        let tera = ["Tera", "tera", "T"];
        let giga = ["Giga", "giga", "G"];
        let mega = ["Mega", "mega", "M"];
        let kilo = ["Kilo", "kilo", "k"];
        let centi = ["Centi", "centi", "c"];
        let milli = ["Milli", "milli", "m"];
        let micro = ["Micro", "micro", "u", "µ", "μ"];
        let nano = ["Nano", "nano", "n"];
        let pico = ["Pico", "pico", "p"];
        let femto = ["Femto", "femto", "f"];
        let atto = ["Atto", "atto", "a"];

        for (names, scale) in [
            (&tera[..], Scale::Tera),
            (&giga[..], Scale::Giga),
            (&mega[..], Scale::Mega),
            (&kilo[..], Scale::Kilo),
            (&centi[..], Scale::Centi),
            (&milli[..], Scale::Milli),
            (&micro[..], Scale::Micro),
            (&nano[..], Scale::Nano),
            (&pico[..], Scale::Pico),
            (&femto[..], Scale::Femto),
            (&atto[..], Scale::Atto),
        ] {
            for name in names {
                assert_eq!(Scale::from_str(name).unwrap(), scale, "prefix {}", name);
            }
        }

        assert_eq!(Scale::from_str("").unwrap(), Scale::Base);
    }

    #[test]
    fn test_scale_rejects_unknown() {
        for bad in ["x", "google", "mm", "MHz"] {
            assert!(Scale::from_str(bad).is_err(), "prefix {} accepted", bad);
        }
    }

    #[test]
    fn test_scale_unscale() {
        let val: f64 = 3.24;

        comp_rel(&(val * 1e-6), &Scale::Micro.unscale(val), RELATIVE_TOL, "unscale()", "Micro");
        comp_rel(&(val * 1e-3), &Scale::Milli.unscale(val), RELATIVE_TOL, "unscale()", "Milli");
        comp_rel(&(val * 1e9), &Scale::Giga.unscale(val), RELATIVE_TOL, "unscale()", "Giga");
        comp_rel(&val, &Scale::Base.unscale(val), RELATIVE_TOL, "unscale()", "Base");
    }

    #[test]
    fn test_scale_display() {
        assert_eq!(Scale::Micro.to_string(), "u");
        assert_eq!(Scale::Base.to_string(), "");
    }
}
