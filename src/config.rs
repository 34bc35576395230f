//! Parameter overrides for the calculators.
//!
//! Every calculator runs on its built-in parameters unless told otherwise.
//! Overrides come from `KEY=VALUE` arguments and from parameter files holding
//! one `KEY = VALUE` per line (`#` and `!` start comment lines). File values
//! are applied first, command line values last.
//!
//! Values accept an SI prefix and the parameter's unit symbol, so `18um`,
//! `18u`, `1.8e-5` and `1.8e-5m` all mean 18 µm. A bare unit symbol is the
//! base unit.

use crate::{
    calculator::Calculator,
    error::ConfigError,
    microstrip::Microstrip,
    scale::Scale,
    unit::Unit,
    via::Via,
};
use regex::Regex;
use simple_error::{bail, SimpleError};
use std::{fs, path::Path, str::FromStr, sync::OnceLock};
use tracing::debug;

/// A recognized parameter of a calculator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Param {
    pub key: &'static str,
    pub unit: Unit,
    pub about: &'static str,
}

pub trait Configurable {
    fn params() -> &'static [Param];
    /// Sets the parameter named by `key`, one of the keys from [`Configurable::params`]
    fn set_param(&mut self, key: &str, val: f64) -> Result<(), ConfigError>;
}

const MICROSTRIP_PARAMS: [Param; 5] = [
    Param {
        key: "T",
        unit: Unit::Meter,
        about: "thickness of the conductor metal",
    },
    Param {
        key: "W",
        unit: Unit::Meter,
        about: "width of the microstrip line",
    },
    Param {
        key: "H",
        unit: Unit::Meter,
        about: "thickness of the dielectric",
    },
    Param {
        key: "L",
        unit: Unit::Meter,
        about: "length of the microstrip line",
    },
    Param {
        key: "E_R",
        unit: Unit::None,
        about: "relative permittivity of the dielectric",
    },
];

const VIA_PARAMS: [Param; 3] = [
    Param {
        key: "H",
        unit: Unit::Meter,
        about: "height of the via",
    },
    Param {
        key: "R",
        unit: Unit::Meter,
        about: "radius of the via",
    },
    Param {
        key: "WAVE_L",
        unit: Unit::Meter,
        about: "wavelength of the signal through the via",
    },
];

impl Configurable for Microstrip {
    fn params() -> &'static [Param] {
        &MICROSTRIP_PARAMS
    }

    fn set_param(&mut self, key: &str, val: f64) -> Result<(), ConfigError> {
        match key {
            "T" => self.set_thickness(val),
            "W" => self.set_width(val),
            "H" => self.set_height(val),
            "L" => self.set_length(val),
            "E_R" => self.set_er(val),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        Ok(())
    }
}

impl Configurable for Via {
    fn params() -> &'static [Param] {
        &VIA_PARAMS
    }

    fn set_param(&mut self, key: &str, val: f64) -> Result<(), ConfigError> {
        match key {
            "H" => self.set_height(val),
            "R" => self.set_radius(val),
            "WAVE_L" => self.set_wavelength(val),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        Ok(())
    }
}

fn value_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?<num>[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*(?<suffix>\S*)\s*$")
            .expect("Invalid regex!")
    })
}

fn assignment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?<key>[A-Za-z_][A-Za-z0-9_]*)\s*=\s*(?<val>.*?)\s*$")
            .expect("Invalid regex!")
    })
}

/// Parses a number with an optional SI prefix and unit symbol into base units
pub fn parse_value(text: &str, unit: Unit) -> Result<f64, SimpleError> {
    let caps = match value_regex().captures(text) {
        Some(caps) => caps,
        None => bail!("'{}' is not a number", text.trim()),
    };
    let num: f64 = match caps["num"].parse() {
        Ok(num) => num,
        Err(e) => bail!("'{}': {}", &caps["num"], e),
    };
    let suffix = &caps["suffix"];
    let prefix = match unit {
        Unit::None if !suffix.is_empty() => bail!("unexpected suffix '{}'", suffix),
        Unit::None => suffix,
        _ => suffix.strip_suffix(unit.to_str()).unwrap_or(suffix),
    };
    let scale = Scale::from_str(prefix)?;
    Ok(scale.unscale(num))
}

/// Splits a `KEY=VALUE` assignment
pub fn parse_assignment(text: &str) -> Result<(String, String), SimpleError> {
    match assignment_regex().captures(text) {
        Some(caps) => Ok((caps["key"].to_string(), caps["val"].to_string())),
        None => bail!("expected KEY=VALUE, got '{}'", text.trim()),
    }
}

/// Applies one override to `input`, rejecting zero, negative and non-finite values
pub fn apply<I: Configurable>(input: &mut I, key: &str, value: &str) -> Result<(), ConfigError> {
    let param = I::params()
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(key))
        .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
    let val = parse_value(value, param.unit).map_err(|e| ConfigError::InvalidValue {
        key: param.key.to_string(),
        reason: e.to_string(),
    })?;
    if !(val.is_finite() && val > 0.0) {
        return Err(ConfigError::NonPositive {
            key: param.key.to_string(),
            value: val,
        });
    }
    debug!(key = param.key, val, "parameter override");
    input.set_param(param.key, val)
}

/// Applies every assignment of a parameter file to `input`
pub fn load_file<I: Configurable>(input: &mut I, path: &Path) -> Result<(), ConfigError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::File(format!("{}: {}", path.display(), e)))?;
    for (i, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let (key, value) = parse_assignment(line)
            .map_err(|e| ConfigError::File(format!("{} line {}: {}", path.display(), i + 1, e)))?;
        apply(input, &key, &value)?;
    }
    Ok(())
}

/// Output renderer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Everything a calculator run needs from its command line
#[derive(Clone, Debug, PartialEq)]
pub struct Options<I> {
    pub input: I,
    pub format: Format,
    pub help: bool,
}

pub fn parse_args<I, S>(defaults: I, args: &[S]) -> Result<Options<I>, ConfigError>
where
    I: Configurable,
    S: AsRef<str>,
{
    let mut format = Format::Text;
    let mut help = false;
    let mut files = vec![];
    let mut overrides = vec![];

    let mut iter = args.iter().map(|a| a.as_ref());
    while let Some(arg) = iter.next() {
        match arg {
            "-h" | "--help" => help = true,
            "--json" => format = Format::Json,
            "-f" | "--file" => match iter.next() {
                Some(path) => files.push(path.to_string()),
                None => return Err(ConfigError::MissingArgument(arg.to_string())),
            },
            _ if arg.contains('=') && !arg.starts_with('-') => overrides.push(arg),
            _ => return Err(ConfigError::UnknownOption(arg.to_string())),
        }
    }

    let mut input = defaults;
    if !help {
        for file in files {
            load_file(&mut input, Path::new(&file))?;
        }
        for arg in overrides {
            let (key, value) = parse_assignment(arg).map_err(|e| ConfigError::InvalidValue {
                key: arg.to_string(),
                reason: e.to_string(),
            })?;
            apply(&mut input, &key, &value)?;
        }
    }

    Ok(Options {
        input,
        format,
        help,
    })
}

pub fn usage<C: Calculator>() -> String {
    let mut text = format!(
        "{}\n\nUsage: {} [--json] [--file PATH] [KEY=VALUE ...]\n\nParameters:\n",
        C::ABOUT,
        C::NAME
    );
    for param in <C::Input as Configurable>::params() {
        let unit = match param.unit {
            Unit::None => "".to_string(),
            unit => format!(" [{}]", unit),
        };
        text.push_str(&format!("  {:<8}{}{}\n", param.key, param.about, unit));
    }
    text.push_str(
        "\nOptions:\n  \
         --json          print results as JSON\n  \
         -f, --file PATH read KEY = VALUE lines from PATH\n  \
         -h, --help      print this help\n",
    );
    text
}
