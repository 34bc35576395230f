use serde::Serialize;
use std::fmt;

/// Descriptor of unit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Unit {
    #[default]
    None, // Dimensionless
    Meter,  // Length in meters
    Ohm,    // Resistance in ohms
    Henry,  // Inductance in henries
    Farad,  // Capacitance in farads
}

impl Unit {
    pub fn to_str(&self) -> &str {
        match self {
            Unit::None => "",
            Unit::Meter => "m",
            Unit::Ohm => "Ω",
            Unit::Henry => "H",
            Unit::Farad => "F",
        }
    }

    /// Bracketed annotation used on report lines, empty for dimensionless values
    pub fn annotation(&self) -> String {
        match self {
            Unit::None => "".to_string(),
            _ => format!(" [{}]", self.to_str()),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
