//! Console and JSON rendering of calculator results.
//!
//! The text form prints labelled `KEY:\t value [unit]` lines in groups
//! separated by blank lines: notes, inputs, intermediates, results and
//! finally the literature the equations come from.

use crate::{
    microstrip::{Model, StrayLc},
    unit::Unit,
    via::ViaInductance,
};
use serde::Serialize;
use std::fmt::Write;

pub const HAMMERSTAD: &str = "Erik O. Hammerstad, \"Equations for Microstrip Circuit Design\", 5th European Microwave Conference, 1975";
pub const LUDWIG: &str = "Reinhold Ludwig, Gene Bogdanov, \"RF Circuit Design: Theory and Applications: Second Edition\", PEARSON, 2012";
pub const HAMOOD: &str = "Mohammed K. Hamood, \"Line Thickness for Various Characteristic Impedance of Microstrip Line\", Tikrit Journal of Pure Science, 2013";
pub const GOLDFARB: &str = "M.E. Goldfarb, R.A. Pucel, \"Modeling via hole grounds in microstrip\", IEEE Microwave and Guided Wave Letters, 1991";

/// One labelled value of a report
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Entry {
    label: &'static str,
    value: f64,
    unit: Unit,
}

impl Entry {
    pub fn new(label: &'static str, value: f64, unit: Unit) -> Entry {
        Entry { label, value, unit }
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}

pub trait Report: Serialize {
    /// Free-form lines describing which equations were used
    fn notes(&self) -> Vec<String> {
        vec![]
    }
    fn inputs(&self) -> Vec<Entry>;
    fn intermediates(&self) -> Vec<Entry> {
        vec![]
    }
    fn results(&self) -> Vec<Entry>;
    fn references(&self) -> Vec<&'static str>;
}

/// Formats like a shortest round-trip repr, switching to exponent
/// notation below 1e-4 and from 1e16 upwards.
pub fn format_value(val: f64) -> String {
    let mag = val.abs();
    if val != 0.0 && val.is_finite() && !(1e-4..1e16).contains(&mag) {
        format!("{:e}", val)
    } else {
        format!("{}", val)
    }
}

fn write_entries(buf: &mut String, entries: &[Entry]) {
    for entry in entries {
        // writing into a String cannot fail
        let _ = writeln!(
            buf,
            "{}:\t {}{}",
            entry.label,
            format_value(entry.value),
            entry.unit.annotation()
        );
    }
}

pub fn render_text<R: Report>(report: &R) -> String {
    let mut buf = String::new();
    let notes = report.notes();
    if !notes.is_empty() {
        for note in notes {
            buf.push_str(&note);
            buf.push('\n');
        }
        buf.push('\n');
    }
    for group in [report.inputs(), report.intermediates(), report.results()] {
        if group.is_empty() {
            continue;
        }
        write_entries(&mut buf, &group);
        buf.push('\n');
    }
    let references = report.references();
    if !references.is_empty() {
        buf.push_str("References\n");
        for (i, reference) in references.iter().enumerate() {
            let _ = writeln!(buf, "[{}] {}", i + 1, reference);
        }
    }
    buf
}

#[derive(Serialize)]
struct JsonReport<'a, R: Serialize> {
    notes: Vec<String>,
    inputs: Vec<Entry>,
    intermediates: Vec<Entry>,
    results: Vec<Entry>,
    references: Vec<&'static str>,
    detail: &'a R,
}

pub fn render_json<R: Report>(report: &R) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        notes: report.notes(),
        inputs: report.inputs(),
        intermediates: report.intermediates(),
        results: report.results(),
        references: report.references(),
        detail: report,
    })
}

impl Report for StrayLc {
    fn notes(&self) -> Vec<String> {
        vec![
            self.regime().to_string(),
            format!("[{}]'s equation was used", self.regime().reference()),
            self.branch().to_string(),
        ]
    }

    fn inputs(&self) -> Vec<Entry> {
        let line = self.line();
        vec![
            Entry::new("T", line.thickness(), Unit::Meter),
            Entry::new("W", line.width(), Unit::Meter),
            Entry::new("H", line.height(), Unit::Meter),
            Entry::new("L", line.length(), Unit::Meter),
            Entry::new("E_R", line.er(), Unit::None),
        ]
    }

    fn intermediates(&self) -> Vec<Entry> {
        let mut entries = vec![];
        if let Some(thickness) = self.thickness() {
            entries.push(Entry::new("C", thickness.correction(), Unit::None));
            entries.push(Entry::new("W_E", thickness.extended_width(), Unit::Meter));
        }
        entries.push(Entry::new("E_EFF", self.er_eff(), Unit::None));
        entries.push(Entry::new("Z_0", self.z0(), Unit::Ohm));
        entries
    }

    fn results(&self) -> Vec<Entry> {
        vec![
            Entry::new("INDUCTANCE", self.inductance(), Unit::Henry),
            Entry::new("CAPACITANCE", self.capacitance(), Unit::Farad),
        ]
    }

    fn references(&self) -> Vec<&'static str> {
        match self.model() {
            Model::ThinConductor => vec![HAMMERSTAD, LUDWIG],
            Model::ThicknessCorrected => vec![HAMMERSTAD, LUDWIG, HAMOOD],
        }
    }
}

impl Report for ViaInductance {
    fn inputs(&self) -> Vec<Entry> {
        let via = self.via();
        vec![
            Entry::new("H", via.height(), Unit::Meter),
            Entry::new("R", via.radius(), Unit::Meter),
            Entry::new("WAVE_L", via.wavelength(), Unit::Meter),
        ]
    }

    fn results(&self) -> Vec<Entry> {
        vec![Entry::new("INDUCTANCE", self.inductance(), Unit::Henry)]
    }

    fn references(&self) -> Vec<&'static str> {
        vec![GOLDFARB]
    }
}
