use straylc::{
    cli::{self, EXIT_NOT_APPLICABLE, EXIT_SUCCESS, EXIT_USAGE},
    prelude::*,
    report::{HAMMERSTAD, LUDWIG},
};

fn run<C: Calculator>(args: &[&str]) -> (i32, String, String) {
    let mut out = vec![];
    let mut err = vec![];
    let code = cli::run::<C, _>(args, &mut out, &mut err).unwrap();
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn value_of(text: &str, label: &str) -> f64 {
    let prefix = format!("{}:\t ", label);
    let line = text
        .lines()
        .find(|l| l.starts_with(&prefix))
        .unwrap_or_else(|| panic!("no {} line in\n{}", label, text));
    line[prefix.len()..]
        .split_whitespace()
        .next()
        .unwrap()
        .parse()
        .unwrap()
}

#[test]
fn thin_conductor_source_defaults() {
    let line = MicrostripBuilder::new()
        .thickness_scaled(18.0, Scale::Micro)
        .width_scaled(1.5, Scale::Milli)
        .height_scaled(1.6, Scale::Milli)
        .length_scaled(1.0, Scale::Milli)
        .er(4.3)
        .build();
    assert_eq!(line, ThinConductorModel::defaults());
    match thin_conductor(&line) {
        Err(StrayError::ThinConductorRequired { t_h }) => {
            assert!((t_h - 0.01125).abs() <= 1e-15)
        }
        other => panic!("expected ThinConductorRequired, got {:?}", other),
    }

    let (code, out, err) = run::<ThinConductorModel>(&[]);
    assert_eq!(code, EXIT_NOT_APPLICABLE);
    assert!(out.is_empty());
    assert!(err.contains("T/H = 0.01125"));
}

#[test]
fn thin_conductor_source_geometry_with_thin_metal() {
    let line = MicrostripBuilder::new()
        .thickness_scaled(5.0, Scale::Micro)
        .width_scaled(1.5, Scale::Milli)
        .height_scaled(1.6, Scale::Milli)
        .length_scaled(1.0, Scale::Milli)
        .er(4.3)
        .build();
    let lc = thin_conductor(&line).unwrap();

    assert_eq!(lc.branch(), WidthRatio::Narrow);
    assert!(lc.er_eff().is_finite() && lc.er_eff() > 1.0);
    assert!(lc.z0().is_finite() && lc.z0() > 0.0);
    assert!(lc.inductance().is_finite() && lc.inductance() > 0.0);
    assert!(lc.capacitance().is_finite() && lc.capacitance() > 0.0);
}

#[test]
fn thin_conductor_executable_reports_in_order() {
    let (code, out, err) = run::<ThinConductorModel>(&["T=5um"]);
    assert_eq!(code, EXIT_SUCCESS);
    assert!(err.is_empty());
    assert!(out.ends_with(&format!("References\n[1] {}\n[2] {}\n", HAMMERSTAD, LUDWIG)));

    let labels: Vec<&str> = out
        .lines()
        .filter_map(|l| l.split_once(":\t").map(|(label, _)| label))
        .collect();
    assert_eq!(
        labels,
        ["T", "W", "H", "L", "E_R", "E_EFF", "Z_0", "INDUCTANCE", "CAPACITANCE"]
    );

    let lc = thin_conductor(&Microstrip::new(5e-6, 1.5e-3, 1.6e-3, 1e-3, 4.3)).unwrap();
    let inductance = value_of(&out, "INDUCTANCE");
    assert!((inductance - lc.inductance()).abs() <= 1e-12 * lc.inductance());
}

#[test]
fn thin_conductor_executable_rejects_thick_conductor() {
    let (code, out, err) = run::<ThinConductorModel>(&["T=18um", "H=0.52mm"]);
    assert_eq!(code, EXIT_NOT_APPLICABLE);
    assert!(out.is_empty());
    assert!(err.contains("negligibly thin"));
}

#[test]
fn thickness_corrected_regime_b_trigger() {
    let line = Microstrip::new(18e-6, 2e-3, 0.52e-3, 6.22e-3, 4.3);
    assert!(line.t_h() >= 0.005);

    let lc = thickness_corrected(&line).unwrap();
    assert_eq!(lc.regime(), Regime::ThickConductor);
    assert_eq!(lc.thickness().unwrap().form(), ExtendedWidth::WideStrip);
    assert!(lc.thickness().unwrap().extended_width() > line.width());
}

#[test]
fn thickness_corrected_executable_defaults() {
    let (code, out, _) = run::<ThicknessCorrectedModel>(&[]);
    assert_eq!(code, EXIT_SUCCESS);
    assert!(out.starts_with("T/H >= 0.005\n[3]'s equation was used\n"));
    assert!(value_of(&out, "W_E") > value_of(&out, "W"));
    assert!(value_of(&out, "C") > 0.0);
}

#[test]
fn thickness_corrected_executable_failures() {
    // T > H
    let (code, out, err) = run::<ThicknessCorrectedModel>(&["T=1mm"]);
    assert_eq!(code, EXIT_NOT_APPLICABLE);
    assert!(out.is_empty());
    assert!(err.starts_with(
        "ERROR: Unable to calculate because the conditional equation is not satisfied.\n"
    ));

    // 2T/H above 1/(2π) with a wide strip
    let (code, out, err) = run::<ThicknessCorrectedModel>(&["T=50um", "W=0.5mm", "H=0.5mm"]);
    assert_eq!(code, EXIT_NOT_APPLICABLE);
    assert!(out.is_empty());
    assert!(err.starts_with("ERROR: W_E cannot be calculated.\n"));
}

#[test]
fn via_source_defaults() {
    let via = ViaBuilder::new()
        .height(0.52e-3)
        .radius(0.15e-3)
        .wavelength(300e6)
        .build();
    let l = via_inductance(&via).unwrap();
    assert!(l.inductance().is_finite() && l.inductance() > 0.0);

    let (code, out, _) = run::<ViaModel>(&[]);
    assert_eq!(code, EXIT_SUCCESS);
    assert!((value_of(&out, "INDUCTANCE") - l.inductance()).abs() <= 1e-12 * l.inductance());
}

#[test]
fn via_executable_out_of_range() {
    let (code, out, err) = run::<ViaModel>(&["H=1mm", "WAVE_L=10mm"]);
    assert_eq!(code, EXIT_NOT_APPLICABLE);
    assert!(out.is_empty());
    assert!(err.contains("conditional equation is not satisfied"));
}

#[test]
fn executables_reject_bad_configuration() {
    let (code, _, err) = run::<ViaModel>(&["W=1mm"]);
    assert_eq!(code, EXIT_USAGE);
    assert!(err.contains("Unknown parameter: W"));

    let (code, _, err) = run::<ThinConductorModel>(&["W=-1mm"]);
    assert_eq!(code, EXIT_USAGE);
    assert!(err.contains("positive"));
}
