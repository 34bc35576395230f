use float_cmp::{approx_eq, F64Margin};

/// Margin for quantities of order unity (ratios, permittivities, ohms)
pub const DEFAULT_MARGIN: F64Margin = F64Margin {
    epsilon: 1e-10,
    ulps: 4,
};

/// Relative tolerance for quantities far from unity (henries, farads)
pub const RELATIVE_TOL: f64 = 1e-12;

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}

/// Compares with an epsilon scaled to the exemplar's magnitude.
pub fn comp_rel(exemplar: &f64, calc: &f64, relative: f64, test: &str, idx: &str) {
    let margin = F64Margin {
        epsilon: relative * exemplar.abs(),
        ulps: 4,
    };
    comp_f64(exemplar, calc, margin, test, idx);
}

pub fn comp_line(exemplar: &str, calc: &str, test: &str) {
    let mut i: usize = 0;
    let mut exemplar_iter = exemplar.lines();
    let mut calc_iter = calc.lines();
    loop {
        let (exemplar_line, calc_line) = match (exemplar_iter.next(), calc_iter.next()) {
            (None, None) => break,
            (Some(e), Some(c)) => (e, c),
            _ => panic!("test {} number of lines does not match >{}", test, i),
        };
        i += 1;
        assert!(
            exemplar_line == calc_line,
            "test {} line {} does not match\n  exemplar: {}\n      calc: {}",
            test,
            i,
            exemplar_line,
            calc_line
        );
    }
}
