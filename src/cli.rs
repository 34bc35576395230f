//! Boundary between the pure calculators and the process: argument parsing,
//! rendering, diagnostics and exit codes.

use crate::{
    calculator::Calculator,
    config::{parse_args, usage, Format},
    report::{render_json, render_text},
};
use std::io::{self, Write};
use tracing::error;
use tracing_subscriber::EnvFilter;

pub const EXIT_SUCCESS: i32 = 0;
/// An applicability condition of the model does not hold
pub const EXIT_NOT_APPLICABLE: i32 = 1;
/// Bad arguments or parameter file
pub const EXIT_USAGE: i32 = 2;
/// Report or diagnostics could not be written
pub const EXIT_IO: i32 = 3;

/// Installs a stderr logger filtered by `RUST_LOG`, `error` when unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    // a second call keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Runs calculator `C` with `args` (program name excluded) and returns the exit code.
pub fn run<C, S>(args: &[S], out: &mut impl Write, err: &mut impl Write) -> io::Result<i32>
where
    C: Calculator,
    S: AsRef<str>,
{
    let opts = match parse_args(C::defaults(), args) {
        Ok(opts) => opts,
        Err(e) => {
            writeln!(err, "ERROR: {}", e)?;
            writeln!(err, "Try '{} --help'.", C::NAME)?;
            return Ok(EXIT_USAGE);
        }
    };
    if opts.help {
        write!(out, "{}", usage::<C>())?;
        return Ok(EXIT_SUCCESS);
    }

    let result = match C::calculate(&opts.input) {
        Ok(result) => result,
        Err(e) => {
            writeln!(err, "ERROR: {}", e)?;
            for line in e.details() {
                writeln!(err, "ERROR: {}", line)?;
            }
            return Ok(EXIT_NOT_APPLICABLE);
        }
    };

    match opts.format {
        Format::Text => write!(out, "{}", render_text(&result))?,
        Format::Json => {
            let json = render_json(&result).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush()?;
    Ok(EXIT_SUCCESS)
}

/// Entry point shared by the executables.
pub fn main<C: Calculator>() -> i32 {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let stderr = io::stderr();
    exit_code(run::<C, _>(
        args.as_slice(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    ))
}

/// Maps the outcome of [`run`] to a process exit code
pub fn exit_code(result: io::Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            error!(%e, "console write failed");
            EXIT_IO
        }
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use crate::{microstrip::ThinConductorModel, via::ViaModel};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_thin(args: &[&str]) -> (i32, String, String) {
        let mut out = vec![];
        let mut err = vec![];
        let code = run::<ThinConductorModel, _>(args, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_run_defaults() {
        // built-in T/H = 0.01125
        let (code, out, err) = run_thin(&[]);
        assert_eq!(code, EXIT_NOT_APPLICABLE);
        assert!(out.is_empty());
        assert!(err.contains("T/H = 0.01125"));

        let (code, out, err) = run_thin(&["T=5um"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(err.is_empty());
        assert!(out.contains("INDUCTANCE:\t "));
        assert!(out.contains("CAPACITANCE:\t "));
    }

    #[test]
    fn test_run_not_applicable() {
        let (code, out, err) = run_thin(&["T=35um", "H=0.8mm"]);
        assert_eq!(code, EXIT_NOT_APPLICABLE);
        assert!(out.is_empty());
        assert!(err.starts_with("ERROR: T/H < 0.005 does not hold.\n"));
    }

    #[test]
    fn test_run_usage_error() {
        let (code, out, err) = run_thin(&["X=1"]);
        assert_eq!(code, EXIT_USAGE);
        assert!(out.is_empty());
        assert!(err.contains("Unknown parameter: X"));
    }

    #[test]
    fn test_run_help() {
        let (code, out, _) = run_thin(&["--help", "T=oops"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(out.contains("Usage: stray_lc_mstl"));
    }

    #[test]
    fn test_write_failure_exit_code() {
        let mut err = vec![];
        let result = run::<ViaModel, _>(&[] as &[&str], &mut ClosedPipe, &mut err);
        assert!(result.is_err());
        assert_eq!(exit_code(result), EXIT_IO);
        assert_eq!(exit_code(Ok(EXIT_NOT_APPLICABLE)), EXIT_NOT_APPLICABLE);
    }

    #[test]
    fn test_run_json() {
        let mut out = vec![];
        let mut err = vec![];
        let code = run::<ViaModel, _>(&["--json"], &mut out, &mut err).unwrap();
        assert_eq!(code, EXIT_SUCCESS);
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["results"][0]["label"], "INDUCTANCE");
    }
}
