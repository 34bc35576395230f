//! Stray L and C of a microstrip line, corrected for conductor thickness.
use straylc::{cli, microstrip::ThicknessCorrectedModel};

fn main() {
    std::process::exit(cli::main::<ThicknessCorrectedModel>());
}
