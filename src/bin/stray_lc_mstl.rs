//! Stray L and C of a microstrip line with a negligibly thin conductor.
use straylc::{cli, microstrip::ThinConductorModel};

fn main() {
    std::process::exit(cli::main::<ThinConductorModel>());
}
