//! Stray inductance of a via.
use straylc::{cli, via::ViaModel};

fn main() {
    std::process::exit(cli::main::<ViaModel>());
}
