pub mod calculator;
pub mod cli;
pub mod config;
pub mod consts;
pub mod error;
pub mod microstrip;
pub mod prelude;
pub mod report;
pub mod scale;
pub mod unit;
pub mod util;
pub mod via;
