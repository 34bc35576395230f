use crate::{config::Configurable, error::StrayError, report::Report};
use std::fmt;

/// A closed-form stray element model: fixed inputs in, one result or one
/// named applicability failure out.
pub trait Calculator {
    type Input: Configurable + Clone + fmt::Debug;
    type Output: Report;

    /// Executable name used in usage text
    const NAME: &'static str;
    /// One-line description used in usage text
    const ABOUT: &'static str;

    /// Parameters used when nothing is overridden
    fn defaults() -> Self::Input;

    fn calculate(input: &Self::Input) -> Result<Self::Output, StrayError>;
}
