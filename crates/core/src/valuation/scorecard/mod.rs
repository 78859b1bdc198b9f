pub mod scorecard_calculator;
pub mod scorecard_model;

#[cfg(test)]
mod scorecard_calculator_tests;

pub use scorecard_calculator::*;
pub use scorecard_model::*;
