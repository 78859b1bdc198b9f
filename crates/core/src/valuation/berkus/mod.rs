pub mod berkus_calculator;
pub mod berkus_model;

#[cfg(test)]
mod berkus_calculator_tests;

pub use berkus_calculator::*;
pub use berkus_model::*;
