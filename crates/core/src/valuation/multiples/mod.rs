pub mod multiples_calculator;
pub mod multiples_model;
pub mod sector_data;

#[cfg(test)]
mod multiples_calculator_tests;

pub use multiples_calculator::*;
pub use multiples_model::*;
pub use sector_data::*;
