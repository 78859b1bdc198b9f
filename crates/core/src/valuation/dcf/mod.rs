pub mod dcf_calculator;
pub mod dcf_model;


pub use dcf_calculator::*;
pub use dcf_model::*;
