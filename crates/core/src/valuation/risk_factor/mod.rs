pub mod risk_factor_calculator;
pub mod risk_factor_model;


pub use risk_factor_calculator::*;
pub use risk_factor_model::*;
