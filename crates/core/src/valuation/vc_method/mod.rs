pub mod vc_method_calculator;
pub mod vc_method_model;


pub use vc_method_calculator::*;
pub use vc_method_model::*;
