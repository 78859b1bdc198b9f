pub mod berkus;
pub mod dcf;
pub mod multiples;
pub mod risk_factor;
pub mod scorecard;
pub mod valuation_model;
pub mod valuation_service;
pub mod vc_method;

pub use berkus::*;
pub use dcf::*;
pub use multiples::*;
pub use risk_factor::*;
pub use scorecard::*;
pub use valuation_model::*;
pub use valuation_service::*;
pub use vc_method::*;
