pub mod history_model;


pub use history_model::*;
