pub mod csv_exporter;
pub mod export_model;
pub mod export_service;
pub mod json_exporter;
pub mod text_exporter;
pub mod xml_exporter;


pub use export_model::*;
pub use export_service::*;
