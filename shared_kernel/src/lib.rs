pub mod configuration;
pub mod ids;
pub mod non_empty_string;
pub mod sao_paulo_date_time;
pub mod tracing;
