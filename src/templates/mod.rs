pub mod components;
pub mod layouts;
pub mod pages;
pub mod sections;

// Re-exports for convenience
pub use components::{html_error_response, results_panel};
pub use layouts::site::site_layout;
