pub mod controls;
pub mod error_message;
pub mod header;
pub mod results_panel;
pub mod upload_area;
