pub mod html;
pub mod json;
pub mod static_files;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::{html_response, text_response};
pub use json::json_response;
pub use static_files::static_file_response;
