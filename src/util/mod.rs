//! Small helpers shared by the UI and the CLI.
//!
//! - **Text**: Unicode-aware width and truncation, control-char stripping
//! - **URLs**: scheme checks for the feed endpoint and for opened media links

mod text;
mod url_validator;

pub use text::{display_width, strip_control_chars, truncate_to_width};
pub use url_validator::{validate_endpoint, validate_url_for_open, UrlValidationError};

/// Maximum search query length accepted from the search line.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 256;
