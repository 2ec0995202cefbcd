//! Help article feed.
//!
//! The feed is a JSON array exported from a spreadsheet, one flat object per
//! row. This module owns the wire shape and the single fetch of it:
//!
//! - [`row`] - Lenient deserialization of a sheet row into [`ArticleRow`]
//! - [`loader`] - HTTP retrieval with a bounded body and [`FetchError`]
//!
//! # Example
//!
//! ```ignore
//! use helpdesk::feed::{build_client, load, DEFAULT_ENDPOINT};
//!
//! let client = build_client()?;
//! let rows = load(&client, DEFAULT_ENDPOINT).await?;
//! ```

mod loader;
mod row;

pub use loader::{build_client, load, FetchError, DEFAULT_ENDPOINT};
pub use row::{split_image_urls, ArticleRow};
