//! Terminal Help Center backed by a spreadsheet JSON feed.
//!
//! The pipeline is `feed::load` → `catalog::group` → `catalog::filter`,
//! with `selection` tracking what the sidebar shows and `detail` shaping the
//! selected topic for display.

pub mod app;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod feed;
pub mod icons;
pub mod keybindings;
pub mod links;
pub mod markup;
pub mod selection;
pub mod theme;
pub mod ui;
pub mod util;
