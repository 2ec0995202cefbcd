//! Terminal user interface.
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard dispatch through the keybinding registry
//! - `events` - Background task results
//! - `render` - Frame layout
//! - `sidebar` - Search line and category tree
//! - `detail` - Selected topic
//! - `status` - Status bar
//! - `help` - Keybinding overlay
//! - `helpers` - Background task spawning

mod detail;
mod events;
mod help;
mod helpers;
mod input;
mod loop_runner;
mod render;
mod sidebar;
mod status;

pub use loop_runner::{run, Action};
