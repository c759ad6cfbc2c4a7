//! TUI pane rendering modules
//!
//! Every pane is a stateless `render_*` function that draws into a [`Rect`]
//! from borrowed data.
//!
//! - [`bars`]: array values as vertical bars colored by visual state
//! - [`tree`]: the binary search tree with the current step's path
//! - [`pseudocode`]: the selected algorithm's listing with the active line
//! - [`info`]: current action text and step markers
//! - [`status`]: step counter, message, keybindings and playback badge
//!
//! [`Rect`]: ratatui::layout::Rect

pub mod bars;
pub mod info;
pub mod pseudocode;
pub mod status;
pub mod tree;

pub use bars::render_bars_pane;
pub use info::{render_info_pane, step_details};
pub use pseudocode::render_pseudocode_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tree::render_tree_pane;
