//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, playback ticks and
//!   the text prompts for arrays, targets and tree values
//! - **[`panes`]**: stateless render functions for each visible pane (bars or
//!   tree, pseudocode, step info, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it from a
//! [`Config`] and a BST service, then call [`App::run`] to start the event
//! loop.
//!
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
