//! # Introduction
//!
//! algotty animates sorting, searching and binary-search-tree algorithms in
//! the terminal. Each algorithm runs once, eagerly, against a copy of its
//! input and records an immutable snapshot before and after every
//! interesting operation. The snapshots are then replayed forward and
//! backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Driver → Steps → Player → Visual rules → TUI
//!                  BST service → BstSession ↗
//! ```
//!
//! 1. [`input`]: parses custom arrays, search targets and tree values.
//! 2. [`algorithms`]: one driver per algorithm; each returns
//!    [`step::Steps`] built with a [`step::StepRecorder`].
//! 3. [`player`]: cursor over a step sequence with timed playback driven by
//!    a single pending deadline.
//! 4. [`bst`]: request/response contract for tree operations, an in-process
//!    service and the session that replays its steps.
//! 5. [`visual`]: ordered precedence rules mapping a step to per-bar and
//!    per-node visual states.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sorts: bubble, selection, merge, quick (Lomuto), shell.
//! Searches: linear, binary (on a sorted copy).
//! Trees: insert, search, delete.

pub mod algorithms;
pub mod bst;
pub mod config;
pub mod errors;
pub mod input;
pub mod logging;
pub mod player;
pub mod step;
pub mod ui;
pub mod visual;
