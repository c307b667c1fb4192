//! Evoplot - a terminal-based scatter viewer for genetic-algorithm fitness logs.
//!
//! Evoplot reads a plain-text log of fitness values written by an external
//! genetic-algorithm run (one generation per line, one individual per column)
//! and renders a scatter plot of fitness score versus generation number in an
//! interactive terminal viewer.
//!
//! # Features
//!
//! - Whitespace-separated fitness log reading with `#` comments
//! - Scatter chart with one colored series per individual
//! - Generation cursor with a min/max/mean readout
//! - Vim-style keyboard shortcuts
//! - Gruvbox color theme
//!
//! # Example
//!
//! ```ignore
//! use evoplot::data::load_matrix;
//! use std::path::Path;
//!
//! // Load the first 25 generations of a fitness log
//! let matrix = load_matrix(Path::new("pop10_gen500.txt"), 25)?;
//! println!(
//!     "{} generations of {} individuals",
//!     matrix.generations(),
//!     matrix.population()
//! );
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod ui;
pub mod util;

pub use error::{EvoplotError, Result};
