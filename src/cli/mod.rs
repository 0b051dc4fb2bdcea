// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for reading resistors.
//!
//! This module contains the command-line interface logic, including argument parsing
//! and the `predict` and `decode` command implementations.

// Modules
/// CLI arguments.
pub mod args;

/// Band decoding logic.
pub mod decode;

/// Terminal output helpers and logging macros.
pub mod logging;

/// Prediction logic.
pub mod predict;
