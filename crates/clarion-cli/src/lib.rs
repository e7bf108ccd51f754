//! Command-line front end for the Clarion request analyzer.
//!
//! Loads configuration, hands a single request to the engine and renders the
//! resulting record as text or JSON. All decision logic lives in `clarion-core`.

/// Command-line argument definitions.
pub mod cli;
/// Command handlers.
pub mod handlers;
/// Text rendering of analysis records.
pub mod render;
