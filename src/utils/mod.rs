//! Utility functions and helpers for the Contentful client.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization and credential redaction.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
