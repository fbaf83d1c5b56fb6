//! Input/output operations and error handling
//!
//! This module groups the crate's interface with the outside world:
//! - Packed-image loading and band splitting
//! - Error types shared across the crate
//! - Configuration constants
//! - The preview command line and its progress reporting

/// Command-line interface for previewing dataset samples
pub mod cli;
/// Crate-wide constants and configurable defaults
pub mod configuration;
/// Error types and context helpers for dataset operations
pub mod error;
/// Packed-image loading and equal-width band splitting
pub mod image;
/// Progress display and the once-only size adjustment recorder
pub mod progress;
