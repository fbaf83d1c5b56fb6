//! Dataset construction and composite sample assembly
//!
//! This module contains the dataset-facing surface:
//! - Loader options and source directory descriptors
//! - Sorted path enumeration
//! - The composite assembler pairing real and synthetic sources

/// Loader options, preprocessing modes, and source directories
pub mod options;
/// Sorted enumeration of image files within a source directory
pub mod paths;
/// The composite sample assembler
pub mod transfer;
