//! Paired packed-band dataset loading and augmentation for inpainting training
//!
//! The crate pairs two data sources, real photographs packed side by side with
//! their inpainting masks and synthetically rendered triplets, into normalized
//! tensors consumable by an external training loop. Retrieval splits each
//! packed image into its semantic bands, applies one shared geometric
//! transform per image group, and composites the results.

#![forbid(unsafe_code)]

/// Dataset construction, path enumeration, and composite sample assembly
pub mod dataset;
/// Input/output operations, configuration constants, and error handling
pub mod io;
/// Tensor conversion and compositing arithmetic
pub mod tensor;
/// Geometric parameter sampling and the transform pipeline builder
pub mod transform;

pub use io::error::{DatasetError, Result};
