//! Tensor conversion and compositing arithmetic
//!
//! Tensors are dense `(channels, height, width)` arrays of `f32`. Image
//! tensors are normalized to `[-1, 1]`; mask tensors are remapped to
//! `[0, 1]` before compositing.

/// Conversion between images and normalized tensors
pub mod convert;
/// Elementwise compositing operations
pub mod ops;

/// Dense multi-dimensional tensor in `(channels, height, width)` layout
pub type Tensor = ndarray::Array3<f32>;
