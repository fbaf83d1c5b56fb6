//! Elementwise compositing operations

use crate::tensor::Tensor;
use ndarray::Zip;

/// Remap a normalized `[-1, 1]` tensor into `[0, 1]` via `(v + 1) * 0.5`
///
/// Applied to mask bands after the shared pipeline, whose normalization
/// stage targets the image range.
pub fn remap_unit(tensor: &Tensor) -> Tensor {
    tensor.mapv(|v| (v + 1.0) * 0.5)
}

/// Alpha-blend `overlay` into `base` weighted by `mask`
///
/// Computes `base * (1 - mask) + overlay * mask` per element, in the
/// normalized tensor domain. Where the mask is 0 the result equals `base`
/// exactly; where it is 1, `overlay` exactly.
///
/// # Panics
///
/// Panics if the three tensors do not share a shape.
pub fn alpha_blend(base: &Tensor, overlay: &Tensor, mask: &Tensor) -> Tensor {
    Zip::from(base)
        .and(overlay)
        .and(mask)
        .map_collect(|&b, &o, &m| b * (1.0 - m) + o * m)
}

/// Zero every element of `tensor` where `mask` exceeds `threshold`
///
/// Suppresses the blend mask wherever the primary scene already carries a
/// mask, preventing overlapping mask signals.
///
/// # Panics
///
/// Panics if the tensors do not share a shape.
pub fn masked_fill(tensor: &Tensor, mask: &Tensor, threshold: f32) -> Tensor {
    Zip::from(tensor)
        .and(mask)
        .map_collect(|&v, &m| if m > threshold { 0.0 } else { v })
}
