//! Random crop offset and flip flag sampling

use crate::dataset::options::LoaderOptions;
use rand::Rng;
use rand::rngs::StdRng;

/// Spatial transform parameters shared across the bands of one packed image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformParams {
    /// Top-left crop offset within the resized image
    pub crop_pos: (u32, u32),
    /// Mirror the image left-to-right
    pub flip_horizontal: bool,
    /// Mirror the image top-to-bottom
    ///
    /// Reserved: the sampler never sets this, but pipelines honor it when
    /// parameters are constructed by hand.
    pub flip_vertical: bool,
}

/// Dimensions an image will have after the sizing stage for `options`
///
/// Isotropic resize yields a `load_size` square; the width-preserving scale
/// yields `load_size` width with proportionally floored height. Modes without
/// a sizing stage keep the natural size.
#[must_use]
pub const fn resized_dims(options: &LoaderOptions, size: (u32, u32)) -> (u32, u32) {
    let (w, h) = size;
    if options.preprocess.has_resize() {
        (options.load_size, options.load_size)
    } else if options.preprocess.has_scale_width() {
        let new_h = (options.load_size as u64 * h as u64 / w as u64) as u32;
        (options.load_size, new_h)
    } else {
        (w, h)
    }
}

/// Sample transform parameters for an image of natural size `size`
///
/// The crop offset is uniform over `[0, max(0, resized - crop_size)]` in each
/// dimension (inclusive bounds); the horizontal flip is a fair coin. Call
/// once per packed image and reuse the result for every band, so crops and
/// flips stay aligned between an image and its mask.
pub fn sample(options: &LoaderOptions, size: (u32, u32), rng: &mut StdRng) -> TransformParams {
    let (new_w, new_h) = resized_dims(options, size);

    let max_x = new_w.saturating_sub(options.crop_size);
    let max_y = new_h.saturating_sub(options.crop_size);
    let x = rng.random_range(0..=max_x);
    let y = rng.random_range(0..=max_y);

    TransformParams {
        crop_pos: (x, y),
        flip_horizontal: rng.random_bool(0.5),
        flip_vertical: false,
    }
}
