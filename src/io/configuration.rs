//! Dataset constants and runtime configuration defaults

// Packed-image geometry
/// Number of equal-width bands in a real packed image (guide, mask)
pub const REAL_BAND_COUNT: u32 = 2;
/// Number of equal-width bands in a synthetic packed image (style, content, mask)
pub const SYNTHESIS_BAND_COUNT: u32 = 3;

/// Number of synthetic groups paired with each primary sample per retrieval
pub const SYNTHESIS_RATE: usize = 5;

/// Mask activation threshold when suppressing overlapping mask signals
pub const MASK_THRESHOLD: f32 = 0.5;

// Default values for configurable parameters
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Default size images are resized or scaled to before cropping
pub const DEFAULT_LOAD_SIZE: u32 = 286;

/// Default side length of the square crop fed to the training loop
pub const DEFAULT_CROP_SIZE: u32 = 256;

/// File extensions recognized when enumerating a source directory
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp"];

// Preview output settings
/// Default number of samples exported by the preview binary
pub const DEFAULT_PREVIEW_SAMPLES: usize = 8;
