//! Preview progress display and the once-only size adjustment recorder

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{LazyLock, OnceLock};
use std::time::Duration;

static SAMPLE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Samples: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for preview runs over a known number of samples
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized for `total` samples
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(SAMPLE_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Advance one sample, displaying its name
    pub fn advance(&self, name: &str) {
        self.bar.set_message(name.to_owned());
        self.bar.inc(1);
    }

    /// Print a line above the bar without disturbing it
    pub fn println(&self, message: &str) {
        self.bar.println(message);
    }

    /// Complete the bar
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}

/// A recorded width-preserving scale adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeAdjustment {
    /// Natural (width, height) of the source image
    pub original: (u32, u32),
    /// (width, height) the image was actually scaled to
    pub adjusted: (u32, u32),
}

/// Once-only recorder for scale adjustments
///
/// The width-preserving scale floors the proportional height at the crop
/// size. That adjustment applies uniformly, so only the first occurrence is
/// worth surfacing; callers query [`SizeWarning::get`] after a run instead of
/// relying on hidden print-once state inside the transform code.
#[derive(Debug, Default)]
pub struct SizeWarning {
    adjustment: OnceLock<SizeAdjustment>,
}

impl SizeWarning {
    /// Create an empty recorder
    #[must_use]
    pub const fn new() -> Self {
        Self {
            adjustment: OnceLock::new(),
        }
    }

    /// Record an adjustment; only the first record is kept
    pub fn record(&self, original: (u32, u32), adjusted: (u32, u32)) {
        self.adjustment
            .set(SizeAdjustment {
                original,
                adjusted,
            })
            .ok();
    }

    /// The first recorded adjustment, if any
    pub fn get(&self) -> Option<SizeAdjustment> {
        self.adjustment.get().copied()
    }

    /// Human-readable summary of the first recorded adjustment
    pub fn message(&self) -> Option<String> {
        self.get().map(|adjustment| {
            format!(
                "Scaled image height was floored at the crop size: ({}, {}) -> ({}, {}); \
                 the same adjustment applies to every undersized image",
                adjustment.original.0,
                adjustment.original.1,
                adjustment.adjusted.0,
                adjustment.adjusted.1
            )
        })
    }
}
