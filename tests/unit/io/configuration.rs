//! Sanity checks over crate constants and configured defaults

#[cfg(test)]
mod tests {
    use bandpack::io::configuration::{
        DEFAULT_CROP_SIZE, DEFAULT_LOAD_SIZE, IMAGE_EXTENSIONS, MASK_THRESHOLD, REAL_BAND_COUNT,
        SYNTHESIS_BAND_COUNT, SYNTHESIS_RATE,
    };

    #[test]
    fn test_band_counts_match_packed_layouts() {
        assert_eq!(REAL_BAND_COUNT, 2);
        assert_eq!(SYNTHESIS_BAND_COUNT, 3);
    }

    #[test]
    fn test_synthesis_rate_is_positive() {
        assert!(SYNTHESIS_RATE > 0);
    }

    #[test]
    fn test_crop_fits_within_load_size() {
        assert!(DEFAULT_CROP_SIZE <= DEFAULT_LOAD_SIZE);
    }

    #[test]
    fn test_mask_threshold_is_a_proper_fraction() {
        assert!(MASK_THRESHOLD > 0.0);
        assert!(MASK_THRESHOLD < 1.0);
    }

    #[test]
    fn test_extensions_are_lowercase_and_include_png() {
        assert!(IMAGE_EXTENSIONS.contains(&"png"));
        for ext in IMAGE_EXTENSIONS {
            assert_eq!(ext, ext.to_ascii_lowercase());
        }
    }
}
