//! Tests for packed-image loading and band splitting

#[cfg(test)]
mod tests {
    use bandpack::io::error::DatasetError;
    use bandpack::io::image::{load_packed, split_bands, split_pair, split_triplet};
    use image::{DynamicImage, GenericImageView, GrayImage, Luma};
    use std::path::Path;

    // Bands are told apart by constant gray levels
    fn packed(values: &[u8], band_width: u32, height: u32) -> DynamicImage {
        let width = band_width * values.len() as u32;
        DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, _| {
            let band = (x / band_width) as usize;
            Luma([values.get(band).copied().unwrap_or(0)])
        }))
    }

    fn probe(image: &DynamicImage) -> u8 {
        image.get_pixel(0, 0).0[0]
    }

    #[test]
    fn test_even_width_splits_into_equal_bands() {
        let img = packed(&[10, 20], 256, 128);
        let bands = split_bands(&img, 2, Path::new("even.png")).unwrap_or_default();

        assert_eq!(bands.len(), 2);
        for band in &bands {
            assert_eq!(band.dimensions(), (256, 128));
        }
    }

    #[test]
    fn test_odd_width_gives_the_remainder_to_the_last_band() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(511, 64));
        let bands = split_bands(&img, 2, Path::new("odd.png")).unwrap_or_default();

        assert_eq!(bands.len(), 2);
        let widths: Vec<u32> = bands.iter().map(|b| b.dimensions().0).collect();
        assert_eq!(widths, vec![255, 256]);
    }

    #[test]
    fn test_width_divisible_by_three_splits_into_equal_triplet() {
        let img = packed(&[10, 20, 30], 256, 64);
        let bands = split_bands(&img, 3, Path::new("triplet.png")).unwrap_or_default();

        assert_eq!(bands.len(), 3);
        for band in &bands {
            assert_eq!(band.dimensions(), (256, 64));
        }
    }

    #[test]
    fn test_zero_bands_is_rejected() {
        let img = packed(&[10], 16, 16);
        let result = split_bands(&img, 0, Path::new("zero.png"));
        assert!(matches!(
            result,
            Err(DatasetError::InvalidPackedImage { bands: 0, .. })
        ));
    }

    #[test]
    fn test_width_narrower_than_band_count_is_rejected() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(2, 16));
        let result = split_bands(&img, 3, Path::new("narrow.png"));
        assert!(matches!(
            result,
            Err(DatasetError::InvalidPackedImage { width: 2, bands: 3, .. })
        ));
    }

    #[test]
    fn test_pair_split_orders_guide_before_mask() {
        let img = packed(&[10, 20], 64, 32);
        let (guide, mask) = split_pair(&img, Path::new("pair.png")).expect("split");

        assert_eq!(probe(&guide), 10);
        assert_eq!(probe(&mask), 20);
    }

    #[test]
    fn test_triplet_split_orders_style_content_mask() {
        let img = packed(&[10, 20, 30], 64, 32);
        let (style, content, mask) = split_triplet(&img, Path::new("triplet.png")).expect("split");

        assert_eq!(probe(&style), 10);
        assert_eq!(probe(&content), 20);
        assert_eq!(probe(&mask), 30);
    }

    #[test]
    fn test_loading_a_missing_file_is_an_image_load_error() {
        let result = load_packed(Path::new("definitely/not/here.png"));
        assert!(matches!(result, Err(DatasetError::ImageLoad { .. })));
    }
}
