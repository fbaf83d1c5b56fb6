//! Tests for error display formatting, source chaining, and helper constructors

#[cfg(test)]
mod tests {
    use bandpack::io::error::{DatasetError, empty_source_set, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_image_load_display_names_the_path() {
        let source = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = DatasetError::ImageLoad {
            path: PathBuf::from("dataset/train/scene_000.png"),
            source,
        };

        let message = err.to_string();
        assert!(message.contains("scene_000.png"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_parameter_helper_formats_all_parts() {
        let err = invalid_parameter("preprocess", &"sideways", &"unrecognized mode");
        let message = err.to_string();
        assert!(message.contains("preprocess"));
        assert!(message.contains("sideways"));
        assert!(message.contains("unrecognized mode"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_empty_source_set_names_role_and_path() {
        let err = empty_source_set("synthetic", PathBuf::from("dataset/abc"));
        let message = err.to_string();
        assert!(message.contains("synthetic"));
        assert!(message.contains("dataset/abc"));
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = DatasetError::IndexOutOfRange { index: 7, len: 3 };
        let message = err.to_string();
        assert!(message.contains('7'));
        assert!(message.contains('3'));
    }

    #[test]
    fn test_invalid_packed_image_display() {
        let err = DatasetError::InvalidPackedImage {
            path: PathBuf::from("synt_0.png"),
            width: 2,
            bands: 3,
        };
        let message = err.to_string();
        assert!(message.contains("synt_0.png"));
        assert!(message.contains('2'));
        assert!(message.contains('3'));
    }

    #[test]
    fn test_io_error_conversion_keeps_the_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked");
        let err: DatasetError = io.into();
        assert!(matches!(err, DatasetError::FileSystem { .. }));
        assert!(err.source().is_some());
    }
}
