//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use gaborsheet::GaborError;
    use gaborsheet::io::error::require_directory;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = GaborError::FileSystem {
            path: "/tmp/sheets".into(),
            operation: "remove transient tile",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("remove transient tile"));
        assert!(message.contains("/tmp/sheets"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = GaborError::InvalidParameter {
            parameter: "size",
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be at least 1"));
        assert!(error.source().is_none());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = GaborError::ImageExport {
            path: PathBuf::from("/restricted/sheet_4x6.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/sheet_4x6.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests Computation error formatting
    // Verified by omitting reason from message
    #[test]
    fn test_computation_error() {
        let error = GaborError::Computation {
            operation: "spatial frequency",
            reason: "division by zero: wavelength is 0".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("spatial frequency"));
        assert!(message.contains("division by zero"));
    }

    // Tests io::Error converts through the question mark operator
    // Verified by removing the From implementation
    #[test]
    fn test_io_error_conversion() {
        fn fails() -> gaborsheet::Result<()> {
            Err(std::io::Error::other("disk full"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, GaborError::FileSystem { .. }));
        assert!(err.to_string().contains("disk full"));
    }

    // Tests missing directories are reported and never created
    // Verified by creating the directory instead of failing
    #[test]
    fn test_require_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(require_directory(temp_dir.path()).is_ok());

        let missing = temp_dir.path().join("sheets");
        let err = require_directory(&missing).unwrap_err();
        match err {
            GaborError::FileSystem { path, source, .. } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => unreachable!("Expected FileSystem error, got {other}"),
        }
        assert!(!missing.exists());
    }

    // Tests a plain file is not accepted as an output directory
    // Verified by checking exists() instead of is_dir()
    #[test]
    fn test_require_directory_rejects_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file = temp_dir.path().join("set");
        std::fs::write(&file, "not a directory").unwrap();

        assert!(require_directory(&file).is_err());
    }
}
