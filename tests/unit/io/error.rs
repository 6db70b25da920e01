//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use pixel_entropy::EntropyError;
    use pixel_entropy::io::error::{WithPath, invalid_parameter};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let error = EntropyError::from(image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        )));

        assert!(error.source().is_some());
        assert!(EntropyError::EmptyStream.source().is_none());
    }

    // Tests missing input names the offending path
    // Verified by omitting the path from the message
    #[test]
    fn test_input_not_found_error() {
        let error = EntropyError::InputNotFound {
            path: PathBuf::from("missing.png"),
        };
        assert_eq!(error.to_string(), "Invalid image 'missing.png'");
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("method", &5, &"unknown traversal method");

        let message = error.to_string();
        assert!(message.contains("method"));
        assert!(message.contains('5'));
        assert!(message.contains("unknown traversal method"));
    }

    // Tests traversal error messages carry coordinates and counts
    // Verified by swapping x and y in the message
    #[test]
    fn test_traversal_error_messages() {
        let bounds = EntropyError::TraversalOutOfBounds {
            coordinate: (4, 1),
            dimensions: (3, 2),
        };
        assert_eq!(bounds.to_string(), "Invalid image access [4,1] outside 3x2");

        let duplicate = EntropyError::TraversalDuplicate { coordinate: (0, 0) };
        assert!(duplicate.to_string().contains("[0,0]"));

        let incomplete = EntropyError::TraversalIncomplete {
            visited: 3,
            expected: 4,
        };
        assert!(incomplete.to_string().contains("3 of 4"));
    }

    // Tests only traversal failures are classified as traversal errors
    // Verified by classifying every error as traversal error
    #[test]
    fn test_is_traversal_error() {
        assert!(EntropyError::TraversalDuplicate { coordinate: (1, 1) }.is_traversal_error());
        assert!(
            EntropyError::TraversalIncomplete {
                visited: 0,
                expected: 1
            }
            .is_traversal_error()
        );
        assert!(!EntropyError::EmptyStream.is_traversal_error());
        assert!(!invalid_parameter("method", &2, &"unknown").is_traversal_error());
    }

    // Tests decode errors pick up the input path
    // Verified by leaving the placeholder path in place
    #[test]
    fn test_with_path_on_image_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "truncated",
        ));
        let result: Result<(), image::ImageError> = Err(image_error);

        let error = result.with_path(Path::new("input.png")).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("input.png"), "{message}");
        assert!(message.contains("truncated"), "{message}");
        assert!(error.source().is_some());
    }

    // Tests errors without a path are passed through untouched
    // Verified by overwriting the path of every error variant
    #[test]
    fn test_with_path_leaves_other_errors() {
        let result: Result<(), EntropyError> = Err(EntropyError::InputNotFound {
            path: PathBuf::from("given.png"),
        });

        let error = result.with_path(Path::new("other.png")).unwrap_err();
        assert_eq!(error.to_string(), "Invalid image 'given.png'");
    }

    // Tests sink lifecycle messages name operation and state
    // Verified by omitting the state from the message
    #[test]
    fn test_sink_state_error() {
        let error = EntropyError::SinkState {
            operation: "report entropy",
            state: "open",
        };
        assert_eq!(error.to_string(), "Entropy sink cannot report entropy while open");
    }
}
