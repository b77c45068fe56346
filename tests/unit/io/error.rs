//! Tests for error formatting, source chaining and terminal classification

#[cfg(test)]
mod tests {
    use allrgb::AlgorithmError;
    use allrgb::io::error::invalid_parameter;
    use allrgb::spatial::grid::Point;
    use std::error::Error;

    // Tests that only end-of-generation errors are terminal
    // Verified by classifying every error as terminal
    #[test]
    fn test_is_terminal() {
        assert!(AlgorithmError::CanvasFull { capacity: 4 }.is_terminal());
        assert!(AlgorithmError::Cancelled.is_terminal());
        assert!(!AlgorithmError::ServiceClosed.is_terminal());
        assert!(!AlgorithmError::FrontierExhausted { placed: 3 }.is_terminal());
        assert!(
            !AlgorithmError::AlreadyOccupied {
                point: Point::new(1, 1)
            }
            .is_terminal()
        );
    }

    // Tests error source chaining for file system failures
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let error = AlgorithmError::FileSystem {
            path: "/tmp/frame.png".into(),
            operation: "create directory",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("create directory"));
        assert!(AlgorithmError::Cancelled.source().is_none());
    }

    // Tests the invalid parameter helper carries every field
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_message() {
        let message = invalid_parameter("levels", &0, &"must be between 1 and 256").to_string();

        assert!(message.contains("levels"));
        assert!(message.contains('0'));
        assert!(message.contains("must be between 1 and 256"));
    }

    // Tests messages name the offending cell and counts
    // Verified by dropping the coordinates from the message
    #[test]
    fn test_placement_messages() {
        let occupied = AlgorithmError::AlreadyOccupied {
            point: Point::new(3, 7),
        };
        let exhausted = AlgorithmError::FrontierExhausted { placed: 12 };

        assert!(occupied.to_string().contains("(3, 7)"));
        assert!(exhausted.to_string().contains("12"));
    }

    // Tests conversion from I/O errors
    // Verified by mapping to the wrong variant
    #[test]
    fn test_from_io_error() {
        let error = AlgorithmError::from(std::io::Error::other("disk gone"));

        assert!(matches!(error, AlgorithmError::FileSystem { .. }));
    }
}
