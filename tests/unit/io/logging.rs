//! Tests for log level selection and logger installation

#[cfg(test)]
mod tests {
    use remex::ConversionError;
    use remex::io::logging::{init_logging, level_for};
    use simplelog::LevelFilter;

    // Tests flag combinations map to levels, quiet winning
    // Verified by letting verbose override quiet
    #[test]
    fn test_level_for() {
        assert_eq!(level_for(false, false), LevelFilter::Warn);
        assert_eq!(level_for(false, true), LevelFilter::Info);
        assert_eq!(level_for(true, false), LevelFilter::Error);
        assert_eq!(level_for(true, true), LevelFilter::Error);
    }

    // Tests a second logger installation is reported as an error
    // Verified by ignoring the logger result
    #[test]
    fn test_init_logging_twice() {
        let _first = init_logging(LevelFilter::Off);
        let second = init_logging(LevelFilter::Off);
        assert!(matches!(second, Err(ConversionError::LoggerInit { .. })));
    }
}
