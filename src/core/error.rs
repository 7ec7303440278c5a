// src/core/error.rs

use std::fmt;

#[derive(Debug)]
pub enum HelloError {
    Config(String),
    Sink(String),
}

impl fmt::Display for HelloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelloError::Config(msg) => write!(f, "Configuration error: {}", msg),
            HelloError::Sink(msg) => write!(f, "Log sink error: {}", msg),
        }
    }
}

impl std::error::Error for HelloError {}

impl From<std::io::Error> for HelloError {
    fn from(err: std::io::Error) -> Self {
        HelloError::Sink(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_sink() {
        let err: HelloError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, HelloError::Sink(_)));
        assert_eq!(err.to_string(), "Log sink error: pipe closed");
    }
}
