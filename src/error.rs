use thiserror::Error;

#[derive(Debug, Error)]
pub enum NatureError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Request error: {0}")]
    RequestError(String),
    #[error("Response error: {0}")]
    ResponseError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<std::io::Error> for NatureError {
    fn from(err: std::io::Error) -> Self {
        NatureError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NatureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NatureError::ResponseError("HTTP 502".into());
        assert_eq!(err.to_string(), "Response error: HTTP 502");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing dir");
        let err: NatureError = io.into();
        assert!(matches!(err, NatureError::IoError(ref msg) if msg == "missing dir"));
    }
}
