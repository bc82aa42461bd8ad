use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    // Any unsuccessful exchange with the backend: connectivity failure,
    // non-success status or a body that does not decode. Callers treat
    // every cause the same way.
    Request {
        message: String,
        status: Option<u16>,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
    },
    Configuration {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
    },
}

impl LibraryError {
    pub fn request(message: &str, status: Option<u16>) -> LibraryError {
        LibraryError::Request { message: message.to_string(), status }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str) -> LibraryError {
        LibraryError::Validation { message: message.to_string() }
    }

    pub fn configuration(message: &str) -> LibraryError {
        LibraryError::Configuration { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str) -> LibraryError {
        LibraryError::Runtime { message: message.to_string() }
    }

    // status code of the failed response, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            LibraryError::Request { status, .. } => { *status }
            LibraryError::NotFound { .. } => { Some(404) }
            LibraryError::Validation { .. } => { Some(400) }
            LibraryError::Configuration { .. } => { None }
            LibraryError::Serialization { .. } => { None }
            LibraryError::Runtime { .. } => { None }
        }
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        LibraryError::request(
            format!("request failed {:?}", err).as_str(), status)
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Request { message, status } => {
                write!(f, "{} {:?}", message, status)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Configuration { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library client.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_create_request_error() {
        assert!(matches!(LibraryError::request("test", Some(500)), LibraryError::Request{ message: _, status: Some(500) }));
        assert!(matches!(LibraryError::request("test", None), LibraryError::Request{ message: _, status: None }));
    }

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test"), LibraryError::Validation{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_configuration_error() {
        assert!(matches!(LibraryError::configuration("test"), LibraryError::Configuration{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test"), LibraryError::Runtime{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let err = serde_json::from_str::<Vec<String>>("not json").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_report_status() {
        assert_eq!(Some(503), LibraryError::request("test", Some(503)).status());
        assert_eq!(None, LibraryError::request("test", None).status());
        assert_eq!(Some(404), LibraryError::not_found("test").status());
        assert_eq!(Some(400), LibraryError::validation("test").status());
        assert_eq!(None, LibraryError::runtime("test").status());
    }

    #[tokio::test]
    async fn test_should_format_error() {
        assert_eq!("boom Some(500)", LibraryError::request("boom", Some(500)).to_string());
        assert_eq!("missing", LibraryError::not_found("missing").to_string());
    }
}
