//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use younegotiate_domain::YouNegotiateError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub YouNegotiateError);

impl From<InfraError> for YouNegotiateError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<YouNegotiateError> for InfraError {
    fn from(value: YouNegotiateError) -> Self {
        Self(value)
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → YouNegotiateError */
/* -------------------------------------------------------------------------- */

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        use std::io::ErrorKind;

        let error = match value.kind() {
            ErrorKind::NotFound => YouNegotiateError::NotFound(value.to_string()),
            ErrorKind::PermissionDenied => {
                YouNegotiateError::Config(format!("permission denied: {value}"))
            }
            _ => YouNegotiateError::Internal(format!("I/O error: {value}")),
        };
        Self(error)
    }
}

/* -------------------------------------------------------------------------- */
/* Config format errors → YouNegotiateError */
/* -------------------------------------------------------------------------- */

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        Self(YouNegotiateError::Config(format!("Invalid TOML format: {value}")))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        Self(YouNegotiateError::Config(format!("Invalid JSON format: {value}")))
    }
}
